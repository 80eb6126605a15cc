// Defaults shared by the CLI and the terminal UI

/// Time between two steps while auto-play is active
pub const DEFAULT_PLAY_INTERVAL_MS: u64 = 500;

/// Minimum gap between two space presses before auto-play toggles again
pub const SPACE_DEBOUNCE_MS: u64 = 200;

/// How long the event loop waits for a key before redrawing
pub const EVENT_POLL_MS: u64 = 50;

/// Longest input a generator accepts; every step stores a copy of the data
pub const MAX_INPUT_LEN: usize = 100;

/// Input sizes plotted on the growth chart
pub const CHART_INPUT_SIZES: [u32; 4] = [10, 100, 1_000, 10_000];

/// Sample data used by the sorting entries of the catalog
pub const SORT_SAMPLE: [i64; 7] = [64, 34, 25, 12, 22, 11, 90];

/// Sorted sample data used by the searching entries of the catalog
pub const SEARCH_SAMPLE: [i64; 7] = [11, 12, 22, 25, 34, 64, 90];

/// Default search target
pub const SEARCH_TARGET: i64 = 34;
