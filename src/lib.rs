//! # Introduction
//!
//! algoviz generates the complete step trace of a sorting or searching
//! algorithm up front, then plays it back one step at a time in a terminal UI
//! built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Catalog → Selection → Generator → StepSequence → StepPlayer → PresentationAdapter
//! ```
//!
//! 1. [`algorithm`]: the catalog of algorithms with their descriptions, code
//!    snippets and complexity labels.
//! 2. [`steps`]: pure generators that turn an input into an immutable
//!    [`steps::StepSequence`], each step carrying a data snapshot.
//! 3. [`player`]: [`player::StepPlayer`] walks a shared sequence and hands each
//!    step to a [`player::PresentationAdapter`].
//! 4. [`session`]: selection handling that ties the three together.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported algorithms
//!
//! Sorting: bubble, quick (Lomuto, last element as pivot), merge (top-down,
//! stable), insertion, selection.
//! Searching: binary (sorted input), linear.
//! Graph: depth-first search is listed for reference only.

pub mod algorithm;
pub mod constants;
pub mod error;
pub mod player;
pub mod session;
pub mod steps;
pub mod ui;

pub use error::{PresentationError, VizError};
