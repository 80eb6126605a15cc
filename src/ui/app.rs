//! Main TUI application state and logic

use crate::constants::{EVENT_POLL_MS, SPACE_DEBOUNCE_MS};
use crate::error::{PresentationError, VizError};
use crate::player::{PresentationAdapter, StepPlayer};
use crate::session::Session;
use crate::steps::{Step, StepKind};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// What the player last told the UI; this is the presentation adapter
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StepView {
    /// Data as of the last applied step
    pub data: Vec<i64>,
    pub highlight: Vec<usize>,
    pub kind: Option<StepKind>,
    /// Index of the last applied step
    pub current: Option<usize>,
    pub total: usize,
}

impl StepView {
    /// Forget all playback progress and show `data` unhighlighted
    pub fn clear(&mut self, data: &[i64], total: usize) {
        self.data = data.to_vec();
        self.highlight.clear();
        self.kind = None;
        self.current = None;
        self.total = total;
    }

    /// Show exactly what `player` has applied so far, without replaying
    pub fn sync_to(&mut self, player: &StepPlayer) {
        self.data = player.current_data().to_vec();
        self.highlight = player.current_highlight().to_vec();
        self.kind = player.current_step().map(|step| step.kind);
        self.current = player.position().checked_sub(1);
        self.total = player.len();
    }
}

impl PresentationAdapter for StepView {
    fn on_step(&mut self, step: &Step, index: usize, total: usize) -> Result<(), PresentationError> {
        // Index 0 always starts a fresh playback; anything else must follow on
        let expected = self.current.map_or(0, |c| c + 1);
        if index != 0 && index != expected {
            return Err(PresentationError::new(format!(
                "step {} arrived while expecting step {}",
                index, expected
            )));
        }

        if let Some(data) = &step.data_snapshot {
            self.data.clone_from(data);
        }
        self.highlight.clone_from(&step.highlight_indices);
        self.kind = Some(step.kind);
        self.current = Some(index);
        self.total = total;
        Ok(())
    }
}

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Menu,
    Steps,
    Code,
}

impl FocusedPane {
    /// Move focus to the next pane (menu -> steps -> code)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Menu => FocusedPane::Steps,
            FocusedPane::Steps => FocusedPane::Code,
            FocusedPane::Code => FocusedPane::Menu,
        }
    }
}

/// What the lower-left pane shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Complexity,
    Steps,
}

/// The main application state
pub struct App {
    pub session: Session,

    /// What the player has applied so far
    pub view: StepView,

    pub focused_pane: FocusedPane,
    pub view_mode: ViewMode,

    /// Catalog position under the menu cursor
    pub menu_cursor: usize,

    pub steps_scroll: super::panes::StepsScrollState,
    pub code_scroll: usize,

    pub should_quit: bool,
    pub status_message: String,
    pub status_is_error: bool,

    pub is_playing: bool,
    pub play_interval: Duration,
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create the app; if the session already has a selection it is shown
    pub fn new(session: Session, play_interval: Duration) -> Self {
        let menu_cursor = session
            .current()
            .and_then(|sel| session.catalog().position(sel.kind()))
            .unwrap_or(0);
        let mut app = App {
            session,
            view: StepView::default(),
            focused_pane: FocusedPane::Menu,
            view_mode: ViewMode::Complexity,
            menu_cursor,
            steps_scroll: Default::default(),
            code_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
            is_playing: false,
            play_interval,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        };
        app.sync_view();
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_play_time.elapsed() >= self.play_interval {
                self.tick_play();
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// One auto-play tick
    pub fn tick_play(&mut self) {
        match self.session.on_step(&mut self.view) {
            Ok(true) => self.set_status("Playing..."),
            Ok(false) => {
                self.is_playing = false;
                self.set_status("Playback complete");
            }
            Err(e) => {
                self.is_playing = false;
                self.set_error(&e);
            }
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(main_chunks[0]);

        // Left column: Menu (top) | About (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(14), Constraint::Min(0)])
            .split(columns[0]);

        // Right column: Bars (top) | Steps or Complexity + Code (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(columns[1]);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(right_rows[1]);

        let selection = self.session.current();
        let info = selection.map(|sel| sel.info());

        super::panes::render_menu_pane(
            frame,
            left_rows[0],
            self.session.catalog(),
            self.menu_cursor,
            selection.map(|sel| sel.kind()),
            self.focused_pane == FocusedPane::Menu,
        );

        super::panes::render_info_pane(
            frame,
            left_rows[1],
            info,
            outline_progress(
                info.map_or(0, |i| i.outline.len()),
                self.view.current,
                self.view.total,
            ),
            false,
        );

        super::panes::render_bars_pane(
            frame,
            right_rows[0],
            super::panes::BarsRenderData {
                data: &self.view.data,
                highlight: &self.view.highlight,
                kind: self.view.kind,
                target: selection.and_then(|sel| sel.target()),
            },
            false,
        );

        match self.view_mode {
            ViewMode::Steps => super::panes::render_steps_pane(
                frame,
                bottom[0],
                selection.map(|sel| sel.sequence().as_ref()),
                self.view.current,
                self.focused_pane == FocusedPane::Steps,
                &mut self.steps_scroll,
            ),
            ViewMode::Complexity => super::panes::render_complexity_pane(
                frame,
                bottom[0],
                info,
                self.focused_pane == FocusedPane::Steps,
            ),
        }

        super::panes::render_code_pane(
            frame,
            bottom[1],
            info.map_or("", |i| i.code_snippet),
            self.focused_pane == FocusedPane::Code,
            &mut self.code_scroll,
        );

        let player = selection.map(|sel| sel.player());
        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            super::panes::StatusRenderData {
                message: &self.status_message,
                position: player.map_or(0, |p| p.position()),
                total: player.map_or(0, |p| p.len()),
                state: player.map(|p| p.state()),
                is_playing: self.is_playing,
                is_error: self.status_is_error,
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    match self.session.on_step(&mut self.view) {
                        Ok(true) => stepped += 1,
                        Ok(false) => break,
                        Err(e) => {
                            self.set_error(&e);
                            return;
                        }
                    }
                }
                self.set_status(format!("Stepped forward {} step(s)", stepped));
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Char('v') | KeyCode::Char('V') => {
                self.view_mode = match self.view_mode {
                    ViewMode::Complexity => ViewMode::Steps,
                    ViewMode::Steps => ViewMode::Complexity,
                };
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right | KeyCode::Char('n') => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Menu => {
                    self.menu_cursor = self.menu_cursor.saturating_sub(1);
                }
                FocusedPane::Steps => {
                    self.steps_scroll.offset = self.steps_scroll.offset.saturating_sub(1);
                }
                FocusedPane::Code => {
                    self.code_scroll = self.code_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Menu => {
                    let last = self.session.catalog().len().saturating_sub(1);
                    self.menu_cursor = (self.menu_cursor + 1).min(last);
                }
                FocusedPane::Steps => {
                    self.steps_scroll.offset = self.steps_scroll.offset.saturating_add(1);
                }
                FocusedPane::Code => {
                    self.code_scroll = self.code_scroll.saturating_add(1);
                }
            },
            KeyCode::Enter if self.focused_pane == FocusedPane::Menu => {
                self.select_at_cursor();
            }
            KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => {
                self.is_playing = false;
                self.run_to_end();
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (debounced to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(SPACE_DEBOUNCE_MS) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Backspace | KeyCode::Char('r') | KeyCode::Char('R') => {
                self.is_playing = false;
                self.reset();
            }
            _ => {}
        }
    }

    /// Select the algorithm under the menu cursor
    pub fn select_at_cursor(&mut self) {
        let Some(id) = self.session.catalog().at(self.menu_cursor).map(|i| i.kind.id()) else {
            return;
        };
        self.is_playing = false;
        match self.session.select(id) {
            Ok(selection) => {
                let message = format!("Selected {}", selection.info().name);
                self.sync_view();
                self.steps_scroll = Default::default();
                self.code_scroll = 0;
                self.set_status(message);
            }
            Err(e) => self.set_error(&e),
        }
    }

    fn toggle_play(&mut self) {
        if self.session.current().is_none() {
            self.set_status("Select an algorithm first");
            return;
        }
        self.is_playing = !self.is_playing;
        if self.is_playing {
            if self
                .session
                .current()
                .is_some_and(|sel| sel.player().is_at_end())
            {
                self.reset();
            }
            self.last_play_time = Instant::now()
                .checked_sub(self.play_interval)
                .unwrap_or(Instant::now());
            self.set_status("Playing...");
        } else {
            self.set_status("Paused");
        }
    }

    fn step_forward(&mut self) {
        match self.session.on_step(&mut self.view) {
            Ok(true) => {
                let message = self
                    .view
                    .current
                    .and_then(|i| self.session.current()?.sequence().get(i))
                    .map(|step| step.description.clone())
                    .unwrap_or_else(|| "Stepped forward".to_string());
                self.set_status(message);
            }
            Ok(false) if self.session.current().is_none() => {
                self.set_status("Select an algorithm first");
            }
            Ok(false) => self.set_status("Cannot step forward: no more steps"),
            Err(e) => self.set_error(&e),
        }
    }

    fn step_backward(&mut self) {
        match self.session.on_back(&mut self.view) {
            Ok(true) => {
                // Back at position 0 nothing was replayed
                if self
                    .session
                    .current()
                    .is_some_and(|sel| sel.player().position() == 0)
                {
                    self.sync_view();
                }
                self.set_status("Stepped backward");
            }
            Ok(false) => self.set_status("Cannot step backward: already at the start"),
            Err(e) => {
                // The replay stopped part way; the player is back where it was
                self.sync_view();
                self.set_error(&e);
            }
        }
    }

    fn run_to_end(&mut self) {
        match self.session.on_start(&mut self.view) {
            Ok(0) if self.session.current().is_none() => {
                self.set_status("Select an algorithm first");
            }
            Ok(applied) => self.set_status(format!("Ran {} step(s) to the end", applied)),
            Err(e) => self.set_error(&e),
        }
    }

    fn reset(&mut self) {
        self.session.on_reset();
        self.sync_view();
        self.set_status("Reset to start");
    }

    /// Make the view match the player without notifying anything
    fn sync_view(&mut self) {
        match self.session.current() {
            Some(sel) => self.view.sync_to(sel.player()),
            None => self.view.clear(&[], 0),
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    fn set_error(&mut self, error: &VizError) {
        self.status_message = format!("Error: {}", error);
        self.status_is_error = true;
    }
}

/// How many outline bullets to light up for the current playback position
pub(crate) fn outline_progress(outline_len: usize, current: Option<usize>, total: usize) -> usize {
    match current {
        None => 0,
        Some(_) if total == 0 => 0,
        Some(idx) if idx + 1 >= total => outline_len,
        Some(idx) => (1 + (idx + 1) * outline_len.saturating_sub(1) / total).min(outline_len),
    }
}
