//! Step playback
//!
//! [`StepPlayer`] walks a shared [`StepSequence`] one step at a time and hands
//! each applied step to a [`PresentationAdapter`]. The player owns no drawing
//! code; whoever renders implements the adapter.
//!
//! # States
//!
//! ```text
//! Idle --advance--> Stepping --advance (last step)--> Completed
//!   ^                  |                                  |
//!   +------ reset -----+---------------- reset -----------+
//! ```

pub mod console;

use crate::error::{PresentationError, VizError};
use crate::steps::{Step, StepSequence};
use std::rc::Rc;
use tracing::warn;

/// Receives every applied step, in order, exactly once per playback
pub trait PresentationAdapter {
    /// Called synchronously for step `index` of `total`.
    ///
    /// After a reset the player starts again at index 0; implementations treat
    /// that as a fresh playback.
    fn on_step(&mut self, step: &Step, index: usize, total: usize)
        -> Result<(), PresentationError>;
}

impl<F> PresentationAdapter for F
where
    F: FnMut(&Step, usize, usize) -> Result<(), PresentationError>,
{
    fn on_step(
        &mut self,
        step: &Step,
        index: usize,
        total: usize,
    ) -> Result<(), PresentationError> {
        self(step, index, total)
    }
}

/// Where the player is in its sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Stepping,
    Completed,
}

/// Cursor over a [`StepSequence`]
#[derive(Debug, Clone)]
pub struct StepPlayer {
    sequence: Rc<StepSequence>,
    position: usize,
    state: PlaybackState,
    is_running: bool,
}

impl StepPlayer {
    pub fn new(sequence: Rc<StepSequence>) -> Self {
        StepPlayer {
            sequence,
            position: 0,
            state: PlaybackState::Idle,
            is_running: false,
        }
    }

    /// Apply the next step.
    ///
    /// Returns `Ok(false)` without notifying the adapter when every step has
    /// already been applied. If the adapter fails the position stays put.
    pub fn advance_one(
        &mut self,
        adapter: &mut dyn PresentationAdapter,
    ) -> Result<bool, VizError> {
        let total = self.sequence.len();
        if self.position >= total {
            self.state = PlaybackState::Completed;
            return Ok(false);
        }

        let index = self.position;
        if let Err(source) = adapter.on_step(&self.sequence.steps()[index], index, total) {
            warn!(index, error = %source, "presentation adapter rejected step");
            return Err(VizError::Presentation { index, source });
        }

        self.position += 1;
        self.state = if self.position == total {
            PlaybackState::Completed
        } else {
            PlaybackState::Stepping
        };
        Ok(true)
    }

    /// Apply every remaining step, each one notified individually
    pub fn run_to_completion(
        &mut self,
        adapter: &mut dyn PresentationAdapter,
    ) -> Result<usize, VizError> {
        self.run_until(adapter, || false)
    }

    /// Like [`run_to_completion`](Self::run_to_completion), but checks
    /// `should_stop` before each step and returns early when it says so.
    ///
    /// Returns the number of steps applied by this call.
    pub fn run_until(
        &mut self,
        adapter: &mut dyn PresentationAdapter,
        mut should_stop: impl FnMut() -> bool,
    ) -> Result<usize, VizError> {
        self.is_running = true;
        let mut applied = 0;
        let result = loop {
            if should_stop() {
                break Ok(applied);
            }
            match self.advance_one(adapter) {
                Ok(true) => applied += 1,
                Ok(false) => break Ok(applied),
                Err(e) => break Err(e),
            }
        };
        self.is_running = false;
        result
    }

    /// Rewind to the first step without regenerating anything
    pub fn reset(&mut self) {
        self.position = 0;
        self.state = PlaybackState::Idle;
    }

    /// Put the cursor at `position` (clamped to the length) without notifying
    /// any adapter. Used to undo a partial replay.
    pub fn seek(&mut self, position: usize) {
        let total = self.sequence.len();
        self.position = position.min(total);
        self.state = match self.position {
            0 => PlaybackState::Idle,
            p if p == total => PlaybackState::Completed,
            _ => PlaybackState::Stepping,
        };
    }

    /// Highlight of the most recently applied step; empty before any
    pub fn current_highlight(&self) -> &[usize] {
        self.current_step()
            .map(|step| step.highlight_indices.as_slice())
            .unwrap_or(&[])
    }

    /// The most recently applied step
    pub fn current_step(&self) -> Option<&Step> {
        self.position
            .checked_sub(1)
            .and_then(|index| self.sequence.get(index))
    }

    /// Data as of the current position
    pub fn current_data(&self) -> &[i64] {
        self.sequence.data_at(self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// True only while a bulk run is in progress
    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.sequence.len()
    }

    pub fn sequence(&self) -> &Rc<StepSequence> {
        &self.sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::AlgorithmKind;
    use crate::steps::generate;

    fn player() -> StepPlayer {
        let seq = generate(AlgorithmKind::BubbleSort, &[3, 2, 1], None).unwrap();
        StepPlayer::new(Rc::new(seq))
    }

    fn sink() -> impl FnMut(&Step, usize, usize) -> Result<(), PresentationError> {
        |_, _, _| Ok(())
    }

    #[test]
    fn test_initial_state() {
        let p = player();
        assert_eq!(p.state(), PlaybackState::Idle);
        assert_eq!(p.position(), 0);
        assert!(p.current_highlight().is_empty());
        assert_eq!(p.current_data(), &[3, 2, 1]);
        assert!(!p.is_running());
    }

    #[test]
    fn test_advance_updates_highlight() {
        let mut p = player();
        let mut s = sink();
        assert!(p.advance_one(&mut s).unwrap());
        assert_eq!(p.state(), PlaybackState::Stepping);
        assert_eq!(p.current_highlight(), &[0, 1]);
        assert_eq!(p.current_data(), &[3, 2, 1]);
        assert!(p.advance_one(&mut s).unwrap());
        assert_eq!(p.current_data(), &[2, 3, 1]);
    }

    #[test]
    fn test_run_until_stops_cooperatively() {
        let mut p = player();
        let mut s = sink();
        let mut budget = 2;
        let applied = p
            .run_until(&mut s, || {
                if budget == 0 {
                    return true;
                }
                budget -= 1;
                false
            })
            .unwrap();
        assert_eq!(applied, 2);
        assert_eq!(p.position(), 2);
        assert_eq!(p.state(), PlaybackState::Stepping);
        assert!(!p.is_running());
    }

    #[test]
    fn test_reset_keeps_sequence() {
        let mut p = player();
        let before = Rc::clone(p.sequence());
        let mut s = sink();
        p.run_to_completion(&mut s).unwrap();
        assert_eq!(p.state(), PlaybackState::Completed);
        assert_eq!(p.current_data(), &[1, 2, 3]);
        p.reset();
        assert_eq!(p.state(), PlaybackState::Idle);
        assert_eq!(p.position(), 0);
        assert!(Rc::ptr_eq(&before, p.sequence()));
    }

    #[test]
    fn test_seek_sets_state_without_callbacks() {
        let mut p = player();
        let mut calls = 0;
        p.seek(2);
        assert_eq!(p.state(), PlaybackState::Stepping);
        assert_eq!(p.current_data(), &[2, 3, 1]);
        p.seek(usize::MAX);
        assert_eq!(p.position(), p.len());
        assert_eq!(p.state(), PlaybackState::Completed);
        p.seek(0);
        assert_eq!(p.state(), PlaybackState::Idle);

        let mut counter = |_: &Step, _: usize, _: usize| -> Result<(), PresentationError> {
            calls += 1;
            Ok(())
        };
        p.seek(5);
        assert!(p.advance_one(&mut counter).unwrap());
        assert_eq!(calls, 1);
        assert!(p.is_at_end());
    }
}
