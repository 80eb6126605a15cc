//! Selection handler tying the catalog, the generator and the player together
//!
//! A [`Session`] owns the catalog it was given and at most one active
//! [`Selection`]. Every failing operation leaves the previous selection
//! exactly as it was, so the UI keeps showing the last good visualization.

use crate::algorithm::{AlgorithmInfo, AlgorithmKind, Catalog};
use crate::error::VizError;
use crate::player::{PresentationAdapter, StepPlayer};
use crate::steps::{generate, StepSequence};
use std::rc::Rc;
use tracing::{info, warn};

/// The algorithm currently on screen together with its playback state
#[derive(Debug, Clone)]
pub struct Selection {
    info: AlgorithmInfo,
    input: Vec<i64>,
    target: Option<i64>,
    player: StepPlayer,
}

impl Selection {
    fn build(info: AlgorithmInfo, input: Vec<i64>, target: Option<i64>) -> Result<Self, VizError> {
        let sequence = generate(info.kind, &input, target)?;
        Ok(Selection {
            info,
            input,
            target,
            player: StepPlayer::new(Rc::new(sequence)),
        })
    }

    pub fn info(&self) -> &AlgorithmInfo {
        &self.info
    }

    pub fn kind(&self) -> AlgorithmKind {
        self.info.kind
    }

    pub fn input(&self) -> &[i64] {
        &self.input
    }

    pub fn target(&self) -> Option<i64> {
        self.target
    }

    pub fn player(&self) -> &StepPlayer {
        &self.player
    }

    pub fn sequence(&self) -> &Rc<StepSequence> {
        self.player.sequence()
    }
}

pub struct Session {
    catalog: Catalog,
    current: Option<Selection>,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Session {
            catalog,
            current: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current(&self) -> Option<&Selection> {
        self.current.as_ref()
    }

    /// Select an algorithm by identifier, starting from its sample input
    pub fn select(&mut self, id: &str) -> Result<&Selection, VizError> {
        let info = match self.catalog.select(id) {
            Ok(info) => info.clone(),
            Err(e) => {
                warn!(id, "rejected algorithm selection");
                return Err(e);
            }
        };
        let input = info.sample_input.clone();
        let target = info.sample_target;
        self.install(info, input, target)
    }

    /// Select an algorithm with explicit data instead of the sample
    pub fn select_with_input(
        &mut self,
        kind: AlgorithmKind,
        input: Vec<i64>,
        target: Option<i64>,
    ) -> Result<&Selection, VizError> {
        let info = self
            .catalog
            .get(kind)
            .cloned()
            .ok_or_else(|| VizError::UnknownAlgorithm {
                id: kind.id().to_string(),
            })?;
        self.install(info, input, target)
    }

    /// Swap in new data for the current algorithm.
    ///
    /// Identical data only rewinds the player; anything else regenerates.
    /// Returns false when nothing is selected.
    pub fn set_input(&mut self, input: Vec<i64>, target: Option<i64>) -> Result<bool, VizError> {
        let Some(current) = self.current.as_mut() else {
            return Ok(false);
        };
        if current.input == input && current.target == target {
            current.player.reset();
            return Ok(true);
        }
        let info = current.info.clone();
        self.install(info, input, target)?;
        Ok(true)
    }

    /// Run the current selection to the end
    pub fn on_start(&mut self, adapter: &mut dyn PresentationAdapter) -> Result<usize, VizError> {
        match self.current.as_mut() {
            Some(current) => current.player.run_to_completion(adapter),
            None => Ok(0),
        }
    }

    /// Apply one step of the current selection
    pub fn on_step(&mut self, adapter: &mut dyn PresentationAdapter) -> Result<bool, VizError> {
        match self.current.as_mut() {
            Some(current) => current.player.advance_one(adapter),
            None => Ok(false),
        }
    }

    /// Go back one step.
    ///
    /// The player only moves forward, so this rewinds and re-applies every
    /// step up to the previous position; the adapter sees a fresh playback.
    /// If the adapter fails on the way, the cursor is put back where it was.
    pub fn on_back(&mut self, adapter: &mut dyn PresentationAdapter) -> Result<bool, VizError> {
        let Some(current) = self.current.as_mut() else {
            return Ok(false);
        };
        let position = current.player.position();
        if position == 0 {
            return Ok(false);
        }
        current.player.reset();
        for _ in 1..position {
            if let Err(e) = current.player.advance_one(adapter) {
                current.player.seek(position);
                return Err(e);
            }
        }
        Ok(true)
    }

    pub fn on_reset(&mut self) {
        if let Some(current) = self.current.as_mut() {
            current.player.reset();
        }
    }

    fn install(
        &mut self,
        info: AlgorithmInfo,
        input: Vec<i64>,
        target: Option<i64>,
    ) -> Result<&Selection, VizError> {
        let selection = Selection::build(info, input, target).inspect_err(|e| {
            warn!(error = %e, "step generation failed; keeping previous selection");
        })?;
        info!(
            algorithm = %selection.kind(),
            steps = selection.player.len(),
            "selected algorithm"
        );
        Ok(self.current.insert(selection))
    }
}
