//! Error types for step generation, selection and playback
//!
//! [`VizError`] is the only error the library surfaces. Conditions that the UI
//! must survive (an algorithm without step logic, a search without a target)
//! are not errors: the generator answers them with an Info step instead.

use thiserror::Error;

/// Errors surfaced by the generator, the catalog and the player
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VizError {
    /// A generator was asked to visualize an empty data set
    #[error("Invalid input: cannot visualize an empty data set")]
    InvalidInput,

    /// More values than a step trace can hold
    #[error("Invalid input: {len} values given, at most {max} can be visualized")]
    InputTooLarge { len: usize, max: usize },

    /// The algorithm identifier is not in the catalog
    #[error("Unknown algorithm '{id}'")]
    UnknownAlgorithm { id: String },

    /// A value given on the command line is not an integer
    #[error("Invalid number '{value}' in input list")]
    InvalidNumber { value: String },

    /// The presentation adapter rejected a step
    #[error("Presentation failed at step {index}: {source}")]
    Presentation {
        index: usize,
        #[source]
        source: PresentationError,
    },
}

/// Failure reported by a [`PresentationAdapter`](crate::player::PresentationAdapter)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PresentationError {
    pub message: String,
}

impl PresentationError {
    pub fn new(message: impl Into<String>) -> Self {
        PresentationError {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for PresentationError {
    fn from(err: std::io::Error) -> Self {
        PresentationError::new(err.to_string())
    }
}
