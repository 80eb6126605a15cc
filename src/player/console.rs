//! Line-oriented adapter for headless playback

use super::PresentationAdapter;
use crate::error::PresentationError;
use crate::steps::Step;
use std::io::Write;

/// Prints each applied step as `[index/total] kind: description`
pub struct ConsoleAdapter<W: Write> {
    out: W,
    show_data: bool,
}

impl<W: Write> ConsoleAdapter<W> {
    pub fn new(out: W) -> Self {
        ConsoleAdapter {
            out,
            show_data: false,
        }
    }

    /// Also print the data snapshot under each step
    pub fn with_data(mut self, show_data: bool) -> Self {
        self.show_data = show_data;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PresentationAdapter for ConsoleAdapter<W> {
    fn on_step(&mut self, step: &Step, index: usize, total: usize) -> Result<(), PresentationError> {
        if index == 0 {
            writeln!(self.out, "-- {} steps --", total)?;
        }
        writeln!(
            self.out,
            "[{}/{}] {}: {}",
            index + 1,
            total,
            step.kind.label(),
            step.description
        )?;
        if self.show_data {
            if let Some(data) = &step.data_snapshot {
                let cells: Vec<String> = data
                    .iter()
                    .enumerate()
                    .map(|(i, v)| {
                        if step.highlight_indices.contains(&i) {
                            format!("*{}*", v)
                        } else {
                            v.to_string()
                        }
                    })
                    .collect();
                writeln!(self.out, "      [{}]", cells.join(", "))?;
            }
        }
        Ok(())
    }
}
