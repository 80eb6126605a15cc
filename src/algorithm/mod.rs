//! Algorithm identifiers and their static reference data
//!
//! - [`kind`]: the [`AlgorithmKind`] enum and identifier parsing
//! - [`catalog`]: names, descriptions, code snippets and sample inputs
//! - [`complexity`]: complexity-label ranking and growth-chart samples

pub mod catalog;
pub mod complexity;
pub mod kind;

pub use catalog::{AlgorithmInfo, Catalog};
pub use complexity::{classify, growth_curve, GrowthPoint};
pub use kind::{AlgorithmKind, Category};
