//! Projection engine for yearly pension and account projections

pub mod rules;
mod state;
mod engine;
mod rows;

pub use state::ProjectionState;
pub use engine::{compute, ProjectionEngine};
pub use rows::{ProjectionResult, ProjectionRow};
