//! Pension Projection - year-by-year pension annuity and account projection
//!
//! This library provides:
//! - The pure projection core (inputs in, yearly rows out)
//! - Summary figures, chart series and CSV export built from the rows
//! - A recompute-on-demand session for interactive front ends
//! - Batch runs and single-rate sweeps

pub mod error;
pub mod inputs;
pub mod projection;
pub mod summary;
pub mod chart;
pub mod export;
pub mod report;
pub mod session;
pub mod scenario;

// Re-export commonly used types
pub use error::ProjectionError;
pub use inputs::ProjectionInput;
pub use projection::{compute, ProjectionEngine, ProjectionResult, ProjectionRow};
pub use summary::ProjectionSummary;
pub use chart::DisplayMode;
pub use session::ProjectionSession;
pub use scenario::{ScenarioRunner, SweepField};
