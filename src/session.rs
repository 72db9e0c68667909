//! Recompute-on-demand wrapper for interactive front ends
//!
//! A front end edits inputs freely and calls [`ProjectionSession::recompute`]
//! whenever it wants fresh rows. Nothing is computed implicitly.

use crate::error::Result;
use crate::inputs::ProjectionInput;
use crate::projection::{compute, ProjectionResult};

#[derive(Debug, Clone, Default)]
pub struct ProjectionSession {
    input: ProjectionInput,
    result: Option<ProjectionResult>,
    /// Bumped on every successful recompute
    generation: u64,
}

impl ProjectionSession {
    pub fn new(input: ProjectionInput) -> Self {
        Self {
            input,
            result: None,
            generation: 0,
        }
    }

    pub fn input(&self) -> &ProjectionInput {
        &self.input
    }

    /// Edit inputs in place; the cached result is left untouched
    pub fn input_mut(&mut self) -> &mut ProjectionInput {
        &mut self.input
    }

    pub fn set_input(&mut self, input: ProjectionInput) {
        self.input = input;
    }

    /// Restore the default inputs
    pub fn reset(&mut self) {
        self.input = ProjectionInput::default();
    }

    /// Clamp, validate and compute the current inputs
    ///
    /// On failure the previous result stays available.
    pub fn recompute(&mut self) -> Result<&ProjectionResult> {
        let clamped = self.input.clamped();
        let result = compute(&clamped)?;
        self.input = clamped;
        self.generation += 1;
        Ok(&*self.result.insert(result))
    }

    /// Last successfully computed result
    pub fn result(&self) -> Option<&ProjectionResult> {
        self.result.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
