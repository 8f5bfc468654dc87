//! Configuration options for the crispy engine.

use crate::evaluator::EvaluatorOptions;
use crate::parser::DEFAULT_MAX_DEPTH;

/// Configuration options for the engine.
///
/// # Example
///
/// ```
/// use crispy_core::api::EngineOptions;
///
/// let options = EngineOptions {
///     max_depth: 500,
///     ..EngineOptions::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Maximum evaluation depth (for recursion protection).
    ///
    /// Default: 1000
    pub max_depth: usize,

    /// Maximum bracket nesting accepted by the parser.
    ///
    /// Default: 500
    pub max_parse_depth: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_depth: EvaluatorOptions::default().max_depth,
            max_parse_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EngineOptions {
    pub fn evaluator_options(&self) -> EvaluatorOptions {
        EvaluatorOptions {
            max_depth: self.max_depth,
        }
    }
}
