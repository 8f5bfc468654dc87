//! Public API for the crispy language.
//!
//! # Example
//!
//! ```
//! use crispy_core::api::Engine;
//!
//! let mut engine = Engine::default();
//! let result = engine.eval("join {1 2} {3}").unwrap();
//! assert_eq!(result.to_string(), "{1 2 3}");
//! ```

pub mod engine;
pub mod error;
pub mod options;

pub use engine::Engine;
pub use error::{Diagnostic, Error, Severity};
pub use options::EngineOptions;
