//! Parser: source text to syntax tree.
//!
//! The grammar lives in `crispy.pest`. The output is a [`SyntaxNode`] tree
//! that still contains punctuation and anchor nodes; turning it into values is
//! the reader's job.

pub mod error;
pub mod parser;
mod syntax;

pub use error::{ParseError, ParseErrorKind};
pub use parser::{DEFAULT_MAX_DEPTH, ExpressionParser, Rule, parse, parse_with_max_depth};
pub use syntax::{CHAR_TAG, REGEX_TAG, ROOT_TAG, Span, SyntaxNode};
