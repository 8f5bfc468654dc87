use thiserror::Error;

use crate::parser::{Rule, Span};

/// Parser error with the source it was raised against.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub src: String,
    pub span: Span,
}

/// Specific kinds of parse errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Unexpected token
    #[error("Expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },

    /// Maximum nesting depth exceeded
    #[error("Expression nesting depth {depth} exceeds maximum of {max_depth} levels")]
    MaxDepthExceeded { depth: usize, max_depth: usize },

    /// Other parse errors (catch-all for Pest errors we don't specifically handle)
    #[error("{message}")]
    Other { message: String },
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, src: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            src: src.into(),
            span,
        }
    }

    /// Short stable code for documentation lookup.
    pub fn code(&self) -> &'static str {
        match self.kind {
            ParseErrorKind::UnexpectedToken { .. } => "P001",
            ParseErrorKind::MaxDepthExceeded { .. } => "P004",
            ParseErrorKind::Other { .. } => "P999",
        }
    }

    pub fn help(&self) -> Option<&'static str> {
        match self.kind {
            ParseErrorKind::UnexpectedToken { .. } => None,
            ParseErrorKind::MaxDepthExceeded { .. } => {
                Some("Reduce nesting or simplify the expression")
            }
            ParseErrorKind::Other { .. } => None,
        }
    }
}

/// Convert Pest error to human-readable ParseError
pub fn convert_pest_error(err: pest::error::Error<Rule>, source: &str) -> ParseError {
    use pest::error::ErrorVariant;

    let span = match err.location {
        pest::error::InputLocation::Pos(pos) => Span(pos..pos),
        pest::error::InputLocation::Span((start, end)) => Span(start..end),
    };

    let kind = match err.variant {
        ErrorVariant::ParsingError {
            positives,
            negatives,
        } => ParseErrorKind::UnexpectedToken {
            expected: format_expected_rules(&positives),
            found: describe_found(source, span.start(), &negatives),
        },
        ErrorVariant::CustomError { message } => ParseErrorKind::Other { message },
    };

    ParseError::new(kind, source, span)
}

/// Format expected rules in a human-readable way
fn format_expected_rules(rules: &[Rule]) -> String {
    let mut concepts = Vec::new();

    for rule in rules {
        let concept = match rule {
            Rule::number | Rule::symbol => "number or symbol",
            Rule::sexpr | Rule::qexpr | Rule::lparen | Rule::lbrace => "expression",
            Rule::rparen => "')'",
            Rule::rbrace => "'}'",
            Rule::EOI => "end of input",
            _ => "expression",
        };
        if !concepts.contains(&concept) {
            concepts.push(concept);
        }
    }

    match concepts.split_last() {
        None => "something else".to_string(),
        Some((only, [])) => only.to_string(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}

fn describe_found(source: &str, pos: usize, negatives: &[Rule]) -> String {
    if let Some(rule) = negatives.first() {
        return format!("{:?}", rule);
    }
    match source.get(pos..).and_then(|rest| rest.chars().next()) {
        Some(c) => format!("'{}'", c),
        None => "end of input".to_string(),
    }
}
