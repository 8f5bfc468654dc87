use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

use super::error::{ParseError, ParseErrorKind, convert_pest_error};
use super::syntax::{CHAR_TAG, REGEX_TAG, ROOT_TAG, Span, SyntaxNode};

#[derive(Parser)]
#[grammar = "parser/crispy.pest"]
pub struct ExpressionParser;

/// Default maximum nesting depth accepted by [`parse`].
pub const DEFAULT_MAX_DEPTH: usize = 500;

/// Parse a program into a syntax tree, with the default nesting limit.
pub fn parse(source: &str) -> Result<SyntaxNode, ParseError> {
    parse_with_max_depth(source, DEFAULT_MAX_DEPTH)
}

/// Parse a program into a syntax tree.
///
/// Input nested deeper than `max_depth` brackets is rejected before it
/// reaches the (recursive) grammar.
pub fn parse_with_max_depth(source: &str, max_depth: usize) -> Result<SyntaxNode, ParseError> {
    check_nesting(source, max_depth)?;

    let mut pairs = ExpressionParser::parse(Rule::program, source)
        .map_err(|e| convert_pest_error(e, source))?;

    let program = pairs.next().ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::Other {
                message: "missing program".to_string(),
            },
            source,
            Span(0..source.len()),
        )
    })?;

    let node = build_node(program);
    tracing::trace!(children = node.children.len(), "parsed program");
    Ok(node)
}

fn check_nesting(source: &str, max_depth: usize) -> Result<(), ParseError> {
    let mut depth = 0usize;
    for (pos, c) in source.char_indices() {
        match c {
            '(' | '{' => {
                depth += 1;
                if depth > max_depth {
                    return Err(ParseError::new(
                        ParseErrorKind::MaxDepthExceeded { depth, max_depth },
                        source,
                        Span(pos..pos + 1),
                    ));
                }
            }
            ')' | '}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

fn build_node(pair: Pair<Rule>) -> SyntaxNode {
    let span = Span(pair.as_span().start()..pair.as_span().end());
    match pair.as_rule() {
        Rule::program => SyntaxNode::branch(ROOT_TAG, span, build_children(pair)),
        Rule::number => SyntaxNode::leaf("expr|number", pair.as_str(), span),
        Rule::symbol => SyntaxNode::leaf("expr|symbol", pair.as_str(), span),
        Rule::sexpr => SyntaxNode::branch("expr|sexpr", span, build_children(pair)),
        Rule::qexpr => SyntaxNode::branch("expr|qexpr", span, build_children(pair)),
        Rule::lparen | Rule::rparen | Rule::lbrace | Rule::rbrace => {
            SyntaxNode::leaf(CHAR_TAG, pair.as_str(), span)
        }
        Rule::EOI => SyntaxNode::leaf(REGEX_TAG, "", span),
        other => SyntaxNode::leaf(format!("{:?}", other), pair.as_str(), span),
    }
}

fn build_children(pair: Pair<Rule>) -> Vec<SyntaxNode> {
    pair.into_inner().map(build_node).collect()
}
