//! Reader: syntax tree to value tree.
//!
//! The reader only depends on the shape of [`SyntaxNode`]: a tag it can search
//! for grammar categories, raw text on leaves and ordered children on
//! composites. Punctuation and anchor nodes are dropped on the way.

use crate::parser::{CHAR_TAG, REGEX_TAG, SyntaxNode};
use crate::values::Value;

/// Convert a syntax tree into a value tree.
///
/// The root node becomes an s-expression holding every top-level expression,
/// so `+ 1 2` and `(+ 1 2)` evaluate the same way.
pub fn read(node: &SyntaxNode) -> Value {
    if node.tag.contains("number") {
        return read_number(node);
    }
    if node.tag.contains("symbol") {
        return Value::symbol(node.contents.as_str());
    }

    let list = if node.is_root() || node.tag.contains("sexpr") {
        Value::sexpr()
    } else if node.tag.contains("qexpr") {
        Value::qexpr()
    } else {
        return Value::error(format!("unexpected syntax node '{}'", node.tag));
    };

    node.children
        .iter()
        .filter(|child| !is_skipped(child))
        .fold(list, |list, child| list.add(read(child)))
}

fn read_number(node: &SyntaxNode) -> Value {
    match node.contents.parse::<i64>() {
        Ok(x) => Value::number(x),
        Err(_) => Value::error("invalid number"),
    }
}

fn is_skipped(node: &SyntaxNode) -> bool {
    matches!(node.contents.as_str(), "(" | ")" | "{" | "}")
        || node.tag == REGEX_TAG
        || node.tag == CHAR_TAG
}
