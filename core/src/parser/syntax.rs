use core::ops::Range;

/// Byte range into the source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span(start..end)
    }

    pub fn start(&self) -> usize {
        self.0.start
    }

    pub fn end(&self) -> usize {
        self.0.end
    }
}

/// Tag of the root node of every parsed program.
pub const ROOT_TAG: &str = ">";

/// Tag carried by punctuation nodes: `(`, `)`, `{` and `}`.
pub const CHAR_TAG: &str = "char";

/// Tag carried by anchor nodes such as end of input.
pub const REGEX_TAG: &str = "regex";

/// A node of the concrete syntax tree handed to the reader.
///
/// Tags describe the grammar category. Composite categories are joined with
/// `|` the way they were derived, e.g. `expr|number`, so consumers should test
/// tags by substring rather than by equality. Leaf nodes carry their raw text
/// in `contents`; composite nodes carry an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    pub tag: String,
    pub contents: String,
    pub span: Span,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn leaf(tag: impl Into<String>, contents: impl Into<String>, span: Span) -> Self {
        Self {
            tag: tag.into(),
            contents: contents.into(),
            span,
            children: Vec::new(),
        }
    }

    pub fn branch(tag: impl Into<String>, span: Span, children: Vec<SyntaxNode>) -> Self {
        Self {
            tag: tag.into(),
            contents: String::new(),
            span,
            children,
        }
    }

    pub fn is_root(&self) -> bool {
        self.tag == ROOT_TAG
    }
}
