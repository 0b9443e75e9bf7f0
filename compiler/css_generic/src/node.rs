//! Syntax-node contract for productions checked against the AST.
//!
//! The AST layer lives outside this crate. It attaches nodes to matcher
//! tokens through [`SyntaxNode`], and matchers only ever ask for the node's
//! kind and, for functions, its name.

use std::fmt;

/// Kinds of syntax node that value productions inspect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Dimension,
    Function,
    IdSelector,
    Identifier,
    /// Unparsed text, e.g. legacy `progid:` filters.
    Raw,
    String,
    UnicodeRange,
    Url,
}

impl NodeKind {
    /// AST type name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            NodeKind::Dimension => "Dimension",
            NodeKind::Function => "Function",
            NodeKind::IdSelector => "IdSelector",
            NodeKind::Identifier => "Identifier",
            NodeKind::Raw => "Raw",
            NodeKind::String => "String",
            NodeKind::UnicodeRange => "UnicodeRange",
            NodeKind::Url => "Url",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A syntax node as seen by the matchers.
pub trait SyntaxNode {
    fn kind(&self) -> NodeKind;

    /// Name of a function node; `None` for every other kind.
    fn name(&self) -> Option<&str> {
        None
    }
}
