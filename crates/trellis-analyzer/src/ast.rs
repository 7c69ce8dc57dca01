//! Owned syntax tree for a parsed module
//!
//! A closed sum type over the syntactic shapes the extractors match on.
//! Everything the grammar produces that the pipeline does not distinguish
//! collapses into `Other`, which still carries its children so walks reach
//! definitions nested anywhere. The tree owns all of its data and is
//! immutable after parse.

use trellis_core::SourceSpan;

/// A node of the lowered syntax tree.
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Module root; children are top-level statements.
    Module { body: Vec<AstNode>, span: SourceSpan },
    /// `def name(params): body` — the name is carried as data, not as a
    /// child, so identifier scans over children never see it.
    FunctionDef {
        name: String,
        params: Vec<String>,
        body: Vec<AstNode>,
        span: SourceSpan,
    },
    /// `class name: body`
    ClassDef {
        name: String,
        body: Vec<AstNode>,
        span: SourceSpan,
    },
    /// An assignment statement. Only simple single-name targets are
    /// distinguished; everything else is `AssignTarget::Unsupported`.
    Assign {
        target: AssignTarget,
        value: Box<AstNode>,
        span: SourceSpan,
    },
    /// A bare identifier.
    Name { id: String, span: SourceSpan },
    /// A call expression; kept distinct so walks descend into arguments.
    Call {
        func: Box<AstNode>,
        args: Vec<AstNode>,
        span: SourceSpan,
    },
    /// Any other syntactic shape, with its lowered children.
    Other { children: Vec<AstNode>, span: SourceSpan },
}

/// Left-hand side of an assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignTarget {
    /// A simple bound name: `x = ...`
    Name(String),
    /// Tuple/attribute/subscript targets; skipped by extraction.
    Unsupported,
}

impl AstNode {
    /// Byte range this node covers in the original source.
    pub fn span(&self) -> SourceSpan {
        match self {
            AstNode::Module { span, .. }
            | AstNode::FunctionDef { span, .. }
            | AstNode::ClassDef { span, .. }
            | AstNode::Assign { span, .. }
            | AstNode::Name { span, .. }
            | AstNode::Call { span, .. }
            | AstNode::Other { span, .. } => *span,
        }
    }

    /// Immediate children in source order.
    pub fn children(&self) -> Vec<&AstNode> {
        match self {
            AstNode::Module { body, .. }
            | AstNode::FunctionDef { body, .. }
            | AstNode::ClassDef { body, .. } => body.iter().collect(),
            AstNode::Assign { value, .. } => vec![value.as_ref()],
            AstNode::Name { .. } => Vec::new(),
            AstNode::Call { func, args, .. } => {
                let mut out: Vec<&AstNode> = vec![func.as_ref()];
                out.extend(args.iter());
                out
            }
            AstNode::Other { children, .. } => children.iter().collect(),
        }
    }
}
