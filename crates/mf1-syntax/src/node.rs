//! Syntax tree nodes.
//! 语法树节点。

use crate::{DateTimeFormatOptions, NumberFormatOptions};
use mf1_common::Span;
use serde::Serialize;
use std::fmt;

/// The name of an argument or element: an identifier or a positional index.
/// 参数或元素的名称：标识符或位置索引。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ArgName {
    Named(String),
    Index(u64),
}

impl fmt::Display for ArgName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgName::Named(name) => f.write_str(name),
            ArgName::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for ArgName {
    fn from(name: &str) -> Self {
        ArgName::Named(name.to_string())
    }
}

impl From<String> for ArgName {
    fn from(name: String) -> Self {
        ArgName::Named(name)
    }
}

impl From<u64> for ArgName {
    fn from(index: u64) -> Self {
        ArgName::Index(index)
    }
}

/// The label of a plural branch: a keyword such as `one`, or `=2`.
/// 复数分支的标签：`one` 之类的关键字或 `=2`。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Selector {
    Keyword(String),
    Exact(u64),
}

impl Selector {
    pub fn is_other(&self) -> bool {
        matches!(self, Selector::Keyword(keyword) if keyword == "other")
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Keyword(keyword) => f.write_str(keyword),
            Selector::Exact(value) => write!(f, "={}", value),
        }
    }
}

/// A `selector {message}` pair of a plural argument.
/// 复数参数中的 `selector {message}` 对。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluralBranch {
    pub selector: Selector,
    pub message: Node,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

impl PluralBranch {
    pub fn new(selector: Selector, message: Node) -> Self {
        Self {
            selector,
            message,
            span: None,
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}

/// A node of a parsed message.
/// 解析后消息中的节点。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

/// Node kind.
/// 节点种类。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeKind {
    /// Literal text, with quoting already resolved / 已处理引号的字面文本
    Text { value: String },
    /// Two or more nodes in sequence / 两个或更多顺序节点
    Concat { nodes: Vec<Node> },
    /// `{name}` / 字符串参数
    StringArg { name: ArgName },
    /// `{name, number}`, or `#` inside a plural branch / 数字参数
    NumberArg {
        name: ArgName,
        options: NumberFormatOptions,
        subtract: u64,
    },
    /// `{name, date}`, `{name, time}` / 日期时间参数
    DateTimeArg {
        name: ArgName,
        options: DateTimeFormatOptions,
    },
    /// An argument skipped after a hard error / 出错后跳过的参数
    InvalidArg { name: Option<ArgName> },
    /// `{name, plural, ...}`; the `other` branch lives in `fallback` / 复数参数
    Plural {
        name: ArgName,
        subtract: u64,
        branches: Vec<PluralBranch>,
        fallback: Box<Node>,
    },
    /// A plural skipped after a hard error / 出错后跳过的复数参数
    InvalidPlural { name: Option<ArgName> },
    /// `<name>...</name>`, or `<name/>` with no message / 元素
    Element {
        name: ArgName,
        message: Option<Box<Node>>,
    },
    /// An element skipped after a hard error / 出错后跳过的元素
    InvalidElement { name: Option<ArgName> },
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self { kind, span: None }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::new(NodeKind::Text {
            value: value.into(),
        })
    }

    /// Join nodes in sequence. No node gives an empty text and a single node
    /// is returned unchanged; only longer sequences become a `Concat`.
    pub fn concat(nodes: Vec<Node>) -> Self {
        let mut iter = nodes.into_iter();
        match (iter.next(), iter.len()) {
            (None, _) => Node::text(""),
            (Some(only), 0) => only,
            (Some(first), _) => {
                let mut nodes = Vec::with_capacity(iter.len() + 1);
                nodes.push(first);
                nodes.extend(iter);
                let span = match (nodes.first().and_then(|n| n.span), nodes.last().and_then(|n| n.span)) {
                    (Some(first), Some(last)) => Some(first.to(last)),
                    _ => None,
                };
                Self {
                    kind: NodeKind::Concat { nodes },
                    span,
                }
            }
        }
    }

    pub fn string_arg(name: impl Into<ArgName>) -> Self {
        Self::new(NodeKind::StringArg { name: name.into() })
    }

    pub fn number_arg(name: impl Into<ArgName>, options: NumberFormatOptions, subtract: u64) -> Self {
        Self::new(NodeKind::NumberArg {
            name: name.into(),
            options,
            subtract,
        })
    }

    pub fn date_time_arg(name: impl Into<ArgName>, options: DateTimeFormatOptions) -> Self {
        Self::new(NodeKind::DateTimeArg {
            name: name.into(),
            options,
        })
    }

    pub fn invalid_arg(name: Option<ArgName>) -> Self {
        Self::new(NodeKind::InvalidArg { name })
    }

    pub fn plural(
        name: impl Into<ArgName>,
        subtract: u64,
        branches: Vec<PluralBranch>,
        fallback: Node,
    ) -> Self {
        Self::new(NodeKind::Plural {
            name: name.into(),
            subtract,
            branches,
            fallback: Box::new(fallback),
        })
    }

    pub fn invalid_plural(name: Option<ArgName>) -> Self {
        Self::new(NodeKind::InvalidPlural { name })
    }

    pub fn element(name: impl Into<ArgName>, message: Option<Node>) -> Self {
        Self::new(NodeKind::Element {
            name: name.into(),
            message: message.map(Box::new),
        })
    }

    pub fn invalid_element(name: Option<ArgName>) -> Self {
        Self::new(NodeKind::InvalidElement { name })
    }

    /// The argument or element name this node refers to, if any.
    pub fn arg_name(&self) -> Option<&ArgName> {
        match &self.kind {
            NodeKind::StringArg { name }
            | NodeKind::NumberArg { name, .. }
            | NodeKind::DateTimeArg { name, .. }
            | NodeKind::Plural { name, .. }
            | NodeKind::Element { name, .. } => Some(name),
            NodeKind::InvalidArg { name }
            | NodeKind::InvalidPlural { name }
            | NodeKind::InvalidElement { name } => name.as_ref(),
            NodeKind::Text { .. } | NodeKind::Concat { .. } => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text { value } => Some(value),
            _ => None,
        }
    }

    /// Whether this node or any node below it is one of the `Invalid*` kinds.
    pub fn contains_invalid(&self) -> bool {
        match &self.kind {
            NodeKind::InvalidArg { .. }
            | NodeKind::InvalidPlural { .. }
            | NodeKind::InvalidElement { .. } => true,
            NodeKind::Concat { nodes } => nodes.iter().any(Node::contains_invalid),
            NodeKind::Plural {
                branches, fallback, ..
            } => {
                branches.iter().any(|b| b.message.contains_invalid()) || fallback.contains_invalid()
            }
            NodeKind::Element { message, .. } => {
                message.as_deref().is_some_and(Node::contains_invalid)
            }
            _ => false,
        }
    }

    /// A copy of this tree with every span cleared, for structural comparison.
    pub fn without_spans(&self) -> Node {
        let kind = match &self.kind {
            NodeKind::Concat { nodes } => NodeKind::Concat {
                nodes: nodes.iter().map(Node::without_spans).collect(),
            },
            NodeKind::Plural {
                name,
                subtract,
                branches,
                fallback,
            } => NodeKind::Plural {
                name: name.clone(),
                subtract: *subtract,
                branches: branches
                    .iter()
                    .map(|branch| PluralBranch::new(branch.selector.clone(), branch.message.without_spans()))
                    .collect(),
                fallback: Box::new(fallback.without_spans()),
            },
            NodeKind::Element { name, message } => NodeKind::Element {
                name: name.clone(),
                message: message.as_ref().map(|m| Box::new(m.without_spans())),
            },
            other => other.clone(),
        };
        Node::new(kind)
    }
}
