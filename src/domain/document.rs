//! Document tree: the tracker's rich-text representation (ADF)
//!
//! Conversion from JSON is total. Anything that is not shaped like a node
//! becomes an empty container, and fields of the wrong JSON type are treated
//! as absent, so a decoded tree can always be rendered.

use serde::Deserialize;
use serde_json::Value;

/// Node type tag, closed over the kinds that have rendering rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Text,
    HardBreak,
    Mention,
    InlineCard,
    Paragraph,
    BulletList,
    OrderedList,
    ListItem,
    CodeBlock,
    Heading,
    Blockquote,
    /// Any other tag; rendered as a transparent container.
    Other(String),
}

impl NodeKind {
    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Text => "text",
            NodeKind::HardBreak => "hardBreak",
            NodeKind::Mention => "mention",
            NodeKind::InlineCard => "inlineCard",
            NodeKind::Paragraph => "paragraph",
            NodeKind::BulletList => "bulletList",
            NodeKind::OrderedList => "orderedList",
            NodeKind::ListItem => "listItem",
            NodeKind::CodeBlock => "codeBlock",
            NodeKind::Heading => "heading",
            NodeKind::Blockquote => "blockquote",
            NodeKind::Other(tag) => tag,
        }
    }
}

impl From<&str> for NodeKind {
    fn from(tag: &str) -> Self {
        match tag {
            "text" => NodeKind::Text,
            "hardBreak" => NodeKind::HardBreak,
            "mention" => NodeKind::Mention,
            "inlineCard" => NodeKind::InlineCard,
            "paragraph" => NodeKind::Paragraph,
            "bulletList" => NodeKind::BulletList,
            "orderedList" => NodeKind::OrderedList,
            "listItem" => NodeKind::ListItem,
            "codeBlock" => NodeKind::CodeBlock,
            "heading" => NodeKind::Heading,
            "blockquote" => NodeKind::Blockquote,
            other => NodeKind::Other(other.to_string()),
        }
    }
}

impl Default for NodeKind {
    fn default() -> Self {
        NodeKind::Other(String::new())
    }
}

/// Character-level decoration kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkKind {
    Code,
    Strong,
    Em,
    Other(String),
}

impl From<&str> for MarkKind {
    fn from(tag: &str) -> Self {
        match tag {
            "code" => MarkKind::Code,
            "strong" => MarkKind::Strong,
            "em" => MarkKind::Em,
            other => MarkKind::Other(other.to_string()),
        }
    }
}

/// A decoration attached to a text node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mark {
    pub kind: MarkKind,
}

impl Mark {
    pub fn new(kind: MarkKind) -> Self {
        Self { kind }
    }
}

impl From<&Value> for Mark {
    fn from(value: &Value) -> Self {
        Self {
            kind: MarkKind::from(str_field(value, "type").unwrap_or_default()),
        }
    }
}

/// Node attributes the renderer reads. Unknown attributes are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
    /// Display text of a mention
    pub text: Option<String>,
    /// Target of an inline card
    pub url: Option<String>,
    /// Language tag of a code block
    pub language: Option<String>,
    /// Heading level
    pub level: Option<usize>,
}

impl From<&Value> for Attrs {
    fn from(value: &Value) -> Self {
        Self {
            text: str_field(value, "text").map(str::to_string),
            url: str_field(value, "url").map(str::to_string),
            language: str_field(value, "language").map(str::to_string),
            level: value
                .get("level")
                .and_then(Value::as_u64)
                .and_then(|l| usize::try_from(l).ok()),
        }
    }
}

/// One element of a document tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct Node {
    pub kind: NodeKind,
    /// Payload of a `text` node
    pub text: Option<String>,
    /// Decorations of a `text` node, applied in order
    pub marks: Vec<Mark>,
    pub attrs: Attrs,
    pub content: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Plain text leaf.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text,
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn with_content(mut self, content: Vec<Node>) -> Self {
        self.content = content;
        self
    }

    pub fn with_marks(mut self, marks: Vec<Mark>) -> Self {
        self.marks = marks;
        self
    }

    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = attrs;
        self
    }
}

impl From<&Value> for Node {
    fn from(value: &Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }

        Self {
            kind: NodeKind::from(str_field(value, "type").unwrap_or_default()),
            text: str_field(value, "text").map(str::to_string),
            marks: array_field(value, "marks").iter().map(Mark::from).collect(),
            attrs: value.get("attrs").map(Attrs::from).unwrap_or_default(),
            content: array_field(value, "content").iter().map(Node::from).collect(),
        }
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

fn array_field<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}
