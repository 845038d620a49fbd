// ── Value ─────────────────────────────────────────────────────────────────

/// A literal value in a property.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Quoted string: `"Arial"`
    Str(String),
    /// Floating-point literal: `0.15` or `64`
    Number(f32),
    /// Color literal: straight-alpha `[r, g, b, a]` bytes from `#rrggbb[aa]`
    Color([u8; 4]),
    /// Unquoted identifier: alignment keywords, color names
    Ident(String),
}

// ── Prop ──────────────────────────────────────────────────────────────────

/// A single `key: value` property inside a node block.
#[derive(Debug, Clone, PartialEq)]
pub struct Prop {
    pub key: String,
    pub value: Value,
}

// ── Node ──────────────────────────────────────────────────────────────────

/// A node in the document tree.
///
/// ```mkml
/// Caption {
///     align: left
///     bg: #ff0000
///     Line "Align Left"
///     Line "with two lines"
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Node type name or component alias: `"Column"`, `"Caption"`, `"Line"`.
    pub widget: String,
    /// Optional inline string content (the text of a `Line`).
    pub content: Option<String>,
    pub props: Vec<Prop>,
    pub children: Vec<Node>,
    /// 1-based source line of the node name, for diagnostics.
    pub line: usize,
}

impl Node {
    /// Look up a property value by key. The last occurrence wins.
    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.iter().rev().find(|p| p.key == key).map(|p| &p.value)
    }

    /// Get a property as `f32` if it is a `Number`.
    pub fn prop_f32(&self, key: &str) -> Option<f32> {
        match self.prop(key)? {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Get a property as `&str` if it is a `Str` or `Ident`.
    pub fn prop_str(&self, key: &str) -> Option<&str> {
        match self.prop(key)? {
            Value::Str(s) | Value::Ident(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Children with the given node name, in document order.
    pub fn children_named<'a>(&'a self, widget: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.children.iter().filter(move |c| c.widget == widget)
    }
}

// ── Import ────────────────────────────────────────────────────────────────

/// `import "path/to/file.mkml" as Alias`
#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    pub path: String,
    pub alias: String,
}

// ── DslDocument ───────────────────────────────────────────────────────────

/// The top-level parse result for a `.mkml` source file.
#[derive(Debug, Clone, PartialEq)]
pub struct DslDocument {
    pub imports: Vec<Import>,
    pub root: Node,
}
