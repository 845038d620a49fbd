use std::collections::{HashMap, HashSet};

use pillbox_engine::paint::Color;
use pillbox_engine::text::FontId;
use pillbox_mkml::{parse_str, DslDocument, Node, ParseError, Value};

use crate::caption::TextAlign;
use crate::dsl::error::BuildError;
use crate::widget::Element;
use crate::widgets::{
    caption_box::{CaptionBox, CaptionStyle},
    flex::{Align, Column},
};

// ── DslBindings ───────────────────────────────────────────────────────────

/// Runtime resources supplied by the application when building a tree.
pub struct DslBindings {
    /// Font used to measure every caption's lines.
    pub default_font: Option<FontId>,
}

impl DslBindings {
    pub fn new() -> Self {
        Self { default_font: None }
    }

    pub fn with_default_font(mut self, id: FontId) -> Self {
        self.default_font = Some(id);
        self
    }
}

impl Default for DslBindings {
    fn default() -> Self {
        Self::new()
    }
}

// ── DslLoader ─────────────────────────────────────────────────────────────

/// Parses `.mkml` documents and resolves component aliases while building.
pub struct DslLoader {
    registry: HashMap<String, DslDocument>,
}

impl DslLoader {
    pub fn new() -> Self {
        Self { registry: HashMap::new() }
    }

    /// Parse a `.mkml` source string into a [`DslDocument`].
    pub fn parse(&self, src: &str) -> Result<DslDocument, ParseError> {
        parse_str(src)
    }

    /// Register a pre-parsed document under an alias so other documents can
    /// reference it by name.
    pub fn register(&mut self, alias: impl Into<String>, doc: DslDocument) {
        self.registry.insert(alias.into(), doc);
    }

    /// Parse and immediately register a source under `alias`.
    pub fn parse_and_register(
        &mut self,
        alias: impl Into<String>,
        src: &str,
    ) -> Result<(), ParseError> {
        let doc = parse_str(src)?;
        self.register(alias, doc);
        Ok(())
    }

    /// Registers every `import "path" as Alias` of `doc`, following nested
    /// imports. `read` returns the source for an import path.
    ///
    /// A path already loaded during this call is not read again, so import
    /// cycles terminate.
    pub fn load_imports<F, E>(&mut self, doc: &DslDocument, mut read: F) -> Result<(), BuildError>
    where
        F: FnMut(&str) -> Result<String, E>,
        E: std::fmt::Display,
    {
        let mut seen = HashSet::new();
        self.load_imports_inner(doc, &mut read, &mut seen)
    }

    fn load_imports_inner<F, E>(
        &mut self,
        doc: &DslDocument,
        read: &mut F,
        seen: &mut HashSet<String>,
    ) -> Result<(), BuildError>
    where
        F: FnMut(&str) -> Result<String, E>,
        E: std::fmt::Display,
    {
        for import in &doc.imports {
            if !seen.insert(import.path.clone()) {
                continue;
            }
            let src = read(&import.path).map_err(|e| BuildError::Import {
                path: import.path.clone(),
                message: e.to_string(),
            })?;
            let component = parse_str(&src).map_err(|e| BuildError::Import {
                path: import.path.clone(),
                message: e.to_string(),
            })?;
            self.load_imports_inner(&component, read, seen)?;
            log::debug!("registered component {} from {}", import.alias, import.path);
            self.register(import.alias.clone(), component);
        }
        Ok(())
    }

    /// Build an [`Element`] from a previously parsed document.
    ///
    /// Aliases referenced in the document must already be registered.
    pub fn build(&self, doc: &DslDocument, bindings: &DslBindings) -> Result<Element, BuildError> {
        let mut expanding = Vec::new();
        self.build_node(&doc.root, bindings, &mut expanding)
    }

    /// Parse `src` and build it in one step.
    pub fn build_str(&self, src: &str, bindings: &DslBindings) -> Result<Element, BuildError> {
        let doc = parse_str(src)?;
        self.build(&doc, bindings)
    }

    /// Collects the `Caption` nodes of a document in depth-first order,
    /// expanding registered aliases.
    pub fn captions(&self, doc: &DslDocument, bindings: &DslBindings) -> Result<Vec<CaptionBox>, BuildError> {
        let mut out = Vec::new();
        let mut expanding = Vec::new();
        self.collect_captions(&doc.root, bindings, &mut expanding, &mut out)?;
        Ok(out)
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn build_node(
        &self,
        node: &Node,
        bindings: &DslBindings,
        expanding: &mut Vec<String>,
    ) -> Result<Element, BuildError> {
        match node.widget.as_str() {
            "Column"  => self.build_column(node, bindings, expanding),
            "Caption" => Ok(self.build_caption(node, bindings)?.into()),
            alias => {
                let root = self.resolve_alias(alias, node.line, expanding)?;
                expanding.push(alias.to_string());
                let elem = self.build_node(root, bindings, expanding);
                expanding.pop();
                elem
            }
        }
    }

    fn resolve_alias(&self, alias: &str, line: usize, expanding: &[String]) -> Result<&Node, BuildError> {
        match self.registry.get(alias) {
            // A component that includes itself has no finite tree.
            Some(_) if expanding.iter().any(|a| a == alias) => {
                Err(BuildError::UnknownWidget { name: format!("{alias} (recursive)"), line })
            }
            Some(component) => Ok(&component.root),
            None => Err(BuildError::UnknownWidget { name: alias.to_string(), line }),
        }
    }

    fn collect_captions(
        &self,
        node: &Node,
        bindings: &DslBindings,
        expanding: &mut Vec<String>,
        out: &mut Vec<CaptionBox>,
    ) -> Result<(), BuildError> {
        match node.widget.as_str() {
            "Caption" => out.push(self.build_caption(node, bindings)?),
            "Column" => {
                for child in &node.children {
                    self.collect_captions(child, bindings, expanding, out)?;
                }
            }
            alias => {
                let root = self.resolve_alias(alias, node.line, expanding)?;
                expanding.push(alias.to_string());
                let res = self.collect_captions(root, bindings, expanding, out);
                expanding.pop();
                res?;
            }
        }
        Ok(())
    }

    // ── Column ────────────────────────────────────────────────────────────

    fn build_column(
        &self,
        node: &Node,
        bindings: &DslBindings,
        expanding: &mut Vec<String>,
    ) -> Result<Element, BuildError> {
        let mut col = Column::new();
        if let Some(v) = node.prop_f32("gap") {
            col = col.spacing(v);
        }
        if let Some(v) = node.prop_f32("padding") {
            col = col.padding_all(v);
        }
        if let Some(bg) = self.parse_color(node, "bg")? {
            col = col.background(bg);
        }
        col = col.cross_align(self.parse_align(node)?);
        for child in &node.children {
            col = col.child(self.build_node(child, bindings, expanding)?);
        }
        Ok(col.into())
    }

    // ── Caption ───────────────────────────────────────────────────────────

    fn build_caption(&self, node: &Node, bindings: &DslBindings) -> Result<CaptionBox, BuildError> {
        let lines: Vec<String> = node
            .children_named("Line")
            .map(|l| l.content.clone().unwrap_or_default())
            .collect();
        if lines.is_empty() {
            return Err(BuildError::EmptyCaption { line: node.line });
        }

        let defaults = CaptionStyle::default();
        let style = CaptionStyle {
            font: bindings.default_font,
            font_family: node.prop_str("font_family").map(str::to_string),
            font_size: node.prop_f32("font_size").unwrap_or(defaults.font_size),
            bg_color: self.parse_color(node, "bg")?.unwrap_or(defaults.bg_color),
            text_color: self.parse_color(node, "text_color")?.unwrap_or(defaults.text_color),
            corner_radius: node.prop_f32("corner_radius").unwrap_or(defaults.corner_radius),
            padding: defaults.padding,
        };

        let mut caption = CaptionBox::new(lines).style(style);
        if let Some(align) = self.parse_text_align(node)? {
            caption = caption.align(align);
        }
        Ok(caption)
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    /// `left | center | right`; absent means no alignment.
    fn parse_text_align(&self, node: &Node) -> Result<Option<TextAlign>, BuildError> {
        let Some(val) = node.prop_str("align") else {
            return Ok(None);
        };
        val.parse::<TextAlign>()
            .map(Some)
            .map_err(|_| BuildError::InvalidAlign { value: val.to_string(), line: node.line })
    }

    /// Column cross alignment; `left`/`right` are accepted as `start`/`end`.
    fn parse_align(&self, node: &Node) -> Result<Align, BuildError> {
        let Some(val) = node.prop_str("align") else {
            return Ok(Align::Center);
        };
        match val {
            "start" | "left"  => Ok(Align::Start),
            "center"          => Ok(Align::Center),
            "end" | "right"   => Ok(Align::End),
            _ => Err(BuildError::InvalidAlign { value: val.to_string(), line: node.line }),
        }
    }

    fn parse_color(&self, node: &Node, key: &str) -> Result<Option<Color>, BuildError> {
        let color = match node.prop(key) {
            None => return Ok(None),
            Some(Value::Color([r, g, b, a])) => Some(Color::from_srgb_u8(*r, *g, *b, *a)),
            Some(Value::Ident(name) | Value::Str(name)) => {
                Color::from_name(name).or_else(|| Color::from_hex(name))
            }
            Some(Value::Number(_)) => None,
        };
        color
            .map(Some)
            .ok_or_else(|| BuildError::InvalidColor { key: key.to_string(), line: node.line })
    }
}

impl Default for DslLoader {
    fn default() -> Self {
        Self::new()
    }
}
