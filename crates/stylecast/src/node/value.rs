//! The `StyleNode` data model.
//!
//! A [`StyleNode`] is an insertion-ordered map from key to [`StyleValue`].
//! Keys are selectors, at-rule headers, or CSS property names (see
//! [`classify`](super::key::classify)); values are scalars, lists, or
//! nested nodes.
//!
//! # Ordering invariant
//!
//! Emission order equals insertion order. This is a documented contract,
//! not an accident of the map type: it makes compiled output deterministic
//! and golden-string testable. `StyleNode` is backed by `IndexMap` for
//! this reason.
//!
//! # Construction
//!
//! Nodes can be built fluently:
//!
//! ```rust
//! use stylecast::StyleNode;
//!
//! let card = StyleNode::new()
//!     .class("card")
//!     .prop("backgroundColor", "#fff")
//!     .prop("padding", "16px")
//!     .block("&:hover", StyleNode::new().prop("borderColor", "red"));
//!
//! assert_eq!(card.class_names(), vec!["card"]);
//! ```
//!
//! or deserialized from JSON/YAML source text (see the
//! [`source`](super::source) adapters).

use indexmap::IndexMap;
use serde::Serialize;

use super::key::CLASS_NAME_KEY;

/// A single value in a [`StyleNode`].
///
/// Scalars (`Str`, `Num`, `Bool`) are literal CSS property values. Numbers
/// pass through without unit suffixing. `Null` marks a property to skip.
/// `List` holds class-name aliases under `className`, or a comma-joined
/// value list (e.g. a font stack) under a plain property key. `Block` is a
/// nested node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// A literal string value.
    Str(String),
    /// A numeric value, emitted without a unit.
    Num(f64),
    /// A boolean value, emitted as `true`/`false`.
    Bool(bool),
    /// An absent value; the property is omitted on emission.
    Null,
    /// A list of strings (class-name aliases or a comma-joined value).
    List(Vec<String>),
    /// A nested style node.
    Block(StyleNode),
}

impl StyleValue {
    /// Returns the nested node if this value is a block.
    pub fn as_block(&self) -> Option<&StyleNode> {
        match self {
            StyleValue::Block(node) => Some(node),
            _ => None,
        }
    }

    /// Renders a scalar or list value as CSS declaration text.
    ///
    /// Returns `None` for `Null` (skip the property) and for `Block`
    /// (handled by recursion, never emitted inline).
    pub(crate) fn render(&self) -> Option<String> {
        match self {
            StyleValue::Str(s) => Some(s.clone()),
            StyleValue::Num(n) => Some(render_number(*n)),
            StyleValue::Bool(b) => Some(b.to_string()),
            StyleValue::List(items) => Some(items.join(", ")),
            StyleValue::Null | StyleValue::Block(_) => None,
        }
    }
}

/// Formats a number without a trailing `.0` when it is integral.
pub(crate) fn render_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Str(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Str(s)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Num(n)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Num(f64::from(n))
    }
}

impl From<u32> for StyleValue {
    fn from(n: u32) -> Self {
        StyleValue::Num(f64::from(n))
    }
}

impl From<bool> for StyleValue {
    fn from(b: bool) -> Self {
        StyleValue::Bool(b)
    }
}

impl From<StyleNode> for StyleValue {
    fn from(node: StyleNode) -> Self {
        StyleValue::Block(node)
    }
}

/// A nested style-description node: an insertion-ordered map from key to
/// [`StyleValue`].
///
/// The reserved `className` key supplies the selector class name(s) for
/// the node (a string, or a list of strings to emit one identical rule per
/// name during a class-name deprecation period). It is never emitted as a
/// CSS property.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct StyleNode {
    entries: IndexMap<String, StyleValue>,
}

impl StyleNode {
    /// Creates an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `className` key to a single class name. Returns self for
    /// chaining.
    pub fn class(self, name: impl Into<String>) -> Self {
        self.set(CLASS_NAME_KEY, StyleValue::Str(name.into()))
    }

    /// Sets the `className` key to a list of class names. Each name emits
    /// an identical rule block, supporting old/new class-name aliases.
    pub fn classes<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        self.set(CLASS_NAME_KEY, StyleValue::List(names))
    }

    /// Adds a property with a scalar value. Returns self for chaining.
    pub fn prop(self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.set(key, value.into())
    }

    /// Adds a nested block under the given key. Returns self for chaining.
    pub fn block(self, key: impl Into<String>, node: StyleNode) -> Self {
        self.set(key, StyleValue::Block(node))
    }

    /// Sets a key to an explicit [`StyleValue`]. Returns self for chaining.
    pub fn set(mut self, key: impl Into<String>, value: StyleValue) -> Self {
        self.entries.insert(key.into(), value);
        self
    }

    /// Inserts a key in place (non-chaining form of [`set`](Self::set)).
    pub fn insert(&mut self, key: impl Into<String>, value: StyleValue) {
        self.entries.insert(key.into(), value);
    }

    /// Looks up a value by key.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, StyleValue> {
        self.entries.iter()
    }

    /// Returns the number of keys, including `className`.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the node has no keys at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the class names declared on this node, in order.
    ///
    /// Empty when `className` is absent or not a string/list.
    pub fn class_names(&self) -> Vec<&str> {
        match self.entries.get(CLASS_NAME_KEY) {
            Some(StyleValue::Str(name)) => vec![name.as_str()],
            Some(StyleValue::List(names)) => names.iter().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }
}

impl<'a> IntoIterator for &'a StyleNode {
    type Item = (&'a String, &'a StyleValue);
    type IntoIter = indexmap::map::Iter<'a, String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Builder tests
    // =========================================================================

    #[test]
    fn test_builder_preserves_insertion_order() {
        let node = StyleNode::new()
            .prop("zIndex", 9)
            .prop("alpha", "1")
            .prop("marginTop", "4px");

        let keys: Vec<&str> = node.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zIndex", "alpha", "marginTop"]);
    }

    #[test]
    fn test_class_single() {
        let node = StyleNode::new().class("card");
        assert_eq!(node.class_names(), vec!["card"]);
    }

    #[test]
    fn test_classes_list() {
        let node = StyleNode::new().classes(["new-name", "old-name"]);
        assert_eq!(node.class_names(), vec!["new-name", "old-name"]);
    }

    #[test]
    fn test_class_names_absent() {
        let node = StyleNode::new().prop("color", "red");
        assert!(node.class_names().is_empty());
    }

    #[test]
    fn test_set_overwrites() {
        let node = StyleNode::new().prop("color", "red").prop("color", "blue");
        assert_eq!(node.len(), 1);
        assert_eq!(node.get("color"), Some(&StyleValue::Str("blue".into())));
    }

    #[test]
    fn test_nested_block() {
        let node = StyleNode::new()
            .class("card")
            .block("&:hover", StyleNode::new().prop("color", "blue"));

        let hover = node.get("&:hover").and_then(StyleValue::as_block);
        assert!(hover.is_some());
        assert_eq!(
            hover.unwrap().get("color"),
            Some(&StyleValue::Str("blue".into()))
        );
    }

    // =========================================================================
    // Value rendering tests
    // =========================================================================

    #[test]
    fn test_render_string() {
        assert_eq!(StyleValue::Str("18px".into()).render(), Some("18px".into()));
    }

    #[test]
    fn test_render_integral_number_has_no_decimal() {
        assert_eq!(StyleValue::Num(700.0).render(), Some("700".into()));
        assert_eq!(StyleValue::Num(0.0).render(), Some("0".into()));
    }

    #[test]
    fn test_render_fractional_number() {
        assert_eq!(StyleValue::Num(1.5).render(), Some("1.5".into()));
        assert_eq!(StyleValue::Num(0.25).render(), Some("0.25".into()));
    }

    #[test]
    fn test_render_negative_number() {
        assert_eq!(StyleValue::Num(-4.0).render(), Some("-4".into()));
    }

    #[test]
    fn test_render_bool() {
        assert_eq!(StyleValue::Bool(true).render(), Some("true".into()));
    }

    #[test]
    fn test_render_null_is_skipped() {
        assert_eq!(StyleValue::Null.render(), None);
    }

    #[test]
    fn test_render_block_is_skipped() {
        assert_eq!(StyleValue::Block(StyleNode::new()).render(), None);
    }

    #[test]
    fn test_render_list_joins_with_comma() {
        let value = StyleValue::List(vec!["Georgia".into(), "serif".into()]);
        assert_eq!(value.render(), Some("Georgia, serif".into()));
    }
}
