//! The recursive style-object-to-CSS transform.
//!
//! # Selector resolution
//!
//! The effective selector(s) for a node come from its `className` key when
//! present (`.` + each name; a list of names emits one identical rule per
//! name). Otherwise the selector context passed down by the caller is
//! used; when that too is empty, scalar declarations are emitted unscoped.
//!
//! # Child selectors
//!
//! - `&`-keys strip the `&` and concatenate the remainder directly onto
//!   the parent selector: `.card` + `&:hover` → `.card:hover`. The author
//!   supplies any needed space (`'& img'` → `.card img`).
//! - Plain keys with block values join with a space as descendant
//!   selectors: `.card` + `img` → `.card img`.
//! - `@`-keys are not selectors: the key text becomes an at-rule header
//!   wrapping the recursively compiled content, with the current selector
//!   context passed through unchanged. A selector's declarations therefore
//!   re-appear inside the at-rule rather than being hoisted out of it.
//!
//! # Emission order
//!
//! A node's own declaration block comes first, then its nested and at-rule
//! blocks in original key insertion order. Properties with `Null` values
//! are skipped; a block is only emitted when at least one declaration or
//! nested rule survives.

use crate::node::{classify, property_name_to_css, KeyKind, StyleNode};

/// Compiles a style node into CSS text.
///
/// The selector is derived from the node's `className` key; nodes without
/// one emit their scalar declarations unscoped. Pure and deterministic:
/// identical input yields byte-identical output, and no input panics.
///
/// # Example
///
/// ```rust
/// use stylecast::{compile, StyleNode};
///
/// let node = StyleNode::new()
///     .class("umd-sans-large")
///     .prop("fontSize", "18px")
///     .block("&:hover", StyleNode::new().prop("color", "red"));
///
/// let css = compile(&node);
/// assert!(css.contains(".umd-sans-large {"));
/// assert!(css.contains("font-size: 18px;"));
/// assert!(css.contains(".umd-sans-large:hover {"));
/// ```
pub fn compile(node: &StyleNode) -> String {
    compile_scoped(node, "")
}

/// Compiles a style node within an explicit selector context.
///
/// The context is used only when the node has no `className` key of its
/// own; a `className` always wins.
pub fn compile_scoped(node: &StyleNode, selector: &str) -> String {
    let mut out = String::new();

    let class_names = node.class_names();
    if class_names.is_empty() {
        emit_node(node, selector, &mut out);
    } else {
        // One full rule set per class name, identical bodies. Supports the
        // old/new class-name alias pattern during deprecation periods.
        for name in class_names {
            let selector = format!(".{}", name);
            emit_node(node, &selector, &mut out);
        }
    }

    out
}

/// Joins pre-compiled CSS fragments with single newlines.
///
/// Empty and whitespace-only fragments are dropped; everything else passes
/// through untouched, in order, with no de-duplication. Overriding
/// duplicate (selector, property) pairs is left to the CSS cascade.
///
/// # Example
///
/// ```rust
/// use stylecast::{compile, merge_all, StyleNode};
///
/// let a = compile(&StyleNode::new().class("a").prop("color", "red"));
/// let b = compile(&StyleNode::new().class("b").prop("color", "blue"));
/// let sheet = merge_all([a, b]);
/// assert!(sheet.contains(".a {"));
/// assert!(sheet.contains(".b {"));
/// ```
pub fn merge_all<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for fragment in fragments {
        let fragment = fragment.as_ref().trim_end();
        if fragment.trim().is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(fragment);
        out.push('\n');
    }
    out
}

/// Emits one node's declaration block and nested rules for one selector.
fn emit_node(node: &StyleNode, selector: &str, out: &mut String) {
    // Declarations first.
    let mut decls: Vec<(String, String)> = Vec::new();
    for (key, value) in node {
        if classify(key.as_str()) != KeyKind::Property {
            continue;
        }
        if let Some(rendered) = value.render() {
            decls.push((property_name_to_css(key), rendered));
        }
    }

    if !decls.is_empty() {
        if selector.is_empty() {
            for (name, value) in &decls {
                out.push_str(name);
                out.push_str(": ");
                out.push_str(value);
                out.push_str(";\n");
            }
        } else {
            out.push_str(selector);
            out.push_str(" {\n");
            for (name, value) in &decls {
                out.push_str("  ");
                out.push_str(name);
                out.push_str(": ");
                out.push_str(value);
                out.push_str(";\n");
            }
            out.push_str("}\n");
        }
    }

    // Then nested and at-rule blocks, in insertion order.
    for (key, value) in node {
        let Some(child) = value.as_block() else {
            continue;
        };
        match classify(key.as_str()) {
            KeyKind::Combinator => {
                let child_selector = format!("{}{}", selector, &key[1..]);
                out.push_str(&compile_scoped(child, &child_selector));
            }
            KeyKind::AtRule => {
                let inner = compile_scoped(child, selector);
                if !inner.is_empty() {
                    out.push_str(key);
                    out.push_str(" {\n");
                    out.push_str(&indent(&inner));
                    out.push_str("}\n");
                }
            }
            KeyKind::Property => {
                let child_selector = if selector.is_empty() {
                    key.clone()
                } else {
                    format!("{} {}", selector, key)
                };
                out.push_str(&compile_scoped(child, &child_selector));
            }
            // className can only hold a string or a list; a block here is
            // malformed input and dropped, best-effort.
            KeyKind::ClassName => {}
        }
    }
}

/// Indents every non-empty line by one level.
fn indent(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    for line in text.lines() {
        if !line.is_empty() {
            out.push_str("  ");
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}
