//! Caller-owned memoization of compiled sheets.
//!
//! The compiler itself is pure and retains nothing between calls;
//! consumers typically compile each style object once and reuse the
//! string for the lifetime of the process. [`SheetCache`] packages that
//! pattern: a by-name memo owned by the caller, kept outside the compiler
//! so the compiler stays trivially testable.
//!
//! For a module-level "compile once" static, wrap the compile call in
//! `once_cell::sync::Lazy` at the call site instead:
//!
//! ```rust,ignore
//! use once_cell::sync::Lazy;
//! use stylecast::{compile, StyleNode};
//!
//! static CARD_CSS: Lazy<String> = Lazy::new(|| {
//!     compile(&StyleNode::new().class("card").prop("padding", "16px"))
//! });
//! ```

use indexmap::IndexMap;

use crate::compile::{compile, merge_all};
use crate::node::StyleNode;

/// A by-name memo of compiled CSS sheets.
///
/// Rust values have no stable object identity, so entries are keyed by a
/// caller-chosen sheet name rather than by the node itself. Registration
/// order is preserved, which makes [`merged`](Self::merged) output
/// deterministic.
///
/// # Example
///
/// ```rust
/// use stylecast::{SheetCache, StyleNode};
///
/// let card = StyleNode::new().class("card").prop("padding", "16px");
///
/// let mut cache = SheetCache::new();
/// let css = cache.get_or_compile("card", &card).to_string();
/// // Second call is a lookup, not a recompile.
/// assert_eq!(cache.get_or_compile("card", &card), css);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SheetCache {
    entries: IndexMap<String, String>,
}

impl SheetCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the compiled CSS for `name`, compiling `node` on first use.
    ///
    /// The node is ignored on subsequent calls with the same name; use
    /// [`invalidate`](Self::invalidate) to force a recompile.
    pub fn get_or_compile(&mut self, name: &str, node: &StyleNode) -> &str {
        self.entries
            .entry(name.to_string())
            .or_insert_with(|| compile(node))
            .as_str()
    }

    /// Looks up a previously compiled sheet.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Returns true if a sheet is cached under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Removes a cached sheet. Returns true if it existed.
    ///
    /// Uses an order-preserving removal so `merged` output for the
    /// remaining sheets is unchanged.
    pub fn invalidate(&mut self, name: &str) -> bool {
        self.entries.shift_remove(name).is_some()
    }

    /// Joins all cached sheets, in registration order, into one payload
    /// suitable for a single `<style>` element.
    pub fn merged(&self) -> String {
        merge_all(self.entries.values())
    }

    /// Returns the number of cached sheets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
