//! # Stylecast - Style Objects to CSS Text
//!
//! Stylecast compiles nested style-description objects into literal CSS
//! text, the way a design system's web components want it: build a
//! [`StyleNode`] describing selectors, nested pseudo-classes, and media
//! queries, compile it once, and drop the resulting string into a
//! `<style>` element. It provides:
//!
//! - **A recursive compiler** ([`compile`]) with `&`-combinator and
//!   at-rule nesting
//! - **camelCase → kebab-case** property conversion with verbatim
//!   `--custom-properties`
//! - **Class-name aliasing** (a `className` list emits one identical rule
//!   per name, covering deprecation periods)
//! - **JSON and YAML input** with document order preserved
//! - **Fragment merging** ([`merge_all`]) and an optional
//!   [`prettify`] pass
//! - **Caller-owned caching** ([`SheetCache`]) keeping the compiler pure
//!
//! The compiler is a leaf utility: synchronous, stateless, infallible,
//! and deterministic. It never validates CSS, fixes vendor prefixes, or
//! minifies; those are external post-processing concerns.
//!
//! ## Core Concepts
//!
//! - [`StyleNode`]: insertion-ordered map of keys to [`StyleValue`]s.
//!   Emission order equals insertion order, so identical input always
//!   produces byte-identical output.
//! - `className` key: supplies the selector class name(s) for a node;
//!   never emitted as a property.
//! - `&`-keys: parent-relative combinators. The `&` is stripped and the
//!   remainder concatenated directly (`&:hover` → `.card:hover`; write
//!   `'& img'` for a descendant).
//! - `@`-keys: at-rule wrappers. The current selector is re-applied
//!   *inside* the at-rule, never hoisted out of it.
//! - Plain keys: CSS properties when the value is a scalar, descendant
//!   selectors when the value is a nested node.
//!
//! ## Quick Start
//!
//! ```rust
//! use stylecast::{compile, StyleNode};
//!
//! let card = StyleNode::new()
//!     .class("card")
//!     .prop("backgroundColor", "#fff")
//!     .prop("padding", "16px")
//!     .block("&:hover", StyleNode::new().prop("borderColor", "#e21833"));
//!
//! let css = compile(&card);
//! assert_eq!(css, "\
//! .card {
//!   background-color: #fff;
//!   padding: 16px;
//! }
//! .card:hover {
//!   border-color: #e21833;
//! }
//! ");
//! ```
//!
//! ## Media Queries
//!
//! ```rust
//! use stylecast::{compile, StyleNode};
//!
//! let grid = StyleNode::new()
//!     .class("grid")
//!     .prop("display", "block")
//!     .block(
//!         "@media (min-width: 768px)",
//!         StyleNode::new().prop("display", "grid"),
//!     );
//!
//! let css = compile(&grid);
//! assert!(css.contains("@media (min-width: 768px) {"));
//! // The selector is re-applied inside the at-rule.
//! assert!(css.contains("  .grid {"));
//! ```
//!
//! ## From JSON or YAML
//!
//! Style objects usually arrive as data, with key order carrying meaning:
//!
//! ```rust
//! use stylecast::{compile, StyleNode};
//!
//! let node = StyleNode::from_json_str(r#"{
//!     "className": "umd-sans-large",
//!     "fontSize": "18px",
//!     "&:hover": { "color": "red" }
//! }"#).unwrap();
//!
//! let css = compile(&node);
//! assert!(css.contains(".umd-sans-large {"));
//! assert!(css.contains(".umd-sans-large:hover {"));
//! ```
//!
//! ## Building a `<style>` Payload
//!
//! Components compose many compiled fragments into one sheet. Compile each
//! once, cache by name, and merge:
//!
//! ```rust
//! use stylecast::{merge_all, SheetCache, StyleNode};
//!
//! let mut cache = SheetCache::new();
//! cache.get_or_compile("card", &StyleNode::new().class("card").prop("padding", "16px"));
//! cache.get_or_compile("quote", &StyleNode::new().class("quote").prop("fontStyle", "italic"));
//!
//! let payload = cache.merged();
//! assert!(payload.contains(".card"));
//! assert!(payload.contains(".quote"));
//! ```
//!
//! No de-duplication happens on merge: later duplicate rules simply win
//! through the normal CSS cascade.

mod cache;
mod compile;
mod error;
mod node;

pub use cache::SheetCache;
pub use compile::{compile, compile_scoped, merge_all, prettify};
pub use error::{SourceFormat, StyleError};
pub use node::{classify, property_name_to_css, KeyKind, StyleNode, StyleValue, CLASS_NAME_KEY};
