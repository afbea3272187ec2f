//! The style-description data model.
//!
//! This module defines [`StyleNode`], the recursive input to the compiler:
//! an insertion-ordered map whose keys are CSS properties, parent-relative
//! combinators (`&:hover`), at-rule headers (`@media ...`), or descendant
//! selectors, disambiguated by [`classify`].
//!
//! # Module Structure
//!
//! - `value`: [`StyleNode`] and [`StyleValue`] with the fluent builder
//! - `key`: key classification and camelCase→kebab-case conversion
//! - `source`: JSON/YAML adapters (`from_json_str`, `from_yaml_str`)

mod key;
mod source;
mod value;

pub use key::{classify, property_name_to_css, KeyKind, CLASS_NAME_KEY};
pub use value::{StyleNode, StyleValue};
