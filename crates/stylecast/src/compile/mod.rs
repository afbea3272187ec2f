//! Compilation: style nodes in, CSS text out.
//!
//! - `compiler`: the recursive transform ([`compile`], [`compile_scoped`])
//!   and fragment joining ([`merge_all`])
//! - `prettify`: optional whitespace normalization over compiled text

mod compiler;
mod prettify;

pub use compiler::{compile, compile_scoped, merge_all};
pub use prettify::prettify;
