//! Key classification and property-name conversion.
//!
//! A `StyleNode` key can play one of four roles, disambiguated by a sigil
//! prefix. Rather than scattering `starts_with` checks through the
//! compiler, [`classify`] resolves the role once per key so each branch of
//! the recursive descent can be tested independently.
//!
//! | Key shape | Role |
//! |-----------|------|
//! | `className` | Reserved: supplies the selector class name(s) |
//! | `@media ...`, `@keyframes ...` | At-rule wrapper |
//! | `&:hover`, `& img` | Combinator relative to the parent selector |
//! | anything else | CSS property (or descendant selector when nested) |

/// Reserved key that supplies the selector class name(s) for a node.
pub const CLASS_NAME_KEY: &str = "className";

/// Role of a `StyleNode` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// The reserved `className` key.
    ClassName,
    /// An at-rule header (`@media`, `@keyframes`, `@supports`, ...).
    AtRule,
    /// A parent-relative combinator key (`&:hover`, `& img`).
    Combinator,
    /// A plain CSS property name, or a descendant selector when the value
    /// is a nested block.
    Property,
}

/// Classifies a `StyleNode` key by its sigil prefix.
///
/// # Example
///
/// ```rust
/// use stylecast::{classify, KeyKind};
///
/// assert_eq!(classify("className"), KeyKind::ClassName);
/// assert_eq!(classify("@media (min-width: 768px)"), KeyKind::AtRule);
/// assert_eq!(classify("&:hover"), KeyKind::Combinator);
/// assert_eq!(classify("backgroundColor"), KeyKind::Property);
/// ```
pub fn classify(key: &str) -> KeyKind {
    if key == CLASS_NAME_KEY {
        KeyKind::ClassName
    } else if key.starts_with('@') {
        KeyKind::AtRule
    } else if key.starts_with('&') {
        KeyKind::Combinator
    } else {
        KeyKind::Property
    }
}

/// Converts a camelCase property key to its kebab-case CSS form.
///
/// A hyphen is inserted before every uppercase letter, including a leading
/// one, and the letter is lowercased. This is deliberately naive:
/// `WebkitTransform` becomes `-webkit-transform` with no vendor-prefix
/// awareness.
///
/// Custom-property keys beginning with `--` are returned verbatim, since
/// `--primaryColor` and `--primary-color` are distinct CSS identifiers.
///
/// # Example
///
/// ```rust
/// use stylecast::property_name_to_css;
///
/// assert_eq!(property_name_to_css("backgroundColor"), "background-color");
/// assert_eq!(property_name_to_css("WebkitTransform"), "-webkit-transform");
/// assert_eq!(property_name_to_css("--primaryColor"), "--primaryColor");
/// ```
pub fn property_name_to_css(key: &str) -> String {
    if key.starts_with("--") {
        return key.to_string();
    }

    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_uppercase() {
            out.push('-');
            for lc in ch.to_lowercase() {
                out.push(lc);
            }
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // classify tests
    // =========================================================================

    #[test]
    fn test_classify_class_name() {
        assert_eq!(classify("className"), KeyKind::ClassName);
    }

    #[test]
    fn test_classify_at_rule() {
        assert_eq!(classify("@media (min-width: 768px)"), KeyKind::AtRule);
        assert_eq!(classify("@keyframes fade-in"), KeyKind::AtRule);
        assert_eq!(classify("@font-face"), KeyKind::AtRule);
        assert_eq!(classify("@supports (display: grid)"), KeyKind::AtRule);
        assert_eq!(classify("@container (min-width: 400px)"), KeyKind::AtRule);
    }

    #[test]
    fn test_classify_combinator() {
        assert_eq!(classify("&:hover"), KeyKind::Combinator);
        assert_eq!(classify("& img"), KeyKind::Combinator);
        assert_eq!(classify("&::before"), KeyKind::Combinator);
        assert_eq!(classify("&.is-open"), KeyKind::Combinator);
    }

    #[test]
    fn test_classify_property() {
        assert_eq!(classify("color"), KeyKind::Property);
        assert_eq!(classify("backgroundColor"), KeyKind::Property);
        assert_eq!(classify("--primaryColor"), KeyKind::Property);
        // Descendant selectors are Property too; the compiler decides by
        // value shape whether to emit a declaration or recurse.
        assert_eq!(classify("img"), KeyKind::Property);
    }

    #[test]
    fn test_classify_class_name_is_exact_match() {
        // Only the exact reserved key is special.
        assert_eq!(classify("classNames"), KeyKind::Property);
        assert_eq!(classify("classname"), KeyKind::Property);
    }

    // =========================================================================
    // property_name_to_css tests
    // =========================================================================

    #[test]
    fn test_kebab_simple() {
        assert_eq!(property_name_to_css("fontSize"), "font-size");
        assert_eq!(property_name_to_css("backgroundColor"), "background-color");
        assert_eq!(property_name_to_css("marginTop"), "margin-top");
    }

    #[test]
    fn test_kebab_already_lowercase() {
        assert_eq!(property_name_to_css("color"), "color");
        assert_eq!(property_name_to_css("display"), "display");
    }

    #[test]
    fn test_kebab_leading_uppercase() {
        assert_eq!(property_name_to_css("WebkitTransform"), "-webkit-transform");
        assert_eq!(property_name_to_css("MozAppearance"), "-moz-appearance");
    }

    #[test]
    fn test_kebab_multiple_words() {
        assert_eq!(
            property_name_to_css("borderBottomLeftRadius"),
            "border-bottom-left-radius"
        );
    }

    #[test]
    fn test_custom_property_verbatim() {
        assert_eq!(property_name_to_css("--primaryColor"), "--primaryColor");
        assert_eq!(property_name_to_css("--spacingMd"), "--spacingMd");
        assert_eq!(property_name_to_css("--plain"), "--plain");
    }

    #[test]
    fn test_single_leading_hyphen_is_converted() {
        // Only the double-hyphen custom-property form is preserved.
        assert_eq!(property_name_to_css("-fooBar"), "-foo-bar");
    }
}
