//! Whitespace normalization for compiled CSS text.
//!
//! [`prettify`] is a pure post-processing pass, independent of the
//! compiler contract: it re-indents by brace depth and puts one
//! declaration per line, leaving every token intact. Quoted strings pass
//! through untouched. Running it over already-pretty compiler output is a
//! no-op in structure.

/// Re-indents CSS text by brace depth, one declaration per line.
///
/// # Example
///
/// ```rust
/// use stylecast::prettify;
///
/// let ugly = ".card{color: red;padding: 4px;}";
/// assert_eq!(prettify(ugly), ".card {\n  color: red;\n  padding: 4px;\n}\n");
/// ```
pub fn prettify(css: &str) -> String {
    let mut out = String::with_capacity(css.len() + css.len() / 4);
    let mut depth: usize = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for ch in css.chars() {
        if let Some(q) = quote {
            out.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == q {
                quote = None;
            }
            continue;
        }

        match ch {
            '"' | '\'' => {
                if at_line_start(&out) {
                    push_indent(&mut out, depth);
                }
                out.push(ch);
                quote = Some(ch);
            }
            '{' => {
                trim_line_end(&mut out);
                if at_line_start(&out) {
                    push_indent(&mut out, depth);
                } else {
                    out.push(' ');
                }
                out.push_str("{\n");
                depth += 1;
            }
            '}' => {
                trim_line_end(&mut out);
                if !at_line_start(&out) {
                    out.push('\n');
                }
                depth = depth.saturating_sub(1);
                push_indent(&mut out, depth);
                out.push_str("}\n");
            }
            ';' => {
                trim_line_end(&mut out);
                out.push_str(";\n");
            }
            c if c.is_whitespace() => {
                // Collapse runs; never open a line with whitespace.
                if !at_line_start(&out) && !out.ends_with(' ') {
                    out.push(' ');
                }
            }
            c => {
                if at_line_start(&out) {
                    push_indent(&mut out, depth);
                }
                out.push(c);
            }
        }
    }

    trim_line_end(&mut out);
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn at_line_start(out: &str) -> bool {
    out.is_empty() || out.ends_with('\n')
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn trim_line_end(out: &mut String) {
    while out.ends_with(' ') || out.ends_with('\t') {
        out.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Basic formatting tests
    // =========================================================================

    #[test]
    fn test_minified_rule() {
        assert_eq!(
            prettify(".a{color: red;}"),
            ".a {\n  color: red;\n}\n"
        );
    }

    #[test]
    fn test_nested_at_rule_indentation() {
        assert_eq!(
            prettify("@media (min-width: 768px){.box{display: flex;}}"),
            "@media (min-width: 768px) {\n  .box {\n    display: flex;\n  }\n}\n"
        );
    }

    #[test]
    fn test_collapses_blank_lines_and_runs_of_spaces() {
        assert_eq!(
            prettify(".a   {\n\n\n  color:   red;\n}\n"),
            ".a {\n  color: red;\n}\n"
        );
    }

    #[test]
    fn test_idempotent_on_pretty_output() {
        let pretty = ".card {\n  color: red;\n}\n.card:hover {\n  color: blue;\n}\n";
        assert_eq!(prettify(pretty), pretty);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(prettify(""), "");
        assert_eq!(prettify("   \n  "), "");
    }

    // =========================================================================
    // String-literal handling tests
    // =========================================================================

    #[test]
    fn test_quoted_content_untouched() {
        let css = r#".a{content: "a { b ; c }";}"#;
        let pretty = prettify(css);
        assert!(pretty.contains(r#""a { b ; c }""#));
        // The braces inside the string must not affect nesting.
        assert!(pretty.ends_with("}\n"));
    }

    #[test]
    fn test_escaped_quote_inside_string() {
        let css = ".a{content: \"say \\\"hi\\\"\";}";
        let pretty = prettify(css);
        assert!(pretty.contains("say \\\"hi\\\""));
    }

    // =========================================================================
    // Robustness tests
    // =========================================================================

    #[test]
    fn test_unbalanced_closing_brace_does_not_panic() {
        let pretty = prettify("}}}.a{color: red;}");
        assert!(pretty.contains("color: red;"));
    }
}
