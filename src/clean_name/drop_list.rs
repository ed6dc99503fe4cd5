//! Split drag-and-drop payloads into individual paths.
//!
//! Drop events deliver several paths in one string using Tcl list syntax:
//! elements are separated by whitespace, and paths containing spaces are
//! wrapped in braces, for example `{/tmp/with space.txt} /tmp/plain.txt`.

use std::iter::Peekable;
use std::str::Chars;

/// Split a list string into its elements.
///
/// Malformed input, such as an unbalanced brace or quote,
/// is returned as a single element containing the whole trimmed string.
///
/// ```rust
/// use rename_tools::clean_name::split_path_list;
///
/// let paths = split_path_list("{/tmp/a file.txt} /tmp/b_c.pdf");
/// assert_eq!(paths, vec!["/tmp/a file.txt", "/tmp/b_c.pdf"]);
/// ```
#[must_use]
pub fn split_path_list(data: &str) -> Vec<String> {
    parse_list(data).unwrap_or_else(|| {
        let trimmed = data.trim();
        if trimmed.is_empty() {
            Vec::new()
        } else {
            vec![trimmed.to_string()]
        }
    })
}

fn parse_list(data: &str) -> Option<Vec<String>> {
    let mut elements = Vec::new();
    let mut chars = data.chars().peekable();
    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        let Some(&first) = chars.peek() else {
            return Some(elements);
        };
        let element = match first {
            '{' => {
                chars.next();
                braced_element(&mut chars)?
            }
            '"' => {
                chars.next();
                quoted_element(&mut chars)?
            }
            _ => bare_element(&mut chars),
        };
        elements.push(element);
    }
}

/// Read a braced element verbatim, counting nested braces.
fn braced_element(chars: &mut Peekable<Chars<'_>>) -> Option<String> {
    let mut element = String::new();
    let mut depth = 1_usize;
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                // Escaped characters are kept as-is but never count as braces
                element.push(c);
                if let Some(next) = chars.next() {
                    element.push(next);
                }
            }
            '{' => {
                depth += 1;
                element.push(c);
            }
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return end_of_element(chars).then_some(element);
                }
                element.push(c);
            }
            _ => element.push(c),
        }
    }
    None
}

/// Read a quoted element with backslash substitution.
fn quoted_element(chars: &mut Peekable<Chars<'_>>) -> Option<String> {
    let mut element = String::new();
    while let Some(c) = chars.next() {
        match c {
            '\\' => element.push(unescape(chars)),
            '"' => return end_of_element(chars).then_some(element),
            _ => element.push(c),
        }
    }
    None
}

/// Read an unquoted element up to the next whitespace.
fn bare_element(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut element = String::new();
    while let Some(c) = chars.next_if(|c| !c.is_whitespace()) {
        if c == '\\' {
            element.push(unescape(chars));
        } else {
            element.push(c);
        }
    }
    element
}

/// A closing brace or quote must be followed by whitespace or the end of input.
fn end_of_element(chars: &mut Peekable<Chars<'_>>) -> bool {
    chars.peek().is_none_or(|c| c.is_whitespace())
}

fn unescape(chars: &mut Peekable<Chars<'_>>) -> char {
    match chars.next() {
        Some('n') => '\n',
        Some('t') => '\t',
        Some(c) => c,
        None => '\\',
    }
}

#[cfg(test)]
mod drop_list_tests {
    use super::*;

    #[test]
    fn splits_plain_paths() {
        assert_eq!(
            split_path_list("/tmp/a_b.txt /tmp/c_d.pdf"),
            vec!["/tmp/a_b.txt", "/tmp/c_d.pdf"]
        );
    }

    #[test]
    fn braces_keep_spaces() {
        assert_eq!(
            split_path_list("{C:/My Files/x_y.txt} C:/other/z.txt"),
            vec!["C:/My Files/x_y.txt", "C:/other/z.txt"]
        );
    }

    #[test]
    fn single_braced_path() {
        assert_eq!(split_path_list("{/tmp/with space.txt}"), vec!["/tmp/with space.txt"]);
    }

    #[test]
    fn nested_braces_are_kept() {
        assert_eq!(split_path_list("{/tmp/{x}.txt}"), vec!["/tmp/{x}.txt"]);
    }

    #[test]
    fn quoted_element_keeps_spaces() {
        assert_eq!(
            split_path_list(r#""/tmp/quoted name.txt" /tmp/b.txt"#),
            vec!["/tmp/quoted name.txt", "/tmp/b.txt"]
        );
    }

    #[test]
    fn backslash_escapes_space_in_bare_element() {
        assert_eq!(split_path_list(r"/tmp/a\ b.txt"), vec!["/tmp/a b.txt"]);
    }

    #[test]
    fn extra_whitespace_is_ignored() {
        assert_eq!(split_path_list("  /a.txt \n\t /b.txt  "), vec!["/a.txt", "/b.txt"]);
    }

    #[test]
    fn empty_input() {
        assert!(split_path_list("").is_empty());
        assert!(split_path_list("   ").is_empty());
    }

    #[test]
    fn unbalanced_brace_falls_back_to_whole_string() {
        assert_eq!(split_path_list(" {/tmp/broken.txt "), vec!["{/tmp/broken.txt"]);
    }

    #[test]
    fn unterminated_quote_falls_back_to_whole_string() {
        assert_eq!(split_path_list(r#""/tmp/x.txt"#), vec![r#""/tmp/x.txt"#]);
    }

    #[test]
    fn text_after_closing_brace_falls_back_to_whole_string() {
        assert_eq!(split_path_list("{/a}b"), vec!["{/a}b"]);
    }
}
