// LineSift - core/lines.rs
//
// Line splitting. A line is a maximal run of characters between
// terminators, where a terminator is "\n", "\r\n", or a lone "\r".

/// Split `text` into lines.
///
/// A trailing terminator does not produce an extra empty line, so an empty
/// input yields no lines and `"a\n"` yields `["a"]`. Interior empty lines
/// are preserved.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(text[start..i].to_string());
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(text[start..i].to_string());
                i += 1;
                if i < bytes.len() && bytes[i] == b'\n' {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < bytes.len() {
        lines.push(text[start..].to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_has_no_lines() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_trailing_newline_is_not_a_line() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_mixed_terminators() {
        assert_eq!(split_lines("one\r\ntwo\rthree\nfour"), vec![
            "one", "two", "three", "four"
        ]);
    }

    #[test]
    fn test_interior_blank_lines_kept() {
        assert_eq!(split_lines("a\n\n\nb"), vec!["a", "", "", "b"]);
        assert_eq!(split_lines("\n"), vec![""]);
        assert_eq!(split_lines("\r\n\r\n"), vec!["", ""]);
    }

    #[test]
    fn test_multibyte_text_is_not_split_mid_char() {
        assert_eq!(split_lines("caf\u{e9}\n\u{1f34e} apple"), vec![
            "caf\u{e9}",
            "\u{1f34e} apple"
        ]);
    }
}
