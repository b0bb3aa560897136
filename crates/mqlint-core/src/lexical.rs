//! Lexical classification of source lines.
//!
//! Classification does not tokenize. It produces *views* of a line that
//! keep every byte offset intact: comment text is blanked to spaces, and
//! in the literal-free view the interior of string and character literals
//! is blanked as well. Checkers scan the views and report columns against
//! the raw line.
//!
//! Comment markers inside string literals are not recognised as literal
//! text: `"http://host"` starts a line comment at `//`.

/// Comment state carried from one line to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentState {
    /// The previous line ended inside an unterminated `/* ... */`.
    pub in_block_comment: bool,
}

/// Classify one line, returning its code view and the state for the next line.
///
/// A line that starts inside a block comment is non-code up to `*/` and
/// code afterwards. `//` ends the code portion unless it appears inside a
/// block comment opened earlier on the line.
pub fn classify_line(line: &str, state: CommentState) -> (String, CommentState) {
    let bytes = line.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut in_block = state.in_block_comment;
    let mut i = 0;

    while i < bytes.len() {
        let next = bytes.get(i + 1).copied();
        if in_block {
            if bytes[i] == b'*' && next == Some(b'/') {
                out.extend_from_slice(b"  ");
                in_block = false;
                i += 2;
            } else {
                out.push(b' ');
                i += 1;
            }
        } else if bytes[i] == b'/' && next == Some(b'/') {
            out.resize(bytes.len(), b' ');
            break;
        } else if bytes[i] == b'/' && next == Some(b'*') {
            out.extend_from_slice(b"  ");
            in_block = true;
            i += 2;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }

    // Comment boundaries are ASCII, so every kept multi-byte sequence is intact.
    let code = String::from_utf8_lossy(&out).into_owned();
    (
        code,
        CommentState {
            in_block_comment: in_block,
        },
    )
}

/// Classify a whole document, threading the block-comment flag through.
pub fn classify_lines<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut state = CommentState::default();
    lines
        .into_iter()
        .map(|line| {
            let (code, next) = classify_line(line, state);
            state = next;
            code
        })
        .collect()
}

/// Blank the interior of string and character literals in a code view.
///
/// The quote characters stay in place so declaration patterns can still
/// see that a literal was assigned. An unterminated literal runs to the end
/// of the line.
pub fn mask_literals(code: &str) -> String {
    let bytes = code.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut quote: Option<u8> = None;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(_) if b == b'\\' => {
                out.push(b' ');
                if i + 1 < bytes.len() {
                    out.push(b' ');
                }
                i += 2;
                continue;
            }
            Some(q) if b == q => {
                out.push(b);
                quote = None;
            }
            Some(_) => out.push(b' '),
            None if b == b'"' || b == b'\'' => {
                out.push(b);
                quote = Some(b);
            }
            None => out.push(b),
        }
        i += 1;
    }

    out.truncate(bytes.len());
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(line: &str) -> String {
        classify_line(line, CommentState::default()).0
    }

    #[test]
    fn line_comment_is_blanked() {
        let c = code("int x = 5; // note");
        assert_eq!(c.len(), "int x = 5; // note".len());
        assert_eq!(c.trim_end(), "int x = 5;");
    }

    #[test]
    fn inline_block_comment_keeps_trailing_code() {
        let c = code("int x /* tmp */ = 5;");
        assert_eq!(c, "int x           = 5;");
    }

    #[test]
    fn unterminated_block_carries_over() {
        let (c, state) = classify_line("x = 1; /* start", CommentState::default());
        assert_eq!(c.trim_end(), "x = 1;");
        assert!(state.in_block_comment);

        let (c, state) = classify_line("still comment", state);
        assert!(c.trim().is_empty());
        assert!(state.in_block_comment);

        let (c, state) = classify_line("end */ y = 2;", state);
        assert_eq!(c.trim(), "y = 2;");
        assert!(!state.in_block_comment);
    }

    #[test]
    fn line_comment_inside_block_is_ignored() {
        let (c, state) = classify_line("/* a // b */ z = 3;", CommentState::default());
        assert_eq!(c.trim(), "z = 3;");
        assert!(!state.in_block_comment);
    }

    #[test]
    fn comment_marker_in_string_is_treated_as_comment() {
        let c = code(r#"string url = "http://example.com";"#);
        assert_eq!(c.trim_end(), r#"string url = "http:"#);
    }

    #[test]
    fn classify_lines_threads_state() {
        let views = classify_lines(["/*", "int a;", "*/", "int b;"]);
        assert!(views[1].trim().is_empty());
        assert_eq!(views[3], "int b;");
    }

    #[test]
    fn multibyte_text_preserves_byte_length() {
        let line = "x = 1; // привет";
        assert_eq!(code(line).len(), line.len());
    }

    #[test]
    fn literals_are_masked_but_quotes_kept() {
        assert_eq!(
            mask_literals(r#"Print("a (b", 'c');"#),
            r#"Print("    ", ' ');"#
        );
    }

    #[test]
    fn escaped_quote_stays_inside_literal() {
        let masked = mask_literals(r#"s = "say \"hi\""; y = 1;"#);
        assert!(masked.ends_with("; y = 1;"));
        assert!(!masked.contains("hi"));
    }

    #[test]
    fn unterminated_literal_runs_to_end() {
        assert_eq!(mask_literals(r#"s = "open"#), r#"s = "    "#);
    }
}
