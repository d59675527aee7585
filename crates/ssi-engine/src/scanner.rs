//! Directive tag scanning.
//!
//! Finds every well-formed `<!--#name key="value" -->` tag in the input,
//! scanning left to right with no overlaps.

/// Opening delimiter of a directive tag.
const OPEN_MARKER: &str = "<!--#";

/// Closing delimiter of a directive tag.
const CLOSE_MARKER: &str = "-->";

/// A directive tag occurrence found by the scanner.
///
/// Produced once per match and never mutated; handlers receive it by
/// reference for the duration of one parse call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveTag {
    /// Full matched text, including the `<!--#` and `-->` delimiters.
    pub raw: String,
    /// Byte offset of the tag within the scanned content.
    pub offset: usize,
    /// Directive name (the token immediately after `<!--#`).
    pub name: String,
    /// Raw parameter substring between the name separator and `-->`.
    pub params: String,
}

impl DirectiveTag {
    /// Byte offset immediately after the tag's raw text.
    #[must_use]
    pub fn end(&self) -> usize {
        self.offset + self.raw.len()
    }
}

/// Scan `input` for directive tags, left to right, without overlaps.
///
/// The result is deterministic: every substring matching the tag grammar is
/// covered, with overlapping candidates resolved to whichever valid match
/// starts first. A candidate that deviates from the grammar in any way
/// produces no match; scanning then resumes one byte further, which is what
/// makes an inner self-contained tag visible when the enclosing candidate is
/// not itself grammatically valid.
pub(crate) fn scan(input: &str) -> Vec<DirectiveTag> {
    let mut tags = Vec::new();
    let mut pos = 0;

    while let Some(found) = input[pos..].find(OPEN_MARKER) {
        let start = pos + found;
        if let Some(tag) = match_tag(&input[start..], start) {
            pos = tag.end();
            tags.push(tag);
        } else {
            pos = start + 1;
        }
    }

    tags
}

/// Try to match a complete tag at the start of `candidate`.
///
/// Grammar: `<!--#`, a name of one or more ASCII letters/underscores,
/// exactly one space, zero or more `key="value"` parameters each followed by
/// exactly one space, then `-->` with nothing in between.
fn match_tag(candidate: &str, offset: usize) -> Option<DirectiveTag> {
    debug_assert!(candidate.starts_with(OPEN_MARKER));
    let mut pos = OPEN_MARKER.len();

    let name_start = pos;
    pos += name_len(&candidate[pos..]);
    if pos == name_start {
        return None;
    }
    let name = &candidate[name_start..pos];

    if candidate.as_bytes().get(pos) != Some(&b' ') {
        return None;
    }
    pos += 1;

    let params_start = pos;
    loop {
        if candidate[pos..].starts_with(CLOSE_MARKER) {
            let end = pos + CLOSE_MARKER.len();
            return Some(DirectiveTag {
                raw: candidate[..end].to_owned(),
                offset,
                name: name.to_owned(),
                params: candidate[params_start..pos].to_owned(),
            });
        }
        pos = match_param(candidate, pos)?;
    }
}

/// Match one `key="value" ` parameter starting at `pos`.
///
/// Double quotes are mandatory and the trailing space is part of the
/// parameter. Returns the position after that space.
fn match_param(candidate: &str, mut pos: usize) -> Option<usize> {
    let key_len = name_len(&candidate[pos..]);
    if key_len == 0 {
        return None;
    }
    pos += key_len;

    if !candidate[pos..].starts_with("=\"") {
        return None;
    }
    pos += 2;

    let value_len = candidate[pos..].find('"')?;
    pos += value_len + 1;

    if candidate.as_bytes().get(pos) != Some(&b' ') {
        return None;
    }
    Some(pos + 1)
}

/// Length of the leading run of name characters (ASCII letters and `_`).
fn name_len(s: &str) -> usize {
    s.bytes()
        .take_while(|b| b.is_ascii_alphabetic() || *b == b'_')
        .count()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_single_tag() {
        let tags = scan(r#"Value: <!--#echo var="HOST" -->!"#);
        assert_eq!(
            tags,
            vec![DirectiveTag {
                raw: r#"<!--#echo var="HOST" -->"#.to_owned(),
                offset: 7,
                name: "echo".to_owned(),
                params: r#"var="HOST" "#.to_owned(),
            }]
        );
        assert_eq!(tags[0].end(), 31);
    }

    #[test]
    fn test_multiple_tags_in_order() {
        let input = r#"<!--#echo var="A" --> and <!--#echo var="B" -->"#;
        let tags = scan(input);
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].offset, 0);
        assert_eq!(tags[1].offset, 26);
        assert!(tags[0].end() <= tags[1].offset);
    }

    #[test]
    fn test_tag_without_parameters() {
        let tags = scan("<!--#printenv -->");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "printenv");
        assert_eq!(tags[0].params, "");
    }

    #[test]
    fn test_multiple_parameters() {
        let tags = scan(r#"<!--#config timefmt="%T" sizefmt="bytes" -->"#);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "config");
        assert_eq!(tags[0].params, r#"timefmt="%T" sizefmt="bytes" "#);
    }

    #[test]
    fn test_parameter_value_may_contain_spaces() {
        // Accepted by the grammar; whether a handler resolves it is its own
        // business.
        let tags = scan(r#"<!--#echo var="two words" -->"#);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].params, r#"var="two words" "#);
    }

    #[test]
    fn test_name_with_underscore() {
        let tags = scan(r#"<!--#last_modified file="x" -->"#);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "last_modified");
    }

    #[test]
    fn test_rejects_space_before_hash() {
        assert!(scan(r#"<!-- #echo var="HOST" -->"#).is_empty());
    }

    #[test]
    fn test_rejects_single_quoted_value() {
        assert!(scan("<!--#echo var='HOST' -->").is_empty());
    }

    #[test]
    fn test_rejects_missing_close_marker() {
        assert!(scan(r#"<!--#echo var="HOST""#).is_empty());
    }

    #[test]
    fn test_rejects_digit_in_name() {
        assert!(scan(r#"<!--#echo2 var="HOST" -->"#).is_empty());
    }

    #[test]
    fn test_rejects_missing_separator_space() {
        assert!(scan("<!--#echo-->").is_empty());
    }

    #[test]
    fn test_rejects_double_space_after_name() {
        assert!(scan(r#"<!--#echo  var="HOST" -->"#).is_empty());
    }

    #[test]
    fn test_rejects_missing_space_after_parameter() {
        assert!(scan(r#"<!--#echo var="HOST"-->"#).is_empty());
    }

    #[test]
    fn test_no_markers_at_all() {
        assert!(scan("plain text, no directives").is_empty());
        assert!(scan("").is_empty());
    }

    #[test]
    fn test_nested_candidate_matches_innermost() {
        // The outer candidate's parameter section runs into a second open
        // marker, so the outer span is not a valid tag; the inner one is.
        let input = r#"Foo <!--#echo var="A" <!--#echo var="B" --> -->"#;
        let tags = scan(input);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].raw, r#"<!--#echo var="B" -->"#);
        assert_eq!(tags[0].offset, 22);
    }

    #[test]
    fn test_invalid_then_valid_tag() {
        let input = r#"<!--#bad'] <!--#echo var="A" -->"#;
        let tags = scan(input);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "echo");
    }

    #[test]
    fn test_adjacent_tags_do_not_overlap() {
        let input = r#"<!--#echo var="A" --><!--#echo var="B" -->"#;
        let tags = scan(input);
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].end(), tags[1].offset);
    }

    #[test]
    fn test_offsets_with_multibyte_prefix() {
        let input = "caf\u{e9} <!--#echo var=\"A\" -->";
        let tags = scan(input);
        assert_eq!(tags.len(), 1);
        assert_eq!(&input[tags[0].offset..tags[0].end()], tags[0].raw);
    }
}
