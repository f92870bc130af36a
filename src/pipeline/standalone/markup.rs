//! Minimal structural scan of HTML markup.
//!
//! Just enough parsing to locate `<script>` and `<link>` reference tags with
//! their attributes and byte spans, so the bundler can excise exactly the
//! tags it inlines. Not a general HTML parser; anything it does not
//! recognize is left untouched.

use std::ops::Range;

/// A `<script>` or `<link>` tag found in markup.
///
/// For script tags the span extends through the matching `</script>` so a
/// removal takes the whole element, including any inline body.
#[derive(Debug, Clone, PartialEq)]
pub struct RefTag {
    /// Lowercased tag name: `"script"` or `"link"`.
    pub name: String,
    /// Attributes in document order, names lowercased.
    pub attrs: Vec<(String, String)>,
    /// Byte range covering the whole tag in the scanned markup.
    pub span: Range<usize>,
}

impl RefTag {
    /// Returns the value of an attribute, case-insensitively.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Scans markup for script/link tags.
pub fn scan_ref_tags(html: &str) -> Vec<RefTag> {
    // ASCII lowercasing preserves byte offsets, so spans computed against
    // `lower` are valid in `html`.
    let lower = html.to_ascii_lowercase();
    let mut tags = Vec::new();
    let mut i = 0;

    while i < html.len() {
        let Some(off) = lower[i..].find('<') else { break };
        let start = i + off;

        let name = if tag_starts(&lower, start, "script") {
            "script"
        } else if tag_starts(&lower, start, "link") {
            "link"
        } else {
            i = start + 1;
            continue;
        };

        let Some(gt_off) = lower[start..].find('>') else { break };
        let gt = start + gt_off;
        let attr_text = html[start + 1 + name.len()..gt].trim_end_matches('/');
        let attrs = parse_attrs(attr_text);

        let mut end = gt + 1;
        if name == "script" {
            // Everything up to the matching close tag is script text.
            if let Some(close_off) = lower[end..].find("</script") {
                let close_start = end + close_off;
                if let Some(close_gt) = lower[close_start..].find('>') {
                    end = close_start + close_gt + 1;
                }
            }
        }

        tags.push(RefTag {
            name: name.to_string(),
            attrs,
            span: start..end,
        });
        i = end;
    }

    tags
}

/// Returns `html` with the given byte spans spliced out.
///
/// Spans are sorted first; a span overlapping an earlier one is skipped.
pub fn remove_spans(html: &str, spans: &[Range<usize>]) -> String {
    let mut sorted: Vec<Range<usize>> = spans.to_vec();
    sorted.sort_by_key(|r| r.start);

    let mut out = String::with_capacity(html.len());
    let mut cursor = 0;
    for span in sorted {
        if span.start < cursor {
            continue;
        }
        out.push_str(&html[cursor..span.start]);
        cursor = span.end;
    }
    out.push_str(&html[cursor..]);
    out
}

/// Checks whether the `<` at `start` opens a tag with the given name,
/// followed by whitespace, `>` or `/`.
fn tag_starts(lower: &str, start: usize, name: &str) -> bool {
    let after = start + 1 + name.len();
    if after > lower.len() || !lower[start + 1..].starts_with(name) {
        return false;
    }
    lower[after..]
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_whitespace() || c == '>' || c == '/')
}

/// Tokenizes the attribute text of an opening tag.
///
/// Handles `name`, `name=bare`, `name="quoted"` and `name='quoted'` forms.
fn parse_attrs(text: &str) -> Vec<(String, String)> {
    let bytes = text.as_bytes();
    let len = text.len();
    let mut attrs = Vec::new();
    let mut i = 0;

    while i < len {
        while i < len && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= len {
            break;
        }

        let name_start = i;
        while i < len && !bytes[i].is_ascii_whitespace() && bytes[i] != b'=' {
            i += 1;
        }
        let name = text[name_start..i].to_ascii_lowercase();
        if name.is_empty() {
            i += 1;
            continue;
        }

        while i < len && bytes[i].is_ascii_whitespace() {
            i += 1;
        }

        let mut value = String::new();
        if i < len && bytes[i] == b'=' {
            i += 1;
            while i < len && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            if i < len && (bytes[i] == b'"' || bytes[i] == b'\'') {
                let quote = bytes[i];
                i += 1;
                let value_start = i;
                while i < len && bytes[i] != quote {
                    i += 1;
                }
                value = text[value_start..i].to_string();
                if i < len {
                    i += 1;
                }
            } else {
                let value_start = i;
                while i < len && !bytes[i].is_ascii_whitespace() {
                    i += 1;
                }
                value = text[value_start..i].to_string();
            }
        }

        attrs.push((name, value));
    }

    attrs
}
