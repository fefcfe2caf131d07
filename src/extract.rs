//! Extraction of path data from SVG document text.
//!
//! This is a scan over raw text, not an XML parser: KanjiVG files carry a
//! DOCTYPE with an internal subset and vendor attributes (`kvg:type`), and
//! callers also pass bare `<path .../>` fragments. Only start tags named
//! `path` are inspected, and only their `d` attribute is read. Values are
//! returned verbatim; entities are not decoded.

/// Extract every non-empty `d` attribute of a `<path>` element, in
/// document order.
///
/// Text without any such element yields an empty vector.
pub fn extract(document: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut rest = document;

    while let Some(start) = rest.find("<path") {
        let after = &rest[start + "<path".len()..];

        // `<pathLength` or `<paths` are other names
        if !after.starts_with(|c: char| c.is_whitespace()) {
            rest = after;
            continue;
        }

        let Some(end) = tag_end(after) else {
            break;
        };

        if let Some(d) = Attributes::new(&after[..end]).find_map(|(name, value)| {
            (name == "d" && !value.is_empty()).then_some(value)
        }) {
            values.push(d.to_string());
        }

        rest = &after[end + 1..];
    }

    tracing::debug!(count = values.len(), "extracted path data");
    values
}

/// Byte offset of the `>` closing a start tag, skipping quoted values
fn tag_end(tag: &str) -> Option<usize> {
    let mut quote = None;
    for (i, c) in tag.char_indices() {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (Some(q), _) if c == q => quote = None,
            (None, '>') => return Some(i),
            _ => {}
        }
    }
    None
}

/// Iterator over `name="value"` pairs in the body of a start tag
struct Attributes<'a> {
    rest: &'a str,
}

impl<'a> Attributes<'a> {
    fn new(body: &'a str) -> Self {
        Self { rest: body }
    }
}

impl<'a> Iterator for Attributes<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let s = self.rest.trim_start();
            if s.is_empty() || s.starts_with('/') {
                return None;
            }

            let name_len = s
                .find(|c: char| c == '=' || c == '/' || c.is_whitespace())
                .unwrap_or(s.len());
            if name_len == 0 {
                // Stray `=`
                self.rest = &s[1..];
                continue;
            }
            let name = &s[..name_len];
            let after_name = s[name_len..].trim_start();

            // Attribute without a value
            let Some(after_eq) = after_name.strip_prefix('=') else {
                self.rest = after_name;
                continue;
            };

            let after_eq = after_eq.trim_start();
            let Some(quote) = after_eq.chars().next().filter(|c| *c == '"' || *c == '\'') else {
                // Unquoted value runs to the next whitespace or `/`
                let value_len = after_eq
                    .find(|c: char| c == '/' || c.is_whitespace())
                    .unwrap_or(after_eq.len());
                self.rest = &after_eq[value_len..];
                return Some((name, &after_eq[..value_len]));
            };
            let value_src = &after_eq[1..];
            let close = value_src.find(quote)?;

            self.rest = &value_src[close + 1..];
            return Some((name, &value_src[..close]));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_fragment() {
        let values = extract(r#"<path d="M10,10 L20,20"/>"#);
        assert_eq!(values, vec!["M10,10 L20,20".to_string()]);
    }

    #[test]
    fn test_no_path_element() {
        assert!(extract("<svg><g id=\"x\"></g></svg>").is_empty());
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_document_order() {
        let doc = r#"
            <path id="a" d="M1,1 L2,2"/>
            <path id="b" d="M3,3 L4,4"/>
        "#;
        assert_eq!(extract(doc), vec!["M1,1 L2,2", "M3,3 L4,4"]);
    }

    #[test]
    fn test_two_elements_on_one_line() {
        let doc = r#"<path d="M1,1"/><path d="M2,2"/>"#;
        assert_eq!(extract(doc), vec!["M1,1", "M2,2"]);
    }

    #[test]
    fn test_other_attributes_do_not_interfere() {
        let doc = r#"<path id="kvg:06708-s1" kvg:type="㇒" d="M34.25,16.25c1,1" style="x"/>"#;
        assert_eq!(extract(doc), vec!["M34.25,16.25c1,1"]);
    }

    #[test]
    fn test_d_suffix_in_other_attribute_name() {
        let doc = r#"<path id="d" data-d="nope" d="M5,5"/>"#;
        assert_eq!(extract(doc), vec!["M5,5"]);
    }

    #[test]
    fn test_path_without_d() {
        assert!(extract(r#"<path id="x"/>"#).is_empty());
        assert!(extract(r#"<path d=""/>"#).is_empty());
    }

    #[test]
    fn test_non_self_closing_element() {
        assert_eq!(extract(r#"<path d="M1,2"></path>"#), vec!["M1,2"]);
    }

    #[test]
    fn test_other_tag_names_skipped() {
        let doc = r#"<pathology d="M9,9"/><path d="M1,1"/>"#;
        assert_eq!(extract(doc), vec!["M1,1"]);
    }

    #[test]
    fn test_gt_inside_quoted_value() {
        let doc = r#"<path title="a>b" d="M1,1"/>"#;
        assert_eq!(extract(doc), vec!["M1,1"]);
    }

    #[test]
    fn test_unterminated_tag() {
        assert!(extract(r#"<path d="M1,1""#).is_empty());
    }

    #[test]
    fn test_unquoted_attribute_before_d() {
        assert_eq!(extract(r#"<path id=x d="M1,1"/>"#), vec!["M1,1"]);
        assert_eq!(extract(r#"<path id=x d=M1,1 />"#), vec!["M1,1"]);
    }

    #[test]
    fn test_stray_equals_before_d() {
        assert_eq!(extract(r#"<path = d="M2,2"/>"#), vec!["M2,2"]);
    }

    #[test]
    fn test_single_quotes_and_spacing() {
        assert_eq!(extract("<path\n  d = 'M1,1' />"), vec!["M1,1"]);
    }
}
