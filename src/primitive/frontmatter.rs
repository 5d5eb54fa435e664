//! @acp:module "Front Matter"
//! @acp:summary "Split a leading YAML block from markdown and read name/description"
//! @acp:domain primitives
//! @acp:layer parser

use serde::Deserialize;

const DELIMITER: &str = "---";

/// Optional fields recognised in a primitive's front matter
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Frontmatter {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Frontmatter {
    /// Trimmed name; blank values count as missing
    pub fn name(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }

    /// Trimmed description; blank values count as missing
    pub fn description(&self) -> Option<&str> {
        non_blank(self.description.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// A markdown file split into validated front matter and body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownDocument {
    pub frontmatter: Frontmatter,
    pub body: String,
}

/// Split `text` into the raw front matter block (if any) and the body.
///
/// The block opens with a first line of exactly `---` and closes at the
/// next line of exactly `---`. Without a closing line the whole text is body.
pub fn split_frontmatter(text: &str) -> (Option<&str>, &str) {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let Some(first_break) = text.find('\n') else {
        return (None, text);
    };
    if text[..first_break].trim_end_matches('\r') != DELIMITER {
        return (None, text);
    }

    let block_start = first_break + 1;
    let mut offset = block_start;
    for line in text[block_start..].split_inclusive('\n') {
        let bare = line.trim_end_matches('\n').trim_end_matches('\r');
        if bare == DELIMITER {
            let block = &text[block_start..offset];
            let body = &text[offset + line.len()..];
            return (Some(block), body);
        }
        offset += line.len();
    }

    (None, text)
}

/// @acp:summary "Parse a primitive file, falling back to defaults on bad front matter"
pub fn parse_document(text: &str) -> MarkdownDocument {
    let (block, body) = split_frontmatter(text);

    let frontmatter = match block {
        Some(raw) if !raw.trim().is_empty() => match serde_yaml::from_str::<Frontmatter>(raw) {
            Ok(fm) => fm,
            Err(e) => {
                tracing::warn!("Invalid front matter, using defaults: {}", e);
                Frontmatter::default()
            }
        },
        _ => Frontmatter::default(),
    };

    MarkdownDocument {
        frontmatter,
        body: body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_with_frontmatter() {
        let text = "---\nname: foo\ndescription: bar\n---\n# Body\n\nText\n";
        let (block, body) = split_frontmatter(text);
        assert_eq!(block, Some("name: foo\ndescription: bar\n"));
        assert_eq!(body, "# Body\n\nText\n");
    }

    #[test]
    fn test_split_without_frontmatter() {
        let text = "# Just markdown\n---\nnot front matter\n";
        let (block, body) = split_frontmatter(text);
        assert_eq!(block, None);
        assert_eq!(body, text);
    }

    #[test]
    fn test_split_unterminated_block() {
        let text = "---\nname: foo\n# no closing line\n";
        assert_eq!(split_frontmatter(text), (None, text));
    }

    #[test]
    fn test_split_crlf() {
        let text = "---\r\nname: foo\r\n---\r\nBody\r\n";
        let (block, body) = split_frontmatter(text);
        assert_eq!(block, Some("name: foo\r\n"));
        assert_eq!(body, "Body\r\n");
    }

    #[test]
    fn test_parse_reads_fields() {
        let doc = parse_document("---\nname: foo\ndescription: bar\nversion: 2\n---\nBody");
        assert_eq!(doc.frontmatter.name(), Some("foo"));
        assert_eq!(doc.frontmatter.description(), Some("bar"));
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn test_parse_invalid_yaml_uses_defaults() {
        let doc = parse_document("---\nname: [unclosed\n---\nBody");
        assert_eq!(doc.frontmatter, Frontmatter::default());
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn test_parse_wrong_type_uses_defaults() {
        let doc = parse_document("---\nname:\n  nested: true\n---\nBody");
        assert_eq!(doc.frontmatter, Frontmatter::default());
    }

    #[test]
    fn test_blank_values_are_missing() {
        let doc = parse_document("---\nname: \"  \"\ndescription: \"\"\n---\n");
        assert_eq!(doc.frontmatter.name(), None);
        assert_eq!(doc.frontmatter.description(), None);
    }

    #[test]
    fn test_values_are_trimmed() {
        let doc = parse_document("---\nname: \" foo \"\ndescription: \"\\tbar baz \"\n---\n");
        assert_eq!(doc.frontmatter.name(), Some("foo"));
        assert_eq!(doc.frontmatter.description(), Some("bar baz"));
    }

    #[test]
    fn test_empty_block() {
        let doc = parse_document("---\n---\nBody");
        assert_eq!(doc.frontmatter, Frontmatter::default());
        assert_eq!(doc.body, "Body");
    }
}
