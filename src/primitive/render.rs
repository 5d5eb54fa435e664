//! @acp:module "Primitive Renderer"
//! @acp:summary "Render loaded primitives into a framed system prompt block"
//! @acp:domain primitives
//! @acp:layer output

use super::loader::{ReferenceMetadata, REFERENCES_DIR};
use super::PrimitiveContent;

const RULE_WIDTH: usize = 72;

/// Header and footer text wrapped around one primitive group
#[derive(Debug, Clone, Copy)]
pub struct Framing {
    /// Banner line opening the block
    pub title: &'static str,
    /// Paragraph telling the agent how to use the items
    pub intro: &'static str,
    /// Banner line closing the block
    pub footer: &'static str,
}

/// @acp:summary "Header, one `## name` section per item, footer"
///
/// Pure and order preserving. An empty slice renders as an empty string.
pub fn render_block(framing: &Framing, contents: &[PrimitiveContent<'_>]) -> String {
    if contents.is_empty() {
        return String::new();
    }

    let rule = "=".repeat(RULE_WIDTH);
    let mut output = String::new();

    output.push_str(&format!("{}\n{}\n{}\n\n", rule, framing.title, rule));
    output.push_str(framing.intro);
    output.push_str("\n\n");

    let sections: Vec<String> = contents.iter().map(render_section).collect();
    output.push_str(&sections.join("\n\n---\n\n"));

    output.push_str(&format!("\n\n{}\n{}\n{}", rule, framing.footer, rule));
    output
}

fn render_section(content: &PrimitiveContent<'_>) -> String {
    let item = content.item;
    let mut section = format!("## {}\n\n", item.name);
    section.push_str(&format!("> {}\n\n", item.description));
    section.push_str(&format!("Source: {} (`{}`)\n\n", item.source, item.path.display()));

    let body = content.main_content.trim();
    if !body.is_empty() {
        section.push_str(body);
        section.push('\n');
    }

    let meta = ReferenceMetadata::from_metadata(&content.metadata);
    if !meta.references.is_empty() {
        let dir = item
            .path
            .parent()
            .map(|p| p.join(REFERENCES_DIR).display().to_string())
            .unwrap_or_else(|| REFERENCES_DIR.to_string());
        section.push_str(&format!("\nReference files (read on demand from `{}`):\n", dir));
        for name in &meta.references {
            section.push_str(&format!("- {}\n", name));
        }
    }

    section.trim_end().to_string()
}
