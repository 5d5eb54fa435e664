//! @acp:module "Prompt Assembly"
//! @acp:summary "Load selected items and join per-type blocks into one system prompt"
//! @acp:domain selection
//! @acp:layer service

use crate::error::Result;
use crate::primitive::{Primitive, PrimitiveContent, PrimitiveItem};

/// @acp:summary "Build the system prompt for `selected`, or None when nothing was picked"
///
/// Groups follow registration order and items keep their selection order
/// within a group. Any unreadable item aborts assembly.
pub fn assemble_system_prompt(
    primitives: &[Box<dyn Primitive>],
    selected: &[PrimitiveItem],
) -> Result<Option<String>> {
    if selected.is_empty() {
        return Ok(None);
    }

    let mut blocks = Vec::new();

    for primitive in primitives {
        let kind = primitive.kind();
        let contents = selected
            .iter()
            .filter(|item| item.kind == kind)
            .map(|item| primitive.load_content(item))
            .collect::<Result<Vec<PrimitiveContent<'_>>>>()?;

        if contents.is_empty() {
            continue;
        }

        tracing::debug!("Loaded {} {} for the prompt", contents.len(), primitive.label());
        blocks.push(primitive.format_for_prompt(&contents));
    }

    if blocks.is_empty() {
        tracing::warn!("Selected items matched no registered primitive");
        return Ok(None);
    }

    Ok(Some(blocks.join("\n\n")))
}
