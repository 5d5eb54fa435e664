//! @acp:module "Skill Primitive"
//! @acp:summary "Skills: reusable workflows loaded from SKILL.md files"
//! @acp:domain primitives
//! @acp:layer service

use std::path::PathBuf;

use super::discovery::{find_primitive_files, read_items, same_location};
use super::render::{render_block, Framing};
use super::{Primitive, PrimitiveContent, PrimitiveItem, PrimitiveKind, Source};
use crate::config::Environment;

const FRAMING: Framing = Framing {
    title: "AGENT PRIMER: ACTIVE SKILLS FOR THIS SESSION",
    intro: "The user preloaded the skills below before starting this session. \
            Treat each one as standing instructions and follow its workflow \
            whenever a task matches its description. Reference files listed \
            under a skill can be read when more detail is needed.",
    footer: "END AGENT PRIMER: SKILLS",
};

/// Skill primitive - scans `~/.claude/skills` and `./.claude/skills`
pub struct SkillPrimitive {
    global_root: PathBuf,
    local_root: PathBuf,
}

impl SkillPrimitive {
    pub fn new(global_root: impl Into<PathBuf>, local_root: impl Into<PathBuf>) -> Self {
        Self {
            global_root: global_root.into(),
            local_root: local_root.into(),
        }
    }

    pub fn from_environment(env: &Environment) -> Self {
        Self::new(
            env.global_root(PrimitiveKind::Skill),
            env.local_root(PrimitiveKind::Skill),
        )
    }
}

impl Primitive for SkillPrimitive {
    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Skill
    }

    fn label(&self) -> &'static str {
        "Skills"
    }

    fn discover_items(&self) -> Vec<PrimitiveItem> {
        let required = self.kind().required_file();

        let global = find_primitive_files(&self.global_root, required);
        let mut items = read_items(self.kind(), &global, Source::Global);

        // Running from $HOME would otherwise list every skill twice
        if same_location(&self.global_root, &self.local_root) {
            tracing::debug!("Local skills root is the global root, skipping local scan");
        } else {
            let local = find_primitive_files(&self.local_root, required);
            items.extend(read_items(self.kind(), &local, Source::Local));
        }

        items
    }

    fn format_for_prompt(&self, contents: &[PrimitiveContent<'_>]) -> String {
        render_block(&FRAMING, contents)
    }
}
