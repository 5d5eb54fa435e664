//! @acp:module "Selection"
//! @acp:summary "Interactive browse/confirm wizard and system prompt assembly"
//! @acp:domain selection
//! @acp:layer service

pub mod assemble;
pub mod wizard;

pub use assemble::assemble_system_prompt;
pub use wizard::{
    discover_groups, ConfirmAction, ItemGroup, SelectionWizard, WizardOutcome, WizardState,
};
