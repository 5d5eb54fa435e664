//! @acp:module "Selection Wizard"
//! @acp:summary "Per-type pickers followed by a proceed/restart/cancel confirmation"
//! @acp:domain selection
//! @acp:layer service
//!
//! ```text
//! Browsing --picked--> Confirming --proceed--> Launch
//!    ^                     |
//!    +------restart--------+--cancel--> Cancelled
//! ```
//!
//! Cancelling any picker ends the wizard immediately; nothing selected so
//! far is kept. Restart reuses the recent cache loaded at startup, so the
//! "recent" hints do not change within a session.

use console::style;

use crate::cache::{sort_by_recent, RecentCache};
use crate::error::Result;
use crate::picker::{Choice, Picker, PickerOption};
use crate::primitive::{Primitive, PrimitiveItem};

/// Discovered items of one primitive kind, already sorted by recency
pub struct ItemGroup<'a> {
    pub primitive: &'a dyn Primitive,
    pub items: Vec<PrimitiveItem>,
}

/// Discover every registered primitive and sort each group by recency
pub fn discover_groups<'a>(
    primitives: &'a [Box<dyn Primitive>],
    cache: &RecentCache,
) -> Vec<ItemGroup<'a>> {
    primitives
        .iter()
        .map(|primitive| {
            let discovered = primitive.discover_items();
            tracing::debug!("Discovered {} {}", discovered.len(), primitive.label());
            ItemGroup {
                primitive: primitive.as_ref(),
                items: sort_by_recent(&discovered, cache),
            }
        })
        .collect()
}

/// Choices offered once browsing is done
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    Proceed,
    Restart,
    Cancel,
}

impl ConfirmAction {
    pub fn all() -> &'static [ConfirmAction] {
        &[ConfirmAction::Proceed, ConfirmAction::Restart, ConfirmAction::Cancel]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfirmAction::Proceed => "Launch with this selection",
            ConfirmAction::Restart => "Start over",
            ConfirmAction::Cancel => "Cancel",
        }
    }
}

/// Wizard states
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardState {
    Browsing,
    Confirming(Vec<PrimitiveItem>),
    Launch(Vec<PrimitiveItem>),
    Cancelled,
}

/// Terminal result of the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    /// Proceed with these items (possibly none)
    Launch(Vec<PrimitiveItem>),
    Cancelled,
}

/// @acp:summary "Drives pickers through the browse/confirm state machine"
pub struct SelectionWizard<'a> {
    groups: &'a [ItemGroup<'a>],
    cache: &'a RecentCache,
}

impl<'a> SelectionWizard<'a> {
    pub fn new(groups: &'a [ItemGroup<'a>], cache: &'a RecentCache) -> Self {
        Self { groups, cache }
    }

    /// Run until the user launches or cancels
    pub fn run(&self, picker: &mut dyn Picker) -> Result<WizardOutcome> {
        let mut state = WizardState::Browsing;

        loop {
            state = match state {
                WizardState::Browsing => match self.browse(picker)? {
                    Choice::Selected(items) => WizardState::Confirming(items),
                    Choice::Cancelled => WizardState::Cancelled,
                },
                WizardState::Confirming(items) => self.confirm(picker, items)?,
                WizardState::Launch(items) => return Ok(WizardOutcome::Launch(items)),
                WizardState::Cancelled => return Ok(WizardOutcome::Cancelled),
            };
        }
    }

    fn browse(&self, picker: &mut dyn Picker) -> Result<Choice<Vec<PrimitiveItem>>> {
        let mut selected = Vec::new();

        for group in self.groups {
            if group.items.is_empty() {
                continue;
            }

            let options: Vec<PickerOption> =
                group.items.iter().map(|item| self.option_for(item)).collect();
            let prompt = format!(
                "Select {} (space to toggle, enter to continue)",
                group.primitive.label().to_lowercase()
            );

            match picker.multi_select(&prompt, &options)? {
                Choice::Selected(indices) => {
                    selected.extend(indices.into_iter().filter_map(|i| group.items.get(i).cloned()));
                }
                Choice::Cancelled => return Ok(Choice::Cancelled),
            }
        }

        Ok(Choice::Selected(selected))
    }

    fn option_for(&self, item: &PrimitiveItem) -> PickerOption {
        let option = PickerOption::new(format!(
            "{} [{}] - {}",
            item.name, item.source, item.description
        ));
        if self.cache.contains(item) {
            option.with_hint("recent")
        } else {
            option
        }
    }

    fn confirm(&self, picker: &mut dyn Picker, items: Vec<PrimitiveItem>) -> Result<WizardState> {
        eprintln!("\n{}", render_summary(self.groups, &items));

        let labels: Vec<&str> = ConfirmAction::all().iter().map(|a| a.label()).collect();
        let next = match picker.select("What next?", &labels, 0)? {
            Choice::Selected(index) => match ConfirmAction::all().get(index) {
                Some(ConfirmAction::Proceed) => WizardState::Launch(items),
                Some(ConfirmAction::Restart) => WizardState::Browsing,
                Some(ConfirmAction::Cancel) | None => WizardState::Cancelled,
            },
            Choice::Cancelled => WizardState::Cancelled,
        };

        Ok(next)
    }
}

/// Selection summary grouped by primitive label
pub fn render_summary(groups: &[ItemGroup<'_>], items: &[PrimitiveItem]) -> String {
    if items.is_empty() {
        return format!(
            "{} Nothing selected, the agent starts without a primer",
            style("!").yellow()
        );
    }

    let mut out = format!("{} Selected:", style("✓").green());
    for group in groups {
        let kind = group.primitive.kind();
        let chosen: Vec<&PrimitiveItem> = items.iter().filter(|i| i.kind == kind).collect();
        if chosen.is_empty() {
            continue;
        }
        out.push_str(&format!("\n  {}", style(group.primitive.label()).bold()));
        for item in chosen {
            out.push_str(&format!("\n    {} ({})", style(&item.name).cyan(), item.source));
        }
    }
    out
}
