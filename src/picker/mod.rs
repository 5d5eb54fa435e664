//! @acp:module "Picker"
//! @acp:summary "Interactive selection capability with an explicit cancel outcome"
//! @acp:domain ui
//! @acp:layer service
//!
//! The selection wizard only talks to the [`Picker`] trait. The terminal
//! implementation wraps dialoguer; tests drive the wizard with a script.
//!
//! Ctrl-C inside a prompt is a cancel, not a crash. console raises SIGINT
//! when it reads the key, so the binary installs a handler (see
//! [`install_interrupt_handler`]) and the resulting `Interrupted` read error
//! is mapped to [`Choice::Cancelled`] here.

use std::io::ErrorKind;

use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, MultiSelect, Select};

use crate::error::Result;

/// Outcome of one interactive step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice<T> {
    Selected(T),
    Cancelled,
}

impl<T> Choice<T> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Choice::Cancelled)
    }
}

impl<T> From<Option<T>> for Choice<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Choice::Selected(v),
            None => Choice::Cancelled,
        }
    }
}

/// One selectable row in a multi-select
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOption {
    pub label: String,
    /// Short dimmed note after the label ("recent")
    pub hint: Option<String>,
}

impl PickerOption {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Interactive prompt capability
pub trait Picker {
    /// Present `options` and return the chosen indices (possibly none)
    fn multi_select(&mut self, prompt: &str, options: &[PickerOption]) -> Result<Choice<Vec<usize>>>;

    /// Present `options` and return the chosen index
    fn select(&mut self, prompt: &str, options: &[&str], default: usize) -> Result<Choice<usize>>;
}

/// dialoguer-backed picker; Esc or `q` cancels
pub struct TerminalPicker {
    theme: ColorfulTheme,
}

impl TerminalPicker {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl Picker for TerminalPicker {
    fn multi_select(&mut self, prompt: &str, options: &[PickerOption]) -> Result<Choice<Vec<usize>>> {
        let labels: Vec<String> = options
            .iter()
            .map(|o| match &o.hint {
                Some(hint) => format!("{} {}", o.label, style(format!("({})", hint)).dim()),
                None => o.label.clone(),
            })
            .collect();

        let selection = MultiSelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(&labels)
            .interact_opt();

        interrupted_as_cancel(selection)
    }

    fn select(&mut self, prompt: &str, options: &[&str], default: usize) -> Result<Choice<usize>> {
        let selection = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(options)
            .default(default)
            .interact_opt();

        interrupted_as_cancel(selection)
    }
}

/// Treat an interrupted prompt like Esc and bring back the hidden cursor
fn interrupted_as_cancel<T>(result: dialoguer::Result<Option<T>>) -> Result<Choice<T>> {
    match result {
        Ok(selection) => Ok(selection.into()),
        Err(dialoguer::Error::IO(e)) if e.kind() == ErrorKind::Interrupted => {
            tracing::debug!("Prompt interrupted, treating as cancel");
            // dialoguer draws on stderr and hides the cursor while active
            let _ = Term::stderr().show_cursor();
            Ok(Choice::Cancelled)
        }
        Err(e) => Err(e.into()),
    }
}

/// Keep SIGINT from killing the process so prompts can report a cancel.
///
/// Must be called inside a tokio runtime. While the agent runs, Ctrl-C
/// still reaches the child through the terminal's process group.
#[cfg(unix)]
pub fn install_interrupt_handler() -> Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupts = signal(SignalKind::interrupt())?;
    tokio::spawn(async move {
        while interrupts.recv().await.is_some() {
            tracing::debug!("Interrupt received");
        }
    });
    Ok(())
}

#[cfg(not(unix))]
pub fn install_interrupt_handler() -> Result<()> {
    Ok(())
}
