//! @acp:module "Agent Launcher"
//! @acp:summary "Hand the terminal over to the agent process with the assembled prompt"
//! @acp:domain launch
//! @acp:layer io

use tokio::process::Command;

use crate::config::LaunchSettings;
use crate::error::{PrimerError, Result};

/// Flag that disables the agent's permission prompts
pub const DANGEROUS_FLAG: &str = "--dangerously-skip-permissions";

/// Flag carrying the assembled primer
pub const SYSTEM_PROMPT_FLAG: &str = "--append-system-prompt";

/// @acp:summary "Spawns the agent with inherited stdio and reports its exit code"
#[derive(Debug, Clone)]
pub struct Launcher {
    settings: LaunchSettings,
}

impl Launcher {
    pub fn new(settings: LaunchSettings) -> Self {
        Self { settings }
    }

    pub fn program(&self) -> &str {
        &self.settings.program
    }

    /// Argument list: bypass flag, prompt flag, then passthrough arguments
    pub fn build_args(&self, system_prompt: Option<&str>) -> Vec<String> {
        let mut args = Vec::new();

        if self.settings.dangerous {
            args.push(DANGEROUS_FLAG.to_string());
        }
        if let Some(prompt) = system_prompt {
            args.push(SYSTEM_PROMPT_FLAG.to_string());
            args.push(prompt.to_string());
        }
        args.extend(self.settings.passthrough.iter().cloned());

        args
    }

    /// Run the agent to completion; an unset exit code (signal) maps to 0
    pub async fn launch(&self, system_prompt: Option<&str>) -> Result<i32> {
        let args = self.build_args(system_prompt);
        tracing::debug!(
            "Launching {} with {} argument(s), prompt: {} bytes",
            self.settings.program,
            args.len(),
            system_prompt.map(str::len).unwrap_or(0)
        );

        let status = Command::new(&self.settings.program)
            .args(&args)
            .status()
            .await
            .map_err(|source| PrimerError::Launch {
                program: self.settings.program.clone(),
                source,
            })?;

        Ok(status.code().unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn launcher(dangerous: bool, passthrough: &[&str]) -> Launcher {
        Launcher::new(LaunchSettings {
            program: "claude".to_string(),
            dangerous,
            passthrough: passthrough.iter().map(|s| s.to_string()).collect(),
        })
    }

    #[test]
    fn test_args_without_prompt() {
        assert_eq!(launcher(false, &[]).build_args(None), Vec::<String>::new());
    }

    #[test]
    fn test_args_full() {
        let args = launcher(true, &["--resume", "-p"]).build_args(Some("PRIMER"));
        assert_eq!(
            args,
            vec![
                "--dangerously-skip-permissions",
                "--append-system-prompt",
                "PRIMER",
                "--resume",
                "-p",
            ]
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_launch_returns_child_exit_code() {
        let launcher = Launcher::new(LaunchSettings {
            program: "sh".to_string(),
            dangerous: false,
            passthrough: vec!["-c".to_string(), "exit 3".to_string()],
        });
        assert_eq!(launcher.launch(None).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_launch_missing_program() {
        let launcher = Launcher::new(LaunchSettings {
            program: "agent-primer-no-such-binary".to_string(),
            ..Default::default()
        });
        let err = launcher.launch(None).await.unwrap_err();
        assert!(matches!(err, PrimerError::Launch { .. }));
    }
}
