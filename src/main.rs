#![forbid(unsafe_code)]
//! Agent Primer Command Line Interface

use clap::builder::FalseyValueParser;
use clap::Parser;
use console::style;

use agent_primer::commands::{
    execute_clear_cache, execute_list, execute_run, ListOptions, RunOptions,
};
use agent_primer::config::DEFAULT_AGENT;
use agent_primer::picker::install_interrupt_handler;
use agent_primer::{Environment, LaunchSettings, TerminalPicker};

#[derive(Parser)]
#[command(name = "agent-primer")]
#[command(about = "Pick skills and domains, then launch your agent with them preloaded")]
#[command(version)]
struct Cli {
    /// List discovered skills and domains, then exit
    #[arg(short, long, conflicts_with = "clear_cache")]
    list: bool,

    /// Print the list as JSON (with --list)
    #[arg(long, requires = "list")]
    json: bool,

    /// Forget recently selected items, then exit
    #[arg(long)]
    clear_cache: bool,

    /// Start the agent with permission prompts disabled
    #[arg(long, env = "AGENT_PRIMER_DANGEROUS", value_parser = FalseyValueParser::new())]
    dangerous: bool,

    /// Agent executable to launch
    #[arg(long, env = "AGENT_PRIMER_AGENT", default_value = DEFAULT_AGENT)]
    agent: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Arguments passed to the agent unchanged (after `--`)
    #[arg(last = true, allow_hyphen_values = true)]
    passthrough: Vec<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with picker rendering
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!("Fatal: {:?}", e);
            eprintln!("{} {:#}", style("✗").red(), e);
            1
        }
    };

    std::process::exit(code);
}

async fn run(cli: Cli) -> anyhow::Result<i32> {
    let env = Environment::detect()?;

    if cli.clear_cache {
        return execute_clear_cache(&env);
    }

    if cli.list {
        return execute_list(&env, ListOptions { json: cli.json });
    }

    let options = RunOptions {
        launch: LaunchSettings {
            program: cli.agent,
            dangerous: cli.dangerous,
            passthrough: cli.passthrough,
        },
    };
    // Ctrl-C in a picker cancels instead of killing the process
    install_interrupt_handler()?;
    let mut picker = TerminalPicker::new();
    execute_run(&env, options, &mut picker).await
}
