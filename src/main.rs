use clap::{Parser, Subcommand};
use cli_showcase::commands::*;
use cli_showcase::core::{
    error::{Result, ShowcaseError},
    print_error,
};
use std::env;

#[derive(Parser)]
#[command(name = "cli-showcase")]
#[command(about = "Terminal UI demos and a .gitignore generator")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a .gitignore from GitHub templates
    Gitignore(GitignoreArgs),
    /// Text, password, select and checkbox prompts
    Prompts,
    /// Spinner, gauges and progress bar
    Widgets,
    /// Show a title as ASCII art
    Banner {
        /// Title to render (asked for when omitted)
        title: Option<String>,
    },
    /// Run prompts, widgets and banner in sequence
    All,
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Gitignore(args) => execute_gitignore(args).await,
        Commands::Prompts => execute_prompts(),
        Commands::Widgets => execute_widgets().await,
        Commands::Banner { title } => execute_banner(title),
        Commands::All => {
            execute_prompts()?;
            execute_widgets().await?;
            execute_banner(None)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag, before any runtime thread exists
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let result = tokio::runtime::Runtime::new()
        .map_err(ShowcaseError::from)
        .and_then(|runtime| runtime.block_on(run(cli.command)));

    if let Err(e) = result {
        log::debug!("Command failed: {e:?}");
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
