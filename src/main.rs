//! NGMS CLI - command-line client for the NGMS business dashboard

use clap::Parser;
use colored::Colorize;

use ngms::cli::{self, CacheCommands, Cli, Commands, GlobalOptions};
use ngms::error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("{} {}", "Error:".red().bold(), err);
        if err.is_session_expired() {
            eprintln!("  → Session ended. Run 'ngms login' to sign in again.");
        }
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login {
            username,
            password,
            save_host,
        } => cli::session::login(&opts, username, password, save_host).await,
        Commands::Logout => cli::session::logout(&opts),
        Commands::Whoami => cli::session::whoami(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Dashboard { period } => cli::dashboard::run(&opts, period).await,
        Commands::Product(cmd) => cli::catalog::product(&opts, cmd).await,
        Commands::Customer(cmd) => cli::catalog::customer(&opts, cmd).await,
        Commands::Region(cmd) => cli::catalog::region(&opts, cmd).await,
        Commands::Shop(cmd) => cli::catalog::shop(&opts, cmd).await,
        Commands::Sale(cmd) => cli::sale::run(&opts, cmd).await,
        Commands::Ai(cmd) => cli::ai::run(&opts, cmd).await,
        Commands::Cache(cmd) => match cmd {
            CacheCommands::Status => cli::cache::status(&opts),
            CacheCommands::Clear { key } => cli::cache::clear(&opts, key.as_deref()),
            CacheCommands::Invalidate { tags } => cli::cache::invalidate(&opts, &tags),
            CacheCommands::Path => cli::cache::path(&opts),
        },
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}
