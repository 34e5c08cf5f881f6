//! Status command implementation

use chrono::Utc;
use colored::Colorize;

use crate::auth::token_expiry;
use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::error::Result;
use crate::output::formatters::format_bytes;
use crate::output::json;

/// Run the status command: config, session and cache at a glance.
///
/// Works offline; nothing is sent to the server.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let token = ctx.tokens.token();
    let expires_at = token.as_deref().and_then(token_expiry);
    let stats = ctx.cache.stats();

    if ctx.format == OutputFormat::Json {
        let out = serde_json::json!({
            "config_path": ctx.config_path.display().to_string(),
            "config_exists": ctx.config_path.exists(),
            "api_host": ctx.config.api_host,
            "data_dir": ctx.data_dir.display().to_string(),
            "logged_in": token.is_some(),
            "token_expires_at": expires_at.map(|t| t.to_rfc3339()),
            "cache": {
                "valid_entries": stats.valid_entries,
                "expired_entries": stats.expired_entries,
                "ttl_secs": ctx.cache.ttl().as_secs(),
            },
        });
        println!("{}", json::format_json(&out)?);
        return Ok(());
    }

    println!("{}\n", "NGMS Status".bold());

    if ctx.config_path.exists() {
        println!(
            "Config file: {}",
            ctx.config_path.display().to_string().cyan()
        );
    } else {
        println!(
            "Config file: {} {}",
            ctx.config_path.display().to_string().cyan(),
            "(not created, using defaults)".dimmed()
        );
    }
    println!("API host:    {}", ctx.config.api_host.cyan());
    println!("Data dir:    {}", ctx.data_dir.display());
    println!();

    match (&token, expires_at) {
        (None, _) => {
            println!("{} Not logged in", "✗".red());
            println!("  → Run 'ngms login' to sign in");
        }
        (Some(_), Some(exp)) if exp <= Utc::now() => {
            println!("{} Token expired at {}", "⚠".yellow(), exp.format("%Y-%m-%d %H:%M UTC"));
            println!("  → Run 'ngms login' to sign in again");
        }
        (Some(_), Some(exp)) => {
            let remaining = exp.signed_duration_since(Utc::now());
            println!(
                "{} Logged in (token expires in {}h {}m)",
                "✓".green(),
                remaining.num_hours(),
                remaining.num_minutes() % 60
            );
        }
        (Some(_), None) => {
            println!("{} Logged in (token expiry unknown)", "✓".green());
        }
    }

    println!(
        "{} Cache: {} live, {} expired, {} (TTL {}s)",
        "○".dimmed(),
        stats.valid_entries,
        stats.expired_entries,
        format_bytes(stats.total_size_bytes as u64),
        ctx.cache.ttl().as_secs()
    );
    println!();

    Ok(())
}
