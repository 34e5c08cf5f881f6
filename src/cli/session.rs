//! Login, logout and whoami

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::handlers::print_records;
use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::models::{LoginResponse, User};
use crate::error::Result;
use crate::output::json;

/// Display row for the signed-in account
#[derive(Debug, tabled::Tabled, serde::Serialize)]
struct UserDisplay {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "USERNAME")]
    username: String,
    #[tabled(rename = "EMAIL")]
    email: String,
    #[tabled(rename = "ROLE")]
    role: String,
}

impl From<User> for UserDisplay {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email.unwrap_or_else(|| "-".to_string()),
            role: user.role.unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Run the login command, prompting for missing credentials
pub async fn login(
    opts: &GlobalOptions,
    username: Option<String>,
    password: Option<String>,
    save_host: bool,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let theme = ColorfulTheme::default();

    let username = match username {
        Some(u) => u,
        None => Input::with_theme(&theme)
            .with_prompt("Username")
            .interact_text()?,
    };
    let password = match password {
        Some(p) => p,
        None => Password::with_theme(&theme)
            .with_prompt("Password")
            .interact()?,
    };

    log::debug!("Logging in as {} at {}", username, ctx.client.base_url());
    let data = ctx.client.auth().login(&username, &password).await?;

    // Fresh identity, stale responses from the previous one must go
    ctx.cache.clear(None);

    if save_host {
        save_api_host(&ctx)?;
        if ctx.format != OutputFormat::Json {
            println!(
                "Saved API host {} to {}",
                ctx.config.api_host.cyan(),
                ctx.config_path.display()
            );
        }
    }

    if ctx.format == OutputFormat::Json {
        println!("{}", json::format_json(&data)?);
        return Ok(());
    }

    let response: Option<LoginResponse> = serde_json::from_value(data).ok();
    let name = response
        .as_ref()
        .and_then(|r| r.user.as_ref())
        .map(|u| u.username.clone())
        .unwrap_or(username);

    if ctx.tokens.has_token() {
        println!("{} Logged in as {}", "✓".green(), name.bold());
    } else {
        println!(
            "{} Server accepted the login but returned no access token",
            "⚠".yellow()
        );
    }
    Ok(())
}

/// Persist the effective config, including any `--api-host` override
fn save_api_host(ctx: &CommandContext) -> Result<()> {
    log::debug!("Writing config to {}", ctx.config_path.display());
    ctx.config.save_to(&ctx.config_path)
}

/// Forget the token and clear every cached response
pub fn logout(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let had_token = ctx.tokens.has_token();

    ctx.client.auth().logout();
    // With --no-cache the client holds no cache, so clear it directly
    let cleared = ctx.cache.clear_all();

    match ctx.format {
        OutputFormat::Json => {
            let out = serde_json::json!({
                "logged_out": had_token,
                "cache_entries_removed": cleared.entries_removed,
            });
            println!("{}", json::format_json(&out)?);
        }
        _ => {
            if had_token {
                println!("{} Logged out", "✓".green());
            } else {
                println!("{}", "Not logged in".dimmed());
            }
        }
    }
    Ok(())
}

/// Show the account behind the stored token
pub async fn whoami(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_login()?;

    let user = ctx.client.auth().current_user().await?;
    print_records::<User, UserDisplay>(user, ctx.format)
}
