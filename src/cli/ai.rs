//! AI assistant commands

use colored::Colorize;
use serde_json::Value;

use crate::cli::handlers::{Spinner, print_value};
use crate::cli::{AiCommands, CommandContext, GlobalOptions, OutputFormat};
use crate::error::Result;

/// Fields the server uses for the generated text
const TEXT_FIELDS: [&str; 4] = ["answer", "report", "recommendations", "risks"];

pub async fn run(opts: &GlobalOptions, cmd: AiCommands) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_login()?;
    let api = ctx.client.ai();

    let spinner = Spinner::start("Thinking...", ctx.format);
    let result = match cmd {
        AiCommands::Ask { question } => api.ask(&question.join(" ")).await,
        AiCommands::Report { report_type } => api.report(&report_type).await,
        AiCommands::Recommendations => api.recommendations().await,
        AiCommands::Risks => api.risks().await,
    };
    spinner.finish();
    let value = result?;

    if ctx.format != OutputFormat::Json
        && let Some(text) = generated_text(&value)
    {
        if let Some(kind) = value.get("type").and_then(Value::as_str) {
            println!("{}\n", format!("Report: {}", kind).bold());
        }
        println!("{}", text);
        return Ok(());
    }

    print_value(&value, ctx.format)
}

fn generated_text(value: &Value) -> Option<&str> {
    TEXT_FIELDS
        .iter()
        .find_map(|field| value.get(*field).and_then(Value::as_str))
}
