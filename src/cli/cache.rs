//! Cache management commands
//!
//! These work on the session cache directly and ignore `--no-cache`.

use colored::Colorize;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::error::Result;
use crate::output::formatters::{format_bytes, format_millis};
use crate::output::json;

/// Show cache status/statistics
pub fn status(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let stats = ctx.cache.stats();
    let path = ctx.cache_path().display().to_string();

    match ctx.format {
        OutputFormat::Json => {
            let mut keys = ctx.cache.keys();
            keys.sort();
            let out = serde_json::json!({
                "total_entries": stats.total_entries,
                "valid_entries": stats.valid_entries,
                "expired_entries": stats.expired_entries,
                "total_size_bytes": stats.total_size_bytes,
                "oldest_entry_millis": stats.oldest_entry,
                "newest_entry_millis": stats.newest_entry,
                "ttl_secs": ctx.cache.ttl().as_secs(),
                "keys": keys,
                "path": path,
            });
            println!("{}", json::format_json(&out)?);
        }
        _ => {
            println!("Cache Status");
            println!("────────────────────────────────────────");
            println!("Location:       {}", path);
            println!("TTL:            {}s", ctx.cache.ttl().as_secs());
            println!("Valid entries:  {}", stats.valid_entries);
            println!("Expired:        {}", stats.expired_entries);
            println!(
                "Total size:     {}",
                format_bytes(stats.total_size_bytes as u64)
            );
            if let Some(oldest) = stats.oldest_entry {
                println!("Oldest entry:   {}", format_millis(oldest));
            }
            if let Some(newest) = stats.newest_entry {
                println!("Newest entry:   {}", format_millis(newest));
            }
        }
    }

    Ok(())
}

/// Remove one key, or every entry when `key` is `None`
pub fn clear(opts: &GlobalOptions, key: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let removed = match key {
        Some(key) => {
            let existed = ctx.cache.keys().iter().any(|k| k == key);
            ctx.cache.clear(Some(key));
            usize::from(existed)
        }
        None => ctx.cache.clear_all().entries_removed,
    };

    match ctx.format {
        OutputFormat::Json => {
            let out = serde_json::json!({ "entries_removed": removed, "success": true });
            println!("{}", json::format_json(&out)?);
        }
        _ => match (key, removed) {
            (Some(key), 0) => println!("No cache entry named {}", key.cyan()),
            (Some(key), _) => println!("Cleared cache entry {}", key.cyan()),
            (None, 0) => println!("Cache was already empty"),
            (None, n) => println!("Cleared {} cache entries", n),
        },
    }

    Ok(())
}

/// Drop every entry whose key contains one of `tags`
pub fn invalidate(opts: &GlobalOptions, tags: &[String]) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let removed = ctx.cache.invalidate(tags);

    match ctx.format {
        OutputFormat::Json => {
            let out = serde_json::json!({ "tags": tags, "entries_removed": removed });
            println!("{}", json::format_json(&out)?);
        }
        _ => println!(
            "Invalidated {} cache entries matching {}",
            removed,
            tags.join(", ").cyan()
        ),
    }

    Ok(())
}

/// Show cache path
pub fn path(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    println!("{}", ctx.cache_path().display());
    Ok(())
}
