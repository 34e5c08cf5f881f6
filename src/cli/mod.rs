//! CLI command definitions and handlers

use clap::{Args, Parser, Subcommand};
pub use clap_complete::Shell;

pub mod ai;
pub mod args;
pub mod cache;
pub mod catalog;
pub mod completions;
pub mod context;
pub mod dashboard;
pub mod handlers;
pub mod sale;
pub mod session;
pub mod status;

pub use args::{GlobalOptions, OutputFormat, StatsPeriod};
pub use context::CommandContext;

use crate::client::GrowthPeriod;
use args::{parse_date, parse_growth_period};

/// NGMS - command-line client for the business dashboard API
#[derive(Parser, Debug)]
#[command(name = "ngms")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "NGMS_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "NGMS_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Directory for the token and cache databases
    #[arg(long, global = true, env = "NGMS_DATA_DIR", hide_env = true)]
    pub data_dir: Option<String>,

    /// API host (e.g. http://localhost:5000)
    #[arg(long, global = true, env = "NGMS_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "NGMS_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Bypass cache, fetch fresh data from API
    #[arg(long, global = true, env = "NGMS_NO_CACHE", hide_env = true)]
    pub no_cache: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store the access token
    Login {
        #[arg(long, short)]
        username: Option<String>,

        /// Prompted for when omitted
        #[arg(long, short)]
        password: Option<String>,

        /// Write the API host used for this login to the config file
        #[arg(long)]
        save_host: bool,
    },

    /// Forget the token and clear cached responses
    Logout,

    /// Show the signed-in account
    Whoami,

    /// Show configuration, session and cache status
    Status,

    /// Sales summary, growth and top lists
    Dashboard {
        /// Growth chart range: `all` or a year (default: current year)
        #[arg(long, value_parser = parse_growth_period)]
        period: Option<GrowthPeriod>,
    },

    /// Manage products
    #[command(subcommand)]
    Product(ProductCommands),

    /// Manage customers
    #[command(subcommand)]
    Customer(CustomerCommands),

    /// Manage sales
    #[command(subcommand)]
    Sale(SaleCommands),

    /// Manage regions
    #[command(subcommand)]
    Region(RegionCommands),

    /// Manage shops
    #[command(subcommand)]
    Shop(ShopCommands),

    /// Ask the AI assistant
    #[command(subcommand)]
    Ai(AiCommands),

    /// Manage local response cache
    #[command(subcommand)]
    Cache(CacheCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   ngms completion bash > /etc/bash_completion.d/ngms
  zsh:    ngms completion zsh > \"${fpath[1]}/_ngms\"
  fish:   ngms completion fish > ~/.config/fish/completions/ngms.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// JSON body for create/update, inline or `@file.json`
#[derive(Debug, Clone, Args)]
pub struct DataArg {
    #[arg(long, value_name = "JSON")]
    pub data: String,
}

/// Confirmation bypass for destructive commands
#[derive(Debug, Clone, Args)]
pub struct ConfirmArg {
    /// Do not ask for confirmation
    #[arg(long, short)]
    pub yes: bool,
}

/// Operations shared by every collection
#[derive(Subcommand, Debug)]
pub enum CrudCommands {
    /// List all records
    List,

    /// Show one record
    Get { id: i64 },

    /// Create a record
    Create {
        #[command(flatten)]
        data: DataArg,
    },

    /// Update a record
    Update {
        id: i64,

        #[command(flatten)]
        data: DataArg,
    },

    /// Delete a record
    Delete {
        id: i64,

        #[command(flatten)]
        confirm: ConfirmArg,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProductCommands {
    #[command(flatten)]
    Crud(CrudCommands),

    /// Products ranked by profit
    TopProfitable,

    /// Products ranked by quantity sold
    TopSelling,
}

#[derive(Subcommand, Debug)]
pub enum CustomerCommands {
    #[command(flatten)]
    Crud(CrudCommands),

    /// Customers with map coordinates
    Map,
}

#[derive(Subcommand, Debug)]
pub enum RegionCommands {
    #[command(flatten)]
    Crud(CrudCommands),

    /// Regions with map data
    Map,

    /// Regions that already have shops
    Occupied,
}

#[derive(Subcommand, Debug)]
pub enum ShopCommands {
    #[command(flatten)]
    Crud(CrudCommands),

    /// Shops with map data
    Map,

    /// Best performing shops
    TopShops,

    /// Best performing regions
    TopRegions,
}

#[derive(Subcommand, Debug)]
pub enum SaleCommands {
    /// List sales, optionally within a date range
    List {
        /// First day, YYYY-MM-DD
        #[arg(long, value_parser = parse_date)]
        start: Option<String>,

        /// Last day, YYYY-MM-DD
        #[arg(long, value_parser = parse_date)]
        end: Option<String>,
    },

    /// Show one sale
    Get { id: i64 },

    /// Record a sale
    Create {
        #[command(flatten)]
        data: DataArg,
    },

    /// Update a sale
    Update {
        id: i64,

        #[command(flatten)]
        data: DataArg,
    },

    /// Delete a sale
    Delete {
        id: i64,

        #[command(flatten)]
        confirm: ConfirmArg,
    },

    /// Totals for a period
    Stats {
        /// day, month or year (default: month)
        #[arg(long, value_enum)]
        period: Option<StatsPeriod>,
    },

    /// List marketplace sales
    Online,

    /// Record a marketplace sale
    OnlineAdd {
        #[command(flatten)]
        data: DataArg,
    },

    /// Import sales from a JSON file (array, or object with a `sales` array)
    Import {
        #[arg(long)]
        file: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum AiCommands {
    /// Ask a free-form question
    Ask {
        #[arg(required = true, trailing_var_arg = true)]
        question: Vec<String>,
    },

    /// Generate a report (e.g. sales, inventory)
    Report {
        #[arg(value_name = "TYPE")]
        report_type: String,
    },

    /// Business recommendations
    Recommendations,

    /// Detected risks
    Risks,
}

#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Show cache statistics
    Status,

    /// Remove one entry, or everything when no key is given
    Clear {
        #[arg(long)]
        key: Option<String>,
    },

    /// Remove entries whose key contains any of the tags
    Invalidate {
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Print the cache database location
    Path,
}
