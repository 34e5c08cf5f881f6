//! Command execution context
//!
//! Loads config, opens the two local stores and wires the request client the
//! same way for every command.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::auth::TokenStore;
use crate::cache::{StoreBackend, TtlCache};
use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::{RequestClient, ReqwestTransport, SessionNavigator};
use crate::clock::SystemClock;
use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::storage::sqlite::{PERSISTENT_DB, SESSION_DB};
use crate::storage::SqliteStore;

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Loaded configuration with CLI overrides applied
    pub config: Config,
    /// Path the config was loaded from
    pub config_path: PathBuf,
    /// Directory holding `storage.db` and `session.db`
    pub data_dir: PathBuf,
    /// Resolved output format
    pub format: OutputFormat,
    /// API client; has no cache when `--no-cache` is set
    pub client: RequestClient,
    /// Response cache over the session store, independent of `--no-cache`
    pub cache: Arc<TtlCache>,
    /// Database file behind `cache`
    cache_path: PathBuf,
    pub tokens: Arc<TokenStore>,
}

impl CommandContext {
    /// Build the context for one command invocation.
    ///
    /// # Errors
    /// Returns error if the config is invalid or the data directory cannot be
    /// opened.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config_path = Config::resolve_path(opts.config_ref())?;
        let mut config = Config::load_from(&config_path)?;

        if let Some(host) = opts.api_host_ref() {
            config.api_host = host.to_string();
            config.validate()?;
        }

        let format = opts
            .format
            .or_else(|| {
                config
                    .preferences
                    .format
                    .as_deref()
                    .and_then(OutputFormat::from_name)
            })
            .unwrap_or_default();

        let data_dir = match opts.data_dir_ref() {
            Some(dir) => PathBuf::from(dir),
            None => SqliteStore::data_dir()?,
        };
        log::debug!("Using data directory {}", data_dir.display());

        let persistent = Arc::new(SqliteStore::open_in(&data_dir, PERSISTENT_DB)?);
        let session = Arc::new(SqliteStore::open_in(&data_dir, SESSION_DB)?);
        let cache_path = session.path().to_path_buf();

        let tokens = Arc::new(TokenStore::new(persistent));
        let cache = Arc::new(TtlCache::with_clock(
            Arc::new(StoreBackend::new(session)),
            Arc::new(SystemClock),
            config.cache_ttl(),
        ));
        // The CLI has no pages; the navigator only records the redirect for logging
        let navigator = Arc::new(SessionNavigator::new("/"));

        let transport = Arc::new(ReqwestTransport::new()?);
        let mut client = RequestClient::new(&config.api_host, transport, tokens.clone())
            .with_navigator(navigator, &config.login_path);
        if opts.no_cache {
            log::debug!("Response cache disabled for this run");
        } else {
            client = client.with_cache(cache.clone());
        }

        Ok(Self {
            config,
            config_path,
            data_dir,
            format,
            client,
            cache,
            cache_path,
            tokens,
        })
    }

    /// Fail early when no token is stored
    pub fn require_login(&self) -> Result<()> {
        if self.tokens.has_token() {
            Ok(())
        } else {
            Err(ConfigError::NotLoggedIn.into())
        }
    }

    /// Location of the cache database
    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }
}
