//! Where the user "is", and how to send them to the login page
//!
//! In a browser this is the window location. The CLI keeps a logical path per
//! command and remembers the last redirect so it can tell the user to log in.

use std::sync::Mutex;

/// Login page path used when none is configured
pub const DEFAULT_LOGIN_PATH: &str = "/login.html";

/// Current location and redirect capability
pub trait Navigator: Send + Sync {
    /// Path of the current page
    fn current_path(&self) -> String;

    /// Move to `path`
    fn redirect(&self, path: &str);
}

/// In-process navigator that records redirects
#[derive(Debug)]
pub struct SessionNavigator {
    current: Mutex<String>,
    last_redirect: Mutex<Option<String>>,
}

impl SessionNavigator {
    pub fn new(start_path: &str) -> Self {
        Self {
            current: Mutex::new(start_path.to_string()),
            last_redirect: Mutex::new(None),
        }
    }

    /// Target of the most recent redirect, if any happened
    pub fn last_redirect(&self) -> Option<String> {
        self.last_redirect
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Navigator for SessionNavigator {
    fn current_path(&self) -> String {
        self.current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn redirect(&self, path: &str) {
        log::info!("Redirecting to {}", path);
        *self
            .current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = path.to_string();
        *self
            .last_redirect
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(path.to_string());
    }
}
