//! Dashboard configuration.
//!
//! This module defines the bind address and the sign-in gate of the web UI.

use serde::{Deserialize, Serialize};

/// Configuration for the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Host to bind the dashboard to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Authentication configuration.
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Sign-in gate configuration.
///
/// With no users configured every username/password pair is accepted, which
/// matches the mock login of the dashboard. The gate is a presentation gate,
/// not a security boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Whether pages require a signed-in session.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Users for basic auth.
    #[serde(default)]
    pub users: Vec<BasicAuthUser>,
}

/// Basic auth user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicAuthUser {
    /// Username.
    pub username: String,
    /// Password (or environment variable reference).
    #[serde(default)]
    pub password: Option<String>,
    /// Environment variable containing the password.
    #[serde(default)]
    pub password_env: Option<String>,
}

impl BasicAuthUser {
    /// Get the password, checking password_env first.
    pub fn get_password(&self) -> Option<String> {
        if let Some(env_var) = &self.password_env
            && let Ok(password) = std::env::var(env_var)
        {
            return Some(password);
        }
        self.password.clone()
    }
}

impl AuthConfig {
    /// True when at least one user is configured.
    pub fn has_users(&self) -> bool {
        !self.users.is_empty()
    }

    /// Check a username/password pair.
    ///
    /// Any non-empty pair is accepted when no users are configured.
    pub fn check_credentials(&self, username: &str, password: &str) -> bool {
        if username.trim().is_empty() {
            return false;
        }
        if !self.has_users() {
            return true;
        }
        self.users
            .iter()
            .find(|u| u.username == username)
            .and_then(BasicAuthUser::get_password)
            .is_some_and(|expected| expected == password)
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            users: Vec::new(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            auth: AuthConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Address string for binding, e.g. `127.0.0.1:9002`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_enabled() -> bool {
    true
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    9002
}
