use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::Role;

/// Portal-wide presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortalSettings {
    /// Appended to every page title: `"{title} - {title_suffix}"`.
    #[serde(default = "default_title_suffix")]
    pub title_suffix: String,
    /// Artificial delay applied by the mock login, in milliseconds.
    #[serde(default = "default_login_latency_ms")]
    pub login_latency_ms: u64,
}

impl Default for PortalSettings {
    fn default() -> Self {
        Self {
            title_suffix: default_title_suffix(),
            login_latency_ms: default_login_latency_ms(),
        }
    }
}

/// Where users land: the login route, per-role defaults and the fallback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteSettings {
    #[serde(default = "default_login_route")]
    pub login: String,
    /// Landing route for roles missing from `defaults`.
    #[serde(default = "default_fallback_route")]
    pub fallback: String,
    /// Role label -> landing route.
    #[serde(default = "default_role_routes")]
    pub defaults: BTreeMap<String, String>,
}

impl Default for RouteSettings {
    fn default() -> Self {
        Self {
            login: default_login_route(),
            fallback: default_fallback_route(),
            defaults: default_role_routes(),
        }
    }
}

impl RouteSettings {
    /// Per-role defaults keyed by parsed [`Role`].
    pub fn role_defaults(&self) -> BTreeMap<Role, String> {
        self.defaults
            .iter()
            .map(|(role, path)| (Role::parse(role), path.clone()))
            .collect()
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PortalConfig {
    #[serde(default)]
    pub portal: PortalSettings,
    #[serde(default)]
    pub routes: RouteSettings,
}

fn default_title_suffix() -> String {
    "ABDAP Automotive Analytics Platform".to_string()
}

fn default_login_latency_ms() -> u64 {
    1000
}

fn default_login_route() -> String {
    "/Auth".to_string()
}

fn default_fallback_route() -> String {
    "/about".to_string()
}

fn default_role_routes() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("SalesManager".to_string(), "/app/SaleTotal".to_string()),
        ("Customer".to_string(), "/app/TopCarModelList".to_string()),
    ])
}
