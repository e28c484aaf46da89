use shared_types::PortalConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<PortalConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Parse the contents of `config.toml`. Unparseable input yields the defaults.
pub fn parse_portal_config(contents: &str) -> PortalConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(path = CONFIG_PATH, error = %e, "Failed to parse config, using defaults");
        PortalConfig::default()
    })
}

/// Read `config.toml` and store it in the global `OnceLock`. Only the first
/// call has effect.
///
/// If the file is missing or unparseable, every setting takes its default.
pub fn load_portal_config() -> &'static PortalConfig {
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let config = parse_portal_config(&contents);
            tracing::info!(
                login = %config.routes.login,
                fallback = %config.routes.fallback,
                login_latency_ms = config.portal.login_latency_ms,
                "Portal config loaded"
            );
            config
        }
        Err(e) => {
            tracing::warn!(path = CONFIG_PATH, error = %e, "Config not found, using defaults");
            PortalConfig::default()
        }
    })
}

/// The loaded config, or the defaults if [`load_portal_config`] was never
/// called.
pub fn portal_config() -> &'static PortalConfig {
    static DEFAULT: OnceLock<PortalConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(PortalConfig::default))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_partial_config() {
        let config = parse_portal_config(
            r#"
            [portal]
            login_latency_ms = 0

            [routes]
            fallback = "/about"
            "#,
        );
        assert_eq!(config.portal.login_latency_ms, 0);
        assert_eq!(config.routes.login, "/Auth");
        assert_eq!(
            config.portal.title_suffix,
            PortalConfig::default().portal.title_suffix
        );
    }

    #[test]
    fn parse_garbage_falls_back_to_defaults() {
        assert_eq!(parse_portal_config("[portal\nbroken"), PortalConfig::default());
    }

    #[test]
    fn shipped_config_file_parses() {
        let contents = include_str!("../../../config.toml");
        let config: PortalConfig = toml::from_str(contents).unwrap();
        assert_eq!(config, PortalConfig::default());
    }
}
