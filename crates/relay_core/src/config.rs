use std::sync::OnceLock;

/// Address of the device server on the lab network.
pub const DEFAULT_SERVER_URL: &str = "http://10.0.1.250";

static CONFIG: OnceLock<RelayConfig> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub server_url: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

/// Installs the process-wide config. The first call wins; later calls get the
/// already installed value back.
pub fn install(config: RelayConfig) -> &'static RelayConfig {
    let installed = CONFIG.get_or_init(|| config.clone());
    if *installed != config {
        tracing::warn!(
            server_url = %installed.server_url,
            "relay config already installed; ignoring replacement"
        );
    }
    installed
}

pub fn current() -> &'static RelayConfig {
    CONFIG.get_or_init(RelayConfig::default)
}
