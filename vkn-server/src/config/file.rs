//! TOML file configuration structures.
//!
//! These structs directly map to the `vkn-config.toml` file format.
//! Tokens are not part of the file; they come from the environment.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub group: GroupConfig,
    pub recipients: RecipientsConfig,
    #[serde(default)]
    pub vk: VkConfig,
}

/// Server configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The address and port to listen on (e.g., "0.0.0.0:8080").
    #[serde(default = "default_listen_addr")]
    pub listen: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen_addr(),
        }
    }
}

fn default_listen_addr() -> SocketAddr {
    "0.0.0.0:8080".parse().expect("valid default address")
}

/// The community being watched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupConfig {
    /// Numeric community id (positive, without the leading minus).
    pub id: i64,
    /// Community short name, used to build deep links.
    pub name: String,
}

/// Where notifications go.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipientsConfig {
    /// Account that receives every notification.
    pub primary: i64,
    /// Optional second account that receives a copy.
    #[serde(default)]
    pub control: Option<i64>,
}

/// VK API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VkConfig {
    /// VK API version passed on every outbound call.
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

impl Default for VkConfig {
    fn default() -> Self {
        Self {
            api_version: default_api_version(),
        }
    }
}

fn default_api_version() -> String {
    "5.199".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parsing() {
        let toml_str = r#"
[server]
listen = "127.0.0.1:3000"

[group]
id = 123456
name = "myclub"

[recipients]
primary = 111
control = 222

[vk]
api_version = "5.131"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.listen.port(), 3000);
        assert_eq!(config.group.id, 123456);
        assert_eq!(config.group.name, "myclub");
        assert_eq!(config.recipients.primary, 111);
        assert_eq!(config.recipients.control, Some(222));
        assert_eq!(config.vk.api_version, "5.131");
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let toml_str = r#"
[group]
id = 123456
name = "myclub"

[recipients]
primary = 111
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.listen.port(), 8080);
        assert_eq!(config.recipients.control, None);
        assert_eq!(config.vk.api_version, "5.199");
    }
}
