//! Database endpoint selection
//!
//! The endpoint is resolved once at startup from the host identifier and the
//! connection settings, then handed to the gateway by value.

use crate::config::AppConfig;
use std::fmt;

/// Host identifier that selects the local emulator
pub const LOCAL_DEV_HOST: &str = "localhost";

/// Environment variable carrying the host identifier
pub const HOST_ENV_VAR: &str = "KARIYERA_HOST";

/// Default emulator address
pub const DEFAULT_EMULATOR_HOST: &str = "127.0.0.1";
pub const DEFAULT_EMULATOR_PORT: u16 = 8080;

/// Default Firebase project
pub const DEFAULT_PROJECT_ID: &str = "kariyera-app";

const HOSTED_BASE_URL: &str = "https://firestore.googleapis.com";

/// Where documents are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Local same-machine emulator
    Emulator {
        host: String,
        port: u16,
        project_id: String,
    },
    /// Hosted production instance
    Hosted {
        project_id: String,
        api_key: Option<String>,
        app_id: Option<String>,
    },
}

impl Endpoint {
    /// Pick the endpoint for this process.
    ///
    /// Only a host identifier of exactly `localhost` selects the emulator;
    /// anything else, including no identifier at all, selects the hosted
    /// instance.
    pub fn resolve(host: Option<&str>, config: &AppConfig) -> Self {
        let project_id = config
            .project_id
            .clone()
            .unwrap_or_else(|| DEFAULT_PROJECT_ID.to_string());

        if host == Some(LOCAL_DEV_HOST) {
            Endpoint::Emulator {
                host: config
                    .emulator_host
                    .clone()
                    .unwrap_or_else(|| DEFAULT_EMULATOR_HOST.to_string()),
                port: config.emulator_port.unwrap_or(DEFAULT_EMULATOR_PORT),
                project_id,
            }
        } else {
            Endpoint::Hosted {
                project_id,
                api_key: config.api_key.clone(),
                app_id: config.app_id.clone(),
            }
        }
    }

    /// Read the host identifier from the environment, falling back to config
    pub fn host_identifier(config: &AppConfig) -> Option<String> {
        std::env::var(HOST_ENV_VAR)
            .ok()
            .filter(|h| !h.is_empty())
            .or_else(|| config.host.clone())
    }

    pub fn is_emulator(&self) -> bool {
        matches!(self, Endpoint::Emulator { .. })
    }

    pub fn project_id(&self) -> &str {
        match self {
            Endpoint::Emulator { project_id, .. } | Endpoint::Hosted { project_id, .. } => {
                project_id
            }
        }
    }

    fn base_url(&self) -> String {
        match self {
            Endpoint::Emulator { host, port, .. } => format!("http://{host}:{port}"),
            Endpoint::Hosted { .. } => HOSTED_BASE_URL.to_string(),
        }
    }

    /// REST URL for creating a document in `collection`
    pub fn collection_url(&self, collection: &str) -> String {
        let mut url = format!(
            "{}/v1/projects/{}/databases/(default)/documents/{}",
            self.base_url(),
            self.project_id(),
            collection
        );
        if let Endpoint::Hosted {
            api_key: Some(key), ..
        } = self
        {
            url.push_str("?key=");
            url.push_str(key);
        }
        url
    }

    /// App id sent alongside hosted requests
    pub fn app_id(&self) -> Option<&str> {
        match self {
            Endpoint::Hosted { app_id, .. } => app_id.as_deref(),
            Endpoint::Emulator { .. } => None,
        }
    }

    /// Short label for the status bar and notices
    pub fn label(&self) -> String {
        match self {
            Endpoint::Emulator { host, port, .. } => format!("local emulator {host}:{port}"),
            Endpoint::Hosted { project_id, .. } => format!("Firestore ({project_id})"),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
