/*
 * Copyright 2025 Vijaykumar Singh
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Connection configuration for [`crate::client::MilvusClient`].

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

pub const DEFAULT_DB_NAME: &str = "default";
pub const DEFAULT_RPC_TIMEOUT: Duration = Duration::from_secs(30);

/// Authentication material sent in the `authorization` metadata key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Credentials {
    /// API key / token deployments (e.g. hosted clusters).
    Token(String),
    /// Username/password deployments.
    Basic { username: String, password: String },
}

/// Validated connection parameters, built via [`ConnectConfigBuilder`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectConfig {
    pub uri: String,
    pub db_name: String,
    pub credentials: Option<Credentials>,
    pub rpc_timeout: Duration,
}

impl ConnectConfig {
    pub fn builder(uri: impl Into<String>) -> ConnectConfigBuilder {
        ConnectConfigBuilder {
            uri: uri.into(),
            db_name: DEFAULT_DB_NAME.to_string(),
            credentials: None,
            rpc_timeout: DEFAULT_RPC_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConnectConfigBuilder {
    uri: String,
    db_name: String,
    credentials: Option<Credentials>,
    rpc_timeout: Duration,
}

impl ConnectConfigBuilder {
    pub fn db_name(mut self, db_name: impl Into<String>) -> Self {
        self.db_name = db_name.into();
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::Token(token.into()));
        self
    }

    pub fn credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials::Basic {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    pub fn rpc_timeout(mut self, timeout: Duration) -> Self {
        self.rpc_timeout = timeout;
        self
    }

    /// Validates and freezes the configuration. All parameter errors are
    /// raised here, before any network activity.
    pub fn build(self) -> Result<ConnectConfig> {
        if self.uri.trim().is_empty() {
            return Err(Error::Param("uri must not be empty".to_string()));
        }
        let parsed = Url::parse(&self.uri)
            .map_err(|e| Error::Param(format!("invalid uri '{}': {}", self.uri, e)))?;
        match parsed.scheme() {
            "http" | "https" | "grpc" | "grpcs" => {}
            other => {
                return Err(Error::Param(format!(
                    "unsupported uri scheme '{}', expected http(s) or grpc(s)",
                    other
                )))
            }
        }
        if parsed.host_str().is_none() {
            return Err(Error::Param(format!("uri '{}' has no host", self.uri)));
        }
        if self.db_name.trim().is_empty() {
            return Err(Error::Param("db_name must not be empty".to_string()));
        }
        if let Some(Credentials::Basic { username, .. }) = &self.credentials {
            if username.is_empty() {
                return Err(Error::Param("username must not be empty".to_string()));
            }
        }
        if let Some(Credentials::Token(token)) = &self.credentials {
            if token.is_empty() {
                return Err(Error::Param("token must not be empty".to_string()));
            }
        }
        Ok(ConnectConfig {
            uri: self.uri,
            db_name: self.db_name,
            credentials: self.credentials,
            rpc_timeout: self.rpc_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config() {
        let config = ConnectConfig::builder("http://localhost:19530").build().unwrap();
        assert_eq!(config.db_name, DEFAULT_DB_NAME);
        assert!(config.credentials.is_none());
        assert_eq!(config.rpc_timeout, DEFAULT_RPC_TIMEOUT);
    }

    #[test]
    fn test_rejects_empty_uri() {
        assert!(ConnectConfig::builder("").build().is_err());
        assert!(ConnectConfig::builder("   ").build().is_err());
    }

    #[test]
    fn test_rejects_bad_scheme() {
        assert!(ConnectConfig::builder("ftp://localhost:19530").build().is_err());
    }

    #[test]
    fn test_rejects_empty_token() {
        let result = ConnectConfig::builder("http://localhost:19530")
            .token("")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_full_config() {
        let config = ConnectConfig::builder("https://cluster.example.com:443")
            .db_name("prod")
            .credentials("root", "Milvus")
            .rpc_timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(config.db_name, "prod");
        assert!(matches!(config.credentials, Some(Credentials::Basic { .. })));
    }
}
