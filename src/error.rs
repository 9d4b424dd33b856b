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

//! Error taxonomy for the client SDK.
//!
//! Four families of failures surface to callers: client-side parameter
//! validation, server-reported RPC status, transport failures, and the
//! wait-loop terminal errors (timeout, index build failure).

use thiserror::Error;

use crate::proto::milvus::Status;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Client-side parameter validation failure, raised before any network call.
    #[error("Invalid parameter: {0}")]
    Param(String),

    /// Schema/type conversion failure.
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Non-success status reported by the server on an otherwise successful RPC.
    #[error("Server error (code {code}): {reason}")]
    Server { code: i32, reason: String },

    /// gRPC transport failure.
    #[error("Transport error: {0}")]
    Transport(#[from] tonic::Status),

    /// Connection establishment failure.
    #[error("Connection error: {0}")]
    Connection(#[from] tonic::transport::Error),

    /// A wait loop did not reach a terminal state within its deadline.
    #[error("Timed out after {elapsed_ms} ms waiting for {waiting_for}")]
    Timeout { waiting_for: String, elapsed_ms: u64 },

    /// The server reported a failed index build. Fatal, never retried.
    #[error("Index build failed: {reason}")]
    IndexBuild { reason: String },

    /// Describe-index returned no index matching the wait target. Absence
    /// is not completion.
    #[error("Failed to describe index '{index}' on collection '{collection}'")]
    IndexNotFound { collection: String, index: String },

    /// HTTP failure from the bulk-import REST surface.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON (de)serialization failure on the REST surface.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    /// A default value whose type does not match the declared field type.
    #[error("Default value type mismatch on field '{field}': {detail}")]
    DefaultValueMismatch { field: String, detail: String },

    #[error("Unsupported data conversion: {0}")]
    Unsupported(String),
}

impl Error {
    /// Converts a wire status into `Ok(())` or `Error::Server`.
    ///
    /// Newer servers populate `code`; older ones only `error_code`. A missing
    /// status on a response message is itself a protocol violation.
    pub fn check_status(status: Option<&Status>) -> Result<()> {
        match status {
            None => Err(Error::Server {
                code: -1,
                reason: "response carried no status".to_string(),
            }),
            Some(s) if s.code == 0 && s.error_code == 0 => Ok(()),
            Some(s) => Err(Error::Server {
                code: if s.code != 0 { s.code } else { s.error_code },
                reason: s.reason.clone(),
            }),
        }
    }

    /// Raw server status code, if this is a server-side error.
    pub fn server_code(&self) -> Option<i32> {
        match self {
            Error::Server { code, .. } => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_status_success() {
        let status = Status {
            error_code: 0,
            reason: String::new(),
            code: 0,
        };
        assert!(Error::check_status(Some(&status)).is_ok());
    }

    #[test]
    fn test_check_status_failure_prefers_new_code() {
        let status = Status {
            error_code: 1,
            reason: "collection not found".to_string(),
            code: 100,
        };
        let err = Error::check_status(Some(&status)).unwrap_err();
        assert_eq!(err.server_code(), Some(100));
        assert!(err.to_string().contains("collection not found"));
    }

    #[test]
    fn test_check_status_legacy_error_code() {
        let status = Status {
            error_code: 4,
            reason: "no such collection".to_string(),
            code: 0,
        };
        let err = Error::check_status(Some(&status)).unwrap_err();
        assert_eq!(err.server_code(), Some(4));
    }

    #[test]
    fn test_missing_status_is_error() {
        assert!(Error::check_status(None).is_err());
    }
}
