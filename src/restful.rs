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

//! Bulk-import client over the REST surface.
//!
//! Import jobs are only reachable over HTTP, not gRPC. Responses arrive in
//! a uniform `{code, message, data}` envelope; a non-zero code is a server
//! error regardless of the HTTP status.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::config::Credentials;
use crate::error::{Error, Result};

const IMPORT_TIMEOUT: Duration = Duration::from_secs(60);

/// REST client for bulk-import jobs.
pub struct BulkImportClient {
    http: reqwest::Client,
    base_url: String,
    authorization: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    code: i32,
    #[serde(default)]
    message: String,
    data: Option<T>,
}

/// Request body for create-import-job. Each inner list is one batch of
/// files imported as a unit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportJobRequest {
    pub collection_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition_name: Option<String>,
    pub files: Vec<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImportJobInfo {
    pub job_id: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImportProgress {
    pub job_id: String,
    #[serde(default)]
    pub collection_name: String,
    /// One of Pending, Importing, Completed, Failed.
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub progress: i64,
    #[serde(default)]
    pub imported_rows: i64,
    #[serde(default)]
    pub total_rows: i64,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImportJobList {
    #[serde(default)]
    pub records: Vec<ImportProgress>,
}

impl BulkImportClient {
    pub fn new(base_url: impl Into<String>, credentials: Option<&Credentials>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(IMPORT_TIMEOUT)
            .build()?;
        let authorization = credentials.map(|c| match c {
            Credentials::Token(token) => format!("Bearer {}", token),
            Credentials::Basic { username, password } => {
                format!("Bearer {}", BASE64.encode(format!("{}:{}", username, password)))
            }
        });
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            authorization,
        })
    }

    pub async fn create_import_job(&self, request: &ImportJobRequest) -> Result<ImportJobInfo> {
        if request.collection_name.trim().is_empty() {
            return Err(Error::Param("import collection name must not be empty".to_string()));
        }
        if request.files.is_empty() {
            return Err(Error::Param("import job needs at least one file batch".to_string()));
        }
        debug!(collection = %request.collection_name, "creating import job");
        self.post("/v2/vectordb/jobs/import/create", request).await
    }

    pub async fn get_import_progress(&self, job_id: &str) -> Result<ImportProgress> {
        if job_id.trim().is_empty() {
            return Err(Error::Param("import job id must not be empty".to_string()));
        }
        self.post(
            "/v2/vectordb/jobs/import/getProgress",
            &serde_json::json!({ "jobId": job_id }),
        )
        .await
    }

    pub async fn list_import_jobs(&self, collection: &str) -> Result<Vec<ImportProgress>> {
        let list: ImportJobList = self
            .post(
                "/v2/vectordb/jobs/import/list",
                &serde_json::json!({ "collectionName": collection }),
            )
            .await?;
        Ok(list.records)
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let mut request = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body);
        if let Some(authorization) = &self.authorization {
            request = request.header("Authorization", authorization);
        }
        let response = request.send().await?.error_for_status()?;
        let envelope: Envelope<T> = response.json().await?;
        if envelope.code != 0 {
            return Err(Error::Server {
                code: envelope.code,
                reason: envelope.message,
            });
        }
        envelope.data.ok_or_else(|| Error::Server {
            code: -1,
            reason: "import response carried no data".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_error_code() {
        let envelope: Envelope<ImportJobInfo> =
            serde_json::from_str(r#"{"code": 1100, "message": "collection not found"}"#).unwrap();
        assert_eq!(envelope.code, 1100);
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_progress_deserializes_envelope() {
        let envelope: Envelope<ImportProgress> = serde_json::from_str(
            r#"{"code": 0, "data": {"jobId": "42", "state": "Importing", "progress": 60,
                "importedRows": 600, "totalRows": 1000}}"#,
        )
        .unwrap();
        let progress = envelope.data.unwrap();
        assert_eq!(progress.job_id, "42");
        assert_eq!(progress.state, "Importing");
        assert_eq!(progress.imported_rows, 600);
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let request = ImportJobRequest {
            collection_name: "docs".to_string(),
            partition_name: None,
            files: vec![vec!["a.parquet".to_string()]],
            options: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["collectionName"], "docs");
        assert!(json.get("partitionName").is_none());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = BulkImportClient::new("http://localhost:19530/", None).unwrap();
        assert_eq!(client.base_url, "http://localhost:19530");
    }
}
