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

//! Index descriptors: creation parameters and describe-index results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::proto::milvus as wire;
use crate::types::{IndexState, IndexType, MetricType};

/// Parameters for create-index. The index name defaults to the field name
/// when unset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndexParams {
    pub field_name: String,
    pub index_name: Option<String>,
    pub index_type: IndexType,
    pub metric_type: Option<MetricType>,
    /// Opaque algorithm parameters, e.g. "M"/"efConstruction" for HNSW.
    pub extra_params: BTreeMap<String, String>,
}

impl IndexParams {
    pub fn new(field_name: impl Into<String>, index_type: IndexType) -> Self {
        Self {
            field_name: field_name.into(),
            index_name: None,
            index_type,
            metric_type: None,
            extra_params: BTreeMap::new(),
        }
    }

    pub fn index_name(mut self, name: impl Into<String>) -> Self {
        self.index_name = Some(name.into());
        self
    }

    pub fn metric_type(mut self, metric: MetricType) -> Self {
        self.metric_type = Some(metric);
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_params.insert(key.into(), value.into());
        self
    }

    /// Effective index name.
    pub fn effective_name(&self) -> &str {
        self.index_name.as_deref().unwrap_or(&self.field_name)
    }

    pub fn validate(&self) -> Result<()> {
        if self.field_name.trim().is_empty() {
            return Err(Error::Param("index field name must not be empty".to_string()));
        }
        if let Some(name) = &self.index_name {
            if name.trim().is_empty() {
                return Err(Error::Param("index name must not be empty when set".to_string()));
            }
        }
        Ok(())
    }

    /// Wire key-value list: index_type, optional metric_type, then the
    /// opaque params.
    pub(crate) fn to_wire_params(&self) -> Vec<wire::KeyValuePair> {
        let mut params = vec![wire::KeyValuePair {
            key: "index_type".to_string(),
            value: self.index_type.as_str().to_string(),
        }];
        if let Some(metric) = self.metric_type {
            params.push(wire::KeyValuePair {
                key: "metric_type".to_string(),
                value: metric.as_str().to_string(),
            });
        }
        for (key, value) in &self.extra_params {
            params.push(wire::KeyValuePair {
                key: key.clone(),
                value: value.clone(),
            });
        }
        params
    }
}

/// Snapshot of one index as reported by describe-index, including the
/// server-side build progress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndexInfo {
    pub index_name: String,
    pub field_name: String,
    pub params: BTreeMap<String, String>,
    pub indexed_rows: i64,
    pub total_rows: i64,
    pub pending_rows: i64,
    pub state: IndexState,
    /// Server-supplied reason when `state` is Failed.
    pub fail_reason: String,
}

impl IndexInfo {
    pub(crate) fn from_wire(desc: wire::IndexDescription) -> Self {
        Self {
            index_name: desc.index_name,
            field_name: desc.field_name,
            params: desc
                .params
                .into_iter()
                .map(|pair| (pair.key, pair.value))
                .collect(),
            indexed_rows: desc.indexed_rows,
            total_rows: desc.total_rows,
            pending_rows: desc.pending_index_rows,
            state: IndexState::from_wire(desc.state),
            fail_reason: desc.index_state_fail_reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_name_defaults_to_field_name() {
        let params = IndexParams::new("vector", IndexType::Hnsw);
        assert_eq!(params.effective_name(), "vector");
        let named = params.index_name("vector_idx");
        assert_eq!(named.effective_name(), "vector_idx");
    }

    #[test]
    fn test_wire_params_contain_type_and_metric() {
        let params = IndexParams::new("vector", IndexType::Hnsw)
            .metric_type(MetricType::Cosine)
            .param("M", "16")
            .param("efConstruction", "200");
        let pairs = params.to_wire_params();
        assert_eq!(pairs[0].key, "index_type");
        assert_eq!(pairs[0].value, "HNSW");
        assert_eq!(pairs[1].key, "metric_type");
        assert_eq!(pairs[1].value, "COSINE");
        assert!(pairs.iter().any(|p| p.key == "M" && p.value == "16"));
    }

    #[test]
    fn test_empty_field_name_rejected() {
        assert!(IndexParams::new("", IndexType::Flat).validate().is_err());
    }

    #[test]
    fn test_index_info_from_wire() {
        let desc = wire::IndexDescription {
            index_name: "vector_idx".to_string(),
            field_name: "vector".to_string(),
            indexed_rows: 900,
            total_rows: 1000,
            pending_index_rows: 100,
            state: wire::IndexState::InProgress as i32,
            ..Default::default()
        };
        let info = IndexInfo::from_wire(desc);
        assert_eq!(info.state, IndexState::InProgress);
        assert_eq!(info.indexed_rows, 900);
        assert!(!info.state.is_terminal());
    }
}
