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

//! Data plane: insert/upsert/delete, flush, query and search.
//!
//! Every successful mutation feeds its server-assigned timestamp into the
//! session tracker so later Session-level reads observe the write.

use prost::Message;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::consistency;
use crate::data::{FieldColumn, IdList, SearchOutcome};
use crate::error::{Error, Result};
use crate::proto::milvus as wire;
use crate::types::{ConsistencyLevel, MetricType};

use super::{require_name, MilvusClient};

/// Some server versions transiently report this code right after an index
/// build while search metadata propagates. Only this code is retried.
const RETRIABLE_SEARCH_CODE: i32 = 2200;
const SEARCH_ATTEMPTS: u32 = 3;

/// Outcome of an insert/upsert/delete.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationInfo {
    /// Primary keys of the affected rows.
    pub ids: IdList,
    pub insert_count: i64,
    pub delete_count: i64,
    pub upsert_count: i64,
    /// Hybrid timestamp the server assigned to the mutation.
    pub timestamp: u64,
}

impl MutationInfo {
    fn from_wire(result: wire::MutationResult) -> Self {
        Self {
            ids: IdList::from_wire(result.ids),
            insert_count: result.insert_cnt,
            delete_count: result.delete_cnt,
            upsert_count: result.upsert_cnt,
            timestamp: result.timestamp,
        }
    }
}

/// Handle to a triggered flush: the sealed segments and the flush timestamp
/// to poll against.
#[derive(Debug, Clone, PartialEq)]
pub struct FlushTask {
    pub collection: String,
    pub segment_ids: Vec<i64>,
    pub flush_ts: u64,
}

#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    pub expr: String,
    pub output_fields: Vec<String>,
    pub partition_names: Vec<String>,
    /// Row cap; `None` leaves it to the server.
    pub limit: Option<i64>,
    /// `None` falls back to Bounded.
    pub consistency_level: Option<ConsistencyLevel>,
}

impl QueryOptions {
    pub fn new(expr: impl Into<String>) -> Self {
        Self {
            expr: expr.into(),
            ..Default::default()
        }
    }

    pub fn output_fields(mut self, fields: Vec<String>) -> Self {
        self.output_fields = fields;
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn consistency_level(mut self, level: ConsistencyLevel) -> Self {
        self.consistency_level = Some(level);
        self
    }
}

#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub field_name: String,
    pub limit: i64,
    /// Boolean filter expression; empty means no filter.
    pub expr: String,
    pub output_fields: Vec<String>,
    pub partition_names: Vec<String>,
    pub metric_type: Option<MetricType>,
    /// Algorithm parameters forwarded verbatim under the "params" key,
    /// e.g. `{"ef": 64}`.
    pub params: Option<String>,
    pub round_decimal: i64,
    pub consistency_level: Option<ConsistencyLevel>,
}

impl SearchOptions {
    pub fn new(field_name: impl Into<String>, limit: i64) -> Self {
        Self {
            field_name: field_name.into(),
            limit,
            expr: String::new(),
            output_fields: Vec::new(),
            partition_names: Vec::new(),
            metric_type: None,
            params: None,
            round_decimal: -1,
            consistency_level: None,
        }
    }

    pub fn expr(mut self, expr: impl Into<String>) -> Self {
        self.expr = expr.into();
        self
    }

    pub fn output_fields(mut self, fields: Vec<String>) -> Self {
        self.output_fields = fields;
        self
    }

    pub fn metric_type(mut self, metric: MetricType) -> Self {
        self.metric_type = Some(metric);
        self
    }

    pub fn params(mut self, params: impl Into<String>) -> Self {
        self.params = Some(params.into());
        self
    }

    pub fn consistency_level(mut self, level: ConsistencyLevel) -> Self {
        self.consistency_level = Some(level);
        self
    }

    fn validate(&self) -> Result<()> {
        if self.field_name.trim().is_empty() {
            return Err(Error::Param("search field name must not be empty".to_string()));
        }
        if self.limit <= 0 {
            return Err(Error::Param("search limit must be positive".to_string()));
        }
        Ok(())
    }
}

/// Encodes query vectors into the serialized placeholder group the search
/// RPC expects. Each row is one little-endian f32 run under the tag `$0`.
fn float_placeholder_group(vectors: &[Vec<f32>]) -> Result<Vec<u8>> {
    if vectors.is_empty() {
        return Err(Error::Param("search needs at least one query vector".to_string()));
    }
    let dim = vectors[0].len();
    let mut values = Vec::with_capacity(vectors.len());
    for vector in vectors {
        if vector.len() != dim {
            return Err(Error::Param(format!(
                "query vectors disagree on dimension: {} vs {}",
                dim,
                vector.len()
            )));
        }
        let mut bytes = Vec::with_capacity(vector.len() * 4);
        for value in vector {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
        values.push(bytes);
    }
    let group = wire::PlaceholderGroup {
        placeholders: vec![wire::PlaceholderValue {
            tag: "$0".to_string(),
            value_type: wire::PlaceholderType::FloatVector as i32,
            values,
        }],
    };
    Ok(group.encode_to_vec())
}

fn kv(key: &str, value: String) -> wire::KeyValuePair {
    wire::KeyValuePair {
        key: key.to_string(),
        value,
    }
}

impl MilvusClient {
    pub async fn insert(
        &self,
        collection: &str,
        partition: Option<&str>,
        columns: &[FieldColumn],
    ) -> Result<MutationInfo> {
        require_name(collection, "collection")?;
        let num_rows = uniform_row_count(columns)?;
        let request = wire::InsertRequest {
            db_name: self.db_name().to_string(),
            collection_name: collection.to_string(),
            partition_name: partition.unwrap_or_default().to_string(),
            fields_data: columns.iter().map(FieldColumn::to_wire).collect(),
            num_rows,
        };
        let result = self.rpc().insert(request).await?.into_inner();
        Error::check_status(result.status.as_ref())?;
        let info = MutationInfo::from_wire(result);
        self.tracker().update(collection, info.timestamp);
        debug!(collection, rows = info.insert_count, "inserted");
        Ok(info)
    }

    pub async fn upsert(
        &self,
        collection: &str,
        partition: Option<&str>,
        columns: &[FieldColumn],
    ) -> Result<MutationInfo> {
        require_name(collection, "collection")?;
        let num_rows = uniform_row_count(columns)?;
        let request = wire::UpsertRequest {
            db_name: self.db_name().to_string(),
            collection_name: collection.to_string(),
            partition_name: partition.unwrap_or_default().to_string(),
            fields_data: columns.iter().map(FieldColumn::to_wire).collect(),
            num_rows,
        };
        let result = self.rpc().upsert(request).await?.into_inner();
        Error::check_status(result.status.as_ref())?;
        let info = MutationInfo::from_wire(result);
        self.tracker().update(collection, info.timestamp);
        Ok(info)
    }

    /// Deletes rows matching the boolean expression, e.g. `id in [1, 2]`.
    pub async fn delete(
        &self,
        collection: &str,
        partition: Option<&str>,
        expr: &str,
    ) -> Result<MutationInfo> {
        require_name(collection, "collection")?;
        if expr.trim().is_empty() {
            return Err(Error::Param("delete expression must not be empty".to_string()));
        }
        let request = wire::DeleteRequest {
            db_name: self.db_name().to_string(),
            collection_name: collection.to_string(),
            partition_name: partition.unwrap_or_default().to_string(),
            expr: expr.to_string(),
            consistency_level: ConsistencyLevel::Bounded.to_wire() as i32,
        };
        let result = self.rpc().delete(request).await?.into_inner();
        Error::check_status(result.status.as_ref())?;
        let info = MutationInfo::from_wire(result);
        self.tracker().update(collection, info.timestamp);
        Ok(info)
    }

    /// Seals the collection's growing segments. Returns the handle needed to
    /// wait for persistence.
    pub async fn flush(&self, collection: &str) -> Result<FlushTask> {
        require_name(collection, "collection")?;
        let request = wire::FlushRequest {
            db_name: self.db_name().to_string(),
            collection_names: vec![collection.to_string()],
        };
        let mut response = self.rpc().flush(request).await?.into_inner();
        Error::check_status(response.status.as_ref())?;
        let segment_ids = response
            .coll_seg_ids
            .remove(collection)
            .map(|ids| ids.data)
            .unwrap_or_default();
        let flush_ts = response.coll_flush_ts.get(collection).copied().unwrap_or(0);
        Ok(FlushTask {
            collection: collection.to_string(),
            segment_ids,
            flush_ts,
        })
    }

    /// Blocks until a flush's segments are persisted. No deadline; wrap the
    /// future or cancel the token to bound it.
    pub async fn wait_for_flushed(&self, task: &FlushTask, cancel: &CancellationToken) -> Result<()> {
        super::index::wait_for_flushed(
            self,
            &task.collection,
            &task.segment_ids,
            task.flush_ts,
            cancel,
        )
        .await
    }

    pub async fn query(&self, collection: &str, options: &QueryOptions) -> Result<Vec<FieldColumn>> {
        require_name(collection, "collection")?;
        if options.expr.trim().is_empty() {
            return Err(Error::Param("query expression must not be empty".to_string()));
        }
        let level = options.consistency_level.unwrap_or_default();
        let mut query_params = Vec::new();
        if let Some(limit) = options.limit {
            query_params.push(kv("limit", limit.to_string()));
        }
        let request = wire::QueryRequest {
            db_name: self.db_name().to_string(),
            collection_name: collection.to_string(),
            expr: options.expr.clone(),
            output_fields: options.output_fields.clone(),
            partition_names: options.partition_names.clone(),
            guarantee_timestamp: consistency::guarantee_timestamp(level, collection, self.tracker()),
            query_params,
            consistency_level: level.to_wire() as i32,
        };
        let response = self.rpc().query(request).await?.into_inner();
        Error::check_status(response.status.as_ref())?;
        response
            .fields_data
            .into_iter()
            .map(FieldColumn::from_wire)
            .collect()
    }

    /// Nearest-neighbor search over float vectors.
    pub async fn search(
        &self,
        collection: &str,
        vectors: &[Vec<f32>],
        options: &SearchOptions,
    ) -> Result<SearchOutcome> {
        require_name(collection, "collection")?;
        options.validate()?;
        let level = options.consistency_level.unwrap_or_default();
        let placeholder_group = float_placeholder_group(vectors)?;

        let mut search_params = vec![
            kv("anns_field", options.field_name.clone()),
            kv("topk", options.limit.to_string()),
        ];
        if let Some(metric) = options.metric_type {
            search_params.push(kv("metric_type", metric.as_str().to_string()));
        }
        if let Some(params) = &options.params {
            search_params.push(kv("params", params.clone()));
        }
        search_params.push(kv("round_decimal", options.round_decimal.to_string()));

        let request = wire::SearchRequest {
            db_name: self.db_name().to_string(),
            collection_name: collection.to_string(),
            partition_names: options.partition_names.clone(),
            dsl: options.expr.clone(),
            placeholder_group,
            dsl_type: wire::DslType::BoolExprV1 as i32,
            output_fields: options.output_fields.clone(),
            search_params,
            guarantee_timestamp: consistency::guarantee_timestamp(level, collection, self.tracker()),
            nq: vectors.len() as i64,
            consistency_level: level.to_wire() as i32,
        };

        let mut attempt = 0;
        let response = loop {
            attempt += 1;
            let response = self.rpc().search(request.clone()).await?.into_inner();
            match Error::check_status(response.status.as_ref()) {
                Ok(()) => break response,
                Err(err)
                    if err.server_code() == Some(RETRIABLE_SEARCH_CODE)
                        && attempt < SEARCH_ATTEMPTS =>
                {
                    warn!(collection, attempt, "search hit transient post-build state, retrying");
                }
                Err(err) => return Err(err),
            }
        };
        let results = response.results.ok_or_else(|| Error::Server {
            code: -1,
            reason: "search response carried no result data".to_string(),
        })?;
        SearchOutcome::from_wire(results)
    }
}

fn uniform_row_count(columns: &[FieldColumn]) -> Result<u32> {
    let mut rows: Option<usize> = None;
    for column in columns {
        let n = column.num_rows();
        match rows {
            None => rows = Some(n),
            Some(prev) if prev != n => {
                return Err(Error::Param(format!(
                    "column '{}' has {} rows, expected {}",
                    column.name, n, prev
                )))
            }
            Some(_) => {}
        }
    }
    match rows {
        Some(n) if n > 0 => Ok(n as u32),
        _ => Err(Error::Param("mutation needs at least one row".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_group_encodes_float_vectors() {
        let bytes = float_placeholder_group(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let group = wire::PlaceholderGroup::decode(bytes.as_slice()).unwrap();
        assert_eq!(group.placeholders.len(), 1);
        let value = &group.placeholders[0];
        assert_eq!(value.tag, "$0");
        assert_eq!(value.value_type, wire::PlaceholderType::FloatVector as i32);
        assert_eq!(value.values.len(), 2);
        assert_eq!(value.values[0], [1.0f32, 2.0].iter().flat_map(|f| f.to_le_bytes()).collect::<Vec<u8>>());
    }

    #[test]
    fn test_placeholder_group_rejects_ragged_vectors() {
        let err = float_placeholder_group(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, Error::Param(_)));
    }

    #[test]
    fn test_placeholder_group_rejects_empty() {
        assert!(float_placeholder_group(&[]).is_err());
    }

    #[test]
    fn test_uniform_row_count() {
        let columns = vec![
            FieldColumn::long("id", vec![1, 2, 3]),
            FieldColumn::float_vector("v", 2, vec![0.0; 6]),
        ];
        assert_eq!(uniform_row_count(&columns).unwrap(), 3);
    }

    #[test]
    fn test_mismatched_row_count_rejected() {
        let columns = vec![
            FieldColumn::long("id", vec![1, 2, 3]),
            FieldColumn::float_vector("v", 2, vec![0.0; 4]),
        ];
        assert!(uniform_row_count(&columns).is_err());
    }

    #[test]
    fn test_search_options_validation() {
        assert!(SearchOptions::new("vector", 10).validate().is_ok());
        assert!(SearchOptions::new("", 10).validate().is_err());
        assert!(SearchOptions::new("vector", 0).validate().is_err());
    }
}
