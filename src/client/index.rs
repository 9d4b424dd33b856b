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

//! Index lifecycle: create/describe/drop plus the build wait loop.
//!
//! The wait loops are written against narrow trait seams rather than the
//! client directly so the polling logic is testable with scripted state
//! sequences.

use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::index::{IndexInfo, IndexParams};
use crate::poll::{poll_until, PollConfig, PollOutcome};
use crate::proto::milvus as wire;
use crate::types::IndexState;

use super::{require_name, MilvusClient};

/// Server-side view needed by the index build wait.
#[async_trait]
pub trait IndexStateSource: Sync {
    /// A fresh server timestamp, snapshotted once before polling so every
    /// probe sees the same segment horizon.
    async fn server_timestamp(&self) -> Result<u64>;

    /// Index descriptions matching the field and optional index name.
    async fn index_states(
        &self,
        collection: &str,
        field_name: &str,
        index_name: &str,
        timestamp: u64,
    ) -> Result<Vec<IndexInfo>>;
}

/// Server-side view needed by the flush wait.
#[async_trait]
pub trait FlushStateSource: Sync {
    async fn flush_state(
        &self,
        collection: &str,
        segment_ids: &[i64],
        flush_ts: u64,
    ) -> Result<bool>;
}

/// Polls describe-index until every matching index reaches `Finished`.
///
/// A `Failed` state aborts immediately with the server's reason; an empty
/// match set is an error, not completion. Cancellation returns `Ok` without
/// touching the build.
pub async fn wait_for_index_built<S: IndexStateSource>(
    source: &S,
    collection: &str,
    field_name: &str,
    index_name: &str,
    timeout: Option<Duration>,
    cancel: &CancellationToken,
) -> Result<()> {
    let timestamp = source.server_timestamp().await?;
    let mut config = PollConfig::new(format!(
        "index build on '{}.{}'",
        collection, field_name
    ));
    if let Some(timeout) = timeout {
        config = config.with_timeout(timeout);
    }
    let outcome = poll_until(&config, cancel, || async move {
        let states = source
            .index_states(collection, field_name, index_name, timestamp)
            .await?;
        if states.is_empty() {
            return Err(Error::IndexNotFound {
                collection: collection.to_string(),
                index: if index_name.is_empty() {
                    field_name.to_string()
                } else {
                    index_name.to_string()
                },
            });
        }
        if let Some(failed) = states.iter().find(|info| info.state == IndexState::Failed) {
            return Err(Error::IndexBuild {
                reason: failed.fail_reason.clone(),
            });
        }
        if states.iter().all(|info| info.state == IndexState::Finished) {
            Ok(Some(()))
        } else {
            debug!(
                collection,
                field_name,
                pending = states.iter().map(|s| s.pending_rows).sum::<i64>(),
                "index build in progress"
            );
            Ok(None)
        }
    })
    .await?;
    if let PollOutcome::Ready(()) = outcome {
        info!("🔨 Index build complete on '{}.{}'", collection, field_name);
    }
    Ok(())
}

/// Polls get-flush-state until the sealed segments are persisted.
///
/// Unbounded on purpose: flush durations scale with segment volume and a
/// caller that wants a deadline wraps the future itself.
pub async fn wait_for_flushed<S: FlushStateSource>(
    source: &S,
    collection: &str,
    segment_ids: &[i64],
    flush_ts: u64,
    cancel: &CancellationToken,
) -> Result<()> {
    let config = PollConfig::new(format!("flush of '{}'", collection));
    let outcome = poll_until(&config, cancel, || async move {
        let flushed = source.flush_state(collection, segment_ids, flush_ts).await?;
        Ok(if flushed { Some(()) } else { None })
    })
    .await?;
    if let PollOutcome::Ready(()) = outcome {
        debug!(collection, "flush complete");
    }
    Ok(())
}

#[async_trait]
impl IndexStateSource for MilvusClient {
    async fn server_timestamp(&self) -> Result<u64> {
        self.alloc_timestamp().await
    }

    async fn index_states(
        &self,
        collection: &str,
        field_name: &str,
        index_name: &str,
        timestamp: u64,
    ) -> Result<Vec<IndexInfo>> {
        let request = wire::DescribeIndexRequest {
            db_name: self.db_name().to_string(),
            collection_name: collection.to_string(),
            field_name: field_name.to_string(),
            index_name: index_name.to_string(),
            timestamp,
        };
        let response = self.rpc().describe_index(request).await?.into_inner();
        Error::check_status(response.status.as_ref())?;
        Ok(response
            .index_descriptions
            .into_iter()
            .map(IndexInfo::from_wire)
            .collect())
    }
}

#[async_trait]
impl FlushStateSource for MilvusClient {
    async fn flush_state(
        &self,
        collection: &str,
        segment_ids: &[i64],
        flush_ts: u64,
    ) -> Result<bool> {
        let request = wire::GetFlushStateRequest {
            segment_ids: segment_ids.to_vec(),
            flush_ts,
            db_name: self.db_name().to_string(),
            collection_name: collection.to_string(),
        };
        let response = self.rpc().get_flush_state(request).await?.into_inner();
        Error::check_status(response.status.as_ref())?;
        Ok(response.flushed)
    }
}

impl MilvusClient {
    pub async fn create_index(&self, collection: &str, params: &IndexParams) -> Result<()> {
        require_name(collection, "collection")?;
        params.validate()?;
        let request = wire::CreateIndexRequest {
            db_name: self.db_name().to_string(),
            collection_name: collection.to_string(),
            field_name: params.field_name.clone(),
            extra_params: params.to_wire_params(),
            index_name: params.index_name.clone().unwrap_or_default(),
        };
        let status = self.rpc().create_index(request).await?.into_inner();
        Error::check_status(Some(&status))?;
        info!(
            "🔨 Created index '{}' on '{}.{}'",
            params.effective_name(),
            collection,
            params.field_name
        );
        Ok(())
    }

    /// Describes indexes on a field. Empty `field_name`/`index_name` match
    /// all indexes of the collection.
    pub async fn describe_index(
        &self,
        collection: &str,
        field_name: &str,
        index_name: &str,
    ) -> Result<Vec<IndexInfo>> {
        require_name(collection, "collection")?;
        self.index_states(collection, field_name, index_name, 0).await
    }

    pub async fn drop_index(
        &self,
        collection: &str,
        field_name: &str,
        index_name: &str,
    ) -> Result<()> {
        require_name(collection, "collection")?;
        let request = wire::DropIndexRequest {
            db_name: self.db_name().to_string(),
            collection_name: collection.to_string(),
            field_name: field_name.to_string(),
            index_name: index_name.to_string(),
        };
        let status = self.rpc().drop_index(request).await?.into_inner();
        Error::check_status(Some(&status))
    }

    /// Blocks until the named index finishes building.
    pub async fn wait_for_index_built(
        &self,
        collection: &str,
        field_name: &str,
        index_name: &str,
        timeout: Option<Duration>,
        cancel: &CancellationToken,
    ) -> Result<()> {
        require_name(collection, "collection")?;
        require_name(field_name, "field")?;
        wait_for_index_built(self, collection, field_name, index_name, timeout, cancel).await
    }
}
