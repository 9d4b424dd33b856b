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

//! Wait-loop behavior against scripted server state sequences.

use std::collections::{BTreeMap, VecDeque};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use milvus_client::client::index::{
    wait_for_flushed, wait_for_index_built, FlushStateSource, IndexStateSource,
};
use milvus_client::error::{Error, Result};
use milvus_client::index::IndexInfo;
use milvus_client::types::IndexState;

fn info(state: IndexState, fail_reason: &str) -> IndexInfo {
    IndexInfo {
        index_name: "vector_idx".to_string(),
        field_name: "vector".to_string(),
        params: BTreeMap::new(),
        indexed_rows: 0,
        total_rows: 1000,
        pending_rows: 0,
        state,
        fail_reason: fail_reason.to_string(),
    }
}

/// Replays a fixed sequence of describe-index answers; the last answer
/// repeats once the script runs out.
struct ScriptedIndexSource {
    script: Mutex<VecDeque<Vec<IndexInfo>>>,
    probes: AtomicU32,
}

impl ScriptedIndexSource {
    fn new(script: Vec<Vec<IndexInfo>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            probes: AtomicU32::new(0),
        }
    }

    fn probe_count(&self) -> u32 {
        self.probes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IndexStateSource for ScriptedIndexSource {
    async fn server_timestamp(&self) -> Result<u64> {
        Ok(443)
    }

    async fn index_states(
        &self,
        _collection: &str,
        _field_name: &str,
        _index_name: &str,
        timestamp: u64,
    ) -> Result<Vec<IndexInfo>> {
        assert_eq!(timestamp, 443, "every probe must reuse the snapshot timestamp");
        self.probes.fetch_add(1, Ordering::SeqCst);
        let mut script = self.script.lock().unwrap();
        if script.len() > 1 {
            Ok(script.pop_front().unwrap_or_default())
        } else {
            Ok(script.front().cloned().unwrap_or_default())
        }
    }
}

struct ScriptedFlushSource {
    script: Mutex<VecDeque<bool>>,
}

#[async_trait]
impl FlushStateSource for ScriptedFlushSource {
    async fn flush_state(&self, _collection: &str, _segment_ids: &[i64], _flush_ts: u64) -> Result<bool> {
        let mut script = self.script.lock().unwrap();
        Ok(script.pop_front().unwrap_or(true))
    }
}

#[tokio::test(start_paused = true)]
async fn index_wait_succeeds_after_in_progress_polls() {
    let source = ScriptedIndexSource::new(vec![
        vec![info(IndexState::InProgress, "")],
        vec![info(IndexState::InProgress, "")],
        vec![info(IndexState::Finished, "")],
    ]);
    let cancel = CancellationToken::new();
    let started = tokio::time::Instant::now();
    wait_for_index_built(&source, "docs", "vector", "vector_idx", None, &cancel)
        .await
        .unwrap();
    assert_eq!(source.probe_count(), 3);
    // Two interval sleeps between the three probes.
    assert_eq!(started.elapsed(), Duration::from_millis(1000));
}

#[tokio::test(start_paused = true)]
async fn index_wait_fails_fast_on_failed_state() {
    let source = ScriptedIndexSource::new(vec![vec![info(IndexState::Failed, "out of memory")]]);
    let cancel = CancellationToken::new();
    let err = wait_for_index_built(&source, "docs", "vector", "vector_idx", None, &cancel)
        .await
        .unwrap_err();
    match err {
        Error::IndexBuild { reason } => assert_eq!(reason, "out of memory"),
        other => panic!("expected IndexBuild, got {other:?}"),
    }
    // Failed is terminal: exactly one probe, no retry.
    assert_eq!(source.probe_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn index_wait_times_out() {
    let source = ScriptedIndexSource::new(vec![vec![info(IndexState::InProgress, "")]]);
    let cancel = CancellationToken::new();
    let err = wait_for_index_built(
        &source,
        "docs",
        "vector",
        "vector_idx",
        Some(Duration::from_secs(2)),
        &cancel,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, Error::Timeout { .. }));
}

#[tokio::test(start_paused = true)]
async fn index_wait_rejects_missing_index() {
    let source = ScriptedIndexSource::new(vec![vec![]]);
    let cancel = CancellationToken::new();
    let err = wait_for_index_built(&source, "docs", "vector", "vector_idx", None, &cancel)
        .await
        .unwrap_err();
    match err {
        Error::IndexNotFound { collection, index } => {
            assert_eq!(collection, "docs");
            assert_eq!(index, "vector_idx");
        }
        other => panic!("expected IndexNotFound, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn index_wait_cancellation_is_silent() {
    let source = ScriptedIndexSource::new(vec![vec![info(IndexState::InProgress, "")]]);
    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        cancel_clone.cancel();
    });
    wait_for_index_built(&source, "docs", "vector", "vector_idx", None, &cancel)
        .await
        .unwrap();
}

#[tokio::test(start_paused = true)]
async fn index_wait_requires_all_indexes_finished() {
    let source = ScriptedIndexSource::new(vec![
        vec![info(IndexState::Finished, ""), info(IndexState::InProgress, "")],
        vec![info(IndexState::Finished, ""), info(IndexState::Finished, "")],
    ]);
    let cancel = CancellationToken::new();
    wait_for_index_built(&source, "docs", "vector", "", None, &cancel)
        .await
        .unwrap();
    assert_eq!(source.probe_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn flush_wait_polls_until_flushed() {
    let source = ScriptedFlushSource {
        script: Mutex::new(vec![false, false, true].into()),
    };
    let cancel = CancellationToken::new();
    let started = tokio::time::Instant::now();
    wait_for_flushed(&source, "docs", &[1, 2, 3], 443, &cancel)
        .await
        .unwrap();
    assert_eq!(started.elapsed(), Duration::from_millis(1000));
}

#[tokio::test(start_paused = true)]
async fn flush_wait_cancellation_is_silent() {
    let source = ScriptedFlushSource {
        script: Mutex::new(vec![false; 64].into()),
    };
    let cancel = CancellationToken::new();
    cancel.cancel();
    wait_for_flushed(&source, "docs", &[1], 443, &cancel)
        .await
        .unwrap();
}
