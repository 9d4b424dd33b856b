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

//! # Milvus Client
//!
//! A typed async client SDK for the Milvus vector database.
//!
//! - **Typed schemas**: field/collection/function descriptors with
//!   client-side validation and lossless wire conversion
//! - **gRPC façade**: collection, partition, index and data-plane RPCs
//!   over tonic with automatic status checking
//! - **Session consistency**: per-client write-timestamp tracking feeding
//!   guarantee timestamps into reads
//! - **Build waits**: cancellable sleep-poll loops for index builds and
//!   flushes
//! - **Bulk import**: REST client for server-side import jobs
//!
//! ```no_run
//! use milvus_client::client::MilvusClient;
//! use milvus_client::config::ConnectConfig;
//!
//! # async fn example() -> milvus_client::error::Result<()> {
//! let config = ConnectConfig::builder("http://localhost:19530").build()?;
//! let client = MilvusClient::connect(config).await?;
//! let collections = client.list_collections().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod consistency;
pub mod data;
pub mod error;
pub mod index;
pub mod poll;
pub mod proto;
pub mod restful;
pub mod schema;
pub mod tracker;
pub mod types;

pub use client::{CollectionInfo, CreateCollectionOptions, MilvusClient};
pub use config::ConnectConfig;
pub use error::{Error, Result};
pub use index::{IndexInfo, IndexParams};
pub use schema::{CollectionSchema, FieldSchema, FieldValue, FunctionSchema};
pub use types::{ConsistencyLevel, DataType, IndexState, IndexType, MetricType};
