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

//! gRPC service façade.
//!
//! [`MilvusClient`] owns the channel, the auth interceptor and the
//! session-consistency timestamp tracker. Every call marshals its typed
//! arguments into a wire request, checks the response status, and
//! unmarshals the payload into typed results. All calls are plain
//! request/response; the only blocking behavior the SDK adds on top of the
//! transport are the wait loops in [`index`] and [`data`].

pub mod data;
pub mod index;

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tonic::codegen::InterceptedService;
use tonic::metadata::{Ascii, MetadataValue};
use tonic::service::Interceptor;
use tonic::transport::{Channel, Endpoint};
use tracing::{debug, info};

use crate::config::{ConnectConfig, Credentials};
use crate::error::{Error, Result};
use crate::proto::milvus as wire;
use crate::proto::milvus::milvus_service_client::MilvusServiceClient;
use crate::schema::{convert, CollectionSchema};
use crate::tracker::TimestampTracker;
use crate::types::ConsistencyLevel;

type Rpc = MilvusServiceClient<InterceptedService<Channel, AuthInterceptor>>;

/// Injects the `authorization` metadata key on every outgoing request.
#[derive(Debug, Clone)]
pub struct AuthInterceptor {
    authorization: Option<MetadataValue<Ascii>>,
}

impl AuthInterceptor {
    fn new(credentials: Option<&Credentials>) -> Result<Self> {
        let authorization = match credentials {
            None => None,
            Some(Credentials::Token(token)) => Some(encode_authorization(token)?),
            Some(Credentials::Basic { username, password }) => {
                Some(encode_authorization(&format!("{}:{}", username, password))?)
            }
        };
        Ok(Self { authorization })
    }
}

fn encode_authorization(raw: &str) -> Result<MetadataValue<Ascii>> {
    let encoded = BASE64.encode(raw.as_bytes());
    encoded
        .parse()
        .map_err(|_| Error::Param("credentials are not valid metadata".to_string()))
}

impl Interceptor for AuthInterceptor {
    fn call(&mut self, mut request: tonic::Request<()>) -> std::result::Result<tonic::Request<()>, tonic::Status> {
        if let Some(authorization) = &self.authorization {
            request
                .metadata_mut()
                .insert("authorization", authorization.clone());
        }
        Ok(request)
    }
}

/// Options for create-collection beyond the schema itself.
#[derive(Debug, Clone)]
pub struct CreateCollectionOptions {
    pub shards_num: i32,
    pub consistency_level: ConsistencyLevel,
    /// Partition count when a partition-key field is present; 0 lets the
    /// server choose.
    pub num_partitions: i64,
}

impl Default for CreateCollectionOptions {
    fn default() -> Self {
        Self {
            shards_num: 1,
            consistency_level: ConsistencyLevel::Bounded,
            num_partitions: 0,
        }
    }
}

/// Collection metadata returned by describe-collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionInfo {
    pub schema: CollectionSchema,
    pub collection_id: i64,
    pub shards_num: i32,
    pub consistency_level: ConsistencyLevel,
    pub created_utc_timestamp: u64,
    pub num_partitions: i64,
}

/// Connected Milvus client.
///
/// Cloning is cheap; clones share the channel and the timestamp tracker
/// through the underlying handles.
#[derive(Clone)]
pub struct MilvusClient {
    rpc: Rpc,
    db_name: String,
    tracker: Arc<TimestampTracker>,
}

impl MilvusClient {
    /// Establishes the channel and prepares authentication metadata.
    pub async fn connect(config: ConnectConfig) -> Result<Self> {
        let endpoint_uri = normalize_uri(&config.uri);
        debug!("connecting to milvus at {}", endpoint_uri);
        let endpoint = Endpoint::from_shared(endpoint_uri)?.timeout(config.rpc_timeout);
        let channel = endpoint.connect().await?;
        let interceptor = AuthInterceptor::new(config.credentials.as_ref())?;
        let rpc = MilvusServiceClient::with_interceptor(channel, interceptor);
        info!("🔌 Connected to milvus database '{}'", config.db_name);
        Ok(Self {
            rpc,
            db_name: config.db_name,
            tracker: Arc::new(TimestampTracker::new()),
        })
    }

    pub fn db_name(&self) -> &str {
        &self.db_name
    }

    /// Session-consistency timestamp state for this client.
    pub fn tracker(&self) -> &TimestampTracker {
        &self.tracker
    }

    /// Tonic clients need `&mut self`; cloning the generated client is a
    /// cheap channel handle copy.
    pub(crate) fn rpc(&self) -> Rpc {
        self.rpc.clone()
    }

    // ---- collection operations ----

    pub async fn create_collection(
        &self,
        schema: &CollectionSchema,
        options: CreateCollectionOptions,
    ) -> Result<()> {
        schema.validate()?;
        let wire_schema = convert::schema_to_wire(schema)?;
        let request = wire::CreateCollectionRequest {
            db_name: self.db_name.clone(),
            collection_name: schema.name.clone(),
            schema: prost::Message::encode_to_vec(&wire_schema),
            shards_num: options.shards_num,
            consistency_level: options.consistency_level.to_wire() as i32,
            num_partitions: options.num_partitions,
        };
        let status = self.rpc().create_collection(request).await?.into_inner();
        Error::check_status(Some(&status))?;
        info!("📦 Created collection '{}'", schema.name);
        Ok(())
    }

    pub async fn drop_collection(&self, collection: &str) -> Result<()> {
        require_name(collection, "collection")?;
        let request = wire::DropCollectionRequest {
            db_name: self.db_name.clone(),
            collection_name: collection.to_string(),
        };
        let status = self.rpc().drop_collection(request).await?.into_inner();
        Error::check_status(Some(&status))
    }

    pub async fn has_collection(&self, collection: &str) -> Result<bool> {
        require_name(collection, "collection")?;
        let request = wire::HasCollectionRequest {
            db_name: self.db_name.clone(),
            collection_name: collection.to_string(),
        };
        let response = self.rpc().has_collection(request).await?.into_inner();
        Error::check_status(response.status.as_ref())?;
        Ok(response.value)
    }

    pub async fn describe_collection(&self, collection: &str) -> Result<CollectionInfo> {
        require_name(collection, "collection")?;
        let request = wire::DescribeCollectionRequest {
            db_name: self.db_name.clone(),
            collection_name: collection.to_string(),
            collection_id: 0,
            time_stamp: 0,
        };
        let response = self.rpc().describe_collection(request).await?.into_inner();
        Error::check_status(response.status.as_ref())?;
        let schema = response
            .schema
            .map(convert::schema_from_wire)
            .transpose()?
            .ok_or_else(|| Error::Server {
                code: -1,
                reason: format!("describe of '{}' returned no schema", collection),
            })?;
        Ok(CollectionInfo {
            schema,
            collection_id: response.collection_id,
            shards_num: response.shards_num,
            consistency_level: ConsistencyLevel::from_wire(response.consistency_level),
            created_utc_timestamp: response.created_utc_timestamp,
            num_partitions: response.num_partitions,
        })
    }

    pub async fn list_collections(&self) -> Result<Vec<String>> {
        let request = wire::ShowCollectionsRequest {
            db_name: self.db_name.clone(),
        };
        let response = self.rpc().show_collections(request).await?.into_inner();
        Error::check_status(response.status.as_ref())?;
        Ok(response.collection_names)
    }

    pub async fn load_collection(&self, collection: &str, replica_number: i32) -> Result<()> {
        require_name(collection, "collection")?;
        let request = wire::LoadCollectionRequest {
            db_name: self.db_name.clone(),
            collection_name: collection.to_string(),
            replica_number,
        };
        let status = self.rpc().load_collection(request).await?.into_inner();
        Error::check_status(Some(&status))
    }

    pub async fn release_collection(&self, collection: &str) -> Result<()> {
        require_name(collection, "collection")?;
        let request = wire::ReleaseCollectionRequest {
            db_name: self.db_name.clone(),
            collection_name: collection.to_string(),
        };
        let status = self.rpc().release_collection(request).await?.into_inner();
        Error::check_status(Some(&status))
    }

    // ---- partition operations ----

    pub async fn create_partition(&self, collection: &str, partition: &str) -> Result<()> {
        require_name(collection, "collection")?;
        require_name(partition, "partition")?;
        let request = wire::CreatePartitionRequest {
            db_name: self.db_name.clone(),
            collection_name: collection.to_string(),
            partition_name: partition.to_string(),
        };
        let status = self.rpc().create_partition(request).await?.into_inner();
        Error::check_status(Some(&status))
    }

    pub async fn drop_partition(&self, collection: &str, partition: &str) -> Result<()> {
        require_name(collection, "collection")?;
        require_name(partition, "partition")?;
        let request = wire::DropPartitionRequest {
            db_name: self.db_name.clone(),
            collection_name: collection.to_string(),
            partition_name: partition.to_string(),
        };
        let status = self.rpc().drop_partition(request).await?.into_inner();
        Error::check_status(Some(&status))
    }

    pub async fn has_partition(&self, collection: &str, partition: &str) -> Result<bool> {
        require_name(collection, "collection")?;
        require_name(partition, "partition")?;
        let request = wire::HasPartitionRequest {
            db_name: self.db_name.clone(),
            collection_name: collection.to_string(),
            partition_name: partition.to_string(),
        };
        let response = self.rpc().has_partition(request).await?.into_inner();
        Error::check_status(response.status.as_ref())?;
        Ok(response.value)
    }

    pub async fn list_partitions(&self, collection: &str) -> Result<Vec<String>> {
        require_name(collection, "collection")?;
        let request = wire::ShowPartitionsRequest {
            db_name: self.db_name.clone(),
            collection_name: collection.to_string(),
        };
        let response = self.rpc().show_partitions(request).await?.into_inner();
        Error::check_status(response.status.as_ref())?;
        Ok(response.partition_names)
    }

    // ---- utility ----

    /// Allocates a fresh server-side hybrid timestamp.
    pub async fn alloc_timestamp(&self) -> Result<u64> {
        let response = self
            .rpc()
            .alloc_timestamp(wire::AllocTimestampRequest {})
            .await?
            .into_inner();
        Error::check_status(response.status.as_ref())?;
        Ok(response.timestamp)
    }

    pub async fn server_version(&self) -> Result<String> {
        let response = self
            .rpc()
            .get_version(wire::GetVersionRequest {})
            .await?
            .into_inner();
        Error::check_status(response.status.as_ref())?;
        Ok(response.version)
    }
}

fn normalize_uri(uri: &str) -> String {
    // tonic speaks http/https; accept the grpc:// spellings too.
    if let Some(rest) = uri.strip_prefix("grpcs://") {
        format!("https://{}", rest)
    } else if let Some(rest) = uri.strip_prefix("grpc://") {
        format!("http://{}", rest)
    } else {
        uri.to_string()
    }
}

pub(crate) fn require_name(value: &str, what: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Param(format!("{} name must not be empty", what)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_uri() {
        assert_eq!(normalize_uri("grpc://host:19530"), "http://host:19530");
        assert_eq!(normalize_uri("grpcs://host:443"), "https://host:443");
        assert_eq!(normalize_uri("http://host:19530"), "http://host:19530");
    }

    #[test]
    fn test_auth_interceptor_encodes_basic_credentials() {
        let interceptor = AuthInterceptor::new(Some(&Credentials::Basic {
            username: "root".to_string(),
            password: "Milvus".to_string(),
        }))
        .unwrap();
        let value = interceptor.authorization.unwrap();
        assert_eq!(value.to_str().unwrap(), BASE64.encode("root:Milvus"));
    }

    #[test]
    fn test_auth_interceptor_without_credentials() {
        let interceptor = AuthInterceptor::new(None).unwrap();
        assert!(interceptor.authorization.is_none());
    }

    #[test]
    fn test_client_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<MilvusClient>();
    }

    #[test]
    fn test_shared_tracker_visible_across_handles() {
        let tracker = Arc::new(TimestampTracker::new());
        let handle = Arc::clone(&tracker);
        handle.update("docs", 99);
        assert_eq!(tracker.get("docs"), Some(99));
    }

    #[test]
    fn test_require_name() {
        assert!(require_name("ok", "collection").is_ok());
        assert!(require_name("", "collection").is_err());
        assert!(require_name("  ", "partition").is_err());
    }
}
