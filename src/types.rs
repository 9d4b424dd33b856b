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

//! Client-side enums and their wire conversions.
//!
//! The wire format carries these as raw `i32` values. Decoding never fails:
//! unknown values map to the `None`/`Unknown` sentinels so a newer server
//! cannot break an older client on the read path.

use serde::{Deserialize, Serialize};

use crate::proto::milvus as wire;

/// Field data type. Matches the wire enum values one to one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum DataType {
    #[default]
    None,
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Float,
    Double,
    String,
    VarChar,
    Array,
    Json,
    BinaryVector,
    FloatVector,
    Float16Vector,
    BFloat16Vector,
    SparseFloatVector,
}

impl DataType {
    pub fn is_vector(&self) -> bool {
        matches!(
            self,
            DataType::BinaryVector
                | DataType::FloatVector
                | DataType::Float16Vector
                | DataType::BFloat16Vector
                | DataType::SparseFloatVector
        )
    }

    /// Vector types that carry an explicit "dim" type parameter. Sparse
    /// vectors have no fixed dimension.
    pub fn requires_dim(&self) -> bool {
        self.is_vector() && *self != DataType::SparseFloatVector
    }

    pub(crate) fn to_wire(self) -> wire::DataType {
        match self {
            DataType::None => wire::DataType::None,
            DataType::Bool => wire::DataType::Bool,
            DataType::Int8 => wire::DataType::Int8,
            DataType::Int16 => wire::DataType::Int16,
            DataType::Int32 => wire::DataType::Int32,
            DataType::Int64 => wire::DataType::Int64,
            DataType::Float => wire::DataType::Float,
            DataType::Double => wire::DataType::Double,
            DataType::String => wire::DataType::String,
            DataType::VarChar => wire::DataType::VarChar,
            DataType::Array => wire::DataType::Array,
            DataType::Json => wire::DataType::Json,
            DataType::BinaryVector => wire::DataType::BinaryVector,
            DataType::FloatVector => wire::DataType::FloatVector,
            DataType::Float16Vector => wire::DataType::Float16Vector,
            DataType::BFloat16Vector => wire::DataType::Bfloat16Vector,
            DataType::SparseFloatVector => wire::DataType::SparseFloatVector,
        }
    }

    /// Unknown wire values decode to `DataType::None` rather than failing.
    pub(crate) fn from_wire(value: i32) -> DataType {
        match wire::DataType::try_from(value) {
            Ok(wire::DataType::None) | Err(_) => DataType::None,
            Ok(wire::DataType::Bool) => DataType::Bool,
            Ok(wire::DataType::Int8) => DataType::Int8,
            Ok(wire::DataType::Int16) => DataType::Int16,
            Ok(wire::DataType::Int32) => DataType::Int32,
            Ok(wire::DataType::Int64) => DataType::Int64,
            Ok(wire::DataType::Float) => DataType::Float,
            Ok(wire::DataType::Double) => DataType::Double,
            Ok(wire::DataType::String) => DataType::String,
            Ok(wire::DataType::VarChar) => DataType::VarChar,
            Ok(wire::DataType::Array) => DataType::Array,
            Ok(wire::DataType::Json) => DataType::Json,
            Ok(wire::DataType::BinaryVector) => DataType::BinaryVector,
            Ok(wire::DataType::FloatVector) => DataType::FloatVector,
            Ok(wire::DataType::Float16Vector) => DataType::Float16Vector,
            Ok(wire::DataType::Bfloat16Vector) => DataType::BFloat16Vector,
            Ok(wire::DataType::SparseFloatVector) => DataType::SparseFloatVector,
        }
    }
}

/// Read-freshness contract for queries and searches.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum ConsistencyLevel {
    Strong,
    Session,
    #[default]
    Bounded,
    Eventually,
}

impl ConsistencyLevel {
    pub(crate) fn to_wire(self) -> wire::ConsistencyLevel {
        match self {
            ConsistencyLevel::Strong => wire::ConsistencyLevel::Strong,
            ConsistencyLevel::Session => wire::ConsistencyLevel::Session,
            ConsistencyLevel::Bounded => wire::ConsistencyLevel::Bounded,
            ConsistencyLevel::Eventually => wire::ConsistencyLevel::Eventually,
        }
    }

    pub(crate) fn from_wire(value: i32) -> ConsistencyLevel {
        match wire::ConsistencyLevel::try_from(value) {
            Ok(wire::ConsistencyLevel::Strong) => ConsistencyLevel::Strong,
            Ok(wire::ConsistencyLevel::Session) => ConsistencyLevel::Session,
            Ok(wire::ConsistencyLevel::Eventually) => ConsistencyLevel::Eventually,
            Ok(wire::ConsistencyLevel::Bounded) | Err(_) => ConsistencyLevel::Bounded,
        }
    }
}

/// Server-side lifecycle stage of an index build.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum IndexState {
    #[default]
    None,
    Unissued,
    InProgress,
    Finished,
    Failed,
    Retry,
}

impl IndexState {
    /// Finished and Failed are the terminal states; Retry is not, the
    /// server will reissue the build on its own.
    pub fn is_terminal(&self) -> bool {
        matches!(self, IndexState::Finished | IndexState::Failed)
    }

    pub(crate) fn from_wire(value: i32) -> IndexState {
        match wire::IndexState::try_from(value) {
            Ok(wire::IndexState::Unissued) => IndexState::Unissued,
            Ok(wire::IndexState::InProgress) => IndexState::InProgress,
            Ok(wire::IndexState::Finished) => IndexState::Finished,
            Ok(wire::IndexState::Failed) => IndexState::Failed,
            Ok(wire::IndexState::Retry) => IndexState::Retry,
            Ok(wire::IndexState::IndexStateNone) | Err(_) => IndexState::None,
        }
    }
}

/// Index algorithm. The metric/parameter requirements depend on the variant;
/// the server validates the combination.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum IndexType {
    Flat,
    IvfFlat,
    IvfSq8,
    IvfPq,
    Hnsw,
    HnswSq,
    HnswPq,
    HnswPrq,
    DiskAnn,
    AutoIndex,
    ScaNn,
    GpuIvfFlat,
    GpuIvfPq,
    GpuBruteForce,
    GpuCagra,
    BinFlat,
    BinIvfFlat,
    SparseInvertedIndex,
    SparseWand,
    // Scalar index kinds
    Trie,
    StlSort,
    Inverted,
    Bitmap,
}

impl IndexType {
    /// Wire name, sent in the "index_type" extra parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            IndexType::Flat => "FLAT",
            IndexType::IvfFlat => "IVF_FLAT",
            IndexType::IvfSq8 => "IVF_SQ8",
            IndexType::IvfPq => "IVF_PQ",
            IndexType::Hnsw => "HNSW",
            IndexType::HnswSq => "HNSW_SQ",
            IndexType::HnswPq => "HNSW_PQ",
            IndexType::HnswPrq => "HNSW_PRQ",
            IndexType::DiskAnn => "DISKANN",
            IndexType::AutoIndex => "AUTOINDEX",
            IndexType::ScaNn => "SCANN",
            IndexType::GpuIvfFlat => "GPU_IVF_FLAT",
            IndexType::GpuIvfPq => "GPU_IVF_PQ",
            IndexType::GpuBruteForce => "GPU_BRUTE_FORCE",
            IndexType::GpuCagra => "GPU_CAGRA",
            IndexType::BinFlat => "BIN_FLAT",
            IndexType::BinIvfFlat => "BIN_IVF_FLAT",
            IndexType::SparseInvertedIndex => "SPARSE_INVERTED_INDEX",
            IndexType::SparseWand => "SPARSE_WAND",
            IndexType::Trie => "Trie",
            IndexType::StlSort => "STL_SORT",
            IndexType::Inverted => "INVERTED",
            IndexType::Bitmap => "BITMAP",
        }
    }
}

/// Distance metric. Valid choices depend on the indexed field type
/// (float vs. binary vs. sparse vectors).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MetricType {
    L2,
    Ip,
    Cosine,
    Hamming,
    Jaccard,
    Bm25,
}

impl MetricType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricType::L2 => "L2",
            MetricType::Ip => "IP",
            MetricType::Cosine => "COSINE",
            MetricType::Hamming => "HAMMING",
            MetricType::Jaccard => "JACCARD",
            MetricType::Bm25 => "BM25",
        }
    }
}

/// Server-side function attached to a collection schema (e.g. BM25 over a
/// VarChar field producing a sparse vector output).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum FunctionType {
    #[default]
    Unknown,
    Bm25,
    TextEmbedding,
    Rerank,
}

impl FunctionType {
    pub(crate) fn to_wire(self) -> wire::FunctionType {
        match self {
            FunctionType::Unknown => wire::FunctionType::Unknown,
            FunctionType::Bm25 => wire::FunctionType::Bm25,
            FunctionType::TextEmbedding => wire::FunctionType::TextEmbedding,
            FunctionType::Rerank => wire::FunctionType::Rerank,
        }
    }

    pub(crate) fn from_wire(value: i32) -> FunctionType {
        match wire::FunctionType::try_from(value) {
            Ok(wire::FunctionType::Bm25) => FunctionType::Bm25,
            Ok(wire::FunctionType::TextEmbedding) => FunctionType::TextEmbedding,
            Ok(wire::FunctionType::Rerank) => FunctionType::Rerank,
            Ok(wire::FunctionType::Unknown) | Err(_) => FunctionType::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_wire_round_trip() {
        let all = [
            DataType::None,
            DataType::Bool,
            DataType::Int8,
            DataType::Int16,
            DataType::Int32,
            DataType::Int64,
            DataType::Float,
            DataType::Double,
            DataType::String,
            DataType::VarChar,
            DataType::Array,
            DataType::Json,
            DataType::BinaryVector,
            DataType::FloatVector,
            DataType::Float16Vector,
            DataType::BFloat16Vector,
            DataType::SparseFloatVector,
        ];
        for dt in all {
            assert_eq!(DataType::from_wire(dt.to_wire() as i32), dt);
        }
    }

    #[test]
    fn test_unknown_data_type_maps_to_none() {
        assert_eq!(DataType::from_wire(9999), DataType::None);
    }

    #[test]
    fn test_index_state_terminality() {
        assert!(IndexState::Finished.is_terminal());
        assert!(IndexState::Failed.is_terminal());
        assert!(!IndexState::None.is_terminal());
        assert!(!IndexState::Unissued.is_terminal());
        assert!(!IndexState::InProgress.is_terminal());
        assert!(!IndexState::Retry.is_terminal());
    }

    #[test]
    fn test_vector_dim_requirements() {
        assert!(DataType::FloatVector.requires_dim());
        assert!(DataType::BinaryVector.requires_dim());
        assert!(!DataType::SparseFloatVector.requires_dim());
        assert!(!DataType::VarChar.requires_dim());
    }
}
