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

//! Column-oriented entity data for insert/upsert and query/search results.
//!
//! Entities travel column-wise on the wire: one `FieldData` per field, all
//! rows of that field concatenated. Vector columns are flattened row-major.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result, SchemaError};
use crate::proto::milvus as wire;
use crate::types::DataType;

/// Values of one column. `Int` backs Int8/Int16/Int32 declarations; the
/// wire carries all three as 32-bit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ColumnData {
    Bool(Vec<bool>),
    Int(Vec<i32>),
    Long(Vec<i64>),
    Float(Vec<f32>),
    Double(Vec<f64>),
    String(Vec<String>),
    /// Raw JSON documents, one per row.
    Json(Vec<Vec<u8>>),
    /// Row-major flattened float vectors.
    FloatVector { dim: i64, data: Vec<f32> },
    /// Packed bit vectors, dim/8 bytes per row.
    BinaryVector { dim: i64, data: Vec<u8> },
    Float16Vector { dim: i64, data: Vec<u8> },
    BFloat16Vector { dim: i64, data: Vec<u8> },
    /// One serialized (index, value) blob per row.
    SparseFloatVector { rows: Vec<Vec<u8>> },
}

/// One named column plus its declared type and optional validity bitmap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldColumn {
    pub name: String,
    pub data_type: DataType,
    pub data: ColumnData,
    /// Per-row validity for nullable fields; empty means all rows valid.
    pub valid_data: Vec<bool>,
}

impl FieldColumn {
    pub fn new(name: impl Into<String>, data_type: DataType, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data_type,
            data,
            valid_data: Vec::new(),
        }
    }

    pub fn long(name: impl Into<String>, values: Vec<i64>) -> Self {
        Self::new(name, DataType::Int64, ColumnData::Long(values))
    }

    pub fn int(name: impl Into<String>, values: Vec<i32>) -> Self {
        Self::new(name, DataType::Int32, ColumnData::Int(values))
    }

    pub fn bool(name: impl Into<String>, values: Vec<bool>) -> Self {
        Self::new(name, DataType::Bool, ColumnData::Bool(values))
    }

    pub fn float(name: impl Into<String>, values: Vec<f32>) -> Self {
        Self::new(name, DataType::Float, ColumnData::Float(values))
    }

    pub fn double(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self::new(name, DataType::Double, ColumnData::Double(values))
    }

    pub fn varchar(name: impl Into<String>, values: Vec<String>) -> Self {
        Self::new(name, DataType::VarChar, ColumnData::String(values))
    }

    pub fn float_vector(name: impl Into<String>, dim: i64, data: Vec<f32>) -> Self {
        Self::new(
            name,
            DataType::FloatVector,
            ColumnData::FloatVector { dim, data },
        )
    }

    pub fn binary_vector(name: impl Into<String>, dim: i64, data: Vec<u8>) -> Self {
        Self::new(
            name,
            DataType::BinaryVector,
            ColumnData::BinaryVector { dim, data },
        )
    }

    pub fn num_rows(&self) -> usize {
        match &self.data {
            ColumnData::Bool(v) => v.len(),
            ColumnData::Int(v) => v.len(),
            ColumnData::Long(v) => v.len(),
            ColumnData::Float(v) => v.len(),
            ColumnData::Double(v) => v.len(),
            ColumnData::String(v) => v.len(),
            ColumnData::Json(v) => v.len(),
            ColumnData::FloatVector { dim, data } => {
                if *dim > 0 {
                    data.len() / *dim as usize
                } else {
                    0
                }
            }
            ColumnData::BinaryVector { dim, data } => {
                if *dim > 0 {
                    data.len() / (*dim as usize / 8).max(1)
                } else {
                    0
                }
            }
            ColumnData::Float16Vector { dim, data } => {
                if *dim > 0 {
                    data.len() / (*dim as usize * 2)
                } else {
                    0
                }
            }
            ColumnData::BFloat16Vector { dim, data } => {
                if *dim > 0 {
                    data.len() / (*dim as usize * 2)
                } else {
                    0
                }
            }
            ColumnData::SparseFloatVector { rows } => rows.len(),
        }
    }

    pub(crate) fn to_wire(&self) -> wire::FieldData {
        use wire::{field_data::Field, scalar_field, vector_field};
        let field = match &self.data {
            ColumnData::Bool(v) => Field::Scalars(wire::ScalarField {
                data: Some(scalar_field::Data::BoolData(wire::BoolArray {
                    data: v.clone(),
                })),
            }),
            ColumnData::Int(v) => Field::Scalars(wire::ScalarField {
                data: Some(scalar_field::Data::IntData(wire::IntArray {
                    data: v.clone(),
                })),
            }),
            ColumnData::Long(v) => Field::Scalars(wire::ScalarField {
                data: Some(scalar_field::Data::LongData(wire::LongArray {
                    data: v.clone(),
                })),
            }),
            ColumnData::Float(v) => Field::Scalars(wire::ScalarField {
                data: Some(scalar_field::Data::FloatData(wire::FloatArray {
                    data: v.clone(),
                })),
            }),
            ColumnData::Double(v) => Field::Scalars(wire::ScalarField {
                data: Some(scalar_field::Data::DoubleData(wire::DoubleArray {
                    data: v.clone(),
                })),
            }),
            ColumnData::String(v) => Field::Scalars(wire::ScalarField {
                data: Some(scalar_field::Data::StringData(wire::StringArray {
                    data: v.clone(),
                })),
            }),
            ColumnData::Json(v) => Field::Scalars(wire::ScalarField {
                data: Some(scalar_field::Data::JsonData(wire::JsonArray {
                    data: v.clone(),
                })),
            }),
            ColumnData::FloatVector { dim, data } => Field::Vectors(wire::VectorField {
                dim: *dim,
                data: Some(vector_field::Data::FloatVector(wire::FloatArray {
                    data: data.clone(),
                })),
            }),
            ColumnData::BinaryVector { dim, data } => Field::Vectors(wire::VectorField {
                dim: *dim,
                data: Some(vector_field::Data::BinaryVector(data.clone())),
            }),
            ColumnData::Float16Vector { dim, data } => Field::Vectors(wire::VectorField {
                dim: *dim,
                data: Some(vector_field::Data::Float16Vector(data.clone())),
            }),
            ColumnData::BFloat16Vector { dim, data } => Field::Vectors(wire::VectorField {
                dim: *dim,
                data: Some(vector_field::Data::Bfloat16Vector(data.clone())),
            }),
            ColumnData::SparseFloatVector { rows } => Field::Vectors(wire::VectorField {
                dim: 0,
                data: Some(vector_field::Data::SparseFloatVector(
                    wire::SparseFloatArray {
                        contents: rows.clone(),
                        dim: 0,
                    },
                )),
            }),
        };
        wire::FieldData {
            data_type: self.data_type.to_wire() as i32,
            field_name: self.name.clone(),
            field_id: 0,
            is_dynamic: false,
            valid_data: self.valid_data.clone(),
            field: Some(field),
        }
    }

    pub(crate) fn from_wire(field: wire::FieldData) -> Result<Self> {
        use wire::{field_data::Field, scalar_field, vector_field};
        let data = match field.field {
            Some(Field::Scalars(scalars)) => match scalars.data {
                Some(scalar_field::Data::BoolData(v)) => ColumnData::Bool(v.data),
                Some(scalar_field::Data::IntData(v)) => ColumnData::Int(v.data),
                Some(scalar_field::Data::LongData(v)) => ColumnData::Long(v.data),
                Some(scalar_field::Data::FloatData(v)) => ColumnData::Float(v.data),
                Some(scalar_field::Data::DoubleData(v)) => ColumnData::Double(v.data),
                Some(scalar_field::Data::StringData(v)) => ColumnData::String(v.data),
                Some(scalar_field::Data::JsonData(v)) => ColumnData::Json(v.data),
                _ => {
                    return Err(SchemaError::Unsupported(format!(
                        "scalar payload on field '{}' is not representable as a column",
                        field.field_name
                    ))
                    .into())
                }
            },
            Some(Field::Vectors(vectors)) => {
                let dim = vectors.dim;
                match vectors.data {
                    Some(vector_field::Data::FloatVector(v)) => {
                        ColumnData::FloatVector { dim, data: v.data }
                    }
                    Some(vector_field::Data::BinaryVector(data)) => {
                        ColumnData::BinaryVector { dim, data }
                    }
                    Some(vector_field::Data::Float16Vector(data)) => {
                        ColumnData::Float16Vector { dim, data }
                    }
                    Some(vector_field::Data::Bfloat16Vector(data)) => {
                        ColumnData::BFloat16Vector { dim, data }
                    }
                    Some(vector_field::Data::SparseFloatVector(v)) => {
                        ColumnData::SparseFloatVector { rows: v.contents }
                    }
                    None => {
                        return Err(SchemaError::Unsupported(format!(
                            "empty vector payload on field '{}'",
                            field.field_name
                        ))
                        .into())
                    }
                }
            }
            None => {
                return Err(SchemaError::Unsupported(format!(
                    "field '{}' carried no payload",
                    field.field_name
                ))
                .into())
            }
        };
        Ok(Self {
            name: field.field_name,
            data_type: DataType::from_wire(field.data_type),
            data,
            valid_data: field.valid_data,
        })
    }
}

/// Primary keys of matched/affected rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum IdList {
    Int(Vec<i64>),
    Str(Vec<String>),
}

impl IdList {
    pub fn len(&self) -> usize {
        match self {
            IdList::Int(v) => v.len(),
            IdList::Str(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn from_wire(ids: Option<wire::Ids>) -> IdList {
        match ids.and_then(|i| i.id_field) {
            Some(wire::ids::IdField::IntId(v)) => IdList::Int(v.data),
            Some(wire::ids::IdField::StrId(v)) => IdList::Str(v.data),
            None => IdList::Int(Vec::new()),
        }
    }

    fn slice(&self, start: usize, end: usize) -> IdList {
        match self {
            IdList::Int(v) => IdList::Int(v[start..end].to_vec()),
            IdList::Str(v) => IdList::Str(v[start..end].to_vec()),
        }
    }
}

/// Matches for a single query vector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchHits {
    pub ids: IdList,
    pub scores: Vec<f32>,
}

/// Full search response: per-query hits, plus the requested output columns
/// flattened in hit order across all queries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchOutcome {
    pub hits: Vec<SearchHits>,
    pub fields: Vec<FieldColumn>,
}

impl SearchOutcome {
    /// The wire response flattens all queries into one id/score run and
    /// records per-query lengths in `topks`.
    ///
    /// The per-query lengths are server-supplied; a run shorter than their
    /// sum is a malformed response, not a slice panic.
    pub(crate) fn from_wire(data: wire::SearchResultData) -> Result<Self> {
        let ids = IdList::from_wire(data.ids);
        let total: usize = data
            .topks
            .iter()
            .map(|topk| (*topk).max(0) as usize)
            .sum();
        if total > data.scores.len() || total > ids.len() {
            return Err(Error::Server {
                code: -1,
                reason: format!(
                    "search response topks claim {} hits but carry {} ids and {} scores",
                    total,
                    ids.len(),
                    data.scores.len()
                ),
            });
        }
        let mut hits = Vec::with_capacity(data.topks.len());
        let mut offset = 0usize;
        for topk in &data.topks {
            let end = offset + (*topk).max(0) as usize;
            hits.push(SearchHits {
                ids: ids.slice(offset, end),
                scores: data.scores[offset..end].to_vec(),
            });
            offset = end;
        }
        let fields = data
            .fields_data
            .into_iter()
            .map(FieldColumn::from_wire)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { hits, fields })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_column_round_trip() {
        let column = FieldColumn::long("id", vec![1, 2, 3]);
        assert_eq!(column.num_rows(), 3);
        let back = FieldColumn::from_wire(column.to_wire()).unwrap();
        assert_eq!(back, column);
    }

    #[test]
    fn test_float_vector_column_round_trip() {
        let column = FieldColumn::float_vector("v", 4, vec![0.0; 12]);
        assert_eq!(column.num_rows(), 3);
        let back = FieldColumn::from_wire(column.to_wire()).unwrap();
        assert_eq!(back, column);
    }

    #[test]
    fn test_nullable_column_keeps_validity() {
        let mut column = FieldColumn::double("score", vec![0.5, 0.0, 0.7]);
        column.valid_data = vec![true, false, true];
        let back = FieldColumn::from_wire(column.to_wire()).unwrap();
        assert_eq!(back.valid_data, vec![true, false, true]);
    }

    #[test]
    fn test_search_outcome_splits_by_topk() {
        let data = wire::SearchResultData {
            num_queries: 2,
            top_k: 2,
            topks: vec![2, 1],
            scores: vec![0.9, 0.8, 0.5],
            ids: Some(wire::Ids {
                id_field: Some(wire::ids::IdField::IntId(wire::LongArray {
                    data: vec![10, 11, 20],
                })),
            }),
            ..Default::default()
        };
        let outcome = SearchOutcome::from_wire(data).unwrap();
        assert_eq!(outcome.hits.len(), 2);
        assert_eq!(outcome.hits[0].ids, IdList::Int(vec![10, 11]));
        assert_eq!(outcome.hits[0].scores, vec![0.9, 0.8]);
        assert_eq!(outcome.hits[1].ids, IdList::Int(vec![20]));
    }

    #[test]
    fn test_truncated_search_response_is_error() {
        let data = wire::SearchResultData {
            num_queries: 1,
            top_k: 3,
            topks: vec![3],
            scores: vec![0.9, 0.8],
            ids: Some(wire::Ids {
                id_field: Some(wire::ids::IdField::IntId(wire::LongArray {
                    data: vec![1, 2],
                })),
            }),
            ..Default::default()
        };
        let err = SearchOutcome::from_wire(data).unwrap_err();
        assert!(matches!(err, Error::Server { .. }));
    }

    #[test]
    fn test_negative_topk_is_not_a_hit() {
        let data = wire::SearchResultData {
            topks: vec![-1, 1],
            scores: vec![0.5],
            ids: Some(wire::Ids {
                id_field: Some(wire::ids::IdField::IntId(wire::LongArray {
                    data: vec![7],
                })),
            }),
            ..Default::default()
        };
        let outcome = SearchOutcome::from_wire(data).unwrap();
        assert!(outcome.hits[0].ids.is_empty());
        assert_eq!(outcome.hits[1].ids, IdList::Int(vec![7]));
    }

    #[test]
    fn test_empty_payload_is_error() {
        let field = wire::FieldData {
            field_name: "broken".to_string(),
            ..Default::default()
        };
        assert!(FieldColumn::from_wire(field).is_err());
    }
}
