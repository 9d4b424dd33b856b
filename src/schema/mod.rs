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

//! Field, collection and function descriptors.
//!
//! These are the client-side counterparts of the wire schema messages.
//! Validation runs entirely client-side, before any RPC is issued; the
//! wire mapping lives in [`convert`].

pub mod convert;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result, SchemaError};
use crate::types::{DataType, FunctionType};

/// Typed default value for a scalar field.
///
/// `Int` covers Int8/Int16/Int32 declarations; the wire format carries all
/// three in the same 32-bit slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum FieldValue {
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
}

impl FieldValue {
    /// Whether this value is legal as a default for a field declared with
    /// `data_type`.
    pub fn matches_type(&self, data_type: DataType) -> bool {
        matches!(
            (self, data_type),
            (FieldValue::Bool(_), DataType::Bool)
                | (FieldValue::Int(_), DataType::Int8)
                | (FieldValue::Int(_), DataType::Int16)
                | (FieldValue::Int(_), DataType::Int32)
                | (FieldValue::Long(_), DataType::Int64)
                | (FieldValue::Float(_), DataType::Float)
                | (FieldValue::Double(_), DataType::Double)
                | (FieldValue::String(_), DataType::String)
                | (FieldValue::String(_), DataType::VarChar)
        )
    }
}

/// One field of a collection schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FieldSchema {
    pub name: String,
    pub description: String,
    pub data_type: DataType,
    pub is_primary: bool,
    pub auto_id: bool,
    pub is_partition_key: bool,
    pub is_clustering_key: bool,
    pub nullable: bool,
    pub is_function_output: bool,
    /// Vector dimension; required for all vector types except sparse.
    pub dim: Option<i64>,
    /// Maximum character length; required for VarChar fields.
    pub max_length: Option<i64>,
    /// Maximum element count; required for Array fields.
    pub max_capacity: Option<i64>,
    /// Element type; required for Array fields.
    pub element_type: Option<DataType>,
    pub default_value: Option<FieldValue>,
    /// Additional type parameters copied verbatim to the wire (analyzer
    /// params, match flags and the like).
    pub extra_params: BTreeMap<String, String>,
}

impl FieldSchema {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            ..Default::default()
        }
    }

    pub fn primary(mut self) -> Self {
        self.is_primary = true;
        self
    }

    pub fn auto_id(mut self) -> Self {
        self.auto_id = true;
        self
    }

    pub fn partition_key(mut self) -> Self {
        self.is_partition_key = true;
        self
    }

    pub fn clustering_key(mut self) -> Self {
        self.is_clustering_key = true;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn dim(mut self, dim: i64) -> Self {
        self.dim = Some(dim);
        self
    }

    pub fn max_length(mut self, max_length: i64) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn max_capacity(mut self, max_capacity: i64) -> Self {
        self.max_capacity = Some(max_capacity);
        self
    }

    pub fn element_type(mut self, element_type: DataType) -> Self {
        self.element_type = Some(element_type);
        self
    }

    pub fn default_value(mut self, value: FieldValue) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn extra_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_params.insert(key.into(), value.into());
        self
    }

    /// Per-field validation. Schema-wide invariants (primary key rules)
    /// live on [`CollectionSchema::validate`].
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Param("field name must not be empty".to_string()));
        }
        if self.data_type == DataType::None {
            return Err(Error::Param(format!(
                "field '{}' has no data type",
                self.name
            )));
        }
        if self.data_type.requires_dim() {
            match self.dim {
                Some(dim) if dim > 0 => {}
                _ => {
                    return Err(Error::Param(format!(
                        "vector field '{}' requires a positive dim",
                        self.name
                    )))
                }
            }
        }
        if self.data_type == DataType::VarChar && self.max_length.unwrap_or(0) <= 0 {
            return Err(Error::Param(format!(
                "varchar field '{}' requires a positive max_length",
                self.name
            )));
        }
        if self.data_type == DataType::Array {
            if self.element_type.unwrap_or(DataType::None) == DataType::None {
                return Err(Error::Param(format!(
                    "array field '{}' requires an element type",
                    self.name
                )));
            }
            if self.max_capacity.unwrap_or(0) <= 0 {
                return Err(Error::Param(format!(
                    "array field '{}' requires a positive max_capacity",
                    self.name
                )));
            }
        }
        if let Some(default) = &self.default_value {
            if !default.matches_type(self.data_type) {
                return Err(SchemaError::DefaultValueMismatch {
                    field: self.name.clone(),
                    detail: format!(
                        "default {:?} does not fit declared type {:?}",
                        default, self.data_type
                    ),
                }
                .into());
            }
        }
        Ok(())
    }
}

/// Server-side function attached to a schema, e.g. BM25 producing a sparse
/// vector column from a VarChar column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FunctionSchema {
    pub name: String,
    pub description: String,
    pub function_type: FunctionType,
    pub input_field_names: Vec<String>,
    pub output_field_names: Vec<String>,
    /// Order-insensitive parameter map; wire order is not preserved.
    pub params: BTreeMap<String, String>,
}

impl FunctionSchema {
    pub fn new(name: impl Into<String>, function_type: FunctionType) -> Self {
        Self {
            name: name.into(),
            function_type,
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn input(mut self, field: impl Into<String>) -> Self {
        self.input_field_names.push(field.into());
        self
    }

    pub fn output(mut self, field: impl Into<String>) -> Self {
        self.output_field_names.push(field.into());
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Param("function name must not be empty".to_string()));
        }
        if self.input_field_names.is_empty() {
            return Err(Error::Param(format!(
                "function '{}' requires at least one input field",
                self.name
            )));
        }
        Ok(())
    }
}

/// Ordered field list plus schema-wide flags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CollectionSchema {
    pub name: String,
    pub description: String,
    pub fields: Vec<FieldSchema>,
    pub enable_dynamic_field: bool,
    pub functions: Vec<FunctionSchema>,
}

impl CollectionSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn field(mut self, field: FieldSchema) -> Self {
        self.fields.push(field);
        self
    }

    pub fn function(mut self, function: FunctionSchema) -> Self {
        self.functions.push(function);
        self
    }

    pub fn enable_dynamic_field(mut self) -> Self {
        self.enable_dynamic_field = true;
        self
    }

    pub fn primary_field(&self) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.is_primary)
    }

    /// Full schema validation, run before create-collection.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Param("collection name must not be empty".to_string()));
        }
        if self.fields.is_empty() {
            return Err(Error::Param(format!(
                "collection '{}' has no fields",
                self.name
            )));
        }
        for field in &self.fields {
            field.validate()?;
        }
        let primaries: Vec<&FieldSchema> =
            self.fields.iter().filter(|f| f.is_primary).collect();
        if primaries.len() != 1 {
            return Err(Error::Param(format!(
                "collection '{}' must have exactly one primary key field, found {}",
                self.name,
                primaries.len()
            )));
        }
        let primary = primaries[0];
        match primary.data_type {
            DataType::Int64 => {}
            DataType::VarChar => {
                if primary.auto_id {
                    return Err(Error::Param(format!(
                        "varchar primary key '{}' cannot use auto_id",
                        primary.name
                    )));
                }
            }
            other => {
                return Err(Error::Param(format!(
                    "primary key '{}' must be Int64 or VarChar, found {:?}",
                    primary.name, other
                )))
            }
        }
        for function in &self.functions {
            function.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_schema() -> CollectionSchema {
        CollectionSchema::new("docs")
            .field(FieldSchema::new("id", DataType::Int64).primary())
            .field(FieldSchema::new("vector", DataType::FloatVector).dim(128))
    }

    #[test]
    fn test_valid_schema_passes() {
        assert!(valid_schema().validate().is_ok());
    }

    #[test]
    fn test_missing_primary_key() {
        let schema = CollectionSchema::new("docs")
            .field(FieldSchema::new("vector", DataType::FloatVector).dim(8));
        assert!(schema.validate().is_err());
    }

    #[test]
    fn test_two_primary_keys() {
        let schema = CollectionSchema::new("docs")
            .field(FieldSchema::new("a", DataType::Int64).primary())
            .field(FieldSchema::new("b", DataType::Int64).primary());
        assert!(schema.validate().is_err());
    }

    #[test]
    fn test_varchar_primary_key_rejects_auto_id() {
        let schema = CollectionSchema::new("docs").field(
            FieldSchema::new("id", DataType::VarChar)
                .max_length(64)
                .primary()
                .auto_id(),
        );
        assert!(schema.validate().is_err());
    }

    #[test]
    fn test_varchar_primary_key_without_auto_id() {
        let schema = CollectionSchema::new("docs").field(
            FieldSchema::new("id", DataType::VarChar).max_length(64).primary(),
        );
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_vector_field_requires_dim() {
        let schema = CollectionSchema::new("docs")
            .field(FieldSchema::new("id", DataType::Int64).primary())
            .field(FieldSchema::new("vector", DataType::FloatVector));
        assert!(schema.validate().is_err());
    }

    #[test]
    fn test_sparse_vector_needs_no_dim() {
        let schema = CollectionSchema::new("docs")
            .field(FieldSchema::new("id", DataType::Int64).primary())
            .field(FieldSchema::new("sparse", DataType::SparseFloatVector));
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_array_field_requirements() {
        let bad = FieldSchema::new("tags", DataType::Array);
        assert!(bad.validate().is_err());
        let good = FieldSchema::new("tags", DataType::Array)
            .element_type(DataType::VarChar)
            .max_capacity(16)
            .max_length(32);
        assert!(good.validate().is_ok());
    }

    #[test]
    fn test_default_value_type_mismatch() {
        let field = FieldSchema::new("count", DataType::Int64)
            .default_value(FieldValue::String("nope".to_string()));
        assert!(field.validate().is_err());
    }

    #[test]
    fn test_default_value_matching() {
        let field = FieldSchema::new("count", DataType::Int64)
            .default_value(FieldValue::Long(7));
        assert!(field.validate().is_ok());
    }
}
