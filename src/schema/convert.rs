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

//! Bidirectional mapping between schema descriptors and wire messages.
//!
//! The mapping is lossless: `field_from_wire(field_to_wire(f)) == f` for
//! every field whose default value matches its declared type. Dimension,
//! max length and max capacity travel as "dim"/"max_length"/"max_capacity"
//! type parameters; anything else in `extra_params` is copied verbatim.

use std::collections::BTreeMap;

use crate::error::{Result, SchemaError};
use crate::proto::milvus as wire;
use crate::types::{DataType, FunctionType};

use super::{CollectionSchema, FieldSchema, FieldValue, FunctionSchema};

const DIM_KEY: &str = "dim";
const MAX_LENGTH_KEY: &str = "max_length";
const MAX_CAPACITY_KEY: &str = "max_capacity";

pub fn field_to_wire(field: &FieldSchema) -> Result<wire::FieldSchema> {
    let mut type_params = Vec::new();
    if let Some(dim) = field.dim {
        type_params.push(kv(DIM_KEY, dim.to_string()));
    }
    if let Some(max_length) = field.max_length {
        type_params.push(kv(MAX_LENGTH_KEY, max_length.to_string()));
    }
    if let Some(max_capacity) = field.max_capacity {
        type_params.push(kv(MAX_CAPACITY_KEY, max_capacity.to_string()));
    }
    for (key, value) in &field.extra_params {
        type_params.push(kv(key, value.clone()));
    }

    let default_value = match &field.default_value {
        Some(value) => Some(value_to_wire(value, field.data_type, &field.name)?),
        None => None,
    };

    Ok(wire::FieldSchema {
        field_id: 0,
        name: field.name.clone(),
        is_primary_key: field.is_primary,
        description: field.description.clone(),
        data_type: field.data_type.to_wire() as i32,
        type_params,
        auto_id: field.auto_id,
        element_type: field.element_type.unwrap_or(DataType::None).to_wire() as i32,
        default_value,
        is_partition_key: field.is_partition_key,
        is_clustering_key: field.is_clustering_key,
        nullable: field.nullable,
        is_function_output: field.is_function_output,
    })
}

pub fn field_from_wire(field: wire::FieldSchema) -> Result<FieldSchema> {
    let mut dim = None;
    let mut max_length = None;
    let mut max_capacity = None;
    let mut extra_params = BTreeMap::new();
    for pair in field.type_params {
        match pair.key.as_str() {
            DIM_KEY => dim = Some(parse_numeric(&field.name, DIM_KEY, &pair.value)?),
            MAX_LENGTH_KEY => {
                max_length = Some(parse_numeric(&field.name, MAX_LENGTH_KEY, &pair.value)?)
            }
            MAX_CAPACITY_KEY => {
                max_capacity =
                    Some(parse_numeric(&field.name, MAX_CAPACITY_KEY, &pair.value)?)
            }
            _ => {
                extra_params.insert(pair.key, pair.value);
            }
        }
    }

    let element_type = match DataType::from_wire(field.element_type) {
        DataType::None => None,
        other => Some(other),
    };
    let default_value = match field.default_value {
        Some(value) => value_from_wire(value, &field.name)?,
        None => None,
    };

    Ok(FieldSchema {
        name: field.name,
        description: field.description,
        data_type: DataType::from_wire(field.data_type),
        is_primary: field.is_primary_key,
        auto_id: field.auto_id,
        is_partition_key: field.is_partition_key,
        is_clustering_key: field.is_clustering_key,
        nullable: field.nullable,
        is_function_output: field.is_function_output,
        dim,
        max_length,
        max_capacity,
        element_type,
        default_value,
        extra_params,
    })
}

pub fn schema_to_wire(schema: &CollectionSchema) -> Result<wire::CollectionSchema> {
    let fields = schema
        .fields
        .iter()
        .map(field_to_wire)
        .collect::<Result<Vec<_>>>()?;
    Ok(wire::CollectionSchema {
        name: schema.name.clone(),
        description: schema.description.clone(),
        fields,
        enable_dynamic_field: schema.enable_dynamic_field,
        functions: schema.functions.iter().map(function_to_wire).collect(),
    })
}

pub fn schema_from_wire(schema: wire::CollectionSchema) -> Result<CollectionSchema> {
    let fields = schema
        .fields
        .into_iter()
        .map(field_from_wire)
        .collect::<Result<Vec<_>>>()?;
    Ok(CollectionSchema {
        name: schema.name,
        description: schema.description,
        fields,
        enable_dynamic_field: schema.enable_dynamic_field,
        functions: schema
            .functions
            .into_iter()
            .map(function_from_wire)
            .collect(),
    })
}

/// The client exposes function params as a map; the wire stores an ordered
/// key-value list. All pairs are preserved, order is not significant.
pub fn function_to_wire(function: &FunctionSchema) -> wire::FunctionSchema {
    wire::FunctionSchema {
        name: function.name.clone(),
        description: function.description.clone(),
        function_type: function.function_type.to_wire() as i32,
        input_field_names: function.input_field_names.clone(),
        output_field_names: function.output_field_names.clone(),
        params: function
            .params
            .iter()
            .map(|(key, value)| kv(key, value.clone()))
            .collect(),
    }
}

pub fn function_from_wire(function: wire::FunctionSchema) -> FunctionSchema {
    FunctionSchema {
        name: function.name,
        description: function.description,
        function_type: FunctionType::from_wire(function.function_type),
        input_field_names: function.input_field_names,
        output_field_names: function.output_field_names,
        params: function
            .params
            .into_iter()
            .map(|pair| (pair.key, pair.value))
            .collect(),
    }
}

fn value_to_wire(
    value: &FieldValue,
    declared: DataType,
    field_name: &str,
) -> Result<wire::ValueField> {
    use wire::value_field::Data;
    let data = match (value, declared) {
        (FieldValue::Bool(v), DataType::Bool) => Data::BoolData(*v),
        (FieldValue::Int(v), DataType::Int8 | DataType::Int16 | DataType::Int32) => {
            Data::IntData(*v)
        }
        (FieldValue::Long(v), DataType::Int64) => Data::LongData(*v),
        (FieldValue::Float(v), DataType::Float) => Data::FloatData(*v),
        (FieldValue::Double(v), DataType::Double) => Data::DoubleData(*v),
        (FieldValue::String(v), DataType::String | DataType::VarChar) => {
            Data::StringData(v.clone())
        }
        (value, declared) => {
            return Err(SchemaError::DefaultValueMismatch {
                field: field_name.to_string(),
                detail: format!("cannot encode {:?} as {:?}", value, declared),
            }
            .into())
        }
    };
    Ok(wire::ValueField { data: Some(data) })
}

fn value_from_wire(value: wire::ValueField, field_name: &str) -> Result<Option<FieldValue>> {
    use wire::value_field::Data;
    let converted = match value.data {
        None => return Ok(None),
        Some(Data::BoolData(v)) => FieldValue::Bool(v),
        Some(Data::IntData(v)) => FieldValue::Int(v),
        Some(Data::LongData(v)) => FieldValue::Long(v),
        Some(Data::FloatData(v)) => FieldValue::Float(v),
        Some(Data::DoubleData(v)) => FieldValue::Double(v),
        Some(Data::StringData(v)) => FieldValue::String(v),
        Some(Data::BytesData(_)) => {
            return Err(SchemaError::Unsupported(format!(
                "bytes default value on field '{}'",
                field_name
            ))
            .into())
        }
    };
    Ok(Some(converted))
}

fn parse_numeric(field: &str, key: &str, value: &str) -> Result<i64> {
    value.parse::<i64>().map_err(|_| {
        SchemaError::InvalidSchema(format!(
            "field '{}': type param '{}' is not numeric: '{}'",
            field, key, value
        ))
        .into()
    })
}

fn kv(key: impl Into<String>, value: impl Into<String>) -> wire::KeyValuePair {
    wire::KeyValuePair {
        key: key.into(),
        value: value.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldValue;

    #[test]
    fn test_primary_and_vector_round_trip() {
        let schema = CollectionSchema::new("docs")
            .field(FieldSchema::new("id", DataType::Int64).primary())
            .field(FieldSchema::new("vector", DataType::FloatVector).dim(128));
        let wire_schema = schema_to_wire(&schema).unwrap();

        let id = &wire_schema.fields[0];
        assert!(id.is_primary_key);
        assert!(!id.auto_id);
        let vector = &wire_schema.fields[1];
        assert_eq!(vector.type_params[0].key, "dim");
        assert_eq!(vector.type_params[0].value, "128");

        let back = schema_from_wire(wire_schema).unwrap();
        assert_eq!(back, schema);
    }

    #[test]
    fn test_field_round_trip_with_default_value() {
        let field = FieldSchema::new("score", DataType::Double)
            .nullable()
            .default_value(FieldValue::Double(0.5));
        let back = field_from_wire(field_to_wire(&field).unwrap()).unwrap();
        assert_eq!(back, field);
    }

    #[test]
    fn test_varchar_round_trip_keeps_extra_params() {
        let field = FieldSchema::new("text", DataType::VarChar)
            .max_length(512)
            .extra_param("enable_analyzer", "true")
            .extra_param("analyzer_params", r#"{"type":"standard"}"#);
        let wire_field = field_to_wire(&field).unwrap();
        // Known numeric params are pulled out; the rest stays opaque.
        assert!(wire_field.type_params.iter().any(|p| p.key == "max_length"));
        assert!(wire_field.type_params.iter().any(|p| p.key == "enable_analyzer"));
        let back = field_from_wire(wire_field).unwrap();
        assert_eq!(back, field);
    }

    #[test]
    fn test_array_round_trip() {
        let field = FieldSchema::new("tags", DataType::Array)
            .element_type(DataType::VarChar)
            .max_capacity(16)
            .max_length(64);
        let wire_field = field_to_wire(&field).unwrap();
        assert_eq!(wire_field.element_type, wire::DataType::VarChar as i32);
        let back = field_from_wire(wire_field).unwrap();
        assert_eq!(back, field);
    }

    #[test]
    fn test_default_value_mismatch_is_error() {
        let field = FieldSchema::new("count", DataType::Int64)
            .default_value(FieldValue::String("nope".to_string()));
        assert!(field_to_wire(&field).is_err());
    }

    #[test]
    fn test_unknown_wire_data_type_maps_to_none() {
        let wire_field = wire::FieldSchema {
            name: "future".to_string(),
            data_type: 424242,
            ..Default::default()
        };
        let back = field_from_wire(wire_field).unwrap();
        assert_eq!(back.data_type, DataType::None);
    }

    #[test]
    fn test_malformed_dim_is_error() {
        let wire_field = wire::FieldSchema {
            name: "v".to_string(),
            data_type: wire::DataType::FloatVector as i32,
            type_params: vec![kv("dim", "not-a-number")],
            ..Default::default()
        };
        assert!(field_from_wire(wire_field).is_err());
    }

    #[test]
    fn test_function_params_survive_any_wire_order() {
        let function = FunctionSchema::new("bm25", FunctionType::Bm25)
            .input("text")
            .output("sparse")
            .param("k1", "1.2")
            .param("b", "0.75");
        let mut wire_function = function_to_wire(&function);
        wire_function.params.reverse();
        let back = function_from_wire(wire_function);
        assert_eq!(back, function);
    }

    #[test]
    fn test_function_round_trip() {
        let function = FunctionSchema::new("embed", FunctionType::TextEmbedding)
            .description("server-side embedding")
            .input("text")
            .output("vector")
            .param("provider", "openai")
            .param("model_name", "text-embedding-3-small");
        let back = function_from_wire(function_to_wire(&function));
        assert_eq!(back, function);
    }

    #[test]
    fn test_schema_round_trip_with_functions_and_dynamic_field() {
        let schema = CollectionSchema::new("articles")
            .description("article chunks")
            .enable_dynamic_field()
            .field(
                FieldSchema::new("id", DataType::VarChar)
                    .max_length(36)
                    .primary(),
            )
            .field(
                FieldSchema::new("text", DataType::VarChar)
                    .max_length(8192)
                    .extra_param("enable_analyzer", "true"),
            )
            .field(FieldSchema::new("sparse", DataType::SparseFloatVector))
            .function(
                FunctionSchema::new("bm25", FunctionType::Bm25)
                    .input("text")
                    .output("sparse"),
            );
        let back = schema_from_wire(schema_to_wire(&schema).unwrap()).unwrap();
        assert_eq!(back, schema);
    }
}
