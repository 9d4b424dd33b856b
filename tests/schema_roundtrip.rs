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

//! Wire conversion invariants for schemas and functions.

use proptest::prelude::*;

use milvus_client::schema::convert::{
    field_from_wire, field_to_wire, function_from_wire, function_to_wire, schema_from_wire,
    schema_to_wire,
};
use milvus_client::schema::{CollectionSchema, FieldSchema, FieldValue, FunctionSchema};
use milvus_client::types::{DataType, FunctionType};

#[test]
fn typical_collection_schema_round_trips() {
    let schema = CollectionSchema::new("docs")
        .description("document store")
        .field(FieldSchema::new("id", DataType::Int64).primary())
        .field(FieldSchema::new("vector", DataType::FloatVector).dim(128))
        .enable_dynamic_field();
    schema.validate().unwrap();

    let wire = schema_to_wire(&schema).unwrap();
    assert_eq!(wire.fields.len(), 2);
    let vector = &wire.fields[1];
    assert!(vector
        .type_params
        .iter()
        .any(|p| p.key == "dim" && p.value == "128"));

    let back = schema_from_wire(wire).unwrap();
    assert_eq!(back, schema);
}

#[test]
fn varchar_field_with_default_round_trips() {
    let field = FieldSchema::new("title", DataType::VarChar)
        .max_length(256)
        .nullable()
        .default_value(FieldValue::String("untitled".to_string()));
    let back = field_from_wire(field_to_wire(&field).unwrap()).unwrap();
    assert_eq!(back, field);
}

#[test]
fn array_field_round_trips() {
    let field = FieldSchema::new("tags", DataType::Array)
        .element_type(DataType::VarChar)
        .max_capacity(16)
        .max_length(64);
    let back = field_from_wire(field_to_wire(&field).unwrap()).unwrap();
    assert_eq!(back, field);
}

#[test]
fn mismatched_default_value_is_rejected_at_conversion() {
    let field = FieldSchema::new("count", DataType::Int64)
        .default_value(FieldValue::String("seven".to_string()));
    assert!(field_to_wire(&field).is_err());
}

#[test]
fn function_params_survive_any_wire_order() {
    let function = FunctionSchema::new("bm25", FunctionType::Bm25)
        .input("text")
        .output("sparse")
        .param("k1", "1.2")
        .param("b", "0.75");
    let mut wire = function_to_wire(&function);
    wire.params.reverse();
    assert_eq!(function_from_wire(wire), function);
}

fn scalar_field_strategy() -> impl Strategy<Value = FieldSchema> {
    let name = "[a-z][a-z0-9_]{0,11}";
    let data_type = prop_oneof![
        Just(DataType::Bool),
        Just(DataType::Int8),
        Just(DataType::Int16),
        Just(DataType::Int32),
        Just(DataType::Int64),
        Just(DataType::Float),
        Just(DataType::Double),
    ];
    (name, data_type, any::<bool>(), any::<bool>()).prop_map(
        |(name, data_type, is_partition_key, nullable)| {
            let mut field = FieldSchema::new(name, data_type);
            field.is_partition_key = is_partition_key;
            field.nullable = nullable;
            field
        },
    )
}

fn default_for(data_type: DataType) -> impl Strategy<Value = Option<FieldValue>> {
    match data_type {
        DataType::Bool => any::<bool>().prop_map(|v| Some(FieldValue::Bool(v))).boxed(),
        DataType::Int8 | DataType::Int16 | DataType::Int32 => {
            any::<i32>().prop_map(|v| Some(FieldValue::Int(v))).boxed()
        }
        DataType::Int64 => any::<i64>().prop_map(|v| Some(FieldValue::Long(v))).boxed(),
        DataType::Float => any::<f32>().prop_map(|v| Some(FieldValue::Float(v))).boxed(),
        DataType::Double => any::<f64>().prop_map(|v| Some(FieldValue::Double(v))).boxed(),
        _ => Just(None).boxed(),
    }
}

proptest! {
    #[test]
    fn scalar_fields_round_trip(field in scalar_field_strategy()) {
        let back = field_from_wire(field_to_wire(&field).unwrap()).unwrap();
        prop_assert_eq!(back, field);
    }

    #[test]
    fn scalar_fields_with_matching_defaults_round_trip(
        (mut field, default) in scalar_field_strategy()
            .prop_flat_map(|f| {
                let default = default_for(f.data_type);
                (Just(f), default)
            })
            .prop_filter("NaN defaults break equality, not conversion", |(_, d)| {
                !matches!(d,
                    Some(FieldValue::Float(v)) if v.is_nan())
                    && !matches!(d, Some(FieldValue::Double(v)) if v.is_nan())
            })
    ) {
        field.default_value = default;
        let back = field_from_wire(field_to_wire(&field).unwrap()).unwrap();
        prop_assert_eq!(back, field);
    }

    #[test]
    fn vector_fields_round_trip(dim in 1i64..=4096) {
        let field = FieldSchema::new("embedding", DataType::FloatVector).dim(dim);
        let back = field_from_wire(field_to_wire(&field).unwrap()).unwrap();
        prop_assert_eq!(back, field);
    }

    #[test]
    fn function_round_trips(
        params in prop::collection::btree_map("[a-z]{1,8}", "[a-z0-9.]{1,8}", 0..6)
    ) {
        let mut function = FunctionSchema::new("embed", FunctionType::TextEmbedding)
            .input("text")
            .output("vector");
        function.params = params;
        let back = function_from_wire(function_to_wire(&function));
        prop_assert_eq!(back, function);
    }
}
