//! Transformation catalog.
//!
//! Responsibilities:
//! - Define the closed set of post-query transformations as a tagged enum,
//!   one variant per kind, with the parameters that kind requires.
//! - Parse a loose [`TransformSpec`] into a variant, rejecting unknown
//!   kinds and missing required parameters.
//! - Render each variant as its `{id, options}` JSON fragment.
//!
//! Does NOT handle:
//! - Attaching transformations to panels (see `panel.rs`).
//!
//! Invariants:
//! - Rendering never fails; absent optional parameters are omitted from
//!   `options`, never emitted as null or empty.
//! - Adding a new kind means adding a variant; the compiler then forces
//!   every match in this file to handle it.

use serde_json::{Map, Value, json};

use dashforge_config::TransformSpec;

use crate::error::{Result, SchemaError};

/// One post-query data transformation, tagged by kind.
///
/// Stateless value object; each variant renders to an `{id, options}`
/// fragment in a panel's `transformations` array.
#[derive(Debug, Clone, PartialEq)]
pub enum Transformation {
    /// Keep only the named fields.
    FilterFieldsByName { include: Vec<String> },
    /// Filter rows by a field value predicate.
    FilterByValue {
        field: String,
        operator: String,
        value: Value,
    },
    /// Show or hide results of specific queries.
    FilterByRefId { ref_ids: Vec<String> },
    /// Merge the results of multiple queries.
    Merge,
    /// Join series on a shared field.
    OuterJoin { field: String },
    /// Derive a new field from a calculation.
    AddFieldFromCalculation {
        mode: String,
        reducer: String,
        expression: Option<String>,
    },
    /// Reduce each series to a single value.
    Reduce { reducer: String },
    /// Group by fields and aggregate.
    GroupBy {
        fields: Vec<Value>,
        aggregations: Vec<Value>,
    },
    /// Reorder, rename, or hide fields.
    Organize {
        rename_by_name: Option<Map<String, Value>>,
        sort_by: Option<Value>,
    },
    /// Turn series labels into fields.
    LabelsToFields {
        labels: Option<Vec<String>>,
        value_label: Option<String>,
    },
    /// Flatten multiple series into one table of rows.
    SeriesToRows,
    /// Change a field's data type.
    ConvertFieldType { field: String, target_type: String },
    /// Group rows into a nested table.
    GroupToNestedTable { key: String },
    /// Sort rows by a field.
    SortBy { field: String, reverse: bool },
    /// Keep only the first N rows.
    Limit { limit: i64 },
    /// Extract fields from a source field with a regex.
    ExtractFields {
        source: String,
        regex: String,
        rename: Option<String>,
    },
    /// Show intermediate data at each step.
    Debug,
}

/// Shorthand for the required-parameter error.
fn missing(kind: &'static str, param: &'static str) -> SchemaError {
    SchemaError::MissingTransformParameter { kind, param }
}

impl Transformation {
    /// Parse a spec-file transformation entry into a catalog variant.
    ///
    /// The spec file accepts both the historical map names
    /// (`filterByName`, `filterByQuery`) and the Grafana id forms
    /// (`filterFieldsByName`, `filterByRefId`); everywhere else the
    /// configured name equals the id.
    pub fn from_spec(spec: &TransformSpec) -> Result<Self> {
        match spec.kind.as_str() {
            "filterByName" | "filterFieldsByName" => Ok(Self::FilterFieldsByName {
                include: spec
                    .include
                    .clone()
                    .ok_or_else(|| missing("filterFieldsByName", "include"))?,
            }),
            "filterByValue" => Ok(Self::FilterByValue {
                field: spec
                    .field
                    .clone()
                    .ok_or_else(|| missing("filterByValue", "field"))?,
                operator: spec
                    .operator
                    .clone()
                    .ok_or_else(|| missing("filterByValue", "operator"))?,
                value: spec
                    .value
                    .clone()
                    .ok_or_else(|| missing("filterByValue", "value"))?,
            }),
            "filterByQuery" | "filterByRefId" => Ok(Self::FilterByRefId {
                ref_ids: spec
                    .ref_ids
                    .clone()
                    .ok_or_else(|| missing("filterByRefId", "refIds"))?,
            }),
            "merge" => Ok(Self::Merge),
            "outerJoin" => Ok(Self::OuterJoin {
                field: spec
                    .field
                    .clone()
                    .ok_or_else(|| missing("outerJoin", "field"))?,
            }),
            "addFieldFromCalculation" => Ok(Self::AddFieldFromCalculation {
                mode: spec
                    .mode
                    .clone()
                    .ok_or_else(|| missing("addFieldFromCalculation", "mode"))?,
                reducer: spec
                    .reducer
                    .clone()
                    .ok_or_else(|| missing("addFieldFromCalculation", "reducer"))?,
                expression: spec.expression.clone(),
            }),
            "reduce" => Ok(Self::Reduce {
                reducer: spec
                    .reducer
                    .clone()
                    .ok_or_else(|| missing("reduce", "reducer"))?,
            }),
            "groupBy" => Ok(Self::GroupBy {
                fields: spec
                    .fields
                    .clone()
                    .ok_or_else(|| missing("groupBy", "fields"))?,
                aggregations: spec
                    .aggregations
                    .clone()
                    .ok_or_else(|| missing("groupBy", "aggregations"))?,
            }),
            "organize" => Ok(Self::Organize {
                rename_by_name: spec.rename_by_name.clone(),
                sort_by: spec.sort_by.clone(),
            }),
            "labelsToFields" => Ok(Self::LabelsToFields {
                labels: spec.labels.clone(),
                value_label: spec.value_label.clone(),
            }),
            "seriesToRows" => Ok(Self::SeriesToRows),
            "convertFieldType" => Ok(Self::ConvertFieldType {
                field: spec
                    .field
                    .clone()
                    .ok_or_else(|| missing("convertFieldType", "field"))?,
                target_type: spec
                    .target_type
                    .clone()
                    .ok_or_else(|| missing("convertFieldType", "targetType"))?,
            }),
            "groupToNestedTable" => Ok(Self::GroupToNestedTable {
                key: spec
                    .key
                    .clone()
                    .ok_or_else(|| missing("groupToNestedTable", "key"))?,
            }),
            "sortBy" => Ok(Self::SortBy {
                field: spec
                    .field
                    .clone()
                    .ok_or_else(|| missing("sortBy", "field"))?,
                reverse: spec.reverse.unwrap_or(false),
            }),
            "limit" => Ok(Self::Limit {
                limit: spec.limit.ok_or_else(|| missing("limit", "limit"))?,
            }),
            "extractFields" => Ok(Self::ExtractFields {
                source: spec
                    .source
                    .clone()
                    .ok_or_else(|| missing("extractFields", "source"))?,
                regex: spec
                    .regex
                    .clone()
                    .ok_or_else(|| missing("extractFields", "regex"))?,
                rename: spec.rename.clone(),
            }),
            "debug" => Ok(Self::Debug),
            other => Err(SchemaError::UnknownTransformationKind {
                kind: other.to_string(),
            }),
        }
    }

    /// The Grafana transformation id for this kind.
    pub fn id(&self) -> &'static str {
        match self {
            Self::FilterFieldsByName { .. } => "filterFieldsByName",
            Self::FilterByValue { .. } => "filterByValue",
            Self::FilterByRefId { .. } => "filterByRefId",
            Self::Merge => "merge",
            Self::OuterJoin { .. } => "outerJoin",
            Self::AddFieldFromCalculation { .. } => "addFieldFromCalculation",
            Self::Reduce { .. } => "reduce",
            Self::GroupBy { .. } => "groupBy",
            Self::Organize { .. } => "organize",
            Self::LabelsToFields { .. } => "labelsToFields",
            Self::SeriesToRows => "seriesToRows",
            Self::ConvertFieldType { .. } => "convertFieldType",
            Self::GroupToNestedTable { .. } => "groupToNestedTable",
            Self::SortBy { .. } => "sortBy",
            Self::Limit { .. } => "limit",
            Self::ExtractFields { .. } => "extractFields",
            Self::Debug => "debug",
        }
    }

    /// Render the `{id, options}` fragment for this transformation.
    pub fn to_json_data(&self) -> Value {
        json!({
            "id": self.id(),
            "options": self.options(),
        })
    }

    fn options(&self) -> Value {
        match self {
            Self::FilterFieldsByName { include } => json!({
                "include": { "names": include }
            }),
            Self::FilterByValue {
                field,
                operator,
                value,
            } => json!({
                "filters": [
                    {
                        "fieldName": field,
                        "config": {
                            "id": format!("filter-by-value-{field}"),
                            "options": {
                                "operator": operator,
                                "value": value,
                            }
                        }
                    }
                ]
            }),
            Self::FilterByRefId { ref_ids } => json!({ "refIds": ref_ids }),
            Self::Merge => json!({}),
            Self::OuterJoin { field } => json!({ "join": field }),
            Self::AddFieldFromCalculation {
                mode,
                reducer,
                expression,
            } => {
                let mut options = Map::new();
                options.insert("mode".to_string(), json!(mode));
                options.insert("reducer".to_string(), json!(reducer));
                if let Some(expression) = expression {
                    options.insert("expression".to_string(), json!(expression));
                }
                Value::Object(options)
            }
            // Single-element list: Grafana's reduce options take a list of
            // reducers but this catalog exposes exactly one.
            Self::Reduce { reducer } => json!({ "reducers": [reducer] }),
            Self::GroupBy {
                fields,
                aggregations,
            } => json!({
                "fields": fields,
                "aggregations": aggregations,
            }),
            Self::Organize {
                rename_by_name,
                sort_by,
            } => {
                let mut options = Map::new();
                if let Some(rename_by_name) = rename_by_name {
                    options.insert("renameByName".to_string(), Value::Object(rename_by_name.clone()));
                }
                if let Some(sort_by) = sort_by {
                    options.insert("sortBy".to_string(), sort_by.clone());
                }
                Value::Object(options)
            }
            Self::LabelsToFields {
                labels,
                value_label,
            } => {
                let mut options = Map::new();
                if let Some(labels) = labels {
                    options.insert("labels".to_string(), json!(labels));
                }
                if let Some(value_label) = value_label {
                    options.insert("valueLabel".to_string(), json!(value_label));
                }
                Value::Object(options)
            }
            Self::SeriesToRows => json!({}),
            Self::ConvertFieldType { field, target_type } => json!({
                "field": field,
                "targetType": target_type,
            }),
            Self::GroupToNestedTable { key } => json!({ "key": key }),
            Self::SortBy { field, reverse } => json!({
                "sort": [
                    { "field": field, "reverse": reverse }
                ]
            }),
            Self::Limit { limit } => json!({ "limit": limit }),
            Self::ExtractFields {
                source,
                regex,
                rename,
            } => {
                let mut options = Map::new();
                options.insert("source".to_string(), json!(source));
                options.insert("regex".to_string(), json!(regex));
                if let Some(rename) = rename {
                    options.insert("rename".to_string(), json!(rename));
                }
                Value::Object(options)
            }
            Self::Debug => json!({}),
        }
    }
}
