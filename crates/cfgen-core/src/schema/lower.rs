use indexmap::IndexMap;

use super::document::ref_simple_name;
use super::{
    ArrayNode, ComposedKind, ComposedNode, EnumNode, MapNode, ObjectNode, PrimitiveNode,
    SchemaNode,
};
use crate::error::ResolveError;
use crate::parse::schema::{AdditionalProperties, Schema, SchemaOrRef, SchemaType};

/// Lower a parsed `SchemaOrRef` into a [`SchemaNode`].
pub fn lower_schema(schema_or_ref: &SchemaOrRef) -> Result<SchemaNode, ResolveError> {
    match schema_or_ref {
        SchemaOrRef::Ref { ref_path } => Ok(SchemaNode::reference(ref_simple_name(ref_path)?)),
        SchemaOrRef::Schema(schema) => lower_inline(schema),
    }
}

fn lower_inline(schema: &Schema) -> Result<SchemaNode, ResolveError> {
    // Composition first: all_of > one_of > any_of
    let composed = [
        (ComposedKind::AllOf, &schema.all_of),
        (ComposedKind::OneOf, &schema.one_of),
        (ComposedKind::AnyOf, &schema.any_of),
    ]
    .into_iter()
    .find(|(_, members)| !members.is_empty());

    if let Some((kind, members)) = composed {
        let mut lowered = members
            .iter()
            .map(lower_schema)
            .collect::<Result<Vec<_>, _>>()?;
        // Sibling properties next to allOf behave like one more inline member
        if !schema.properties.is_empty() {
            lowered.push(SchemaNode::Object(lower_object(schema)?));
        }
        return Ok(SchemaNode::Composed(ComposedNode {
            kind,
            members: lowered,
            schema_name: schema.schema_name.clone(),
        }));
    }

    if !schema.enum_values.is_empty() {
        return Ok(SchemaNode::Enum(EnumNode {
            base_type: abstract_type_name(schema).to_string(),
            literals: schema.enum_values.iter().map(literal_text).collect(),
            default: schema.default.clone(),
        }));
    }

    let primary = schema.schema_type.as_ref().and_then(|t| t.primary());

    if primary == Some(SchemaType::Array) || (primary.is_none() && schema.items.is_some()) {
        let items = match &schema.items {
            Some(items) => lower_schema(items)?,
            None => SchemaNode::primitive("object"),
        };
        return Ok(SchemaNode::Array(ArrayNode {
            items: Box::new(items),
            schema_name: schema.schema_name.clone(),
        }));
    }

    let object_like = primary == Some(SchemaType::Object)
        || (primary.is_none()
            && (!schema.properties.is_empty() || schema.additional_properties.is_some()));

    if object_like {
        if schema.properties.is_empty() {
            match &schema.additional_properties {
                Some(AdditionalProperties::Schema(value)) => {
                    return Ok(SchemaNode::Map(MapNode {
                        value: Box::new(lower_schema(value)?),
                        schema_name: schema.schema_name.clone(),
                    }));
                }
                Some(AdditionalProperties::Bool(true)) => {
                    return Ok(SchemaNode::Map(MapNode {
                        value: Box::new(SchemaNode::primitive("object")),
                        schema_name: schema.schema_name.clone(),
                    }));
                }
                _ => {}
            }
        }
        return Ok(SchemaNode::Object(lower_object(schema)?));
    }

    Ok(SchemaNode::Primitive(PrimitiveNode {
        type_name: abstract_type_name(schema).to_string(),
        pattern: schema.pattern.clone(),
        default: schema.default.clone(),
    }))
}

fn lower_object(schema: &Schema) -> Result<ObjectNode, ResolveError> {
    let mut properties = IndexMap::new();
    for (name, prop) in &schema.properties {
        properties.insert(name.clone(), lower_schema(prop)?);
    }
    Ok(ObjectNode {
        properties,
        required: schema.required.clone(),
        description: schema.description.clone(),
    })
}

/// Abstract type name from `type` + `format`.
pub fn abstract_type_name(schema: &Schema) -> &'static str {
    let format = schema.format.as_deref();
    match schema.schema_type.as_ref().and_then(|t| t.primary()) {
        Some(SchemaType::String) => match format {
            Some("date") => "date",
            Some("date-time") => "DateTime",
            Some("binary") => "binary",
            Some("byte") => "ByteArray",
            Some("uuid") => "UUID",
            Some("password") => "password",
            Some("uri") => "URI",
            _ => "string",
        },
        Some(SchemaType::Integer) => match format {
            Some("int64") => "long",
            _ => "integer",
        },
        Some(SchemaType::Number) => match format {
            Some("float") => "float",
            Some("double") => "double",
            _ => "number",
        },
        Some(SchemaType::Boolean) => "boolean",
        Some(SchemaType::Array) => "array",
        Some(SchemaType::Object) | Some(SchemaType::Null) | None => {
            // Untyped enums are string enums in practice
            if schema.enum_values.iter().all(|v| v.is_string()) && !schema.enum_values.is_empty()
            {
                "string"
            } else {
                "object"
            }
        }
    }
}

fn literal_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}
