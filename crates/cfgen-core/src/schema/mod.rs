//! The schema graph that type and name resolution operate on.
//!
//! Nodes are lowered once from the parsed document and treated as immutable
//! for the rest of a generation run.

pub mod document;
pub mod lower;

use indexmap::IndexMap;
use serde::Serialize;

pub use document::{RefLookup, SchemaDocument, ref_simple_name};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchemaNode {
    Primitive(PrimitiveNode),
    Array(ArrayNode),
    Map(MapNode),
    Ref(RefNode),
    Composed(ComposedNode),
    Enum(EnumNode),
    Object(ObjectNode),
}

/// A scalar keyed by its abstract type name (`integer`, `DateTime`, `binary`, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimitiveNode {
    pub type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrayNode {
    pub items: Box<SchemaNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_name: Option<String>,
}

/// A string-keyed dictionary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapNode {
    pub value: Box<SchemaNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefNode {
    /// Simple name of the target, without the `#/components/schemas/` path.
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComposedKind {
    AllOf,
    OneOf,
    AnyOf,
}

impl ComposedKind {
    /// Prefix used when synthesizing a model name for an anonymous composed schema.
    pub fn prefix(self) -> &'static str {
        match self {
            ComposedKind::AllOf => "AllOf",
            ComposedKind::OneOf => "OneOf",
            ComposedKind::AnyOf => "AnyOf",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposedNode {
    pub kind: ComposedKind,
    pub members: Vec<SchemaNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_name: Option<String>,
}

impl ComposedNode {
    /// The first `$ref` member, which acts as the parent of an `allOf` model.
    pub fn parent_ref(&self) -> Option<&str> {
        if self.kind != ComposedKind::AllOf {
            return None;
        }
        self.members.iter().find_map(|m| match m {
            SchemaNode::Ref(r) => Some(r.name.as_str()),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumNode {
    /// Abstract type of the literals, e.g. `string` or `integer`.
    pub base_type: String,
    pub literals: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ObjectNode {
    pub properties: IndexMap<String, SchemaNode>,
    pub required: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SchemaNode {
    /// Shorthand for a primitive with the given abstract type name.
    pub fn primitive(type_name: impl Into<String>) -> Self {
        SchemaNode::Primitive(PrimitiveNode {
            type_name: type_name.into(),
            pattern: None,
            default: None,
        })
    }

    pub fn reference(name: impl Into<String>) -> Self {
        SchemaNode::Ref(RefNode { name: name.into() })
    }

    pub fn array(items: SchemaNode) -> Self {
        SchemaNode::Array(ArrayNode {
            items: Box::new(items),
            schema_name: None,
        })
    }

    pub fn map(value: SchemaNode) -> Self {
        SchemaNode::Map(MapNode {
            value: Box::new(value),
            schema_name: None,
        })
    }

    /// Arrays and maps, the only nodes a `$ref` is expanded through.
    pub fn is_container(&self) -> bool {
        matches!(self, SchemaNode::Array(_) | SchemaNode::Map(_))
    }

    /// Copy of this node carrying `name` as its synthetic schema-name tag.
    /// Nodes without a tag slot are returned unchanged.
    pub fn tagged(&self, name: &str) -> SchemaNode {
        let mut node = self.clone();
        match &mut node {
            SchemaNode::Array(a) => a.schema_name = Some(name.to_string()),
            SchemaNode::Map(m) => m.schema_name = Some(name.to_string()),
            SchemaNode::Composed(c) => c.schema_name = Some(name.to_string()),
            _ => {}
        }
        node
    }

    /// The abstract type name step 4 of resolution looks up.
    pub fn abstract_type(&self) -> &str {
        match self {
            SchemaNode::Primitive(p) => &p.type_name,
            SchemaNode::Enum(e) => &e.base_type,
            SchemaNode::Ref(r) => &r.name,
            SchemaNode::Array(_) => "array",
            SchemaNode::Map(_) => "map",
            SchemaNode::Composed(_) | SchemaNode::Object(_) => "object",
        }
    }

    pub fn pattern(&self) -> Option<&str> {
        match self {
            SchemaNode::Primitive(p) => p.pattern.as_deref(),
            _ => None,
        }
    }

    /// The schema's `default`, kept only on scalars and enums.
    pub fn default_value(&self) -> Option<&serde_json::Value> {
        match self {
            SchemaNode::Primitive(p) => p.default.as_ref(),
            SchemaNode::Enum(e) => e.default.as_ref(),
            _ => None,
        }
    }
}
