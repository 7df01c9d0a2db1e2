use indexmap::IndexMap;

use super::SchemaNode;
use super::lower::lower_schema;
use crate::error::ResolveError;
use crate::parse::spec::OpenApiSpec;

/// Name-based access to the schemas of the enclosing document.
pub trait RefLookup {
    fn resolve_ref(&self, name: &str) -> Option<&SchemaNode>;
}

/// Component schemas of one document, lowered to [`SchemaNode`]s.
#[derive(Debug, Clone, Default)]
pub struct SchemaDocument {
    schemas: IndexMap<String, SchemaNode>,
}

impl SchemaDocument {
    pub fn new(schemas: IndexMap<String, SchemaNode>) -> Self {
        Self { schemas }
    }

    pub fn from_spec(spec: &OpenApiSpec) -> Result<Self, ResolveError> {
        let mut schemas = IndexMap::new();
        if let Some(components) = &spec.components {
            for (name, schema) in &components.schemas {
                schemas.insert(name.clone(), lower_schema(schema)?);
            }
        }
        Ok(Self { schemas })
    }

    pub fn insert(&mut self, name: impl Into<String>, node: SchemaNode) {
        self.schemas.insert(name.into(), node);
    }

    pub fn schemas(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.schemas.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl RefLookup for SchemaDocument {
    fn resolve_ref(&self, name: &str) -> Option<&SchemaNode> {
        self.schemas.get(name)
    }
}

/// Extract the simple name from a `$ref` path.
///
/// `#/components/schemas/Pet`, `#/definitions/Pet` and `#/Pet` all yield `Pet`.
pub fn ref_simple_name(ref_path: &str) -> Result<&str, ResolveError> {
    match ref_path.rsplit('/').next() {
        Some(name) if !name.is_empty() && !name.starts_with('#') => Ok(name),
        _ => Err(ResolveError::InvalidRefFormat(ref_path.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ref_simple_name() {
        assert_eq!(ref_simple_name("#/components/schemas/Pet").unwrap(), "Pet");
        assert_eq!(ref_simple_name("#/definitions/Order").unwrap(), "Order");
        assert_eq!(ref_simple_name("#/Pet").unwrap(), "Pet");
        assert_eq!(ref_simple_name("Pet").unwrap(), "Pet");
    }

    #[test]
    fn test_ref_simple_name_invalid() {
        assert!(matches!(
            ref_simple_name("#/components/schemas/"),
            Err(ResolveError::InvalidRefFormat(_))
        ));
        assert!(ref_simple_name("#").is_err());
    }

    #[test]
    fn test_lookup_by_name() {
        let mut doc = SchemaDocument::default();
        doc.insert("Id", SchemaNode::primitive("string"));
        assert_eq!(doc.resolve_ref("Id"), Some(&SchemaNode::primitive("string")));
        assert!(doc.resolve_ref("Missing").is_none());
        assert_eq!(doc.len(), 1);
    }
}
