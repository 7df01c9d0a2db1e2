//! Schema node to declared type string.

use crate::error::ResolveError;
use crate::naming::NameSanitizer;
use crate::profile::LanguageProfile;
use crate::schema::{ArrayNode, ComposedNode, RefLookup, SchemaNode};

const ARRAY_ITEMS_SUFFIX: &str = "Items";

/// Resolves [`SchemaNode`]s to type declarations for one language profile.
///
/// Resolution is pure. The only failure is a `$ref` that does not name a
/// schema of the document.
pub struct TypeResolver<'a> {
    profile: &'a LanguageProfile,
    document: &'a dyn RefLookup,
}

impl<'a> TypeResolver<'a> {
    pub fn new(profile: &'a LanguageProfile, document: &'a dyn RefLookup) -> Self {
        Self { profile, document }
    }

    pub fn profile(&self) -> &'a LanguageProfile {
        self.profile
    }

    pub fn names(&self) -> NameSanitizer<'a> {
        NameSanitizer::new(self.profile)
    }

    /// Declared type of `node`, e.g. `[]int32` or `map[string]Pet`.
    pub fn type_declaration(&self, node: &SchemaNode) -> Result<String, ResolveError> {
        let mut expanding = Vec::new();
        self.declare(node, &mut expanding)
    }

    /// Declared type of the element of a container, or of `node` itself otherwise.
    pub fn base_type(&self, node: &SchemaNode) -> Result<String, ResolveError> {
        let mut current = node.clone();
        let mut seen: Vec<String> = Vec::new();
        while let Some(element) = self.container_element(&current)? {
            if let SchemaNode::Ref(r) = &current {
                if seen.contains(&r.name) {
                    break;
                }
                seen.push(r.name.clone());
            }
            current = element;
        }
        self.type_declaration(&current)
    }

    /// Element node of an array or map, following `$ref`s to container aliases.
    pub fn container_element(&self, node: &SchemaNode) -> Result<Option<SchemaNode>, ResolveError> {
        match node {
            SchemaNode::Array(a) => Ok(Some((*a.items).clone())),
            SchemaNode::Map(m) => Ok(Some((*m.value).clone())),
            SchemaNode::Ref(r) => {
                let target = self.lookup(&r.name)?;
                match target {
                    SchemaNode::Array(a) => Ok(Some((*a.items).clone())),
                    SchemaNode::Map(m) => Ok(Some((*m.value).clone())),
                    _ => Ok(None),
                }
            }
            _ => Ok(None),
        }
    }

    /// Schema a `$ref` simple name points at.
    pub fn lookup(&self, name: &str) -> Result<&'a SchemaNode, ResolveError> {
        self.document
            .resolve_ref(name)
            .ok_or_else(|| ResolveError::UnresolvedRef(name.to_string()))
    }

    fn declare(&self, node: &SchemaNode, expanding: &mut Vec<String>) -> Result<String, ResolveError> {
        match node {
            SchemaNode::Array(array) => {
                if let Some(name) = self.composed_items_name(array) {
                    return Ok(self.profile.containers.wrap_array(&name));
                }
                let inner = self.declare(&array.items, expanding)?;
                Ok(self.profile.containers.wrap_array(&inner))
            }
            SchemaNode::Map(map) => {
                let inner = self.declare(&map.value, expanding)?;
                Ok(self.profile.containers.wrap_map(&inner))
            }
            SchemaNode::Ref(reference) => {
                let target = self.lookup(&reference.name)?;
                if target.is_container() && !expanding.contains(&reference.name) {
                    log::debug!("expanding container alias {}", reference.name);
                    expanding.push(reference.name.clone());
                    let declared = self.declare(&target.tagged(&reference.name), expanding);
                    expanding.pop();
                    return declared;
                }
                Ok(self.map_type(&reference.name))
            }
            SchemaNode::Composed(composed) => self.declare_composed(composed, expanding),
            other => Ok(self.map_type(other.abstract_type())),
        }
    }

    /// Synthesized element name for arrays of anonymous composed schemas.
    fn composed_items_name(&self, array: &ArrayNode) -> Option<String> {
        let SchemaNode::Composed(composed) = array.items.as_ref() else {
            return None;
        };
        let tag = array
            .schema_name
            .as_deref()
            .or(composed.schema_name.as_deref())?;
        let model = self
            .names()
            .to_model_name(&format!("{}{tag}", composed.kind.prefix()));
        Some(format!("{model}{ARRAY_ITEMS_SUFFIX}"))
    }

    fn declare_composed(
        &self,
        composed: &ComposedNode,
        expanding: &mut Vec<String>,
    ) -> Result<String, ResolveError> {
        if let Some(tag) = &composed.schema_name {
            return Ok(self
                .names()
                .to_model_name(&format!("{}{tag}", composed.kind.prefix())));
        }
        if let [single] = composed.members.as_slice() {
            return self.declare(single, expanding);
        }
        Ok(self.map_type("object"))
    }

    /// Map an abstract or referenced type name through the type table.
    pub fn map_type(&self, schema_type: &str) -> String {
        let profile = self.profile;
        match profile.type_table.get(schema_type) {
            Some(mapped) if profile.primitives.is_builtin(mapped) => mapped.to_string(),
            Some(mapped) => self.names().to_model_name(mapped),
            None if profile.primitives.is_builtin(schema_type)
                || profile.type_table.contains_value(schema_type) =>
            {
                schema_type.to_string()
            }
            None => self.names().to_model_name(schema_type),
        }
    }
}

/// Free-function form of [`TypeResolver::type_declaration`].
pub fn resolve_type(
    node: &SchemaNode,
    profile: &LanguageProfile,
    document: &dyn RefLookup,
) -> Result<String, ResolveError> {
    TypeResolver::new(profile, document).type_declaration(node)
}
