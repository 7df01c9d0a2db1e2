use serde::Serialize;

use crate::config::LanguageId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    Array,
    Map,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumValue {
    pub name: String,
    pub value: String,
}

/// A `/regex/flags` pattern split for languages with named regex flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegexPattern {
    pub regex: String,
    pub modifiers: Vec<String>,
}

/// One property of a model.
///
/// `has_more` and `has_more_required` are positional and do not take part in
/// equality.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PropertyDescriptor {
    /// Key in the schema, never changed after construction.
    pub base_name: String,
    pub name: String,
    pub data_type: String,
    pub base_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerKind>,
    pub required: bool,
    pub is_enum: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<EnumValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_enum_value: Option<String>,
    pub is_primitive: bool,
    pub is_recursive_model: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Schema `default` as a target-language literal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    pub has_more: bool,
    pub has_more_required: bool,
    /// Swift: emitted as an optional scalar.
    pub is_optional_scalar: bool,
    /// Swift 5: `name` differs from `base_name` and needs a coding key.
    pub is_escaped_name: bool,
    /// Python: `pattern` split into regex and flags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<RegexPattern>,
    /// JavaScript: JSDoc `@type` of the property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jsdoc_type: Option<String>,
}

impl PropertyDescriptor {
    pub fn is_container(&self) -> bool {
        self.container.is_some()
    }
}

impl PartialEq for PropertyDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.base_name == other.base_name
            && self.name == other.name
            && self.data_type == other.data_type
            && self.base_type == other.base_type
            && self.container == other.container
            && self.required == other.required
            && self.is_enum == other.is_enum
            && self.enum_name == other.enum_name
            && self.enum_values == other.enum_values
            && self.first_enum_value == other.first_enum_value
            && self.is_primitive == other.is_primitive
            && self.is_recursive_model == other.is_recursive_model
            && self.pattern == other.pattern
            && self.description == other.description
            && self.default_value == other.default_value
            && self.is_optional_scalar == other.is_optional_scalar
            && self.is_escaped_name == other.is_escaped_name
            && self.regex == other.regex
            && self.jsdoc_type == other.jsdoc_type
    }
}

/// Recompute `has_more` and `has_more_required` over `properties`.
pub fn mark_ordering(properties: &mut [PropertyDescriptor]) {
    let last = properties.len().checked_sub(1);
    let last_required = properties.iter().rposition(|p| p.required);
    for (i, property) in properties.iter_mut().enumerate() {
        property.has_more = Some(i) != last;
        property.has_more_required = property.required && Some(i) != last_required;
    }
}

/// One schema definition, decorated for templates.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModelDescriptor {
    /// Key of the schema in the document.
    pub name: String,
    pub class_name: String,
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Schema key of the parent model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_class: Option<String>,
    pub is_enum: bool,
    pub is_alias: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerKind>,
    /// Underlying type of alias and enum models.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<EnumValue>,
    pub own_properties: Vec<PropertyDescriptor>,
    /// Own properties before inherited ones were removed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub all_vars: Vec<PropertyDescriptor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parent_vars: Vec<PropertyDescriptor>,
    pub required_vars: Vec<String>,
    pub has_enums: bool,
    pub has_escaped_property_names: bool,
}

impl ModelDescriptor {
    pub fn has_parent(&self) -> bool {
        self.parent_name.is_some()
    }

    pub fn enum_properties(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.own_properties.iter().filter(|p| p.is_enum)
    }

    /// Refresh the flags derived from `own_properties`.
    pub fn refresh_derived(&mut self) {
        mark_ordering(&mut self.own_properties);
        self.has_enums = self.own_properties.iter().any(|p| p.is_enum);
        self.required_vars = self
            .own_properties
            .iter()
            .filter(|p| p.required)
            .map(|p| p.base_name.clone())
            .collect();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
    Body,
    Form,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParameterDescriptor {
    pub base_name: String,
    pub param_name: String,
    pub data_type: String,
    pub base_type: String,
    pub location: Option<ParameterLocation>,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerKind>,
    pub is_enum: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_enum_value: Option<String>,
    pub is_primitive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    pub has_more: bool,
    /// JavaScript: another required parameter follows.
    pub has_more_required: bool,
    /// JavaScript: another optional parameter follows.
    pub has_more_optional: bool,
    /// Go: exported form of `param_name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_name: Option<String>,
    /// Go: suffix of the `optional.<Type>` wrapper for optional parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional_data_type: Option<String>,
    pub is_optional_scalar: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<RegexPattern>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jsdoc_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OperationDescriptor {
    pub operation_id: String,
    /// The id as written in the document, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_id: Option<String>,
    pub http_method: String,
    pub path: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub parameters: Vec<ParameterDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_base_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_container: Option<ContainerKind>,
    pub has_required_params: bool,
    pub deprecated: bool,
    /// JavaScript: call signature of the generated method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arg_list: Option<String>,
    /// JavaScript: JSDoc type of the return value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jsdoc_type: Option<String>,
    /// Python Flask: module path of the handling controller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller: Option<String>,
}

/// Everything one generation run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationOutput {
    pub language: LanguageId,
    pub models: Vec<ModelDescriptor>,
    pub operations: Vec<OperationDescriptor>,
}

impl GenerationOutput {
    pub fn model(&self, name: &str) -> Option<&ModelDescriptor> {
        self.models.iter().find(|m| m.name == name)
    }

    pub fn operation(&self, operation_id: &str) -> Option<&OperationDescriptor> {
        self.operations
            .iter()
            .find(|op| op.operation_id == operation_id)
    }
}
