use crate::error::ResolveError;
use crate::model::{ContainerKind, EnumValue, ModelDescriptor, PropertyDescriptor};
use crate::resolve::TypeResolver;
use crate::schema::{ComposedKind, ComposedNode, ObjectNode, SchemaDocument, SchemaNode};

/// One descriptor per component schema, in document order.
pub fn build_models(
    resolver: &TypeResolver<'_>,
    document: &SchemaDocument,
) -> Result<Vec<ModelDescriptor>, ResolveError> {
    document
        .schemas()
        .map(|(name, node)| build_model(resolver, name, node))
        .collect()
}

pub fn build_model(
    resolver: &TypeResolver<'_>,
    name: &str,
    node: &SchemaNode,
) -> Result<ModelDescriptor, ResolveError> {
    let names = resolver.names();
    let mut model = ModelDescriptor {
        name: name.to_string(),
        class_name: names.to_model_name(name),
        file_name: names.to_model_filename(name),
        ..Default::default()
    };

    match node {
        SchemaNode::Enum(enum_node) => {
            let data_type = resolver.type_declaration(node)?;
            model.is_enum = true;
            model.enum_values = enum_values(resolver, &enum_node.literals, &data_type);
            model.data_type = Some(data_type);
        }
        SchemaNode::Object(object) => {
            model.description = object.description.clone();
            model.own_properties = build_properties(resolver, object)?;
        }
        SchemaNode::Composed(composed) => {
            if let Some(parent) = composed.parent_ref() {
                model.parent_name = Some(parent.to_string());
                model.parent_class = Some(names.to_model_name(parent));
            }
            let mut visiting = vec![name.to_string()];
            model.own_properties = composed_properties(resolver, composed, &mut visiting)?;
        }
        SchemaNode::Array(_) | SchemaNode::Map(_) => {
            let tagged = node.tagged(name);
            model.is_alias = true;
            model.container = container_kind(resolver, node)?;
            model.data_type = Some(resolver.type_declaration(&tagged)?);
            model.item_type = Some(resolver.base_type(&tagged)?);
        }
        SchemaNode::Primitive(_) | SchemaNode::Ref(_) => {
            model.is_alias = true;
            model.data_type = Some(resolver.type_declaration(node)?);
        }
    }

    model.all_vars = model.own_properties.clone();
    model.refresh_derived();
    Ok(model)
}

fn build_properties(
    resolver: &TypeResolver<'_>,
    object: &ObjectNode,
) -> Result<Vec<PropertyDescriptor>, ResolveError> {
    object
        .properties
        .iter()
        .map(|(key, node)| build_property(resolver, key, node, object.required.contains(key)))
        .collect()
}

/// Properties of an `allOf` model: every referenced member flattened in
/// member order, then the inline members. The first declaration of a key wins.
fn composed_properties(
    resolver: &TypeResolver<'_>,
    composed: &ComposedNode,
    visiting: &mut Vec<String>,
) -> Result<Vec<PropertyDescriptor>, ResolveError> {
    if composed.kind != ComposedKind::AllOf {
        return Ok(Vec::new());
    }

    let mut properties: Vec<PropertyDescriptor> = Vec::new();
    for member in &composed.members {
        let inherited = match member {
            SchemaNode::Ref(reference) => {
                if visiting.contains(&reference.name) {
                    log::warn!("allOf cycle through {}", reference.name);
                    continue;
                }
                let target = resolver.lookup(&reference.name)?;
                visiting.push(reference.name.clone());
                let collected = member_properties(resolver, target, visiting);
                visiting.pop();
                collected?
            }
            other => member_properties(resolver, other, visiting)?,
        };
        for property in inherited {
            if !properties.iter().any(|p| p.base_name == property.base_name) {
                properties.push(property);
            }
        }
    }
    Ok(properties)
}

fn member_properties(
    resolver: &TypeResolver<'_>,
    node: &SchemaNode,
    visiting: &mut Vec<String>,
) -> Result<Vec<PropertyDescriptor>, ResolveError> {
    match node {
        SchemaNode::Object(object) => build_properties(resolver, object),
        SchemaNode::Composed(composed) => composed_properties(resolver, composed, visiting),
        _ => Ok(Vec::new()),
    }
}

pub fn build_property(
    resolver: &TypeResolver<'_>,
    key: &str,
    node: &SchemaNode,
    required: bool,
) -> Result<PropertyDescriptor, ResolveError> {
    let profile = resolver.profile();
    let names = resolver.names();
    let data_type = resolver.type_declaration(node)?;
    let base_type = resolver.base_type(node)?;

    let mut property = PropertyDescriptor {
        base_name: key.to_string(),
        name: names.to_identifier(key),
        container: container_kind(resolver, node)?,
        required,
        is_primitive: profile.primitives.is_primitive(&base_type),
        pattern: node.pattern().map(str::to_string),
        description: match node {
            SchemaNode::Object(object) => object.description.clone(),
            _ => None,
        },
        default_value: node
            .default_value()
            .zip(profile.rules.default_literals)
            .and_then(|(value, literals)| literals.format(node.abstract_type(), value)),
        data_type,
        base_type,
        ..Default::default()
    };

    if let SchemaNode::Enum(enum_node) = node {
        property.is_enum = true;
        property.enum_name = Some(names.to_enum_name(&property.name));
        property.enum_values = enum_values(resolver, &enum_node.literals, &property.data_type);
        property.first_enum_value = property.enum_values.first().map(|v| v.value.clone());
    }
    Ok(property)
}

fn enum_values(resolver: &TypeResolver<'_>, literals: &[String], data_type: &str) -> Vec<EnumValue> {
    let names = resolver.names();
    literals
        .iter()
        .map(|literal| EnumValue {
            name: names.to_enum_var_name(literal, data_type),
            value: names.to_enum_value(literal, data_type),
        })
        .collect()
}

/// Container kind of `node`, looking through one `$ref` to a container alias.
pub(crate) fn container_kind(
    resolver: &TypeResolver<'_>,
    node: &SchemaNode,
) -> Result<Option<ContainerKind>, ResolveError> {
    let target = match node {
        SchemaNode::Ref(reference) => resolver.lookup(&reference.name)?,
        other => other,
    };
    Ok(match target {
        SchemaNode::Array(_) => Some(ContainerKind::Array),
        SchemaNode::Map(_) => Some(ContainerKind::Map),
        _ => None,
    })
}

/// Mark properties whose type is the enclosing model itself.
pub fn detect_recursive_models(resolver: &TypeResolver<'_>, models: &mut [ModelDescriptor]) {
    let primitives = &resolver.profile().primitives;
    for model in models.iter_mut() {
        let class_name = model.class_name.clone();
        let is_self = |ty: &str| !primitives.is_builtin(ty) && ty.eq_ignore_ascii_case(&class_name);
        for property in model
            .own_properties
            .iter_mut()
            .chain(model.all_vars.iter_mut())
        {
            if is_self(&property.data_type) || is_self(&property.base_type) {
                property.is_recursive_model = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;
    use crate::profile::DefaultLiterals;
    use crate::profile::tests::go_like;
    use crate::schema::{EnumNode, PrimitiveNode};

    fn object(props: &[(&str, SchemaNode)], required: &[&str]) -> SchemaNode {
        SchemaNode::Object(ObjectNode {
            properties: props
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect::<IndexMap<_, _>>(),
            required: required.iter().map(|s| s.to_string()).collect(),
            description: None,
        })
    }

    fn document() -> SchemaDocument {
        let mut doc = SchemaDocument::default();
        doc.insert(
            "Pet",
            object(
                &[
                    ("id", SchemaNode::primitive("long")),
                    ("name", SchemaNode::primitive("string")),
                ],
                &["name"],
            ),
        );
        doc.insert(
            "Dog",
            SchemaNode::Composed(ComposedNode {
                kind: ComposedKind::AllOf,
                members: vec![
                    SchemaNode::reference("Pet"),
                    object(&[("bark", SchemaNode::primitive("boolean"))], &[]),
                ],
                schema_name: None,
            }),
        );
        doc.insert("Names", SchemaNode::array(SchemaNode::primitive("string")));
        doc.insert(
            "Status",
            SchemaNode::Enum(EnumNode {
                base_type: "string".into(),
                literals: vec!["available".into(), "on-hold".into()],
                default: None,
            }),
        );
        doc
    }

    #[test]
    fn test_object_model() {
        let profile = go_like();
        let doc = document();
        let resolver = TypeResolver::new(&profile, &doc);
        let models = build_models(&resolver, &doc).unwrap();
        let pet = &models[0];
        assert_eq!(pet.class_name, "Pet");
        assert_eq!(pet.file_name, "model_pet");
        assert_eq!(pet.own_properties[0].name, "Id");
        assert_eq!(pet.own_properties[0].data_type, "int64");
        assert!(pet.own_properties[0].is_primitive);
        assert_eq!(pet.required_vars, vec!["name"]);
        assert!(!pet.own_properties[1].has_more);
    }

    #[test]
    fn test_all_of_model_flattens_parent() {
        let profile = go_like();
        let doc = document();
        let resolver = TypeResolver::new(&profile, &doc);
        let models = build_models(&resolver, &doc).unwrap();
        let dog = &models[1];
        assert_eq!(dog.parent_name.as_deref(), Some("Pet"));
        let names: Vec<_> = dog.own_properties.iter().map(|p| p.base_name.as_str()).collect();
        assert_eq!(names, vec!["id", "name", "bark"]);
        assert!(dog.own_properties[1].required);
        assert_eq!(dog.all_vars.len(), 3);
    }

    #[test]
    fn test_missing_parent_is_fatal() {
        let profile = go_like();
        let doc = SchemaDocument::default();
        let resolver = TypeResolver::new(&profile, &doc);
        let node = SchemaNode::Composed(ComposedNode {
            kind: ComposedKind::AllOf,
            members: vec![SchemaNode::reference("Ghost")],
            schema_name: None,
        });
        let err = build_model(&resolver, "Orphan", &node).unwrap_err();
        assert!(matches!(err, ResolveError::UnresolvedRef(name) if name == "Ghost"));
    }

    #[test]
    fn test_alias_and_enum_models() {
        let profile = go_like();
        let doc = document();
        let resolver = TypeResolver::new(&profile, &doc);
        let models = build_models(&resolver, &doc).unwrap();

        let names = &models[2];
        assert!(names.is_alias);
        assert_eq!(names.container, Some(ContainerKind::Array));
        assert_eq!(names.data_type.as_deref(), Some("[]string"));
        assert_eq!(names.item_type.as_deref(), Some("string"));

        let status = &models[3];
        assert!(status.is_enum);
        assert_eq!(status.data_type.as_deref(), Some("string"));
        assert_eq!(status.enum_values[1].name, "ON_HOLD");
    }

    #[test]
    fn test_property_default_follows_profile_literals() {
        let node = SchemaNode::Primitive(PrimitiveNode {
            type_name: "boolean".into(),
            pattern: None,
            default: Some(serde_json::json!(true)),
        });
        let doc = SchemaDocument::default();

        let profile = go_like();
        let resolver = TypeResolver::new(&profile, &doc);
        let property = build_property(&resolver, "active", &node, false).unwrap();
        assert_eq!(property.default_value, None);

        let mut profile = go_like();
        profile.rules.default_literals = Some(DefaultLiterals {
            quote: '\'',
            true_literal: "True",
            false_literal: "False",
        });
        let resolver = TypeResolver::new(&profile, &doc);
        let property = build_property(&resolver, "active", &node, false).unwrap();
        assert_eq!(property.default_value.as_deref(), Some("True"));
    }

    #[test]
    fn test_inline_enum_property() {
        let profile = go_like();
        let doc = SchemaDocument::default();
        let resolver = TypeResolver::new(&profile, &doc);
        let node = SchemaNode::Enum(EnumNode {
            base_type: "integer".into(),
            literals: vec!["1".into(), "-2".into()],
            default: None,
        });
        let property = build_property(&resolver, "level", &node, false).unwrap();
        assert!(property.is_enum);
        assert_eq!(property.enum_name.as_deref(), Some("LEVEL"));
        assert_eq!(property.first_enum_value.as_deref(), Some("1"));
        assert_eq!(property.enum_values[1].name, "MINUS_2");
    }

    #[test]
    fn test_recursive_property_detected() {
        let profile = go_like();
        let mut doc = SchemaDocument::default();
        doc.insert(
            "Node",
            object(
                &[
                    ("children", SchemaNode::array(SchemaNode::reference("Node"))),
                    ("label", SchemaNode::primitive("string")),
                ],
                &[],
            ),
        );
        let resolver = TypeResolver::new(&profile, &doc);
        let mut models = build_models(&resolver, &doc).unwrap();
        detect_recursive_models(&resolver, &mut models);
        assert!(models[0].own_properties[0].is_recursive_model);
        assert!(!models[0].own_properties[1].is_recursive_model);
        assert_eq!(models[0].own_properties[0].container, Some(ContainerKind::Array));
    }
}
