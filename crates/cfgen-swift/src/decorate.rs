use cfgen_core::model::{GenerationOutput, ModelDescriptor, PropertyDescriptor};

/// Types that must be wrapped as optional scalars in the generated models.
const SCALAR_TYPES: &[&str] = &["Int", "Int32", "Int64", "Float", "Double", "Bool"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoration {
    pub unwrap_required: bool,
    /// Swift 5 coding keys and `Any` returns.
    pub swift5: bool,
}

pub fn decorate(output: &mut GenerationOutput, decoration: Decoration) {
    for model in &mut output.models {
        decorate_model(model, decoration);
    }
    for operation in &mut output.operations {
        for param in &mut operation.parameters {
            param.is_optional_scalar =
                is_optional_scalar(&param.data_type, param.required, decoration.unwrap_required);
        }
        if decoration.swift5 && operation.return_type.as_deref() == Some("Any") {
            log::debug!("dropping Any return of {}", operation.operation_id);
            operation.return_type = None;
            operation.return_base_type = None;
            operation.return_container = None;
        }
    }
}

fn decorate_model(model: &mut ModelDescriptor, decoration: Decoration) {
    let vars = model
        .own_properties
        .iter_mut()
        .chain(model.all_vars.iter_mut())
        .chain(model.parent_vars.iter_mut());
    for property in vars {
        decorate_property(property, decoration);
    }
    if decoration.swift5 {
        model.has_escaped_property_names = model.all_vars.iter().any(|p| p.is_escaped_name);
    }
}

fn decorate_property(property: &mut PropertyDescriptor, decoration: Decoration) {
    property.is_optional_scalar = is_optional_scalar(
        &property.data_type,
        property.required,
        decoration.unwrap_required,
    );
    if decoration.swift5 {
        property.is_escaped_name = property.name != property.base_name;
    }
}

pub fn is_optional_scalar(data_type: &str, required: bool, unwrap_required: bool) -> bool {
    (!unwrap_required || !required) && SCALAR_TYPES.contains(&data_type)
}

#[cfg(test)]
mod tests {
    use cfgen_core::config::LanguageId;
    use cfgen_core::model::{OperationDescriptor, ParameterDescriptor};

    use super::*;

    fn property(base_name: &str, name: &str, data_type: &str, required: bool) -> PropertyDescriptor {
        PropertyDescriptor {
            base_name: base_name.to_string(),
            name: name.to_string(),
            data_type: data_type.to_string(),
            base_type: data_type.to_string(),
            required,
            ..Default::default()
        }
    }

    fn output() -> GenerationOutput {
        let props = vec![
            property("id", "id", "Int64", true),
            property("created_at", "createdAt", "Date", false),
            property("score", "score", "Double", false),
        ];
        GenerationOutput {
            language: LanguageId::Swift5,
            models: vec![ModelDescriptor {
                name: "Pet".into(),
                class_name: "Pet".into(),
                own_properties: props.clone(),
                all_vars: props,
                ..Default::default()
            }],
            operations: vec![OperationDescriptor {
                operation_id: "getAnything".into(),
                return_type: Some("Any".into()),
                return_base_type: Some("Any".into()),
                parameters: vec![ParameterDescriptor {
                    param_name: "limit".into(),
                    data_type: "Int".into(),
                    required: true,
                    ..Default::default()
                }],
                ..Default::default()
            }],
        }
    }

    #[test]
    fn test_optional_scalar() {
        assert!(is_optional_scalar("Int", true, false));
        assert!(!is_optional_scalar("Int", true, true));
        assert!(is_optional_scalar("Bool", false, true));
        assert!(!is_optional_scalar("String", false, false));
        assert!(!is_optional_scalar("Decimal", false, false));
    }

    #[test]
    fn test_swift5_decoration() {
        let mut output = output();
        decorate(
            &mut output,
            Decoration {
                unwrap_required: true,
                swift5: true,
            },
        );
        let pet = &output.models[0];
        assert!(pet.has_escaped_property_names);
        let escaped: Vec<_> = pet.all_vars.iter().map(|p| p.is_escaped_name).collect();
        assert_eq!(escaped, vec![false, true, false]);
        let optional: Vec<_> = pet.own_properties.iter().map(|p| p.is_optional_scalar).collect();
        assert_eq!(optional, vec![false, false, true]);

        let op = &output.operations[0];
        assert_eq!(op.return_type, None);
        assert_eq!(op.return_base_type, None);
        assert!(!op.parameters[0].is_optional_scalar);
    }

    #[test]
    fn test_swift4_keeps_any_and_names() {
        let mut output = output();
        decorate(
            &mut output,
            Decoration {
                unwrap_required: false,
                swift5: false,
            },
        );
        let pet = &output.models[0];
        assert!(!pet.has_escaped_property_names);
        assert!(pet.all_vars.iter().all(|p| !p.is_escaped_name));
        assert!(pet.own_properties[0].is_optional_scalar);
        assert_eq!(output.operations[0].return_type.as_deref(), Some("Any"));
        assert!(output.operations[0].parameters[0].is_optional_scalar);
    }
}
