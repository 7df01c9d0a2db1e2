use cfgen_core::model::{GenerationOutput, OperationDescriptor, PropertyDescriptor};

use crate::profile::BUILTINS;

/// Module path prefix of generated model classes in JSDoc.
const MODEL_MODULE: &str = "module:model/";

/// Fill `has_more_required`/`has_more_optional` on parameters, the
/// positional argument list of every operation, and JSDoc types.
pub fn decorate(output: &mut GenerationOutput) {
    for model in &mut output.models {
        for property in &mut model.own_properties {
            property.jsdoc_type = Some(property_jsdoc_type(&model.class_name, property));
        }
    }
    for operation in &mut output.operations {
        mark_parameter_runs(operation);
        operation.arg_list = Some(arg_list(operation));
        for param in &mut operation.parameters {
            param.jsdoc_type = Some(jsdoc_type(&param.data_type));
        }
        operation.jsdoc_type = operation.return_type.as_deref().map(jsdoc_type);
    }
}

/// JSDoc spelling of a type declaration. `[T]` becomes `Array.<T>`,
/// `{String: T}` becomes `Object.<String, T>`, and anything that is not a
/// built-in names a model module.
pub fn jsdoc_type(declaration: &str) -> String {
    if let Some(inner) = declaration
        .strip_prefix('[')
        .and_then(|d| d.strip_suffix(']'))
    {
        return format!("Array.<{}>", jsdoc_type(inner));
    }
    if let Some(inner) = declaration
        .strip_prefix("{String: ")
        .and_then(|d| d.strip_suffix('}'))
    {
        return format!("Object.<String, {}>", jsdoc_type(inner));
    }
    if BUILTINS.contains(&declaration) {
        declaration.to_string()
    } else {
        format!("{MODEL_MODULE}{declaration}")
    }
}

/// Inline enums live on their model class.
fn property_jsdoc_type(class_name: &str, property: &PropertyDescriptor) -> String {
    match property.enum_name.as_deref().filter(|_| property.is_enum) {
        Some(enum_name) => format!("{MODEL_MODULE}{class_name}.{enum_name}"),
        None => jsdoc_type(&property.data_type),
    }
}

/// The last required and the last optional parameter end their run; every
/// other parameter has more of both.
fn mark_parameter_runs(operation: &mut OperationDescriptor) {
    let last_required = operation.parameters.iter().rposition(|p| p.required);
    let last_optional = operation.parameters.iter().rposition(|p| !p.required);
    for (i, param) in operation.parameters.iter_mut().enumerate() {
        let ends_run = Some(i) == last_required || Some(i) == last_optional;
        param.has_more_required = !ends_run;
        param.has_more_optional = !ends_run;
    }
}

/// Required parameter names in order, then `opts` when any parameter is optional.
pub fn arg_list(operation: &OperationDescriptor) -> String {
    let mut args: Vec<&str> = operation
        .parameters
        .iter()
        .filter(|p| p.required)
        .map(|p| p.param_name.as_str())
        .collect();
    if operation.parameters.iter().any(|p| !p.required) {
        args.push("opts");
    }
    args.join(", ")
}

#[cfg(test)]
mod tests {
    use cfgen_core::config::LanguageId;
    use cfgen_core::model::ParameterDescriptor;

    use super::*;

    fn param(name: &str, required: bool) -> ParameterDescriptor {
        ParameterDescriptor {
            param_name: name.to_string(),
            required,
            ..Default::default()
        }
    }

    fn operation(params: Vec<ParameterDescriptor>) -> OperationDescriptor {
        OperationDescriptor {
            operation_id: "op".into(),
            parameters: params,
            ..Default::default()
        }
    }

    #[test]
    fn test_arg_list() {
        let op = operation(vec![param("petId", true), param("name", true), param("limit", false)]);
        assert_eq!(arg_list(&op), "petId, name, opts");
        assert_eq!(arg_list(&operation(vec![param("petId", true)])), "petId");
        assert_eq!(arg_list(&operation(vec![param("limit", false)])), "opts");
        assert_eq!(arg_list(&operation(Vec::new())), "");
    }

    #[test]
    fn test_jsdoc_type() {
        assert_eq!(jsdoc_type("String"), "String");
        assert_eq!(jsdoc_type("Pet"), "module:model/Pet");
        assert_eq!(jsdoc_type("[Pet]"), "Array.<module:model/Pet>");
        assert_eq!(jsdoc_type("{String: [Number]}"), "Object.<String, Array.<Number>>");
    }

    #[test]
    fn test_enum_property_jsdoc_type() {
        let property = PropertyDescriptor {
            data_type: "String".into(),
            is_enum: true,
            enum_name: Some("StatusEnum".into()),
            ..Default::default()
        };
        assert_eq!(property_jsdoc_type("Pet", &property), "module:model/Pet.StatusEnum");
    }

    #[test]
    fn test_parameter_runs() {
        let mut output = GenerationOutput {
            language: LanguageId::Javascript,
            models: Vec::new(),
            operations: vec![operation(vec![
                param("a", true),
                param("b", true),
                param("c", false),
                param("d", false),
            ])],
        };
        decorate(&mut output);
        let flags: Vec<_> = output.operations[0]
            .parameters
            .iter()
            .map(|p| (p.param_name.as_str(), p.has_more_required, p.has_more_optional))
            .collect();
        assert_eq!(
            flags,
            vec![
                ("a", true, true),
                ("b", false, false),
                ("c", true, true),
                ("d", false, false),
            ]
        );
        assert_eq!(output.operations[0].arg_list.as_deref(), Some("a, b, opts"));
    }
}
