use cfgen_core::model::{GenerationOutput, ParameterDescriptor};
use cfgen_core::naming::text::upper_first;
use heck::ToUpperCamelCase;

/// Fill the Go-only fields: exported parameter names, `optional.<Type>`
/// wrappers for optional parameters and `Get`-style method names.
pub fn decorate(output: &mut GenerationOutput) {
    for operation in &mut output.operations {
        operation.http_method = operation.http_method.to_lowercase().to_upper_camel_case();
        for param in &mut operation.parameters {
            decorate_parameter(param);
        }
    }
}

fn decorate_parameter(param: &mut ParameterDescriptor) {
    param.export_name = Some(upper_first(&param.param_name));
    if !param.required {
        param.optional_data_type = Some(optional_data_type(&param.data_type));
    }
}

/// Suffix of the `optional` package wrapper for `data_type`.
pub fn optional_data_type(data_type: &str) -> String {
    if data_type == "time.Time" {
        "Time".to_string()
    } else {
        upper_first(data_type)
    }
}
