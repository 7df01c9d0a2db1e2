use cfgen_core::model::{GenerationOutput, OperationDescriptor, ParameterDescriptor, RegexPattern};
use cfgen_core::naming::NameSanitizer;
use cfgen_core::naming::text::sanitize_name;
use heck::ToSnakeCase;

use crate::profile::python_flask_profile;

const DEFAULT_TAG: &str = "default";

/// Fill controller paths, Python regexes and sanitized parameter names.
pub fn decorate(output: &mut GenerationOutput, controller_package: &str) {
    let profile = python_flask_profile();
    let names = NameSanitizer::new(&profile);

    for model in &mut output.models {
        let vars = model
            .own_properties
            .iter_mut()
            .chain(model.all_vars.iter_mut())
            .chain(model.parent_vars.iter_mut());
        for property in vars {
            property.regex = property.pattern.as_deref().map(regex_pattern);
        }
    }

    for operation in &mut output.operations {
        operation.controller = Some(controller_path(&names, operation, controller_package));
        for param in &mut operation.parameters {
            decorate_parameter(param);
        }
    }
}

fn controller_path(
    names: &NameSanitizer<'_>,
    operation: &OperationDescriptor,
    controller_package: &str,
) -> String {
    let tag = operation
        .tags
        .first()
        .map(String::as_str)
        .unwrap_or(DEFAULT_TAG);
    format!(
        "{controller_package}.{}",
        names.to_api_name(tag).to_snake_case()
    )
}

fn decorate_parameter(param: &mut ParameterDescriptor) {
    let sanitized = sanitize_name(&param.base_name);
    if sanitized != param.base_name {
        log::warn!(
            "parameter name {} sanitized to {sanitized}",
            param.base_name
        );
        param.base_name = sanitized;
    }
    param.regex = param.pattern.as_deref().map(regex_pattern);
}

/// Split a `/regex/flags` pattern into the regex body and Python `re` flag names.
/// A pattern not written in that form is taken as the bare regex.
pub fn regex_pattern(pattern: &str) -> RegexPattern {
    let delimited = pattern.starts_with('/') && pattern.rfind('/').is_some_and(|i| i >= 2);
    let pattern = if delimited {
        pattern.to_string()
    } else {
        format!("/{pattern}/")
    };
    let end = pattern.rfind('/').unwrap_or(0);
    let regex = pattern[1..end].replace('\'', "\\'");
    let modifiers = pattern[end..]
        .chars()
        .filter_map(modifier_name)
        .map(str::to_string)
        .collect();
    RegexPattern { regex, modifiers }
}

fn modifier_name(flag: char) -> Option<&'static str> {
    match flag {
        'i' => Some("IGNORECASE"),
        'l' => Some("LOCALE"),
        'm' => Some("MULTILINE"),
        's' => Some("DOTALL"),
        'u' => Some("UNICODE"),
        'x' => Some("VERBOSE"),
        _ => None,
    }
}
