use crate::error::ResolveError;
use crate::model::{OperationDescriptor, ParameterDescriptor, ParameterLocation};
use crate::naming::text::route_to_name;
use crate::parse::spec::{
    MediaType, OpenApiSpec, Operation, Parameter, ParameterIn, ParameterOrRef, RequestBody,
    RequestBodyOrRef, Response, ResponseOrRef,
};
use crate::resolve::TypeResolver;
use crate::schema::lower::lower_schema;
use crate::schema::{SchemaNode, ref_simple_name};

use super::models::container_kind;

const JSON_MEDIA_TYPE: &str = "application/json";
const FORM_MEDIA_TYPES: [&str; 2] = ["application/x-www-form-urlencoded", "multipart/form-data"];

/// Every operation of the document, in path then method order.
pub fn build_operations(
    resolver: &TypeResolver<'_>,
    spec: &OpenApiSpec,
) -> Result<Vec<OperationDescriptor>, ResolveError> {
    let mut operations = Vec::new();
    for (path, item) in &spec.paths {
        for (method, operation) in item.operations() {
            let mut parameters = item.parameters.clone();
            parameters.extend(operation.parameters.iter().cloned());
            operations.push(build_operation(
                resolver,
                spec,
                method,
                path,
                operation,
                &parameters,
            )?);
        }
    }
    Ok(operations)
}

pub fn build_operation(
    resolver: &TypeResolver<'_>,
    spec: &OpenApiSpec,
    method: &str,
    path: &str,
    operation: &Operation,
    parameters: &[ParameterOrRef],
) -> Result<OperationDescriptor, ResolveError> {
    let raw_id = match operation.operation_id.as_deref().filter(|id| !id.is_empty()) {
        Some(id) => id.to_string(),
        None => {
            let derived = route_to_name(method, path);
            log::debug!("no operationId for {method} {path}, using {derived}");
            derived
        }
    };

    let mut params = Vec::new();
    for parameter in parameters {
        let parameter = resolve_parameter(spec, parameter)?;
        let descriptor = build_parameter(resolver, parameter)?;
        // Operation-level parameters override path-level ones of the same name and location.
        params.retain(|p: &ParameterDescriptor| {
            !(p.base_name == descriptor.base_name && p.location == descriptor.location)
        });
        params.push(descriptor);
    }
    if let Some(body) = &operation.request_body {
        let body = resolve_request_body(spec, body)?;
        params.extend(body_parameters(resolver, body)?);
    }

    // Required parameters first, declaration order otherwise.
    params.sort_by_key(|p| !p.required);
    let last = params.len().checked_sub(1);
    for (i, param) in params.iter_mut().enumerate() {
        param.has_more = Some(i) != last;
    }

    let mut descriptor = OperationDescriptor {
        operation_id: resolver.names().to_operation_id(&raw_id),
        original_id: operation.operation_id.clone(),
        http_method: method.to_uppercase(),
        path: path.to_string(),
        tags: operation.tags.clone(),
        summary: operation.summary.clone(),
        has_required_params: params.iter().any(|p| p.required),
        deprecated: operation.deprecated,
        parameters: params,
        ..Default::default()
    };

    if let Some(node) = success_schema(spec, operation)? {
        descriptor.return_type = Some(resolver.type_declaration(&node)?);
        descriptor.return_base_type = Some(resolver.base_type(&node)?);
        descriptor.return_container = container_kind(resolver, &node)?;
    }
    Ok(descriptor)
}

fn build_parameter(
    resolver: &TypeResolver<'_>,
    parameter: &Parameter,
) -> Result<ParameterDescriptor, ResolveError> {
    let node = match &parameter.schema {
        Some(schema) => lower_schema(schema)?,
        None => SchemaNode::primitive("string"),
    };
    let location = match parameter.location {
        ParameterIn::Path => ParameterLocation::Path,
        ParameterIn::Query => ParameterLocation::Query,
        ParameterIn::Header => ParameterLocation::Header,
        ParameterIn::Cookie => ParameterLocation::Cookie,
    };
    let required = parameter.required || location == ParameterLocation::Path;
    typed_parameter(resolver, &parameter.name, &node, location, required)
}

fn typed_parameter(
    resolver: &TypeResolver<'_>,
    name: &str,
    node: &SchemaNode,
    location: ParameterLocation,
    required: bool,
) -> Result<ParameterDescriptor, ResolveError> {
    let base_type = resolver.base_type(node)?;
    let mut descriptor = ParameterDescriptor {
        base_name: name.to_string(),
        param_name: resolver.names().to_param_name(name),
        data_type: resolver.type_declaration(node)?,
        location: Some(location),
        required,
        container: container_kind(resolver, node)?,
        is_primitive: resolver.profile().primitives.is_primitive(&base_type),
        pattern: node.pattern().map(str::to_string),
        base_type,
        ..Default::default()
    };
    if let SchemaNode::Enum(enum_node) = node {
        descriptor.is_enum = true;
        descriptor.enum_values = enum_node.literals.clone();
        descriptor.first_enum_value = enum_node.literals.first().cloned();
    }
    Ok(descriptor)
}

/// A JSON (or unknown) body becomes one `body` parameter; a form body one
/// parameter per property of its object schema.
fn body_parameters(
    resolver: &TypeResolver<'_>,
    body: &RequestBody,
) -> Result<Vec<ParameterDescriptor>, ResolveError> {
    let json = body
        .content
        .iter()
        .find(|(media_type, _)| media_type.contains("json"));
    let form = body.content.iter().find(|(media_type, _)| {
        FORM_MEDIA_TYPES
            .iter()
            .any(|form| media_type.starts_with(form))
    });

    if json.is_none() {
        if let Some((_, media)) = form {
            if let Some(params) = form_parameters(resolver, media)? {
                return Ok(params);
            }
        }
    }

    let Some((_, media)) = json.or_else(|| body.content.first()) else {
        return Ok(Vec::new());
    };
    let node = match &media.schema {
        Some(schema) => lower_schema(schema)?,
        None => SchemaNode::primitive("object"),
    };
    Ok(vec![typed_parameter(
        resolver,
        "body",
        &node,
        ParameterLocation::Body,
        body.required,
    )?])
}

fn form_parameters(
    resolver: &TypeResolver<'_>,
    media: &MediaType,
) -> Result<Option<Vec<ParameterDescriptor>>, ResolveError> {
    let Some(schema) = &media.schema else {
        return Ok(None);
    };
    let node = lower_schema(schema)?;
    let target = match &node {
        SchemaNode::Ref(reference) => resolver.lookup(&reference.name)?,
        other => other,
    };
    let SchemaNode::Object(object) = target else {
        return Ok(None);
    };
    object
        .properties
        .iter()
        .map(|(key, property)| {
            typed_parameter(
                resolver,
                key,
                property,
                ParameterLocation::Form,
                object.required.contains(key),
            )
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

/// Schema of the first 2xx response that has content, preferring JSON.
fn success_schema(
    spec: &OpenApiSpec,
    operation: &Operation,
) -> Result<Option<SchemaNode>, ResolveError> {
    for (status, response) in &operation.responses {
        if !status.starts_with('2') {
            continue;
        }
        let response = resolve_response(spec, response)?;
        if response.content.is_empty() {
            continue;
        }
        let media = response
            .content
            .get(JSON_MEDIA_TYPE)
            .or_else(|| response.content.values().find(|m| m.schema.is_some()));
        return match media.and_then(|m| m.schema.as_ref()) {
            Some(schema) => lower_schema(schema).map(Some),
            None => Ok(None),
        };
    }
    Ok(None)
}

fn resolve_parameter<'s>(
    spec: &'s OpenApiSpec,
    parameter: &'s ParameterOrRef,
) -> Result<&'s Parameter, ResolveError> {
    let mut current = parameter;
    let mut seen: Vec<&str> = Vec::new();
    loop {
        match current {
            ParameterOrRef::Parameter(parameter) => return Ok(parameter),
            ParameterOrRef::Ref { ref_path } => {
                let name = ref_simple_name(ref_path)?;
                if seen.contains(&name) {
                    return Err(ResolveError::UnresolvedRef(ref_path.clone()));
                }
                seen.push(name);
                current = spec
                    .components
                    .as_ref()
                    .and_then(|c| c.parameters.get(name))
                    .ok_or_else(|| ResolveError::UnresolvedRef(ref_path.clone()))?;
            }
        }
    }
}

fn resolve_request_body<'s>(
    spec: &'s OpenApiSpec,
    body: &'s RequestBodyOrRef,
) -> Result<&'s RequestBody, ResolveError> {
    match body {
        RequestBodyOrRef::RequestBody(body) => Ok(body),
        RequestBodyOrRef::Ref { ref_path } => {
            let name = ref_simple_name(ref_path)?;
            match spec
                .components
                .as_ref()
                .and_then(|c| c.request_bodies.get(name))
            {
                Some(RequestBodyOrRef::RequestBody(body)) => Ok(body),
                _ => Err(ResolveError::UnresolvedRef(ref_path.clone())),
            }
        }
    }
}

fn resolve_response<'s>(
    spec: &'s OpenApiSpec,
    response: &'s ResponseOrRef,
) -> Result<&'s Response, ResolveError> {
    match response {
        ResponseOrRef::Response(response) => Ok(response),
        ResponseOrRef::Ref { ref_path } => {
            let name = ref_simple_name(ref_path)?;
            match spec.components.as_ref().and_then(|c| c.responses.get(name)) {
                Some(ResponseOrRef::Response(response)) => Ok(response),
                _ => Err(ResolveError::UnresolvedRef(ref_path.clone())),
            }
        }
    }
}
