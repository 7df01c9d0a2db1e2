pub mod schema;
pub mod spec;

use crate::error::ParseError;
use spec::OpenApiSpec;

/// Parse an OpenAPI document from YAML.
pub fn from_yaml(input: &str) -> Result<OpenApiSpec, ParseError> {
    let spec: OpenApiSpec = serde_yaml_ng::from_str(input)?;
    validate_version(&spec)?;
    Ok(spec)
}

/// Parse an OpenAPI document from JSON.
pub fn from_json(input: &str) -> Result<OpenApiSpec, ParseError> {
    let spec: OpenApiSpec = serde_json::from_str(input)?;
    validate_version(&spec)?;
    Ok(spec)
}

fn validate_version(spec: &OpenApiSpec) -> Result<(), ParseError> {
    if !spec.openapi.starts_with("3.") {
        return Err(ParseError::UnsupportedVersion(spec.openapi.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_swagger_two() {
        let yaml = r#"
openapi: "2.0"
info:
  title: Old
  version: "1"
"#;
        let err = from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedVersion(v) if v == "2.0"));
    }

    #[test]
    fn test_reads_schema_name_tag() {
        let yaml = r##"
openapi: "3.0.3"
info:
  title: Tagged
  version: "1"
components:
  schemas:
    Pets:
      type: array
      x-schema-name: Pets
      items:
        oneOf:
          - $ref: "#/components/schemas/Cat"
"##;
        let spec = from_yaml(yaml).unwrap();
        let components = spec.components.unwrap();
        match &components.schemas["Pets"] {
            schema::SchemaOrRef::Schema(s) => {
                assert_eq!(s.schema_name.as_deref(), Some("Pets"));
            }
            _ => panic!("expected inline schema"),
        }
    }

    #[test]
    fn test_path_item_operation_order() {
        let yaml = r#"
openapi: "3.1.0"
info:
  title: Ops
  version: "1"
paths:
  /pets:
    post:
      operationId: addPet
    get:
      operationId: listPets
"#;
        let spec = from_json(&serde_json::to_string(&from_yaml(yaml).unwrap()).unwrap()).unwrap();
        let ops = spec.paths["/pets"].operations();
        let methods: Vec<&str> = ops.iter().map(|(m, _)| *m).collect();
        assert_eq!(methods, vec!["GET", "POST"]);
    }
}
