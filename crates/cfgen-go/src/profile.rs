use cfgen_core::config::LanguageId;
use cfgen_core::profile::{
    CasingStyle, ContainerSyntax, EnumNameStyle, EnumVarStyle, EscapeStyle, LanguageProfile,
    LeadingDigit, ModelFileStyle, NamingConfig, NamingRules, PrimitiveSet, ReconcileMode,
    ReservedWords, TypeTable,
};

const PRIMITIVES: &[&str] = &[
    "string",
    "bool",
    "uint",
    "uint32",
    "uint64",
    "int",
    "int32",
    "int64",
    "float32",
    "float64",
    "complex64",
    "complex128",
    "rune",
    "byte",
];

const INCLUDES: &[&str] = &["time.Time", "*os.File", "interface{}"];

const TYPE_MAPPING: &[(&str, &str)] = &[
    ("integer", "int32"),
    ("long", "int64"),
    ("number", "float32"),
    ("float", "float32"),
    ("double", "float64"),
    ("BigDecimal", "float64"),
    ("boolean", "bool"),
    ("string", "string"),
    ("UUID", "string"),
    ("URI", "string"),
    ("date", "string"),
    ("DateTime", "time.Time"),
    ("password", "string"),
    ("File", "*os.File"),
    ("file", "*os.File"),
    ("binary", "*os.File"),
    ("ByteArray", "string"),
    ("object", "interface{}"),
];

/// Keywords and predeclared identifiers, matched ignoring case.
const RESERVED_WORDS: &[&str] = &[
    // keywords
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
    // predeclared
    "bool", "byte", "complex64", "complex128", "error", "float32", "float64", "int", "int8",
    "int16", "int32", "int64", "rune", "string", "uint", "uint8", "uint16", "uint32", "uint64",
    "uintptr", "true", "false", "iota", "nil", "append", "cap", "close", "complex", "copy",
    "delete", "imag", "len", "make", "new", "panic", "print", "println", "real", "recover",
];

const NUMERIC_TYPES: &[&str] = &[
    "int", "int32", "int64", "uint", "uint32", "uint64", "float32", "float64",
];

pub fn go_profile() -> LanguageProfile {
    LanguageProfile {
        language: LanguageId::Go,
        type_table: TypeTable::from_pairs(TYPE_MAPPING),
        primitives: PrimitiveSet::new(PRIMITIVES, INCLUDES),
        naming: NamingConfig::new(
            ReservedWords::case_insensitive(RESERVED_WORDS),
            CasingStyle::CamelUpper,
        ),
        rules: NamingRules {
            param_casing: Some(CasingStyle::CamelLower),
            operation_casing: CasingStyle::CamelUpper,
            // struct fields must stay exported
            allowed_property_casing: &[CasingStyle::CamelUpper],
            escape: EscapeStyle::SuffixUnderscore,
            leading_digit: LeadingDigit::Prefix("Var"),
            empty_enum_var: "EMPTY",
            enum_var: EnumVarStyle::GoConstant,
            enum_name: EnumNameStyle::UpperSnake,
            numeric_types: NUMERIC_TYPES,
            boolean_types: &["bool"],
            model_file: ModelFileStyle::PrefixedSnake,
            api_suffix: "Api",
            ..NamingRules::default()
        },
        containers: ContainerSyntax {
            array: |inner| format!("[]{inner}"),
            map: |inner| format!("map[string]{inner}"),
        },
        reconcile: ReconcileMode::None,
    }
}

#[cfg(test)]
mod tests {
    use cfgen_core::naming::NameSanitizer;
    use cfgen_core::resolve::TypeResolver;
    use cfgen_core::schema::{SchemaDocument, SchemaNode};

    use super::*;

    #[test]
    fn test_type_mapping() {
        let profile = go_profile();
        let doc = SchemaDocument::default();
        let resolver = TypeResolver::new(&profile, &doc);
        assert_eq!(resolver.map_type("DateTime"), "time.Time");
        assert_eq!(resolver.map_type("binary"), "*os.File");
        assert_eq!(resolver.map_type("object"), "interface{}");
        assert_eq!(resolver.map_type("BigDecimal"), "float64");
        let nested = SchemaNode::map(SchemaNode::array(SchemaNode::primitive("long")));
        assert_eq!(resolver.type_declaration(&nested).unwrap(), "map[string][]int64");
    }

    #[test]
    fn test_go_names() {
        let profile = go_profile();
        let names = NameSanitizer::new(&profile);
        assert_eq!(names.to_identifier("type"), "Type_");
        assert_eq!(names.to_param_name("type"), "type_");
        assert_eq!(names.to_identifier("_links"), "Links");
        assert_eq!(names.to_model_name("error"), "ModelError");
        assert_eq!(names.to_model_filename("Order"), "model_order");
        assert_eq!(names.to_operation_id("return"), "CallReturn");
        assert_eq!(names.to_enum_var_name("3.14", "float64"), "3_DOT_14");
    }

    #[test]
    fn test_time_is_not_primitive() {
        let profile = go_profile();
        assert!(profile.primitives.is_builtin("time.Time"));
        assert!(!profile.primitives.is_primitive("time.Time"));
        assert!(profile.primitives.is_primitive("int32"));
    }
}
