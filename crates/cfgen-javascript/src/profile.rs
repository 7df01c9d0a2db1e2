use cfgen_core::config::LanguageId;
use cfgen_core::profile::{
    CasingStyle, ContainerSyntax, DefaultLiterals, EnumNameStyle, EnumVarStyle, EscapeStyle,
    LanguageProfile, LeadingDigit, ModelFileStyle, NamingConfig, NamingRules, PrimitiveSet,
    ReconcileMode, ReservedWords, TypeTable,
};

/// Every built-in is both a primitive and a default include.
pub(crate) const BUILTINS: &[&str] = &[
    "String", "Boolean", "Number", "Array", "Object", "Date", "File", "Blob",
];

const TYPE_MAPPING: &[(&str, &str)] = &[
    ("array", "Array"),
    ("map", "Object"),
    ("List", "Array"),
    ("boolean", "Boolean"),
    ("string", "String"),
    ("int", "Number"),
    ("float", "Number"),
    ("number", "Number"),
    ("BigDecimal", "Number"),
    ("DateTime", "Date"),
    ("date", "Date"),
    ("long", "Number"),
    ("short", "Number"),
    ("char", "String"),
    ("double", "Number"),
    ("object", "Object"),
    ("integer", "Number"),
    ("ByteArray", "Blob"),
    ("binary", "File"),
    ("binary", "Blob"),
    ("file", "File"),
    ("URI", "String"),
    ("UUID", "String"),
];

const RESERVED_WORDS: &[&str] = &[
    "abstract", "arguments", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "debugger", "default", "delete", "do", "double", "else", "enum",
    "eval", "export", "extends", "false", "final", "finally", "float", "for", "function",
    "goto", "if", "implements", "import", "in", "instanceof", "int", "interface", "let", "long",
    "native", "new", "null", "package", "private", "protected", "public", "return", "short",
    "static", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "true",
    "try", "typeof", "var", "void", "volatile", "while", "with", "yield",
    // global objects and properties
    "Array", "Date", "hasOwnProperty", "Infinity", "isFinite", "isNaN", "isPrototypeOf",
    "Math", "NaN", "Number", "Object", "prototype", "String", "toString", "undefined",
    "valueOf",
];

pub fn javascript_profile() -> LanguageProfile {
    LanguageProfile {
        language: LanguageId::Javascript,
        type_table: TypeTable::from_pairs(TYPE_MAPPING),
        primitives: PrimitiveSet::new(BUILTINS, BUILTINS),
        naming: NamingConfig::new(
            ReservedWords::case_insensitive(RESERVED_WORDS),
            CasingStyle::CamelLower,
        ),
        rules: NamingRules {
            param_casing: None,
            operation_casing: CasingStyle::CamelLower,
            lone_underscore: Some("_u"),
            escape: EscapeStyle::PrefixUnderscore,
            leading_digit: LeadingDigit::Escape,
            empty_enum_var: "empty",
            enum_var: EnumVarStyle::Identifier,
            enum_name: EnumNameStyle::CamelSuffix,
            enum_value_quote: Some('"'),
            numeric_types: &["Number", "Integer"],
            boolean_types: &["Boolean"],
            model_file: ModelFileStyle::ModelName,
            api_suffix: "Api",
            default_literals: Some(DefaultLiterals {
                quote: '\'',
                true_literal: "true",
                false_literal: "false",
            }),
            ..NamingRules::default()
        },
        containers: ContainerSyntax {
            array: |inner| format!("[{inner}]"),
            map: |inner| format!("{{String: {inner}}}"),
        },
        reconcile: ReconcileMode::InlineEnums,
    }
}
