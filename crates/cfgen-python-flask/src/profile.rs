use cfgen_core::config::LanguageId;
use cfgen_core::profile::{
    AllCapsPolicy, CasingStyle, ContainerSyntax, DefaultLiterals, EnumNameStyle, EnumVarStyle,
    EscapeStyle, LanguageProfile, LeadingDigit, ModelFileStyle, NamingConfig, NamingRules,
    PrimitiveSet, ReconcileMode, ReservedWords, TypeTable,
};

const PRIMITIVES: &[&str] = &[
    "int",
    "float",
    "List",
    "Dict",
    "bool",
    "str",
    "datetime",
    "date",
    "file",
    "object",
    "byte",
    "bytearray",
    "binary_type",
];

const TYPE_MAPPING: &[(&str, &str)] = &[
    ("integer", "int"),
    ("float", "float"),
    ("number", "float"),
    ("BigDecimal", "float"),
    ("long", "int"),
    ("double", "float"),
    ("array", "List"),
    ("map", "Dict"),
    ("boolean", "bool"),
    ("string", "str"),
    ("date", "date"),
    ("DateTime", "datetime"),
    ("object", "object"),
    ("file", "file"),
    ("UUID", "str"),
    ("binary", "str"),
    ("byte", "bytearray"),
    ("ByteArray", "bytearray"),
];

const RESERVED_WORDS: &[&str] = &[
    // decorators
    "property",
    // keywords
    "and", "del", "from", "not", "while", "as", "elif", "global", "or", "with", "assert", "else",
    "if", "pass", "yield", "break", "except", "import", "print", "class", "exec", "in", "raise",
    "continue", "finally", "is", "return", "def", "for", "lambda", "try", "self", "None",
    "True", "False", "nonlocal", "await", "async",
    // builtin types
    "float", "int", "str", "date", "datetime",
];

pub fn python_flask_profile() -> LanguageProfile {
    LanguageProfile {
        language: LanguageId::PythonFlask,
        type_table: TypeTable::from_pairs(TYPE_MAPPING),
        primitives: PrimitiveSet::new(PRIMITIVES, &[]),
        naming: NamingConfig::new(
            ReservedWords::case_insensitive(RESERVED_WORDS),
            CasingStyle::Snake,
        ),
        rules: NamingRules {
            param_casing: None,
            operation_casing: CasingStyle::Snake,
            allowed_property_casing: &[CasingStyle::Snake],
            all_caps: AllCapsPolicy::Lowercase,
            strip_leading_underscores: true,
            escape: EscapeStyle::PrefixUnderscore,
            leading_digit: LeadingDigit::Escape,
            empty_enum_var: "EMPTY",
            enum_var: EnumVarStyle::UpperUnderscore,
            enum_name: EnumNameStyle::CamelSuffix,
            enum_value_quote: Some('\''),
            numeric_types: &["int", "float"],
            boolean_types: &["bool"],
            model_file: ModelFileStyle::Snake,
            api_suffix: "Controller",
            default_literals: Some(DefaultLiterals {
                quote: '\'',
                true_literal: "True",
                false_literal: "False",
            }),
            ..NamingRules::default()
        },
        containers: ContainerSyntax {
            array: |inner| format!("List[{inner}]"),
            map: |inner| format!("Dict[str, {inner}]"),
        },
        reconcile: ReconcileMode::None,
    }
}
