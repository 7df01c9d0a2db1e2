use cfgen_core::config::LanguageId;
use cfgen_core::profile::{
    AllCapsPolicy, CasingStyle, ContainerSyntax, EnumNameStyle, EnumVarStyle, EscapeStyle,
    LanguageProfile, LeadingDigit, ModelFileStyle, NamingConfig, NamingRules, PrimitiveSet,
    ReconcileMode, ReservedWords, TypeTable,
};

const PRIMITIVES: &[&str] = &[
    "Int",
    "Int32",
    "Int64",
    "Float",
    "Double",
    "Bool",
    "Void",
    "String",
    "Character",
    "AnyObject",
    "Any",
];

const INCLUDES: &[&str] = &[
    "Data",
    "Date",
    "URL",
    "UUID",
    "Array",
    "Dictionary",
    "Set",
    "Any",
    "Empty",
    "AnyObject",
];

const TYPE_MAPPING: &[(&str, &str)] = &[
    ("array", "Array"),
    ("List", "Array"),
    ("map", "Dictionary"),
    ("date", "Date"),
    ("Date", "Date"),
    ("DateTime", "Date"),
    ("boolean", "Bool"),
    ("string", "String"),
    ("char", "Character"),
    ("short", "Int"),
    ("int", "Int"),
    ("long", "Int64"),
    ("integer", "Int"),
    ("Integer", "Int"),
    ("float", "Float"),
    ("number", "Double"),
    ("double", "Double"),
    ("object", "Any"),
    ("Object", "Any"),
    ("file", "URL"),
    ("binary", "Data"),
    ("ByteArray", "Data"),
    ("UUID", "UUID"),
    ("URI", "String"),
    ("BigDecimal", "Decimal"),
];

/// Matched exactly; `Type` is reserved, `type` is not.
const RESERVED_WORDS: &[&str] = &[
    // client runtime
    "ErrorResponse", "Response",
    // Objective-C
    "id", "description", "NSArray", "NSURL", "CGFloat", "NSSet", "NSString", "NSInteger",
    "NSUInteger", "NSError", "NSDictionary",
    // declarations
    "associatedtype", "class", "deinit", "enum", "extension", "fileprivate", "func", "import",
    "init", "inout", "internal", "let", "open", "operator", "private", "protocol", "public",
    "static", "struct", "subscript", "typealias", "var",
    // statements
    "break", "case", "continue", "default", "defer", "do", "else", "fallthrough", "for",
    "guard", "if", "in", "repeat", "return", "switch", "where", "while",
    // expressions and types
    "as", "Any", "catch", "false", "is", "nil", "rethrows", "super", "self", "Self", "throw",
    "throws", "true", "try",
    // patterns
    "_",
    // number-sign keywords
    "#available", "#colorLiteral", "#column", "#else", "#elseif", "#endif", "#file",
    "#fileLiteral", "#function", "#if", "#imageLiteral", "#line", "#selector",
    "#sourceLocation",
    // contextual
    "associativity", "convenience", "dynamic", "didSet", "final", "get", "infix", "indirect",
    "lazy", "left", "mutating", "none", "nonmutating", "optional", "override", "postfix",
    "precedence", "prefix", "Protocol", "required", "right", "set", "Type", "unowned", "weak",
    "willSet",
    // standard library
    "Bool", "Int", "Double", "Float", "Range", "ClosedRange", "Error", "Optional", "UInt",
    "UInt8", "UInt16", "UInt32", "UInt64", "Int8", "Int16", "Int32", "Int64", "Float80",
    "Float32", "Float64", "String", "Character", "Unicode", "StaticString", "Array",
    "Dictionary", "Set", "OptionSet", "CountableRange", "CountableClosedRange",
    // Foundation
    "URL", "Data", "Codable", "Encodable", "Decodable",
    // other
    "Void", "AnyObject", "Class", "dynamicType", "COLUMN", "FILE", "FUNCTION", "LINE",
];

pub(crate) const NUMERIC_TYPES: &[&str] = &["Int", "Int32", "Int64", "Float", "Double", "Decimal"];

/// Swift 4 and Swift 5 share one profile; they differ only in decoration.
pub fn swift_profile(language: LanguageId) -> LanguageProfile {
    LanguageProfile {
        language,
        type_table: TypeTable::from_pairs(TYPE_MAPPING),
        primitives: PrimitiveSet::new(PRIMITIVES, INCLUDES),
        naming: NamingConfig::new(
            ReservedWords::case_sensitive(RESERVED_WORDS),
            CasingStyle::CamelLower,
        ),
        rules: NamingRules {
            param_casing: None,
            operation_casing: CasingStyle::CamelLower,
            allowed_property_casing: &[CasingStyle::CamelLower],
            all_caps: AllCapsPolicy::Keep,
            escape: EscapeStyle::PrefixUnderscore,
            leading_digit: LeadingDigit::Escape,
            model_marker: "Model",
            empty_enum_var: "empty",
            enum_var: EnumVarStyle::SwiftCase,
            enum_name: EnumNameStyle::ModelName,
            numeric_types: NUMERIC_TYPES,
            boolean_types: &["Bool"],
            model_file: ModelFileStyle::ModelName,
            api_suffix: "API",
            ..NamingRules::default()
        },
        containers: ContainerSyntax {
            array: |inner| format!("[{inner}]"),
            map: |inner| format!("[String:{inner}]"),
        },
        reconcile: ReconcileMode::Properties,
    }
}

#[cfg(test)]
mod tests {
    use cfgen_core::naming::NameSanitizer;
    use cfgen_core::resolve::TypeResolver;
    use cfgen_core::schema::{SchemaDocument, SchemaNode};

    use super::*;

    #[test]
    fn test_swift_containers() {
        let profile = swift_profile(LanguageId::Swift5);
        let doc = SchemaDocument::default();
        let resolver = TypeResolver::new(&profile, &doc);
        let node = SchemaNode::map(SchemaNode::array(SchemaNode::primitive("DateTime")));
        assert_eq!(resolver.type_declaration(&node).unwrap(), "[String:[Date]]");
        assert_eq!(resolver.map_type("binary"), "Data");
        assert_eq!(resolver.map_type("object"), "Any");
        assert_eq!(resolver.map_type("BigDecimal"), "Decimal");
    }

    #[test]
    fn test_reserved_words_are_case_sensitive() {
        let profile = swift_profile(LanguageId::Swift5);
        let names = NameSanitizer::new(&profile);
        assert_eq!(names.to_identifier("description"), "_description");
        assert_eq!(names.to_identifier("type"), "type");
        assert_eq!(names.to_identifier("COLUMN"), "_COLUMN");
        assert_eq!(names.to_identifier("return"), "_return");
        assert_eq!(names.to_identifier("123abc"), "_123abc");
        assert_eq!(names.to_model_name("Error"), "ModelError");
        assert_eq!(names.to_model_name("type"), "ModelType");
    }

    #[test]
    fn test_swift_enum_cases() {
        let profile = swift_profile(LanguageId::Swift5);
        let names = NameSanitizer::new(&profile);
        assert_eq!(names.to_enum_var_name("", "String"), "empty");
        assert_eq!(names.to_enum_var_name("-1", "Int"), "numberMinus1");
        assert_eq!(names.to_enum_var_name("in-transit", "String"), "inTransit");
        assert_eq!(names.to_enum_var_name("PlacedOrder", "String"), "placedOrder");
        assert_eq!(names.to_enum_var_name("$", "String"), "dollar");
        assert_eq!(names.to_enum_name("status"), "Status");
    }
}
