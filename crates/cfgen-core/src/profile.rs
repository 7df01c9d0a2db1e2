//! Everything that differs between target languages, expressed as data.

use std::fmt;
use std::str::FromStr;

use heck::{ToLowerCamelCase, ToSnakeCase, ToUpperCamelCase};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::config::{LanguageId, LanguageOptions};
use crate::error::ConfigError;

/// Casing applied to identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CasingStyle {
    #[serde(rename = "PascalCase", alias = "camelUpper")]
    CamelUpper,
    #[serde(rename = "camelCase", alias = "camelLower")]
    CamelLower,
    #[serde(rename = "snake_case", alias = "snake")]
    Snake,
    #[serde(rename = "original")]
    Original,
}

impl CasingStyle {
    pub fn apply(self, name: &str) -> String {
        match self {
            CasingStyle::CamelUpper => name.to_upper_camel_case(),
            CasingStyle::CamelLower => name.to_lower_camel_case(),
            CasingStyle::Snake => name.to_snake_case(),
            CasingStyle::Original => name.to_string(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CasingStyle::CamelUpper => "PascalCase",
            CasingStyle::CamelLower => "camelCase",
            CasingStyle::Snake => "snake_case",
            CasingStyle::Original => "original",
        }
    }
}

impl fmt::Display for CasingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CasingStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PascalCase" | "camelUpper" => Ok(CasingStyle::CamelUpper),
            "camelCase" | "camelLower" => Ok(CasingStyle::CamelLower),
            "snake_case" | "snake" => Ok(CasingStyle::Snake),
            "original" => Ok(CasingStyle::Original),
            other => Err(ConfigError::UnknownCasingStyle(other.to_string())),
        }
    }
}

/// Abstract type name to target type name.
#[derive(Debug, Clone, Default)]
pub struct TypeTable {
    entries: IndexMap<String, String>,
}

impl TypeTable {
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut table = Self::default();
        for (abstract_name, concrete) in pairs {
            table.insert(*abstract_name, *concrete);
        }
        table
    }

    /// Later inserts for the same key replace earlier ones.
    pub fn insert(&mut self, abstract_name: impl Into<String>, concrete: impl Into<String>) {
        self.entries.insert(abstract_name.into(), concrete.into());
    }

    pub fn get(&self, abstract_name: &str) -> Option<&str> {
        self.entries.get(abstract_name).map(String::as_str)
    }

    /// Whether `concrete` is already a mapped target type.
    pub fn contains_value(&self, concrete: &str) -> bool {
        self.entries.values().any(|v| v == concrete)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Built-in target types. Language primitives and default includes are both
/// terminal for resolution; only the former count as primitives on descriptors.
#[derive(Debug, Clone, Default)]
pub struct PrimitiveSet {
    primitives: IndexSet<String>,
    includes: IndexSet<String>,
}

impl PrimitiveSet {
    pub fn new(primitives: &[&str], includes: &[&str]) -> Self {
        Self {
            primitives: primitives.iter().map(|s| s.to_string()).collect(),
            includes: includes.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn is_primitive(&self, name: &str) -> bool {
        self.primitives.contains(name)
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.primitives.contains(name) || self.includes.contains(name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReservedWords {
    words: IndexSet<String>,
    case_sensitive: bool,
}

impl ReservedWords {
    pub fn case_sensitive(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_string()).collect(),
            case_sensitive: true,
        }
    }

    /// Words are stored lower-cased and matched ignoring case.
    pub fn case_insensitive(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
            case_sensitive: false,
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        if self.case_sensitive {
            self.words.contains(word)
        } else {
            self.words.contains(&word.to_lowercase())
        }
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Stored words; lower-cased when matching ignores case.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// User-adjustable naming policy.
#[derive(Debug, Clone)]
pub struct NamingConfig {
    pub reserved_words: ReservedWords,
    pub reserved_word_mapping: IndexMap<String, String>,
    pub model_name_prefix: Option<String>,
    pub model_name_suffix: Option<String>,
    /// Casing of property and variable identifiers.
    pub casing: CasingStyle,
}

impl NamingConfig {
    pub fn new(reserved_words: ReservedWords, casing: CasingStyle) -> Self {
        Self {
            reserved_words,
            reserved_word_mapping: IndexMap::new(),
            model_name_prefix: None,
            model_name_suffix: None,
            casing,
        }
    }
}

/// How a reserved word is escaped when no explicit mapping exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeStyle {
    /// `return` -> `_return`
    PrefixUnderscore,
    /// `return` -> `Return_` (cased name, then `_`)
    SuffixUnderscore,
}

/// What `to_identifier` does with names that are all upper-case and underscores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllCapsPolicy {
    Keep,
    Lowercase,
}

/// Handling of identifiers starting with a digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadingDigit {
    Escape,
    Prefix(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumVarStyle {
    /// `MINUS_1`, `DOLLAR`, `AVAILABLE`
    GoConstant,
    /// `numberMinus1`, `dollar`, `available`
    SwiftCase,
    /// Same as a property identifier; symbols upper-cased.
    Identifier,
    /// Non-word runs to `_`, upper-cased.
    UpperUnderscore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumNameStyle {
    /// `STATUS`
    UpperSnake,
    /// `Status`, or `StatusEnum` on a clash
    ModelName,
    /// `StatusEnum`
    CamelSuffix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFileStyle {
    ModelName,
    Snake,
    /// `model_` + snake case
    PrefixedSnake,
}

/// How a schema `default` is written in the target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultLiterals {
    pub quote: char,
    pub true_literal: &'static str,
    pub false_literal: &'static str,
}

impl DefaultLiterals {
    /// Literal for `value` on a schema of abstract type `type_name`. Dates,
    /// binary formats and mismatched values have none.
    pub fn format(&self, type_name: &str, value: &serde_json::Value) -> Option<String> {
        use serde_json::Value;
        match (type_name, value) {
            ("string", Value::String(s)) => Some(format!("{q}{s}{q}", q = self.quote)),
            ("boolean", Value::Bool(b)) => {
                Some(if *b { self.true_literal } else { self.false_literal }.to_string())
            }
            ("integer" | "long" | "number" | "float" | "double", Value::Number(n)) => {
                Some(n.to_string())
            }
            _ => None,
        }
    }
}

/// Fixed conventions of a target language.
#[derive(Debug, Clone)]
pub struct NamingRules {
    /// `None` follows the property casing.
    pub param_casing: Option<CasingStyle>,
    pub operation_casing: CasingStyle,
    pub allowed_property_casing: &'static [CasingStyle],
    pub all_caps: AllCapsPolicy,
    pub strip_leading_underscores: bool,
    pub lone_underscore: Option<&'static str>,
    pub preserve_leading_char: bool,
    pub escape: EscapeStyle,
    pub leading_digit: LeadingDigit,
    pub model_marker: &'static str,
    pub empty_enum_var: &'static str,
    pub enum_var: EnumVarStyle,
    pub enum_name: EnumNameStyle,
    pub enum_value_quote: Option<char>,
    pub numeric_types: &'static [&'static str],
    pub boolean_types: &'static [&'static str],
    pub model_file: ModelFileStyle,
    pub api_suffix: &'static str,
    /// `None` leaves property defaults unset.
    pub default_literals: Option<DefaultLiterals>,
}

impl Default for NamingRules {
    fn default() -> Self {
        Self {
            param_casing: None,
            operation_casing: CasingStyle::CamelLower,
            allowed_property_casing: &[
                CasingStyle::CamelUpper,
                CasingStyle::CamelLower,
                CasingStyle::Snake,
                CasingStyle::Original,
            ],
            all_caps: AllCapsPolicy::Keep,
            strip_leading_underscores: false,
            lone_underscore: None,
            preserve_leading_char: false,
            escape: EscapeStyle::PrefixUnderscore,
            leading_digit: LeadingDigit::Escape,
            model_marker: "Model",
            empty_enum_var: "EMPTY",
            enum_var: EnumVarStyle::UpperUnderscore,
            enum_name: EnumNameStyle::CamelSuffix,
            enum_value_quote: None,
            numeric_types: &[],
            boolean_types: &[],
            model_file: ModelFileStyle::ModelName,
            api_suffix: "Api",
            default_literals: None,
        }
    }
}

/// Array and map spelling of a target language.
#[derive(Debug, Clone, Copy)]
pub struct ContainerSyntax {
    pub array: fn(&str) -> String,
    pub map: fn(&str) -> String,
}

impl ContainerSyntax {
    pub fn wrap_array(&self, inner: &str) -> String {
        (self.array)(inner)
    }

    pub fn wrap_map(&self, inner: &str) -> String {
        (self.map)(inner)
    }
}

/// Which inherited members a child model drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconcileMode {
    /// Models stay flattened.
    None,
    /// Drop properties whose base name the parent declares.
    Properties,
    /// Drop enum properties identical to one the parent declares.
    InlineEnums,
}

/// A complete target-language configuration for one generation run.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    pub language: LanguageId,
    pub type_table: TypeTable,
    pub primitives: PrimitiveSet,
    pub naming: NamingConfig,
    pub rules: NamingRules,
    pub containers: ContainerSyntax,
    pub reconcile: ReconcileMode,
}

impl LanguageProfile {
    /// Apply user options on top of the built-in profile.
    pub fn with_options(mut self, options: &LanguageOptions) -> Result<Self, ConfigError> {
        if let Some(prefix) = options.model_name_prefix.as_deref().filter(|p| !p.is_empty()) {
            self.naming.model_name_prefix = Some(prefix.to_string());
        }
        if let Some(suffix) = options.model_name_suffix.as_deref().filter(|s| !s.is_empty()) {
            self.naming.model_name_suffix = Some(suffix.to_string());
        }
        for (word, replacement) in &options.reserved_word_mappings {
            self.naming
                .reserved_word_mapping
                .insert(word.clone(), replacement.clone());
        }
        if let Some(casing) = options.property_naming {
            if !self.rules.allowed_property_casing.contains(&casing) {
                let allowed: Vec<&str> = self
                    .rules
                    .allowed_property_casing
                    .iter()
                    .map(|c| c.as_str())
                    .collect();
                return Err(ConfigError::ContradictoryCasing {
                    language: self.language.to_string(),
                    requested: casing.to_string(),
                    allowed: allowed.join(", "),
                });
            }
            self.naming.casing = casing;
        }
        if options.preserve_leading_param_char {
            self.rules.preserve_leading_char = true;
        }
        Ok(self)
    }

    pub fn param_casing(&self) -> CasingStyle {
        self.rules.param_casing.unwrap_or(self.naming.casing)
    }

    pub fn is_numeric_type(&self, data_type: &str) -> bool {
        self.rules.numeric_types.contains(&data_type)
    }

    pub fn is_boolean_type(&self, data_type: &str) -> bool {
        self.rules.boolean_types.contains(&data_type)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Small Go-flavoured profile used by unit tests across the crate.
    pub(crate) fn go_like() -> LanguageProfile {
        LanguageProfile {
            language: LanguageId::Go,
            type_table: TypeTable::from_pairs(&[
                ("integer", "int32"),
                ("long", "int64"),
                ("number", "float32"),
                ("boolean", "bool"),
                ("string", "string"),
                ("DateTime", "time.Time"),
                ("object", "interface{}"),
            ]),
            primitives: PrimitiveSet::new(
                &["string", "bool", "int32", "int64", "float32"],
                &["time.Time", "interface{}"],
            ),
            naming: NamingConfig::new(
                ReservedWords::case_insensitive(&["return", "type", "string", "map"]),
                CasingStyle::CamelUpper,
            ),
            rules: NamingRules {
                param_casing: Some(CasingStyle::CamelLower),
                operation_casing: CasingStyle::CamelUpper,
                allowed_property_casing: &[CasingStyle::CamelUpper],
                escape: EscapeStyle::SuffixUnderscore,
                leading_digit: LeadingDigit::Prefix("Var"),
                enum_var: EnumVarStyle::GoConstant,
                enum_name: EnumNameStyle::UpperSnake,
                numeric_types: &["int32", "int64", "float32"],
                boolean_types: &["bool"],
                model_file: ModelFileStyle::PrefixedSnake,
                ..NamingRules::default()
            },
            containers: ContainerSyntax {
                array: |t| format!("[]{t}"),
                map: |t| format!("map[string]{t}"),
            },
            reconcile: ReconcileMode::None,
        }
    }

    #[test]
    fn test_casing_from_str() {
        assert_eq!("camelCase".parse::<CasingStyle>().unwrap(), CasingStyle::CamelLower);
        assert_eq!("PascalCase".parse::<CasingStyle>().unwrap(), CasingStyle::CamelUpper);
        assert_eq!("snake_case".parse::<CasingStyle>().unwrap(), CasingStyle::Snake);
        assert!(matches!(
            "kebab".parse::<CasingStyle>(),
            Err(ConfigError::UnknownCasingStyle(s)) if s == "kebab"
        ));
    }

    #[test]
    fn test_casing_apply() {
        assert_eq!(CasingStyle::CamelUpper.apply("created_at"), "CreatedAt");
        assert_eq!(CasingStyle::CamelLower.apply("created_at"), "createdAt");
        assert_eq!(CasingStyle::Snake.apply("createdAt"), "created_at");
        assert_eq!(CasingStyle::Original.apply("created_At"), "created_At");
    }

    #[test]
    fn test_default_literals() {
        use serde_json::json;

        let literals = DefaultLiterals {
            quote: '\'',
            true_literal: "True",
            false_literal: "False",
        };
        assert_eq!(literals.format("string", &json!("sold")).as_deref(), Some("'sold'"));
        assert_eq!(literals.format("boolean", &json!(false)).as_deref(), Some("False"));
        assert_eq!(literals.format("long", &json!(42)).as_deref(), Some("42"));
        assert_eq!(literals.format("double", &json!(1.5)).as_deref(), Some("1.5"));
        assert_eq!(literals.format("DateTime", &json!("2020-01-01")), None);
        assert_eq!(literals.format("integer", &json!("ten")), None);
    }

    #[test]
    fn test_type_table_two_way() {
        let table = TypeTable::from_pairs(&[("integer", "int32"), ("binary", "string")]);
        assert_eq!(table.get("integer"), Some("int32"));
        assert!(table.contains_value("int32"));
        assert!(!table.contains_value("integer"));
    }

    #[test]
    fn test_type_table_later_insert_wins() {
        let table = TypeTable::from_pairs(&[("binary", "String"), ("binary", "Blob")]);
        assert_eq!(table.get("binary"), Some("Blob"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_reserved_words_case() {
        let insensitive = ReservedWords::case_insensitive(&["Return"]);
        assert!(insensitive.contains("RETURN"));
        let sensitive = ReservedWords::case_sensitive(&["Type"]);
        assert!(sensitive.contains("Type"));
        assert!(!sensitive.contains("type"));
    }

    #[test]
    fn test_options_reject_contradictory_casing() {
        let options = LanguageOptions {
            property_naming: Some(CasingStyle::Snake),
            ..LanguageOptions::default()
        };
        let err = go_like().with_options(&options).unwrap_err();
        assert!(matches!(err, ConfigError::ContradictoryCasing { .. }));
    }

    #[test]
    fn test_options_apply_affixes_and_mappings() {
        let mut options = LanguageOptions {
            model_name_prefix: Some("Api".into()),
            model_name_suffix: Some(String::new()),
            ..LanguageOptions::default()
        };
        options
            .reserved_word_mappings
            .insert("return".into(), "ret".into());
        let profile = go_like().with_options(&options).unwrap();
        assert_eq!(profile.naming.model_name_prefix.as_deref(), Some("Api"));
        assert_eq!(profile.naming.model_name_suffix, None);
        assert_eq!(profile.naming.reserved_word_mapping["return"], "ret");
        assert_eq!(profile.param_casing(), CasingStyle::CamelLower);
    }
}
