//! Identifier sanitization shared by every target language.
//!
//! All operations are pure functions of their input and the
//! [`LanguageProfile`] they are bound to. Renames that avoid a clash are
//! reported as [`NamingWarning`]s and never fail.

pub mod text;

use std::fmt;

use heck::{ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};

use crate::profile::{
    AllCapsPolicy, CasingStyle, EnumNameStyle, EnumVarStyle, EscapeStyle, LanguageProfile,
    LeadingDigit, ModelFileStyle,
};
use text::{is_all_caps, sanitize_name, starts_with_digit, symbol_name};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Identifier,
    Model,
    Operation,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NameKind::Identifier => "identifier",
            NameKind::Model => "model name",
            NameKind::Operation => "operation id",
        })
    }
}

/// A rename performed to keep a generated name valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamingWarning {
    ReservedWord {
        kind: NameKind,
        original: String,
        renamed: String,
    },
    LeadingDigit {
        kind: NameKind,
        original: String,
        renamed: String,
    },
    Empty {
        kind: NameKind,
        original: String,
        renamed: String,
    },
}

impl NamingWarning {
    pub fn renamed(&self) -> &str {
        match self {
            NamingWarning::ReservedWord { renamed, .. }
            | NamingWarning::LeadingDigit { renamed, .. }
            | NamingWarning::Empty { renamed, .. } => renamed,
        }
    }

    fn report(&self) {
        match self {
            NamingWarning::ReservedWord {
                kind: NameKind::Identifier,
                ..
            }
            | NamingWarning::LeadingDigit {
                kind: NameKind::Identifier,
                ..
            }
            | NamingWarning::Empty {
                kind: NameKind::Identifier,
                ..
            } => log::debug!("{self}"),
            _ => log::warn!("{self}"),
        }
    }
}

impl fmt::Display for NamingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamingWarning::ReservedWord {
                kind,
                original,
                renamed,
            } => write!(
                f,
                "{original} (reserved word) cannot be used as {kind}, renamed to {renamed}"
            ),
            NamingWarning::LeadingDigit {
                kind,
                original,
                renamed,
            } => write!(
                f,
                "{original} ({kind} starts with a number) renamed to {renamed}"
            ),
            NamingWarning::Empty {
                kind,
                original,
                renamed,
            } => write!(f, "{kind} {original:?} is empty after sanitizing, using {renamed}"),
        }
    }
}

/// A generated name plus the warning raised while producing it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized {
    pub name: String,
    pub warning: Option<NamingWarning>,
}

impl Sanitized {
    fn plain(name: String) -> Self {
        Self {
            name,
            warning: None,
        }
    }

    fn with(warning: NamingWarning) -> Self {
        warning.report();
        Self {
            name: warning.renamed().to_string(),
            warning: Some(warning),
        }
    }
}

/// Naming operations bound to one language profile.
#[derive(Debug, Clone, Copy)]
pub struct NameSanitizer<'a> {
    profile: &'a LanguageProfile,
}

impl<'a> NameSanitizer<'a> {
    pub fn new(profile: &'a LanguageProfile) -> Self {
        Self { profile }
    }

    pub fn is_reserved_word(&self, name: &str) -> bool {
        self.profile.naming.reserved_words.contains(name)
    }

    /// Escape a reserved word using the explicit mapping or the language's canonical escape.
    pub fn escape_reserved_word(&self, name: &str) -> String {
        self.escape_with(name, self.profile.naming.casing)
    }

    fn escape_with(&self, name: &str, casing: CasingStyle) -> String {
        let naming = &self.profile.naming;
        let mapped = naming.reserved_word_mapping.get(name).or_else(|| {
            if naming.reserved_words.is_case_sensitive() {
                None
            } else {
                naming
                    .reserved_word_mapping
                    .iter()
                    .find(|(word, _)| word.eq_ignore_ascii_case(name))
                    .map(|(_, replacement)| replacement)
            }
        });
        if let Some(replacement) = mapped {
            return replacement.clone();
        }
        match self.profile.rules.escape {
            EscapeStyle::PrefixUnderscore => format!("_{name}"),
            EscapeStyle::SuffixUnderscore => format!("{}_", casing.apply(name)),
        }
    }

    /// Property or variable identifier in the profile's property casing.
    pub fn to_identifier(&self, raw: &str) -> String {
        self.identifier_reported(raw, self.profile.naming.casing).name
    }

    pub fn to_identifier_with(&self, raw: &str, casing: CasingStyle) -> String {
        self.identifier_reported(raw, casing).name
    }

    /// Parameter name; same pipeline as identifiers with the parameter casing.
    pub fn to_param_name(&self, raw: &str) -> String {
        self.identifier_reported(raw, self.profile.param_casing()).name
    }

    pub fn identifier_reported(&self, raw: &str, casing: CasingStyle) -> Sanitized {
        let rules = &self.profile.rules;
        let mut name = sanitize_name(raw);
        if let Some(replacement) = rules.lone_underscore.filter(|_| name == "_") {
            return Sanitized::plain(replacement.to_string());
        }
        let leading = raw.chars().next().filter(|c| *c == '$' || *c == '_');

        if is_all_caps(&name) {
            match rules.all_caps {
                AllCapsPolicy::Keep => {
                    if self.is_reserved_word(&name) {
                        let renamed = self.escape_with(&name, casing);
                        return Sanitized::with(NamingWarning::ReservedWord {
                            kind: NameKind::Identifier,
                            original: raw.to_string(),
                            renamed,
                        });
                    }
                    return Sanitized::plain(name);
                }
                AllCapsPolicy::Lowercase => name = name.to_lowercase(),
            }
        }

        let mut name = casing.apply(&name);
        if rules.strip_leading_underscores {
            name = name.trim_start_matches('_').to_string();
        }

        let mut result = if name.is_empty() {
            Sanitized::with(NamingWarning::Empty {
                kind: NameKind::Identifier,
                original: raw.to_string(),
                renamed: casing.apply("empty"),
            })
        } else if self.is_reserved_word(&name) {
            Sanitized::with(NamingWarning::ReservedWord {
                kind: NameKind::Identifier,
                original: raw.to_string(),
                renamed: self.escape_with(&name, casing),
            })
        } else if starts_with_digit(&name) {
            let renamed = match rules.leading_digit {
                LeadingDigit::Escape => self.escape_with(&name, casing),
                LeadingDigit::Prefix(marker) if casing == CasingStyle::Original => {
                    format!("{marker}{name}")
                }
                LeadingDigit::Prefix(marker) => casing.apply(&format!("{marker}_{name}")),
            };
            Sanitized::with(NamingWarning::LeadingDigit {
                kind: NameKind::Identifier,
                original: raw.to_string(),
                renamed,
            })
        } else {
            Sanitized::plain(name)
        };

        if let Some(first) = leading.filter(|_| rules.preserve_leading_char) {
            if !result.name.starts_with(first) {
                result.name.insert(0, first);
            }
        }
        result
    }

    /// Model (class) name: affixes, sanitize, UpperCamel, then the model marker
    /// for reserved words and leading digits.
    pub fn to_model_name(&self, raw: &str) -> String {
        self.model_name_reported(raw).name
    }

    pub fn model_name_reported(&self, raw: &str) -> Sanitized {
        let naming = &self.profile.naming;
        let mut name = raw.to_string();
        if let Some(prefix) = naming.model_name_prefix.as_deref().filter(|p| !p.is_empty()) {
            if !name.to_lowercase().starts_with(&prefix.to_lowercase()) {
                name = format!("{prefix}_{name}");
            }
        }
        if let Some(suffix) = naming.model_name_suffix.as_deref().filter(|s| !s.is_empty()) {
            if !name.to_lowercase().ends_with(&suffix.to_lowercase()) {
                name = format!("{name}_{suffix}");
            }
        }

        let camelized = sanitize_name(&name).to_upper_camel_case();
        let marker = self.profile.rules.model_marker;

        if camelized.is_empty() {
            Sanitized::with(NamingWarning::Empty {
                kind: NameKind::Model,
                original: raw.to_string(),
                renamed: marker.to_string(),
            })
        } else if self.is_reserved_word(&camelized) {
            Sanitized::with(NamingWarning::ReservedWord {
                kind: NameKind::Model,
                original: camelized.clone(),
                renamed: format!("{marker}{camelized}"),
            })
        } else if starts_with_digit(&camelized) {
            Sanitized::with(NamingWarning::LeadingDigit {
                kind: NameKind::Model,
                original: camelized.clone(),
                renamed: format!("{marker}{camelized}"),
            })
        } else {
            Sanitized::plain(camelized)
        }
    }

    /// Method name for an operation id.
    pub fn to_operation_id(&self, raw: &str) -> String {
        self.operation_id_reported(raw).name
    }

    pub fn operation_id_reported(&self, raw: &str) -> Sanitized {
        let casing = self.profile.rules.operation_casing;
        let sanitized = sanitize_name(raw);
        let cased = casing.apply(&sanitized);

        if cased.is_empty() {
            return Sanitized::with(NamingWarning::Empty {
                kind: NameKind::Operation,
                original: raw.to_string(),
                renamed: casing.apply("operation"),
            });
        }
        if self.is_reserved_word(&cased) {
            return Sanitized::with(NamingWarning::ReservedWord {
                kind: NameKind::Operation,
                original: cased,
                renamed: casing.apply(&format!("call_{sanitized}")),
            });
        }
        if starts_with_digit(&cased) {
            return Sanitized::with(NamingWarning::LeadingDigit {
                kind: NameKind::Operation,
                original: cased,
                renamed: casing.apply(&format!("call_{sanitized}")),
            });
        }
        Sanitized::plain(cased)
    }

    /// Name of one enum case for `value`, whose resolved type is `data_type`.
    pub fn to_enum_var_name(&self, value: &str, data_type: &str) -> String {
        let rules = &self.profile.rules;
        if value.is_empty() {
            return rules.empty_enum_var.to_string();
        }
        match rules.enum_var {
            EnumVarStyle::GoConstant => self.go_enum_var(value, data_type),
            EnumVarStyle::SwiftCase => self.swift_enum_var(value, data_type),
            EnumVarStyle::Identifier => match symbol_name(value) {
                Some(symbol) => symbol.to_uppercase(),
                None => self.to_identifier(value),
            },
            EnumVarStyle::UpperUnderscore => {
                if let Some(symbol) = symbol_name(value) {
                    return symbol.to_uppercase();
                }
                let var = collapse_non_word(value).to_uppercase();
                if starts_with_digit(&var) {
                    format!("_{var}")
                } else {
                    var
                }
            }
        }
    }

    fn go_enum_var(&self, value: &str, data_type: &str) -> String {
        if self.profile.is_numeric_type(data_type) {
            return value
                .replace('-', "MINUS_")
                .replace('+', "PLUS_")
                .replace('.', "_DOT_");
        }
        if let Some(symbol) = symbol_name(value) {
            return symbol.to_uppercase();
        }
        let upper = sanitize_name(&value.to_snake_case().to_uppercase());
        let trimmed = upper.strip_prefix('_').unwrap_or(&upper);
        let trimmed = trimmed.strip_suffix('_').unwrap_or(trimmed);
        if self.is_reserved_word(trimmed) || starts_with_digit(trimmed) {
            self.escape_reserved_word(trimmed)
        } else {
            trimmed.to_string()
        }
    }

    fn swift_enum_var(&self, value: &str, data_type: &str) -> String {
        if self.profile.is_numeric_type(data_type) {
            let spelled = value
                .replace('-', "minus_")
                .replace('+', "plus_")
                .replace('.', "_dot_");
            return format!("number{}", spelled.to_upper_camel_case());
        }

        let digits: String = value.chars().take_while(|c| c.is_ascii_digit()).collect();
        if !digits.is_empty() {
            let rest = &value[digits.len()..];
            return format!("_{digits}{}", rest.to_lower_camel_case());
        }

        if let Some(symbol) = symbol_name(value) {
            return symbol.to_lowercase().to_lower_camel_case();
        }

        let camel_shaped = value.len() > 1
            && value.starts_with(|c: char| c.is_ascii_uppercase())
            && value.chars().all(|c| c.is_ascii_alphanumeric())
            && value
                .chars()
                .nth(1)
                .is_some_and(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
        let name = if camel_shaped {
            value.to_lower_camel_case()
        } else {
            value.to_string()
        };

        let lowercase = name.to_lowercase();
        if self.is_reserved_word(&lowercase) {
            return self.escape_reserved_word(&lowercase);
        }
        if camel_shaped {
            return name;
        }
        value.to_lowercase().to_lower_camel_case()
    }

    /// Literal for an enum case: numbers and booleans bare, everything else quoted
    /// with the profile's quote character.
    pub fn to_enum_value(&self, value: &str, data_type: &str) -> String {
        if self.profile.is_numeric_type(data_type) || self.profile.is_boolean_type(data_type) {
            return value.to_string();
        }
        match self.profile.rules.enum_value_quote {
            Some(quote) => {
                let escaped = value
                    .replace('\\', "\\\\")
                    .replace(quote, &format!("\\{quote}"));
                format!("{quote}{escaped}{quote}")
            }
            None => value.to_string(),
        }
    }

    /// Type name of an inline enum declared by property `property_name`.
    pub fn to_enum_name(&self, property_name: &str) -> String {
        match self.profile.rules.enum_name {
            EnumNameStyle::UpperSnake => {
                let name = self
                    .to_model_name(property_name)
                    .to_shouty_snake_case()
                    .replace("[]", "");
                if starts_with_digit(&name) {
                    format!("_{name}")
                } else {
                    name
                }
            }
            EnumNameStyle::ModelName => {
                let name = self.to_model_name(property_name);
                if self.is_reserved_word(&name) || self.to_identifier(property_name) == name {
                    format!("{name}Enum")
                } else {
                    name
                }
            }
            EnumNameStyle::CamelSuffix => {
                format!("{}Enum", sanitize_name(property_name).to_upper_camel_case())
            }
        }
    }

    pub fn to_model_filename(&self, raw: &str) -> String {
        let model = self.to_model_name(raw);
        match self.profile.rules.model_file {
            ModelFileStyle::ModelName => model,
            ModelFileStyle::Snake => model.to_snake_case(),
            ModelFileStyle::PrefixedSnake => format!("model_{}", model.to_snake_case()),
        }
    }

    /// API (grouping) name for a tag.
    pub fn to_api_name(&self, tag: &str) -> String {
        let suffix = self.profile.rules.api_suffix;
        let base = sanitize_name(tag).to_upper_camel_case();
        if base.is_empty() {
            format!("Default{suffix}")
        } else {
            format!("{base}{suffix}")
        }
    }
}

/// Replace every run of non-word characters with a single `_`.
fn collapse_non_word(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_run = false;
    for ch in value.chars() {
        if ch.is_alphanumeric() || ch == '_' {
            out.push(ch);
            in_run = false;
        } else if !in_run {
            out.push('_');
            in_run = true;
        }
    }
    out
}
