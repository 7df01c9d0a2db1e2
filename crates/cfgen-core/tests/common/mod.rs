#![allow(dead_code)]

use cfgen_core::LanguageConfig;
use cfgen_core::config::LanguageId;
use cfgen_core::model::ModelDescriptor;
use cfgen_core::profile::{
    CasingStyle, ContainerSyntax, EnumNameStyle, EnumVarStyle, EscapeStyle, LanguageProfile,
    LeadingDigit, ModelFileStyle, NamingConfig, NamingRules, PrimitiveSet, ReconcileMode,
    ReservedWords, TypeTable,
};

pub const RESERVED: &[&str] = &["return", "type", "string", "map", "func", "break"];

/// Go-shaped profile with a selectable reconcile mode.
pub fn profile(reconcile: ReconcileMode) -> LanguageProfile {
    LanguageProfile {
        language: LanguageId::Go,
        type_table: TypeTable::from_pairs(&[
            ("integer", "int32"),
            ("long", "int64"),
            ("number", "float32"),
            ("float", "float32"),
            ("double", "float64"),
            ("boolean", "bool"),
            ("string", "string"),
            ("date", "string"),
            ("DateTime", "time.Time"),
            ("object", "interface{}"),
        ]),
        primitives: PrimitiveSet::new(
            &["string", "bool", "int32", "int64", "float32", "float64"],
            &["time.Time", "interface{}"],
        ),
        naming: NamingConfig::new(ReservedWords::case_insensitive(RESERVED), CasingStyle::CamelUpper),
        rules: NamingRules {
            param_casing: Some(CasingStyle::CamelLower),
            operation_casing: CasingStyle::CamelUpper,
            allowed_property_casing: &[CasingStyle::CamelUpper],
            escape: EscapeStyle::SuffixUnderscore,
            leading_digit: LeadingDigit::Prefix("Var"),
            enum_var: EnumVarStyle::GoConstant,
            enum_name: EnumNameStyle::UpperSnake,
            numeric_types: &["int32", "int64", "float32", "float64"],
            boolean_types: &["bool"],
            model_file: ModelFileStyle::PrefixedSnake,
            ..NamingRules::default()
        },
        containers: ContainerSyntax {
            array: |t| format!("[]{t}"),
            map: |t| format!("map[string]{t}"),
        },
        reconcile,
    }
}

pub struct TestLanguage(pub ReconcileMode);

impl LanguageConfig for TestLanguage {
    fn id(&self) -> LanguageId {
        LanguageId::Go
    }

    fn profile(&self) -> LanguageProfile {
        profile(self.0)
    }
}

/// `Name(Parent): a, b` per model, one per line.
pub fn model_summary(models: &[ModelDescriptor]) -> String {
    models
        .iter()
        .map(|model| {
            let parent = model
                .parent_class
                .as_deref()
                .map(|p| format!("({p})"))
                .unwrap_or_default();
            let props: Vec<&str> = model
                .own_properties
                .iter()
                .map(|p| p.base_name.as_str())
                .collect();
            format!("{}{parent}: {}", model.class_name, props.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
