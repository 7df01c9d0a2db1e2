//! One generation pass: document in, decorated descriptors out.

pub mod models;
pub mod operations;

use indexmap::IndexMap;

use crate::LanguageConfig;
use crate::config::LanguageOptions;
use crate::error::TransformError;
use crate::model::{GenerationOutput, ModelDescriptor};
use crate::parse::spec::OpenApiSpec;
use crate::profile::ReconcileMode;
use crate::reconcile::ModelReconciler;
use crate::resolve::TypeResolver;
use crate::schema::SchemaDocument;

pub use models::{build_model, build_models, build_property, detect_recursive_models};
pub use operations::{build_operation, build_operations};

/// Run a full generation pass for one target language.
pub fn generate(
    spec: &OpenApiSpec,
    config: &dyn LanguageConfig,
    options: &LanguageOptions,
) -> Result<GenerationOutput, TransformError> {
    let profile = config.profile().with_options(options)?;
    let document = SchemaDocument::from_spec(spec)?;
    let resolver = TypeResolver::new(&profile, &document);

    let models = build_models(&resolver, &document)?;
    let mut models = reconcile_models(models, profile.reconcile);
    detect_recursive_models(&resolver, &mut models);
    let operations = build_operations(&resolver, spec)?;

    log::debug!(
        "{}: {} models, {} operations",
        config.id(),
        models.len(),
        operations.len()
    );

    let mut output = GenerationOutput {
        language: config.id(),
        models,
        operations,
    };
    config.decorate(&mut output, options);
    Ok(output)
}

/// Reconcile every model against its ancestors. Parents are taken as built,
/// so the result does not depend on document order. With
/// [`ReconcileMode::None`] only `parent_vars` is filled in.
pub fn reconcile_models(models: Vec<ModelDescriptor>, mode: ReconcileMode) -> Vec<ModelDescriptor> {
    let reconciler = ModelReconciler::new(mode);
    let raw: IndexMap<String, ModelDescriptor> = models
        .iter()
        .map(|model| (model.name.clone(), model.clone()))
        .collect();
    models
        .into_iter()
        .map(|model| {
            if model.has_parent() {
                reconciler.reconcile_hierarchy(model, &raw)
            } else {
                model
            }
        })
        .collect()
}
