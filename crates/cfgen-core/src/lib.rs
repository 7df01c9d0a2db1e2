pub mod config;
pub mod error;
pub mod model;
pub mod naming;
pub mod parse;
pub mod profile;
pub mod reconcile;
pub mod resolve;
pub mod schema;
pub mod transform;

pub use transform::generate;

/// A target language plugged into the shared generation pass.
///
/// Implementors supply their profile as data and may fill the typed
/// per-language fields of the output once the pass has run.
pub trait LanguageConfig {
    fn id(&self) -> config::LanguageId;

    /// Built-in profile, before user options are applied.
    fn profile(&self) -> profile::LanguageProfile;

    fn decorate(&self, _output: &mut model::GenerationOutput, _options: &config::LanguageOptions) {}
}
