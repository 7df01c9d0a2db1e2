use cfgen_core::LanguageConfig;
use cfgen_core::config::{LanguageId, LanguageOptions};
use cfgen_core::model::GenerationOutput;
use cfgen_core::profile::LanguageProfile;

use crate::decorate::decorate;
use crate::profile::python_flask_profile;

/// Python server target built on Flask and connexion.
pub struct PythonFlaskLanguage;

impl LanguageConfig for PythonFlaskLanguage {
    fn id(&self) -> LanguageId {
        LanguageId::PythonFlask
    }

    fn profile(&self) -> LanguageProfile {
        python_flask_profile()
    }

    fn decorate(&self, output: &mut GenerationOutput, options: &LanguageOptions) {
        log::debug!("routing operations to {}", options.controller_package);
        decorate(output, &options.controller_package);
    }
}
