use cfgen_core::LanguageConfig;
use cfgen_core::config::{LanguageId, LanguageOptions};
use cfgen_core::model::GenerationOutput;
use cfgen_core::profile::LanguageProfile;

use crate::decorate::decorate;
use crate::profile::go_profile;

/// Go client target.
pub struct GoLanguage;

impl LanguageConfig for GoLanguage {
    fn id(&self) -> LanguageId {
        LanguageId::Go
    }

    fn profile(&self) -> LanguageProfile {
        go_profile()
    }

    fn decorate(&self, output: &mut GenerationOutput, _options: &LanguageOptions) {
        log::debug!("decorating {} Go operations", output.operations.len());
        decorate(output);
    }
}
