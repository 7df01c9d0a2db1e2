use cfgen_core::LanguageConfig;
use cfgen_core::config::{LanguageId, LanguageOptions};
use cfgen_core::model::GenerationOutput;
use cfgen_core::profile::LanguageProfile;

use crate::decorate::decorate;
use crate::profile::javascript_profile;

/// JavaScript (ES5 and ES6) client target.
pub struct JavascriptLanguage;

impl LanguageConfig for JavascriptLanguage {
    fn id(&self) -> LanguageId {
        LanguageId::Javascript
    }

    fn profile(&self) -> LanguageProfile {
        javascript_profile()
    }

    fn decorate(&self, output: &mut GenerationOutput, _options: &LanguageOptions) {
        log::debug!("building argument lists for {} operations", output.operations.len());
        decorate(output);
    }
}
