use cfgen_core::LanguageConfig;
use cfgen_core::config::{LanguageId, LanguageOptions};
use cfgen_core::model::GenerationOutput;
use cfgen_core::profile::LanguageProfile;

use crate::decorate::{Decoration, decorate};
use crate::profile::swift_profile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwiftVersion {
    Swift4,
    Swift5,
}

/// Swift client target.
pub struct SwiftLanguage {
    pub version: SwiftVersion,
}

impl SwiftLanguage {
    pub fn swift4() -> Self {
        Self {
            version: SwiftVersion::Swift4,
        }
    }

    pub fn swift5() -> Self {
        Self {
            version: SwiftVersion::Swift5,
        }
    }
}

impl LanguageConfig for SwiftLanguage {
    fn id(&self) -> LanguageId {
        match self.version {
            SwiftVersion::Swift4 => LanguageId::Swift4,
            SwiftVersion::Swift5 => LanguageId::Swift5,
        }
    }

    fn profile(&self) -> LanguageProfile {
        swift_profile(self.id())
    }

    fn decorate(&self, output: &mut GenerationOutput, options: &LanguageOptions) {
        log::debug!(
            "decorating {} {} models",
            output.models.len(),
            self.id()
        );
        decorate(
            output,
            Decoration {
                unwrap_required: options.unwrap_required,
                swift5: self.version == SwiftVersion::Swift5,
            },
        );
    }
}
