pub mod decorate;
pub mod generator;
pub mod profile;

pub use generator::{SwiftLanguage, SwiftVersion};
pub use profile::swift_profile;
