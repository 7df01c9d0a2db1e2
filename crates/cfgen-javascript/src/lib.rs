pub mod decorate;
pub mod generator;
pub mod profile;

pub use generator::JavascriptLanguage;
pub use profile::javascript_profile;
