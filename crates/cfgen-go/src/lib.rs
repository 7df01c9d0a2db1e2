pub mod decorate;
pub mod generator;
pub mod profile;

pub use generator::GoLanguage;
pub use profile::go_profile;
