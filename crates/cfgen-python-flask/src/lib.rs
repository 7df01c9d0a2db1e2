pub mod decorate;
pub mod generator;
pub mod profile;

pub use generator::PythonFlaskLanguage;
pub use profile::python_flask_profile;
