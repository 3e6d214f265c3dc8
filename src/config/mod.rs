// Configuration module.
// Locates, loads, and saves the JSON settings file.

pub mod paths;
pub mod settings;

pub use settings::Settings;
