pub mod catalog;
pub mod overrides;
pub mod providers;
pub mod settings;
pub mod voice;
