pub mod framework;
pub mod language;

pub use framework::{framework_for, UNKNOWN_FRAMEWORK};
pub use language::{detect_language, Language};
