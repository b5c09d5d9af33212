pub mod language;

pub use language::{use_language, LanguageContext, LanguageProvider};
