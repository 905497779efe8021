//! Language type: a summary language known to the registry.

use crate::i18n::{LanguageConfig, LanguageRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "hi")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };

    pub const HINDI: Language = Language { code: "hi" };

    /// Map the state of the language toggle checkbox onto the language it selects.
    ///
    /// Checked means Hindi, unchecked means the canonical language.
    pub fn from_toggle(checked: bool) -> Language {
        if checked {
            Language::HINDI
        } else {
            Language::canonical()
        }
    }

    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// All summary languages, in card order.
    pub fn all() -> Vec<Language> {
        LanguageRegistry::get()
            .list()
            .iter()
            .map(|config| Language { code: config.code })
            .collect()
    }

    /// # Panics
    /// Panics if the code is not registered, which cannot happen for values
    /// built from the constants or the registry.
    fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// CSS class of the summary blocks written in this language.
    pub fn summary_class(&self) -> &'static str {
        self.config().summary_class
    }
}
