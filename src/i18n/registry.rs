//! Summary language registry.
//!
//! Every article carries one summary per registered language. The registry
//! fixes their order on the card and the CSS class each summary block gets.

use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "hi")
    pub code: &'static str,

    /// English name of the language, used in log output
    pub name: &'static str,

    /// CSS class carried by every summary block written in this language
    pub summary_class: &'static str,

    /// Shown while the toggle is unchecked (exactly one language)
    pub is_canonical: bool,
}

pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: summary_languages(),
        })
    }

    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All summary languages, in card order.
    pub fn list(&self) -> &[LanguageConfig] {
        &self.languages
    }

    /// # Panics
    /// Panics unless exactly one language is marked canonical.
    pub fn canonical(&self) -> &LanguageConfig {
        let mut canonical = self.languages.iter().filter(|lang| lang.is_canonical);

        match (canonical.next(), canonical.next()) {
            (Some(lang), None) => lang,
            (None, _) => panic!("No canonical language found in registry"),
            (Some(_), Some(_)) => panic!("Multiple canonical languages found in registry"),
        }
    }
}

fn summary_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            summary_class: "summary-en",
            is_canonical: true,
        },
        LanguageConfig {
            code: "hi",
            name: "Hindi",
            summary_class: "summary-hi",
            is_canonical: false,
        },
    ]
}
