//! Internationalization (i18n) support for the article feed.
//!
//! Articles carry two summaries, one per supported language, and the page
//! shows exactly one of them at a time. This module is the single place that
//! knows which languages exist, how they map to summary elements on the page,
//! and which static strings the page chrome uses.
//!
//! - `registry`: Supported languages and their summary CSS classes
//! - `language`: Type-safe Language handle used by the renderer and the toggle
//! - `strings`: Static strings used by the page chrome
//!
//! ```rust,ignore
//! use crate::i18n::Language;
//!
//! // The toggle checkbox maps directly onto a language
//! let shown = Language::from_toggle(true);
//! assert_eq!(shown.summary_class(), "summary-hi");
//! ```

mod language;
mod registry;
mod strings;

use registry::{LanguageConfig, LanguageRegistry};

pub use language::Language;
pub use strings::PAGE_STRINGS;
