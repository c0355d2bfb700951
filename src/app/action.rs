use crate::i18n::Language;

/// Side effects requested by the handler and performed by the main loop.
#[derive(Debug, PartialEq)]
pub enum Action {
    Geocode { query: String, language: Language },
    Quit,
}
