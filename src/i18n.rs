//! Translation lookup for user-facing pagination strings.
//!
//! Widgets never hold a global dictionary. A [`Translator`] is injected into
//! the controller, so hosts can plug in their own catalog and tests can
//! substitute a closure.
//!
//! Lookup never fails. [`Dictionary`] resolves a `(locale, token)` pair by
//! trying, in order: the exact locale, its language prefix (`pt-BR` -> `pt`),
//! [`DEFAULT_LOCALE`], and finally the token itself.

use std::collections::HashMap;

/// Locale used when the props do not name one.
pub const DEFAULT_LOCALE: &str = "en";

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

/// Translation tokens used by the pagination widgets.
pub mod tokens {
    pub const OF: &str = "of";
    pub const PAGE: &str = "page";
    pub const PAGES: &str = "pages";
    pub const ITEMS: &str = "items";
    pub const ITEMS_PER_PAGE: &str = "items_per_page";
    pub const PREVIOUS_PAGE: &str = "previous_page";
    pub const NEXT_PAGE: &str = "next_page";
    pub const GO_TO_PAGE: &str = "go_to_page";
    pub const SELECT_PER_PAGE: &str = "select_per_page";
}

// ---------------------------------------------------------------------------
// Translator
// ---------------------------------------------------------------------------

/// Resolves a token to display text for a locale.
pub trait Translator {
    /// Translate `token` for `locale`. Must always return something.
    fn translate(&self, locale: &str, token: &str) -> String;
}

impl<F> Translator for F
where
    F: Fn(&str, &str) -> String,
{
    fn translate(&self, locale: &str, token: &str) -> String {
        self(locale, token)
    }
}

// ---------------------------------------------------------------------------
// Dictionary
// ---------------------------------------------------------------------------

/// In-memory translation catalog keyed by locale, then token.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<String, HashMap<String, String>>,
}

const EN: &[(&str, &str)] = &[
    (tokens::OF, "of"),
    (tokens::PAGE, "page"),
    (tokens::PAGES, "pages"),
    (tokens::ITEMS, "items"),
    (tokens::ITEMS_PER_PAGE, "Items per page:"),
    (tokens::PREVIOUS_PAGE, "previous page"),
    (tokens::NEXT_PAGE, "next page"),
    (tokens::GO_TO_PAGE, "Go to page"),
    (tokens::SELECT_PER_PAGE, "Select per page"),
];

const PT: &[(&str, &str)] = &[
    (tokens::OF, "de"),
    (tokens::PAGE, "página"),
    (tokens::PAGES, "páginas"),
    (tokens::ITEMS, "itens"),
    (tokens::ITEMS_PER_PAGE, "Itens por página:"),
    (tokens::PREVIOUS_PAGE, "página anterior"),
    (tokens::NEXT_PAGE, "próxima página"),
    (tokens::GO_TO_PAGE, "Ir para a página"),
    (tokens::SELECT_PER_PAGE, "Selecionar por página"),
];

const ES: &[(&str, &str)] = &[
    (tokens::OF, "de"),
    (tokens::PAGE, "página"),
    (tokens::PAGES, "páginas"),
    (tokens::ITEMS, "elementos"),
    (tokens::ITEMS_PER_PAGE, "Elementos por página:"),
    (tokens::PREVIOUS_PAGE, "página anterior"),
    (tokens::NEXT_PAGE, "página siguiente"),
    (tokens::GO_TO_PAGE, "Ir a la página"),
    (tokens::SELECT_PER_PAGE, "Seleccionar por página"),
];

impl Dictionary {
    /// Create an empty dictionary. Every lookup falls back to the token.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalog: `en`, `pt`, `es`.
    pub fn builtin() -> Self {
        let mut dict = Self::new();
        for (locale, table) in [("en", EN), ("pt", PT), ("es", ES)] {
            for (token, text) in table {
                dict.insert(locale, token, *text);
            }
        }
        dict
    }

    /// Add or replace a single entry.
    pub fn insert(&mut self, locale: &str, token: &str, text: impl Into<String>) {
        self.entries
            .entry(locale.to_owned())
            .or_default()
            .insert(token.to_owned(), text.into());
    }

    /// Add or replace a single entry (builder).
    pub fn with(mut self, locale: &str, token: &str, text: impl Into<String>) -> Self {
        self.insert(locale, token, text);
        self
    }

    /// Exact lookup, no fallback.
    pub fn lookup(&self, locale: &str, token: &str) -> Option<&str> {
        self.entries
            .get(locale)
            .and_then(|table| table.get(token))
            .map(String::as_str)
    }

    /// Whether any entry exists for `locale`.
    pub fn has_locale(&self, locale: &str) -> bool {
        self.entries.contains_key(locale)
    }
}

/// The language part of a locale tag (`pt-BR` -> `pt`, `en_US` -> `en`).
fn language_of(locale: &str) -> &str {
    locale.split(['-', '_']).next().unwrap_or(locale)
}

impl Translator for Dictionary {
    fn translate(&self, locale: &str, token: &str) -> String {
        let candidates = [locale, language_of(locale), DEFAULT_LOCALE];
        match candidates.iter().find_map(|l| self.lookup(l, token)) {
            Some(text) => text.to_owned(),
            None => {
                log::trace!("no translation for {token:?} in {locale:?}");
                token.to_owned()
            }
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
