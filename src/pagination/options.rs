//! Option lists for the page and per-page selectors.

use crate::i18n::{tokens, Translator};

/// Per-page sizes offered when the config does not override them.
pub const DEFAULT_PER_PAGE_OPTIONS: [i64; 4] = [10, 20, 30, 40];

/// One entry of a selectable list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectOption {
    pub value: i64,
    pub label: String,
    pub aria_label: String,
}

/// Build an option whose label is its value.
pub fn factory_select_option(value: i64, aria_label: impl Fn(i64) -> String) -> SelectOption {
    SelectOption {
        value,
        label: value.to_string(),
        aria_label: aria_label(value),
    }
}

/// Build options `1..=iterations`. Non-positive counts give no options.
pub fn build_select_options(
    iterations: i64,
    aria_label: impl Fn(i64) -> String,
) -> Vec<SelectOption> {
    (1..=iterations.max(0))
        .map(|value| factory_select_option(value, &aria_label))
        .collect()
}

/// A single page selector option, "Go to page N".
pub fn page_option(page: i64, go_to: &str) -> SelectOption {
    factory_select_option(page, |page| format!("{go_to} {page}"))
}

/// Options for the page selector: one per page. Allocates the whole list, so
/// widgets use [`PaginationSelect::pages`](crate::widgets::PaginationSelect::pages)
/// instead.
pub fn page_options(
    translator: &dyn Translator,
    locale: &str,
    page_count: i64,
) -> Vec<SelectOption> {
    let go_to = translator.translate(locale, tokens::GO_TO_PAGE);
    build_select_options(page_count, |page| format!("{go_to} {page}"))
}

/// Options for the per-page selector: "Select per page N items".
pub fn per_page_options(
    translator: &dyn Translator,
    locale: &str,
    sizes: &[i64],
) -> Vec<SelectOption> {
    let select = translator.translate(locale, tokens::SELECT_PER_PAGE);
    let items = translator.translate(locale, tokens::ITEMS);
    sizes
        .iter()
        .map(|&size| factory_select_option(size, |n| format!("{select} {n} {items}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Dictionary;
    use pretty_assertions::assert_eq;

    #[test]
    fn factory_uses_value_as_label() {
        let opt = factory_select_option(7, |v| format!("aria {v}"));
        assert_eq!(
            opt,
            SelectOption {
                value: 7,
                label: "7".into(),
                aria_label: "aria 7".into(),
            }
        );
    }

    #[test]
    fn build_counts_from_one() {
        let opts = build_select_options(3, |v| v.to_string());
        let values: Vec<i64> = opts.iter().map(|o| o.value).collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn build_with_no_iterations() {
        assert!(build_select_options(0, |v| v.to_string()).is_empty());
        assert!(build_select_options(-2, |v| v.to_string()).is_empty());
    }

    #[test]
    fn page_options_aria_labels() {
        let dict = Dictionary::builtin();
        let opts = page_options(&dict, "en", 10);
        assert_eq!(opts.len(), 10);
        assert_eq!(opts[3].aria_label, "Go to page 4");
        assert_eq!(opts[3].label, "4");
    }

    #[test]
    fn page_option_matches_list_entry() {
        let dict = Dictionary::builtin();
        let opts = page_options(&dict, "en", 5);
        assert_eq!(page_option(5, "Go to page"), opts[4]);
    }

    #[test]
    fn per_page_options_default_sizes() {
        let dict = Dictionary::builtin();
        let opts = per_page_options(&dict, "en", &DEFAULT_PER_PAGE_OPTIONS);
        let values: Vec<i64> = opts.iter().map(|o| o.value).collect();
        assert_eq!(values, vec![10, 20, 30, 40]);
        assert_eq!(opts[1].aria_label, "Select per page 20 items");
    }

    #[test]
    fn per_page_options_translated() {
        let dict = Dictionary::builtin();
        let opts = per_page_options(&dict, "pt", &[10]);
        assert_eq!(opts[0].aria_label, "Selecionar por página 10 itens");
    }
}
