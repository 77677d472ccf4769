//! Display strings for the pages and items information.

use crate::i18n::{tokens, Translator};

use super::model::ItemRange;

/// `"of 10 pages"`, or `"3 of 10 pages"` when `show_current_page` is set.
///
/// The singular `page` token is used when there is exactly one page.
pub fn pages_text(
    translator: &dyn Translator,
    locale: &str,
    current_page: i64,
    page_count: i64,
    show_current_page: bool,
) -> String {
    let of = translator.translate(locale, tokens::OF);
    let noun = if page_count == 1 {
        translator.translate(locale, tokens::PAGE)
    } else {
        translator.translate(locale, tokens::PAGES)
    };

    if show_current_page {
        format!("{current_page} {of} {page_count} {noun}")
    } else {
        format!("{of} {page_count} {noun}")
    }
}

/// `"21-30 of 100 items"`.
///
/// When the range starts at item 1 and reaches past `total`, the upper bound
/// is clamped to `total` so a short single page reads `"1-4 of 4 items"`.
pub fn items_text(
    translator: &dyn Translator,
    locale: &str,
    range: ItemRange,
    total: i64,
) -> String {
    let of = translator.translate(locale, tokens::OF);
    let items = translator.translate(locale, tokens::ITEMS);

    let last = if range.first == 1 && range.last >= total {
        total
    } else {
        range.last
    };
    format!("{}-{last} {of} {total} {items}", range.first)
}
