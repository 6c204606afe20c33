use super::ResultItem;
use regex::Regex;

/// Keeps the items whose link (or title, when `filter_url` is false) matches `filter`.
///
/// `filter` is expected to be anchored at the start of the text, see [`crate::compile_filter`].
pub fn filter_results(filter: &Regex, filter_url: bool, items: Vec<ResultItem>) -> Vec<ResultItem> {
    items
        .into_iter()
        .filter(|item| {
            let field = if filter_url {
                item.get_link()
            } else {
                item.get_title()
            };
            field.is_some_and(|text| filter.is_match(text))
        })
        .collect()
}
