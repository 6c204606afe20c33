//! Result extraction: turns a result page into [`ResultItem`]s using the configured selectors.
//!
//! A block that lacks one of the expected nodes fails the whole extraction for that page,
//! nothing is skipped.
use super::{CResult, ResultItem};
use crate::ScrapeError;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tokio::time::Duration;

static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").expect("static selector"));
static HEADING: Lazy<Selector> = Lazy::new(|| Selector::parse("h3").expect("static selector"));

fn parse_selector(source: &str) -> CResult<Selector> {
    Selector::parse(source)
        .map_err(|e| ScrapeError::Config(format!("invalid selector {source:?}: {e}")))
}

/// The three css selector paths locating a result block, its title and its snippet.
#[derive(Debug, Clone)]
pub struct ResultSelectors {
    block: (String, Selector),
    title: (String, Selector),
    details: Option<(String, Selector)>,
}

impl ResultSelectors {
    pub fn new(block: &str, title: &str, details: Option<&str>) -> CResult<Self> {
        Ok(ResultSelectors {
            block: (block.to_string(), parse_selector(block)?),
            title: (title.to_string(), parse_selector(title)?),
            details: match details {
                Some(d) => Some((d.to_string(), parse_selector(d)?)),
                None => None,
            },
        })
    }

    pub fn has_details(&self) -> bool {
        self.details.is_some()
    }
}

fn collapse_text(element: ElementRef) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn extract_block(block: ElementRef, index: usize, selectors: &ResultSelectors) -> CResult<ResultItem> {
    let (title_src, title_sel) = &selectors.title;
    let missing = |selector: &str| ScrapeError::MissingNode {
        selector: selector.to_string(),
        block: index,
    };

    let title = block.select(title_sel).next().ok_or_else(|| missing(title_src))?;
    let anchor = if title.value().name() == "a" {
        title
    } else {
        title
            .select(&ANCHOR)
            .next()
            .ok_or_else(|| missing(&format!("{title_src} a")))?
    };
    let link = anchor
        .value()
        .attr("href")
        .ok_or(ScrapeError::MissingHref { block: index })?;
    let title_text = match title.select(&HEADING).next() {
        Some(heading) => collapse_text(heading),
        None => collapse_text(title),
    };

    let mut item = ResultItem::new();
    item.set("link", link);
    item.set("title", title_text);
    if let Some((details_src, details_sel)) = &selectors.details {
        let details = block
            .select(details_sel)
            .next()
            .ok_or_else(|| missing(details_src))?;
        item.set("extra", collapse_text(details));
    }
    Ok(item)
}

/// Extracts one item per result block, in document order.
pub fn extract_results(html: &str, selectors: &ResultSelectors) -> CResult<Vec<ResultItem>> {
    let document = Html::parse_document(html);
    document
        .select(&selectors.block.1)
        .enumerate()
        .map(|(i, block)| extract_block(block, i, selectors))
        .collect()
}

/// [`extract_results`] on a blocking worker, abandoned once `timeout` elapses.
pub async fn extract_with_timeout(
    html: String,
    selectors: ResultSelectors,
    timeout: Duration,
) -> CResult<Vec<ResultItem>> {
    let work = tokio::task::spawn_blocking(move || extract_results(&html, &selectors));
    match tokio::time::timeout(timeout, work).await {
        Ok(joined) => joined?,
        Err(_) => Err(ScrapeError::ExtractTimeout {
            seconds: timeout.as_secs(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_title_is_its_own_link() {
        let html = r#"<div class="g"><a class="t" href="https://x.io">X <b>io</b></a></div>"#;
        let selectors = ResultSelectors::new(".g", ".t", None).unwrap();
        let items = extract_results(html, &selectors).unwrap();
        assert_eq!(items[0].get_link(), Some("https://x.io"));
        assert_eq!(items[0].get_title(), Some("X io"));
        assert!(items[0].get("extra").is_none());
    }

    #[test]
    fn bad_selector_is_rejected() {
        assert!(matches!(
            ResultSelectors::new("..g", ".t", None),
            Err(ScrapeError::Config(_))
        ));
    }
}
