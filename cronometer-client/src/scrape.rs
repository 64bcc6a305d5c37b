//! Login page scraping.

use std::sync::LazyLock;

use scraper::{Html, Selector};

static ANTICSRF_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"input[name="anticsrf"]"#).expect("static selector"));

/// Extracts the hidden `anticsrf` input's value from login page HTML.
///
/// The HTML parse itself is lossy and never fails; a missing input, a
/// value-less input, or an empty value all come back as `None`. The
/// token is short-lived and must be scraped fresh immediately before
/// each login attempt — a stale one gets the login rejected.
pub(crate) fn extract_anticsrf(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    document
        .select(&ANTICSRF_SELECTOR)
        .find_map(|input| input.value().attr("value"))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
