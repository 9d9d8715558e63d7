//! Page-level metadata: the searched keyword, the current page number and
//! the "About N results (T seconds)" line.

use super::optional;
use crate::dom::{self, ParsedPage};
use crate::error::{ExtractError, FieldResult};
use crate::rules::{Pattern, StatsRules};
use crate::text::{first_capture, parse_decimal, parse_integer};
use once_cell::sync::Lazy;
use regex::Regex;

static TOTAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d[\d,.\s]*)\s*results?").expect("valid total regex"));
static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\(\s*([\d.,]+)\s*sec").expect("valid time regex"));

pub fn extract_keyword(page: &ParsedPage, rules: &StatsRules) -> String {
    rules
        .keyword
        .first_on(page)
        .and_then(dom::value)
        .map(|v| crate::text::clean_text(&v))
        .unwrap_or_default()
}

pub fn extract_current_page(page: &ParsedPage, rules: &StatsRules) -> Option<u32> {
    let pattern = rules.current_page?;
    optional(page_number(page, &pattern))
}

/// Total result count and query time in seconds, each when printed.
pub fn extract_result_stats(page: &ParsedPage, rules: &StatsRules) -> (Option<u64>, Option<f64>) {
    let Some(line) = rules
        .result_stats
        .and_then(|pattern| pattern.first_on(page))
        .map(dom::text)
    else {
        return (None, None);
    };

    let total = optional(capture_number(&line, &TOTAL_RE).and_then(|n| parse_integer(&n)));
    let time = optional(capture_number(&line, &TIME_RE).and_then(|t| parse_decimal(&t)));
    (total, time)
}

fn page_number(page: &ParsedPage, pattern: &Pattern) -> FieldResult<u32> {
    let cell = pattern
        .first_on(page)
        .map(dom::text)
        .ok_or_else(|| ExtractError::missing("current_page"))?;
    let number = parse_integer(&cell)?;
    u32::try_from(number).map_err(|_| ExtractError::number(cell))
}

fn capture_number(line: &str, re: &Regex) -> FieldResult<String> {
    Some(first_capture(line, re))
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ExtractError::number(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{BING, GOOGLE_DESKTOP, GOOGLE_MOBILE};

    #[test]
    fn test_google_stats() {
        let page = ParsedPage::parse(
            r#"<form><textarea name="q">rust  programming</textarea></form>
               <div id="result-stats">About 1,870,000 results<nobr> (0.47 seconds)&nbsp;</nobr></div>
               <div id="foot"><table><tr><td class="YyVfkd">3</td></tr></table></div>"#,
        );
        let rules = &GOOGLE_DESKTOP.stats;
        assert_eq!(extract_keyword(&page, rules), "rust programming");
        assert_eq!(extract_current_page(&page, rules), Some(3));
        assert_eq!(extract_result_stats(&page, rules), (Some(1_870_000), Some(0.47)));
    }

    #[test]
    fn test_bing_stats() {
        let page = ParsedPage::parse(
            r#"<input id="sb_form_q" value="rust lang">
               <div id="b_tween"><span class="sb_count">2,340,000 results</span></div>
               <div class="b_pag"><a class="sb_pagS" href="/search?q=rust">1</a></div>"#,
        );
        let rules = &BING.stats;
        assert_eq!(extract_keyword(&page, rules), "rust lang");
        assert_eq!(extract_current_page(&page, rules), Some(1));
        assert_eq!(extract_result_stats(&page, rules), (Some(2_340_000), None));
    }

    #[test]
    fn test_missing_stats() {
        let page = ParsedPage::parse("<div></div>");
        assert_eq!(extract_keyword(&page, &GOOGLE_DESKTOP.stats), "");
        assert_eq!(extract_current_page(&page, &GOOGLE_DESKTOP.stats), None);
        assert_eq!(extract_result_stats(&page, &GOOGLE_MOBILE.stats), (None, None));
    }
}
