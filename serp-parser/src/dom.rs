//! Thin query layer over `scraper::Html`.
//!
//! Every lookup tolerates zero matches and bad patterns: a selector that
//! fails to compile is logged and behaves as if nothing matched.

use crate::text::clean_text;
use scraper::{ElementRef, Html, Selector};
use tracing::warn;

/// A loaded result page. Lives for one extraction run and is only read.
pub struct ParsedPage {
    document: Html,
}

impl ParsedPage {
    /// Parse raw markup. Empty or non-HTML input yields a degenerate tree
    /// where every selection is empty.
    pub fn parse(markup: &str) -> Self {
        Self {
            document: Html::parse_document(markup),
        }
    }

    pub fn select(&self, pattern: &str) -> Vec<ElementRef<'_>> {
        match compile(pattern) {
            Some(selector) => self.document.select(&selector).collect(),
            None => Vec::new(),
        }
    }

    pub fn select_first(&self, pattern: &str) -> Option<ElementRef<'_>> {
        compile(pattern).and_then(|selector| self.document.select(&selector).next())
    }

    pub fn exists(&self, pattern: &str) -> bool {
        self.select_first(pattern).is_some()
    }
}

impl std::fmt::Debug for ParsedPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedPage")
            .field("nodes", &self.document.tree.nodes().count())
            .finish()
    }
}

pub(crate) fn compile(pattern: &str) -> Option<Selector> {
    match Selector::parse(pattern) {
        Ok(selector) => Some(selector),
        Err(e) => {
            warn!("Ignoring invalid selector '{}': {:?}", pattern, e);
            None
        }
    }
}

/// Descendants of `scope` matching `pattern`, in document order.
pub fn select_in<'a>(scope: ElementRef<'a>, pattern: &str) -> Vec<ElementRef<'a>> {
    match compile(pattern) {
        Some(selector) => scope.select(&selector).collect(),
        None => Vec::new(),
    }
}

pub fn first_in<'a>(scope: ElementRef<'a>, pattern: &str) -> Option<ElementRef<'a>> {
    compile(pattern).and_then(|selector| scope.select(&selector).next())
}

/// Whether `el` itself matches `pattern`.
pub fn matches(el: ElementRef<'_>, pattern: &str) -> bool {
    compile(pattern).is_some_and(|selector| selector.matches(&el))
}

/// Trimmed text content with whitespace runs collapsed.
pub fn text(el: ElementRef<'_>) -> String {
    clean_text(&el.text().collect::<String>())
}

pub fn attr(el: ElementRef<'_>, name: &str) -> Option<String> {
    el.value()
        .attr(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Value of a form control: the `value` attribute of inputs, the text of
/// a textarea.
pub fn value(el: ElementRef<'_>) -> Option<String> {
    match el.value().name() {
        "textarea" => Some(text(el)).filter(|v| !v.is_empty()),
        _ => attr(el, "value"),
    }
}

pub fn parent(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.parent().and_then(ElementRef::wrap)
}

/// Nearest ancestor (not `el` itself) matching `pattern`.
pub fn closest<'a>(el: ElementRef<'a>, pattern: &str) -> Option<ElementRef<'a>> {
    let selector = compile(pattern)?;
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| selector.matches(ancestor))
}

/// Following element siblings matching `pattern`.
pub fn next_siblings<'a>(el: ElementRef<'a>, pattern: &str) -> Vec<ElementRef<'a>> {
    match compile(pattern) {
        Some(selector) => el
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .filter(|sibling| selector.matches(sibling))
            .collect(),
        None => Vec::new(),
    }
}

pub fn prev_sibling<'a>(el: ElementRef<'a>, pattern: &str) -> Option<ElementRef<'a>> {
    let selector = compile(pattern)?;
    el.prev_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sibling| selector.matches(sibling))
}

pub fn children(el: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    el.children().filter_map(ElementRef::wrap)
}
