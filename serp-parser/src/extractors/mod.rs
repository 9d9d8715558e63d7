//! One module per result-page feature.
//!
//! Extractors are plain functions over a classified page and the variant's
//! rule block. Field helpers return `FieldResult`; item builders decide per
//! field whether a failure omits the field (`optional`), defaults it
//! (`or_default`) or drops the whole item (`?`).

pub mod ads;
pub mod hotels;
pub mod locals;
pub mod organic;
pub mod pagination;
pub mod related;
pub mod shop;
pub mod sitelinks;
pub mod stats;
pub mod stories;
pub mod thumbnails;
pub mod videos;

use crate::dom;
use crate::error::{ExtractError, FieldResult};
use crate::rules::Pattern;
use crate::types::LinkType;
use crate::url_utils::{classify_link_type, get_domain, resolve_url};
use scraper::ElementRef;
use std::collections::HashSet;
use tracing::debug;

/// Non-empty text of the first node matching `pattern` under `scope`.
pub(crate) fn text_field(
    scope: ElementRef<'_>,
    pattern: &Pattern,
    field: &'static str,
) -> FieldResult<String> {
    pattern
        .first_in(scope)
        .map(dom::text)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| ExtractError::missing(field))
}

pub(crate) fn attr_field(
    scope: ElementRef<'_>,
    pattern: &Pattern,
    name: &str,
    field: &'static str,
) -> FieldResult<String> {
    pattern
        .first_in(scope)
        .and_then(|el| dom::attr(el, name))
        .ok_or_else(|| ExtractError::missing(field))
}

pub(crate) fn href_field(
    scope: ElementRef<'_>,
    pattern: &Pattern,
    field: &'static str,
) -> FieldResult<String> {
    attr_field(scope, pattern, "href", field)
}

/// `href` of `el` itself, for item nodes that are the anchor.
pub(crate) fn own_href(el: ElementRef<'_>, field: &'static str) -> FieldResult<String> {
    dom::attr(el, "href").ok_or_else(|| ExtractError::missing(field))
}

/// Keep a field only if it extracted cleanly.
pub(crate) fn optional<T>(result: FieldResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("Omitting field: {}", e);
            None
        }
    }
}

/// Fall back to the type's empty value when a field fails.
pub(crate) fn or_default<T: Default>(result: FieldResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            debug!("Defaulting field: {}", e);
            T::default()
        }
    }
}

/// Resolved destination of a result link, shared by organic results and ads.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LinkInfo {
    pub url: String,
    pub domain: String,
    pub link_type: LinkType,
}

impl LinkInfo {
    /// An unparsable destination keeps its raw URL with an empty domain.
    pub(crate) fn resolve(raw: &str, base: Option<&str>) -> Self {
        let url = resolve_url(raw, base);
        let domain = or_default(get_domain(&url, base));
        let link_type = or_default(classify_link_type(&url, base));
        Self {
            url,
            domain,
            link_type,
        }
    }
}

/// Drop item nodes nested inside another matched item, so a wrapper and the
/// result it wraps count once.
pub(crate) fn outermost(nodes: Vec<ElementRef<'_>>) -> Vec<ElementRef<'_>> {
    let ids: HashSet<_> = nodes.iter().map(|node| node.id()).collect();
    nodes
        .into_iter()
        .filter(|node| !node.ancestors().any(|ancestor| ids.contains(&ancestor.id())))
        .collect()
}

/// Number items in document order, starting at 1.
pub(crate) fn numbered<T>(items: impl IntoIterator<Item = T>) -> impl Iterator<Item = (u32, T)> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| (index as u32 + 1, item))
}
