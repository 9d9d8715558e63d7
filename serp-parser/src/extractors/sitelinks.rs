use super::{href_field, optional, text_field};
use crate::dom;
use crate::error::{ExtractError, FieldResult};
use crate::rules::{CardSitelinkRules, SitelinkRules};
use crate::types::{Sitelink, SitelinkType};
use crate::url_utils::resolve_url;
use scraper::ElementRef;
use tracing::debug;

/// Sitelinks under one result node.
///
/// Card sitelinks win when any are present; otherwise inline ones are used.
/// The two kinds are never mixed and an empty set is `None`.
pub fn extract_sitelinks(
    scope: ElementRef<'_>,
    rules: &SitelinkRules,
    base: Option<&str>,
) -> Option<Vec<Sitelink>> {
    let cards = rules
        .card
        .as_ref()
        .map(|card| collect(card.item.all_in(scope), |node| card_sitelink(node, card, base)))
        .unwrap_or_default();
    if !cards.is_empty() {
        return Some(cards);
    }

    let inline = rules
        .inline
        .as_ref()
        .map(|pattern| collect(pattern.all_in(scope), |node| inline_sitelink(node, base)))
        .unwrap_or_default();
    if !inline.is_empty() {
        return Some(inline);
    }

    None
}

fn collect<'a>(
    nodes: Vec<ElementRef<'a>>,
    build: impl Fn(ElementRef<'a>) -> FieldResult<Sitelink>,
) -> Vec<Sitelink> {
    nodes
        .into_iter()
        .filter_map(|node| match build(node) {
            Ok(link) => Some(link),
            Err(e) => {
                debug!("Skipping sitelink: {}", e);
                None
            }
        })
        .collect()
}

fn card_sitelink(
    node: ElementRef<'_>,
    rules: &CardSitelinkRules,
    base: Option<&str>,
) -> FieldResult<Sitelink> {
    let title = text_field(node, &rules.title, "sitelink.title")?;
    let href = optional(href_field(node, &rules.link, "sitelink.href"));
    let snippet = optional(text_field(node, &rules.snippet, "sitelink.snippet"));

    Ok(Sitelink {
        title,
        href: href.map(|h| resolve_url(&h, base)),
        snippet,
        kind: SitelinkType::Card,
    })
}

fn inline_sitelink(node: ElementRef<'_>, base: Option<&str>) -> FieldResult<Sitelink> {
    let title = dom::text(node);
    if title.is_empty() {
        return Err(ExtractError::missing("sitelink.title"));
    }

    Ok(Sitelink {
        title,
        href: dom::attr(node, "href").map(|h| resolve_url(&h, base)),
        snippet: None,
        kind: SitelinkType::Inline,
    })
}
