use super::sitelinks::extract_sitelinks;
use super::{href_field, numbered, optional, or_default, outermost, text_field, LinkInfo};
use crate::dom::{self, ParsedPage};
use crate::error::FieldResult;
use crate::rules::OrganicRules;
use crate::types::OrganicResult;
use crate::url_utils::resolve_url;
use scraper::ElementRef;
use tracing::debug;

/// Organic results in document order, positions 1..=n.
///
/// A node without a result link is not a result and does not take a
/// position; every other failure only omits or empties that field.
pub fn extract_organic(page: &ParsedPage, rules: &OrganicRules) -> Vec<OrganicResult> {
    let Some(container) = rules.container.first_on(page) else {
        debug!("Organic container not found");
        return Vec::new();
    };

    let drafts = outermost(rules.item.all_in(container))
        .into_iter()
        .filter_map(|node| match build_result(node, rules) {
            Ok(draft) => Some(draft),
            Err(e) => {
                debug!("Skipping organic node: {}", e);
                None
            }
        });

    numbered(drafts)
        .map(|(position, result)| OrganicResult { position, ..result })
        .collect()
}

fn build_result(node: ElementRef<'_>, rules: &OrganicRules) -> FieldResult<OrganicResult> {
    let href = href_field(node, &rules.link, "organic.link")?;
    let LinkInfo {
        url,
        domain,
        link_type,
    } = LinkInfo::resolve(&href, None);

    // The answer box may sit around the result or inside its wrapper.
    let featured = rules
        .featured
        .and_then(|pattern| dom::closest(node, pattern).or_else(|| dom::first_in(node, pattern)))
        .map(|_| true);

    let cached_url = rules
        .cached
        .and_then(|pattern| optional(href_field(node, &pattern, "organic.cached")))
        .map(|href| resolve_url(&href, None));
    let similar_url = rules
        .similar
        .and_then(|pattern| optional(href_field(node, &pattern, "organic.similar")))
        .map(|href| resolve_url(&href, None));

    Ok(OrganicResult {
        position: 0,
        domain,
        url,
        title: or_default(text_field(node, &rules.title, "organic.title")),
        snippet: or_default(text_field(node, &rules.snippet, "organic.snippet")),
        link_type,
        sitelinks: extract_sitelinks(node, &rules.sitelinks, None),
        featured,
        cached_url,
        similar_url,
    })
}
