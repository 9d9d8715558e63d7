use crate::dom::{self, ParsedPage};
use crate::rules::LinkListRules;
use crate::text::parse_integer;
use crate::types::PageLink;

/// Numbered links to other result pages. "Next"/"Previous" style links
/// carry no page number and are left out.
pub fn extract_pagination(page: &ParsedPage, rules: &LinkListRules) -> Vec<PageLink> {
    rules
        .item
        .all_on(page)
        .into_iter()
        .filter_map(|anchor| {
            let label = dom::text(anchor);
            if label.is_empty() || !label.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            let page = u32::try_from(parse_integer(&label).ok()?).ok()?;
            let path = dom::attr(anchor, "href")?;
            Some(PageLink { page, path })
        })
        .collect()
}
