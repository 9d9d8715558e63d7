use crate::dom::{self, ParsedPage};
use crate::rules::LinkListRules;
use crate::types::RelatedKeyword;

/// Related searches; an empty list when the block is missing.
pub fn extract_related(page: &ParsedPage, rules: &LinkListRules) -> Vec<RelatedKeyword> {
    rules
        .item
        .all_on(page)
        .into_iter()
        .filter_map(|anchor| {
            let keyword = dom::text(anchor);
            let path = dom::attr(anchor, "href")?;
            (!keyword.is_empty()).then_some(RelatedKeyword { keyword, path })
        })
        .collect()
}
