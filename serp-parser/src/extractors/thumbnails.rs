use super::{optional, own_href, text_field};
use crate::dom::{self, ParsedPage};
use crate::rules::ThumbnailRules;
use crate::types::{Thumbnail, ThumbnailGroup};
use crate::url_utils::resolve_url;

/// "People also search for" style image groups. Groups without a heading
/// or without any thumbnail are dropped.
pub fn extract_thumbnails(page: &ParsedPage, rules: &ThumbnailRules) -> Option<Vec<ThumbnailGroup>> {
    let groups = rules.group.all_on(page);
    if groups.is_empty() {
        return None;
    }

    let groups = groups
        .into_iter()
        .filter_map(|group| {
            let heading = optional(text_field(group, &rules.heading, "thumbnails.heading"))?;
            let thumbnails: Vec<Thumbnail> = rules
                .item
                .all_in(group)
                .into_iter()
                .filter_map(|anchor| {
                    let sitelink = optional(own_href(anchor, "thumbnail.link"))?;
                    let title = optional(text_field(anchor, &rules.title, "thumbnail.title"))
                        .or_else(|| dom::attr(anchor, "title"))?;
                    Some(Thumbnail {
                        title,
                        sitelink: resolve_url(&sitelink, None),
                    })
                })
                .collect();
            (!thumbnails.is_empty()).then_some(ThumbnailGroup { heading, thumbnails })
        })
        .collect();
    Some(groups)
}
