use super::{href_field, optional, or_default, text_field};
use crate::dom::ParsedPage;
use crate::error::FieldResult;
use crate::rules::VideoRules;
use crate::text::parse_date;
use crate::types::VideoCard;
use crate::url_utils::resolve_url;
use scraper::ElementRef;
use tracing::debug;

pub fn extract_videos(page: &ParsedPage, rules: &VideoRules) -> Option<Vec<VideoCard>> {
    let container = rules.container.first_on(page)?;
    let cards = rules
        .item
        .all_in(container)
        .into_iter()
        .filter_map(|node| match build_card(node, rules) {
            Ok(card) => Some(card),
            Err(e) => {
                debug!("Skipping video card: {}", e);
                None
            }
        })
        .collect();
    Some(cards)
}

fn build_card(node: ElementRef<'_>, rules: &VideoRules) -> FieldResult<VideoCard> {
    let title = text_field(node, &rules.title, "video.title")?;
    let sitelink = href_field(node, &rules.link, "video.link")?;

    Ok(VideoCard {
        title,
        sitelink: resolve_url(&sitelink, None),
        source: or_default(text_field(node, &rules.source, "video.source")),
        channel: or_default(text_field(node, &rules.channel, "video.channel")),
        date: optional(text_field(node, &rules.date, "video.date").and_then(|d| parse_date(&d))),
        video_duration: or_default(text_field(node, &rules.duration, "video.duration")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::GOOGLE_DESKTOP;
    use chrono::NaiveDate;

    #[test]
    fn test_video_cards() {
        let page = ParsedPage::parse(
            r#"<g-section-with-header><video-voyager>
                 <div class="VibNM">
                   <a href="https://www.youtube.com/watch?v=zF34dRivLOw">
                     <div class="fc9yUc">Rust Crash Course</div>
                   </a>
                   <div class="pcJO7e"><cite>YouTube</cite><span>Traversy Media</span></div>
                   <div class="hMJ0yc">Jun 4, 2019</div>
                   <div class="J1mWY">1:26:54</div>
                 </div>
                 <div class="VibNM"><div class="fc9yUc">No link</div></div>
                 <div class="VibNM">
                   <a href="https://vimeo.com/1"><div class="fc9yUc">Talk</div></a>
                   <div class="hMJ0yc">2 weeks ago</div>
                 </div>
               </video-voyager></g-section-with-header>"#,
        );
        let videos = extract_videos(&page, GOOGLE_DESKTOP.videos.as_ref().unwrap()).unwrap();
        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].title, "Rust Crash Course");
        assert_eq!(videos[0].source, "YouTube");
        assert_eq!(videos[0].channel, "Traversy Media");
        assert_eq!(videos[0].date, NaiveDate::from_ymd_opt(2019, 6, 4));
        assert_eq!(videos[0].video_duration, "1:26:54");
        assert_eq!(videos[1].date, None);
        assert_eq!(videos[1].channel, "");
    }

    #[test]
    fn test_no_carousel() {
        let page = ParsedPage::parse("<div id='rso'></div>");
        assert!(extract_videos(&page, GOOGLE_DESKTOP.videos.as_ref().unwrap()).is_none());
    }
}
