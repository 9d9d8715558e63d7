use super::{or_default, own_href, text_field};
use crate::dom::ParsedPage;
use crate::error::FieldResult;
use crate::rules::StoryRules;
use crate::types::TopStory;
use crate::url_utils::resolve_url;
use scraper::ElementRef;
use tracing::debug;

/// News carousel. Each item node is the story's anchor.
pub fn extract_stories(page: &ParsedPage, rules: &StoryRules) -> Option<Vec<TopStory>> {
    let container = rules.container.first_on(page)?;
    let stories = rules
        .item
        .all_in(container)
        .into_iter()
        .filter_map(|anchor| match build_story(anchor, rules) {
            Ok(story) => Some(story),
            Err(e) => {
                debug!("Skipping top story: {}", e);
                None
            }
        })
        .collect();
    Some(stories)
}

fn build_story(anchor: ElementRef<'_>, rules: &StoryRules) -> FieldResult<TopStory> {
    let href = own_href(anchor, "story.link")?;
    let title = text_field(anchor, &rules.title, "story.title")?;
    Ok(TopStory {
        url: resolve_url(&href, None),
        title,
        publisher: or_default(text_field(anchor, &rules.publisher, "story.publisher")),
        published: or_default(text_field(anchor, &rules.published, "story.published")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{GOOGLE_DESKTOP, GOOGLE_MOBILE};

    const STORIES: &str = r#"
        <g-section-with-header><div class="JJZKK">
          <a class="WlydOe" href="https://blog.rust-lang.org/2024/11/28/Rust-1.83.0.html">
            <div class="CEMjEf">Rust Blog</div>
            <div role="heading">Announcing Rust 1.83.0</div>
            <div class="OSrXXb">2 days ago</div>
          </a>
          <a class="WlydOe" href="/url?q=https://lwn.net/Articles/1000/&amp;sa=U">
            <div class="mCBkyc">Rust in the kernel</div>
          </a>
          <a class="WlydOe"><div role="heading">Missing link</div></a>
        </div></g-section-with-header>"#;

    #[test]
    fn test_top_stories() {
        let page = ParsedPage::parse(STORIES);
        let stories = extract_stories(&page, GOOGLE_DESKTOP.stories.as_ref().unwrap()).unwrap();
        assert_eq!(stories.len(), 2);
        assert_eq!(stories[0].title, "Announcing Rust 1.83.0");
        assert_eq!(stories[0].publisher, "Rust Blog");
        assert_eq!(stories[0].published, "2 days ago");
        assert_eq!(stories[1].url, "https://lwn.net/Articles/1000/");
        assert_eq!(stories[1].title, "Rust in the kernel");
        assert_eq!(stories[1].publisher, "");
    }

    #[test]
    fn test_mobile_shares_story_rules() {
        let page = ParsedPage::parse(STORIES);
        let stories = extract_stories(&page, GOOGLE_MOBILE.stories.as_ref().unwrap()).unwrap();
        assert_eq!(stories.len(), 2);
    }
}
