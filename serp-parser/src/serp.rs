use crate::classifier::{classify, PageClass};
use crate::dom::ParsedPage;
use crate::extractors::{
    ads::extract_ads, hotels::extract_hotels, locals::extract_locals, organic::extract_organic,
    pagination::extract_pagination, related::extract_related, shop::extract_shop,
    stats::{extract_current_page, extract_keyword, extract_result_stats},
    stories::extract_stories, thumbnails::extract_thumbnails, videos::extract_videos,
};
use crate::options::ExtractOptions;
use crate::rules::Ruleset;
use crate::types::SerpResult;
use tracing::{debug, info};

/// Turns a saved result page into a [`SerpResult`].
///
/// Holds no per-page state; one extractor can serve any number of pages,
/// from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct SerpExtractor {
    options: ExtractOptions,
    ad_base: Option<String>,
}

impl SerpExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self {
            options,
            ad_base: None,
        }
    }

    /// Resolve relative ad links against `base` instead of the variant's
    /// click-tracking host.
    pub fn with_ad_base(mut self, base: impl Into<String>) -> Self {
        self.ad_base = Some(base.into());
        self
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract every enabled feature from `html`.
    ///
    /// Never fails: an unusable page comes back with `error` set and every
    /// feature field empty or absent.
    pub fn extract(&self, html: &str) -> SerpResult {
        let page = ParsedPage::parse(html);
        let class = classify(&page);

        let mut result = SerpResult {
            keyword: class
                .ruleset()
                .map(|rules| extract_keyword(&page, &rules.stats))
                .unwrap_or_default(),
            ..SerpResult::default()
        };

        let rules = match class {
            PageClass::Valid(rules) => rules,
            other => {
                result.error = other.error_message().map(str::to_string);
                info!(
                    "Page not extracted: {}",
                    result.error.as_deref().unwrap_or_default()
                );
                return result;
            }
        };

        self.run_extractors(&page, rules, &mut result);

        info!(
            "Extracted {:?} page for '{}': {} organic, {} related, {} ads, {} pages",
            rules.variant,
            result.keyword,
            result.organic.len(),
            result.related_keywords.len(),
            result
                .adwords
                .as_ref()
                .map(|ads| ads.top.len() + ads.bottom.len())
                .unwrap_or_default(),
            result.pagination.len(),
        );
        result
    }

    /// Organic first so positions are settled before anything else reads
    /// the page, then related, ads, pagination and the optional features.
    fn run_extractors(&self, page: &ParsedPage, rules: &Ruleset, result: &mut SerpResult) {
        let options = &self.options;

        if options.organic {
            result.organic = extract_organic(page, &rules.organic);
            let (total, time) = extract_result_stats(page, &rules.stats);
            result.total_results = total;
            result.time_taken = time;
        }

        if options.related {
            result.related_keywords = rules
                .related
                .as_ref()
                .map(|related| extract_related(page, related))
                .unwrap_or_default();
        }

        if options.ads {
            result.adwords = rules
                .ads
                .as_ref()
                .and_then(|ads| extract_ads(page, ads, self.ad_base.as_deref()));
        }

        if options.pagination {
            result.pagination = rules
                .pagination
                .as_ref()
                .map(|pagination| extract_pagination(page, pagination))
                .unwrap_or_default();
            result.current_page = extract_current_page(page, &rules.stats);
        }

        if options.hotels {
            result.hotels = rules.hotels.as_ref().and_then(|r| extract_hotels(page, r));
        }
        if options.videos {
            result.videos = rules.videos.as_ref().and_then(|r| extract_videos(page, r));
        }
        if options.thumbnails {
            result.thumbnail_groups = rules
                .thumbnails
                .as_ref()
                .and_then(|r| extract_thumbnails(page, r));
        }
        if options.shop {
            result.shop_results = rules.shop.as_ref().and_then(|r| extract_shop(page, r));
        }
        if options.stories {
            result.top_stories = rules.stories.as_ref().and_then(|r| extract_stories(page, r));
        }
        if options.locals {
            result.locals = rules.locals.as_ref().and_then(|r| extract_locals(page, r));
        }

        debug!("Enabled extractors: {:?}", options.enabled_names());
    }
}

/// Extract with the default feature set.
pub fn parse_serp(html: &str) -> SerpResult {
    SerpExtractor::default().extract(html)
}

pub fn parse_serp_with(html: &str, options: ExtractOptions) -> SerpResult {
    SerpExtractor::new(options).extract(html)
}
