use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything extracted from one result page.
///
/// `Option` fields are skipped when `None`: an absent key means the feature
/// was not requested, does not exist on this page, or the page is an error
/// page. An empty list means the feature was there with zero items.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SerpResult {
    pub keyword: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_page: Option<u32>,
    pub organic: Vec<OrganicResult>,
    pub pagination: Vec<PageLink>,
    pub related_keywords: Vec<RelatedKeyword>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adwords: Option<Adwords>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotels: Option<HotelsFeature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos: Option<Vec<VideoCard>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_groups: Option<Vec<ThumbnailGroup>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop_results: Option<Vec<ShopResult>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_stories: Option<Vec<TopStory>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locals: Option<Vec<Local>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_results: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_taken: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LinkType {
    Home,
    #[default]
    Landing,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SitelinkType {
    Inline,
    Card,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrganicResult {
    pub position: u32,
    pub domain: String,
    pub url: String,
    pub title: String,
    pub snippet: String,
    pub link_type: LinkType,
    /// Never `Some(vec![])`: a result without sitelinks has no key at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sitelinks: Option<Vec<Sitelink>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cached_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similar_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sitelink {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(rename = "type")]
    pub kind: SitelinkType,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    pub position: u32,
    pub domain: String,
    pub url: String,
    pub title: String,
    pub snippet: String,
    pub link_type: LinkType,
    /// Always present for ads, possibly empty.
    pub sitelinks: Vec<Sitelink>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Adwords {
    pub top: Vec<Ad>,
    pub bottom: Vec<Ad>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PageLink {
    pub page: u32,
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RelatedKeyword {
    pub keyword: String,
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotelsFeature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_filters: Option<HotelsSearchFilters>,
    pub hotels: Vec<Hotel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more_hotels: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotelsSearchFilters {
    pub search_title: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub guests: u32,
    pub filters: Vec<HotelFilter>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotelFilter {
    pub title: String,
    pub explanation: String,
    pub is_active: bool,
}

/// A hotel card. Missing text fields are empty strings, not absent keys.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub name: String,
    pub rating: f64,
    pub votes: u64,
    pub stars: u8,
    pub description: String,
    pub more_info_link: String,
    pub amenities: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal: Option<HotelDeal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HotelDeal {
    pub headline: String,
    pub details: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoCard {
    pub title: String,
    pub sitelink: String,
    pub source: String,
    pub channel: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub video_duration: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThumbnailGroup {
    pub heading: String,
    pub thumbnails: Vec<Thumbnail>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Thumbnail {
    pub title: String,
    pub sitelink: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShopResult {
    pub img_link: String,
    pub title: String,
    pub price: f64,
    pub currency: String,
    pub shopping_site: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_offer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub votes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commodity: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TopStory {
    pub url: String,
    pub title: String,
    pub publisher: String,
    pub published: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Local {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u64>,
    /// Number of currency signs in the price-level label, 0 when absent.
    pub expensiveness: u8,
    #[serde(rename = "type")]
    pub kind: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
