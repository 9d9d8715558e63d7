use serde::{Deserialize, Serialize};

/// Which extractors run on a page.
///
/// `ExtractOptions::default()` enables the cheap, common features. When the
/// flags come from a JSON map instead, every key left out is `false`, so an
/// empty map turns every extractor off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractOptions {
    #[serde(default)]
    pub organic: bool,
    #[serde(default)]
    pub related: bool,
    #[serde(default)]
    pub ads: bool,
    #[serde(default)]
    pub pagination: bool,
    #[serde(default)]
    pub hotels: bool,
    #[serde(default)]
    pub videos: bool,
    #[serde(default)]
    pub thumbnails: bool,
    #[serde(default)]
    pub shop: bool,
    #[serde(default)]
    pub stories: bool,
    #[serde(default)]
    pub locals: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            organic: true,
            related: true,
            ads: true,
            pagination: true,
            hotels: false,
            videos: false,
            thumbnails: false,
            shop: false,
            stories: false,
            locals: false,
        }
    }
}

impl ExtractOptions {
    /// Every extractor off.
    pub fn none() -> Self {
        Self {
            organic: false,
            related: false,
            ads: false,
            pagination: false,
            hotels: false,
            videos: false,
            thumbnails: false,
            shop: false,
            stories: false,
            locals: false,
        }
    }

    /// Every extractor on.
    pub fn all() -> Self {
        Self {
            organic: true,
            related: true,
            ads: true,
            pagination: true,
            hotels: true,
            videos: true,
            thumbnails: true,
            shop: true,
            stories: true,
            locals: true,
        }
    }

    /// Parse a flat `{"feature": bool}` JSON map.
    pub fn from_json(flags: &str) -> serde_json::Result<Self> {
        serde_json::from_str(flags)
    }

    pub fn enabled_names(&self) -> Vec<&'static str> {
        [
            ("organic", self.organic),
            ("related", self.related),
            ("ads", self.ads),
            ("pagination", self.pagination),
            ("hotels", self.hotels),
            ("videos", self.videos),
            ("thumbnails", self.thumbnails),
            ("shop", self.shop),
            ("stories", self.stories),
            ("locals", self.locals),
        ]
        .into_iter()
        .filter_map(|(name, on)| on.then_some(name))
        .collect()
    }
}
