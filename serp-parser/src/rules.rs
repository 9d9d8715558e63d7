//! Selector tables, one per page variant.
//!
//! Extractors never name a selector themselves; they read the `Ruleset` for
//! the classified variant. A feature block set to `None` does not exist on
//! that variant.

use crate::classifier::PageVariant;
use crate::dom::{self, ParsedPage};
use scraper::ElementRef;

/// A selector with an optional second shape for the same field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub primary: &'static str,
    pub fallback: Option<&'static str>,
}

impl Pattern {
    fn candidates(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.primary).chain(self.fallback)
    }

    pub fn first_in<'a>(&self, scope: ElementRef<'a>) -> Option<ElementRef<'a>> {
        self.candidates().find_map(|pattern| dom::first_in(scope, pattern))
    }

    /// All matches of the primary selector, or of the fallback when the
    /// primary finds nothing. Shapes are never mixed.
    pub fn all_in<'a>(&self, scope: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        self.candidates()
            .map(|pattern| dom::select_in(scope, pattern))
            .find(|found| !found.is_empty())
            .unwrap_or_default()
    }

    pub fn first_on<'a>(&self, page: &'a ParsedPage) -> Option<ElementRef<'a>> {
        self.candidates().find_map(|pattern| page.select_first(pattern))
    }

    pub fn all_on<'a>(&self, page: &'a ParsedPage) -> Vec<ElementRef<'a>> {
        self.candidates()
            .map(|pattern| page.select(pattern))
            .find(|found| !found.is_empty())
            .unwrap_or_default()
    }
}

const fn p(primary: &'static str) -> Pattern {
    Pattern {
        primary,
        fallback: None,
    }
}

const fn pf(primary: &'static str, fallback: &'static str) -> Pattern {
    Pattern {
        primary,
        fallback: Some(fallback),
    }
}

#[derive(Debug)]
pub struct Ruleset {
    pub variant: PageVariant,
    /// Present on every page of this variant, results or not.
    pub marker: &'static str,
    pub no_results: &'static str,
    pub stats: StatsRules,
    pub organic: OrganicRules,
    pub related: Option<LinkListRules>,
    pub pagination: Option<LinkListRules>,
    pub ads: Option<AdRules>,
    pub hotels: Option<HotelRules>,
    pub videos: Option<VideoRules>,
    pub thumbnails: Option<ThumbnailRules>,
    pub shop: Option<ShopRules>,
    pub stories: Option<StoryRules>,
    pub locals: Option<LocalRules>,
}

#[derive(Debug)]
pub struct StatsRules {
    pub keyword: Pattern,
    pub current_page: Option<Pattern>,
    pub result_stats: Option<Pattern>,
}

#[derive(Debug)]
pub struct OrganicRules {
    pub container: Pattern,
    pub item: Pattern,
    pub link: Pattern,
    pub title: Pattern,
    pub snippet: Pattern,
    pub sitelinks: SitelinkRules,
    /// Ancestor marking a promoted answer box.
    pub featured: Option<&'static str>,
    pub cached: Option<Pattern>,
    pub similar: Option<Pattern>,
}

#[derive(Debug)]
pub struct SitelinkRules {
    pub card: Option<CardSitelinkRules>,
    pub inline: Option<Pattern>,
}

#[derive(Debug)]
pub struct CardSitelinkRules {
    pub item: Pattern,
    pub title: Pattern,
    pub link: Pattern,
    pub snippet: Pattern,
}

/// Flat list of anchors: related searches, pagination.
#[derive(Debug)]
pub struct LinkListRules {
    pub item: Pattern,
}

#[derive(Debug)]
pub struct AdRules {
    pub top: &'static str,
    pub bottom: &'static str,
    pub item: Pattern,
    pub link: Pattern,
    pub title: Pattern,
    pub snippet: Pattern,
    pub sitelinks: SitelinkRules,
    /// Click-tracking host relative ad links resolve against.
    pub base: &'static str,
}

#[derive(Debug)]
pub struct HotelRules {
    pub container: Pattern,
    pub search_title: Pattern,
    pub check_in: Pattern,
    pub check_out: Pattern,
    pub guests: Pattern,
    pub filter: Pattern,
    pub filter_title: Pattern,
    pub filter_explanation: Pattern,
    /// Tested against the filter node itself.
    pub filter_active: &'static str,
    pub item: Pattern,
    pub name: Pattern,
    pub price: Pattern,
    pub original_price: Pattern,
    pub rating: Pattern,
    pub votes: Pattern,
    pub stars: Pattern,
    pub description: Pattern,
    pub more_info_link: Pattern,
    pub amenities: Pattern,
    pub deal: Pattern,
    pub deal_headline: Pattern,
    pub deal_details: Pattern,
    pub more_hotels: Pattern,
}

#[derive(Debug)]
pub struct VideoRules {
    pub container: Pattern,
    pub item: Pattern,
    pub title: Pattern,
    pub link: Pattern,
    pub source: Pattern,
    pub channel: Pattern,
    pub date: Pattern,
    pub duration: Pattern,
}

#[derive(Debug)]
pub struct ThumbnailRules {
    pub group: Pattern,
    pub heading: Pattern,
    pub item: Pattern,
    pub title: Pattern,
}

#[derive(Debug)]
pub struct ShopRules {
    pub container: Pattern,
    pub item: Pattern,
    pub image: Pattern,
    pub title: Pattern,
    pub price: Pattern,
    pub shopping_site: Pattern,
    pub special_offer: Pattern,
    pub votes: Pattern,
    pub rating: Pattern,
    pub commodity: Pattern,
}

#[derive(Debug)]
pub struct StoryRules {
    pub container: Pattern,
    pub item: Pattern,
    pub title: Pattern,
    pub publisher: Pattern,
    pub published: Pattern,
}

#[derive(Debug)]
pub struct LocalRules {
    pub container: Pattern,
    pub item: Pattern,
    pub name: Pattern,
    pub rating: Pattern,
    pub reviews: Pattern,
    /// `·`-separated line carrying price level, category, address, distance.
    pub info: Pattern,
    pub description: Pattern,
}

const GOOGLE_ADS_BASE: &str = "https://www.googleadservices.com";
const BING_ADS_BASE: &str = "https://www.bing.com";

const GOOGLE_RELATED: LinkListRules = LinkListRules {
    item: pf("#brs p a", "a.k8XOCe"),
};

const GOOGLE_STORIES: StoryRules = StoryRules {
    container: pf("g-section-with-header .JJZKK", "#top-stories"),
    item: p("a.WlydOe"),
    title: pf("[role=heading]", ".mCBkyc"),
    publisher: p(".CEMjEf"),
    published: p(".OSrXXb"),
};

pub static GOOGLE_DESKTOP: Ruleset = Ruleset {
    variant: PageVariant::GoogleDesktop,
    marker: "#search, #topstuff",
    no_results: "#topstuff .card-section",
    stats: StatsRules {
        keyword: pf("input[name=q]", "textarea[name=q]"),
        current_page: Some(pf("#foot td.YyVfkd", "#foot td.cur")),
        result_stats: Some(p("#result-stats")),
    },
    organic: OrganicRules {
        container: pf("#rso", "#search"),
        item: p("div.g"),
        link: pf(".yuRUbf > a", ".r > a"),
        title: p("h3"),
        snippet: pf(".VwiC3b", ".IsZvec"),
        sitelinks: SitelinkRules {
            card: Some(CardSitelinkRules {
                item: p("table.jmjoTe tr.mslg td"),
                title: p("h3"),
                link: p("h3 a"),
                snippet: p(".zz3gNc"),
            }),
            inline: Some(p(".HiHjCd a")),
        },
        featured: Some(".ifM9O, .kp-blk"),
        cached: Some(p("a[href*=\"webcache.googleusercontent.com\"]")),
        similar: Some(p("a[href^=\"/search?q=related:\"]")),
    },
    related: Some(GOOGLE_RELATED),
    pagination: Some(LinkListRules {
        item: pf("#foot table td a.fl", "#botstuff table td a"),
    }),
    ads: Some(AdRules {
        top: "#tads",
        bottom: "#tadsb",
        item: p(".uEierd"),
        link: pf("a.sVXRqc", ".d5oMvf > a"),
        title: p("[role=heading]"),
        snippet: pf(".MUxGbd.yDYNvb", ".Va3FIb"),
        sitelinks: SitelinkRules {
            card: Some(CardSitelinkRules {
                item: p(".MhgNwc"),
                title: p("h3"),
                link: p("h3 a"),
                snippet: p(".lhLbod"),
            }),
            inline: Some(p(".bOeY0b a")),
        },
        base: GOOGLE_ADS_BASE,
    }),
    hotels: Some(HotelRules {
        container: p(".zd2Jbb"),
        search_title: p(".x3UtIe .tNxQIb"),
        check_in: p(".x3UtIe .ceS6Be.check-in"),
        check_out: p(".x3UtIe .ceS6Be.check-out"),
        guests: p(".x3UtIe .viupMc"),
        filter: p(".x3UtIe .CWGqFd"),
        filter_title: p(".skuNnb"),
        filter_explanation: p(".sNbAge"),
        filter_active: ".Rt74pe",
        item: p(".ntKMYc .hmHBZd"),
        name: p(".BTPx6e"),
        price: p(".dv1Q3e"),
        original_price: p(".AfCRQd"),
        rating: p(".fTKmHE99XE4__star"),
        votes: p(".jdzyBc"),
        stars: p(".wVG8ye"),
        description: pf(".wc8Hn", ".gRfXsd"),
        more_info_link: p("a.Tvp9fe"),
        amenities: p(".I9B2He"),
        deal: p(".kOTJue"),
        deal_headline: p(".NNPnSe"),
        deal_details: p(".Ux4Cdf"),
        more_hotels: p(".MVcWje"),
    }),
    videos: Some(VideoRules {
        container: pf("g-section-with-header video-voyager", ".yqWwxd"),
        item: p(".VibNM"),
        title: pf(".fc9yUc", "[role=heading]"),
        link: p("a"),
        source: p(".pcJO7e cite"),
        channel: p(".pcJO7e span"),
        date: p(".hMJ0yc"),
        duration: p(".J1mWY"),
    }),
    thumbnails: Some(ThumbnailRules {
        group: p("#rso .Kqw7vb"),
        heading: p("[role=heading]"),
        item: p("a.dT1bfd"),
        title: p(".hVlRZb"),
    }),
    shop: Some(ShopRules {
        container: pf(".cu-container", ".commercial-unit-desktop-top"),
        item: p(".pla-unit"),
        image: p("img"),
        title: p(".pymv4e"),
        price: p(".e10twf"),
        shopping_site: p(".LbUacb"),
        special_offer: p(".gyXcee"),
        votes: p(".nbd1Bd .QhqGkb"),
        rating: p(".z3HNkc"),
        commodity: p(".cyspcb"),
    }),
    stories: Some(GOOGLE_STORIES),
    locals: Some(LocalRules {
        container: p(".AEprdc"),
        item: p(".VkpGBb"),
        name: p(".dbg0pd"),
        rating: p(".YDIN4c"),
        reviews: p(".HypWnf"),
        info: p(".rllt__details .rllt__info"),
        description: p(".rllt__details .rllt__desc"),
    }),
};

pub static GOOGLE_MOBILE: Ruleset = Ruleset {
    variant: PageVariant::GoogleMobile,
    marker: "#rso div.mnr-c.xpd",
    no_results: "#topstuff .card-section",
    stats: StatsRules {
        keyword: pf("input[name=q]", "textarea[name=q]"),
        current_page: None,
        result_stats: None,
    },
    organic: OrganicRules {
        container: p("#rso"),
        item: p("div.mnr-c.xpd"),
        link: pf("a.C8nzq", "a"),
        title: pf("div[role=heading]", ".MUxGbd.v0nnCb"),
        snippet: pf(".yDYNvb", ".lyLwlc"),
        sitelinks: SitelinkRules {
            card: None,
            inline: Some(p("a.VqFMTc")),
        },
        featured: Some(".ifM9O, .kp-wholepage"),
        cached: None,
        similar: None,
    },
    related: Some(GOOGLE_RELATED),
    pagination: None,
    ads: Some(AdRules {
        top: "#tads",
        bottom: "#tadsb",
        item: p(".uEierd"),
        link: p("a.C8nzq"),
        title: p("[role=heading]"),
        snippet: pf(".MUxGbd.yDYNvb", ".lyLwlc"),
        sitelinks: SitelinkRules {
            card: None,
            inline: Some(p("a.VqFMTc")),
        },
        base: GOOGLE_ADS_BASE,
    }),
    hotels: None,
    videos: None,
    thumbnails: None,
    shop: None,
    stories: Some(GOOGLE_STORIES),
    locals: None,
};

pub static GOOGLE_NOJS: Ruleset = Ruleset {
    variant: PageVariant::GoogleNojs,
    marker: "#main div.ZINbbc",
    no_results: "#main .card-section",
    stats: StatsRules {
        keyword: p("input[name=q]"),
        current_page: Some(p("table#nav td.cur")),
        result_stats: None,
    },
    organic: OrganicRules {
        container: p("#main"),
        item: p("div.ZINbbc.xpd"),
        link: p(".kCrYT > a"),
        title: pf("h3 div", ".BNeawe.vvjwJb"),
        snippet: pf(".BNeawe.s3v9rd.AP7Wnd", ".s3v9rd"),
        sitelinks: SitelinkRules {
            card: None,
            inline: Some(p("a.fuLhoc")),
        },
        featured: None,
        cached: None,
        similar: None,
    },
    related: Some(LinkListRules {
        item: pf("a.ZWRArf", "#main .gGQDvd a"),
    }),
    pagination: Some(LinkListRules {
        item: p("table#nav td a"),
    }),
    ads: Some(AdRules {
        top: "#tads",
        bottom: "#tadsb",
        item: p(".uEierd"),
        link: p("a.C8nzq"),
        title: pf("div[role=heading]", ".CCgQ5"),
        snippet: p(".MUxGbd.yDYNvb"),
        sitelinks: SitelinkRules {
            card: None,
            inline: Some(p("a.VqFMTc")),
        },
        base: GOOGLE_ADS_BASE,
    }),
    hotels: None,
    videos: None,
    thumbnails: None,
    shop: None,
    stories: None,
    locals: None,
};

pub static BING: Ruleset = Ruleset {
    variant: PageVariant::Bing,
    marker: "#b_content",
    no_results: "#b_results > li.b_no",
    stats: StatsRules {
        keyword: p("#sb_form_q"),
        current_page: Some(p(".b_pag a.sb_pagS")),
        result_stats: Some(p("#b_tween .sb_count")),
    },
    organic: OrganicRules {
        container: p("#b_results"),
        item: p("li.b_algo"),
        link: p("h2 > a"),
        title: p("h2"),
        snippet: pf(".b_caption p", ".b_algoSlug"),
        sitelinks: SitelinkRules {
            card: Some(CardSitelinkRules {
                item: p(".b_deep li"),
                title: p("h3"),
                link: p("h3 a"),
                snippet: p("p"),
            }),
            inline: Some(p(".b_factrow a")),
        },
        featured: None,
        cached: None,
        similar: None,
    },
    related: Some(LinkListRules {
        item: pf(".b_rs ul li a", "#brsv3 a"),
    }),
    pagination: Some(LinkListRules {
        item: p(".b_pag li a"),
    }),
    ads: Some(AdRules {
        top: "#b_results > li.b_ad:not(.b_adBottom)",
        bottom: "#b_results > li.b_ad.b_adBottom",
        item: p(".sb_add"),
        link: p("h2 > a"),
        title: p("h2"),
        snippet: pf(".b_caption p", ".b_ad_description"),
        sitelinks: SitelinkRules {
            card: None,
            inline: Some(p(".b_vlist2col a")),
        },
        base: BING_ADS_BASE,
    }),
    hotels: None,
    videos: None,
    thumbnails: None,
    shop: None,
    stories: None,
    locals: None,
};

/// Rulesets in classification order: the most specific markers first.
pub static RULESETS: [&Ruleset; 4] = [&BING, &GOOGLE_NOJS, &GOOGLE_MOBILE, &GOOGLE_DESKTOP];
