use crate::dom::ParsedPage;
use crate::rules::{Ruleset, RULESETS};
use tracing::debug;

pub const NO_RESULTS_ERROR: &str = "No results page";
pub const UNRECOGNIZED_ERROR: &str = "Unrecognized page";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageVariant {
    GoogleDesktop,
    GoogleMobile,
    GoogleNojs,
    Bing,
}

/// Outcome of the gate that runs before any feature extractor.
#[derive(Debug, Clone, Copy)]
pub enum PageClass {
    Valid(&'static Ruleset),
    NoResults(&'static Ruleset),
    Unrecognized,
}

impl PageClass {
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            PageClass::Valid(_) => None,
            PageClass::NoResults(_) => Some(NO_RESULTS_ERROR),
            PageClass::Unrecognized => Some(UNRECOGNIZED_ERROR),
        }
    }

    pub fn ruleset(&self) -> Option<&'static Ruleset> {
        match self {
            PageClass::Valid(rules) | PageClass::NoResults(rules) => Some(*rules),
            PageClass::Unrecognized => None,
        }
    }
}

/// Decide which layout `page` uses and whether it carries results.
///
/// The first ruleset whose marker is present wins; its no-results marker
/// then splits `Valid` from `NoResults`.
pub fn classify(page: &ParsedPage) -> PageClass {
    let Some(rules) = RULESETS.iter().copied().find(|rules| page.exists(rules.marker)) else {
        debug!("No variant marker matched");
        return PageClass::Unrecognized;
    };

    if page.exists(rules.no_results) {
        debug!("{:?} page with no-results marker", rules.variant);
        PageClass::NoResults(rules)
    } else {
        debug!("Classified page as {:?}", rules.variant);
        PageClass::Valid(rules)
    }
}
