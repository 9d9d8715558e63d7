//! Local pack (map results).
//!
//! The detail line under each place reads like
//! `"$$ · Coffee shop · 0.4 mi · 12 Rua Augusta"`; parts are recognised by
//! shape rather than position, except that the first remaining part is the
//! category and the last is the address.

use super::{optional, text_field};
use crate::dom::ParsedPage;
use crate::error::FieldResult;
use crate::rules::LocalRules;
use crate::text::{parse_rating, parse_scaled_number};
use crate::types::Local;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::ElementRef;
use tracing::debug;

static DISTANCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(?:\.\d+)?\s?(?:mi|km)$").expect("valid distance regex"));

const CURRENCY_SIGNS: &[char] = &['$', '€', '£', '¥', '₹'];

pub fn extract_locals(page: &ParsedPage, rules: &LocalRules) -> Option<Vec<Local>> {
    let container = rules.container.first_on(page)?;
    let places = rules
        .item
        .all_in(container)
        .into_iter()
        .filter_map(|node| match build_local(node, rules) {
            Ok(place) => Some(place),
            Err(e) => {
                debug!("Skipping local result: {}", e);
                None
            }
        })
        .collect();
    Some(places)
}

fn build_local(node: ElementRef<'_>, rules: &LocalRules) -> FieldResult<Local> {
    let name = text_field(node, &rules.name, "local.name")?;
    let info = optional(text_field(node, &rules.info, "local.info"))
        .map(|line| InfoLine::parse(&line))
        .unwrap_or_default();

    Ok(Local {
        name,
        rating: optional(text_field(node, &rules.rating, "local.rating").and_then(|t| parse_rating(&t))),
        reviews: optional(
            text_field(node, &rules.reviews, "local.reviews").and_then(|t| parse_scaled_number(&t)),
        ),
        expensiveness: info.expensiveness,
        kind: info.kind,
        address: info.address,
        distance: info.distance,
        description: optional(text_field(node, &rules.description, "local.description")),
    })
}

#[derive(Debug, Default, PartialEq)]
struct InfoLine {
    expensiveness: u8,
    kind: String,
    address: String,
    distance: Option<String>,
}

impl InfoLine {
    fn parse(line: &str) -> Self {
        let mut info = InfoLine::default();
        let mut rest = Vec::new();

        for part in line.split('·').map(str::trim).filter(|p| !p.is_empty()) {
            if part.chars().all(|c| CURRENCY_SIGNS.contains(&c)) {
                info.expensiveness = u8::try_from(part.chars().count()).unwrap_or(u8::MAX);
            } else if DISTANCE_RE.is_match(part) {
                info.distance = Some(part.to_string());
            } else {
                rest.push(part);
            }
        }

        if let Some(kind) = rest.first() {
            info.kind = kind.to_string();
        }
        if rest.len() > 1 {
            info.address = rest[rest.len() - 1].to_string();
        }
        info
    }
}
