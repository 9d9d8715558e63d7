use super::{href_field, optional, or_default, text_field};
use crate::dom::{self, ParsedPage};
use crate::error::FieldResult;
use crate::rules::HotelRules;
use crate::text::{parse_integer, parse_price, parse_rating, parse_scaled_number, parse_stars};
use crate::types::{Hotel, HotelDeal, HotelFilter, HotelsFeature, HotelsSearchFilters};
use crate::url_utils::resolve_url;
use scraper::ElementRef;
use tracing::debug;

/// Hotel finder block. Hotels use empty strings and zeroes for missing
/// card fields instead of dropping keys.
pub fn extract_hotels(page: &ParsedPage, rules: &HotelRules) -> Option<HotelsFeature> {
    let container = rules.container.first_on(page)?;

    let hotels = rules
        .item
        .all_in(container)
        .into_iter()
        .filter_map(|node| match build_hotel(node, rules) {
            Ok(hotel) => Some(hotel),
            Err(e) => {
                debug!("Skipping hotel card: {}", e);
                None
            }
        })
        .collect();

    let more_hotels = optional(
        text_field(container, &rules.more_hotels, "hotels.more").and_then(|t| parse_integer(&t)),
    )
    .and_then(|n| u32::try_from(n).ok());

    Some(HotelsFeature {
        search_filters: search_filters(container, rules),
        hotels,
        more_hotels,
    })
}

fn search_filters(container: ElementRef<'_>, rules: &HotelRules) -> Option<HotelsSearchFilters> {
    let search_title = optional(text_field(container, &rules.search_title, "hotels.search_title"))?;

    let filters = rules
        .filter
        .all_in(container)
        .into_iter()
        .filter_map(|node| {
            let title = optional(text_field(node, &rules.filter_title, "hotels.filter.title"))?;
            Some(HotelFilter {
                title,
                explanation: or_default(text_field(
                    node,
                    &rules.filter_explanation,
                    "hotels.filter.explanation",
                )),
                is_active: dom::matches(node, rules.filter_active),
            })
        })
        .collect();

    let guests = or_default(
        text_field(container, &rules.guests, "hotels.guests").and_then(|t| parse_integer(&t)),
    );

    Some(HotelsSearchFilters {
        search_title,
        check_in_date: or_default(text_field(container, &rules.check_in, "hotels.check_in")),
        check_out_date: or_default(text_field(container, &rules.check_out, "hotels.check_out")),
        guests: u32::try_from(guests).unwrap_or_default(),
        filters,
    })
}

fn build_hotel(node: ElementRef<'_>, rules: &HotelRules) -> FieldResult<Hotel> {
    let name = text_field(node, &rules.name, "hotel.name")?;

    let price = optional(text_field(node, &rules.price, "hotel.price").and_then(|t| parse_price(&t)));
    let original_price = optional(
        text_field(node, &rules.original_price, "hotel.original_price").and_then(|t| parse_price(&t)),
    )
    .map(|(_, amount)| amount);

    let deal = rules.deal.first_in(node).map(|deal| HotelDeal {
        headline: or_default(text_field(deal, &rules.deal_headline, "hotel.deal.headline")),
        details: or_default(text_field(deal, &rules.deal_details, "hotel.deal.details")),
    });

    Ok(Hotel {
        name,
        rating: or_default(text_field(node, &rules.rating, "hotel.rating").and_then(|t| parse_rating(&t))),
        votes: or_default(text_field(node, &rules.votes, "hotel.votes").and_then(|t| parse_scaled_number(&t))),
        stars: or_default(text_field(node, &rules.stars, "hotel.stars").and_then(|t| parse_stars(&t))),
        description: or_default(text_field(node, &rules.description, "hotel.description")),
        more_info_link: optional(href_field(node, &rules.more_info_link, "hotel.more_info_link"))
            .map(|href| resolve_url(&href, None))
            .unwrap_or_default(),
        amenities: or_default(text_field(node, &rules.amenities, "hotel.amenities")),
        deal,
        currency: price.as_ref().map(|(currency, _)| currency.clone()),
        price: price.map(|(_, amount)| amount),
        original_price,
    })
}
