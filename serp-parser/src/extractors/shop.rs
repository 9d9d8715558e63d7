use super::{attr_field, optional, or_default, text_field};
use crate::dom::ParsedPage;
use crate::error::FieldResult;
use crate::rules::ShopRules;
use crate::text::{parse_price, parse_rating, parse_scaled_number};
use crate::types::ShopResult;
use scraper::ElementRef;
use tracing::debug;

/// Product listing ads. A card needs a title and a parsable price.
pub fn extract_shop(page: &ParsedPage, rules: &ShopRules) -> Option<Vec<ShopResult>> {
    let container = rules.container.first_on(page)?;
    let products = rules
        .item
        .all_in(container)
        .into_iter()
        .filter_map(|node| match build_product(node, rules) {
            Ok(product) => Some(product),
            Err(e) => {
                debug!("Skipping shop card: {}", e);
                None
            }
        })
        .collect();
    Some(products)
}

fn build_product(node: ElementRef<'_>, rules: &ShopRules) -> FieldResult<ShopResult> {
    let title = text_field(node, &rules.title, "shop.title")?;
    let (currency, price) = text_field(node, &rules.price, "shop.price").and_then(|t| parse_price(&t))?;

    Ok(ShopResult {
        img_link: or_default(attr_field(node, &rules.image, "src", "shop.image")),
        title,
        price,
        currency,
        shopping_site: or_default(text_field(node, &rules.shopping_site, "shop.site")),
        special_offer: optional(text_field(node, &rules.special_offer, "shop.offer")),
        votes: optional(text_field(node, &rules.votes, "shop.votes").and_then(|t| parse_scaled_number(&t))),
        rating: optional(text_field(node, &rules.rating, "shop.rating").and_then(|t| parse_rating(&t))),
        commodity: optional(text_field(node, &rules.commodity, "shop.commodity")),
    })
}
