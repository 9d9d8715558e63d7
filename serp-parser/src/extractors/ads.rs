use super::sitelinks::extract_sitelinks;
use super::{href_field, numbered, or_default, text_field, LinkInfo};
use crate::dom::ParsedPage;
use crate::error::FieldResult;
use crate::rules::AdRules;
use crate::types::{Ad, Adwords};
use scraper::ElementRef;
use tracing::debug;

/// Top and bottom ad blocks, or `None` when the page has neither.
///
/// Ad links are resolved against the click-tracking host (`base`, or the
/// variant's default) instead of the search engine's own host.
pub fn extract_ads(page: &ParsedPage, rules: &AdRules, base: Option<&str>) -> Option<Adwords> {
    let top = page.select_first(rules.top);
    let bottom = page.select_first(rules.bottom);
    if top.is_none() && bottom.is_none() {
        return None;
    }

    let base = base.unwrap_or(rules.base);
    Some(Adwords {
        top: top.map(|block| ads_in(block, rules, base)).unwrap_or_default(),
        bottom: bottom.map(|block| ads_in(block, rules, base)).unwrap_or_default(),
    })
}

fn ads_in(block: ElementRef<'_>, rules: &AdRules, base: &str) -> Vec<Ad> {
    let drafts = rules
        .item
        .all_in(block)
        .into_iter()
        .filter_map(|node| match build_ad(node, rules, base) {
            Ok(ad) => Some(ad),
            Err(e) => {
                debug!("Skipping ad node: {}", e);
                None
            }
        });

    numbered(drafts)
        .map(|(position, ad)| Ad { position, ..ad })
        .collect()
}

fn build_ad(node: ElementRef<'_>, rules: &AdRules, base: &str) -> FieldResult<Ad> {
    let href = href_field(node, &rules.link, "ad.link")?;
    let link = LinkInfo::resolve(&href, Some(base));

    Ok(Ad {
        position: 0,
        domain: link.domain,
        url: link.url,
        title: or_default(text_field(node, &rules.title, "ad.title")),
        snippet: or_default(text_field(node, &rules.snippet, "ad.snippet")),
        link_type: link.link_type,
        sitelinks: extract_sitelinks(node, &rules.sitelinks, Some(base)).unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{BING, GOOGLE_DESKTOP, GOOGLE_NOJS};
    use crate::types::{LinkType, SitelinkType};

    const NOJS_ADS: &str = r#"
        <div id="main">
          <div id="tads">
            <div class="uEierd">
              <a class="C8nzq" href="/aclk?sa=l&amp;ai=DChcSEwj&amp;adurl=">
                <div role="heading">Rust Training - Learn Rust Fast</div>
              </a>
              <div class="MUxGbd yDYNvb">Hands-on courses for teams.</div>
            </div>
          </div>
        </div>"#;

    #[test]
    fn test_relative_ad_resolves_against_ad_network() {
        let page = ParsedPage::parse(NOJS_ADS);
        let ads = extract_ads(&page, GOOGLE_NOJS.ads.as_ref().unwrap(), None).unwrap();
        assert_eq!(ads.top.len(), 1);
        assert!(ads.bottom.is_empty());

        let ad = &ads.top[0];
        assert_eq!(ad.position, 1);
        assert_eq!(ad.domain, "www.googleadservices.com");
        assert_eq!(ad.url, "https://www.googleadservices.com/aclk?sa=l&ai=DChcSEwj&adurl=");
        assert_eq!(ad.title, "Rust Training - Learn Rust Fast");
        assert_eq!(ad.link_type, LinkType::Landing);
        assert!(ad.sitelinks.is_empty());
    }

    #[test]
    fn test_supplied_ad_base() {
        let page = ParsedPage::parse(NOJS_ADS);
        let ads = extract_ads(
            &page,
            GOOGLE_NOJS.ads.as_ref().unwrap(),
            Some("https://clicks.adnet.example"),
        )
        .unwrap();
        assert_eq!(ads.top[0].domain, "clicks.adnet.example");
    }

    #[test]
    fn test_unusable_ad_base_keeps_url_and_domain_in_step() {
        let page = ParsedPage::parse(NOJS_ADS);
        let ads = extract_ads(&page, GOOGLE_NOJS.ads.as_ref().unwrap(), Some("::not a url::")).unwrap();
        let ad = &ads.top[0];
        assert!(ad.url.starts_with("https://www.google.com/aclk?"));
        assert_eq!(ad.domain, "www.google.com");
    }

    #[test]
    fn test_desktop_ads_with_sitelinks() {
        let page = ParsedPage::parse(
            r#"<div id="tads">
                 <div class="uEierd">
                   <div class="d5oMvf"><a href="https://www.jetbrains.com/rust/"><div role="heading">RustRover</div></a></div>
                   <div class="Va3FIb">A JetBrains IDE for Rust.</div>
                   <div class="bOeY0b"><a href="https://www.jetbrains.com/rust/download/">Download</a><a href="https://www.jetbrains.com/rust/buy/">Pricing</a></div>
                 </div>
                 <div class="uEierd"><div role="heading">Broken ad without link</div></div>
                 <div class="uEierd">
                   <a class="sVXRqc" href="https://zed.dev/"><div role="heading">Zed</div></a>
                 </div>
               </div>
               <div id="tadsb"></div>"#,
        );
        let ads = extract_ads(&page, GOOGLE_DESKTOP.ads.as_ref().unwrap(), None).unwrap();
        assert_eq!(ads.top.len(), 2);
        assert_eq!(ads.top[0].snippet, "A JetBrains IDE for Rust.");
        assert_eq!(ads.top[0].sitelinks.len(), 2);
        assert_eq!(ads.top[0].sitelinks[0].kind, SitelinkType::Inline);
        assert_eq!(ads.top[1].position, 2);
        assert_eq!(ads.top[1].link_type, LinkType::Home);
        assert!(ads.bottom.is_empty());
    }

    #[test]
    fn test_bing_bottom_ads() {
        let page = ParsedPage::parse(
            r#"<div id="b_content"><ol id="b_results">
                 <li class="b_algo"></li>
                 <li class="b_ad b_adBottom"><ul><li><div class="sb_add">
                   <h2><a href="https://www.bing.com/aclk?ld=e8&amp;u=aHR0c">Rust Jobs</a></h2>
                   <div class="b_caption"><p>Find Rust roles.</p></div>
                 </div></li></ul></li>
               </ol></div>"#,
        );
        let ads = extract_ads(&page, BING.ads.as_ref().unwrap(), None).unwrap();
        assert!(ads.top.is_empty());
        assert_eq!(ads.bottom.len(), 1);
        assert_eq!(ads.bottom[0].domain, "www.bing.com");
    }

    #[test]
    fn test_no_ad_blocks() {
        let page = ParsedPage::parse(r#"<div id="rso"></div>"#);
        assert!(extract_ads(&page, GOOGLE_DESKTOP.ads.as_ref().unwrap(), None).is_none());
    }
}
