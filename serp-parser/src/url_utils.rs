use crate::error::{ExtractError, FieldResult};
use crate::types::LinkType;
use once_cell::sync::Lazy;
use tracing::debug;
use url::Url;

/// Base used when a same-site relative path shows up without an explicit base.
pub const DEFAULT_BASE: &str = "https://www.google.com";

/// Path of the engine's click-through redirect, `/url?q=<target>&...`.
const REDIRECT_PATH: &str = "/url";

static DEFAULT_URL: Lazy<Url> = Lazy::new(|| Url::parse(DEFAULT_BASE).expect("valid default base"));

/// Resolve a result link to the absolute destination URL.
///
/// Redirect-wrapped links (relative links, or anything pointing at `/url`)
/// yield their decoded `q` target. Other absolute links come back
/// untouched; relative ones are joined onto `base` (or [`DEFAULT_BASE`]).
pub fn resolve_url(raw: &str, base: Option<&str>) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }

    let base_url = effective_base(base);
    let absolute = is_absolute(raw);

    let parsed = match Url::parse(raw) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => match base_url.join(raw) {
            Ok(url) => url,
            Err(_) => return raw.to_string(),
        },
        Err(_) => return raw.to_string(),
    };

    if !absolute || parsed.path() == REDIRECT_PATH {
        if let Some(target) = redirect_target(&parsed, &base_url) {
            return target;
        }
    }

    if absolute {
        raw.to_string()
    } else {
        parsed.to_string()
    }
}

/// Lowercase hostname of the resolved URL.
pub fn get_domain(raw: &str, base: Option<&str>) -> FieldResult<String> {
    let url = parse_resolved(raw, base)?;
    url.host_str()
        .map(|h| h.to_lowercase())
        .ok_or_else(|| ExtractError::InvalidUrl {
            url: raw.to_string(),
            source: url::ParseError::EmptyHost,
        })
}

/// `Home` when the resolved path is exactly `/`, otherwise `Landing`.
pub fn classify_link_type(raw: &str, base: Option<&str>) -> FieldResult<LinkType> {
    let url = parse_resolved(raw, base)?;
    Ok(if url.path() == "/" {
        LinkType::Home
    } else {
        LinkType::Landing
    })
}

/// `base` when it parses, otherwise [`DEFAULT_BASE`]. Every function here
/// resolves against the same effective base.
fn effective_base(base: Option<&str>) -> Url {
    match base.map(Url::parse) {
        Some(Ok(url)) => url,
        Some(Err(e)) => {
            debug!("Unusable base {:?}: {}", base, e);
            DEFAULT_URL.clone()
        }
        None => DEFAULT_URL.clone(),
    }
}

/// Decoded `q` target of a redirect link. Site-relative targets are joined
/// onto `base` so the result is always absolute.
fn redirect_target(url: &Url, base: &Url) -> Option<String> {
    let (_, target) = url.query_pairs().find(|(key, _)| key == "q")?;
    if target.starts_with("http://") || target.starts_with("https://") {
        Some(target.into_owned())
    } else if target.starts_with('/') {
        base.join(&target).ok().map(|joined| joined.to_string())
    } else {
        None
    }
}

fn parse_resolved(raw: &str, base: Option<&str>) -> FieldResult<Url> {
    let resolved = resolve_url(raw, base);
    let joined = match Url::parse(&resolved) {
        Err(url::ParseError::RelativeUrlWithoutBase) => effective_base(base).join(&resolved),
        other => other,
    };
    joined.map_err(|source| ExtractError::InvalidUrl {
        url: raw.to_string(),
        source,
    })
}

fn is_absolute(raw: &str) -> bool {
    Url::parse(raw).map(|u| u.has_host()).unwrap_or(false)
}
