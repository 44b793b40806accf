//! Deduplication keys for fused results.
//!
//! Different backends hand back the same page under cosmetically different
//! URLs: tracking parameters, fragments, host casing, a `www.` prefix, or
//! `http` where another provider says `https`. [`dedup_key`] reduces a
//! result URL to an opaque identity string so fusion can spot those
//! duplicates. The key is not a URL and is never shown to callers; equal
//! raw URLs always produce equal keys.

use url::{form_urlencoded, Url};

/// Query parameters that only track attribution, ignored for identity.
/// Any `utm_*` parameter is treated the same way.
const TRACKING_PARAMS: &[&str] = &["fbclid", "gclid", "msclkid", "ref", "si"];

/// Reduce a result URL to its deduplication identity.
///
/// Two URLs map to the same key when they differ only in scheme
/// (`http`/`https`), host casing, a leading `www.`, default ports,
/// trailing slashes, fragments, query-parameter order, or tracking
/// parameters. Anything that cannot be parsed as a URL is keyed by its
/// trimmed raw text.
pub fn dedup_key(raw: &str) -> String {
    let Ok(parsed) = Url::parse(raw) else {
        return raw.trim().to_string();
    };

    let host = parsed.host_str().unwrap_or("").to_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);

    let mut key = String::from(host);
    // Url::port() is None for a scheme's default port, so defaults drop
    // out of the key on their own.
    if let Some(port) = parsed.port() {
        key.push(':');
        key.push_str(&port.to_string());
    }
    key.push_str(parsed.path().trim_end_matches('/'));

    let mut pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(k, _)| !is_tracking_param(k))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    pairs.sort();

    if !pairs.is_empty() {
        // Re-encode so a decoded separator inside a value ("a&b") cannot
        // collide with genuinely distinct parameters.
        let query: String = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&pairs)
            .finish();
        key.push('?');
        key.push_str(&query);
    }

    key
}

fn is_tracking_param(key: &str) -> bool {
    let k = key.to_lowercase();
    k.starts_with("utm_") || TRACKING_PARAMS.contains(&k.as_str())
}
