//! Pool id lookup in page URLs

/// Query parameter that names the pool, matched case-insensitively
pub const POOL_PARAM: &str = "mp";

/// Extract the pool id from a URL or a path-and-query string.
///
/// Returns the percent-decoded value of the first `mp` parameter, or `None`
/// when there is no query, no such parameter, or its value is empty.
pub fn parse_pool_id(url: &str) -> Option<String> {
    query_param(url, POOL_PARAM)
}

/// First value of a query parameter, key matched case-insensitively.
///
/// Repeated keys never fail the lookup; later occurrences are ignored.
pub fn query_param(url: &str, key: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    let query = query.split('#').next().unwrap_or_default();

    query
        .split('&')
        .filter_map(|pair| {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            name.eq_ignore_ascii_case(key).then_some(value)
        })
        .next()
        .map(|value| {
            let value = value.replace('+', " ");
            urlencoding::decode(&value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or(value)
        })
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_url() {
        assert_eq!(
            parse_pool_id("https://pools.example.com/?mp=summer-trip"),
            Some("summer-trip".to_string())
        );
    }

    #[test]
    fn test_path_and_query() {
        assert_eq!(parse_pool_id("/?lang=de&mp=abc&x=1"), Some("abc".to_string()));
    }

    #[test]
    fn test_key_is_case_insensitive() {
        assert_eq!(parse_pool_id("/?MP=abc"), Some("abc".to_string()));
        assert_eq!(parse_pool_id("/?Mp=abc"), Some("abc".to_string()));
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(parse_pool_id("/?mp=first&mp=second"), Some("first".to_string()));
    }

    #[test]
    fn test_missing_parameter() {
        assert_eq!(parse_pool_id("https://pools.example.com/"), None);
        assert_eq!(parse_pool_id("/?pool=abc"), None);
        assert_eq!(parse_pool_id("/?"), None);
        assert_eq!(parse_pool_id("/?mp="), None);
        assert_eq!(parse_pool_id("/?mp"), None);
    }

    #[test]
    fn test_percent_decoding() {
        assert_eq!(parse_pool_id("/?mp=Geburtstag%20Lisa"), Some("Geburtstag Lisa".to_string()));
        assert_eq!(parse_pool_id("/?mp=a+b"), Some("a b".to_string()));
    }

    #[test]
    fn test_fragment_ignored() {
        assert_eq!(parse_pool_id("/?mp=abc#table"), Some("abc".to_string()));
    }

    #[test]
    fn test_query_param_other_keys() {
        assert_eq!(query_param("/?mp=trip&mode=dark&mode=light", "mode"), Some("dark".to_string()));
        assert_eq!(query_param("/?MODE=Dark", "mode"), Some("Dark".to_string()));
        assert_eq!(query_param("/?mp=trip", "mode"), None);
    }
}
