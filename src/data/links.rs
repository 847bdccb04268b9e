//! Outbound links for a venue.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Base of the map search link; the encoded address is appended.
pub const MAPS_SEARCH_BASE: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Characters left as-is in a query component, as `encodeURIComponent` does.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a query component.
///
/// Spaces become `%20`, never `+`.
pub fn encode_query_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Map search link for an address.
pub fn maps_url(address: &str) -> String {
    format!("{}{}", MAPS_SEARCH_BASE, encode_query_component(address))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encodes_spaces_and_commas() {
        assert_eq!(
            maps_url("7326 E. Sligh Ave, Tampa, FL"),
            "https://www.google.com/maps/search/?api=1&query=7326%20E.%20Sligh%20Ave%2C%20Tampa%2C%20FL"
        );
    }

    #[test]
    fn test_literal_plus_and_ampersand() {
        assert_eq!(encode_query_component("A+B & C"), "A%2BB%20%26%20C");
    }

    #[test]
    fn test_unreserved_marks_kept() {
        assert_eq!(
            encode_query_component("Suite 5 (rear) ~A's!"),
            "Suite%205%20(rear)%20~A's!"
        );
        assert_eq!(encode_query_component("a-b_c.d*e"), "a-b_c.d*e");
        assert_eq!(encode_query_component("#1/2?x=y"), "%231%2F2%3Fx%3Dy");
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(encode_query_component("Café"), "Caf%C3%A9");
    }

    #[test]
    fn test_maps_url_parses() {
        let url = url::Url::parse(&maps_url("1006 Victoria Street. Brandon, FL 33510")).unwrap();
        let query: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(query[0], ("api".to_string(), "1".to_string()));
        assert_eq!(
            query[1],
            (
                "query".to_string(),
                "1006 Victoria Street. Brandon, FL 33510".to_string()
            )
        );
    }
}
