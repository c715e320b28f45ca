//! URL-encoded form and query string decoding

use crate::Error;

/// Decode URL-encoded input into name/value pairs.
///
/// Duplicate names are kept, in input order, so a request view can expose
/// multi-valued parameters. Empty input decodes to no pairs.
pub fn parse_pairs(raw: &[u8]) -> Result<Vec<(String, String)>, Error> {
    serde_urlencoded::from_bytes(raw)
        .map_err(|e| Error::BadRequest(format!("Failed to parse form data: {}", e)))
}

/// Encode name/value pairs as an URL-encoded body.
pub fn to_body(pairs: &[(&str, &str)]) -> Result<Vec<u8>, Error> {
    serde_urlencoded::to_string(pairs)
        .map(String::into_bytes)
        .map_err(|e| Error::Serialization(format!("Failed to encode form data: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pairs() {
        let pairs = parse_pairs(b"forename=Ada&age=36").unwrap();
        assert_eq!(
            pairs,
            vec![
                ("forename".to_string(), "Ada".to_string()),
                ("age".to_string(), "36".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_pairs_keeps_duplicates_in_order() {
        let pairs = parse_pairs(b"tag=a&tag=b").unwrap();
        assert_eq!(
            pairs,
            vec![
                ("tag".to_string(), "a".to_string()),
                ("tag".to_string(), "b".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_pairs_decodes_percent_escapes() {
        let pairs = parse_pairs(b"name=Ada%20Lovelace").unwrap();
        assert_eq!(pairs[0].1, "Ada Lovelace");
    }

    #[test]
    fn test_parse_pairs_empty_input() {
        assert!(parse_pairs(b"").unwrap().is_empty());
    }

    #[test]
    fn test_round_trip() {
        let body = to_body(&[("q", "a b"), ("page", "2")]).unwrap();
        let pairs = parse_pairs(&body).unwrap();
        assert_eq!(pairs[0], ("q".to_string(), "a b".to_string()));
        assert_eq!(pairs[1], ("page".to_string(), "2".to_string()));
    }
}
