//! Percent-encoding for URL path segments.
//!
//! Object names (index names, saved search titles, config stanzas, usernames)
//! are interpolated into REST paths. Each name must stay a single path
//! segment: a `/` in a saved search title must not create a nested path, and
//! a `?` must not start a query string.
//!
//! ```
//! use splunk_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("Errors in the last hour"), "Errors%20in%20the%20last%20hour");
//! assert_eq!(encode_path_segment("web/access"), "web%2Faccess");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters percent-encoded in a path segment.
///
/// RFC 3986 path delimiters plus characters Splunk or intermediaries treat specially.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b';')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}')
    .add(b'~');

/// Percent-encode a string for use as exactly one URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_plain_names_unchanged() {
        assert_eq!(encode_path_segment("main"), "main");
        assert_eq!(encode_path_segment("_internal"), "_internal");
        assert_eq!(encode_path_segment("tcp-9997.default"), "tcp-9997.default");
    }

    #[test]
    fn test_reserved_characters() {
        assert_eq!(encode_path_segment("a/b"), "a%2Fb");
        assert_eq!(encode_path_segment("a?b#c"), "a%3Fb%23c");
        assert_eq!(encode_path_segment("50%"), "50%25");
        assert_eq!(encode_path_segment("host:9997"), "host:9997");
    }

    #[test]
    fn test_unicode_is_utf8_encoded() {
        assert_eq!(encode_path_segment("café"), "caf%C3%A9");
    }

    proptest! {
        #[test]
        fn encoded_segments_never_contain_delimiters(name in ".*") {
            let encoded = encode_path_segment(&name);
            prop_assert!(!encoded.contains('/'));
            prop_assert!(!encoded.contains('?'));
            prop_assert!(!encoded.contains('#'));
            prop_assert!(!encoded.contains(' '));
        }

        #[test]
        fn encoding_is_reversible(name in ".*") {
            let encoded = encode_path_segment(&name);
            let decoded = percent_encoding::percent_decode_str(&encoded).decode_utf8().unwrap();
            prop_assert_eq!(decoded, name);
        }
    }
}
