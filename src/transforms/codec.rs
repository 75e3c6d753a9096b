//! URL and base64 encoding operations

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{Error, Result};

/// Characters kept as is when encoding : ASCII alphanumerics and `_.-~`
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~');

/// Encoding set used when spaces are later turned into `+`
const FORM: &AsciiSet = &UNRESERVED.remove(b' ');

/// Encoding set keeping path separators
const PATH: &AsciiSet = &UNRESERVED.remove(b'/');

/// Percent-encodes the text. When `space_as_plus` is set spaces are encoded as `+`
/// (form encoding), otherwise they become `%20` and `/` is kept.
///
/// # Examples
/// ```
/// use texttools::transforms::codec::url_encode;
///
/// assert_eq!(url_encode("a b/c", true), "a+b%2Fc");
/// assert_eq!(url_encode("a b/c", false), "a%20b/c");
/// ```
pub fn url_encode(text: &str, space_as_plus: bool) -> String {
    if space_as_plus {
        utf8_percent_encode(text, FORM).to_string().replace(' ', "+")
    } else {
        utf8_percent_encode(text, PATH).to_string()
    }
}

/// Decodes percent-encoded text. When `space_as_plus` is set `+` is decoded as a space.
/// Invalid UTF-8 sequences are replaced with `U+FFFD`.
pub fn url_decode(text: &str, space_as_plus: bool) -> String {
    if space_as_plus {
        percent_decode_str(&text.replace('+', " "))
            .decode_utf8_lossy()
            .into_owned()
    } else {
        percent_decode_str(text).decode_utf8_lossy().into_owned()
    }
}

/// Encodes the UTF-8 bytes of the text in base64, trimming the surrounding
/// whitespace first when `trim_whitespace` is set
pub fn base64_encode(text: &str, trim_whitespace: bool) -> String {
    let text = if trim_whitespace { text.trim() } else { text };
    BASE64.encode(text.as_bytes())
}

/// Decodes base64 text into an UTF-8 string, trimming the surrounding
/// whitespace first when `trim_whitespace` is set
pub fn base64_decode(text: &str, trim_whitespace: bool) -> Result<String> {
    let text = if trim_whitespace { text.trim() } else { text };
    let bytes = BASE64
        .decode(text)
        .map_err(|e| Error::Msg(format!("invalid base64 input : {}", e)))?;
    String::from_utf8(bytes).map_err(|e| Error::Msg(format!("decoded data is not UTF-8 : {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_url_encode() {
        assert_eq!(url_encode("hello world", true), "hello+world");
        assert_eq!(url_encode("hello world", false), "hello%20world");
        assert_eq!(url_encode("a+b=c&d", true), "a%2Bb%3Dc%26d");
        assert_eq!(url_encode("safe_.-~", true), "safe_.-~");
        assert_eq!(url_encode("ñ", true), "%C3%B1");
    }

    #[test]
    fn test_url_decode() {
        assert_eq!(url_decode("hello+world", true), "hello world");
        assert_eq!(url_decode("hello+world", false), "hello+world");
        assert_eq!(url_decode("hello%20world", false), "hello world");
        assert_eq!(url_decode("%C3%B1", true), "ñ");
        assert_eq!(url_decode("%FF", true), "\u{FFFD}");
    }

    #[test]
    fn test_base64() {
        assert_eq!(base64_encode("hello", true), "aGVsbG8=");
        assert_eq!(base64_encode("  hello \n", true), "aGVsbG8=");
        assert_eq!(base64_encode(" hello", false), "IGhlbGxv");
        assert_eq!(base64_decode("aGVsbG8=\n", true).unwrap(), "hello");
        assert_eq!(base64_decode("IGhlbGxv", false).unwrap(), " hello");
    }

    #[test]
    fn test_base64_decode_errors() {
        assert!(base64_decode("not base64!", true).is_err());
        // 0xFF 0xFE is not valid UTF-8
        assert!(base64_decode("//4=", true).is_err());
    }

    #[test]
    fn test_base64_encode_trims_before_encoding() {
        let encoded = base64_encode("  padded  ", true);
        assert_eq!(base64_decode(&encoded, true).unwrap(), "padded");
    }

    proptest! {
        #[test]
        fn prop_base64_round_trip(s in "\\PC*") {
            let s = s.trim();
            prop_assert_eq!(base64_decode(&base64_encode(s, true), true).unwrap(), s);
        }

        #[test]
        fn prop_url_round_trip(s in "\\PC*", space_as_plus in any::<bool>()) {
            prop_assert_eq!(url_decode(&url_encode(&s, space_as_plus), space_as_plus), s);
        }
    }
}
