//! Tag handling
//!
//! Tags arrive as one comma-separated string. The whole string is lowercased
//! and checked against [`REJECTED_CHARS`] before it is split, so a single bad
//! character anywhere rejects every tag in the list.

use std::collections::HashMap;

use crate::error::{LinkError, LinkResult};

/// Characters that may not appear anywhere in a tag string
pub const REJECTED_CHARS: &[char] = &[
    ' ', '\'', '"', '‘', '’', '“', '”', '¡', '!', '¿', '?', '.', ';', ':', '-', '(', ')',
];

/// Check whether `raw` contains any rejected character
pub fn has_rejected_chars(raw: &str) -> bool {
    raw.chars().any(|c| REJECTED_CHARS.contains(&c))
}

/// Lowercase, validate and split a comma-separated tag string
///
/// Empty segments (from `""` or `"a,,b"`) are dropped.
pub fn parse_tags(raw: &str) -> LinkResult<Vec<String>> {
    let lowered = raw.to_lowercase();
    if has_rejected_chars(&lowered) {
        return Err(LinkError::InvalidTags {
            tags: raw.to_string(),
        });
    }

    Ok(split_tags(&lowered))
}

/// Split a comma-separated query into lowercase tags without validating it
pub fn split_query(raw: &str) -> Vec<String> {
    split_tags(&raw.to_lowercase())
}

fn split_tags(lowered: &str) -> Vec<String> {
    lowered
        .split(',')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Compare two tag lists as multisets: same tags, same counts, any order
pub fn same_tag_multiset(a: &[String], b: &[String]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut counts: HashMap<&str, i64> = HashMap::new();
    for tag in a {
        *counts.entry(tag.as_str()).or_default() += 1;
    }
    for tag in b {
        *counts.entry(tag.as_str()).or_default() -= 1;
    }
    counts.values().all(|&n| n == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_tags_lowercases_and_splits() {
        assert_eq!(parse_tags("News,TECH").unwrap(), tags(&["news", "tech"]));
        assert_eq!(parse_tags("rust").unwrap(), tags(&["rust"]));
    }

    #[test]
    fn test_parse_tags_keeps_order_and_duplicates() {
        assert_eq!(parse_tags("b,a,b").unwrap(), tags(&["b", "a", "b"]));
    }

    #[test]
    fn test_parse_tags_drops_empty_segments() {
        assert!(parse_tags("").unwrap().is_empty());
        assert_eq!(parse_tags("a,,b,").unwrap(), tags(&["a", "b"]));
    }

    #[test]
    fn test_parse_tags_rejects_punctuation_anywhere() {
        for raw in [
            "news, tech",
            "news,te-ch",
            "what?",
            "¡hola",
            "¿que",
            "end.",
            "a;b",
            "a:b",
            "(a)",
            "it's",
            "\"quoted\"",
            "“curly”",
            "‘single’",
            "wow!",
        ] {
            let err = parse_tags(raw).unwrap_err();
            assert!(
                matches!(err, LinkError::InvalidTags { .. }),
                "expected rejection for {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_rejection_keeps_raw_input() {
        match parse_tags("Bad Tag").unwrap_err() {
            LinkError::InvalidTags { tags } => assert_eq!(tags, "Bad Tag"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_unicode_letters_allowed() {
        assert_eq!(parse_tags("Música,Ñandú").unwrap(), tags(&["música", "ñandú"]));
    }

    #[test]
    fn test_split_query_does_not_validate() {
        assert_eq!(split_query("A,b c"), tags(&["a", "b c"]));
    }

    #[test]
    fn test_same_tag_multiset() {
        assert!(same_tag_multiset(&tags(&["a", "b"]), &tags(&["b", "a"])));
        assert!(same_tag_multiset(&tags(&[]), &tags(&[])));
        assert!(!same_tag_multiset(&tags(&["a", "b"]), &tags(&["a", "b", "c"])));
        assert!(!same_tag_multiset(&tags(&["a", "a"]), &tags(&["a", "b"])));
        assert!(!same_tag_multiset(&tags(&["a", "a", "b"]), &tags(&["a", "b", "b"])));
    }
}
