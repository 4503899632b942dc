// ABOUTME: Integration tests for the default collaborators.
// ABOUTME: Tests date parsing, tag stripping, URL resolution and link relations through the public API.

use feedcanon_rss::{
    absolute_url, is_valid_link_relation, parse_flexible_time, strip_tags, ContentHasher,
    FeedError, Sha256Hasher,
};

mod time_parse_tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_parse_dublin_core_date() {
        let dt = parse_flexible_time("2023-06-15T14:30:00+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2023, 6, 15, 12, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_pub_date() {
        let dt = parse_flexible_time("Sat, 07 Sep 2002 09:42:31 GMT").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2002, 9, 7, 9, 42, 31).unwrap());
    }

    #[test]
    fn test_parse_naive_datetime_as_utc() {
        let dt = parse_flexible_time("2006-01-02 15:04:05").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap());
    }

    #[test]
    fn test_invalid_date() {
        assert!(matches!(
            parse_flexible_time("not a date"),
            Err(FeedError::InvalidDate { .. })
        ));
    }
}

mod strip_tags_tests {
    use super::*;

    #[test]
    fn test_author_markup_removed() {
        assert_eq!(strip_tags("<span>John</span> <i>Smith</i>"), "John Smith");
    }

    #[test]
    fn test_email_style_author_untouched() {
        assert_eq!(strip_tags("john@example.com (John)"), "john@example.com (John)");
    }
}

mod url_tests {
    use super::*;

    #[test]
    fn test_relative_resolution() {
        assert_eq!(
            absolute_url("http://blog.example/", "/posts/1").unwrap(),
            "http://blog.example/posts/1"
        );
    }

    #[test]
    fn test_protocol_relative_resolution() {
        assert_eq!(
            absolute_url("https://blog.example/", "//cdn.example/a").unwrap(),
            "https://cdn.example/a"
        );
    }

    #[test]
    fn test_unresolvable() {
        assert!(absolute_url("", "posts/1").is_err());
    }
}

mod link_relation_tests {
    use super::*;

    #[test]
    fn test_documented_cases() {
        assert!(is_valid_link_relation(""));
        assert!(is_valid_link_relation("alternate"));
        assert!(!is_valid_link_relation("stylesheet"));
        assert!(is_valid_link_relation("http://example.org/rel/x"));
    }
}

#[test]
fn test_hash_is_deterministic() {
    assert_eq!(Sha256Hasher.hash("guid"), Sha256Hasher.hash("guid"));
    assert_ne!(Sha256Hasher.hash("guid"), Sha256Hasher.hash("guid2"));
    assert_eq!(Sha256Hasher.hash("x").len(), 64);
}
