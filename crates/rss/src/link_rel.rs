// ABOUTME: Link relation filter used when picking an item URL from Atom links.
// ABOUTME: Accepts content-link relations and extension relation URIs.

const CONTENT_RELATIONS: &[&str] = &["", "alternate", "enclosure", "related", "self", "via"];

/// Returns true when `rel` identifies a link to the item itself rather than
/// a stylesheet, hub, payment or similar link.
///
/// Relations starting with `http` are extension URIs and are accepted too.
pub fn is_valid_link_relation(rel: &str) -> bool {
    CONTENT_RELATIONS.contains(&rel) || rel.starts_with("http")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_content_relations() {
        for rel in ["", "alternate", "enclosure", "related", "self", "via"] {
            assert!(is_valid_link_relation(rel), "{:?} should be valid", rel);
        }
    }

    #[test]
    fn accepts_extension_uris() {
        assert!(is_valid_link_relation("http://example.org/rel/x"));
        assert!(is_valid_link_relation("https://example.org/rel/y"));
    }

    #[test]
    fn rejects_other_relations() {
        for rel in ["stylesheet", "hub", "payment", "Alternate", " self"] {
            assert!(!is_valid_link_relation(rel), "{:?} should be invalid", rel);
        }
    }
}
