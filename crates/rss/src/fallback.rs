// ABOUTME: Ordered-candidate evaluation shared by every field fallback chain.

/// Returns the first candidate that is not the empty string.
///
/// Emptiness is tested as-is; callers trim afterwards where needed.
pub fn first_non_empty<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates.into_iter().find(|c| !c.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_first_non_empty_in_order() {
        assert_eq!(first_non_empty(["", "b", "c"]), Some("b"));
        assert_eq!(first_non_empty(["a", "b"]), Some("a"));
    }

    #[test]
    fn whitespace_counts_as_a_value() {
        assert_eq!(first_non_empty(["", " ", "x"]), Some(" "));
    }

    #[test]
    fn none_when_all_empty() {
        assert_eq!(first_non_empty(["", ""]), None);
        assert_eq!(first_non_empty(Vec::<&str>::new()), None);
    }
}
