/// Canonical form for ingredient comparison: lower-cased, internal
/// whitespace runs collapsed to a single space, ends trimmed.
///
/// Must be applied to both corpus ingredient names and query terms before
/// any comparison; normalizing only one side breaks matching.
pub fn normalize(term: &str) -> String {
    term.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_collapses_whitespace() {
        assert_eq!(
            normalize("  Extra   Virgin   Olive Oil "),
            "extra virgin olive oil"
        );
    }

    #[test]
    fn test_already_normal_is_unchanged() {
        assert_eq!(normalize("chicken breast"), "chicken breast");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t  "), "");
    }

    #[test]
    fn test_tabs_and_newlines_collapse() {
        assert_eq!(normalize("red\t wine\nvinegar"), "red wine vinegar");
    }
}
