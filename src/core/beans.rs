pub const BEAN_LABEL: &str = "bean";

/// Counts the items exactly equal to `label`.
pub fn count_label<S: AsRef<str>>(items: &[S], label: &str) -> usize {
    items
        .iter()
        .fold(0, |count, item| count + usize::from(item.as_ref() == label))
}

pub fn count_beans<S: AsRef<str>>(items: &[S]) -> usize {
    count_label(items, BEAN_LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_beans() {
        let empty: [&str; 0] = [];
        assert_eq!(count_beans(&empty), 0);
        assert_eq!(count_beans(&["bean", "corn", "bean"]), 2);
        assert_eq!(count_beans(&["corn", "corn"]), 0);
    }

    #[test]
    fn test_count_is_exact_match() {
        assert_eq!(count_beans(&["Bean", " bean", "beans", "bean"]), 1);
    }

    #[test]
    fn test_count_label_owned_strings() {
        let items = vec!["corn".to_string(), "pea".to_string(), "corn".to_string()];
        assert_eq!(count_label(&items, "corn"), 2);
        assert_eq!(items.len(), 3);
    }
}
