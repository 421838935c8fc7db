use proptest::prelude::*;
use small_drills::{count_beans, count_label};

#[test]
fn test_count_beans_reference_values() {
    let empty: Vec<String> = Vec::new();
    assert_eq!(count_beans(&empty), 0);
    assert_eq!(count_beans(&["bean", "corn", "bean"]), 2);
    assert_eq!(count_beans(&["corn", "corn"]), 0);
}

#[test]
fn test_count_label_other_targets() {
    let pantry = ["rice", "bean", "rice", "lentil", "rice"];
    assert_eq!(count_label(&pantry, "rice"), 3);
    assert_eq!(count_label(&pantry, "lentil"), 1);
    assert_eq!(count_label(&pantry, "barley"), 0);
}

fn pantry_item() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("bean".to_string()),
        Just("corn".to_string()),
        Just("pea".to_string()),
        "[a-z]{0,6}",
    ]
}

proptest! {
    #[test]
    fn count_never_exceeds_length(items in prop::collection::vec(pantry_item(), 0..50)) {
        prop_assert!(count_beans(&items) <= items.len());
    }

    #[test]
    fn count_matches_filter(items in prop::collection::vec(pantry_item(), 0..50)) {
        let expected = items.iter().filter(|item| item.as_str() == "bean").count();
        prop_assert_eq!(count_beans(&items), expected);
        prop_assert_eq!(count_beans(&items), count_beans(&items));
    }

    #[test]
    fn count_is_additive_over_concatenation(
        left in prop::collection::vec(pantry_item(), 0..20),
        right in prop::collection::vec(pantry_item(), 0..20),
    ) {
        let joined: Vec<String> = left.iter().chain(right.iter()).cloned().collect();
        prop_assert_eq!(count_beans(&joined), count_beans(&left) + count_beans(&right));
    }
}
