use canti_core::{CantoArg, CantoRepository, ErrorCode, is_excluded, sanitize_verse};
use proptest::prelude::*;

fn verse_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(' '),
            Just(','),
            Just('.'),
            Just('«'),
            Just('»'),
            Just('’'),
            Just('\n'),
            Just('à'),
            prop::char::range('a', 'z'),
        ],
        0..40,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn sanitize_is_idempotent(verse in verse_strategy()) {
        let once = sanitize_verse(&verse);
        prop_assert_eq!(sanitize_verse(once), once);
    }

    #[test]
    fn sanitize_only_removes_edges(verse in verse_strategy()) {
        let clean = sanitize_verse(&verse);
        prop_assert!(verse.contains(clean));
        if let Some(first) = clean.chars().next() {
            prop_assert!(!is_excluded(first));
        }
        if let Some(last) = clean.chars().last() {
            prop_assert!(!is_excluded(last));
        }
    }

    #[test]
    fn integers_outside_corpus_are_not_found(n in prop_oneof![-1000i64..1, 35i64..1000]) {
        prop_assert_eq!(n.to_canto().unwrap_err().code, ErrorCode::CantoNotFound);
    }

    #[test]
    fn alphabetic_strings_are_invalid_arguments(s in "[a-z]{1,8}") {
        prop_assert_eq!(s.to_canto().unwrap_err().code, ErrorCode::InvalidArgument);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn tercets_are_verses_floor_divided_by_three(k in 0usize..60) {
        let dir = tempfile::tempdir().unwrap();
        let content: String = (0..k).map(|i| format!("verso {i}\n")).collect();
        std::fs::write(dir.path().join("Canto_10.txt"), content).unwrap();
        let repo = CantoRepository::new(dir.path());

        prop_assert_eq!(repo.count_verses(10).unwrap(), k);
        prop_assert_eq!(repo.count_tercets(10).unwrap(), k / 3);
    }
}
