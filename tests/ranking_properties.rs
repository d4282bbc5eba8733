use finder_core::core::catalog::TranslationCatalog;
use finder_core::{distance, rank, CultureTag, Translation};

const SAMPLES: &[&str] = &[
    "",
    "a",
    "Hello",
    "hello world",
    "hello_world",
    "Save file",
    "Save the file",
    "abcd efgh",
    "abcdefgh",
    "grasdcbue",
    "Otwórz  plik",
    "--",
    "ZAŻÓŁĆ gęślą jaźń",
];

#[test]
fn distance_to_self_is_zero_ignoring_case() {
    for s in SAMPLES {
        assert_eq!(distance(s, s), 0.0, "{s:?}");
        assert_eq!(distance(s, &s.to_uppercase()), 0.0, "{s:?}");
    }
}

#[test]
fn distance_is_exactly_symmetric() {
    for a in SAMPLES {
        for b in SAMPLES {
            assert_eq!(distance(a, b), distance(b, a), "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn distance_is_finite_and_non_negative() {
    for a in SAMPLES {
        for b in SAMPLES {
            let d = distance(a, b);
            assert!(d.is_finite() && d >= 0.0, "{a:?} vs {b:?} = {d}");
        }
    }
}

#[test]
fn regression_near_match_vs_scramble() {
    assert!(distance("abcd efgh", "abcdefgh") < distance("abcd efgh", "grasdcbue"));
}

#[test]
fn delimiter_variants_score_low() {
    assert!(distance("hello_world", "hello world") < 0.5);
    assert!(distance("hello-world", "hello_world") < 0.5);
}

#[test]
fn long_inputs_do_not_fail() {
    let a = "lorem ipsum ".repeat(200);
    let b = "lorem_ipsum-".repeat(190);
    assert!(distance(&a, &b).is_finite());
}

#[test]
fn scoring_is_shareable_across_threads() {
    let catalog = TranslationCatalog::from_entries(
        CultureTag::neutral(),
        [("SaveFile", "Save file"), ("OpenFile", "Open file"), ("Cancel", "Cancel")],
    );
    let expected = rank("save", catalog.entries());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let catalog = catalog.clone();
            std::thread::spawn(move || rank("save", catalog.entries()))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn rank_is_stable_for_equal_texts() {
    let candidates = vec![
        Translation::new("A", "cat", CultureTag::neutral()),
        Translation::new("Z", "dog", CultureTag::neutral()),
        Translation::new("B", "cat", CultureTag::neutral()),
    ];
    let ranked = rank("cats", &candidates);
    let keys: Vec<&str> = ranked.iter().map(|t| t.key.as_str()).collect();
    assert_eq!(keys, vec!["A", "B", "Z"]);
}

#[test]
fn rank_of_nothing_is_nothing() {
    assert!(rank("anything", &[]).is_empty());
}
