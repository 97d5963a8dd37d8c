// core/tests/approx_ranking.rs
//
// Approximate candidate ranking and the combined search built on it.

use stenolex_core::{
    Config, Lexicon, LookupEngine, LookupMethod, LookupResultReason, Outline,
};

fn lexicon(path: &str, entries: &[(&str, &str)]) -> Lexicon {
    let mut lx = Lexicon::new(path);
    for (outline, translation) in entries {
        lx.insert(*outline, *translation);
    }
    lx
}

fn animals() -> Vec<Lexicon> {
    vec![
        lexicon("user.json", &[("KAT", "cat"), ("KAEUT/TKPWOER/REU", "category")]),
        lexicon(
            "main.json",
            &[("KOPB/KAT/TPHAEUT", "concatenate"), ("TKOG", "dog"), ("KA*T", "Cat")],
        ),
    ]
}

#[test]
fn translations_rank_exact_then_prefix_then_substring() {
    let engine = LookupEngine::default();
    let got = engine.approx_translations(&animals(), "cat");
    assert_eq!(got, vec!["Cat", "cat", "category", "concatenate"]);
}

#[test]
fn translation_candidates_match_case_insensitively() {
    let engine = LookupEngine::default();
    let got = engine.approx_translations(&animals(), "CAT");
    // "CAT" itself is always a candidate; "Cat" and "cat" tie with it on tier
    // and length and fall back to string ordering.
    assert_eq!(got, vec!["CAT", "Cat", "cat", "category", "concatenate"]);
}

#[test]
fn translation_candidates_are_capped() {
    let mut lx = Lexicon::new("many.json");
    for i in 0..80 {
        lx.insert(format!("S{i}").as_str(), format!("word{i:02}").as_str());
    }
    let engine = LookupEngine::default();
    let got = engine.approx_translations(&[lx.clone()], "word");
    assert_eq!(got.len(), 50);
    assert_eq!(got[0], "word");
    assert_eq!(got[1], "word00");

    let engine = LookupEngine::new(Config {
        max_results: 5,
        ..Config::default()
    });
    assert_eq!(engine.approx_translations(&[lx], "word").len(), 5);
}

#[test]
fn strokes_rank_by_tier_then_stroke_count() {
    let engine = LookupEngine::default();
    let got: Vec<String> = engine
        .approx_strokes(&animals(), "kat")
        .iter()
        .map(|o| o.to_string())
        .collect();
    // "kat" parses to an outline of its own, which joins to "kat" and ranks
    // with the exact match tier.
    assert_eq!(got, vec!["KAT", "kat", "KOPB/KAT/TPHAEUT"]);
}

#[test]
fn stroke_candidates_include_multi_stroke_prefixes() {
    let engine = LookupEngine::default();
    let got: Vec<Outline> = engine.approx_strokes(&animals(), "KAEUT/");
    assert_eq!(got[0], Outline::parse("KAEUT/"));
    assert!(got.contains(&Outline::parse("KAEUT/TKPWOER/REU")));
}

#[test]
fn translation_search_groups_each_candidate() {
    let engine = LookupEngine::default();
    let results = engine.search(&animals(), LookupMethod::Translation, "  cat ");

    assert_eq!(results.method, Some(LookupMethod::Translation));
    let keys: Vec<&str> = results.groups.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(keys, vec!["Cat", "cat", "category", "concatenate"]);

    let words: Vec<&str> = results.words().map(|t| t.translation.as_str()).collect();
    assert_eq!(words, vec!["Cat", "cat", "category", "concatenate"]);

    let details = results.details("cat").unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0].dictionary.as_deref(), Some("user"));
    assert_eq!(details[0].reason, LookupResultReason::Defined);
}

#[test]
fn translation_search_keeps_groups_without_definitions() {
    let engine = LookupEngine::default();
    let results = engine.search(&animals(), LookupMethod::Translation, "zebra");
    assert_eq!(results.groups.len(), 1);
    assert_eq!(results.groups[0].key, "zebra");
    assert!(results.groups[0].short.is_empty());
    assert_eq!(results.words().count(), 0);
}

#[test]
fn stroke_search_looks_up_each_outline() {
    let engine = LookupEngine::default();
    let results = engine.search(&animals(), LookupMethod::Stroke, "TKOG");
    let words: Vec<(String, String)> = results
        .words()
        .map(|t| (t.outlines[0].to_string(), t.translation.clone()))
        .collect();
    assert_eq!(words, vec![("TKOG".to_string(), "dog".to_string())]);
}

#[test]
fn search_results_serialize_to_json() {
    let engine = LookupEngine::default();
    let results = engine.search(&animals(), LookupMethod::Stroke, "TKOG");
    let json = serde_json::to_value(&results).unwrap();
    assert_eq!(json["method"], "stroke");
    assert_eq!(json["groups"][0]["key"], "TKOG");
    assert_eq!(json["groups"][0]["full"][0]["reason"], "defined");
    assert_eq!(json["groups"][0]["full"][0]["strokes"][0], "TKOG");
    assert!(json["groups"][0]["full"][0].get("outlines").is_none());
}
