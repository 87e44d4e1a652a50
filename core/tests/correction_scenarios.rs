// core/tests/correction_scenarios.rs
//
// End-to-end behaviour of `Engine::correct` and `Engine::explain` on a small
// fixture dictionary.

use diacritice_core::{Config, Dictionary, Engine, MatchKind};

fn fixture_engine() -> Engine {
    Engine::with_dictionary(Dictionary::from_pairs([
        ("tara", "țară"),
        ("frumoasa", "frumoasă"),
        ("si", "și"),
        ("romania", "românia"),
    ]))
}

#[test]
fn restores_sentence() {
    let engine = fixture_engine();
    assert_eq!(
        engine.correct("Romania este o tara frumoasa"),
        "România este o țară frumoasă"
    );
}

#[test]
fn full_uppercase_is_preserved() {
    assert_eq!(fixture_engine().correct("ROMANIA"), "ROMÂNIA");
}

#[test]
fn trailing_punctuation_is_preserved() {
    assert_eq!(fixture_engine().correct("tara."), "țară.");
    assert_eq!(
        fixture_engine().correct("Tara, si Romania!"),
        "Țară, și România!"
    );
}

#[test]
fn unrelated_words_pass_through() {
    let engine = fixture_engine();
    assert_eq!(engine.correct("xyzzy plugh"), "xyzzy plugh");

    let report = engine.explain("xyzzy plugh");
    assert_eq!(report.total_words, 2);
    assert_eq!(report.total_corrected, 0);
    assert!(report
        .corrections
        .iter()
        .all(|c| c.kind == MatchKind::None && c.confidence == 1.0));
}

#[test]
fn empty_input() {
    let engine = fixture_engine();
    assert_eq!(engine.correct(""), "");

    let report = engine.explain("");
    assert_eq!(report.corrected_text, "");
    assert_eq!(report.total_words, 0);
    assert!(report.corrections.is_empty());
}

#[test]
fn whitespace_is_normalised() {
    assert_eq!(
        fixture_engine().correct("  tara \t si\n\nromania  "),
        "țară și românia"
    );
}

#[test]
fn typo_is_corrected_through_fuzzy_search() {
    let engine = fixture_engine();
    assert_eq!(engine.correct("Frumosa tara"), "Frumoasă țară");

    let report = engine.explain("Frumosa tara");
    assert_eq!(report.corrections[0].kind, MatchKind::Fuzzy);
    assert!(report.corrections[0].confidence < 1.0);
    assert_eq!(report.corrections[1].kind, MatchKind::Exact);
    assert_eq!(report.corrections[1].confidence, 1.0);
}

#[test]
fn explain_reports_every_word() {
    let text = "Romania este o tara frumoasa";
    let engine = fixture_engine();
    let report = engine.explain(text);

    assert_eq!(report.original_text, text);
    assert_eq!(report.corrected_text, engine.correct(text));
    assert_eq!(report.total_words, 5);
    assert_eq!(report.total_corrected, 3);

    let kinds: Vec<MatchKind> = report.corrections.iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![
            MatchKind::Exact,
            MatchKind::None,
            MatchKind::None,
            MatchKind::Exact,
            MatchKind::Exact
        ]
    );
    assert_eq!(
        report.changed_words(),
        vec![
            ("Romania", "România"),
            ("tara", "țară"),
            ("frumoasa", "frumoasă")
        ]
    );
}

#[test]
fn total_corrected_counts_matches_not_changes() {
    let engine = Engine::with_dictionary(Dictionary::from_pairs([
        ("tara", "țară"),
        ("este", "este"),
    ]));
    let report = engine.explain("tara este");
    assert_eq!(report.total_words, 2);
    assert_eq!(report.total_corrected, 2);
    assert_eq!(report.changed_words(), vec![("tara", "țară")]);
}

#[test]
fn context_window_spans_two_tokens_each_side() {
    let report = fixture_engine().explain("a b c d e f");
    assert_eq!(report.corrections[0].context, vec!["a", "b", "c"]);
    assert_eq!(report.corrections[3].context, vec!["b", "c", "d", "e", "f"]);
    assert_eq!(report.corrections[5].context, vec!["d", "e", "f"]);
}

#[test]
fn context_keeps_punctuation() {
    let report = fixture_engine().explain("tara, si");
    assert_eq!(report.corrections[1].context, vec!["tara,", "si"]);
}

#[test]
fn demo_dictionary_sentences() {
    let engine = Engine::with_dictionary(Dictionary::load_demo());
    assert_eq!(
        engine.correct("Bucuresti este capitala Romaniei"),
        "București este capitala României"
    );
    assert_eq!(
        engine.correct("Invatatura este importanta"),
        "Învățătură este importantă"
    );
}

#[test]
fn explain_threshold_override_matches_correct() {
    let engine = Engine::new(
        fixture_engine().dictionary().clone(),
        Config::default(),
    );
    for threshold in [0.5, 0.8, 0.95, 1.2] {
        let text = "Frumosa tara si romnia.";
        assert_eq!(
            engine.explain_with_threshold(text, threshold).corrected_text,
            engine.correct_with_threshold(text, threshold)
        );
    }
}
