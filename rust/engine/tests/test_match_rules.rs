use maketen_engine::cards::{Card, CardId, CardKind};
use maketen_engine::rules::{is_match, outcome, PairOutcome};

fn card(id: &str, kind: CardKind, text: &str, value: i64) -> Card {
    Card {
        id: CardId::new(id),
        kind,
        text: text.to_string(),
        value,
        matched: false,
    }
}

#[test]
fn expression_with_ten_card_matches_either_order() {
    let expr = card("e", CardKind::Expression, "4 + 6", 10);
    let ten = card("t", CardKind::Ten, "10", 10);
    assert!(is_match(&expr, &ten));
    assert!(is_match(&ten, &expr));
    assert_eq!(outcome(&expr, &ten), PairOutcome::Match);
}

#[test]
fn two_expressions_never_match() {
    let a = card("a", CardKind::Expression, "4 + 6", 10);
    let b = card("b", CardKind::Expression, "3 + 7", 10);
    assert!(!is_match(&a, &b));
    assert_eq!(outcome(&a, &b), PairOutcome::Mismatch);
}

#[test]
fn two_tens_never_match() {
    let a = card("a", CardKind::Ten, "10", 10);
    let b = card("b", CardKind::Ten, "10", 10);
    assert!(!is_match(&a, &b));
}

#[test]
fn expression_over_ten_never_matches() {
    let eleven = card("e", CardKind::Expression, "6 + 5", 11);
    let nine = card("n", CardKind::Expression, "4 + 5", 9);
    let ten = card("t", CardKind::Ten, "10", 10);
    assert!(!is_match(&eleven, &ten));
    assert!(!is_match(&ten, &nine));
}

#[test]
fn every_default_expression_matches_every_ten() {
    use maketen_engine::cards::default_expressions;
    use maketen_engine::deck::Deck;

    let deck = Deck::new_with_seed(&default_expressions(), 3);
    let (exprs, tens): (Vec<_>, Vec<_>) = deck
        .cards()
        .iter()
        .partition(|c| c.kind == CardKind::Expression);
    for e in &exprs {
        for t in &tens {
            assert!(is_match(e, t), "{} should pair with 10", e.text);
        }
    }
}
