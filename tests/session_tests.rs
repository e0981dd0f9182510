// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use salesdash::catalog::generate_seeded;
use salesdash::commands::interactive;
use salesdash::i18n::Language;
use salesdash::models::{Category, Granularity};
use salesdash::pipeline::{aggregate_totals, Session};

#[test]
fn view_recomputes_only_on_query_or_range_change() {
    let mut s = Session::new(generate_seeded(Some(4)));
    assert_eq!(s.view().products.len(), 110);
    assert_eq!(s.recomputations(), 1);

    s.view();
    s.toggle_language();
    s.toggle_section(Category::Algida);
    s.view();
    assert_eq!(s.recomputations(), 1);

    s.set_query("magnum");
    assert_eq!(s.view().products.len(), 4);
    assert_eq!(s.recomputations(), 2);

    s.set_query("magnum");
    s.view();
    assert_eq!(s.recomputations(), 2);

    s.set_granularity(Granularity::Annual);
    let expected = aggregate_totals(&s.view().products.clone(), Granularity::Annual);
    assert_eq!(s.view().totals, expected);
    assert_eq!(s.recomputations(), 3);
}

#[test]
fn session_defaults_and_toggles() {
    let mut s = Session::new(Vec::new());
    assert_eq!(s.granularity(), Granularity::Monthly);
    assert_eq!(s.language(), Language::En);
    assert!(Category::ALL.iter().all(|c| s.is_expanded(*c)));

    s.toggle_section(Category::Unica);
    assert!(s.is_expanded(Category::Algida));
    assert!(!s.is_expanded(Category::Unica));
    s.toggle_section(Category::Unica);
    assert!(s.is_expanded(Category::Unica));

    s.toggle_language();
    assert_eq!(s.language(), Language::Az);
    s.toggle_language();
    assert_eq!(s.language(), Language::En);

    let v = s.view();
    assert!(v.products.is_empty());
    assert_eq!(v.totals.income, 0);
}

#[test]
fn interactive_applies_commands_in_order() {
    let mut s = Session::new(generate_seeded(Some(4)));
    let input = "search domestos\nrange annual\nlang\ntoggle algida\nrange weekly\nbogus\nquit\nsearch never-reached\n";
    let mut out = Vec::new();
    interactive::run(&mut s, input.as_bytes(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(s.query(), "domestos");
    assert_eq!(s.granularity(), Granularity::Annual);
    assert_eq!(s.language(), Language::Az);
    assert!(!s.is_expanded(Category::Algida));
    assert!(text.contains("Satış Paneli"));
    assert!(text.contains("Unknown time range 'weekly'"));
    assert!(text.contains("unknown command 'bogus'"));
    assert!(!text.contains("never-reached"));
}

#[test]
fn interactive_ignores_extra_spaces_before_argument() {
    let mut s = Session::new(generate_seeded(Some(4)));
    let input = "search  magnum\nrange\t annual\n";
    let mut out = Vec::new();
    interactive::run(&mut s, input.as_bytes(), &mut out).unwrap();

    assert_eq!(s.query(), "magnum");
    assert_eq!(s.granularity(), Granularity::Annual);
    assert_eq!(s.view().products.len(), 4);
}

#[test]
fn interactive_clear_restores_full_catalog() {
    let mut s = Session::new(generate_seeded(Some(4)));
    let input = "search 999999\nclear\n";
    let mut out = Vec::new();
    interactive::run(&mut s, input.as_bytes(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("No products"));
    assert_eq!(s.query(), "");
    assert_eq!(s.view().products.len(), 110);
}
