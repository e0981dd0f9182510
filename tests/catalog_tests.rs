// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal_macros::dec;
use salesdash::catalog::{generate_seeded, load, load_json, validate};
use salesdash::config::Settings;
use salesdash::models::{Category, Granularity};
use std::collections::HashSet;
use tempfile::tempdir;

#[test]
fn generated_catalog_shape() {
    let p = generate_seeded(Some(42));
    assert_eq!(p.len(), 110);
    assert_eq!(p.iter().filter(|x| x.category == Category::Algida).count(), 60);
    assert_eq!(p.iter().filter(|x| x.category == Category::Unica).count(), 50);

    assert_eq!(p[0].id, "a1000");
    assert_eq!(p[0].barcode, "869063701000");
    assert_eq!(p[0].name, "Magnum Vanilla");
    assert_eq!(p[59].id, "a1059");
    assert_eq!(p[60].id, "u2000");
    assert_eq!(p[60].barcode, "400063702000");
    assert_eq!(p[60].name, "Domestos Lemon");
    // second lap over the base names shifts the variant by one
    assert_eq!(p[15].name, "Magnum Berry");
}

#[test]
fn generated_catalog_respects_invariants() {
    let p = generate_seeded(Some(1));
    assert!(validate(&p).is_empty());
    let ids: HashSet<_> = p.iter().map(|x| x.id.as_str()).collect();
    let barcodes: HashSet<_> = p.iter().map(|x| x.barcode.as_str()).collect();
    assert_eq!(ids.len(), p.len());
    assert_eq!(barcodes.len(), p.len());
    for x in &p {
        assert!(x.price >= dec!(1.00) && x.price <= dec!(11.00), "{}", x.price);
        assert_eq!(x.price.scale(), 2);
        // metric base in [50, 250) with jitter in [0.8, 1.2)
        assert!(x.income.daily >= 400_000 && x.income.daily < 3_000_000);
        assert!(x.income.monthly > x.income.daily);
        assert!(x.income.annual > x.income.monthly);
        assert!(x.returns.get(Granularity::Monthly) < x.income.get(Granularity::Monthly));
    }
}

#[test]
fn prices_reach_both_ends_of_range() {
    let prices: Vec<_> = (0..200u64).flat_map(seeded_prices).collect();
    assert!(prices.iter().all(|p| *p >= dec!(1.00) && *p <= dec!(11.00)));
    assert_eq!(prices.iter().max(), Some(&dec!(11.00)));
    assert_eq!(prices.iter().min(), Some(&dec!(1.00)));
}

fn seeded_prices(seed: u64) -> Vec<rust_decimal::Decimal> {
    generate_seeded(Some(seed)).into_iter().map(|p| p.price).collect()
}

#[test]
fn seed_makes_generation_reproducible() {
    assert_eq!(generate_seeded(Some(9)), generate_seeded(Some(9)));
    assert_ne!(generate_seeded(Some(9)), generate_seeded(Some(10)));
}

#[test]
fn validate_reports_each_problem() {
    let mut p = generate_seeded(Some(5));
    p[1].price = dec!(0);
    p[2].id = p[0].id.clone();
    p[3].barcode = p[0].barcode.clone();
    p[4].barcode = "12ab".into();
    let kinds: Vec<&str> = validate(&p).iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![
            "non_positive_price",
            "duplicate_id",
            "duplicate_barcode",
            "non_numeric_barcode"
        ]
    );
}

#[test]
fn json_catalog_round_trips_through_file() {
    let p = generate_seeded(Some(2));
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, serde_json::to_string_pretty(&p).unwrap()).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw[0]["category"], "Algida");
    assert_eq!(raw[60]["category"], "UNICA");
    assert!(raw[0]["imageUrl"].as_str().unwrap().starts_with("https://"));

    let settings = Settings {
        catalog: Some(path.clone()),
        ..Settings::default()
    };
    assert_eq!(load(&settings).unwrap(), p);
    assert_eq!(load_json(&path).unwrap(), p);
}

#[test]
fn load_rejects_invalid_catalog() {
    let mut p = generate_seeded(Some(2));
    p[1].id = p[0].id.clone();
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, serde_json::to_string(&p).unwrap()).unwrap();

    let settings = Settings {
        catalog: Some(path),
        ..Settings::default()
    };
    let err = load(&settings).unwrap_err();
    assert!(err.to_string().contains("duplicate_id"), "{err}");
}

#[test]
fn load_reports_missing_file() {
    let dir = tempdir().unwrap();
    let settings = Settings {
        catalog: Some(dir.path().join("missing.json")),
        ..Settings::default()
    };
    let err = load(&settings).unwrap_err();
    assert!(err.to_string().starts_with("Read catalog"), "{err}");
}
