// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal_macros::dec;
use salesdash::models::{Category, FinancialMetrics, Product};
use salesdash::{cli, commands::exporter};
use serde_json::json;
use tempfile::tempdir;

fn catalog() -> Vec<Product> {
    let m = |d, mo, a| FinancialMetrics {
        daily: d,
        monthly: mo,
        annual: a,
    };
    vec![
        Product {
            id: "a1".into(),
            barcode: "123".into(),
            name: "Magnum Classic".into(),
            image_url: "img".into(),
            category: Category::Algida,
            price: dec!(3.5),
            income: m(10, 100, 1200),
            expenses: m(6, 60, 720),
            returns: m(1, 5, 60),
        },
        Product {
            id: "u1".into(),
            barcode: "456".into(),
            name: "Domestos Lemon".into(),
            image_url: "img".into(),
            category: Category::Unica,
            price: dec!(7.25),
            income: m(5, 50, 600),
            expenses: m(3, 30, 360),
            returns: m(0, 2, 24),
        },
    ]
}

fn run_export(products: &[Product], args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["salesdash", "export", "products"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(products, export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_products_writes_filtered_json() {
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    run_export(
        &catalog(),
        &["--format", "json", "--out", &out_str, "--search", "MAGNUM", "--range", "annual"],
    )
    .unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([
            {
                "id": "a1",
                "barcode": "123",
                "name": "Magnum Classic",
                "category": "Algida",
                "price": "3.5",
                "granularity": "annual",
                "income": 1200,
                "expenses": 720,
                "returns": 60
            }
        ])
    );
}

#[test]
fn export_products_writes_csv_with_header() {
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    run_export(&catalog(), &["--out", &out_str]).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines,
        vec![
            "id,barcode,name,category,price,granularity,income,expenses,returns",
            "a1,123,Magnum Classic,Algida,3.50,monthly,100,60,5",
            "u1,456,Domestos Lemon,UNICA,7.25,monthly,50,30,2",
        ]
    );
}

#[test]
fn export_products_with_no_match_writes_header_only() {
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("empty.csv");
    let out_str = out_path.to_string_lossy().to_string();

    run_export(&catalog(), &["--out", &out_str, "--search", "999"]).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(contents.lines().count(), 1);
}

#[test]
fn export_products_rejects_unknown_format() {
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    assert!(run_export(&catalog(), &["--format", "xml", "--out", &out_str]).is_err());
    assert!(!out_path.exists());
}
