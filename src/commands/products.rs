// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::i18n::Language;
use crate::models::{Category, Granularity, Metric, Product};
use crate::pipeline::DashboardView;
use crate::utils::{
    fmt_money, fmt_price, join_lines, maybe_print_json, numeric_table, parse_category,
};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

/// One product with its metrics for a single time range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRow {
    pub id: String,
    pub barcode: String,
    pub name: String,
    pub category: Category,
    pub price: Decimal,
    pub granularity: Granularity,
    pub income: u64,
    pub expenses: u64,
    pub returns: u64,
}

impl ProductRow {
    pub fn new(p: &Product, g: Granularity) -> ProductRow {
        ProductRow {
            id: p.id.clone(),
            barcode: p.barcode.clone(),
            name: p.name.clone(),
            category: p.category,
            price: p.price,
            granularity: g,
            income: p.metric(Metric::Income, g),
            expenses: p.metric(Metric::Expenses, g),
            returns: p.metric(Metric::Returns, g),
        }
    }
}

pub fn query_rows(view: &DashboardView) -> Vec<ProductRow> {
    view.products
        .iter()
        .map(|p| ProductRow::new(p, view.granularity))
        .collect()
}

pub fn handle(products: &[Product], settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let view = super::view_for(products, sub)?;
    let mut expanded = [true; 2];
    if let Some(cats) = sub.get_many::<String>("collapse") {
        for c in cats {
            expanded[parse_category(c)?.index()] = false;
        }
    }
    let data = query_rows(&view);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        print!("{}", render(&view, settings.language, expanded));
    }
    Ok(())
}

/// Catalog sections in category order; a collapsed section shows only its
/// header.
pub fn render(view: &DashboardView, lang: Language, expanded: [bool; 2]) -> String {
    let t = lang.dict();
    let mut lines = vec![t.products.to_string()];
    for c in Category::ALL {
        let items: Vec<&Product> = view.products_in(c).collect();
        let open = expanded[c.index()];
        let marker = if open { "▾" } else { "▸" };
        lines.push(format!("{} {} ({})", marker, t.section_title(c), items.len()));
        if !open {
            continue;
        }
        if items.is_empty() {
            lines.push(format!("  {}", t.no_products));
            continue;
        }
        let rows = items
            .iter()
            .map(|p| {
                let g = view.granularity;
                vec![
                    p.barcode.clone(),
                    p.name.clone(),
                    fmt_price(&p.price, t.currency),
                    fmt_money(p.metric(Metric::Income, g), t.currency),
                    fmt_money(p.metric(Metric::Expenses, g), t.currency),
                    fmt_money(p.metric(Metric::Returns, g), t.currency),
                ]
            })
            .collect();
        let table = numeric_table(
            &[t.barcode, t.product_name, t.price, t.income, t.expenses, t.returns],
            rows,
            2,
        );
        lines.push(table.to_string());
    }
    join_lines(lines)
}
