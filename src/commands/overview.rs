// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::i18n::Language;
use crate::models::{Granularity, Product};
use crate::pipeline::{CategorySeries, DashboardView, ShareSlice, Totals};
use crate::utils::{
    bar, fmt_compact, fmt_share_percent, join_lines, maybe_print_json, numeric_table, pretty_table,
};
use anyhow::Result;
use serde::Serialize;

const BAR_WIDTH: usize = 40;

#[derive(Debug, Serialize)]
pub struct OverviewReport {
    pub granularity: Granularity,
    pub query: String,
    pub matched: usize,
    pub totals: Totals,
    pub by_category: [CategorySeries; 2],
    pub income_share: [ShareSlice; 2],
}

impl OverviewReport {
    pub fn from_view(view: &DashboardView) -> OverviewReport {
        OverviewReport {
            granularity: view.granularity,
            query: view.query.clone(),
            matched: view.products.len(),
            totals: view.totals,
            by_category: view.by_category,
            income_share: view.income_share,
        }
    }
}

pub fn handle(products: &[Product], settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let view = super::view_for(products, sub)?;
    let report = OverviewReport::from_view(&view);
    if !maybe_print_json(json_flag, jsonl_flag, &report)? {
        print!("{}", render(&view, settings.language));
    }
    Ok(())
}

/// Stats cards, the income/expenses bar chart and the income distribution.
pub fn render(view: &DashboardView, lang: Language) -> String {
    let t = lang.dict();
    let mut lines = Vec::new();

    lines.push(format!("{} ({})", t.overview, t.granularity_label(view.granularity)));
    let cards = pretty_table(
        &[t.total_income, t.total_expenses, t.total_returns],
        vec![vec![
            format!("{}{}", t.currency, fmt_compact(view.totals.income)),
            format!("{}{}", t.currency, fmt_compact(view.totals.expenses)),
            format!("{}{}", t.currency, fmt_compact(view.totals.returns)),
        ]],
    );
    lines.push(cards.to_string());

    lines.push(String::new());
    lines.push(format!("{} vs {}", t.income, t.expenses));
    let max = view
        .by_category
        .iter()
        .flat_map(|s| [s.income, s.expenses])
        .max()
        .unwrap_or(0);
    let label_w = [t.income, t.expenses]
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);
    for s in &view.by_category {
        lines.push(s.category.to_string());
        for (label, value) in [(t.income, s.income), (t.expenses, s.expenses)] {
            let pad = label_w - label.chars().count();
            lines.push(format!(
                "  {}{} │{} {}{}",
                label,
                " ".repeat(pad),
                bar(value, max, BAR_WIDTH),
                t.currency,
                fmt_compact(value)
            ));
        }
    }

    lines.push(String::new());
    lines.push(t.distribution.to_string());
    let total_income: u64 = view.income_share.iter().map(|s| s.value).sum();
    let rows = view
        .income_share
        .iter()
        .map(|s| {
            vec![
                s.category.to_string(),
                format!("{}{}", t.currency, fmt_compact(s.value)),
                fmt_share_percent(s.value, total_income),
            ]
        })
        .collect();
    lines.push(numeric_table(&[t.category, t.income, "%"], rows, 1).to_string());
    join_lines(lines)
}
