// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Category, Granularity};
use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Table};
use rust_decimal::{Decimal, RoundingStrategy};

const COMPACT_UNITS: [(u64, &str); 4] = [
    (1_000, "K"),
    (1_000_000, "M"),
    (1_000_000_000, "B"),
    (1_000_000_000_000, "T"),
];

pub fn parse_granularity(s: &str) -> Result<Granularity> {
    Ok(s.parse::<Granularity>()?)
}

pub fn parse_category(s: &str) -> Result<Category> {
    Ok(s.parse::<Category>()?)
}

/// Short form with at most one fraction digit: 999, 1.5K, 40M, 1.2B.
pub fn fmt_compact(v: u64) -> String {
    if v < 1_000 {
        return v.to_string();
    }
    let scale = |idx: usize| {
        (Decimal::from(v) / Decimal::from(COMPACT_UNITS[idx].0))
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
    };
    let mut idx = COMPACT_UNITS
        .iter()
        .rposition(|(div, _)| v >= *div)
        .unwrap_or(0);
    let mut scaled = scale(idx);
    // 999_960 rounds to 1000.0K; show it as 1M instead.
    if scaled >= Decimal::from(1_000u64) && idx + 1 < COMPACT_UNITS.len() {
        idx += 1;
        scaled = scale(idx);
    }
    format!("{}{}", scaled.normalize(), COMPACT_UNITS[idx].1)
}

pub fn fmt_grouped(v: u64) -> String {
    let digits = v.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn fmt_money(v: u64, symbol: &str) -> String {
    format!("{}{}", symbol, fmt_grouped(v))
}

pub fn fmt_price(price: &Decimal, symbol: &str) -> String {
    format!("{}{:.2}", symbol, price.round_dp(2))
}

/// Share of `value` in `total` as a percentage with one decimal.
pub fn fmt_share_percent(value: u64, total: u64) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    let pct = Decimal::from(value) * Decimal::from(100u64) / Decimal::from(total);
    format!("{:.1}%", pct.round_dp(1))
}

pub fn bar(value: u64, max: u64, width: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let len = (value as u128 * width as u128 / max as u128) as usize;
    "█".repeat(len.min(width))
}

/// Joins rendered lines, each terminated by a newline.
pub fn join_lines(lines: Vec<String>) -> String {
    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for l in lines {
        out.push_str(&l);
        out.push('\n');
    }
    out
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

/// Like [`pretty_table`] with every column from `first_numeric` on
/// right-aligned.
pub fn numeric_table(headers: &[&str], rows: Vec<Vec<String>>, first_numeric: usize) -> Table {
    let mut t = pretty_table(headers, rows);
    for idx in first_numeric..headers.len() {
        if let Some(col) = t.column_mut(idx) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    t
}

/// Pretty JSON for `--json`, one compact object per line for `--jsonl`
/// (an array such as product rows is split into its elements), `None` when
/// neither flag is set.
pub fn render_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<Option<String>> {
    if json_flag {
        return Ok(Some(serde_json::to_string_pretty(v)? + "\n"));
    }
    if !jsonl_flag {
        return Ok(None);
    }
    let val = serde_json::to_value(v)?;
    let items = match val {
        serde_json::Value::Array(items) => items,
        single => vec![single],
    };
    let lines = items
        .iter()
        .map(|item| serde_json::to_string(item))
        .collect::<serde_json::Result<Vec<String>>>()?;
    Ok(Some(join_lines(lines)))
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    match render_json(json_flag, jsonl_flag, v)? {
        Some(text) => {
            print!("{}", text);
            Ok(true)
        }
        None => Ok(false),
    }
}
