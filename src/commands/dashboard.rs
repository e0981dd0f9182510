// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::i18n::Language;
use crate::models::{Granularity, Product};
use crate::pipeline::DashboardView;
use crate::utils::join_lines;
use anyhow::Result;

pub fn handle(products: &[Product], settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let view = super::view_for(products, sub)?;
    print!("{}", render(&view, settings.language, [true; 2]));
    Ok(())
}

pub fn render(view: &DashboardView, lang: Language, expanded: [bool; 2]) -> String {
    let t = lang.dict();
    let search = if view.query.is_empty() {
        t.search_placeholder
    } else {
        view.query.as_str()
    };
    let toggles: Vec<String> = Granularity::ALL
        .iter()
        .map(|g| {
            let label = t.granularity_label(*g);
            if *g == view.granularity {
                format!("[{}]", label)
            } else {
                format!(" {} ", label)
            }
        })
        .collect();

    let mut out = join_lines(vec![
        format!("[ST] SafeTrade    ⟳ {} (--lang {})", t.switch_language, lang.toggled()),
        String::new(),
        t.dashboard_title.to_string(),
        format!("🔍 {}", search),
        toggles.join(" "),
        String::new(),
    ]);
    out.push_str(&super::overview::render(view, lang));
    out.push('\n');
    out.push_str(&super::products::render(view, lang, expanded));
    out
}
