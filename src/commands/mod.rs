// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod overview;
pub mod products;
pub mod dashboard;
pub mod exporter;
pub mod doctor;
pub mod interactive;

use crate::models::{Granularity, Product};
use crate::pipeline::DashboardView;
use crate::utils::parse_granularity;
use anyhow::Result;

/// Builds the view selected by the `--search` and `--range` args.
pub fn view_for(products: &[Product], sub: &clap::ArgMatches) -> Result<DashboardView> {
    let query = sub
        .get_one::<String>("search")
        .map(String::as_str)
        .unwrap_or("");
    let g = match sub.get_one::<String>("range") {
        Some(r) => parse_granularity(r)?,
        None => Granularity::default(),
    };
    Ok(DashboardView::compute(products, query, g))
}
