// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::products::query_rows;
use crate::error::DashError;
use crate::models::Product;
use anyhow::{Context, Result};
use tracing::info;

pub fn handle(products: &[Product], m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("products", sub)) => export_products(products, sub),
        _ => Ok(()),
    }
}

fn export_products(products: &[Product], sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    if fmt != "csv" && fmt != "json" {
        return Err(DashError::UnknownFormat(fmt).into());
    }

    let view = super::view_for(products, sub)?;
    let rows = query_rows(&view);

    match fmt.as_str() {
        "csv" => {
            let mut wtr =
                csv::Writer::from_path(out).with_context(|| format!("Create {}", out))?;
            wtr.write_record([
                "id",
                "barcode",
                "name",
                "category",
                "price",
                "granularity",
                "income",
                "expenses",
                "returns",
            ])?;
            for r in &rows {
                wtr.write_record([
                    r.id.clone(),
                    r.barcode.clone(),
                    r.name.clone(),
                    r.category.to_string(),
                    format!("{:.2}", r.price),
                    r.granularity.to_string(),
                    r.income.to_string(),
                    r.expenses.to_string(),
                    r.returns.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        _ => {
            std::fs::write(out, serde_json::to_string_pretty(&rows)?)
                .with_context(|| format!("Write {}", out))?;
        }
    }
    info!(rows = rows.len(), format = %fmt, out = %out, "export finished");
    println!("Exported {} products to {}", rows.len(), out);
    Ok(())
}
