// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::catalog::validate;
use crate::models::Product;
use crate::utils::pretty_table;
use anyhow::Result;

/// `[issue, detail]` rows for every catalog problem, in catalog order.
pub fn issue_rows(products: &[Product]) -> Vec<Vec<String>> {
    validate(products)
        .into_iter()
        .map(|i| vec![i.kind.to_string(), i.detail])
        .collect()
}

pub fn handle(products: &[Product]) -> Result<()> {
    let rows = issue_rows(products);
    if rows.is_empty() {
        println!("✅ doctor: {} products, no issues found", products.len());
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
