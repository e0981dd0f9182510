// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::DashError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Algida")]
    Algida,
    #[serde(rename = "UNICA")]
    Unica,
}

impl Category {
    /// Fixed display and chart order.
    pub const ALL: [Category; 2] = [Category::Algida, Category::Unica];

    pub fn index(self) -> usize {
        match self {
            Category::Algida => 0,
            Category::Unica => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Algida => "Algida",
            Category::Unica => "UNICA",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "algida" => Ok(Category::Algida),
            "unica" => Ok(Category::Unica),
            _ => Err(DashError::UnknownCategory(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Daily,
    #[default]
    Monthly,
    Annual,
}

impl Granularity {
    pub const ALL: [Granularity; 3] = [
        Granularity::Daily,
        Granularity::Monthly,
        Granularity::Annual,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::Daily => "daily",
            Granularity::Monthly => "monthly",
            Granularity::Annual => "annual",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Granularity::Daily),
            "monthly" => Ok(Granularity::Monthly),
            "annual" => Ok(Granularity::Annual),
            _ => Err(DashError::UnknownGranularity(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Income,
    Expenses,
    Returns,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FinancialMetrics {
    pub daily: u64,
    pub monthly: u64,
    pub annual: u64,
}

impl FinancialMetrics {
    pub fn get(&self, g: Granularity) -> u64 {
        match g {
            Granularity::Daily => self.daily,
            Granularity::Monthly => self.monthly,
            Granularity::Annual => self.annual,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub barcode: String,
    pub name: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub category: Category,
    pub price: Decimal,
    pub income: FinancialMetrics,
    pub expenses: FinancialMetrics,
    pub returns: FinancialMetrics,
}

impl Product {
    pub fn metrics(&self, m: Metric) -> &FinancialMetrics {
        match m {
            Metric::Income => &self.income,
            Metric::Expenses => &self.expenses,
            Metric::Returns => &self.returns,
        }
    }

    pub fn metric(&self, m: Metric, g: Granularity) -> u64 {
        self.metrics(m).get(g)
    }
}
