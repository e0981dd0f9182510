// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::error::DashError;
use crate::models::{Category, FinancialMetrics, Product};
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

const ALGIDA_COUNT: usize = 60;
const UNICA_COUNT: usize = 50;
const ALGIDA_START_ID: u64 = 1000;
const UNICA_START_ID: u64 = 2000;
const ALGIDA_BASE_BARCODE: u64 = 869_063_701_000;
const UNICA_BASE_BARCODE: u64 = 400_063_702_000;

const ICE_CREAM_IMG: &str = "https://placehold.co/100x100/e5e7eb/dc2626?text=Ice+Cream";
const CLEANING_IMG: &str = "https://placehold.co/100x100/e5e7eb/2563eb?text=Clean";

const ALGIDA_BASES: [&str; 15] = [
    "Magnum",
    "Cornetto",
    "Twister",
    "Solero",
    "Carte D'Or",
    "Viennetta",
    "Maxibon",
    "Calippo",
    "Feast",
    "Nogger",
    "Fruttare",
    "Paddle Pop",
    "Swedish Glace",
    "Ben & Jerry's",
    "Wall's",
];

const UNICA_BASES: [&str; 15] = [
    "Domestos",
    "Cif Cream",
    "Sunlight",
    "Omo Powder",
    "Comfort",
    "Glorix",
    "Handy Andy",
    "Glass Cleaner",
    "Toilet Duck",
    "Degreaser",
    "Air Freshener",
    "Scrubber",
    "Dish Gel",
    "Floor Shine",
    "Surface Spray",
];

const FLAVORS: [&str; 10] = [
    "Vanilla",
    "Chocolate",
    "Strawberry",
    "Caramel",
    "Almond",
    "Cookie",
    "Berry",
    "Mint",
    "Lemon",
    "Hazelnut",
];

const SCENTS: [&str; 10] = [
    "Lemon", "Lavender", "Pine", "Ocean", "Rose", "Spring", "Citrus", "Apple", "Fresh", "Original",
];

struct Line {
    category: Category,
    count: usize,
    start_id: u64,
    base_barcode: u64,
    bases: &'static [&'static str],
    variants: &'static [&'static str],
    image: &'static str,
}

const LINES: [Line; 2] = [
    Line {
        category: Category::Algida,
        count: ALGIDA_COUNT,
        start_id: ALGIDA_START_ID,
        base_barcode: ALGIDA_BASE_BARCODE,
        bases: &ALGIDA_BASES,
        variants: &FLAVORS,
        image: ICE_CREAM_IMG,
    },
    Line {
        category: Category::Unica,
        count: UNICA_COUNT,
        start_id: UNICA_START_ID,
        base_barcode: UNICA_BASE_BARCODE,
        bases: &UNICA_BASES,
        variants: &SCENTS,
        image: CLEANING_IMG,
    },
];

// Base 100 is roughly 1M daily, 30M monthly.
fn metrics<R: Rng + ?Sized>(rng: &mut R, base: f64) -> FinancialMetrics {
    let mut jitter = || 0.8 + rng.gen_range(0.0..0.4);
    FinancialMetrics {
        daily: (base * 10_000.0 * jitter()) as u64,
        monthly: (base * 30.0 * 10_000.0 * jitter()) as u64,
        annual: (base * 365.0 * 10_000.0 * jitter()) as u64,
    }
}

fn id_prefix(c: Category) -> char {
    match c {
        Category::Algida => 'a',
        Category::Unica => 'u',
    }
}

fn generate_line<R: Rng + ?Sized>(rng: &mut R, line: &Line) -> Vec<Product> {
    let n_bases = line.bases.len();
    (0..line.count)
        .map(|i| {
            let base_name = line.bases[i % n_bases];
            let variant = line.variants[(i + i / n_bases) % line.variants.len()];
            let cents: i64 = rng.gen_range(100..=1100);
            let income_base: f64 = rng.gen_range(50.0..250.0);
            Product {
                id: format!("{}{}", id_prefix(line.category), line.start_id + i as u64),
                barcode: (line.base_barcode + i as u64).to_string(),
                name: format!("{} {}", base_name, variant),
                image_url: line.image.to_string(),
                category: line.category,
                price: Decimal::new(cents, 2),
                income: metrics(&mut *rng, income_base),
                expenses: metrics(&mut *rng, income_base * 0.6),
                returns: metrics(&mut *rng, income_base * 0.05),
            }
        })
        .collect()
}

/// Full mock catalog: every ALGIDA product followed by every UNICA product.
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Vec<Product> {
    LINES
        .iter()
        .flat_map(|line| generate_line(&mut *rng, line))
        .collect()
}

pub fn generate_seeded(seed: Option<u64>) -> Vec<Product> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    generate(&mut rng)
}

pub fn load_json(path: &Path) -> Result<Vec<Product>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Read catalog {}", path.display()))?;
    let products: Vec<Product> = serde_json::from_str(&raw)
        .with_context(|| format!("Parse catalog {}", path.display()))?;
    Ok(products)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogIssue {
    pub kind: &'static str,
    pub detail: String,
}

pub fn validate(products: &[Product]) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();
    let mut ids = HashSet::new();
    let mut barcodes = HashSet::new();
    for p in products {
        if p.price <= Decimal::ZERO {
            issues.push(CatalogIssue {
                kind: "non_positive_price",
                detail: format!("{} ({})", p.id, p.price),
            });
        }
        if !ids.insert(p.id.as_str()) {
            issues.push(CatalogIssue {
                kind: "duplicate_id",
                detail: p.id.clone(),
            });
        }
        if p.barcode.is_empty() || !p.barcode.bytes().all(|b| b.is_ascii_digit()) {
            issues.push(CatalogIssue {
                kind: "non_numeric_barcode",
                detail: format!("{} ({})", p.id, p.barcode),
            });
        }
        if !barcodes.insert(p.barcode.as_str()) {
            issues.push(CatalogIssue {
                kind: "duplicate_barcode",
                detail: format!("{} ({})", p.id, p.barcode),
            });
        }
    }
    issues
}

/// Reads the configured catalog file or generates one, without validating.
pub fn load_unchecked(settings: &Settings) -> Result<Vec<Product>> {
    let products = match &settings.catalog {
        Some(path) => load_json(path)?,
        None => generate_seeded(settings.seed),
    };
    let source = settings
        .catalog
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "generated".into());
    info!(products = products.len(), source = %source, "catalog loaded");
    Ok(products)
}

pub fn load(settings: &Settings) -> Result<Vec<Product>> {
    let products = load_unchecked(settings)?;
    let issues = validate(&products);
    if let Some(first) = issues.first() {
        warn!(issues = issues.len(), "catalog failed validation");
        return Err(DashError::InvalidCatalog {
            count: issues.len(),
            first: format!("{}: {}", first.kind, first.detail),
        }
        .into());
    }
    Ok(products)
}
