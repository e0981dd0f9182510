// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Search filter and metric aggregation over a fixed product catalog.
//!
//! Every function here is pure: the same `(products, query, granularity)`
//! always yields the same output. [`Session`] layers the transient UI state
//! on top and caches the last derived view.

use crate::i18n::Language;
use crate::models::{Category, Granularity, Metric, Product};
use serde::Serialize;
use std::iter::Sum;
use std::ops::Add;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Totals {
    pub income: u64,
    pub expenses: u64,
    pub returns: u64,
}

impl Totals {
    fn of(p: &Product, g: Granularity) -> Totals {
        Totals {
            income: p.metric(Metric::Income, g),
            expenses: p.metric(Metric::Expenses, g),
            returns: p.metric(Metric::Returns, g),
        }
    }
}

impl Add for Totals {
    type Output = Totals;

    fn add(self, rhs: Totals) -> Totals {
        Totals {
            income: self.income.saturating_add(rhs.income),
            expenses: self.expenses.saturating_add(rhs.expenses),
            returns: self.returns.saturating_add(rhs.returns),
        }
    }
}

impl Sum for Totals {
    fn sum<I: Iterator<Item = Totals>>(iter: I) -> Totals {
        iter.fold(Totals::default(), Add::add)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategorySeries {
    pub category: Category,
    pub income: u64,
    pub expenses: u64,
    pub returns: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShareSlice {
    pub category: Category,
    pub value: u64,
}

/// Products whose name contains `query` (case-insensitive) or whose barcode
/// contains it. An empty query keeps everything.
pub fn filter(products: &[Product], query: &str) -> Vec<Product> {
    let q = query.to_lowercase();
    if q.is_empty() {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&q) || p.barcode.contains(&q))
        .cloned()
        .collect()
}

pub fn aggregate_totals(products: &[Product], g: Granularity) -> Totals {
    products.iter().map(|p| Totals::of(p, g)).sum()
}

/// Per-category sums in `[Algida, Unica]` order. A category with no
/// products still gets a zeroed entry.
pub fn aggregate_by_category(products: &[Product], g: Granularity) -> [CategorySeries; 2] {
    let mut sums = [Totals::default(); 2];
    for p in products {
        let slot = &mut sums[p.category.index()];
        *slot = *slot + Totals::of(p, g);
    }
    Category::ALL.map(|c| {
        let t = sums[c.index()];
        CategorySeries {
            category: c,
            income: t.income,
            expenses: t.expenses,
            returns: t.returns,
        }
    })
}

/// Raw income magnitudes per category; callers normalize if they need to.
pub fn income_share(series: &[CategorySeries; 2]) -> [ShareSlice; 2] {
    series.map(|s| ShareSlice {
        category: s.category,
        value: s.income,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub query: String,
    pub granularity: Granularity,
    pub products: Vec<Product>,
    pub totals: Totals,
    pub by_category: [CategorySeries; 2],
    pub income_share: [ShareSlice; 2],
}

impl DashboardView {
    pub fn compute(products: &[Product], query: &str, g: Granularity) -> DashboardView {
        let filtered = filter(products, query);
        let totals = aggregate_totals(&filtered, g);
        let by_category = aggregate_by_category(&filtered, g);
        let income_share = income_share(&by_category);
        DashboardView {
            query: query.to_string(),
            granularity: g,
            products: filtered,
            totals,
            by_category,
            income_share,
        }
    }

    pub fn products_in(&self, c: Category) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.category == c)
    }
}

/// One dashboard session: the catalog plus the transient UI state cells.
pub struct Session {
    catalog: Vec<Product>,
    query: String,
    granularity: Granularity,
    language: Language,
    expanded: [bool; 2],
    cached: Option<DashboardView>,
    recomputations: usize,
}

impl Session {
    pub fn new(catalog: Vec<Product>) -> Session {
        Session {
            catalog,
            query: String::new(),
            granularity: Granularity::default(),
            language: Language::default(),
            expanded: [true; 2],
            cached: None,
            recomputations: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, q: impl Into<String>) {
        self.query = q.into();
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn set_granularity(&mut self, g: Granularity) {
        self.granularity = g;
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, lang: Language) {
        self.language = lang;
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }

    pub fn is_expanded(&self, c: Category) -> bool {
        self.expanded[c.index()]
    }

    pub fn toggle_section(&mut self, c: Category) {
        let flag = &mut self.expanded[c.index()];
        *flag = !*flag;
    }

    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    /// Derived view for the current query and granularity, recomputed only
    /// when one of them changed since the last call.
    pub fn view(&mut self) -> &DashboardView {
        let fresh = matches!(
            &self.cached,
            Some(v) if v.query == self.query && v.granularity == self.granularity
        );
        if !fresh {
            self.recomputations += 1;
            debug!(
                query = %self.query,
                granularity = %self.granularity,
                n = self.recomputations,
                "recomputing dashboard view"
            );
            self.cached = None;
        }
        let (catalog, query, g) = (&self.catalog, &self.query, self.granularity);
        self.cached
            .get_or_insert_with(|| DashboardView::compute(catalog, query, g))
    }
}
