// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::DashError;
use crate::models::{Category, Granularity};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Az,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Az => "az",
        }
    }

    pub fn toggled(self) -> Language {
        match self {
            Language::En => Language::Az,
            Language::Az => Language::En,
        }
    }

    pub fn dict(self) -> &'static Translations {
        &TRANSLATIONS[&self]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "az" => Ok(Language::Az),
            _ => Err(DashError::UnknownLanguage(s.to_string())),
        }
    }
}

#[derive(Debug)]
pub struct Translations {
    pub dashboard_title: &'static str,
    pub total_income: &'static str,
    pub total_expenses: &'static str,
    pub total_returns: &'static str,
    pub daily: &'static str,
    pub monthly: &'static str,
    pub annual: &'static str,
    pub product_name: &'static str,
    pub price: &'static str,
    pub income: &'static str,
    pub expenses: &'static str,
    pub returns: &'static str,
    pub category: &'static str,
    pub algida_section: &'static str,
    pub unica_section: &'static str,
    pub switch_language: &'static str,
    pub view_details: &'static str,
    pub currency: &'static str,
    pub overview: &'static str,
    pub products: &'static str,
    pub search_placeholder: &'static str,
    pub barcode: &'static str,
    pub no_products: &'static str,
    pub distribution: &'static str,
}

impl Translations {
    pub fn granularity_label(&self, g: Granularity) -> &'static str {
        match g {
            Granularity::Daily => self.daily,
            Granularity::Monthly => self.monthly,
            Granularity::Annual => self.annual,
        }
    }

    pub fn section_title(&self, c: Category) -> &'static str {
        match c {
            Category::Algida => self.algida_section,
            Category::Unica => self.unica_section,
        }
    }
}

static TRANSLATIONS: Lazy<HashMap<Language, Translations>> = Lazy::new(|| {
    HashMap::from([
        (
            Language::En,
            Translations {
                dashboard_title: "Sales Dashboard",
                total_income: "Total Income",
                total_expenses: "Total Expenses",
                total_returns: "Total Returns",
                daily: "Daily",
                monthly: "Monthly",
                annual: "Annual",
                product_name: "Product",
                price: "Price",
                income: "Income",
                expenses: "Expenses",
                returns: "Returns",
                category: "Category",
                algida_section: "Algida (Ice Creams)",
                unica_section: "UNICA (Cleaning)",
                switch_language: "Azərbaycan dili",
                view_details: "View Details",
                currency: "₼",
                overview: "Financial Overview",
                products: "Product Catalog",
                search_placeholder: "Search by product name or barcode...",
                barcode: "Barcode",
                no_products: "No products",
                distribution: "Distribution",
            },
        ),
        (
            Language::Az,
            Translations {
                dashboard_title: "Satış Paneli",
                total_income: "Ümumi Gəlir",
                total_expenses: "Ümumi Xərclər",
                total_returns: "Ümumi Qaytarılmalar",
                daily: "Günlük",
                monthly: "Aylıq",
                annual: "İllik",
                product_name: "Məhsul",
                price: "Qiymət",
                income: "Gəlir",
                expenses: "Xərclər",
                returns: "Qaytarılmalar",
                category: "Kateqoriya",
                algida_section: "Algida (Dondurmalar)",
                unica_section: "UNICA (Təmizlik Vasitələri)",
                switch_language: "English",
                view_details: "Detallara bax",
                currency: "₼",
                overview: "Maliyyə İcmalı",
                products: "Məhsul Kataloqu",
                search_placeholder: "Məhsul adı və ya barkod ilə axtar...",
                barcode: "Barkod",
                no_products: "Məhsul yoxdur",
                distribution: "Paylanma",
            },
        ),
    ])
});
