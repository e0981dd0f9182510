// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashError {
    #[error("Unknown category '{0}' (use algida|unica)")]
    UnknownCategory(String),
    #[error("Unknown time range '{0}' (use daily|monthly|annual)")]
    UnknownGranularity(String),
    #[error("Unknown language '{0}' (use en|az)")]
    UnknownLanguage(String),
    #[error("Unknown format: {0} (use csv|json)")]
    UnknownFormat(String),
    #[error("Catalog failed validation with {count} issue(s); first: {first}")]
    InvalidCatalog { count: usize, first: String },
}
