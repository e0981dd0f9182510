// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::i18n::Language;
use anyhow::Result;
use std::path::PathBuf;

/// Process-level options shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub language: Language,
    pub seed: Option<u64>,
    pub catalog: Option<PathBuf>,
}

impl Settings {
    pub fn from_matches(m: &clap::ArgMatches) -> Result<Settings> {
        let language = match m.get_one::<String>("lang") {
            Some(s) => s.parse::<Language>()?,
            None => Language::default(),
        };
        Ok(Settings {
            language,
            seed: m.get_one::<u64>("seed").copied(),
            catalog: m.get_one::<PathBuf>("catalog").cloned(),
        })
    }
}

pub fn log_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}
