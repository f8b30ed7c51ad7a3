// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod budgets;
pub mod categories;
pub mod config;
pub mod dashboard;
pub mod doctor;
pub mod exporter;
pub mod transactions;

use anyhow::{Result, anyhow};

use crate::models::Kind;

/// A string argument clap was told is required.
pub(crate) fn required<'a>(m: &'a clap::ArgMatches, name: &str) -> Result<&'a str> {
    m.get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("Missing --{}", name))
}

pub(crate) fn optional_kind(m: &clap::ArgMatches) -> Result<Option<Kind>> {
    Ok(m.get_one::<String>("kind").map(|s| s.parse::<Kind>()).transpose()?)
}
