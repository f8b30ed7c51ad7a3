// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use super::required;
use crate::utils::{get_currency, pretty_table, set_currency};

pub fn handle(conn: &Connection, db_path: &std::path::Path, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set-currency", sub)) => {
            let label = required(sub, "label")?.trim();
            set_currency(conn, label)?;
            println!("Currency label set to '{}'", label);
        }
        Some(("show", _)) => {
            let ccy = get_currency(conn)?;
            println!(
                "{}",
                pretty_table(
                    &["Setting", "Value"],
                    vec![
                        vec!["database".into(), db_path.display().to_string()],
                        vec!["currency".into(), ccy],
                    ],
                )
            );
        }
        _ => {}
    }
    Ok(())
}
