// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use rusqlite::Connection;
use serde::Serialize;

use super::required;
use crate::models::{Kind, Transaction};
use crate::store;

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    id: i64,
    date: String,
    kind: Kind,
    category: &'a str,
    description: &'a str,
    amount: String,
    recorded_at: String,
}

impl<'a> From<&'a Transaction> for ExportRow<'a> {
    fn from(t: &'a Transaction) -> Self {
        ExportRow {
            id: t.id,
            date: t.occurred_on.to_string(),
            kind: t.kind,
            category: &t.category,
            description: &t.description,
            amount: t.amount.to_string(),
            recorded_at: t.recorded_at.to_rfc3339(),
        }
    }
}

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(conn, sub),
        _ => Ok(()),
    }
}

fn export_transactions(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = required(sub, "format")?.to_lowercase();
    let out = required(sub, "out")?;

    // Oldest first in files.
    let mut txs = store::list_transactions(conn)?;
    txs.sort_by_key(|t| (t.occurred_on, t.id));
    let rows: Vec<ExportRow<'_>> = txs.iter().map(ExportRow::from).collect();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            if rows.is_empty() {
                wtr.write_record([
                    "id",
                    "date",
                    "kind",
                    "category",
                    "description",
                    "amount",
                    "recorded_at",
                ])?;
            }
            for row in &rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&rows)?)?;
        }
        other => bail!("Unknown format: {} (use csv|json)", other),
    }
    tracing::info!(count = rows.len(), format = %fmt, out, "exported transactions");
    println!("Exported {} transactions to {}", rows.len(), out);
    Ok(())
}
