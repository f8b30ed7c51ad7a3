// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use super::{optional_kind, required};
use crate::models::Kind;
use crate::store;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = required(sub, "name")?.trim();
            let kind: Kind = required(sub, "kind")?.parse()?;
            let icon = sub.get_one::<String>("icon").map(String::as_str).unwrap_or("");
            if name.is_empty() {
                return Err(crate::error::ValidationError::BlankCategory.into());
            }
            store::insert_category(conn, name, icon, kind)?;
            println!("Added {} category '{}'", kind, name);
        }
        Some(("list", sub)) => {
            let cats = store::list_categories(conn, optional_kind(sub)?)?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &cats)? {
                let data = cats
                    .into_iter()
                    .map(|c| vec![c.name, c.kind.to_string(), c.icon])
                    .collect();
                println!("{}", pretty_table(&["Category", "Kind", "Icon"], data));
            }
        }
        Some(("edit", sub)) => {
            let name = required(sub, "name")?.trim();
            let kind: Kind = required(sub, "kind")?.parse()?;
            let new_name = sub.get_one::<String>("new_name").map(|s| s.trim());
            if new_name.is_some_and(str::is_empty) {
                return Err(crate::error::ValidationError::BlankCategory.into());
            }
            let icon = sub.get_one::<String>("icon").map(String::as_str);
            let updated = store::update_category(conn, name, kind, new_name, icon)?;
            println!("Updated {} category '{}' -> '{}'", kind, name, updated.name);
        }
        Some(("rm", sub)) => {
            let name = required(sub, "name")?.trim();
            let kind: Kind = required(sub, "kind")?.parse()?;
            store::delete_category(conn, name, kind)?;
            println!("Removed {} category '{}'", kind, name);
        }
        _ => {}
    }
    Ok(())
}
