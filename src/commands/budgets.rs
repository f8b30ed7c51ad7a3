// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use super::required;
use crate::engine::{available_budget_categories, budget_progress, expense_by_category};
use crate::store;
use crate::utils::{fmt_money, fmt_percent, get_currency, maybe_print_json, pretty_table};
use crate::validation::validate_budget;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => {
            let category = required(sub, "category")?;
            store::delete_budget(conn, category)?;
            println!("Removed budget for '{}'", category);
        }
        Some(("available", _)) => available(conn)?,
        _ => {}
    }
    Ok(())
}

fn set(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let budget = validate_budget(required(sub, "category")?, required(sub, "limit")?)?;
    store::upsert_budget(conn, &budget)?;
    println!("Budget set for {} = {}", budget.category, budget.limit);
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let snap = store::snapshot(conn)?;
    let progress = budget_progress(&snap.budgets, &expense_by_category(&snap.transactions));
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &progress)? {
        return Ok(());
    }
    let ccy = get_currency(conn)?;
    let data = progress
        .iter()
        .map(|p| {
            vec![
                p.budget.category.clone(),
                fmt_money(&p.budget.limit, &ccy),
                fmt_money(&p.spent, &ccy),
                fmt_percent(&p.progress),
                if p.over_budget { "OVER".into() } else { String::new() },
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Category", "Limit", "Spent", "Progress", ""], data)
    );
    Ok(())
}

fn available(conn: &Connection) -> Result<()> {
    let snap = store::snapshot(conn)?;
    let data = available_budget_categories(&snap.categories, &snap.budgets)
        .into_iter()
        .map(|c| vec![c.name.clone()])
        .collect();
    println!("{}", pretty_table(&["Category without budget"], data));
    Ok(())
}
