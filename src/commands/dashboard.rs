// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use rusqlite::Connection;

use crate::engine::Dashboard;
use crate::store;
use crate::utils::{fmt_money, fmt_percent, get_currency, maybe_print_json, parse_month, pretty_table};

/// Month for the category distribution: `--month`, else the month of
/// `today`. `--all` means the full history.
pub fn selected_month(m: &clap::ArgMatches, today: NaiveDate) -> Result<Option<(i32, u32)>> {
    if m.get_flag("all") {
        return Ok(None);
    }
    match m.get_one::<String>("month") {
        Some(s) => Ok(Some(parse_month(s)?)),
        None => Ok(Some((today.year(), today.month()))),
    }
}

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let recent_n = m.get_one::<usize>("recent").copied().unwrap_or(5);
    let month = selected_month(m, Local::now().date_naive())?;

    let snap = store::snapshot(conn)?;
    let dash = Dashboard::compute(&snap, recent_n, month);
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &dash)? {
        return Ok(());
    }

    let ccy = get_currency(conn)?;
    println!(
        "{}",
        pretty_table(
            &["Income", "Expense", "Balance"],
            vec![vec![
                fmt_money(&dash.income, &ccy),
                fmt_money(&dash.expense, &ccy),
                fmt_money(&dash.balance, &ccy),
            ]],
        )
    );

    let spent_hdr = match &dash.month {
        Some(m) => format!("Spent ({})", m),
        None => "Spent".to_string(),
    };
    let dist = dash
        .distribution
        .iter()
        .map(|c| vec![c.category.clone(), fmt_money(&c.total, &ccy)])
        .collect();
    println!("{}", pretty_table(&["Category", &spent_hdr], dist));

    if !dash.budgets.is_empty() {
        let rows = dash
            .budgets
            .iter()
            .map(|p| {
                vec![
                    p.budget.category.clone(),
                    format!("{} / {}", fmt_money(&p.spent, &ccy), fmt_money(&p.budget.limit, &ccy)),
                    fmt_percent(&p.progress),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Budget", "Spent / Limit", "Progress"], rows));
    }

    let recent = dash
        .recent
        .iter()
        .map(|t| {
            vec![
                t.occurred_on.to_string(),
                t.kind.to_string(),
                t.category.clone(),
                t.description.clone(),
                fmt_money(&t.amount, &ccy),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Kind", "Category", "Description", "Amount"], recent)
    );
    Ok(())
}
