// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use rusqlite::Connection;

use super::{optional_kind, required};
use crate::engine::group_by_day;
use crate::models::{Kind, NewTransaction, Transaction};
use crate::search::{filter, within};
use crate::store;
use crate::utils::{day_label, fmt_money, get_currency, maybe_print_json, pretty_table};
use crate::validation::{TransactionDraft, parse_day};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("edit", sub)) => edit(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("history", sub)) => history(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn today() -> String {
    Local::now().date_naive().to_string()
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let date = sub.get_one::<String>("date").cloned().unwrap_or_else(today);
    let tx = TransactionDraft {
        kind: required(sub, "kind")?,
        amount: required(sub, "amount")?,
        category: required(sub, "category")?,
        description: required(sub, "description")?,
        date: &date,
    }
    .validate()?;
    let id = store::insert_transaction(conn, &tx)?;
    println!(
        "Recorded {} #{}: {} on {} ({})",
        tx.kind, id, tx.amount, tx.occurred_on, tx.category
    );
    Ok(())
}

/// Fields not given on the command line keep their stored values.
fn edit(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub
        .get_one::<i64>("id")
        .ok_or_else(|| anyhow::anyhow!("Missing --id"))?;
    let current = store::get_transaction(conn, id)?;
    let kind = sub
        .get_one::<String>("kind")
        .cloned()
        .unwrap_or_else(|| current.kind.to_string());
    let amount = sub
        .get_one::<String>("amount")
        .cloned()
        .unwrap_or_else(|| current.amount.to_string());
    let category = sub
        .get_one::<String>("category")
        .cloned()
        .unwrap_or_else(|| current.category.clone());
    let description = sub
        .get_one::<String>("description")
        .cloned()
        .unwrap_or_else(|| current.description.clone());
    let date = sub
        .get_one::<String>("date")
        .cloned()
        .unwrap_or_else(|| current.occurred_on.to_string());

    let tx: NewTransaction = TransactionDraft {
        kind: &kind,
        amount: &amount,
        category: &category,
        description: &description,
        date: &date,
    }
    .validate()?;
    store::update_transaction(conn, id, &tx)?;
    println!("Updated transaction #{}", id);
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub
        .get_one::<i64>("id")
        .ok_or_else(|| anyhow::anyhow!("Missing --id"))?;
    store::delete_transaction(conn, id)?;
    println!("Removed transaction #{}", id);
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let ccy = get_currency(conn)?;
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    t.id.to_string(),
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
            pretty_table(
                &["ID", "Date", "Kind", "Category", "Description", "Amount"],
                rows
            )
        );
    }
    Ok(())
}

/// Newest first, after search, kind, date range and limit are applied.
pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let all = store::list_transactions(conn)?;
    let query = sub
        .get_one::<String>("query")
        .map(String::as_str)
        .unwrap_or("");
    let kind = optional_kind(sub)?;
    let from = sub
        .get_one::<String>("from")
        .map(|s| parse_day(s))
        .transpose()?;
    let to = sub
        .get_one::<String>("to")
        .map(|s| parse_day(s))
        .transpose()?;

    let mut matched = within(filter(&all, query, kind), from, to);
    if let Some(limit) = sub.get_one::<usize>("limit") {
        matched.truncate(*limit);
    }
    Ok(matched.into_iter().cloned().collect())
}

/// Matching transactions bucketed by day, newest day first, each bucket
/// labelled relative to `today`.
pub fn history_groups(
    conn: &Connection,
    sub: &clap::ArgMatches,
    today: NaiveDate,
) -> Result<Vec<(String, Vec<Transaction>)>> {
    let matched = query_rows(conn, sub)?;
    Ok(group_by_day(&matched)
        .into_iter()
        .map(|day| {
            (
                day_label(day.date, today),
                day.transactions.into_iter().cloned().collect(),
            )
        })
        .collect())
}

fn history(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let ccy = get_currency(conn)?;
    for (label, txs) in history_groups(conn, sub, Local::now().date_naive())? {
        println!("{}", label);
        let rows: Vec<Vec<String>> = txs
            .iter()
            .map(|t| {
                let signed = match t.kind {
                    Kind::Income => t.amount,
                    Kind::Expense => -t.amount,
                };
                vec![
                    t.id.to_string(),
                    t.category.clone(),
                    t.description.clone(),
                    fmt_money(&signed, &ccy),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Category", "Description", "Amount"], rows)
        );
    }
    Ok(())
}
