// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use cashflow::{cli, commands::transactions, db, store};
use rusqlite::{Connection, params};

fn setup() -> Connection {
    let conn = db::open_in_memory().unwrap();
    let rows = [
        ("expense", "10", "Food", "Coffee Shop", "2025-01-01"),
        ("expense", "20", "Transport", "Bus pass", "2025-01-02"),
        ("income", "1000", "Salary", "January pay", "2025-01-03"),
    ];
    for (kind, amount, category, description, date) in rows {
        conn.execute(
            "INSERT INTO transactions(kind, amount, category, description, occurred_on, recorded_at)
             VALUES (?1, ?2, ?3, ?4, ?5, '2025-01-05 10:00:00+00:00')",
            params![kind, amount, category, description, date],
        )
        .unwrap();
    }
    conn
}

fn run(conn: &Connection, args: &[&str]) -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches_from(args);
    match matches.subcommand() {
        Some(("tx", tx_m)) => transactions::handle(conn, tx_m),
        _ => panic!("no tx subcommand"),
    }
}

fn list_rows(conn: &Connection, args: &[&str]) -> Vec<cashflow::models::Transaction> {
    let matches = cli::build_cli().get_matches_from(args);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            transactions::query_rows(conn, list_m).unwrap()
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn list_limit_respected() {
    let conn = setup();
    let rows = list_rows(&conn, &["cashflow", "tx", "list", "--limit", "2"]);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].occurred_on.to_string(), "2025-01-03");
}

#[test]
fn list_applies_query_kind_and_range() {
    let conn = setup();
    let rows = list_rows(&conn, &["cashflow", "tx", "list", "-q", "COFFEE"]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].description, "Coffee Shop");

    let rows = list_rows(&conn, &["cashflow", "tx", "list", "--kind", "expense"]);
    assert_eq!(rows.len(), 2);

    let rows = list_rows(
        &conn,
        &["cashflow", "tx", "list", "--from", "2025-01-02", "--to", "2025-01-02"],
    );
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].category, "Transport");
}

#[test]
fn list_rejects_bad_kind() {
    let conn = setup();
    let matches = cli::build_cli().get_matches_from(["cashflow", "tx", "list", "--kind", "gift"]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("list", list_m)) = tx_m.subcommand() else {
        panic!("no list subcommand");
    };
    assert!(transactions::query_rows(&conn, list_m).is_err());
}

#[test]
fn add_validates_and_stores() {
    let conn = setup();
    run(
        &conn,
        &[
            "cashflow", "tx", "add", "--kind", "expense", "--amount", "4.20", "--category",
            "Food", "--description", "Bagel", "--date", "2025-01-04",
        ],
    )
    .unwrap();
    let newest = &store::list_transactions(&conn).unwrap()[0];
    assert_eq!(newest.description, "Bagel");
    assert_eq!(newest.amount.to_string(), "4.20");

    let err = run(
        &conn,
        &[
            "cashflow", "tx", "add", "--kind", "expense", "--amount", "abc", "--category",
            "Food", "--description", "Bagel",
        ],
    )
    .unwrap_err();
    assert!(err.to_string().contains("Invalid amount"));
    assert_eq!(store::list_transactions(&conn).unwrap().len(), 4);
}

#[test]
fn edit_keeps_unspecified_fields() {
    let conn = setup();
    run(&conn, &["cashflow", "tx", "edit", "--id", "2", "--amount", "25"]).unwrap();
    let t = store::get_transaction(&conn, 2).unwrap();
    assert_eq!(t.amount.to_string(), "25");
    assert_eq!(t.description, "Bus pass");
    assert_eq!(t.category, "Transport");

    run(&conn, &["cashflow", "tx", "rm", "--id", "2"]).unwrap();
    assert!(run(&conn, &["cashflow", "tx", "rm", "--id", "2"]).is_err());
}

#[test]
fn history_groups_by_labelled_day() {
    let conn = setup();
    conn.execute(
        "INSERT INTO transactions(kind, amount, category, description, occurred_on, recorded_at)
         VALUES ('expense', '3', 'Food', 'Coffee refill', '2025-01-03', '2025-01-05 10:00:00+00:00')",
        [],
    )
    .unwrap();
    run(&conn, &["cashflow", "tx", "history"]).unwrap();

    let matches = cli::build_cli().get_matches_from(["cashflow", "tx", "history", "-q", "coffee"]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("history", hist_m)) = tx_m.subcommand() else {
        panic!("no history subcommand");
    };
    let today = chrono::NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
    let groups = transactions::history_groups(&conn, hist_m, today).unwrap();
    let labels: Vec<&str> = groups.iter().map(|(l, _)| l.as_str()).collect();
    assert_eq!(labels, vec!["Today", "01 January, 2025"]);
    assert_eq!(groups[0].1.len(), 1);
    assert_eq!(groups[0].1[0].description, "Coffee refill");
    assert_eq!(groups[1].1[0].description, "Coffee Shop");

    let matches = cli::build_cli().get_matches_from(["cashflow", "tx", "history"]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("history", hist_m)) = tx_m.subcommand() else {
        panic!("no history subcommand");
    };
    let groups = transactions::history_groups(&conn, hist_m, today).unwrap();
    let labels: Vec<&str> = groups.iter().map(|(l, _)| l.as_str()).collect();
    assert_eq!(labels, vec!["Today", "Yesterday", "01 January, 2025"]);
    let today_ids: Vec<i64> = groups[0].1.iter().map(|t| t.id).collect();
    assert_eq!(today_ids, vec![3, 4]);
}
