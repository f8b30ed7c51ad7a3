// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use cashflow::commands::dashboard::{self, selected_month};
use cashflow::engine::Dashboard;
use cashflow::{cli, db, store};
use chrono::NaiveDate;
use rusqlite::Connection;

fn setup() -> Connection {
    let conn = db::open_in_memory().unwrap();
    conn.execute_batch(
        r#"
        INSERT INTO transactions(kind, amount, category, description, occurred_on, recorded_at)
        VALUES ('expense', '50', 'Food', 'Market', '2025-07-30', '2025-07-30 09:00:00+00:00');
        INSERT INTO transactions(kind, amount, category, description, occurred_on, recorded_at)
        VALUES ('expense', '30', 'Transport', 'Train', '2025-08-02', '2025-08-02 09:00:00+00:00');
        INSERT INTO transactions(kind, amount, category, description, occurred_on, recorded_at)
        VALUES ('income', '1000', 'Salary', 'Pay', '2025-08-01', '2025-08-01 08:00:00+00:00');
        INSERT INTO budgets(category, amount) VALUES ('Food', '100');
        "#,
    )
    .unwrap();
    conn
}

fn dashboard_matches(args: &[&str]) -> clap::ArgMatches {
    let matches = cli::build_cli().get_matches_from(args);
    match matches.subcommand() {
        Some(("dashboard", m)) => m.clone(),
        _ => panic!("no dashboard subcommand"),
    }
}

fn aug_10() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 10).unwrap()
}

#[test]
fn month_defaults_to_current() {
    let m = dashboard_matches(&["cashflow", "dashboard"]);
    assert_eq!(selected_month(&m, aug_10()).unwrap(), Some((2025, 8)));

    let m = dashboard_matches(&["cashflow", "dashboard", "--month", "2025-07"]);
    assert_eq!(selected_month(&m, aug_10()).unwrap(), Some((2025, 7)));

    let m = dashboard_matches(&["cashflow", "dashboard", "--all"]);
    assert_eq!(selected_month(&m, aug_10()).unwrap(), None);

    let m = dashboard_matches(&["cashflow", "dashboard", "--month", "July"]);
    assert!(selected_month(&m, aug_10()).is_err());
}

#[test]
fn month_and_all_conflict() {
    let res = cli::build_cli().try_get_matches_from([
        "cashflow", "dashboard", "--all", "--month", "2025-08",
    ]);
    assert!(res.is_err());
}

#[test]
fn json_shape_for_current_month() {
    let conn = setup();
    let m = dashboard_matches(&["cashflow", "dashboard", "--recent", "2", "--json"]);
    dashboard::handle(&conn, &m).unwrap();

    let snap = store::snapshot(&conn).unwrap();
    let dash = Dashboard::compute(&snap, 2, selected_month(&m, aug_10()).unwrap());
    let v = serde_json::to_value(&dash).unwrap();
    assert_eq!(v["income"], "1000");
    assert_eq!(v["expense"], "80");
    assert_eq!(v["balance"], "920");
    assert_eq!(v["month"], "2025-08");
    let dist = v["distribution"].as_array().unwrap();
    assert_eq!(dist.len(), 1);
    assert_eq!(dist[0]["category"], "Transport");
    assert_eq!(v["budgets"][0]["spent"], "50");
    assert_eq!(v["budgets"][0]["over_budget"], false);
    let recent: Vec<&str> = v["recent"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["description"].as_str().unwrap())
        .collect();
    assert_eq!(recent, vec!["Train", "Pay"]);
}

#[test]
fn all_history_distribution() {
    let conn = setup();
    let m = dashboard_matches(&["cashflow", "dashboard", "--all", "--json"]);
    dashboard::handle(&conn, &m).unwrap();

    let snap = store::snapshot(&conn).unwrap();
    let dash = Dashboard::compute(&snap, 5, selected_month(&m, aug_10()).unwrap());
    let names: Vec<&str> = dash.distribution.iter().map(|c| c.category.as_str()).collect();
    assert_eq!(names, vec!["Transport", "Food"]);
    assert!(dash.month.is_none());
}
