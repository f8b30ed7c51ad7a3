// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use cashflow::models::{Kind, Transaction};
use cashflow::search::{filter, within};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

fn tx(id: i64, kind: Kind, category: &str, description: &str, date: &str) -> Transaction {
    Transaction {
        id,
        kind,
        amount: Decimal::ONE,
        category: category.to_string(),
        description: description.to_string(),
        occurred_on: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        recorded_at: Utc::now(),
    }
}

fn sample() -> Vec<Transaction> {
    vec![
        tx(1, Kind::Expense, "Leisure", "Coffee Shop", "2025-01-04"),
        tx(2, Kind::Expense, "Food", "Groceries", "2025-01-03"),
        tx(3, Kind::Income, "Salary", "January pay", "2025-01-02"),
        tx(4, Kind::Expense, "coffee beans", "Market", "2025-01-01"),
    ]
}

fn ids(v: &[&Transaction]) -> Vec<i64> {
    v.iter().map(|t| t.id).collect()
}

#[test]
fn empty_query_without_kind_is_identity() {
    let txs = sample();
    let out = filter(&txs, "", None);
    assert_eq!(ids(&out), vec![1, 2, 3, 4]);
    assert_eq!(ids(&filter(&txs, "   ", None)), vec![1, 2, 3, 4]);
}

#[test]
fn query_matches_description_or_category_case_insensitively() {
    let txs = sample();
    assert_eq!(ids(&filter(&txs, "coffee", None)), vec![1, 4]);
    assert_eq!(ids(&filter(&txs, "FOOD", None)), vec![2]);
    assert!(filter(&txs, "rent", None).is_empty());
}

#[test]
fn coffee_example_returns_only_the_coffee_shop() {
    let txs = vec![
        tx(1, Kind::Expense, "Leisure", "Coffee Shop", "2025-01-02"),
        tx(2, Kind::Expense, "Food", "Groceries", "2025-01-01"),
    ];
    assert_eq!(ids(&filter(&txs, "coffee", None)), vec![1]);
}

#[test]
fn kind_filter_combines_with_query() {
    let txs = sample();
    assert_eq!(ids(&filter(&txs, "", Some(Kind::Income))), vec![3]);
    assert_eq!(ids(&filter(&txs, "coffee", Some(Kind::Income))), Vec::<i64>::new());
    assert_eq!(ids(&filter(&txs, "", Some(Kind::Expense))), vec![1, 2, 4]);
}

#[test]
fn within_is_inclusive_and_keeps_order() {
    let txs = sample();
    let from = NaiveDate::from_ymd_opt(2025, 1, 2);
    let to = NaiveDate::from_ymd_opt(2025, 1, 3);
    assert_eq!(ids(&within(&txs, from, to)), vec![2, 3]);
    assert_eq!(ids(&within(&txs, None, to)), vec![2, 3, 4]);
    assert_eq!(ids(&within(&txs, None, None)), vec![1, 2, 3, 4]);
}

#[test]
fn query_spaces_are_part_of_the_needle() {
    let txs = vec![
        tx(1, Kind::Expense, "Leisure", "Coffee Shop", "2025-01-02"),
        tx(2, Kind::Expense, "Food", "Shop run", "2025-01-01"),
    ];
    assert!(filter(&txs, "shop ", None).is_empty());
    assert_eq!(ids(&filter(&txs, " shop", None)), vec![1]);
    assert_eq!(ids(&filter(&txs, "shop r", None)), vec![2]);
}
