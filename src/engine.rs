// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived views over a record snapshot.
//!
//! Everything here is a pure function of its inputs: no I/O, no caching.
//! Callers reload a [`Snapshot`] and recompute whenever the store changes.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Budget, Category, Kind, Snapshot, Transaction};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetProgress {
    pub budget: Budget,
    pub spent: Decimal,
    /// `spent / limit`, clamped to `[0, 1]`.
    pub progress: Decimal,
    /// Set when `spent > limit`; `progress` alone cannot tell.
    pub over_budget: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayGroup<'a> {
    pub date: NaiveDate,
    pub transactions: Vec<&'a Transaction>,
}

pub fn total_by_kind(transactions: &[Transaction], kind: Kind) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

pub fn balance(transactions: &[Transaction]) -> Decimal {
    total_by_kind(transactions, Kind::Income) - total_by_kind(transactions, Kind::Expense)
}

/// Expense totals per category, in order of each category's first appearance.
pub fn expense_by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    sum_expenses(transactions.iter())
}

/// Same as [`expense_by_category`], limited to one calendar month.
pub fn expense_by_category_in_month(
    transactions: &[Transaction],
    year: i32,
    month: u32,
) -> Vec<CategoryTotal> {
    sum_expenses(
        transactions
            .iter()
            .filter(|t| t.occurred_on.year() == year && t.occurred_on.month() == month),
    )
}

fn sum_expenses<'a>(transactions: impl Iterator<Item = &'a Transaction>) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for t in transactions.filter(|t| t.kind == Kind::Expense) {
        match index.get(t.category.as_str()) {
            Some(&i) => totals[i].total += t.amount,
            None => {
                index.insert(t.category.as_str(), totals.len());
                totals.push(CategoryTotal {
                    category: t.category.clone(),
                    total: t.amount,
                });
            }
        }
    }
    totals
}

pub fn budget_progress(budgets: &[Budget], expense_totals: &[CategoryTotal]) -> Vec<BudgetProgress> {
    let spent_by: HashMap<&str, Decimal> = expense_totals
        .iter()
        .map(|c| (c.category.as_str(), c.total))
        .collect();
    budgets
        .iter()
        .map(|b| {
            let spent = spent_by
                .get(b.category.as_str())
                .copied()
                .unwrap_or(Decimal::ZERO);
            let ratio = if b.limit > Decimal::ZERO {
                spent.checked_div(b.limit).unwrap_or(Decimal::ONE)
            } else {
                Decimal::ZERO
            };
            BudgetProgress {
                budget: b.clone(),
                spent,
                progress: ratio.clamp(Decimal::ZERO, Decimal::ONE),
                over_budget: spent > b.limit,
            }
        })
        .collect()
}

/// The `n` most recent transactions, newest first. Ties keep input order.
pub fn recent(transactions: &[Transaction], n: usize) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.occurred_on.cmp(&a.occurred_on));
    sorted.truncate(n);
    sorted
}

/// Buckets transactions by calendar day, newest day first.
pub fn group_by_day(transactions: &[Transaction]) -> Vec<DayGroup<'_>> {
    let mut days: Vec<DayGroup<'_>> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();
    for t in transactions {
        match index.get(&t.occurred_on) {
            Some(&i) => days[i].transactions.push(t),
            None => {
                index.insert(t.occurred_on, days.len());
                days.push(DayGroup {
                    date: t.occurred_on,
                    transactions: vec![t],
                });
            }
        }
    }
    days.sort_by(|a, b| b.date.cmp(&a.date));
    days
}

/// Expense categories that do not have a budget yet.
pub fn available_budget_categories<'a>(
    categories: &'a [Category],
    budgets: &[Budget],
) -> Vec<&'a Category> {
    categories
        .iter()
        .filter(|c| c.kind == Kind::Expense)
        .filter(|c| !budgets.iter().any(|b| b.category == c.name))
        .collect()
}

/// One render's worth of summary data.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard<'a> {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
    pub month: Option<String>,
    pub distribution: Vec<CategoryTotal>,
    pub budgets: Vec<BudgetProgress>,
    pub recent: Vec<&'a Transaction>,
}

impl<'a> Dashboard<'a> {
    /// `month` restricts the category distribution only; totals and budget
    /// progress always cover the full history.
    pub fn compute(snapshot: &'a Snapshot, recent_n: usize, month: Option<(i32, u32)>) -> Self {
        let txs = &snapshot.transactions;
        let income = total_by_kind(txs, Kind::Income);
        let expense = total_by_kind(txs, Kind::Expense);
        let all_expenses = expense_by_category(txs);
        let distribution = match month {
            Some((y, m)) => expense_by_category_in_month(txs, y, m),
            None => all_expenses.clone(),
        };
        Dashboard {
            income,
            expense,
            balance: income - expense,
            month: month.map(|(y, m)| format!("{:04}-{:02}", y, m)),
            distribution,
            budgets: budget_progress(&snapshot.budgets, &all_expenses),
            recent: recent(txs, recent_n),
        }
    }
}
