// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Typed access to the SQLite record store.
//!
//! Categories are referenced by name, not by foreign key. The checks that
//! keep names consistent live here: transactions need a category of the
//! same kind, budgets need an expense category, a category cannot be
//! removed while anything still names it, and renaming a category renames
//! its references with it.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};
use rust_decimal::Decimal;

use crate::error::StoreError;
use crate::models::{Budget, Category, Kind, NewTransaction, Snapshot, Transaction};

fn decimal_from(s: String) -> Result<Decimal, StoreError> {
    s.parse::<Decimal>().map_err(|_| StoreError::CorruptAmount(s))
}

const TX_COLUMNS: &str = "id, kind, amount, category, description, occurred_on, recorded_at";

fn transaction_from_row(r: &Row<'_>) -> rusqlite::Result<(Transaction, String)> {
    let amount: String = r.get(2)?;
    let tx = Transaction {
        id: r.get(0)?,
        kind: r.get(1)?,
        amount: Decimal::ZERO,
        category: r.get(3)?,
        description: r.get(4)?,
        occurred_on: r.get::<_, NaiveDate>(5)?,
        recorded_at: r.get::<_, DateTime<Utc>>(6)?,
    };
    Ok((tx, amount))
}

fn collect_transactions(
    rows: impl Iterator<Item = rusqlite::Result<(Transaction, String)>>,
) -> Result<Vec<Transaction>> {
    let mut out = Vec::new();
    for row in rows {
        let (mut tx, amount) = row?;
        tx.amount = decimal_from(amount)?;
        out.push(tx);
    }
    Ok(out)
}

// Transactions

pub fn insert_transaction(conn: &Connection, tx: &NewTransaction) -> Result<i64> {
    require_category(conn, &tx.category, tx.kind)?;
    conn.execute(
        "INSERT INTO transactions(kind, amount, category, description, occurred_on, recorded_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            tx.kind,
            tx.amount.to_string(),
            tx.category,
            tx.description,
            tx.occurred_on,
            Utc::now()
        ],
    )?;
    let id = conn.last_insert_rowid();
    tracing::info!(id, kind = %tx.kind, amount = %tx.amount, category = %tx.category, "transaction recorded");
    Ok(id)
}

/// Replaces every user-editable field; `recorded_at` is refreshed.
pub fn update_transaction(conn: &Connection, id: i64, tx: &NewTransaction) -> Result<()> {
    require_category(conn, &tx.category, tx.kind)?;
    let n = conn.execute(
        "UPDATE transactions SET kind=?1, amount=?2, category=?3, description=?4,
         occurred_on=?5, recorded_at=?6 WHERE id=?7",
        params![
            tx.kind,
            tx.amount.to_string(),
            tx.category,
            tx.description,
            tx.occurred_on,
            Utc::now(),
            id
        ],
    )?;
    if n == 0 {
        return Err(StoreError::TransactionNotFound(id).into());
    }
    tracing::info!(id, "transaction updated");
    Ok(())
}

pub fn delete_transaction(conn: &Connection, id: i64) -> Result<()> {
    let n = conn.execute("DELETE FROM transactions WHERE id=?1", params![id])?;
    if n == 0 {
        return Err(StoreError::TransactionNotFound(id).into());
    }
    tracing::info!(id, "transaction deleted");
    Ok(())
}

pub fn get_transaction(conn: &Connection, id: i64) -> Result<Transaction> {
    let row = conn
        .query_row(
            &format!("SELECT {TX_COLUMNS} FROM transactions WHERE id=?1"),
            params![id],
            transaction_from_row,
        )
        .optional()?;
    let (mut tx, amount) = row.ok_or(StoreError::TransactionNotFound(id))?;
    tx.amount = decimal_from(amount)?;
    Ok(tx)
}

/// All transactions, newest day first; same-day rows in insertion order.
pub fn list_transactions(conn: &Connection) -> Result<Vec<Transaction>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {TX_COLUMNS} FROM transactions ORDER BY occurred_on DESC, id ASC"
    ))?;
    let rows = stmt.query_map([], transaction_from_row)?;
    let txs = collect_transactions(rows)?;
    tracing::debug!(count = txs.len(), "loaded transactions");
    Ok(txs)
}

// Categories

pub fn insert_category(conn: &Connection, name: &str, icon: &str, kind: Kind) -> Result<i64> {
    conn.execute(
        "INSERT INTO categories(name, icon, kind) VALUES (?1, ?2, ?3)",
        params![name, icon, kind],
    )?;
    let id = conn.last_insert_rowid();
    tracing::info!(id, name, %kind, "category added");
    Ok(id)
}

pub fn find_category(conn: &Connection, name: &str, kind: Kind) -> Result<Option<Category>> {
    let c = conn
        .query_row(
            "SELECT id, name, icon, kind FROM categories WHERE name=?1 AND kind=?2",
            params![name, kind],
            |r| {
                Ok(Category {
                    id: r.get(0)?,
                    name: r.get(1)?,
                    icon: r.get(2)?,
                    kind: r.get(3)?,
                })
            },
        )
        .optional()?;
    Ok(c)
}

fn require_category(conn: &Connection, name: &str, kind: Kind) -> Result<Category> {
    find_category(conn, name, kind)?.ok_or_else(|| {
        StoreError::CategoryNotFound {
            name: name.to_string(),
            kind,
        }
        .into()
    })
}

pub fn list_categories(conn: &Connection, kind: Option<Kind>) -> Result<Vec<Category>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, icon, kind FROM categories
         WHERE ?1 IS NULL OR kind=?1 ORDER BY kind, name",
    )?;
    let rows = stmt.query_map(params![kind], |r| {
        Ok(Category {
            id: r.get(0)?,
            name: r.get(1)?,
            icon: r.get(2)?,
            kind: r.get(3)?,
        })
    })?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

/// Renames and/or re-icons a category. Transactions of the same kind and,
/// for expense categories, the budget that name it follow the rename in
/// the same SQL transaction.
pub fn update_category(
    conn: &Connection,
    name: &str,
    kind: Kind,
    new_name: Option<&str>,
    icon: Option<&str>,
) -> Result<Category> {
    let current = require_category(conn, name, kind)?;
    let target = new_name.unwrap_or(name);
    if target != name && find_category(conn, target, kind)?.is_some() {
        return Err(StoreError::CategoryExists {
            name: target.to_string(),
            kind,
        }
        .into());
    }
    let icon = icon.unwrap_or(&current.icon);

    let tx = conn.unchecked_transaction()?;
    tx.execute(
        "UPDATE categories SET name=?1, icon=?2 WHERE id=?3",
        params![target, icon, current.id],
    )?;
    let mut moved = 0;
    if target != name {
        moved += tx.execute(
            "UPDATE transactions SET category=?1 WHERE category=?2 AND kind=?3",
            params![target, name, kind],
        )?;
        if kind == Kind::Expense {
            moved += tx.execute(
                "UPDATE budgets SET category=?1 WHERE category=?2",
                params![target, name],
            )?;
        }
    }
    tx.commit()?;
    tracing::info!(name, new_name = target, %kind, moved, "category updated");
    Ok(Category {
        id: current.id,
        name: target.to_string(),
        icon: icon.to_string(),
        kind,
    })
}

/// Refuses while a transaction of that kind or (for expense categories) a
/// budget still names the category.
pub fn delete_category(conn: &Connection, name: &str, kind: Kind) -> Result<()> {
    require_category(conn, name, kind)?;
    let tx_refs: i64 = conn.query_row(
        "SELECT COUNT(*) FROM transactions WHERE category=?1 AND kind=?2",
        params![name, kind],
        |r| r.get(0),
    )?;
    let budget_refs: i64 = if kind == Kind::Expense {
        conn.query_row(
            "SELECT COUNT(*) FROM budgets WHERE category=?1",
            params![name],
            |r| r.get(0),
        )?
    } else {
        0
    };
    if tx_refs > 0 || budget_refs > 0 {
        tracing::warn!(name, tx_refs, budget_refs, "category delete refused");
        return Err(StoreError::CategoryInUse(name.to_string()).into());
    }
    conn.execute(
        "DELETE FROM categories WHERE name=?1 AND kind=?2",
        params![name, kind],
    )?;
    tracing::info!(name, %kind, "category removed");
    Ok(())
}

// Budgets

/// Insert, or replace the limit of the existing budget for that category.
pub fn upsert_budget(conn: &Connection, budget: &Budget) -> Result<()> {
    if find_category(conn, &budget.category, Kind::Expense)?.is_none() {
        return Err(StoreError::BudgetOnNonExpense(budget.category.clone()).into());
    }
    conn.execute(
        "INSERT INTO budgets(category, amount) VALUES (?1, ?2)
         ON CONFLICT(category) DO UPDATE SET amount=excluded.amount",
        params![budget.category, budget.limit.to_string()],
    )?;
    tracing::info!(category = %budget.category, limit = %budget.limit, "budget set");
    Ok(())
}

pub fn delete_budget(conn: &Connection, category: &str) -> Result<()> {
    let n = conn.execute("DELETE FROM budgets WHERE category=?1", params![category])?;
    if n == 0 {
        return Err(StoreError::BudgetNotFound(category.to_string()).into());
    }
    tracing::info!(category, "budget removed");
    Ok(())
}

pub fn list_budgets(conn: &Connection) -> Result<Vec<Budget>> {
    let mut stmt = conn.prepare("SELECT category, amount FROM budgets ORDER BY category")?;
    let rows = stmt.query_map([], |r| Ok((r.get::<_, String>(0)?, r.get::<_, String>(1)?)))?;
    let mut out = Vec::new();
    for row in rows {
        let (category, amount) = row?;
        out.push(Budget {
            category,
            limit: decimal_from(amount)?,
        });
    }
    Ok(out)
}

pub fn snapshot(conn: &Connection) -> Result<Snapshot> {
    Ok(Snapshot {
        transactions: list_transactions(conn)?,
        categories: list_categories(conn, None)?,
        budgets: list_budgets(conn)?,
    })
}
