// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, params};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Kind;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.example", "Cashflow", "cashflow"));

/// Categories every new database starts with.
pub const DEFAULT_CATEGORIES: &[(&str, &str, Kind)] = &[
    ("Food", "fastfood", Kind::Expense),
    ("Transport", "directions_car", Kind::Expense),
    ("Salary", "work", Kind::Income),
    ("Bills", "receipt", Kind::Expense),
    ("Leisure", "sports_esports", Kind::Expense),
    ("Health", "healing", Kind::Expense),
];

/// Resolve the database file. An explicit path wins over the platform data dir.
pub fn db_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(p) = explicit {
        if let Some(parent) = p.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        return Ok(p.to_path_buf());
    }
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("cashflow.sqlite"))
}

pub fn open_or_init(explicit: Option<&Path>) -> Result<Connection> {
    let path = db_path(explicit)?;
    let conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&conn)?;
    tracing::debug!(path = %path.display(), "database ready");
    Ok(conn)
}

pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS categories(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        icon TEXT NOT NULL DEFAULT '',
        kind TEXT NOT NULL CHECK(kind IN ('income','expense')),
        UNIQUE(name, kind)
    );

    -- category is a name, not a foreign key; consistency is checked in store
    CREATE TABLE IF NOT EXISTS transactions(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        kind TEXT NOT NULL CHECK(kind IN ('income','expense')),
        amount TEXT NOT NULL,
        category TEXT NOT NULL,
        description TEXT NOT NULL,
        occurred_on TEXT NOT NULL,
        recorded_at TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_transactions_occurred_on ON transactions(occurred_on);

    CREATE TABLE IF NOT EXISTS budgets(
        category TEXT PRIMARY KEY,
        amount TEXT NOT NULL
    );
    "#,
    )?;
    seed_default_categories(conn)?;
    Ok(())
}

fn seed_default_categories(conn: &Connection) -> Result<()> {
    // Seed once per database, even if the user later removes every category.
    let seeded = conn.execute(
        "INSERT OR IGNORE INTO settings(key, value) VALUES('categories_seeded', '1')",
        [],
    )?;
    if seeded == 0 {
        return Ok(());
    }
    let mut stmt = conn.prepare(
        "INSERT OR IGNORE INTO categories(name, icon, kind) VALUES (?1, ?2, ?3)",
    )?;
    for (name, icon, kind) in DEFAULT_CATEGORIES {
        stmt.execute(params![name, icon, kind])?;
    }
    tracing::info!(count = DEFAULT_CATEGORIES.len(), "seeded default categories");
    Ok(())
}
