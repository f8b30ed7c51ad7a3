// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashSet;

use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

use crate::models::{Kind, Snapshot};
use crate::store;
use crate::utils::pretty_table;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub code: &'static str,
    pub detail: String,
}

/// References by name that no category backs.
pub fn find_issues(snap: &Snapshot) -> Vec<Issue> {
    let known: HashSet<(&str, Kind)> = snap
        .categories
        .iter()
        .map(|c| (c.name.as_str(), c.kind))
        .collect();
    let mut issues = Vec::new();

    for t in &snap.transactions {
        if known.contains(&(t.category.as_str(), t.kind)) {
            continue;
        }
        let other = match t.kind {
            Kind::Income => Kind::Expense,
            Kind::Expense => Kind::Income,
        };
        let code = if known.contains(&(t.category.as_str(), other)) {
            "txn_category_kind_mismatch"
        } else {
            "txn_unknown_category"
        };
        issues.push(Issue {
            code,
            detail: format!("#{} {} '{}'", t.id, t.kind, t.category),
        });
    }

    for b in &snap.budgets {
        if !known.contains(&(b.category.as_str(), Kind::Expense)) {
            issues.push(Issue {
                code: "budget_unknown_category",
                detail: b.category.clone(),
            });
        }
    }
    issues
}

pub fn handle(conn: &Connection) -> Result<()> {
    let snap = store::snapshot(conn)?;
    let issues = find_issues(&snap);
    if issues.is_empty() {
        println!("doctor: no issues found");
    } else {
        for i in &issues {
            tracing::warn!(code = i.code, detail = %i.detail, "inconsistent reference");
        }
        let rows = issues
            .into_iter()
            .map(|i| vec![i.code.to_string(), i.detail])
            .collect();
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
