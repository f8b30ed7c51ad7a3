// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;

use crate::models::{Kind, Transaction};

/// Transactions whose description or category contains `query`
/// (case-insensitive) and whose kind matches `kind`, if given.
/// A blank query matches everything; otherwise the query is matched as
/// typed, surrounding spaces included. Input order is kept.
pub fn filter<'a>(
    transactions: &'a [Transaction],
    query: &str,
    kind: Option<Kind>,
) -> Vec<&'a Transaction> {
    let blank = query.trim().is_empty();
    let needle = query.to_lowercase();
    transactions
        .iter()
        .filter(|t| kind.is_none_or(|k| t.kind == k))
        .filter(|t| {
            blank
                || t.description.to_lowercase().contains(&needle)
                || t.category.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Inclusive date range; either bound may be open.
pub fn within<'a, I>(transactions: I, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Vec<&'a Transaction>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .filter(|t| from.is_none_or(|f| t.occurred_on >= f))
        .filter(|t| to.is_none_or(|u| t.occurred_on <= u))
        .collect()
}
