// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

use crate::models::Kind;

/// Rejected user input. Raised before any record is built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Amount is required")]
    BlankAmount,
    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),
    #[error("Amount must not be negative")]
    NegativeAmount,
    #[error("Category is required")]
    BlankCategory,
    #[error("Description is required")]
    BlankDescription,
    #[error("Invalid kind '{0}', expected income|expense")]
    InvalidKind(String),
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Budget limit must be greater than zero")]
    NonPositiveLimit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Transaction {0} not found")]
    TransactionNotFound(i64),
    #[error("Category '{name}' ({kind}) not found")]
    CategoryNotFound { name: String, kind: Kind },
    #[error("Category '{name}' ({kind}) already exists")]
    CategoryExists { name: String, kind: Kind },
    #[error("Category '{0}' is still referenced by transactions or a budget")]
    CategoryInUse(String),
    #[error("No budget for category '{0}'")]
    BudgetNotFound(String),
    #[error("Budgets can only be set on expense categories, '{0}' is not one")]
    BudgetOnNonExpense(String),
    #[error("Stored amount '{0}' is not a decimal")]
    CorruptAmount(String),
}
