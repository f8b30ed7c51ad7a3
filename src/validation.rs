// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Input boundary. Raw form values become records here or get rejected;
//! nothing past this point ever sees an unparsed amount.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::models::{Budget, Kind, NewTransaction};

/// Raw, user-entered transaction fields.
#[derive(Debug, Clone, Default)]
pub struct TransactionDraft<'a> {
    pub kind: &'a str,
    pub amount: &'a str,
    pub category: &'a str,
    pub description: &'a str,
    pub date: &'a str,
}

pub fn parse_amount(raw: &str) -> Result<Decimal, ValidationError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(ValidationError::BlankAmount);
    }
    let amount = s
        .parse::<Decimal>()
        .map_err(|_| ValidationError::InvalidAmount(s.to_string()))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ValidationError::NegativeAmount);
    }
    Ok(amount)
}

pub fn parse_day(raw: &str) -> Result<NaiveDate, ValidationError> {
    let s = raw.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate(s.to_string()))
}

fn required(raw: &str, err: ValidationError) -> Result<String, ValidationError> {
    let s = raw.trim();
    if s.is_empty() {
        Err(err)
    } else {
        Ok(s.to_string())
    }
}

impl TransactionDraft<'_> {
    pub fn validate(&self) -> Result<NewTransaction, ValidationError> {
        let kind: Kind = self.kind.parse()?;
        let amount = parse_amount(self.amount)?;
        let category = required(self.category, ValidationError::BlankCategory)?;
        let description = required(self.description, ValidationError::BlankDescription)?;
        let occurred_on = parse_day(self.date)?;
        Ok(NewTransaction {
            kind,
            amount,
            category,
            description,
            occurred_on,
        })
    }
}

pub fn validate_budget(category: &str, limit: &str) -> Result<Budget, ValidationError> {
    let category = required(category, ValidationError::BlankCategory)?;
    let limit = parse_amount(limit)?;
    if limit <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveLimit);
    }
    Ok(Budget { category, limit })
}
