//! Normalized output of the A/C Summary parser

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A fully validated account summary.
///
/// Only constructed once every required field has been found, so consumers
/// never see a partial record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatementRecord {
    /// Digits following the "A/C No" marker
    pub account_number: String,
    /// Statement date (serialized as YYYY-MM-DD)
    pub statement_date: NaiveDate,
    /// Only some statements print this line
    pub previous_ledger_balance: Option<f64>,
    pub balance: f64,
    pub closed_trade_profit_loss: f64,
    pub deposit_withdrawal: f64,
    /// Always present when the policy requires it (the default)
    pub previous_equity: Option<f64>,
    pub equity: f64,
    pub floating_profit_loss: f64,
    pub margin_requirements: f64,
    pub available_margin: f64,
}
