use acsum_core::{Field, ParseError, ParsePolicy, StatementRecord};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// An amount found under the summary header
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmountMatch {
    /// Text as printed, separators included
    pub raw: String,
    pub value: f64,
    /// Byte offset of `raw` in the input
    pub offset: usize,
}

/// Everything the parser located, before any completeness check.
///
/// Useful on its own for diagnosing why a statement was rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Extraction {
    pub account_number: Option<String>,
    pub statement_date: Option<NaiveDate>,
    /// Byte offset just past the A/C SUMMARY header, if one was found
    pub section_start: Option<usize>,
    pub amounts: BTreeMap<Field, AmountMatch>,
}

impl Extraction {
    pub fn amount(&self, field: Field) -> Option<f64> {
        self.amounts.get(&field).map(|m| m.value)
    }

    pub fn is_present(&self, field: Field) -> bool {
        match field {
            Field::AccountNumber => self.account_number.is_some(),
            Field::StatementDate => self.statement_date.is_some(),
            _ => self.amounts.contains_key(&field),
        }
    }

    /// Required fields (per `policy`) that were not found, in report order
    pub fn missing(&self, policy: &ParsePolicy) -> Vec<Field> {
        policy
            .required_fields()
            .into_iter()
            .filter(|f| !self.is_present(*f))
            .collect()
    }

    /// Build the record, or list every required field that is absent.
    pub fn to_record(&self, policy: &ParsePolicy) -> Result<StatementRecord, ParseError> {
        let missing = self.missing(policy);
        if !missing.is_empty() {
            return Err(ParseError::IncompleteRecord { missing });
        }

        let req = |field: Field| {
            self.amount(field)
                .ok_or_else(|| ParseError::IncompleteRecord { missing: vec![field] })
        };

        Ok(StatementRecord {
            account_number: self
                .account_number
                .clone()
                .ok_or(ParseError::IncompleteRecord { missing: vec![Field::AccountNumber] })?,
            statement_date: self
                .statement_date
                .ok_or(ParseError::IncompleteRecord { missing: vec![Field::StatementDate] })?,
            previous_ledger_balance: self.amount(Field::PreviousLedgerBalance),
            balance: req(Field::Balance)?,
            closed_trade_profit_loss: req(Field::ClosedTradeProfitLoss)?,
            deposit_withdrawal: req(Field::DepositWithdrawal)?,
            previous_equity: self.amount(Field::PreviousEquity),
            equity: req(Field::Equity)?,
            floating_profit_loss: req(Field::FloatingProfitLoss)?,
            margin_requirements: req(Field::MarginRequirements)?,
            available_margin: req(Field::AvailableMargin)?,
        })
    }
}
