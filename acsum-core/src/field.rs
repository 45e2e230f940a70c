//! Catalogue of the fields carried by an A/C Summary record

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every field a [`StatementRecord`](crate::StatementRecord) can carry.
///
/// Declaration order is the order fields are reported in diagnostics and
/// error messages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    AccountNumber,
    StatementDate,
    PreviousLedgerBalance,
    Balance,
    ClosedTradeProfitLoss,
    DepositWithdrawal,
    PreviousEquity,
    Equity,
    FloatingProfitLoss,
    MarginRequirements,
    AvailableMargin,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::AccountNumber,
        Field::StatementDate,
        Field::PreviousLedgerBalance,
        Field::Balance,
        Field::ClosedTradeProfitLoss,
        Field::DepositWithdrawal,
        Field::PreviousEquity,
        Field::Equity,
        Field::FloatingProfitLoss,
        Field::MarginRequirements,
        Field::AvailableMargin,
    ];

    /// Label as it appears on the statement
    pub fn label(&self) -> &'static str {
        match self {
            Field::AccountNumber => "A/C No",
            Field::StatementDate => "Date",
            Field::PreviousLedgerBalance => "Previous Ledger Balance",
            Field::Balance => "Balance",
            Field::ClosedTradeProfitLoss => "Closed Trade P/L",
            Field::DepositWithdrawal => "Deposit/Withdrawal",
            Field::PreviousEquity => "Previous Equity",
            Field::Equity => "Equity",
            Field::FloatingProfitLoss => "Floating P/L",
            Field::MarginRequirements => "Margin Requirements",
            Field::AvailableMargin => "Available Margin",
        }
    }

    /// Fields carrying a signed amount from the summary block
    pub fn is_amount(&self) -> bool {
        !matches!(self, Field::AccountNumber | Field::StatementDate)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
