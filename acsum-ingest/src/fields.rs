//! Declarative label table for the amounts in an A/C Summary block.
//!
//! Each rule is `label \s* : \s* amount`, matched case-insensitively after the
//! section header. A guard rejects a label occurrence when the text right
//! before it matches, which is how "Balance" stays clear of
//! "Previous Ledger Balance" without lookbehind.

use acsum_core::Field;
use anyhow::{Context, Result};
use regex::Regex;

/// Optional minus, then either separator-grouped digits (`1,234,567`,
/// `1 234 567`) or a plain digit run, then an optional fraction. The grouped
/// form must carry at least one separator so a plain run is never cut short.
pub const AMOUNT_PATTERN: &str = r"-?(?:\d{1,3}(?:[ ,\x{00A0}]\d{3})+|\d+)(?:\.\d+)?";

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: Field,
    pub label: &'static str,
    pub guard: Option<&'static str>,
}

pub const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        field: Field::PreviousLedgerBalance,
        label: r"Previous\s*Ledger\s*Balance",
        guard: None,
    },
    FieldRule {
        field: Field::Balance,
        label: r"Balance",
        guard: Some(r"Previous\s+Ledger\s+"),
    },
    FieldRule {
        field: Field::ClosedTradeProfitLoss,
        label: r"Closed\s*Trade\s*P\s*/\s*L",
        guard: None,
    },
    FieldRule {
        field: Field::DepositWithdrawal,
        label: r"Deposit\s*/\s*Withdrawal",
        guard: None,
    },
    FieldRule {
        field: Field::PreviousEquity,
        label: r"Previous\s*Equity",
        guard: None,
    },
    FieldRule {
        field: Field::Equity,
        label: r"Equity",
        guard: Some(r"Previous\s+"),
    },
    FieldRule {
        field: Field::FloatingProfitLoss,
        label: r"Floating\s*P\s*/\s*L",
        guard: None,
    },
    FieldRule {
        field: Field::MarginRequirements,
        label: r"Margin\s*Requirements",
        guard: None,
    },
    FieldRule {
        field: Field::AvailableMargin,
        label: r"Available\s*Margin",
        guard: None,
    },
];

/// A [`FieldRule`] with its label (plus any aliases) compiled
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub field: Field,
    pattern: Regex,
    guard: Option<Regex>,
}

/// One located amount
#[derive(Debug, Clone, PartialEq)]
pub struct RuleMatch {
    pub raw: String,
    pub offset: usize,
}

impl FieldRule {
    pub fn compile(&self, aliases: &[String]) -> Result<CompiledRule> {
        let mut labels = vec![format!(r"\b{}\b", self.label)];
        for alias in aliases {
            Regex::new(alias)
                .with_context(|| format!("invalid alias {alias:?} for {}", self.field))?;
            labels.push(format!("(?:{alias})"));
        }

        let pattern = Regex::new(&format!(
            r"(?i)(?:{})\s*:\s*(?P<amount>{AMOUNT_PATTERN})",
            labels.join("|")
        ))
        .with_context(|| format!("compiling label pattern for {}", self.field))?;

        let guard = self
            .guard
            .map(|g| Regex::new(&format!(r"(?i){g}\z")))
            .transpose()
            .with_context(|| format!("compiling label guard for {}", self.field))?;

        Ok(CompiledRule {
            field: self.field,
            pattern,
            guard,
        })
    }
}

impl CompiledRule {
    /// First unguarded `label: amount` at or after byte offset `start`.
    pub fn find_from(&self, text: &str, start: usize) -> Option<RuleMatch> {
        let mut pos = start;
        while let Some(caps) = self.pattern.captures_at(text, pos) {
            let whole = caps.get(0)?;
            pos = whole.end();

            if let Some(guard) = &self.guard {
                if guard.is_match(&text[..whole.start()]) {
                    tracing::debug!(field = %self.field, offset = whole.start(), "skipping guarded label");
                    continue;
                }
            }

            let amount = caps.name("amount")?;
            return Some(RuleMatch {
                raw: amount.as_str().to_string(),
                offset: amount.start(),
            });
        }
        None
    }
}
