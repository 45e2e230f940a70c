//! A/C Summary statement parser (text)
//!
//! Expected text, with inconsistent decoration between sources:
//!   *A/C No: 123456*            *2024.03.15 10:30*
//!   **A/C SUMMARY:**
//!   Balance: 10,000.00          Closed Trade P/L: -500.00
//!   Deposit/Withdrawal: 0.00    Previous Equity: 9,400.00
//!   Equity: 9,500.00            Floating P/L: 100.00
//!   Margin Requirements: 200.00 Available Margin: 9 300.00
//!
//! Amounts are searched anywhere after the first summary header; there is
//! no closing delimiter.

use acsum_core::{Field, ParseError, ParsePolicy, StatementRecord};
use acsum_core::{parse_dotted_date, parse_grouped_amount};
use anyhow::Context;
use regex::Regex;

use crate::fields::{CompiledRule, FIELD_RULES};
use crate::types::{AmountMatch, Extraction};

/// Compiled A/C Summary parser. Immutable once built; share it freely.
#[derive(Debug, Clone)]
pub struct StatementParser {
    policy: ParsePolicy,
    account_re: Regex,
    date_re: Regex,
    header_re: Regex,
    rules: Vec<CompiledRule>,
}

impl StatementParser {
    pub fn new(policy: ParsePolicy) -> anyhow::Result<Self> {
        let account_re = Regex::new(r"(?i)A\s*/\s*C\s*No\D*(?P<number>\d+)")?;
        let date_re = Regex::new(r"(?P<date>\d{4}\.\d{2}\.\d{2})\s+\d{2}:\d{2}")?;
        let header_re = Regex::new(r"(?i)\*?\s*A\s*/\s*C\s*SUMMARY\s*:?\s*\*?")?;

        let rules = FIELD_RULES
            .iter()
            .map(|rule| rule.compile(policy.aliases_for(rule.field)))
            .collect::<anyhow::Result<Vec<_>>>()
            .context("building field rules")?;

        Ok(Self {
            policy,
            account_re,
            date_re,
            header_re,
            rules,
        })
    }

    /// Locate every field without validating. Never fails.
    pub fn extract(&self, text: &str) -> Extraction {
        let mut out = Extraction {
            account_number: self
                .account_re
                .captures(text)
                .map(|caps| caps["number"].to_string()),
            // Only the first timestamp counts; later ones are deal times
            statement_date: self
                .date_re
                .captures(text)
                .and_then(|caps| parse_dotted_date(&caps["date"])),
            ..Extraction::default()
        };

        match &out.account_number {
            Some(acct) => tracing::debug!(account = %acct, "extracted A/C No"),
            None => tracing::debug!("A/C No not matched"),
        }
        match out.statement_date {
            Some(date) => tracing::debug!(%date, "extracted statement date"),
            None => tracing::debug!("statement timestamp not matched"),
        }

        let Some(header) = self.header_re.find(text) else {
            tracing::debug!("A/C SUMMARY header not found; skipping amount fields");
            return out;
        };
        out.section_start = Some(header.end());

        for rule in &self.rules {
            let found = rule.find_from(text, header.end()).and_then(|m| {
                parse_grouped_amount(&m.raw).map(|value| AmountMatch {
                    raw: m.raw,
                    value,
                    offset: m.offset,
                })
            });

            match found {
                Some(m) => {
                    tracing::debug!(field = %rule.field, value = m.value, raw = %m.raw, "extracted field");
                    out.amounts.insert(rule.field, m);
                }
                None => tracing::debug!(field = %rule.field, "label not matched"),
            }
        }

        out
    }

    /// Parse statement text into a validated record.
    ///
    /// Margin Requirements is checked before the general completeness check,
    /// so its absence is always reported on its own.
    pub fn parse(&self, text: &str) -> Result<StatementRecord, ParseError> {
        if text.trim().is_empty() {
            return Err(ParseError::InputMissing);
        }

        let extraction = self.extract(text);

        if !extraction.is_present(Field::MarginRequirements) {
            return Err(ParseError::MandatoryFieldMissing {
                field: Field::MarginRequirements,
            });
        }

        extraction.to_record(&self.policy)
    }
}

/// Parse A/C Summary text with the default policy.
pub fn parse_ac_summary_text(text: &str) -> anyhow::Result<StatementRecord> {
    let parser = StatementParser::new(ParsePolicy::default())?;
    Ok(parser.parse(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const BASIC: &str = r#"
A/C No: 123456
*2024.03.15 10:30*
A/C SUMMARY
Balance: 10,000.00
Closed Trade P/L: -500.00
Deposit/Withdrawal: 0.00
Previous Equity: 9,400.00
Equity: 9,500.00
Floating P/L: 100.00
Margin Requirements: 200.00
Available Margin: 9,300.00
"#;

    fn parser() -> StatementParser {
        StatementParser::new(ParsePolicy::default()).unwrap()
    }

    #[test]
    fn test_parse_basic_summary() {
        let rec = parser().parse(BASIC).unwrap();
        assert_eq!(rec.account_number, "123456");
        assert_eq!(rec.statement_date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(rec.balance, 10000.00);
        assert_eq!(rec.closed_trade_profit_loss, -500.00);
        assert_eq!(rec.deposit_withdrawal, 0.00);
        assert_eq!(rec.previous_equity, Some(9400.00));
        assert_eq!(rec.equity, 9500.00);
        assert_eq!(rec.floating_profit_loss, 100.00);
        assert_eq!(rec.margin_requirements, 200.00);
        assert_eq!(rec.available_margin, 9300.00);
        assert_eq!(rec.previous_ledger_balance, None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parser().parse(""), Err(ParseError::InputMissing));
        assert_eq!(parser().parse("  \n\t"), Err(ParseError::InputMissing));
    }

    #[test]
    fn test_decorated_account_marker() {
        let ex = parser().extract("**A/C No.:** 987654 and later 111");
        assert_eq!(ex.account_number.as_deref(), Some("987654"));
        let ex = parser().extract("a/c no 55");
        assert_eq!(ex.account_number.as_deref(), Some("55"));
    }

    #[test]
    fn test_first_timestamp_wins() {
        let ex = parser().extract("*2024.02.29 23:59*\n2025.01.01 10:00");
        assert_eq!(ex.statement_date, NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn test_impossible_first_timestamp_is_not_replaced_by_a_deal_time() {
        let text = BASIC.replace("*2024.03.15 10:30*", "*2024.02.30 10:30*\n188201  2024.03.14 22:41  sell");
        assert_eq!(parser().extract(&text).statement_date, None);
        assert_eq!(
            parser().parse(&text),
            Err(ParseError::IncompleteRecord { missing: vec![Field::StatementDate] })
        );
    }

    #[test]
    fn test_amounts_before_header_are_ignored() {
        let text = BASIC.replace("A/C SUMMARY", "Margin Requirements: 1.00\nA/C SUMMARY");
        let rec = parser().parse(&text).unwrap();
        assert_eq!(rec.margin_requirements, 200.00);
    }

    #[test]
    fn test_no_header_means_margin_missing() {
        let text = BASIC.replace("A/C SUMMARY", "ACCOUNT OVERVIEW");
        let ex = parser().extract(&text);
        assert_eq!(ex.section_start, None);
        assert!(ex.amounts.is_empty());
        assert_eq!(
            parser().parse(&text),
            Err(ParseError::MandatoryFieldMissing { field: Field::MarginRequirements })
        );
    }

    #[test]
    fn test_header_variants() {
        for header in ["*A/C SUMMARY:*", "**a/c summary**", "A / C  Summary:", "A/CSUMMARY"] {
            let text = BASIC.replace("A/C SUMMARY", header);
            assert!(parser().parse(&text).is_ok(), "header {header:?} not recognised");
        }
    }

    #[test]
    fn test_convenience_wrapper_surfaces_parse_error() {
        let err = parse_ac_summary_text("").unwrap_err();
        assert_eq!(err.downcast_ref::<ParseError>(), Some(&ParseError::InputMissing));
    }
}
