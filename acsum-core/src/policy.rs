//! Which fields a caller insists on, and extra labels it accepts

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::Field;

/// Required-field policy for a parse.
///
/// Statement variants disagree on whether the "previous" lines are part of
/// the summary, so those two are switchable. Everything else is always
/// required.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParsePolicy {
    pub require_previous_equity: bool,
    pub require_previous_ledger_balance: bool,
    /// Extra case-insensitive label patterns per field, tried alongside the
    /// built-in label (e.g. `balance = ["Cash\\s+Balance"]`).
    pub aliases: BTreeMap<Field, Vec<String>>,
}

impl Default for ParsePolicy {
    fn default() -> Self {
        Self {
            require_previous_equity: true,
            require_previous_ledger_balance: false,
            aliases: BTreeMap::new(),
        }
    }
}

impl ParsePolicy {
    pub fn is_required(&self, field: Field) -> bool {
        match field {
            Field::PreviousEquity => self.require_previous_equity,
            Field::PreviousLedgerBalance => self.require_previous_ledger_balance,
            _ => true,
        }
    }

    /// Required fields in report order
    pub fn required_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.is_required(*f))
            .collect()
    }

    pub fn aliases_for(&self, field: Field) -> &[String] {
        self.aliases.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_requirements() {
        let policy = ParsePolicy::default();
        assert!(policy.is_required(Field::PreviousEquity));
        assert!(!policy.is_required(Field::PreviousLedgerBalance));
        assert_eq!(policy.required_fields().len(), 10);
    }

    #[test]
    fn test_from_toml_with_aliases() {
        let policy: ParsePolicy = toml::from_str(
            r#"
require_previous_equity = false

[aliases]
balance = ["Cash\\s+Balance"]
"#,
        )
        .unwrap();
        assert!(!policy.is_required(Field::PreviousEquity));
        assert!(!policy.require_previous_ledger_balance);
        assert_eq!(policy.aliases_for(Field::Balance), ["Cash\\s+Balance".to_string()]);
        assert!(policy.aliases_for(Field::Equity).is_empty());
        assert_eq!(policy.required_fields().len(), 9);
    }
}
