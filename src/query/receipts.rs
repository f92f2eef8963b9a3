//! Receipt rule operations for the Query protocol.

use super::params::Params;
use super::{QueryAction, QueryOperation};

/// Build a `DescribeReceiptRuleSet` operation.
pub fn describe_receipt_rule_set(rule_set_name: &str) -> QueryOperation {
    let mut params = Params::new();
    params.insert("RuleSetName".to_string(), rule_set_name.to_string());
    QueryOperation::new(QueryAction::DescribeReceiptRuleSet, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_receipt_rule_set() {
        let op = describe_receipt_rule_set("inbound");
        assert_eq!(op.params()["Action"], "DescribeReceiptRuleSet");
        assert_eq!(op.params()["RuleSetName"], "inbound");
    }
}
