//! Configuration set operations for the Query protocol.

use super::params::{insert_opt, Params};
use super::{QueryAction, QueryOperation};

/// Optional parameters of [`list_configuration_sets`].
#[derive(Debug, Clone, Default)]
pub struct ListConfigurationSetsOpts {
    /// Maximum number of configuration sets per page.
    pub max_items: Option<u32>,
    /// Pagination token from a previous listing.
    pub next_token: Option<String>,
}

/// Build a `ListConfigurationSets` operation.
pub fn list_configuration_sets(opts: &ListConfigurationSetsOpts) -> QueryOperation {
    let mut params = Params::new();
    if let Some(max_items) = opts.max_items {
        params.insert("MaxItems".to_string(), max_items.to_string());
    }
    insert_opt(&mut params, "NextToken", &opts.next_token);
    QueryOperation::new(QueryAction::ListConfigurationSets, params)
}
