use serde::{Deserialize, Serialize};

use super::common::{ChecksumAddress, Page};
use crate::{
    endpoints::{params::ChainPath, Endpoint, GetDelegates},
    request::{ContractError, ContractResult, Request},
};

/// An address allowed to propose on behalf of a delegator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delegate {
    /// Safe the delegation is scoped to, `None` for every Safe of the
    /// delegator
    #[serde(default)]
    pub safe: Option<ChecksumAddress>,
    pub delegate: ChecksumAddress,
    pub delegator: ChecksumAddress,
    pub label: String,
}

/// A page of delegates
pub type DelegateResponse = Page<Delegate>;

query_params! {
    /// Delegate filters. The gateway answers only when at least one is set,
    /// see [`DelegatesRequest::into_request`].
    pub struct DelegatesRequest {
        /// Scope to a Safe
        safe: String = "safe",
        /// Filter by delegate
        delegate: String = "delegate",
        /// Filter by delegator
        delegator: String = "delegator",
        /// Filter by label
        label: String = "label",
    }
}

impl DelegatesRequest {
    /// True if no filter is set
    pub fn is_empty(&self) -> bool {
        self.safe.is_none()
            && self.delegate.is_none()
            && self.delegator.is_none()
            && self.label.is_none()
    }

    /// Delegates request for a chain, refusing an empty filter set
    pub fn into_request(self, chain: ChainPath) -> ContractResult<Request<GetDelegates>> {
        if self.is_empty() {
            return Err(ContractError::MissingFilter {
                operation: GetDelegates::OPERATION,
            });
        }
        Ok(Request::new(chain).with_query(self))
    }
}
