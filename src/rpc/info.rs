use serde::{Deserialize, Serialize};

use super::common::AddressEx;

/// How the Safe's singleton compares to the latest release
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImplementationVersionState {
    /// Latest
    UpToDate,
    /// An upgrade is available
    Outdated,
    /// Singleton not recognized
    Unknown,
}

/// Status of a Safe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeInfo {
    pub address: AddressEx,
    pub chain_id: String,
    pub nonce: u64,
    pub threshold: u32,
    pub owners: Vec<AddressEx>,
    pub implementation: AddressEx,
    pub implementation_version_state: ImplementationVersionState,
    pub modules: Option<Vec<AddressEx>>,
    pub guard: Option<AddressEx>,
    pub fallback_handler: Option<AddressEx>,
    pub version: Option<String>,
    /// Changes whenever the collectibles change
    pub collectibles_tag: String,
    /// Changes whenever the queue changes
    pub tx_queued_tag: String,
    /// Changes whenever the history changes
    pub tx_history_tag: String,
    /// Changes whenever the messages change
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages_tag: Option<String>,
}

impl SafeInfo {
    /// True if `address` is one of the owners
    pub fn is_owner(&self, address: &AddressEx) -> bool {
        self.owners.iter().any(|o| o.value == address.value)
    }
}
