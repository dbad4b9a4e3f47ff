use serde::{Deserialize, Serialize};

use super::common::ChecksumAddress;

/// A deployed Safe singleton
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterCopy {
    pub address: ChecksumAddress,
    pub version: String,
    pub deployer: String,
    pub deployed_block_number: u64,
    pub last_indexed_block_number: u64,
    pub l2: bool,
}

/// Singletons indexed on a chain
pub type MasterCopyResponse = Vec<MasterCopy>;
