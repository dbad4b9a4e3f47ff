use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use ethers::types::{Bytes, H256};
use serde::{Deserialize, Serialize};

use super::common::{AddressEx, ChecksumAddress, Page};

/// Signing progress of a message
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SafeMessageStatus {
    /// Below threshold
    NeedsConfirmation,
    /// Threshold reached
    Confirmed,
}

/// EIP-712 domain
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedDataDomain {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Number, decimal string or hex string depending on the signer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verifying_contract: Option<ChecksumAddress>,
    /// Hex string or byte array
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salt: Option<serde_json::Value>,
}

/// A member of an EIP-712 struct type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedDataField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
}

/// EIP-712 typed data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Eip712TypedData {
    pub domain: TypedDataDomain,
    pub types: BTreeMap<String, Vec<TypedDataField>>,
    pub message: serde_json::Map<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_type: Option<String>,
}

/// What was signed: a plain string or typed data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    /// `personal_sign` style message
    Text(String),
    /// `eth_signTypedData` style message
    TypedData(Box<Eip712TypedData>),
}

/// An owner signature on a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageConfirmation {
    pub owner: AddressEx,
    pub signature: Bytes,
}

/// Date separator in a message list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafeMessageDateLabel {
    /// Milliseconds since epoch
    pub timestamp: u64,
}

impl SafeMessageDateLabel {
    /// The label's date
    pub fn date(&self) -> Option<DateTime<Utc>> {
        millis_to_date(self.timestamp)
    }
}

/// An off-chain message of a Safe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeMessage {
    pub message_hash: H256,
    pub status: SafeMessageStatus,
    pub logo_uri: Option<String>,
    pub name: Option<String>,
    pub message: MessageContent,
    pub creation_timestamp: u64,
    pub modified_timestamp: u64,
    pub confirmations_submitted: u32,
    pub confirmations_required: u32,
    pub proposed_by: AddressEx,
    pub confirmations: Vec<MessageConfirmation>,
    /// Combined signature, once confirmed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prepared_signature: Option<Bytes>,
}

impl SafeMessage {
    /// True if `owner` already signed
    pub fn is_confirmed_by(&self, owner: ChecksumAddress) -> bool {
        self.confirmations.iter().any(|c| c.owner.value == owner)
    }

    /// When the message was proposed
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        millis_to_date(self.creation_timestamp)
    }
}

tagged_union! {
    /// An entry of a message list page
    pub enum SafeMessageListItem {
        /// `DATE_LABEL`
        DateLabel(SafeMessageDateLabel) = "DATE_LABEL",
        /// `MESSAGE`
        Message(SafeMessage) = "MESSAGE",
    }
}

/// A page of messages
pub type SafeMessageListPage = Page<SafeMessageListItem>;

/// Propose a message, with the proposer's signature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposeSafeMessageRequest {
    pub message: MessageContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe_app_id: Option<u64>,
    pub signature: Bytes,
}

/// Add a signature to a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmSafeMessageRequest {
    pub signature: Bytes,
}

pub(crate) fn millis_to_date(ms: u64) -> Option<DateTime<Utc>> {
    let ms = i64::try_from(ms).ok()?;
    Utc.timestamp_millis_opt(ms).single()
}
