use ethers::types::Bytes;
use serde::{Deserialize, Serialize};

use super::common::ChecksumAddress;

/// Platform of a registered device
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceType {
    Android,
    Ios,
    Web,
}

/// Safes to watch on one chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeRegistration {
    pub chain_id: String,
    pub safes: Vec<ChecksumAddress>,
    /// Owner signatures authorizing the registration
    pub signatures: Vec<Bytes>,
}

/// Register a device for push notifications
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterNotificationsRequest {
    /// Assigned by the server when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    pub cloud_messaging_token: String,
    pub build_number: String,
    pub bundle: String,
    pub device_type: DeviceType,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub safe_registrations: Vec<SafeRegistration>,
}
