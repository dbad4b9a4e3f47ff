use ethers::types::Bytes;
use serde::{Deserialize, Serialize};

use super::common::{ChecksumAddress, DecimalString, Operation};

/// Calldata to decode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedDataRequest {
    /// Hex calldata
    pub data: Bytes,
    /// Call target, lets the decoder pick a verified ABI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<ChecksumAddress>,
}

/// A decoded argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedDataBasicParameter {
    pub name: String,
    /// Solidity type, e.g. `address`
    #[serde(rename = "type")]
    pub param_type: String,
    pub value: String,
}

/// A call nested inside a multiSend argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedDataParameterValue {
    pub operation: Operation,
    pub to: ChecksumAddress,
    pub value: DecimalString,
    pub data: Bytes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_decoded: Option<NestedDecodedData>,
}

/// Decoding of a nested call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestedDecodedData {
    pub method: String,
    pub parameters: Vec<DecodedDataBasicParameter>,
}

/// A decoded argument, with nested calls when the argument packs some
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedDataParameter {
    #[serde(flatten)]
    pub basic: DecodedDataBasicParameter,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_decoded: Option<Vec<DecodedDataParameterValue>>,
}

/// Decoder output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedDataResponse {
    pub method: String,
    pub parameters: Vec<DecodedDataParameter>,
}
