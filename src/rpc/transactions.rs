//! Transaction info, execution info and transaction details.
//!
//! Every polymorphic payload is a closed enum discriminated by `type`.
//! `MultiSend` and `Cancellation` narrow `Custom` and can only be built
//! through `TryFrom`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use ethers::types::{Bytes, H256};
use serde::{Deserialize, Serialize};

use super::{
    common::{AddressEx, ChecksumAddress, DecimalString, Operation},
    human_description::RichDecodedInfo,
    messages::millis_to_date,
    tokens::TokenInfo,
};
use crate::request::{ContractError, ContractResult};

/// A decoded argument value: a scalar, or a (nested) array of them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Scalar, as a string
    Single(String),
    /// Array
    Array(Vec<ParamValue>),
}

/// A call packed inside a multiSend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalTransaction {
    pub operation: Operation,
    pub to: ChecksumAddress,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<DecimalString>,
    pub data: Option<Bytes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_decoded: Option<DataDecoded>,
}

/// A decoded argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    pub value: ParamValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_decoded: Option<Vec<InternalTransaction>>,
}

/// Decoded calldata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataDecoded {
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,
}

/// Lifecycle of a transaction
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    AwaitingConfirmations,
    AwaitingExecution,
    Cancelled,
    Failed,
    Success,
}

impl TransactionStatus {
    /// True once the transaction can no longer change
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Failed | Self::Success)
    }
}

/// Direction of a transfer, relative to the Safe
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferDirection {
    Incoming,
    Outgoing,
    Unknown,
}

/// Whether a queued transaction competes for its nonce
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConflictType {
    None,
    HasNext,
    End,
}

/// An ERC20 transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Erc20Transfer {
    pub token_address: ChecksumAddress,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u32>,
    pub value: DecimalString,
}

/// An ERC721 transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Erc721Transfer {
    pub token_address: ChecksumAddress,
    pub token_id: DecimalString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
}

/// A native currency transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCoinTransfer {
    pub value: DecimalString,
}

tagged_union! {
    /// What was transferred
    pub enum TransferInfo {
        /// `ERC20`
        Erc20(Erc20Transfer) = "ERC20",
        /// `ERC721`
        Erc721(Erc721Transfer) = "ERC721",
        /// `NATIVE_COIN`
        NativeCoin(NativeCoinTransfer) = "NATIVE_COIN",
    }
}

/// A token or native currency transfer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub sender: AddressEx,
    pub recipient: AddressEx,
    pub direction: TransferDirection,
    pub transfer_info: TransferInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub human_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rich_decoded_info: Option<RichDecodedInfo>,
}

/// `SET_FALLBACK_HANDLER`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetFallbackHandler {
    pub handler: AddressEx,
}

/// `ADD_OWNER`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOwner {
    pub owner: AddressEx,
    pub threshold: u32,
}

/// `REMOVE_OWNER`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveOwner {
    pub owner: AddressEx,
    pub threshold: u32,
}

/// `SWAP_OWNER`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapOwner {
    pub old_owner: AddressEx,
    pub new_owner: AddressEx,
}

/// `CHANGE_THRESHOLD`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeThreshold {
    pub threshold: u32,
}

/// `CHANGE_IMPLEMENTATION`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeImplementation {
    pub implementation: AddressEx,
}

/// `ENABLE_MODULE`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnableModule {
    pub module: AddressEx,
}

/// `DISABLE_MODULE`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisableModule {
    pub module: AddressEx,
}

/// `SET_GUARD`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetGuard {
    pub guard: AddressEx,
}

/// `DELETE_GUARD`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeleteGuard {}

tagged_union! {
    /// A Safe settings change
    pub enum SettingsInfo {
        /// `SET_FALLBACK_HANDLER`
        SetFallbackHandler(SetFallbackHandler) = "SET_FALLBACK_HANDLER",
        /// `ADD_OWNER`
        AddOwner(AddOwner) = "ADD_OWNER",
        /// `REMOVE_OWNER`
        RemoveOwner(RemoveOwner) = "REMOVE_OWNER",
        /// `SWAP_OWNER`
        SwapOwner(SwapOwner) = "SWAP_OWNER",
        /// `CHANGE_THRESHOLD`
        ChangeThreshold(ChangeThreshold) = "CHANGE_THRESHOLD",
        /// `CHANGE_IMPLEMENTATION`
        ChangeImplementation(ChangeImplementation) = "CHANGE_IMPLEMENTATION",
        /// `ENABLE_MODULE`
        EnableModule(EnableModule) = "ENABLE_MODULE",
        /// `DISABLE_MODULE`
        DisableModule(DisableModule) = "DISABLE_MODULE",
        /// `SET_GUARD`
        SetGuard(SetGuard) = "SET_GUARD",
        /// `DELETE_GUARD`
        DeleteGuard(DeleteGuard) = "DELETE_GUARD",
    }
}

impl SettingsInfo {
    /// The threshold after the change, for changes that set one
    pub fn new_threshold(&self) -> Option<u32> {
        match self {
            SettingsInfo::AddOwner(c) => Some(c.threshold),
            SettingsInfo::RemoveOwner(c) => Some(c.threshold),
            SettingsInfo::ChangeThreshold(c) => Some(c.threshold),
            _ => None,
        }
    }
}

/// A call to the Safe itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsChange {
    pub data_decoded: DataDecoded,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings_info: Option<SettingsInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub human_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rich_decoded_info: Option<RichDecodedInfo>,
}

/// Any other contract interaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Custom {
    pub to: AddressEx,
    /// Calldata length in bytes
    pub data_size: DecimalString,
    pub value: DecimalString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_count: Option<u32>,
    pub is_cancellation: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub human_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rich_decoded_info: Option<RichDecodedInfo>,
}

impl Custom {
    /// `methodName` marking a batch
    pub const MULTI_SEND: &'static str = "multiSend";

    /// True if this interaction satisfies the [`MultiSend`] narrowing
    pub fn is_multi_send(&self) -> bool {
        self.method_name.as_deref() == Some(Self::MULTI_SEND) && self.action_count.is_some()
    }
}

/// Safe deployment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creation {
    pub creator: AddressEx,
    pub transaction_hash: H256,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation: Option<AddressEx>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factory: Option<AddressEx>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub human_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rich_decoded_info: Option<RichDecodedInfo>,
}

tagged_union! {
    /// What a transaction does
    pub enum TransactionInfo {
        /// `Transfer`
        Transfer(Transfer) = "Transfer",
        /// `SettingsChange`
        SettingsChange(SettingsChange) = "SettingsChange",
        /// `Custom`, see also [`MultiSend`] and [`Cancellation`]
        Custom(Custom) = "Custom",
        /// `Creation`
        Creation(Creation) = "Creation",
    }
}

fn refinement(refinement: &'static str, reason: &'static str) -> ContractError {
    ContractError::Refinement { refinement, reason }
}

/// A `Custom` call batching several actions: `methodName` is `multiSend`
/// and `actionCount` is present
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TransactionInfo", into = "TransactionInfo")]
pub struct MultiSend(Custom);

impl MultiSend {
    /// Number of batched actions
    pub fn action_count(&self) -> u32 {
        self.0.action_count.unwrap_or_default()
    }

    /// Back to the base shape
    pub fn into_inner(self) -> Custom {
        self.0
    }
}

impl TryFrom<Custom> for MultiSend {
    type Error = ContractError;

    fn try_from(custom: Custom) -> ContractResult<Self> {
        if custom.method_name.as_deref() != Some(Custom::MULTI_SEND) {
            return Err(refinement("MultiSend", "methodName is not multiSend"));
        }
        if custom.action_count.is_none() {
            return Err(refinement("MultiSend", "actionCount is missing"));
        }
        Ok(Self(custom))
    }
}

impl TryFrom<TransactionInfo> for MultiSend {
    type Error = ContractError;

    fn try_from(info: TransactionInfo) -> ContractResult<Self> {
        match info {
            TransactionInfo::Custom(custom) => custom.try_into(),
            _ => Err(refinement("MultiSend", "txInfo is not Custom")),
        }
    }
}

/// A `Custom` call rejecting a queued transaction: `isCancellation` is true
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TransactionInfo", into = "TransactionInfo")]
pub struct Cancellation(Custom);

impl Cancellation {
    /// Back to the base shape
    pub fn into_inner(self) -> Custom {
        self.0
    }
}

impl TryFrom<Custom> for Cancellation {
    type Error = ContractError;

    fn try_from(custom: Custom) -> ContractResult<Self> {
        if !custom.is_cancellation {
            return Err(refinement("Cancellation", "isCancellation is false"));
        }
        Ok(Self(custom))
    }
}

impl TryFrom<TransactionInfo> for Cancellation {
    type Error = ContractError;

    fn try_from(info: TransactionInfo) -> ContractResult<Self> {
        match info {
            TransactionInfo::Custom(custom) => custom.try_into(),
            _ => Err(refinement("Cancellation", "txInfo is not Custom")),
        }
    }
}

macro_rules! custom_refinement {
    ($($name:ident),+) => {
        $(
            impl std::ops::Deref for $name {
                type Target = Custom;

                fn deref(&self) -> &Self::Target {
                    &self.0
                }
            }

            impl From<$name> for Custom {
                fn from(val: $name) -> Self {
                    val.0
                }
            }

            impl From<$name> for TransactionInfo {
                fn from(val: $name) -> Self {
                    TransactionInfo::Custom(val.0)
                }
            }
        )+
    };
}

custom_refinement!(MultiSend, Cancellation);

/// Executed by a module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleExecutionInfo {
    pub address: AddressEx,
}

/// Executed (or awaiting execution) through owner confirmations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultisigExecutionInfo {
    pub nonce: u64,
    pub confirmations_required: u32,
    pub confirmations_submitted: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_signers: Option<Vec<AddressEx>>,
}

impl MultisigExecutionInfo {
    /// True once enough owners confirmed
    pub fn is_fully_signed(&self) -> bool {
        self.confirmations_submitted >= self.confirmations_required
    }
}

tagged_union! {
    /// How a listed transaction was triggered
    pub enum ExecutionInfo {
        /// `MODULE`
        Module(ModuleExecutionInfo) = "MODULE",
        /// `MULTISIG`
        Multisig(MultisigExecutionInfo) = "MULTISIG",
    }
}

/// The Safe App a transaction was created from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeAppInfo {
    pub name: String,
    pub url: String,
    pub logo_uri: String,
}

/// A transaction as listed in history and queue pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
    /// Gateway transaction id
    pub id: String,
    /// Milliseconds since epoch
    pub timestamp: u64,
    pub tx_status: TransactionStatus,
    pub tx_info: TransactionInfo,
    /// Expected to match how the transaction was triggered. Not checked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_info: Option<ExecutionInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe_app_info: Option<SafeAppInfo>,
}

impl TransactionSummary {
    /// True if a module triggered the transaction
    pub fn is_module_triggered(&self) -> bool {
        matches!(self.execution_info, Some(ExecutionInfo::Module(_)))
    }

    /// The Safe nonce, for multisig transactions
    pub fn multisig_nonce(&self) -> Option<u64> {
        match &self.execution_info {
            Some(ExecutionInfo::Multisig(info)) => Some(info.nonce),
            _ => None,
        }
    }

    /// When the transaction was submitted or executed
    pub fn date(&self) -> Option<DateTime<Utc>> {
        millis_to_date(self.timestamp)
    }
}

/// Call details of a transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex_data: Option<Bytes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_decoded: Option<DataDecoded>,
    pub to: AddressEx,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<DecimalString>,
    pub operation: Operation,
    /// Known names of the addresses appearing in the call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_info_index: Option<BTreeMap<String, AddressEx>>,
    pub trusted_delegate_call_target: bool,
}

/// Module execution details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleExecutionDetails {
    pub address: AddressEx,
}

/// An owner confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultisigConfirmation {
    pub signer: AddressEx,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<Bytes>,
    pub submitted_at: u64,
}

/// Multisig execution details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultisigExecutionDetails {
    pub submitted_at: u64,
    pub nonce: u64,
    pub safe_tx_gas: DecimalString,
    pub base_gas: DecimalString,
    pub gas_price: DecimalString,
    pub gas_token: ChecksumAddress,
    pub refund_receiver: AddressEx,
    pub safe_tx_hash: H256,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executor: Option<AddressEx>,
    pub signers: Vec<AddressEx>,
    pub confirmations_required: u32,
    pub confirmations: Vec<MultisigConfirmation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejectors: Option<Vec<AddressEx>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_token_info: Option<TokenInfo>,
    pub trusted: bool,
}

impl MultisigExecutionDetails {
    /// Signers that have not confirmed yet
    pub fn missing_signers(&self) -> impl Iterator<Item = &AddressEx> {
        self.signers.iter().filter(move |signer| {
            !self
                .confirmations
                .iter()
                .any(|c| c.signer.value == signer.value)
        })
    }
}

tagged_union! {
    /// How a detailed transaction was triggered
    pub enum DetailedExecutionInfo {
        /// `MODULE`
        Module(ModuleExecutionDetails) = "MODULE",
        /// `MULTISIG`
        Multisig(MultisigExecutionDetails) = "MULTISIG",
    }
}

/// A single transaction, in full
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetails {
    pub safe_address: ChecksumAddress,
    pub tx_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executed_at: Option<u64>,
    pub tx_status: TransactionStatus,
    pub tx_info: TransactionInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_data: Option<TransactionData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_execution_info: Option<DetailedExecutionInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<H256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe_app_info: Option<SafeAppInfo>,
}
