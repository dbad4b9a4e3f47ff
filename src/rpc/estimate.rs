use ethers::types::Bytes;
use serde::{Deserialize, Serialize};

use super::{
    common::{ChecksumAddress, DecimalString, Operation},
    propose::{MetaTransaction, MultisigTransactionRequest, SafeTransactionData},
};

/// Estimates `safeTxGas` for a proposed msig txn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeTransactionEstimationRequest {
    pub to: ChecksumAddress,
    pub value: DecimalString,
    /// Empty bytes for a plain transfer
    pub data: Bytes,
    pub operation: Operation,
}

impl<'a> From<&'a MetaTransaction> for SafeTransactionEstimationRequest {
    fn from(val: &'a MetaTransaction) -> Self {
        SafeTransactionEstimationRequest {
            to: val.to,
            value: val.value.clone(),
            data: val.data.clone().unwrap_or_default(),
            operation: val.operation,
        }
    }
}

impl<'a> From<&'a SafeTransactionData> for SafeTransactionEstimationRequest {
    fn from(val: &'a SafeTransactionData) -> Self {
        From::from(&val.core)
    }
}

impl<'a> From<&'a MultisigTransactionRequest> for SafeTransactionEstimationRequest {
    fn from(val: &'a MultisigTransactionRequest) -> Self {
        From::from(&val.tx)
    }
}

/// Response of the v2 estimate endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeTransactionEstimation {
    /// Nonce of the last executed transaction, plus one
    pub current_nonce: u64,
    /// Nonce to use, accounting for the queue
    pub recommended_nonce: u64,
    /// The amount of gas estimated
    pub safe_tx_gas: DecimalString,
}

impl std::ops::Deref for SafeTransactionEstimation {
    type Target = DecimalString;

    fn deref(&self) -> &Self::Target {
        &self.safe_tx_gas
    }
}

/// Current and recommended nonces of a Safe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoncesResponse {
    pub current_nonce: u64,
    pub recommended_nonce: u64,
}

impl NoncesResponse {
    /// True if transactions are queued beyond the current nonce
    pub fn has_queue(&self) -> bool {
        self.recommended_nonce > self.current_nonce
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_validates_operations() {
        let body = |op: u8| {
            format!(
                r#"{{"to":"0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed","value":"0","data":"0x","operation":{op}}}"#
            )
        };
        let call: SafeTransactionEstimationRequest = serde_json::from_str(&body(0)).unwrap();
        assert_eq!(call.operation, Operation::Call);
        let delegate: SafeTransactionEstimationRequest = serde_json::from_str(&body(1)).unwrap();
        assert_eq!(delegate.operation, Operation::DelegateCall);
        assert!(serde_json::from_str::<SafeTransactionEstimationRequest>(&body(2)).is_err());
    }

    #[test]
    fn it_estimates_from_meta_transactions() {
        let meta = MetaTransaction {
            to: "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".parse().unwrap(),
            value: 5u64.into(),
            data: None,
            operation: Operation::Call,
        };
        let req = SafeTransactionEstimationRequest::from(&meta);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({
                "to": "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
                "value": "5",
                "data": "0x",
                "operation": 0
            })
        );
    }

    #[test]
    fn it_reads_estimations() {
        let est: SafeTransactionEstimation = serde_json::from_str(
            r#"{"currentNonce":4,"recommendedNonce":6,"safeTxGas":"43021"}"#,
        )
        .unwrap();
        assert_eq!(est.as_str(), "43021");
        assert_eq!(est.to_u256().unwrap(), ethers::types::U256::from(43021u64));

        let nonces: NoncesResponse =
            serde_json::from_str(r#"{"currentNonce":4,"recommendedNonce":6}"#).unwrap();
        assert!(nonces.has_queue());
    }
}
