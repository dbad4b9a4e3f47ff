use ethers::{
    abi::{self, Token, Tokenizable},
    types::{
        transaction::eip712::{EIP712Domain, Eip712},
        Address, Bytes, H256, U256,
    },
    utils::keccak256,
};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::common::{ChecksumAddress, DecimalString, Operation};
use crate::request::{ContractError, ContractResult};

/// EIP-712 typehash for Safe transactions, as in the gnosis safe contracts
pub static SAFE_TX_TYPEHASH: Lazy<H256> = Lazy::new(|| {
    H256(keccak256(
        "SafeTx(address to,uint256 value,bytes data,uint8 operation,uint256 safeTxGas,uint256 baseGas,uint256 gasPrice,address gasToken,address refundReceiver,uint256 nonce)",
    ))
});

/// EIP-712 typehash domain binding, as in the gnosis safe contracts
///
/// EIP712 supports several forms of domain binding, but only verifier and
/// chain id are used by the Safe
pub static DOMAIN_SEPARATOR_TYPEHASH: Lazy<H256> =
    Lazy::new(|| H256(keccak256("EIP712Domain(uint256 chainId,address verifyingContract)")));

/// The call a Safe transaction makes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaTransaction {
    pub to: ChecksumAddress,
    pub value: DecimalString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Bytes>,
    pub operation: Operation,
}

/// Refund parameters of a Safe transaction
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeGasConfig {
    /// Gas to be forwarded to the callee. 0 for all available
    pub safe_tx_gas: DecimalString,
    /// Gas cost that is independent of the internal transaction execution,
    /// (e.g. base transaction fee, signature check, payment of the refund)
    pub base_gas: DecimalString,
    /// Maximum gas price that should be used for this transaction. 0 for no
    /// maximum.
    pub gas_price: DecimalString,
    /// Token address (or 0 if ETH) that is used for the reimbursement payment
    /// to the executor.
    pub gas_token: ChecksumAddress,
    /// The address which receives the refund. Defaults to `tx.origin` if empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund_receiver: Option<ChecksumAddress>,
}

/// A Safe transaction, before signing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeTransactionData {
    #[serde(flatten)]
    pub core: MetaTransaction,
    #[serde(flatten)]
    pub gas: SafeGasConfig,
    /// The Safe nonce to use
    pub nonce: DecimalString,
}

/// EIP-712 view of a [`SafeTransactionData`] bound to one Safe
#[derive(Clone, Debug)]
pub struct SafeEip712<'a> {
    address: Address,
    chain_id: u64,
    tx: &'a SafeTransactionData,
}

impl<'a> Eip712 for SafeEip712<'a> {
    type Error = ContractError;

    fn domain(&self) -> Result<EIP712Domain, Self::Error> {
        Ok(EIP712Domain {
            name: None,
            version: None,
            chain_id: Some(self.chain_id.into()),
            verifying_contract: Some(self.address),
            salt: None,
        })
    }

    fn type_hash() -> Result<[u8; 32], Self::Error> {
        Ok(From::from(*SAFE_TX_TYPEHASH))
    }

    fn struct_hash(&self) -> Result<[u8; 32], Self::Error> {
        Ok(keccak256(abi::encode(&self.tx.tokens()?)))
    }

    fn encode_eip712(&self) -> Result<[u8; 32], Self::Error> {
        // encode the digest to be compatible with solidity abi.encodePacked()
        let domain_separator = self.domain_separator()?;
        let struct_hash = self.struct_hash()?;

        let digest_input = [&[0x19, 0x01], &domain_separator[..], &struct_hash[..]].concat();

        Ok(keccak256(digest_input))
    }

    fn domain_separator(&self) -> Result<[u8; 32], Self::Error> {
        let mut encoded = [0u8; 96];
        encoded[..32].copy_from_slice(DOMAIN_SEPARATOR_TYPEHASH.as_fixed_bytes());
        U256::from(self.chain_id).to_big_endian(&mut encoded[32..64]);
        encoded[64 + 12..].copy_from_slice(self.address.as_bytes());
        Ok(keccak256(encoded))
    }
}

impl SafeTransactionData {
    /// EIP-712 view of this transaction for a given Safe
    pub fn eip712(&self, safe_address: Address, chain_id: u64) -> SafeEip712<'_> {
        SafeEip712 {
            address: safe_address,
            chain_id,
            tx: self,
        }
    }

    /// The Safe's internal hash of this transaction, the value owners sign
    pub fn safe_tx_hash(&self, safe_address: Address, chain_id: u64) -> ContractResult<H256> {
        self.eip712(safe_address, chain_id)
            .encode_eip712()
            .map(Into::into)
    }

    fn tokens(&self) -> ContractResult<Vec<Token>> {
        let data = H256::from(keccak256(self.core.data.as_deref().unwrap_or(&[])));
        Ok(vec![
            Token::FixedBytes(SAFE_TX_TYPEHASH.as_bytes().to_vec()),
            self.core.to.into_token(),
            Token::Uint(self.core.value.to_u256()?),
            Token::FixedBytes(data.as_bytes().to_vec()),
            self.core.operation.into_token(),
            Token::Uint(self.gas.safe_tx_gas.to_u256()?),
            Token::Uint(self.gas.base_gas.to_u256()?),
            Token::Uint(self.gas.gas_price.to_u256()?),
            self.gas.gas_token.into_token(),
            self.gas.refund_receiver.unwrap_or_default().into_token(),
            Token::Uint(self.nonce.to_u256()?),
        ])
    }

    /// Attach the proposer's signature and build the proposal body
    pub fn into_request(
        self,
        safe_address: Address,
        chain_id: u64,
        sender: ChecksumAddress,
        signature: Option<Bytes>,
    ) -> ContractResult<MultisigTransactionRequest> {
        let safe_tx_hash = self.safe_tx_hash(safe_address, chain_id)?;
        Ok(MultisigTransactionRequest {
            tx: self,
            safe_tx_hash,
            sender,
            signature,
            origin: None,
        })
    }
}

/// Propose a multisig transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultisigTransactionRequest {
    #[serde(flatten)]
    pub tx: SafeTransactionData,
    pub safe_tx_hash: H256,
    pub sender: ChecksumAddress,
    /// Must be in RSV format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<Bytes>,
    /// Free-form origin, usually JSON with the Safe App name and url
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

impl MultisigTransactionRequest {
    /// Set the origin
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// True if `safe_tx_hash` matches the transaction fields
    pub fn has_valid_hash(&self, safe_address: Address, chain_id: u64) -> ContractResult<bool> {
        Ok(self.tx.safe_tx_hash(safe_address, chain_id)? == self.safe_tx_hash)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn safe() -> Address {
        "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".parse().unwrap()
    }

    fn tx(nonce: u64) -> SafeTransactionData {
        SafeTransactionData {
            core: MetaTransaction {
                to: "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359".parse().unwrap(),
                value: 1_000u64.into(),
                data: None,
                operation: Operation::Call,
            },
            gas: SafeGasConfig::default(),
            nonce: nonce.into(),
        }
    }

    #[test]
    fn it_matches_the_safe_typehashes() {
        assert_eq!(
            *SAFE_TX_TYPEHASH,
            "0xbb8310d486368db6bd6f849402fdd73ad53d316b5a4b2644ad6efe0f941286d8"
                .parse::<H256>()
                .unwrap()
        );
        assert_eq!(
            *DOMAIN_SEPARATOR_TYPEHASH,
            "0x47e79534a245952e8b16893a336b85a3d9ea9fa8c573f3d803afb92a79469218"
                .parse::<H256>()
                .unwrap()
        );
    }

    #[test]
    fn it_hashes_safe_transactions() {
        let first = tx(0).safe_tx_hash(safe(), 1).unwrap();
        assert_eq!(first, tx(0).safe_tx_hash(safe(), 1).unwrap());
        assert_ne!(first, tx(1).safe_tx_hash(safe(), 1).unwrap());
        assert_ne!(first, tx(0).safe_tx_hash(safe(), 5).unwrap());
    }

    #[test]
    fn it_rejects_non_decimal_quantities() {
        let mut bad = tx(0);
        bad.core.value = serde_json::from_str("\"0x10\"").unwrap();
        assert!(matches!(
            bad.safe_tx_hash(safe(), 1),
            Err(ContractError::InvalidDecimal(_))
        ));
    }

    #[test]
    fn it_rejects_empty_quantities() {
        let mut bad = tx(0);
        bad.gas.base_gas = serde_json::from_str("\"\"").unwrap();
        assert!(matches!(
            bad.safe_tx_hash(safe(), 1),
            Err(ContractError::InvalidDecimal(_))
        ));
    }

    #[test]
    fn it_builds_proposals() {
        let sender: ChecksumAddress = "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB".parse().unwrap();
        let req = tx(3)
            .into_request(safe(), 1, sender, None)
            .unwrap()
            .origin("{\"name\":\"test\"}");
        assert!(req.has_valid_hash(safe(), 1).unwrap());
        assert!(!req.has_valid_hash(safe(), 100).unwrap());

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["to"], "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359");
        assert_eq!(json["value"], "1000");
        assert_eq!(json["nonce"], "3");
        assert_eq!(json["operation"], 0);
        assert_eq!(json["safeTxGas"], "0");
        assert_eq!(json["gasToken"], "0x0000000000000000000000000000000000000000");
        assert_eq!(json["sender"], "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB");
        assert!(json.get("data").is_none());
        assert!(json.get("refundReceiver").is_none());

        let back: MultisigTransactionRequest = serde_json::from_value(json).unwrap();
        assert_eq!(back, req);
    }
}
