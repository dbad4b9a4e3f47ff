//! Transaction list pages: history, queue and the per-kind listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    common::Page,
    messages::millis_to_date,
    transactions::{
        ConflictType, ExecutionInfo, TransactionInfo, TransactionSummary, Transfer,
        TransferDirection,
    },
};
use crate::request::{ContractError, ContractResult};

/// A transaction entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub transaction: TransactionSummary,
    pub conflict_type: ConflictType,
}

/// Date separator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateLabel {
    /// Milliseconds since epoch
    pub timestamp: u64,
}

impl DateLabel {
    /// The label's date
    pub fn date(&self) -> Option<DateTime<Utc>> {
        millis_to_date(self.timestamp)
    }
}

/// Queue section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabelValue {
    Queued,
    Next,
}

/// Queue section header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub label: LabelValue,
}

/// Header of a group of queued transactions sharing a nonce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictHeader {
    pub nonce: u64,
}

tagged_union! {
    /// An entry of a history or queue page
    pub enum TransactionListItem {
        /// `TRANSACTION`
        Transaction(Transaction) = "TRANSACTION",
        /// `DATE_LABEL`
        DateLabel(DateLabel) = "DATE_LABEL",
        /// `LABEL`
        Label(Label) = "LABEL",
        /// `CONFLICT_HEADER`
        ConflictHeader(ConflictHeader) = "CONFLICT_HEADER",
    }
}

impl TransactionListItem {
    /// The transaction, if this entry is one
    pub fn as_transaction(&self) -> Option<&Transaction> {
        match self {
            TransactionListItem::Transaction(tx) => Some(tx),
            _ => None,
        }
    }
}

/// A page of history or queue entries
pub type TransactionListPage = Page<TransactionListItem>;

fn transfer_of(tx: &Transaction) -> Option<&Transfer> {
    match &tx.transaction.tx_info {
        TransactionInfo::Transfer(transfer) => Some(transfer),
        _ => None,
    }
}

fn check_incoming(tx: &Transaction) -> Result<(), &'static str> {
    let transfer = transfer_of(tx).ok_or("txInfo is not a Transfer")?;
    if transfer.direction != TransferDirection::Incoming {
        return Err("direction is not INCOMING");
    }
    Ok(())
}

fn check_module(tx: &Transaction) -> Result<(), &'static str> {
    transfer_of(tx).ok_or("txInfo is not a Transfer")?;
    match tx.transaction.execution_info {
        None | Some(ExecutionInfo::Module(_)) => Ok(()),
        Some(_) => Err("executionInfo is not MODULE"),
    }
}

fn check_multisig(tx: &Transaction) -> Result<(), &'static str> {
    let transfer = transfer_of(tx).ok_or("txInfo is not a Transfer")?;
    if transfer.direction != TransferDirection::Outgoing {
        return Err("direction is not OUTGOING");
    }
    match tx.transaction.execution_info {
        None | Some(ExecutionInfo::Multisig(_)) => Ok(()),
        Some(_) => Err("executionInfo is not MULTISIG"),
    }
}

macro_rules! transaction_refinement {
    ($(
        $(#[$meta:meta])*
        $name:ident => $check:ident
    ),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
            #[serde(try_from = "TransactionListItem", into = "TransactionListItem")]
            pub struct $name(Transaction);

            impl $name {
                /// The transfer this entry carries
                pub fn transfer(&self) -> &Transfer {
                    match &self.0.transaction.tx_info {
                        TransactionInfo::Transfer(transfer) => transfer,
                        _ => unreachable!("checked on construction"),
                    }
                }

                /// Back to the base shape
                pub fn into_inner(self) -> Transaction {
                    self.0
                }
            }

            impl TryFrom<Transaction> for $name {
                type Error = ContractError;

                fn try_from(tx: Transaction) -> ContractResult<Self> {
                    $check(&tx).map_err(|reason| ContractError::Refinement {
                        refinement: stringify!($name),
                        reason,
                    })?;
                    Ok(Self(tx))
                }
            }

            impl TryFrom<TransactionListItem> for $name {
                type Error = ContractError;

                fn try_from(item: TransactionListItem) -> ContractResult<Self> {
                    match item {
                        TransactionListItem::Transaction(tx) => tx.try_into(),
                        _ => Err(ContractError::Refinement {
                            refinement: stringify!($name),
                            reason: "entry is not a TRANSACTION",
                        }),
                    }
                }
            }

            impl From<$name> for Transaction {
                fn from(val: $name) -> Self {
                    val.0
                }
            }

            impl From<$name> for TransactionListItem {
                fn from(val: $name) -> Self {
                    TransactionListItem::Transaction(val.0)
                }
            }

            impl std::ops::Deref for $name {
                type Target = Transaction;

                fn deref(&self) -> &Self::Target {
                    &self.0
                }
            }
        )+
    };
}

transaction_refinement! {
    /// A transfer into the Safe
    IncomingTransfer => check_incoming,
    /// A transfer executed by a module
    ModuleTransaction => check_module,
    /// An outgoing transfer executed through owner confirmations
    MultisigTransaction => check_multisig,
}

/// Page of incoming transfers
pub type SafeIncomingTransfersResponse = Page<IncomingTransfer>;

/// Page of module transactions
pub type SafeModuleTransactionsResponse = Page<ModuleTransaction>;

/// Page of multisig transactions
pub type SafeMultisigTransactionsResponse = Page<MultisigTransaction>;

#[cfg(test)]
mod test {
    use super::*;
    use crate::rpc::common::Discriminated;

    fn transfer(direction: &str, execution_info: serde_json::Value) -> serde_json::Value {
        serde_json::json!({
            "type": "TRANSACTION",
            "conflictType": "None",
            "transaction": {
                "id": "multisig_0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed_0x01",
                "timestamp": 1675354500000u64,
                "txStatus": "SUCCESS",
                "txInfo": {
                    "type": "Transfer",
                    "sender": {"value": "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"},
                    "recipient": {"value": "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359"},
                    "direction": direction,
                    "transferInfo": {"type": "NATIVE_COIN", "value": "1000000000000000000"}
                },
                "executionInfo": execution_info
            }
        })
    }

    fn multisig_info() -> serde_json::Value {
        serde_json::json!({
            "type": "MULTISIG",
            "nonce": 7,
            "confirmationsRequired": 2,
            "confirmationsSubmitted": 2
        })
    }

    #[test]
    fn it_reads_queue_pages() {
        let page: TransactionListPage = serde_json::from_value(serde_json::json!({
            "next": null,
            "previous": null,
            "results": [
                {"type": "LABEL", "label": "Next"},
                {"type": "CONFLICT_HEADER", "nonce": 7},
                transfer("OUTGOING", multisig_info()),
                {"type": "DATE_LABEL", "timestamp": 0}
            ]
        }))
        .unwrap();
        let tags: Vec<_> = page.results.iter().map(|i| i.discriminator()).collect();
        assert_eq!(tags, ["LABEL", "CONFLICT_HEADER", "TRANSACTION", "DATE_LABEL"]);

        let tx = page.results[2].as_transaction().unwrap();
        assert_eq!(tx.transaction.multisig_nonce(), Some(7));
        assert!(!tx.transaction.is_module_triggered());
    }

    #[test]
    fn it_narrows_incoming_transfers() {
        let incoming: IncomingTransfer =
            serde_json::from_value(transfer("INCOMING", serde_json::Value::Null)).unwrap();
        assert_eq!(incoming.transfer().direction, TransferDirection::Incoming);
        assert_eq!(incoming.conflict_type, ConflictType::None);

        assert!(
            serde_json::from_value::<IncomingTransfer>(transfer("OUTGOING", serde_json::Value::Null))
                .is_err()
        );
    }

    #[test]
    fn it_narrows_multisig_transactions() {
        let item: TransactionListItem =
            serde_json::from_value(transfer("OUTGOING", multisig_info())).unwrap();
        let multisig = MultisigTransaction::try_from(item.clone()).unwrap();
        assert_eq!(multisig.transaction.multisig_nonce(), Some(7));
        assert_eq!(TransactionListItem::from(multisig), item);

        let module = serde_json::json!({
            "type": "MODULE",
            "address": {"value": "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB"}
        });
        let item: TransactionListItem = serde_json::from_value(transfer("OUTGOING", module)).unwrap();
        assert!(matches!(
            MultisigTransaction::try_from(item.clone()),
            Err(ContractError::Refinement { reason: "executionInfo is not MULTISIG", .. })
        ));
        assert!(ModuleTransaction::try_from(item).unwrap().transaction.is_module_triggered());
    }

    #[test]
    fn it_serializes_refinements_as_list_items() {
        let json = transfer("INCOMING", serde_json::Value::Null);
        let incoming: IncomingTransfer = serde_json::from_value(json).unwrap();
        let out = serde_json::to_value(&incoming).unwrap();
        assert_eq!(out["type"], "TRANSACTION");
        assert_eq!(out["transaction"]["txInfo"]["direction"], "INCOMING");
    }

    #[test]
    fn it_rejects_labels_as_refinements() {
        let label = TransactionListItem::Label(Label {
            label: LabelValue::Queued,
        });
        assert!(ModuleTransaction::try_from(label).is_err());
    }
}
