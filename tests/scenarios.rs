use safe_gateway_contract::{
    endpoints::{
        params::{BalancesQuery, ChainAddressPath, ChainSafePath, HistoryQuery, SafeBalancesPath},
        HistoryTransactions, NoContent, PostSafeGasEstimation, ProposeTransaction,
        RegisterDevice, SafesBalancesList, SafesRead, UnregisterDevice,
    },
    networks::{ETHEREUM, PRODUCTION},
    rpc::{
        common::{ChecksumAddress, Operation},
        estimate::SafeTransactionEstimationRequest,
        history::{IncomingTransfer, TransactionListItem},
        propose::{MetaTransaction, SafeGasConfig, SafeTransactionData},
        transactions::{Cancellation, Custom, MultiSend, TransactionInfo},
    },
    ContractError, Endpoint, Method, Request,
};
use tracing_test::traced_test;

pub const SAFE_ADDRESS: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
pub const OWNER_ADDRESS: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";

const BALANCES: &str = r#"{
    "fiatTotal": "1850.12",
    "items": [
        {
            "tokenInfo": {
                "type": "NATIVE_TOKEN",
                "address": "0x0000000000000000000000000000000000000000",
                "decimals": 18,
                "symbol": "ETH",
                "name": "Ether",
                "logoUri": null
            },
            "balance": "1000000000000000000",
            "fiatBalance": "1850.12",
            "fiatConversion": "1850.12"
        }
    ]
}"#;

#[test]
#[traced_test]
fn it_renders_and_decodes_balances() {
    let req = Request::<SafesBalancesList>::new(SafeBalancesPath::new(
        ETHEREUM.chain_id_segment(),
        SAFE_ADDRESS,
        "USD",
    ))
    .with_query(BalancesQuery::default().trusted(true));

    let rendered = req.render(&PRODUCTION.base_url().unwrap()).unwrap();
    assert_eq!(rendered.method, Method::Get);
    assert_eq!(
        rendered.url.as_str(),
        format!("https://safe-client.safe.global/v1/chains/1/safes/{SAFE_ADDRESS}/balances/USD?trusted=true")
    );
    assert!(logs_contain("safes_balances_list"));

    let balances = SafesBalancesList::decode_response(200, BALANCES).unwrap();
    assert_eq!(balances.fiat_total, "1850.12");
    assert!(balances.items[0].token_info.is_native());
    assert_eq!(
        balances.items[0].balance.to_u256().unwrap(),
        ethers::types::U256::exp10(18)
    );
}

#[test]
#[traced_test]
fn it_warns_on_malformed_success_bodies() {
    let err = SafesBalancesList::decode_response(200, r#"{"items":[]}"#).unwrap_err();
    assert!(matches!(err, ContractError::SerdeError(_)));
    assert!(logs_contain("Unexpected response from server"));
}

#[test]
fn it_keeps_error_bodies_opaque() {
    let body = r#"{"code":1,"message":"Checksum address validation failed"}"#;
    let err = SafesRead::decode_response(422, body).unwrap_err();
    match &err {
        ContractError::ErrorStatus {
            operation,
            status,
            body: raw,
        } => {
            assert_eq!(*operation, "safes_read");
            assert_eq!(*status, 422);
            assert_eq!(raw, body);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(err.is_validation_failure());

    let err = SafesRead::decode_response(404, "").unwrap_err();
    assert!(err.is_not_found());

    let err = SafesRead::decode_response(500, "boom").unwrap_err();
    assert!(matches!(
        err,
        ContractError::UndocumentedStatus { status: 500, .. }
    ));

    // history documents no error status at all
    let err = HistoryTransactions::decode_response(404, "").unwrap_err();
    assert!(matches!(err, ContractError::UndocumentedStatus { .. }));
}

#[test]
fn it_accepts_void_responses() {
    assert_eq!(RegisterDevice::decode_response(200, "").unwrap(), NoContent);
    assert_eq!(UnregisterDevice::decode_response(200, "{}").unwrap(), NoContent);
}

#[test]
fn it_passes_cursors_back_verbatim() {
    let cursor = "https://safe-client.safe.global/v1/chains/1/safes/0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed/transactions/history?cursor=limit%3D20%26offset%3D20";
    let body = format!(
        r#"{{"next":"{cursor}","previous":null,"results":[{{"type":"DATE_LABEL","timestamp":1675354500000}}]}}"#
    );
    let page = HistoryTransactions::decode_response(200, &body).unwrap();
    assert!(matches!(page.results[0], TransactionListItem::DateLabel(_)));

    let next = page.next.clone().unwrap();
    assert_eq!(next.as_str(), cursor);

    let rendered = Request::<HistoryTransactions>::new(ChainSafePath::new("1", SAFE_ADDRESS))
        .with_query(HistoryQuery::default().page_url(next))
        .render(&PRODUCTION.base_url().unwrap())
        .unwrap();
    let (key, value) = rendered.url.query_pairs().next().unwrap();
    assert_eq!(key, "page_url");
    assert_eq!(value, cursor);
}

#[test]
fn it_rejects_unknown_transaction_info() {
    let unknown = r#"{"type":"SwapOrder","uid":"0x01"}"#;
    assert!(serde_json::from_str::<TransactionInfo>(unknown).is_err());
}

#[test]
fn it_validates_estimation_operations() {
    let body = |operation: u8| {
        format!(
            r#"{{"to":"{OWNER_ADDRESS}","value":"0","data":"0x","operation":{operation}}}"#
        )
    };
    for (operation, expected) in [(0, Operation::Call), (1, Operation::DelegateCall)] {
        let req: SafeTransactionEstimationRequest =
            serde_json::from_str(&body(operation)).unwrap();
        assert_eq!(req.operation, expected);
    }
    assert!(serde_json::from_str::<SafeTransactionEstimationRequest>(&body(2)).is_err());
}

#[test]
fn it_renders_gas_estimations_and_proposals() {
    let tx = SafeTransactionData {
        core: MetaTransaction {
            to: OWNER_ADDRESS.parse().unwrap(),
            value: 381832418u64.into(),
            data: Some("0xdeadbeefdeadbeef".parse().unwrap()),
            operation: Operation::DelegateCall,
        },
        gas: SafeGasConfig::default(),
        nonce: 12u64.into(),
    };
    let path = ChainSafePath::new("1", SAFE_ADDRESS);
    let base = PRODUCTION.base_url().unwrap();

    let estimation = Request::<PostSafeGasEstimation>::with_body(
        path.clone(),
        SafeTransactionEstimationRequest::from(&tx),
    )
    .render(&base)
    .unwrap();
    assert_eq!(estimation.method, Method::Post);
    assert_eq!(
        estimation.url.path(),
        format!("/v2/chains/1/safes/{SAFE_ADDRESS}/multisig-transactions/estimations")
    );
    let body: serde_json::Value = serde_json::from_str(estimation.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["operation"], 1);
    assert_eq!(body["data"], "0xdeadbeefdeadbeef");
    assert_eq!(body["value"], "381832418");

    let sender: ChecksumAddress = OWNER_ADDRESS.parse().unwrap();
    let safe: ChecksumAddress = SAFE_ADDRESS.parse().unwrap();
    let proposal = tx.into_request(*safe, 1, sender, None).unwrap();
    let rendered = Request::<ProposeTransaction>::with_body(path, proposal.clone())
        .render(&base)
        .unwrap();
    assert_eq!(
        rendered.url.path(),
        format!("/v1/chains/1/transactions/{SAFE_ADDRESS}/propose")
    );
    let body: serde_json::Value = serde_json::from_str(rendered.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["nonce"], "12");
    assert_eq!(body["sender"], OWNER_ADDRESS);
    assert_eq!(
        body["safeTxHash"],
        serde_json::to_value(proposal.safe_tx_hash).unwrap()
    );
}

#[test]
fn it_treats_refinements_as_their_base() {
    let custom = r#"{
        "type": "Custom",
        "to": {"value": "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb", "name": "MultiSendCallOnly"},
        "dataSize": "484",
        "value": "0",
        "methodName": "multiSend",
        "actionCount": 2,
        "isCancellation": false
    }"#;

    let batch: MultiSend = serde_json::from_str(custom).unwrap();
    assert_eq!(batch.action_count(), 2);
    assert_eq!(batch.to.name.as_deref(), Some("MultiSendCallOnly"));

    let as_base: TransactionInfo = serde_json::from_str(&serde_json::to_string(&batch).unwrap()).unwrap();
    assert_eq!(as_base, TransactionInfo::Custom(Custom::from(batch)));

    let err = serde_json::from_str::<Cancellation>(custom).unwrap_err();
    assert!(err.to_string().contains("isCancellation"));
}

#[test]
fn it_narrows_incoming_transfer_pages() {
    let body = r#"{
        "next": null,
        "previous": null,
        "results": [{
            "type": "TRANSACTION",
            "conflictType": "None",
            "transaction": {
                "id": "transfer_0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed_e1",
                "timestamp": 1675354500000,
                "txStatus": "SUCCESS",
                "txInfo": {
                    "type": "Transfer",
                    "sender": {"value": "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359"},
                    "recipient": {"value": "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"},
                    "direction": "INCOMING",
                    "transferInfo": {
                        "type": "ERC20",
                        "tokenAddress": "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
                        "tokenSymbol": "USDC",
                        "decimals": 6,
                        "value": "2500000"
                    }
                }
            }
        }]
    }"#;
    let page = safe_gateway_contract::endpoints::IncomingTransfers::decode_response(200, body).unwrap();
    let transfer: &IncomingTransfer = &page.results[0];
    assert_eq!(transfer.transfer().recipient.value.to_string(), SAFE_ADDRESS);
    assert!(!transfer.transaction.is_module_triggered());

    let outgoing = body.replace("INCOMING", "OUTGOING");
    assert!(matches!(
        safe_gateway_contract::endpoints::IncomingTransfers::decode_response(200, &outgoing),
        Err(ContractError::SerdeError(_))
    ));
}

#[test]
fn it_requires_checksummed_route_addresses() {
    assert!(ChecksumAddress::from_checksummed(SAFE_ADDRESS).is_ok());
    assert!(matches!(
        ChecksumAddress::from_checksummed(&SAFE_ADDRESS.to_lowercase()),
        Err(ContractError::ChecksumMismatch(_))
    ));

    let path = ChainAddressPath::new("1", ChecksumAddress::from_checksummed(OWNER_ADDRESS).unwrap().to_string());
    assert_eq!(path.address, OWNER_ADDRESS);
}
