use std::collections::HashSet;

use safe_gateway_contract::{
    endpoints::{self, PathParams, QueryParams},
    rpc::{
        chains::GasPrice,
        common::Discriminated,
        history::TransactionListItem,
        human_description::RichDecodedInfoFragment,
        messages::SafeMessageListItem,
        safe_apps::SafeAppAccessPolicy,
        transactions::{
            DetailedExecutionInfo, ExecutionInfo, SettingsInfo, TransactionInfo, TransferInfo,
        },
    },
    Endpoint, Method, REGISTRY,
};

#[test]
fn it_declares_every_placeholder() {
    for row in REGISTRY {
        let placeholders: Vec<_> = row.placeholders().collect();
        match row.path_parameters {
            None => assert!(placeholders.is_empty(), "{row} has undeclared placeholders"),
            Some(keys) => {
                assert!(!placeholders.is_empty(), "{row} declares keys but has no placeholders");
                assert_eq!(
                    placeholders.iter().collect::<HashSet<_>>(),
                    keys.iter().collect::<HashSet<_>>(),
                    "{row}"
                );
            }
        }
    }
}

#[test]
fn it_has_one_row_per_path_and_method() {
    let mut seen = HashSet::new();
    for row in REGISTRY {
        assert!(seen.insert((row.path, row.method)), "{row} is declared twice");
    }
    let operations: HashSet<_> = REGISTRY.iter().map(|row| row.operation).collect();
    assert_eq!(operations.len(), REGISTRY.len());
    assert_eq!(REGISTRY.len(), 28);
}

#[test]
fn it_only_sends_bodies_with_post() {
    for row in REGISTRY {
        assert_eq!(row.body.is_some(), row.method == Method::Post, "{row}");
    }
}

#[test]
fn it_documents_error_statuses() {
    let safes_read = endpoints::by_operation("safes_read").unwrap();
    assert_eq!(safes_read.error_statuses, &[404, 422]);

    let nonces = endpoints::by_operation("get_nonces").unwrap();
    assert!(nonces.error_statuses.is_empty());

    for row in REGISTRY {
        assert!(row
            .error_statuses
            .iter()
            .all(|status| *status == 404 || *status == 422));
    }
}

#[test]
fn it_describes_typed_endpoints() {
    type Balances = endpoints::SafesBalancesList;
    assert_eq!(Balances::OPERATION, "safes_balances_list");
    assert_eq!(Balances::PATH, "/v1/chains/{chainId}/safes/{address}/balances/{currency}");
    assert_eq!(
        <<Balances as Endpoint>::Path as PathParams>::KEYS,
        &["chainId", "address", "currency"]
    );
    assert_eq!(
        <<Balances as Endpoint>::Query as QueryParams>::KEYS,
        &["trusted", "exclude_spam"]
    );

    let row = endpoints::by_operation(Balances::OPERATION).unwrap();
    assert_eq!(row.response, "SafeBalanceResponse");
    assert_eq!(row.query_parameters, &["trusted", "exclude_spam"]);
}

#[test]
fn it_splits_shared_paths_by_method() {
    let path = "/v1/chains/{chainId}/safes/{safe_address}/messages";
    let get = endpoints::find(Method::Get, path).unwrap();
    let post = endpoints::find(Method::Post, path).unwrap();
    assert_eq!(get.operation, "get_safe_messages");
    assert_eq!(post.operation, "propose_safe_message");
    assert_eq!(post.body, Some("ProposeSafeMessageRequest"));
    assert!(endpoints::find(Method::Delete, path).is_none());
}

fn assert_unique<T: Discriminated>(family: &str) {
    let tags: HashSet<_> = T::DISCRIMINATORS.iter().collect();
    assert_eq!(tags.len(), T::DISCRIMINATORS.len(), "{family} repeats a discriminator");
}

#[test]
fn it_keeps_discriminators_unique() {
    assert_unique::<TransferInfo>("TransferInfo");
    assert_unique::<SettingsInfo>("SettingsInfo");
    assert_unique::<TransactionInfo>("TransactionInfo");
    assert_unique::<ExecutionInfo>("ExecutionInfo");
    assert_unique::<DetailedExecutionInfo>("DetailedExecutionInfo");
    assert_unique::<TransactionListItem>("TransactionListItem");
    assert_unique::<SafeMessageListItem>("SafeMessageListItem");
    assert_unique::<GasPrice>("GasPrice");
    assert_unique::<SafeAppAccessPolicy>("SafeAppAccessPolicy");
    assert_unique::<RichDecodedInfoFragment>("RichDecodedInfoFragment");

    assert_eq!(SettingsInfo::DISCRIMINATORS.len(), 10);
    assert_eq!(
        TransactionInfo::DISCRIMINATORS,
        &["Transfer", "SettingsChange", "Custom", "Creation"]
    );
}
