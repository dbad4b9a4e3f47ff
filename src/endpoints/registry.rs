//! The gateway's endpoints. Adding a row here declares its type, its
//! `Endpoint` impl and its `REGISTRY` entry at once.

use super::{
    params::{
        BalancesQuery, ChainAddressPath, ChainPath, ChainSafePath, ChainsQuery, DevicePath,
        DeviceSafePath, HistoryQuery, IncomingTransfersQuery, MessagePath, MessagesQuery,
        ModuleTransactionsQuery, MultisigTransactionsQuery, QueuedQuery, SafeAppsQuery,
        SafeBalancesPath, TransactionPath,
    },
    NoBody, NoContent, NoPathParams, NoQuery,
};
use crate::rpc::{
    balances::{
        FiatCurrencies, OwnedSafes, SafeBalanceResponse, SafeCollectiblesPage,
        SafeCollectiblesResponse,
    },
    chains::{ChainInfo, ChainListResponse},
    decoded_data::{DecodedDataRequest, DecodedDataResponse},
    delegates::{DelegateResponse, DelegatesRequest},
    estimate::{NoncesResponse, SafeTransactionEstimation, SafeTransactionEstimationRequest},
    history::{
        SafeIncomingTransfersResponse, SafeModuleTransactionsResponse,
        SafeMultisigTransactionsResponse, TransactionListPage,
    },
    info::SafeInfo,
    master_copies::MasterCopyResponse,
    messages::{
        ConfirmSafeMessageRequest, ProposeSafeMessageRequest, SafeMessage, SafeMessageListPage,
    },
    notifications::RegisterNotificationsRequest,
    propose::MultisigTransactionRequest,
    safe_apps::SafeAppsResponse,
    transactions::TransactionDetails,
};

request_body!(
    SafeTransactionEstimationRequest,
    MultisigTransactionRequest,
    DecodedDataRequest,
    ProposeSafeMessageRequest,
    ConfirmSafeMessageRequest,
    RegisterNotificationsRequest,
);

endpoints! {
    /// Get status of the safe
    SafesRead => Get "/v1/chains/{chainId}/safes/{address}" {
        operation: "safes_read",
        path: ChainAddressPath,
        query: NoQuery,
        body: NoBody,
        response: SafeInfo,
        // 422: checksum address validation failed, or Safe info unavailable
        errors: [404, 422],
    }

    /// Get balance for native and ERC20 tokens with fiat conversion
    SafesBalancesList => Get "/v1/chains/{chainId}/safes/{address}/balances/{currency}" {
        operation: "safes_balances_list",
        path: SafeBalancesPath,
        query: BalancesQuery,
        body: NoBody,
        response: SafeBalanceResponse,
        errors: [404, 422],
    }

    /// Get filterable incoming transfers
    IncomingTransfers => Get "/v1/chains/{chainId}/safes/{address}/incoming-transfers/" {
        operation: "incoming_transfers",
        path: ChainAddressPath,
        query: IncomingTransfersQuery,
        body: NoBody,
        response: SafeIncomingTransfersResponse,
        errors: [404, 422],
    }

    /// Get filterable module transactions
    ModuleTransactions => Get "/v1/chains/{chainId}/safes/{address}/module-transactions/" {
        operation: "module_transactions",
        path: ChainAddressPath,
        query: ModuleTransactionsQuery,
        body: NoBody,
        response: SafeModuleTransactionsResponse,
        errors: [404, 422],
    }

    /// Get filterable multisig transactions
    MultisigTransactions => Get "/v1/chains/{chainId}/safes/{address}/multisig-transactions/" {
        operation: "multisig_transactions",
        path: ChainAddressPath,
        query: MultisigTransactionsQuery,
        body: NoBody,
        response: SafeMultisigTransactionsResponse,
        errors: [404, 422],
    }

    /// Fiat codes accepted by the balances endpoint
    GetSupportedFiat => Get "/v1/balances/supported-fiat-codes" {
        operation: "get_supported_fiat",
        path: NoPathParams,
        query: NoQuery,
        body: NoBody,
        response: FiatCurrencies,
        errors: [],
    }

    /// Get collectibles (ERC721 tokens) and information about them
    SafesCollectiblesList => Get "/v1/chains/{chainId}/safes/{address}/collectibles" {
        operation: "safes_collectibles_list",
        path: ChainAddressPath,
        query: BalancesQuery,
        body: NoBody,
        response: SafeCollectiblesResponse,
        errors: [404, 422],
    }

    /// Get collectibles (ERC721 tokens), one page at a time
    SafesCollectiblesListPaginated => Get "/v2/chains/{chainId}/safes/{address}/collectibles" {
        operation: "safes_collectibles_list_paginated",
        path: ChainAddressPath,
        query: BalancesQuery,
        body: NoBody,
        response: SafeCollectiblesPage,
        errors: [404, 422],
    }

    /// Executed transactions, grouped under date labels
    HistoryTransactions => Get "/v1/chains/{chainId}/safes/{safe_address}/transactions/history" {
        operation: "history_transactions",
        path: ChainSafePath,
        query: HistoryQuery,
        body: NoBody,
        response: TransactionListPage,
        errors: [],
    }

    /// Pending transactions, grouped under labels and conflict headers
    QueuedTransactions => Get "/v1/chains/{chainId}/safes/{safe_address}/transactions/queued" {
        operation: "queued_transactions",
        path: ChainSafePath,
        query: QueuedQuery,
        body: NoBody,
        response: TransactionListPage,
        errors: [],
    }

    /// Details of a single transaction
    GetTransactions => Get "/v1/chains/{chainId}/transactions/{transactionId}" {
        operation: "get_transactions",
        path: TransactionPath,
        query: NoQuery,
        body: NoBody,
        response: TransactionDetails,
        errors: [],
    }

    /// Estimate `safeTxGas` and the recommended nonce for a transaction
    PostSafeGasEstimation => Post "/v2/chains/{chainId}/safes/{safe_address}/multisig-transactions/estimations" {
        operation: "post_safe_gas_estimation",
        path: ChainSafePath,
        query: NoQuery,
        body: SafeTransactionEstimationRequest,
        response: SafeTransactionEstimation,
        errors: [404, 422],
    }

    /// Propose a signed multisig transaction
    ProposeTransaction => Post "/v1/chains/{chainId}/transactions/{safe_address}/propose" {
        operation: "propose_transaction",
        path: ChainSafePath,
        query: NoQuery,
        body: MultisigTransactionRequest,
        response: TransactionDetails,
        errors: [404, 422],
    }

    /// Safes owned by an address
    GetOwnedSafes => Get "/v1/chains/{chainId}/owners/{address}/safes" {
        operation: "get_owned_safes",
        path: ChainAddressPath,
        query: NoQuery,
        body: NoBody,
        response: OwnedSafes,
        errors: [],
    }

    /// Supported chains
    ChainsList => Get "/v1/chains" {
        operation: "chains_list",
        path: NoPathParams,
        query: ChainsQuery,
        body: NoBody,
        response: ChainListResponse,
        errors: [],
    }

    /// Configuration of a single chain
    ChainsRead => Get "/v1/chains/{chainId}" {
        operation: "chains_read",
        path: ChainPath,
        query: NoQuery,
        body: NoBody,
        response: ChainInfo,
        errors: [],
    }

    /// Safe Apps available on a chain
    SafeAppsRead => Get "/v1/chains/{chainId}/safe-apps" {
        operation: "safe_apps_read",
        path: ChainPath,
        query: SafeAppsQuery,
        body: NoBody,
        response: SafeAppsResponse,
        errors: [],
    }

    /// Safe singletons deployed on a chain
    MasterCopies => Get "/v1/chains/{chainId}/about/master-copies" {
        operation: "master_copies",
        path: ChainPath,
        query: NoQuery,
        body: NoBody,
        response: MasterCopyResponse,
        errors: [],
    }

    /// Decode calldata
    DataDecoder => Post "/v1/chains/{chainId}/data-decoder" {
        operation: "data_decoder",
        path: ChainPath,
        query: NoQuery,
        body: DecodedDataRequest,
        response: DecodedDataResponse,
        errors: [],
    }

    /// Messages of a Safe, grouped under date labels
    GetSafeMessages => Get "/v1/chains/{chainId}/safes/{safe_address}/messages" {
        operation: "get_safe_messages",
        path: ChainSafePath,
        query: MessagesQuery,
        body: NoBody,
        response: SafeMessageListPage,
        errors: [],
    }

    /// Propose a new off-chain message
    ProposeSafeMessage => Post "/v1/chains/{chainId}/safes/{safe_address}/messages" {
        operation: "propose_safe_message",
        path: ChainSafePath,
        query: NoQuery,
        body: ProposeSafeMessageRequest,
        response: NoContent,
        errors: [],
    }

    /// A single off-chain message
    GetSafeMessage => Get "/v1/chains/{chainId}/messages/{message_hash}" {
        operation: "get_safe_message",
        path: MessagePath,
        query: NoQuery,
        body: NoBody,
        response: SafeMessage,
        errors: [],
    }

    /// Add an owner signature to a message
    ConfirmSafeMessage => Post "/v1/chains/{chainId}/messages/{message_hash}/signatures" {
        operation: "confirm_safe_message",
        path: MessagePath,
        query: NoQuery,
        body: ConfirmSafeMessageRequest,
        response: NoContent,
        errors: [],
    }

    /// Delegates matching the filters
    GetDelegates => Get "/v1/chains/{chainId}/delegates" {
        operation: "get_delegates",
        path: ChainPath,
        query: DelegatesRequest,
        body: NoBody,
        response: DelegateResponse,
        errors: [],
    }

    /// Register a device for push notifications
    RegisterDevice => Post "/v1/register/notifications" {
        operation: "register_device",
        path: NoPathParams,
        query: NoQuery,
        body: RegisterNotificationsRequest,
        response: NoContent,
        errors: [],
    }

    /// Stop notifications about one Safe on a device
    UnregisterSafe => Delete "/v1/chains/{chainId}/notifications/devices/{uuid}/safes/{safe_address}" {
        operation: "unregister_safe",
        path: DeviceSafePath,
        query: NoQuery,
        body: NoBody,
        response: NoContent,
        errors: [],
    }

    /// Unregister a device
    UnregisterDevice => Delete "/v1/chains/{chainId}/notifications/devices/{uuid}" {
        operation: "unregister_device",
        path: DevicePath,
        query: NoQuery,
        body: NoBody,
        response: NoContent,
        errors: [],
    }

    /// Current and recommended nonce of a Safe
    GetNonces => Get "/v1/chains/{chainId}/safes/{safe_address}/nonces" {
        operation: "get_nonces",
        path: ChainSafePath,
        query: NoQuery,
        body: NoBody,
        response: NoncesResponse,
        errors: [],
    }
}
