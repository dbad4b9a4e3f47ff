use crate::rpc::common::Cursor;

path_params! {
    /// `{chainId}`
    pub struct ChainPath {
        /// A unique value identifying the chain
        chain_id = "chainId",
    }
}

path_params! {
    /// `{chainId}` and `{address}`
    pub struct ChainAddressPath {
        /// A unique value identifying the chain
        chain_id = "chainId",
        /// Checksummed Safe or owner address
        address = "address",
    }
}

path_params! {
    /// `{chainId}`, `{address}` and `{currency}`
    pub struct SafeBalancesPath {
        /// A unique value identifying the chain
        chain_id = "chainId",
        /// Checksummed Safe address
        address = "address",
        /// Fiat code, see the supported fiat codes endpoint
        currency = "currency",
    }
}

path_params! {
    /// `{chainId}` and `{safe_address}`
    pub struct ChainSafePath {
        /// A unique value identifying the chain
        chain_id = "chainId",
        /// Checksummed Safe address
        safe_address = "safe_address",
    }
}

path_params! {
    /// `{chainId}` and `{transactionId}`
    pub struct TransactionPath {
        /// A unique value identifying the chain
        chain_id = "chainId",
        /// Gateway transaction id or Safe tx hash
        transaction_id = "transactionId",
    }
}

path_params! {
    /// `{chainId}` and `{message_hash}`
    pub struct MessagePath {
        /// A unique value identifying the chain
        chain_id = "chainId",
        /// Safe message hash
        message_hash = "message_hash",
    }
}

path_params! {
    /// `{chainId}` and `{uuid}`
    pub struct DevicePath {
        /// A unique value identifying the chain
        chain_id = "chainId",
        /// Device UUID
        uuid = "uuid",
    }
}

path_params! {
    /// `{chainId}`, `{uuid}` and `{safe_address}`
    pub struct DeviceSafePath {
        /// A unique value identifying the chain
        chain_id = "chainId",
        /// Device UUID
        uuid = "uuid",
        /// Checksummed Safe address
        safe_address = "safe_address",
    }
}

query_params! {
    /// Token filters shared by balances and collectibles
    pub struct BalancesQuery {
        /// If `true` just trusted tokens will be returned
        trusted: bool = "trusted",
        /// If `true` spam tokens will not be returned
        exclude_spam: bool = "exclude_spam",
    }
}

query_params! {
    /// Incoming transfer filters
    pub struct IncomingTransfersQuery {
        /// Executed at or after this date
        execution_date_gte: String = "execution_date__gte",
        /// Executed at or before this date
        execution_date_lte: String = "execution_date__lte",
        /// Recipient
        to: String = "to",
        /// Token contract
        token_address: String = "token_address",
        /// Transferred amount, decimal string
        value: String = "value",
    }
}

query_params! {
    /// Module transaction filters
    pub struct ModuleTransactionsQuery {
        /// Module that executed the transaction
        module: String = "module",
        /// Call target
        to: String = "to",
    }
}

query_params! {
    /// Multisig transaction filters
    pub struct MultisigTransactionsQuery {
        /// Executed at or after this date
        execution_date_gte: String = "execution_date__gte",
        /// Executed at or before this date
        execution_date_lte: String = "execution_date__lte",
        /// Call target
        to: String = "to",
        /// Transferred amount, decimal string
        value: String = "value",
        /// Safe nonce
        nonce: String = "nonce",
        /// `"true"` or `"false"`
        executed: String = "executed",
    }
}

query_params! {
    /// History pagination
    pub struct HistoryQuery {
        /// Taken from a page's `next` or `previous`
        page_url: Cursor = "page_url",
    }
}

query_params! {
    /// Queue pagination and filters
    pub struct QueuedQuery {
        /// Taken from a page's `next` or `previous`
        page_url: Cursor = "page_url",
        /// If `true` only trusted transactions are returned
        trusted: bool = "trusted",
    }
}

query_params! {
    /// Chain list ordering and pagination
    pub struct ChainsQuery {
        /// Which field to use when ordering the results
        ordering: String = "ordering",
        /// Number of results to return per page
        limit: u64 = "limit",
        /// The initial index from which to return the results
        offset: u64 = "offset",
    }
}

query_params! {
    /// Safe Apps filters
    pub struct SafeAppsQuery {
        /// Client requesting the list
        client_url: String = "client_url",
        /// Only apps served from this url
        url: String = "url",
    }
}

query_params! {
    /// Message list pagination
    pub struct MessagesQuery {
        /// Taken from a page's `next` or `previous`
        page_url: Cursor = "page_url",
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::endpoints::{PathParams, QueryParams};

    #[test]
    fn it_maps_fields_to_placeholders() {
        let path = DeviceSafePath::new("1", "device", "0x38CD8Fa77ECEB4b1edB856Ed27aac6A6c6Dc88ca");
        assert_eq!(path.segment("uuid"), Some("device"));
        assert_eq!(path.segment("chainId"), Some("1"));
        assert_eq!(path.segment("chain_id"), None);
        assert_eq!(DeviceSafePath::KEYS, &["chainId", "uuid", "safe_address"]);
    }

    #[test]
    fn it_serializes_path_records_with_placeholder_names() {
        let path = TransactionPath::new("137", "multisig_0x1_0x2");
        assert_eq!(
            serde_json::to_value(&path).unwrap(),
            serde_json::json!({"chainId": "137", "transactionId": "multisig_0x1_0x2"})
        );
    }

    #[test]
    fn it_renders_only_set_query_keys() {
        let query = MultisigTransactionsQuery::default()
            .nonce("7")
            .execution_date_gte("2023-01-01");
        assert_eq!(
            query.pairs(),
            vec![
                ("execution_date__gte", "2023-01-01".to_owned()),
                ("nonce", "7".to_owned()),
            ]
        );
        assert!(MultisigTransactionsQuery::default().pairs().is_empty());
    }

    #[test]
    fn it_renders_primitives() {
        let query = ChainsQuery::default().limit(20u64).offset(40u64).ordering("chainId");
        assert_eq!(
            query.pairs(),
            vec![
                ("ordering", "chainId".to_owned()),
                ("limit", "20".to_owned()),
                ("offset", "40".to_owned()),
            ]
        );
        assert_eq!(
            BalancesQuery::default().exclude_spam(false).pairs(),
            vec![("exclude_spam", "false".to_owned())]
        );
    }

    #[test]
    fn it_serializes_query_records_without_unset_keys() {
        let query = BalancesQuery::default().trusted(true);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            serde_json::json!({"trusted": true})
        );
    }
}
