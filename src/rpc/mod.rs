/// Common RPC types
pub mod common;

/// General Safe Info
pub mod info;

/// Token Info
pub mod tokens;

/// Balances and collectibles of a safe.
pub mod balances;

/// Chain configuration
pub mod chains;

/// Safe Apps
pub mod safe_apps;

/// Safe singletons
pub mod master_copies;

/// Calldata decoding
pub mod decoded_data;

/// Human readable transaction descriptions
pub mod human_description;

/// Transaction info, execution info and details
pub mod transactions;

/// History and queue pages of Safe transactions
pub mod history;

/// Propose Safe msig transactions
pub mod propose;

/// Estimates `safe_tx_gas` for an msig txn
pub mod estimate;

/// Off-chain Safe messages
pub mod messages;

/// Delegates
pub mod delegates;

/// Push notification registration
pub mod notifications;
