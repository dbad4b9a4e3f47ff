use serde::{Deserialize, Serialize};

use super::common::{ChecksumAddress, Page};

/// How an RPC uri expects to be authenticated
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RpcAuthentication {
    /// An API key is appended to the path
    ApiKeyPath,
    /// Public endpoint
    NoAuthentication,
    /// Anything else
    Unknown,
}

/// An RPC endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcUri {
    pub authentication: RpcAuthentication,
    pub value: String,
}

/// Block explorer links, with `{{address}}`, `{{txHash}}` style placeholders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockExplorerUriTemplate {
    pub address: String,
    pub tx_hash: String,
    pub api: String,
}

/// The chain's native currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub logo_uri: String,
}

/// Chain colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub text_color: String,
    pub background_color: String,
}

/// Gas price read from an external oracle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasPriceOracle {
    pub uri: String,
    /// Field of the oracle response holding the price
    pub gas_parameter: String,
    /// Multiplier from the oracle unit to wei
    pub gwei_factor: String,
}

/// A fixed legacy gas price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasPriceFixed {
    pub wei_value: String,
}

/// Fixed EIP-1559 fee parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasPriceFixedEip1559 {
    pub max_fee_per_gas: String,
    pub max_priority_fee_per_gas: String,
}

/// A gas price source the gateway does not describe
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GasPriceUnknown {}

tagged_union! {
    /// A gas price source, in order of preference in [`ChainInfo::gas_price`]
    pub enum GasPrice {
        /// `ORACLE`
        Oracle(GasPriceOracle) = "ORACLE",
        /// `FIXED`
        Fixed(GasPriceFixed) = "FIXED",
        /// `FIXED1559`
        FixedEip1559(GasPriceFixedEip1559) = "FIXED1559",
        /// `UNKNOWN`
        Unknown(GasPriceUnknown) = "UNKNOWN",
    }
}

/// Gateway configuration of a chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainInfo {
    pub transaction_service: String,
    pub chain_id: String,
    pub chain_name: String,
    pub short_name: String,
    pub l2: bool,
    pub description: String,
    #[serde(default)]
    pub chain_logo_uri: Option<String>,
    pub rpc_uri: RpcUri,
    pub safe_apps_rpc_uri: RpcUri,
    pub public_rpc_uri: RpcUri,
    pub block_explorer_uri_template: BlockExplorerUriTemplate,
    pub native_currency: NativeCurrency,
    pub theme: Theme,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ens_registry_address: Option<ChecksumAddress>,
    pub gas_price: Vec<GasPrice>,
    pub disabled_wallets: Vec<String>,
    /// Feature flags. Kept as strings: the gateway adds flags over time.
    pub features: Vec<String>,
}

impl ChainInfo {
    /// True if the gateway enables `feature` on this chain
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }

    /// The first gas price source the gateway lists
    pub fn preferred_gas_price(&self) -> Option<&GasPrice> {
        self.gas_price.first()
    }
}

/// Supported chains
pub type ChainListResponse = Page<ChainInfo>;
