use serde::{Deserialize, Serialize};

use super::{
    common::{ChecksumAddress, DecimalString, Page},
    tokens::TokenInfo,
};

/// Fiat codes accepted by the balances endpoint, e.g. `USD`
pub type FiatCurrencies = Vec<String>;

/// Balances of a Safe, converted to the requested fiat currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeBalanceResponse {
    /// Sum of all item fiat balances
    pub fiat_total: String,
    /// One entry per held token
    pub items: Vec<SafeBalanceItem>,
}

/// The individual response for every Safe token balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeBalanceItem {
    /// The token info
    pub token_info: TokenInfo,
    /// The balance of the safe for the token, in base units
    pub balance: DecimalString,
    /// The balance in the requested fiat currency
    pub fiat_balance: String,
    /// The conversion rate used to calculate the fiat balance
    pub fiat_conversion: String,
}

/// Safes an address owns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedSafes {
    /// Safe addresses
    pub safes: Vec<ChecksumAddress>,
}

/// A collectible (ERC721 token) held by a Safe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeCollectibleResponse {
    /// Token contract
    pub address: ChecksumAddress,
    /// Collection name
    pub token_name: String,
    /// Collection symbol
    pub token_symbol: String,
    /// Collection logo
    pub logo_uri: String,
    /// Token id
    pub id: DecimalString,
    /// Token metadata uri
    #[serde(default)]
    pub uri: Option<String>,
    /// Token name
    #[serde(default)]
    pub name: Option<String>,
    /// Token description
    #[serde(default)]
    pub description: Option<String>,
    /// Token image
    #[serde(default)]
    pub image_uri: Option<String>,
    /// Raw metadata
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

/// Unpaginated collectibles
pub type SafeCollectiblesResponse = Vec<SafeCollectibleResponse>;

/// Paginated collectibles
pub type SafeCollectiblesPage = Page<SafeCollectibleResponse>;
