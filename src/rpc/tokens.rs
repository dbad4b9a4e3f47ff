use serde::{Deserialize, Serialize};

use super::common::ChecksumAddress;

/// The type of the token (ERC20, ERC721, native)
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    /// ERC20 type
    #[serde(rename = "ERC20")]
    Erc20,
    /// ERC721 type
    #[serde(rename = "ERC721")]
    Erc721,
    /// The chain's native currency
    NativeToken,
}

/// Token info, as embedded in balances and gas token details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    /// The token type (ERC20, ERC721, native)
    #[serde(rename = "type")]
    pub token_type: TokenType,
    /// The address of the token, zero for the native token
    pub address: ChecksumAddress,
    /// The number of decimals of the token
    #[serde(default)]
    pub decimals: Option<u32>,
    /// The symbol of the token
    pub symbol: String,
    /// The name of the token
    pub name: String,
    /// The Logo URI of the token, if it exists
    #[serde(default)]
    pub logo_uri: Option<String>,
}

impl TokenInfo {
    /// True for the chain's native currency
    pub fn is_native(&self) -> bool {
        self.token_type == TokenType::NativeToken
    }
}
