use std::{fmt::Display, str::FromStr};

use ethers::{
    abi::{InvalidOutputType, Token, Tokenizable},
    types::{Address, U256},
};
use serde::{Deserialize, Serialize};

use crate::request::{ContractError, ContractResult};

/// A closed family of records told apart by their `type` field
pub trait Discriminated {
    /// Every `type` literal of the family
    const DISCRIMINATORS: &'static [&'static str];

    /// The `type` literal of this value
    fn discriminator(&self) -> &'static str;
}

/// Safe operations
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Operation {
    /// CALL opcode
    #[default]
    Call = 0,
    /// DELEGATECALL opcode.
    /// Note: please exercise caution, as this can brick a SAFE
    DelegateCall = 1,
}

impl TryFrom<u8> for Operation {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Operation::Call),
            1 => Ok(Operation::DelegateCall),
            other => Err(other),
        }
    }
}

impl Tokenizable for Operation {
    fn from_token(token: Token) -> Result<Self, InvalidOutputType>
    where
        Self: Sized,
    {
        match token {
            Token::Uint(x) if x.is_zero() => Ok(Operation::Call),
            Token::Uint(x) if x == U256::one() => Ok(Operation::DelegateCall),
            other => Err(InvalidOutputType(format!("Expected 0 or 1, got {}", other))),
        }
    }

    fn into_token(self) -> Token {
        Token::Uint((self as u8).into())
    }
}

impl Serialize for Operation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (*self as u8).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Operation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let num = u8::deserialize(deserializer)?;
        Operation::try_from(num).map_err(|other| {
            serde::de::Error::invalid_value(
                serde::de::Unexpected::Unsigned(other.into()),
                &"0 (call) or 1 (delegate call)",
            )
        })
    }
}

/// An address wrapper that ensures checksum encoding
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct ChecksumAddress(pub Address);

impl ChecksumAddress {
    /// Parse an address that must already be in EIP-55 form, the way the
    /// gateway validates route segments
    pub fn from_checksummed(s: &str) -> ContractResult<Self> {
        let address: Address = s
            .parse()
            .map_err(|_| ContractError::InvalidAddress(s.to_owned()))?;
        if ethers::utils::to_checksum(&address, None) != s {
            return Err(ContractError::ChecksumMismatch(s.to_owned()));
        }
        Ok(address.into())
    }
}

impl std::ops::Deref for ChecksumAddress {
    type Target = Address;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Address> for ChecksumAddress {
    fn from(addr: Address) -> Self {
        Self(addr)
    }
}

impl From<ChecksumAddress> for Address {
    fn from(val: ChecksumAddress) -> Self {
        val.0
    }
}

impl Serialize for ChecksumAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        ethers::utils::to_checksum(self, None).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ChecksumAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(Address::deserialize(deserializer)?.into())
    }
}

impl std::fmt::Debug for ChecksumAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", ethers::utils::to_checksum(self, None))
    }
}

impl Display for ChecksumAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", ethers::utils::to_checksum(self, None))
    }
}

impl FromStr for ChecksumAddress {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Address>()
            .map(Into::into)
            .map_err(|_| ContractError::InvalidAddress(s.to_owned()))
    }
}

impl Tokenizable for ChecksumAddress {
    fn from_token(token: Token) -> Result<Self, InvalidOutputType>
    where
        Self: Sized,
    {
        Address::from_token(token).map(Into::into)
    }

    fn into_token(self) -> Token {
        self.0.into_token()
    }
}

/// A uint256 quantity exactly as the server wrote it.
///
/// Never parsed on deserialization. Use [`DecimalString::to_u256`] at the
/// point of arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecimalString(String);

impl DecimalString {
    /// The raw decimal string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse into a 256-bit integer
    pub fn to_u256(&self) -> ContractResult<U256> {
        parse_decimal(&self.0)
    }
}

// `from_dec_str` reads the empty string as zero
fn parse_decimal(s: &str) -> ContractResult<U256> {
    if s.is_empty() {
        return Err(ContractError::InvalidDecimal(String::new()));
    }
    U256::from_dec_str(s).map_err(|_| ContractError::InvalidDecimal(s.to_owned()))
}

impl Default for DecimalString {
    fn default() -> Self {
        Self("0".to_owned())
    }
}

impl From<U256> for DecimalString {
    fn from(i: U256) -> Self {
        // U256's Display is base 10
        Self(i.to_string())
    }
}

impl From<u64> for DecimalString {
    fn from(i: u64) -> Self {
        Self(i.to_string())
    }
}

impl FromStr for DecimalString {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal(s)?;
        Ok(Self(s.to_owned()))
    }
}

impl Display for DecimalString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Server-issued pagination token. Only ever obtained from a [`Page`] and
/// passed back untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// The token, verbatim
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Cursor of the following page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Cursor>,
    /// Cursor of the preceding page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<Cursor>,
    /// Items, in server order
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// True if there is no following page
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

/// An address, with whatever the gateway knows about it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressEx {
    /// The address
    pub value: ChecksumAddress,
    /// Known name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Known logo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
}

impl From<ChecksumAddress> for AddressEx {
    fn from(value: ChecksumAddress) -> Self {
        Self {
            value,
            name: None,
            logo_uri: None,
        }
    }
}
