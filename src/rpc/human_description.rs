use serde::{Deserialize, Serialize};

use super::common::ChecksumAddress;

/// Plain text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichTextFragment {
    pub value: String,
}

/// An amount of a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichTokenValueFragment {
    /// Formatted amount
    pub value: String,
    pub symbol: Option<String>,
    pub logo_uri: Option<String>,
}

/// An address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichAddressFragment {
    pub value: ChecksumAddress,
}

tagged_union! {
    /// A piece of a human readable transaction description
    pub enum RichDecodedInfoFragment {
        /// `text`
        Text(RichTextFragment) = "text",
        /// `tokenValue`
        TokenValue(RichTokenValueFragment) = "tokenValue",
        /// `address`
        Address(RichAddressFragment) = "address",
    }
}

/// Human readable description, as fragments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichDecodedInfo {
    pub fragments: Vec<RichDecodedInfoFragment>,
}

impl std::fmt::Display for RichDecodedInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for fragment in &self.fragments {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            match fragment {
                RichDecodedInfoFragment::Text(t) => f.write_str(&t.value)?,
                RichDecodedInfoFragment::TokenValue(t) => match &t.symbol {
                    Some(symbol) => write!(f, "{} {}", t.value, symbol)?,
                    None => f.write_str(&t.value)?,
                },
                RichDecodedInfoFragment::Address(a) => write!(f, "{}", a.value)?,
            }
        }
        Ok(())
    }
}
