use serde::{Deserialize, Serialize};

/// Any origin may embed the app
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SafeAppNoRestrictionsPolicy {}

/// Only the listed origins may embed the app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafeAppDomainAllowlistPolicy {
    /// Allowed origins
    pub value: Vec<String>,
}

tagged_union! {
    /// Who may embed a Safe App
    pub enum SafeAppAccessPolicy {
        /// `NO_RESTRICTIONS`
        NoRestrictions(SafeAppNoRestrictionsPolicy) = "NO_RESTRICTIONS",
        /// `DOMAIN_ALLOWLIST`
        DomainAllowlist(SafeAppDomainAllowlistPolicy) = "DOMAIN_ALLOWLIST",
    }
}

impl SafeAppAccessPolicy {
    /// True if an app served under this policy may be embedded by `origin`
    pub fn allows(&self, origin: &str) -> bool {
        match self {
            SafeAppAccessPolicy::NoRestrictions(_) => true,
            SafeAppAccessPolicy::DomainAllowlist(list) => list.value.iter().any(|o| o == origin),
        }
    }
}

/// Who operates the app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafeAppProvider {
    pub url: String,
    pub name: String,
}

/// Social platforms an app may link to
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SafeAppSocialPlatform {
    Twitter,
    Github,
    Discord,
}

/// A social link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafeAppSocialProfile {
    pub platform: SafeAppSocialPlatform,
    pub url: String,
}

/// A Safe App listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeAppData {
    pub id: u64,
    pub url: String,
    pub name: String,
    pub icon_url: String,
    pub description: String,
    pub chain_ids: Vec<String>,
    pub provider: Option<SafeAppProvider>,
    pub access_control: SafeAppAccessPolicy,
    pub tags: Vec<String>,
    /// e.g. `BATCHED_TRANSACTIONS`
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_website: Option<String>,
    #[serde(default)]
    pub social_profiles: Vec<SafeAppSocialProfile>,
}

/// Safe Apps available on a chain
pub type SafeAppsResponse = Vec<SafeAppData>;
