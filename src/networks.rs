use url::Url;

use crate::request::ContractResult;

/// Safe Client Gateway deployment
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Gateway {
    /// Name of the deployment
    pub name: &'static str,
    /// URL of the gateway
    pub url: &'static str,
}

impl Gateway {
    /// Const constructor :)
    pub const fn new(name: &'static str, url: &'static str) -> Self {
        Self { name, url }
    }

    /// Parsed base URL, to pass to [`Request::render`](crate::Request::render)
    pub fn base_url(&self) -> ContractResult<Url> {
        Ok(Url::parse(self.url)?)
    }

    /// Runtime Lookup
    pub fn by_name(name: &str) -> Option<Self> {
        GATEWAYS
            .iter()
            .find(|gateway| gateway.name.eq_ignore_ascii_case(name))
            .copied()
    }
}

/// PRODUCTION
pub const PRODUCTION: Gateway = Gateway::new("production", "https://safe-client.safe.global");
/// STAGING
pub const STAGING: Gateway = Gateway::new("staging", "https://safe-client.staging.5afe.dev");

/// Known gateway deployments
pub const GATEWAYS: &[Gateway] = &[PRODUCTION, STAGING];

/// A chain served by the gateway
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Network {
    /// Short name, as used in Safe URLs (`eth:0x...`)
    pub short_name: &'static str,
    /// Chain id of the network
    pub chain_id: u64,
}

impl Network {
    /// Const constructor :)
    pub const fn new(short_name: &'static str, chain_id: u64) -> Self {
        Self {
            short_name,
            chain_id,
        }
    }

    /// Runtime Lookup
    pub fn by_chain_id(chain_id: u64) -> Option<Self> {
        NETWORKS
            .iter()
            .find(|network| network.chain_id == chain_id)
            .copied()
    }

    /// Runtime Lookup
    pub fn by_short_name(short_name: &str) -> Option<Self> {
        NETWORKS
            .iter()
            .find(|network| network.short_name == short_name)
            .copied()
    }

    /// The `{chainId}` route segment
    pub fn chain_id_segment(&self) -> String {
        self.chain_id.to_string()
    }
}

/// ETHEREUM
pub const ETHEREUM: Network = Network::new("eth", 1);
/// GNOSIS_CHAIN
pub const GNOSIS_CHAIN: Network = Network::new("gno", 100);
/// POLYGON
pub const POLYGON: Network = Network::new("matic", 137);
/// ARBITRUM
pub const ARBITRUM: Network = Network::new("arb1", 42161);
/// AVALANCHE
pub const AVALANCHE: Network = Network::new("avax", 43114);
/// AURORA
pub const AURORA: Network = Network::new("aurora", 1313161554);
/// BSC
pub const BSC: Network = Network::new("bnb", 56);
/// OPTIMISM
pub const OPTIMISM: Network = Network::new("oeth", 10);
/// SEPOLIA
pub const SEPOLIA: Network = Network::new("sep", 11155111);
/// BASE
pub const BASE: Network = Network::new("base", 8453);

/// XDAI (alias for GNOSIS_CHAIN)
pub const XDAI: Network = GNOSIS_CHAIN;
/// BINANCE_SMART_CHAIN (alias for BSC)
pub const BINANCE_SMART_CHAIN: Network = BSC;

/// Iterable, deduplicated list of known networks
pub const NETWORKS: &[Network] = &[
    ETHEREUM,
    GNOSIS_CHAIN,
    POLYGON,
    ARBITRUM,
    AVALANCHE,
    AURORA,
    BSC,
    OPTIMISM,
    SEPOLIA,
    BASE,
];
