use std::fmt;

use url::Url;

use crate::endpoints::{placeholder, Endpoint, Method, NoBody, PathParams, QueryParams, RequestBody};

/// Contract Errors
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// Url Parsing Error
    #[error("{0}")]
    UrlParse(#[from] url::ParseError),
    /// Serde Json Error
    #[error("{0}")]
    SerdeError(#[from] serde_json::Error),
    /// The base url cannot take path segments (e.g. `mailto:`)
    #[error("Base url {0} cannot carry a path")]
    CannotBeABase(Url),
    /// A template placeholder had no value
    #[error("No value for placeholder `{key}` in {template}")]
    MissingPathParameter {
        /// Path template
        template: &'static str,
        /// Placeholder name
        key: String,
    },
    /// A placeholder value that would not survive as a single route segment
    #[error("Invalid value {value:?} for placeholder `{key}` in {template}")]
    InvalidPathParameter {
        /// Path template
        template: &'static str,
        /// Placeholder name
        key: String,
        /// Rejected value
        value: String,
    },
    /// The operation needs at least one query filter
    #[error("{operation} needs at least one filter")]
    MissingFilter {
        /// Operation id
        operation: &'static str,
    },
    /// A status the operation documents, with its body left unparsed
    #[error("{operation} answered {status}")]
    ErrorStatus {
        /// Operation id
        operation: &'static str,
        /// HTTP status
        status: u16,
        /// Raw body, not part of the contract
        body: String,
    },
    /// A status the operation does not document
    #[error("{operation} answered undocumented status {status}")]
    UndocumentedStatus {
        /// Operation id
        operation: &'static str,
        /// HTTP status
        status: u16,
        /// Raw body
        body: String,
    },
    /// A value does not satisfy a narrowed type
    #[error("Not a {refinement}: {reason}")]
    Refinement {
        /// Name of the narrowed type
        refinement: &'static str,
        /// Which narrowed field failed
        reason: &'static str,
    },
    /// Not a base-10 unsigned integer below 2^256
    #[error("Invalid decimal string {0:?}")]
    InvalidDecimal(String),
    /// Not a 20-byte hex address
    #[error("Invalid address {0:?}")]
    InvalidAddress(String),
    /// Valid address, but not in EIP-55 checksum form
    #[error("Address {0:?} is not checksummed")]
    ChecksumMismatch(String),
}

impl ContractError {
    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ErrorStatus { status, .. } | Self::UndocumentedStatus { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// The resource (usually the Safe) does not exist
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// The server rejected the request, most often on a checksum failure
    pub fn is_validation_failure(&self) -> bool {
        self.status() == Some(422)
    }
}

/// Contract Results
pub type ContractResult<T> = Result<T, ContractError>;

/// A typed request for endpoint `E`
pub struct Request<E: Endpoint> {
    /// Route segments
    pub path: E::Path,
    /// Query string
    pub query: E::Query,
    /// Body
    pub body: E::Body,
}

impl<E: Endpoint> fmt::Debug for Request<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("operation", &E::OPERATION)
            .field("path", &self.path)
            .field("query", &self.query)
            .field("body", &self.body)
            .finish()
    }
}

impl<E: Endpoint> Clone for Request<E> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            query: self.query.clone(),
            body: self.body.clone(),
        }
    }
}

impl<E> Request<E>
where
    E: Endpoint<Body = NoBody>,
{
    /// Request for a bodiless endpoint, with an empty query
    pub fn new(path: E::Path) -> Self {
        Self {
            path,
            query: Default::default(),
            body: NoBody,
        }
    }
}

impl<E: Endpoint> Request<E> {
    /// Request carrying a body, with an empty query
    pub fn with_body(path: E::Path, body: E::Body) -> Self {
        Self {
            path,
            query: Default::default(),
            body,
        }
    }

    /// Replace the query
    pub fn with_query(mut self, query: E::Query) -> Self {
        self.query = query;
        self
    }

    /// Render against a gateway base url. The base url's own path is kept as
    /// a prefix.
    pub fn render(&self, base: &Url) -> ContractResult<RenderedRequest> {
        let mut url = base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ContractError::CannotBeABase(base.clone()))?;
            segments.pop_if_empty();
            for segment in E::PATH.trim_start_matches('/').split('/') {
                match placeholder(segment) {
                    Some(key) => {
                        let value = self.path.segment(key).ok_or_else(|| {
                            ContractError::MissingPathParameter {
                                template: E::PATH,
                                key: key.to_owned(),
                            }
                        })?;
                        // `push` drops dot segments and an empty value collapses the route
                        if matches!(value, "" | "." | "..") {
                            return Err(ContractError::InvalidPathParameter {
                                template: E::PATH,
                                key: key.to_owned(),
                                value: value.to_owned(),
                            });
                        }
                        segments.push(value);
                    }
                    None => {
                        segments.push(segment);
                    }
                }
            }
        }

        let pairs = self.query.pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs.iter());
        }

        let body = self.body.encode()?;

        tracing::debug!(
            operation = E::OPERATION,
            method = %E::METHOD,
            url = url.as_str(),
            "Rendered api request"
        );

        Ok(RenderedRequest {
            operation: E::OPERATION,
            method: E::METHOD,
            url,
            body,
        })
    }
}

/// A transport-neutral request description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRequest {
    /// Operation id
    pub operation: &'static str,
    /// HTTP method
    pub method: Method,
    /// Full url, query string included
    pub url: Url,
    /// JSON body, for POST endpoints
    pub body: Option<String>,
}
