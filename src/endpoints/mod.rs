use std::{collections::HashMap, fmt};

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;

use crate::{
    request::{ContractError, ContractResult},
    rpc::common::Cursor,
};

/// Path and query parameter shapes
pub mod params;

/// The declarative endpoint table
pub mod registry;

pub use registry::*;

/// HTTP methods used by the gateway
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    /// Read-only retrieval
    Get,
    /// Creation / submission, always with a body
    Post,
    /// Unregistration, path parameters only
    Delete,
}

impl Method {
    /// Upper-case method name as it appears on the wire
    pub const fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Route segments substituted into a path template
pub trait PathParams: fmt::Debug + Clone {
    /// Placeholder names, verbatim as they appear between braces
    const KEYS: &'static [&'static str];

    /// Declared path parameters. `None` marks an endpoint whose template has
    /// no placeholders at all.
    const DECLARED: Option<&'static [&'static str]> = Some(Self::KEYS);

    /// Value for a placeholder
    fn segment(&self, key: &str) -> Option<&str>;
}

/// Path parameters of templates without placeholders
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoPathParams;

impl PathParams for NoPathParams {
    const KEYS: &'static [&'static str] = &[];
    const DECLARED: Option<&'static [&'static str]> = None;

    fn segment(&self, _key: &str) -> Option<&str> {
        None
    }
}

/// Primitive values allowed in a query string
pub trait QueryValue {
    /// Render the value as it is sent on the wire
    fn to_query_value(&self) -> String;
}

impl QueryValue for String {
    fn to_query_value(&self) -> String {
        self.clone()
    }
}

impl QueryValue for bool {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for u64 {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for Cursor {
    fn to_query_value(&self) -> String {
        self.as_str().to_owned()
    }
}

/// A query string shape. Every key is optional.
pub trait QueryParams: fmt::Debug + Clone + Default {
    /// Wire keys, in declaration order
    const KEYS: &'static [&'static str];

    /// Set keys and their rendered values, in declaration order
    fn pairs(&self) -> Vec<(&'static str, String)>;
}

/// Query shape of endpoints that take no query string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoQuery;

impl QueryParams for NoQuery {
    const KEYS: &'static [&'static str] = &[];

    fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![]
    }
}

/// A request body shape
pub trait RequestBody: fmt::Debug + Clone {
    /// Name of the body record, `None` for bodiless methods
    const SCHEMA: Option<&'static str>;

    /// Encode the body as sent on the wire
    fn encode(&self) -> Result<Option<String>, serde_json::Error>;
}

/// Body of GET and DELETE endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoBody;

impl RequestBody for NoBody {
    const SCHEMA: Option<&'static str> = None;

    fn encode(&self) -> Result<Option<String>, serde_json::Error> {
        Ok(None)
    }
}

/// The `void` 200 payload. Accepts and discards any body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoContent;

impl<'de> serde::Deserialize<'de> for NoContent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        serde::de::IgnoredAny::deserialize(deserializer).map(|_| NoContent)
    }
}

/// One (path, method) operation of the gateway
pub trait Endpoint {
    /// Operation id
    const OPERATION: &'static str;
    /// HTTP method
    const METHOD: Method;
    /// Path template, with brace-delimited placeholders
    const PATH: &'static str;
    /// Non-200 statuses the server documents for this operation. Their
    /// bodies are not part of the contract.
    const ERROR_STATUSES: &'static [u16];

    /// Route segments
    type Path: PathParams;
    /// Query string
    type Query: QueryParams;
    /// Request body
    type Body: RequestBody;
    /// 200 payload
    type Response: DeserializeOwned + fmt::Debug;

    /// Interpret a status code and raw body returned for this operation.
    ///
    /// Only 200 bodies are decoded. Documented error statuses come back as
    /// [`ContractError::ErrorStatus`] with the body untouched.
    fn decode_response(status: u16, body: &str) -> ContractResult<Self::Response> {
        match status {
            200 => {
                let text = if body.trim().is_empty() { "null" } else { body };
                serde_json::from_str(text).map_err(|e| {
                    tracing::warn!(
                        operation = Self::OPERATION,
                        method = %Self::METHOD,
                        path = Self::PATH,
                        response = body,
                        error = %e,
                        "Unexpected response from server"
                    );
                    e.into()
                })
            }
            status if Self::ERROR_STATUSES.contains(&status) => {
                tracing::debug!(operation = Self::OPERATION, status, "Documented error status");
                Err(ContractError::ErrorStatus {
                    operation: Self::OPERATION,
                    status,
                    body: body.to_owned(),
                })
            }
            status => Err(ContractError::UndocumentedStatus {
                operation: Self::OPERATION,
                status,
                body: body.to_owned(),
            }),
        }
    }
}

/// A registry row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDescriptor {
    /// Operation id
    pub operation: &'static str,
    /// HTTP method
    pub method: Method,
    /// Path template
    pub path: &'static str,
    /// Declared path parameters, `None` when the template has none
    pub path_parameters: Option<&'static [&'static str]>,
    /// Accepted query keys
    pub query_parameters: &'static [&'static str],
    /// Name of the request body record, if any
    pub body: Option<&'static str>,
    /// Name of the 200 payload
    pub response: &'static str,
    /// Documented non-200 statuses
    pub error_statuses: &'static [u16],
}

/// Placeholder name of a template segment, `{name}` -> `name`
pub(crate) fn placeholder(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}

impl EndpointDescriptor {
    /// Placeholder names in template order
    pub fn placeholders(&self) -> impl Iterator<Item = &'static str> {
        self.path.split('/').filter_map(placeholder)
    }

    /// True if the template takes no path parameters
    pub fn is_parameterless(&self) -> bool {
        self.path_parameters.is_none()
    }

    /// True if `status` is part of the contract for this operation
    pub fn documents_status(&self, status: u16) -> bool {
        status == 200 || self.error_statuses.contains(&status)
    }

    /// Match a concrete request path (no query string) against the template,
    /// returning the raw placeholder segments on success
    pub fn match_path(&self, path: &str) -> Option<Vec<(&'static str, String)>> {
        let template = self.path.split('/');
        let concrete = path.split('/');
        if template.clone().count() != concrete.clone().count() {
            return None;
        }

        let mut captured = vec![];
        for (expected, actual) in template.zip(concrete) {
            match placeholder(expected) {
                Some(_) if actual.is_empty() => return None,
                Some(key) => captured.push((key, actual.to_owned())),
                None if expected == actual => {}
                None => return None,
            }
        }
        Some(captured)
    }
}

impl fmt::Display for EndpointDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.method, self.path, self.operation)
    }
}

static BY_OPERATION: Lazy<HashMap<&'static str, &'static EndpointDescriptor>> =
    Lazy::new(|| REGISTRY.iter().map(|e| (e.operation, e)).collect());

/// Look up a registry row by operation id
pub fn by_operation(operation: &str) -> Option<&'static EndpointDescriptor> {
    BY_OPERATION.get(operation).copied()
}

/// Look up a registry row by method and path template
pub fn find(method: Method, template: &str) -> Option<&'static EndpointDescriptor> {
    REGISTRY
        .iter()
        .find(|e| e.method == method && e.path == template)
}

/// Methods allowed on a path template
pub fn methods(template: &str) -> Vec<Method> {
    REGISTRY
        .iter()
        .filter(|e| e.path == template)
        .map(|e| e.method)
        .collect()
}

/// Find the operation serving a concrete request path, with its captured
/// path parameters
pub fn resolve(
    method: Method,
    path: &str,
) -> Option<(&'static EndpointDescriptor, Vec<(&'static str, String)>)> {
    REGISTRY
        .iter()
        .filter(|e| e.method == method)
        .find_map(|e| e.match_path(path).map(|captured| (e, captured)))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_reads_placeholders() {
        assert_eq!(placeholder("{chainId}"), Some("chainId"));
        assert_eq!(placeholder("chains"), None);
        assert_eq!(placeholder("{broken"), None);
    }

    #[test]
    fn it_indexes_operations() {
        let row = by_operation("safes_read").unwrap();
        assert_eq!(row.path, "/v1/chains/{chainId}/safes/{address}");
        assert_eq!(row.method, Method::Get);
        assert!(by_operation("no_such_operation").is_none());
        assert_eq!(BY_OPERATION.len(), REGISTRY.len());
    }

    #[test]
    fn it_lists_methods_per_path() {
        let mut methods = methods("/v1/chains/{chainId}/safes/{safe_address}/messages");
        methods.sort();
        assert_eq!(methods, vec![Method::Get, Method::Post]);
    }

    #[test]
    fn it_resolves_concrete_paths() {
        let (row, captured) = resolve(
            Method::Delete,
            "/v1/chains/5/notifications/devices/abc-123/safes/0x38CD8Fa77ECEB4b1edB856Ed27aac6A6c6Dc88ca",
        )
        .unwrap();
        assert_eq!(row.operation, "unregister_safe");
        assert_eq!(
            captured,
            vec![
                ("chainId", "5".to_owned()),
                ("uuid", "abc-123".to_owned()),
                ("safe_address", "0x38CD8Fa77ECEB4b1edB856Ed27aac6A6c6Dc88ca".to_owned()),
            ]
        );

        let (row, captured) = resolve(Method::Delete, "/v1/chains/5/notifications/devices/abc-123").unwrap();
        assert_eq!(row.operation, "unregister_device");
        assert_eq!(captured.len(), 2);

        assert!(resolve(Method::Get, "/v1/chains/5/notifications/devices/abc-123").is_none());
        assert!(resolve(Method::Get, "/v1/chains//safes/0x00").is_none());
    }

    #[test]
    fn it_keeps_trailing_slashes_significant() {
        let row = by_operation("incoming_transfers").unwrap();
        assert!(row
            .match_path("/v1/chains/1/safes/0xabc/incoming-transfers/")
            .is_some());
        assert!(row
            .match_path("/v1/chains/1/safes/0xabc/incoming-transfers")
            .is_none());
    }

    #[test]
    fn it_displays_rows() {
        let row = find(Method::Get, "/v1/chains").unwrap();
        assert_eq!(row.to_string(), "GET /v1/chains (chains_list)");
        assert!(row.is_parameterless());
        assert!(row.documents_status(200));
        assert!(!row.documents_status(404));
    }
}
