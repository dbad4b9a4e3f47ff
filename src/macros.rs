/// Declare a closed family of wire records discriminated by their `type`
/// field.
///
/// Each variant's literal is written once and drives both the serde rename
/// and the [`Discriminated`](crate::rpc::common::Discriminated) impl.
#[macro_export]
macro_rules! tagged_union {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident($inner:ty) = $tag:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(tag = "type")]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $tag)]
                $variant($inner),
            )+
        }

        impl $crate::rpc::common::Discriminated for $name {
            const DISCRIMINATORS: &'static [&'static str] = &[$($tag),+];

            fn discriminator(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => $tag,)+
                }
            }
        }

        $(
            impl From<$inner> for $name {
                fn from(value: $inner) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

/// Declare a set of route segments. Each field maps to the placeholder name
/// used verbatim in the path template.
#[macro_export]
macro_rules! path_params {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident = $key:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(rename = $key)]
                pub $field: String,
            )+
        }

        impl $name {
            /// Build the path parameters from their route segments
            pub fn new($($field: impl Into<String>),+) -> Self {
                Self {
                    $($field: $field.into(),)+
                }
            }
        }

        impl $crate::endpoints::PathParams for $name {
            const KEYS: &'static [&'static str] = &[$($key),+];

            fn segment(&self, key: &str) -> Option<&str> {
                match key {
                    $($key => Some(self.$field.as_str()),)+
                    _ => None,
                }
            }
        }
    };
}

/// Declare an optional, primitive-valued query string shape with builder
/// setters.
#[macro_export]
macro_rules! query_params {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident: $ty:ty = $key:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(rename = $key, default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )+
        }

        impl $name {
            $(
                #[doc = concat!("Set the `", $key, "` query parameter")]
                pub fn $field(mut self, $field: impl Into<$ty>) -> Self {
                    self.$field = Some($field.into());
                    self
                }
            )+
        }

        impl $crate::endpoints::QueryParams for $name {
            const KEYS: &'static [&'static str] = &[$($key),+];

            fn pairs(&self) -> Vec<(&'static str, String)> {
                let mut pairs = Vec::new();
                $(
                    if let Some(value) = &self.$field {
                        pairs.push(($key, $crate::endpoints::QueryValue::to_query_value(value)));
                    }
                )+
                pairs
            }
        }
    };
}

/// Mark structured records as JSON request bodies
#[macro_export]
macro_rules! request_body {
    ($($body:ty),+ $(,)?) => {
        $(
            impl $crate::endpoints::RequestBody for $body {
                const SCHEMA: Option<&'static str> = Some(stringify!($body));

                fn encode(&self) -> Result<Option<String>, ::serde_json::Error> {
                    ::serde_json::to_string(self).map(Some)
                }
            }
        )+
    };
}

/// Declare the endpoint registry: one zero-sized type per (path, method)
/// pair, and the [`REGISTRY`](crate::endpoints::REGISTRY) table built from
/// the same rows.
#[macro_export]
macro_rules! endpoints {
    (
        $(
            $(#[$meta:meta])*
            $name:ident => $method:ident $path:literal {
                operation: $op:literal,
                path: $params:ty,
                query: $query:ty,
                body: $body:ty,
                response: $resp:ty,
                errors: [$($status:literal),* $(,)?] $(,)?
            }
        )+
    ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
            pub struct $name;

            impl $crate::endpoints::Endpoint for $name {
                const OPERATION: &'static str = $op;
                const METHOD: $crate::endpoints::Method = $crate::endpoints::Method::$method;
                const PATH: &'static str = $path;
                const ERROR_STATUSES: &'static [u16] = &[$($status),*];

                type Path = $params;
                type Query = $query;
                type Body = $body;
                type Response = $resp;
            }

            const _: () = assert!(
                <$body as $crate::endpoints::RequestBody>::SCHEMA.is_some()
                    == matches!($crate::endpoints::Method::$method, $crate::endpoints::Method::Post),
                "only POST endpoints carry a request body"
            );
        )+

        /// Every endpoint of the gateway, one row per (path, method) pair
        pub static REGISTRY: &[$crate::endpoints::EndpointDescriptor] = &[
            $(
                $crate::endpoints::EndpointDescriptor {
                    operation: $op,
                    method: $crate::endpoints::Method::$method,
                    path: $path,
                    path_parameters: <$params as $crate::endpoints::PathParams>::DECLARED,
                    query_parameters: <$query as $crate::endpoints::QueryParams>::KEYS,
                    body: <$body as $crate::endpoints::RequestBody>::SCHEMA,
                    response: stringify!($resp),
                    error_statuses: &[$($status),*],
                },
            )+
        ];
    };
}
