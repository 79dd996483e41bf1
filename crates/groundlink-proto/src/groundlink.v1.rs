// Rust form of proto/groundlink/v1/groundlink.proto.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LookupProvidersRequest {
    /// Registry name on the directory host
    #[prost(string, tag = "1")]
    pub registry: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LookupProvidersResponse {
    #[prost(message, repeated, tag = "1")]
    pub providers: ::prost::alloc::vec::Vec<ProviderSummary>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProviderSummary {
    #[prost(string, tag = "1")]
    pub provider_name: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub connection: ::core::option::Option<ProviderConnection>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProviderConnection {
    #[prost(string, tag = "1")]
    pub service_uri: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "2")]
    pub domain: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Attribute {
    #[prost(oneof = "attribute::Value", tags = "1, 2, 3, 4, 5, 6, 7, 8")]
    pub value: ::core::option::Option<attribute::Value>,
}
/// Nested message and enum types in `Attribute`.
pub mod attribute {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Value {
        #[prost(bool, tag = "1")]
        BoolValue(bool),
        #[prost(int64, tag = "2")]
        LongValue(i64),
        #[prost(uint64, tag = "3")]
        UlongValue(u64),
        #[prost(float, tag = "4")]
        FloatValue(f32),
        #[prost(double, tag = "5")]
        DoubleValue(f64),
        #[prost(string, tag = "6")]
        StringValue(::prost::alloc::string::String),
        #[prost(bytes = "vec", tag = "7")]
        BlobValue(::prost::alloc::vec::Vec<u8>),
        #[prost(message, tag = "8")]
        ListValue(super::AttributeList),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AttributeList {
    #[prost(message, repeated, tag = "1")]
    pub items: ::prost::alloc::vec::Vec<Attribute>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetParameterRequest {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub value: ::core::option::Option<Attribute>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetParameterResponse {
    #[prost(bool, tag = "1")]
    pub accepted: bool,
    #[prost(string, tag = "2")]
    pub reason: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LaunchActionRequest {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "2")]
    pub arguments: ::prost::alloc::vec::Vec<Attribute>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LaunchActionResponse {
    #[prost(bool, tag = "1")]
    pub accepted: bool,
    #[prost(string, tag = "2")]
    pub reason: ::prost::alloc::string::String,
}
/// Client for the provider registry.
pub mod directory_service_client {
    #![allow(
        unused_variables,
        dead_code,
        missing_docs,
        clippy::wildcard_imports,
        clippy::let_unit_value
    )]
    use tonic::codegen::*;
    #[derive(Debug, Clone)]
    pub struct DirectoryServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl<T> DirectoryServiceClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::Body>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + std::marker::Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + std::marker::Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        /// Return every provider currently registered under the named registry.
        pub async fn lookup_providers(
            &mut self,
            request: impl tonic::IntoRequest<super::LookupProvidersRequest>,
        ) -> std::result::Result<tonic::Response<super::LookupProvidersResponse>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
            })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/groundlink.v1.DirectoryService/LookupProviders",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "groundlink.v1.DirectoryService",
                "LookupProviders",
            ));
            self.inner.unary(req, path, codec).await
        }
    }
}
/// Client for a provider's parameter and action services.
pub mod provider_service_client {
    #![allow(
        unused_variables,
        dead_code,
        missing_docs,
        clippy::wildcard_imports,
        clippy::let_unit_value
    )]
    use tonic::codegen::*;
    #[derive(Debug, Clone)]
    pub struct ProviderServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl<T> ProviderServiceClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::Body>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + std::marker::Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + std::marker::Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub async fn set_parameter(
            &mut self,
            request: impl tonic::IntoRequest<super::SetParameterRequest>,
        ) -> std::result::Result<tonic::Response<super::SetParameterResponse>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
            })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/groundlink.v1.ProviderService/SetParameter",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "groundlink.v1.ProviderService",
                "SetParameter",
            ));
            self.inner.unary(req, path, codec).await
        }
        pub async fn launch_action(
            &mut self,
            request: impl tonic::IntoRequest<super::LaunchActionRequest>,
        ) -> std::result::Result<tonic::Response<super::LaunchActionResponse>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
            })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/groundlink.v1.ProviderService/LaunchAction",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "groundlink.v1.ProviderService",
                "LaunchAction",
            ));
            self.inner.unary(req, path, codec).await
        }
    }
}
