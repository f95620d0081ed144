//! Wire messages of the rover cloud API, checked in as prost types.
//!
//! Every exchange on the session is one `ApiRequest` frame answered by one
//! `ApiResponse` frame.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Vector3 {
    #[prost(double, tag = "1")]
    pub x: f64,
    #[prost(double, tag = "2")]
    pub y: f64,
    #[prost(double, tag = "3")]
    pub z: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ObjectDetection {
    #[prost(string, tag = "1")]
    pub label: String,
    #[prost(double, tag = "2")]
    pub confidence: f64,
    #[prost(message, optional, tag = "3")]
    pub center: Option<Vector3>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AuthRequest {
    #[prost(string, tag = "1")]
    pub payload: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AuthResponse {
    #[prost(bool, tag = "1")]
    pub accepted: bool,
    #[prost(string, tag = "2")]
    pub message: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StopRequest {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SpinRequest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(double, tag = "2")]
    pub angle_degs: f64,
    #[prost(double, tag = "3")]
    pub degs_per_sec: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetVelocityRequest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, optional, tag = "2")]
    pub linear: Option<Vector3>,
    #[prost(message, optional, tag = "3")]
    pub angular: Option<Vector3>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetDetectionsRequest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub sensor: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetDetectionsResponse {
    #[prost(message, repeated, tag = "1")]
    pub objects: Vec<ObjectDetection>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AckResponse {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ErrorResponse {
    #[prost(string, tag = "1")]
    pub message: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ApiRequest {
    #[prost(oneof = "api_request::Request", tags = "1, 2, 3, 4, 5")]
    pub request: Option<api_request::Request>,
}

pub mod api_request {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Request {
        #[prost(message, tag = "1")]
        Auth(super::AuthRequest),
        #[prost(message, tag = "2")]
        Stop(super::StopRequest),
        #[prost(message, tag = "3")]
        Spin(super::SpinRequest),
        #[prost(message, tag = "4")]
        SetVelocity(super::SetVelocityRequest),
        #[prost(message, tag = "5")]
        GetDetections(super::GetDetectionsRequest),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ApiResponse {
    #[prost(oneof = "api_response::Response", tags = "1, 2, 3, 4")]
    pub response: Option<api_response::Response>,
}

pub mod api_response {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Response {
        #[prost(message, tag = "1")]
        Auth(super::AuthResponse),
        #[prost(message, tag = "2")]
        Ack(super::AckResponse),
        #[prost(message, tag = "3")]
        Detections(super::GetDetectionsResponse),
        #[prost(message, tag = "4")]
        Error(super::ErrorResponse),
    }
}
