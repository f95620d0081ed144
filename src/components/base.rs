use std::fmt::Debug;

use tracing::debug;

use crate::api_protocols::robot_packet::{
    self, api_request, api_response, SetVelocityRequest, SpinRequest, StopRequest,
};
use crate::client::{roundtrip, Channel, ClientError};
use crate::math::Vector3;

/// A wheeled drive mechanism. Implementations issue the commands to a real
/// robot; tests substitute recording stubs.
pub trait Base<E: Debug> {
    /// Halt all motion.
    async fn stop(&self) -> Result<(), E>;

    /// Rotate in place by `angle_degs` at `degs_per_sec`, resolving once the
    /// turn is done.
    async fn spin(&self, angle_degs: f64, degs_per_sec: f64) -> Result<(), E>;

    /// Keep moving with the given linear (mm/s) and angular (deg/s)
    /// components until the next command.
    async fn set_velocity(&self, linear: Vector3, angular: Vector3) -> Result<(), E>;
}

/// [`Base`] bound to a named actuator on the remote robot.
pub struct RemoteBase {
    channel: Channel,
    name: String,
}

impl RemoteBase {
    pub(crate) fn new(channel: Channel, name: &str) -> Self {
        Self {
            channel,
            name: name.to_string(),
        }
    }

    async fn expect_ack(&self, request: api_request::Request) -> Result<(), ClientError> {
        match roundtrip(&self.channel, request).await? {
            api_response::Response::Ack(_) => Ok(()),
            _ => Err(ClientError::UnexpectedResponse),
        }
    }
}

fn wire_vector(v: Vector3) -> robot_packet::Vector3 {
    robot_packet::Vector3 {
        x: v.x,
        y: v.y,
        z: v.z,
    }
}

impl Base<ClientError> for RemoteBase {
    async fn stop(&self) -> Result<(), ClientError> {
        self.expect_ack(api_request::Request::Stop(StopRequest {
            name: self.name.clone(),
        }))
        .await
    }

    async fn spin(&self, angle_degs: f64, degs_per_sec: f64) -> Result<(), ClientError> {
        debug!(
            "spinning {} by {} degrees at {} deg/s",
            self.name, angle_degs, degs_per_sec
        );
        self.expect_ack(api_request::Request::Spin(SpinRequest {
            name: self.name.clone(),
            angle_degs,
            degs_per_sec,
        }))
        .await
    }

    async fn set_velocity(&self, linear: Vector3, angular: Vector3) -> Result<(), ClientError> {
        self.expect_ack(api_request::Request::SetVelocity(SetVelocityRequest {
            name: self.name.clone(),
            linear: Some(wire_vector(linear)),
            angular: Some(wire_vector(angular)),
        }))
        .await
    }
}
