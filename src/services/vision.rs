use std::fmt::Debug;

use tracing::debug;

use crate::api_protocols::robot_packet::{
    api_request, api_response, GetDetectionsRequest, ObjectDetection,
};
use crate::client::{roundtrip, Channel, ClientError};
use crate::math::Vector3;

/// One detected object, as reported by the remote vision service. Callers
/// mostly care about how many of these come back per query.
#[derive(Clone, Debug, PartialEq)]
pub struct Detection {
    pub label: String,
    pub confidence: f64,
    pub center: Vector3,
}

impl Detection {
    fn from_wire(object: ObjectDetection) -> Self {
        let center = object.center.unwrap_or_default();
        Self {
            label: object.label,
            confidence: object.confidence,
            center: Vector3::new(center.x, center.y, center.z),
        }
    }
}

/// Obstacle detection over a named sensor.
pub trait VisionService<E: Debug> {
    async fn get_detections(&self, sensor: &str) -> Result<Vec<Detection>, E>;
}

/// [`VisionService`] bound to a named service on the remote robot.
pub struct RemoteVision {
    channel: Channel,
    name: String,
}

impl RemoteVision {
    pub(crate) fn new(channel: Channel, name: &str) -> Self {
        Self {
            channel,
            name: name.to_string(),
        }
    }
}

impl VisionService<ClientError> for RemoteVision {
    async fn get_detections(&self, sensor: &str) -> Result<Vec<Detection>, ClientError> {
        let request = api_request::Request::GetDetections(GetDetectionsRequest {
            name: self.name.clone(),
            sensor: sensor.to_string(),
        });
        match roundtrip(&self.channel, request).await? {
            api_response::Response::Detections(response) => {
                debug!("{} reported {} object(s)", self.name, response.objects.len());
                Ok(response
                    .objects
                    .into_iter()
                    .map(Detection::from_wire)
                    .collect())
            }
            _ => Err(ClientError::UnexpectedResponse),
        }
    }
}
