use std::sync::Arc;

use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::api_protocols::robot_packet::{
    api_request, api_response, ApiRequest, ApiResponse, AuthRequest,
};
use crate::components::RemoteBase;
use crate::net::tcp_transceiver::TcpTransceiver;
use crate::net::{ReceiveError, SendError};
use crate::services::RemoteVision;

pub(crate) type Channel = Arc<Mutex<TcpTransceiver>>;

#[derive(Debug)]
pub enum ClientError {
    ConnectError(std::io::Error),
    SendError(SendError),
    ReceiveError(ReceiveError),
    AuthRefused(String),
    RobotError(String),
    UnexpectedResponse,
    ShutdownError(std::io::Error),
}

/// Authenticated session with a remote robot. Capability handles obtained
/// from it share the underlying connection and stay valid until [`close`]
/// is called.
///
/// [`close`]: RobotClient::close
pub struct RobotClient {
    channel: Channel,
}

impl RobotClient {
    pub async fn connect(address: &str, credential: &str) -> Result<Self, ClientError> {
        let stream = TcpStream::connect(address)
            .await
            .map_err(ClientError::ConnectError)?;
        let mut transceiver = TcpTransceiver::new(stream);

        let auth = api_request::Request::Auth(AuthRequest {
            payload: credential.to_string(),
        });
        transceiver
            .send(ApiRequest {
                request: Some(auth),
            })
            .await
            .map_err(ClientError::SendError)?;
        let response = transceiver
            .receive::<ApiResponse>()
            .await
            .map_err(ClientError::ReceiveError)?;

        match response.response {
            Some(api_response::Response::Auth(auth)) if auth.accepted => {
                info!("connected to robot at {}", address);
                Ok(Self {
                    channel: Arc::new(Mutex::new(transceiver)),
                })
            }
            Some(api_response::Response::Auth(auth)) => Err(ClientError::AuthRefused(auth.message)),
            Some(api_response::Response::Error(e)) => Err(ClientError::RobotError(e.message)),
            _ => Err(ClientError::UnexpectedResponse),
        }
    }

    pub fn base(&self, name: &str) -> RemoteBase {
        RemoteBase::new(self.channel.clone(), name)
    }

    pub fn vision(&self, name: &str) -> RemoteVision {
        RemoteVision::new(self.channel.clone(), name)
    }

    // workaround for async Drop, to be replaced when std::future::AsyncDrop is stabilized
    pub async fn close(self) -> Result<(), ClientError> {
        let mut transceiver = self.channel.lock().await;
        transceiver
            .shutdown()
            .await
            .map_err(ClientError::ShutdownError)?;
        info!("robot session closed");
        Ok(())
    }
}

/// One command on the wire: send the request, wait for its response. The
/// session lock keeps at most one exchange in flight.
pub(crate) async fn roundtrip(
    channel: &Channel,
    request: api_request::Request,
) -> Result<api_response::Response, ClientError> {
    let mut transceiver = channel.lock().await;
    transceiver
        .send(ApiRequest {
            request: Some(request),
        })
        .await
        .map_err(ClientError::SendError)?;
    let response = transceiver
        .receive::<ApiResponse>()
        .await
        .map_err(ClientError::ReceiveError)?;
    match response.response {
        Some(api_response::Response::Error(e)) => {
            debug!("robot reported an error: {}", e.message);
            Err(ClientError::RobotError(e.message))
        }
        Some(response) => Ok(response),
        None => Err(ClientError::UnexpectedResponse),
    }
}
