use super::{ReceiveError, SendError, MAX_FRAME_SIZE};
use std::io;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// Request/response framing over a connected stream: a 4 byte big-endian
/// length prefix followed by one protobuf-encoded message.
pub struct TcpTransceiver {
    stream: TcpStream,
}

impl TcpTransceiver {
    pub fn new(stream: TcpStream) -> Self {
        Self { stream }
    }

    pub async fn send<T: prost::Message>(&mut self, packet: T) -> Result<usize, SendError> {
        let len = packet.encoded_len();
        let mut buf = Vec::with_capacity(4 + len);
        buf.extend_from_slice(&(len as u32).to_be_bytes());
        packet.encode(&mut buf).map_err(SendError::EncodeError)?;
        self.stream
            .write_all(&buf)
            .await
            .map_err(SendError::SocketSendError)?;
        Ok(len)
    }

    pub async fn receive<T: prost::Message + Default>(&mut self) -> Result<T, ReceiveError> {
        let mut header = [0u8; 4];
        self.stream
            .read_exact(&mut header)
            .await
            .map_err(ReceiveError::SocketReceiveError)?;
        let len = u32::from_be_bytes(header) as usize;
        if len > MAX_FRAME_SIZE {
            return Err(ReceiveError::FrameTooLarge(len));
        }
        let mut payload = vec![0u8; len];
        self.stream
            .read_exact(&mut payload)
            .await
            .map_err(ReceiveError::SocketReceiveError)?;
        T::decode(payload.as_slice()).map_err(ReceiveError::DecodeError)
    }

    pub async fn shutdown(&mut self) -> Result<(), io::Error> {
        self.stream.shutdown().await
    }
}
