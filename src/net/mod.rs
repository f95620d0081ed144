use prost::{DecodeError, EncodeError};
use std::io;

pub mod tcp_transceiver;

const MAX_FRAME_SIZE: usize = 64 * 1024;

#[derive(Debug)]
pub enum ReceiveError {
    SocketReceiveError(io::Error),
    DecodeError(DecodeError),
    FrameTooLarge(usize),
}

#[derive(Debug)]
pub enum SendError {
    SocketSendError(io::Error),
    EncodeError(EncodeError),
}
