// SPDX-License-Identifier: MIT

//! Newline-delimited JSON framing (spec §4.2, §6).

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::request::Request;
use crate::response::Response;
use crate::MAX_MESSAGE_SIZE;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("message too large: {size} bytes (max {max})")]
    MessageTooLarge { size: usize, max: usize },

    #[error("connection closed before a full message was received")]
    ConnectionClosed,

    #[error("timed out waiting for message")]
    Timeout,
}

fn encode_line<T: Serialize>(msg: &T) -> Result<Vec<u8>, ProtocolError> {
    let mut json = serde_json::to_vec(msg)?;
    if json.len() > MAX_MESSAGE_SIZE {
        return Err(ProtocolError::MessageTooLarge {
            size: json.len(),
            max: MAX_MESSAGE_SIZE,
        });
    }
    json.push(b'\n');
    Ok(json)
}

async fn read_line<R>(reader: &mut BufReader<R>) -> Result<String, ProtocolError>
where
    R: tokio::io::AsyncRead + Unpin,
{
    let mut line = String::new();
    let n = reader.read_line(&mut line).await?;
    if n == 0 {
        return Err(ProtocolError::ConnectionClosed);
    }
    if line.len() > MAX_MESSAGE_SIZE {
        return Err(ProtocolError::MessageTooLarge {
            size: line.len(),
            max: MAX_MESSAGE_SIZE,
        });
    }
    Ok(line)
}

/// Read one newline-delimited request, enforcing `deadline`.
pub async fn read_request<R>(
    reader: &mut BufReader<R>,
    deadline: std::time::Duration,
) -> Result<Request, ProtocolError>
where
    R: tokio::io::AsyncRead + Unpin,
{
    let line = tokio::time::timeout(deadline, read_line(reader))
        .await
        .map_err(|_| ProtocolError::Timeout)??;
    Ok(serde_json::from_str(line.trim_end())?)
}

/// Read one newline-delimited response, enforcing `deadline`.
pub async fn read_response<R>(
    reader: &mut BufReader<R>,
    deadline: std::time::Duration,
) -> Result<Response, ProtocolError>
where
    R: tokio::io::AsyncRead + Unpin,
{
    let line = tokio::time::timeout(deadline, read_line(reader))
        .await
        .map_err(|_| ProtocolError::Timeout)??;
    Ok(serde_json::from_str(line.trim_end())?)
}

/// Write one newline-delimited request, enforcing `deadline`.
pub async fn write_request<W>(
    writer: &mut W,
    request: &Request,
    deadline: std::time::Duration,
) -> Result<(), ProtocolError>
where
    W: tokio::io::AsyncWrite + Unpin,
{
    let bytes = encode_line(request)?;
    tokio::time::timeout(deadline, async {
        writer.write_all(&bytes).await?;
        writer.flush().await
    })
    .await
    .map_err(|_| ProtocolError::Timeout)??;
    Ok(())
}

/// Write one newline-delimited response, enforcing `deadline`.
pub async fn write_response<W>(
    writer: &mut W,
    response: &Response,
    deadline: std::time::Duration,
) -> Result<(), ProtocolError>
where
    W: tokio::io::AsyncWrite + Unpin,
{
    let bytes = encode_line(response)?;
    tokio::time::timeout(deadline, async {
        writer.write_all(&bytes).await?;
        writer.flush().await
    })
    .await
    .map_err(|_| ProtocolError::Timeout)??;
    Ok(())
}
