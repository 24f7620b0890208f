use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::{Response, ResponseHeaders, StatusCode};

const HTTP_VERSION: &str = "HTTP/1.1";

/// `HTTP/1.1 <code> <reason>\r\n`
pub fn status_line(status: StatusCode) -> String {
    format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        status.as_u16(),
        status.reason_phrase()
    )
}

/// `Name: Value\r\n` per entry, then the blank line closing the section.
pub fn header_block(headers: &ResponseHeaders) -> String {
    let mut block = String::new();
    for (k, v) in headers.iter() {
        block.push_str(k);
        block.push_str(": ");
        block.push_str(v);
        block.push_str("\r\n");
    }
    block.push_str("\r\n");
    block
}

fn serialize_response(resp: &Response) -> Vec<u8> {
    let status = status_line(resp.status);
    let headers = header_block(&resp.headers);

    tracing::info!("{}", status.trim_end());
    tracing::info!("{:?}", headers.trim_end());

    let mut buf = Vec::with_capacity(status.len() + headers.len() + resp.body.len());
    buf.extend_from_slice(status.as_bytes());
    buf.extend_from_slice(headers.as_bytes());
    buf.extend_from_slice(&resp.body);
    buf
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    /// Writes the whole response and flushes, so every byte has left the
    /// process before the connection is closed.
    pub async fn write_to_stream<S>(&mut self, stream: &mut S) -> anyhow::Result<()>
    where
        S: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream
                .write(&self.buffer[self.written..])
                .await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        stream.flush().await?;
        Ok(())
    }
}
