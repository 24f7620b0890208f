use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::dispatch::{dispatch, Action};
use crate::http::parser::{parse_http_request, ParseError};
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};
use crate::http::writer::ResponseWriter;
use crate::site::{ResolvedResource, Site};

/// One accepted client: reads a single request, writes a single response.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    site: Site,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Rejecting(ParseError),
    Writing(ResponseWriter),
    Closed,
}

enum ReadOutcome {
    Request(Request),
    Malformed(ParseError),
    /// Peer closed before sending anything
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, site: Site) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            site,
            state: ConnectionState::Reading,
        }
    }

    /// Drives the exchange to completion. An `Err` is an I/O fault on the
    /// connection; every protocol-level problem is answered with a response.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await? {
                        ReadOutcome::Request(req) => ConnectionState::Processing(req),
                        ReadOutcome::Malformed(err) => ConnectionState::Rejecting(err),
                        ReadOutcome::Closed => {
                            tracing::debug!("Client closed before sending a request");
                            ConnectionState::Closed
                        }
                    };
                }

                ConnectionState::Processing(req) => {
                    let response = respond(&self.site, req).await;
                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Rejecting(err) => {
                    tracing::warn!(error = %err, "Malformed request");
                    let response = Response::empty(StatusCode::BadRequest);
                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Shuts down the write side. The socket itself is released when the
    /// connection is dropped.
    pub async fn close(&mut self) {
        self.state = ConnectionState::Closed;
        if let Err(e) = self.stream.shutdown().await {
            tracing::debug!(error = %e, "Shutdown failed");
        }
    }

    async fn read_request(&mut self) -> anyhow::Result<ReadOutcome> {
        loop {
            if !self.buffer.is_empty() {
                match parse_http_request(&self.buffer, false) {
                    Ok((request, _consumed)) => return Ok(self.accept_request(request)),
                    Err(ParseError::Incomplete) => {}
                    Err(e) => return Ok(ReadOutcome::Malformed(e)),
                }
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                if self.buffer.is_empty() {
                    return Ok(ReadOutcome::Closed);
                }

                // End of stream closes the head
                return Ok(match parse_http_request(&self.buffer, true) {
                    Ok((request, _)) => self.accept_request(request),
                    Err(e) => ReadOutcome::Malformed(e),
                });
            }
        }
    }

    fn accept_request(&self, request: Request) -> ReadOutcome {
        tracing::info!("{}", request.request_line());
        tracing::info!("{:?}", request.headers);
        ReadOutcome::Request(request)
    }
}

/// Builds the response for one parsed request.
pub async fn respond(site: &Site, req: &Request) -> Response {
    match site {
        Site::Directory(root) => {
            let resource = root.resolve(&req.target).await;

            match (dispatch(&req.method, resource.is_found()), resource) {
                (Action::Get, ResolvedResource::Found(path)) => {
                    match tokio::fs::read(&path).await {
                        Ok(contents) => Response::ok(contents),
                        Err(e) => {
                            tracing::warn!(file = %path.display(), error = %e, "File vanished before read");
                            Response::empty(StatusCode::NotFound)
                        }
                    }
                }
                (Action::Head, ResolvedResource::Found(path)) => {
                    match tokio::fs::metadata(&path).await {
                        Ok(meta) => Response::head(meta.len()),
                        Err(e) => {
                            tracing::warn!(file = %path.display(), error = %e, "File vanished before stat");
                            Response::empty(StatusCode::NotFound)
                        }
                    }
                }
                (action, _) => Response::empty(action.status()),
            }
        }

        Site::Fixed(document) => match dispatch(&req.method, true) {
            Action::Get => Response::ok(document.clone()),
            Action::Head => Response::head(document.len() as u64),
            action => Response::empty(action.status()),
        },
    }
}
