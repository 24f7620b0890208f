//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 server side: one request per connection,
//! no request bodies, `Connection: close` on every response.
//!
//! # Architecture
//!
//! - **`connection`**: The per-connection state machine and response selection
//! - **`parser`**: Parses the request line and headers from a byte buffer
//! - **`request`**: HTTP request representation
//! - **`dispatch`**: Pure mapping from method and resolution result to an action
//! - **`response`**: Status codes, default header block and response builder
//! - **`writer`**: Serializes and writes responses to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for the request head
//!        └──────┬──────┘
//!               │ head parsed          │ malformed head
//!               ▼                      ▼
//!        ┌──────────────┐      ┌──────────────┐
//!        │  Processing  │      │  Rejecting   │ ← 400
//!        └──────┬───────┘      └──────┬───────┘
//!               └──────────┬──────────┘
//!                          ▼
//!                 ┌──────────────────┐
//!                 │     Writing      │ ← Send response, flush
//!                 └────────┬─────────┘
//!                          ▼
//!                       Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use pico::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! let listener = TcpListener::bind("127.0.0.1:8000").await?;
//! loop {
//!     let (socket, _addr) = listener.accept().await?;
//!     let mut conn = Connection::new(socket, site.clone());
//!     if let Err(e) = conn.run().await {
//!         eprintln!("Connection error: {}", e);
//!     }
//!     conn.close().await;
//! }
//! ```

pub mod connection;
pub mod dispatch;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
