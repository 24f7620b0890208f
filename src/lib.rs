//! pico - minimal static HTTP/1.1 server
//!
//! One connection at a time, one request per connection.

pub mod config;
pub mod http;
pub mod server;
pub mod site;
