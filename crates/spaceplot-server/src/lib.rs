//! spaceplot server - a self-refreshing preview page for a scene
//!
//! The server owns one [`SharedSpace`] for its lifetime. Every page request
//! locks it, renders, encodes the raster as PNG and embeds it in an HTML page
//! that reloads itself.
//!
//! | Path      | GET                  | Other methods      |
//! |-----------|----------------------|--------------------|
//! | `/status` | 200, body `OK`       | 405, empty body    |
//! | any other | 200, the image page  | 405, empty body    |

pub mod config;
pub mod error;
pub mod page;
pub mod routes;
pub mod server;

pub use config::{ServerConfig, DEFAULT_PORT};
pub use error::{Result, ServerError};
pub use routes::{route, Reply};
pub use server::{serve, shared, PreviewServer, SharedSpace};
