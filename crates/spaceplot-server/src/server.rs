//! The HTTP listener and its worker threads.

use crate::config::ServerConfig;
use crate::routes::{route, Reply};
use crate::{Result, ServerError};
use spaceplot_scene::DataSpace;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::thread;
use tiny_http::{Header, Request, Response, StatusCode};

/// The one scene a server renders, shared by every request.
///
/// Rendering writes resolved defaults back into the scene, so it is only
/// ever touched under the lock.
pub type SharedSpace = Arc<Mutex<DataSpace>>;

pub fn shared(space: DataSpace) -> SharedSpace {
    Arc::new(Mutex::new(space))
}

/// A bound listener plus the scene it serves.
pub struct PreviewServer {
    http: tiny_http::Server,
    space: SharedSpace,
    config: ServerConfig,
}

impl PreviewServer {
    pub fn bind(config: ServerConfig, space: SharedSpace) -> Result<Self> {
        let addr = config.addr();
        let http = tiny_http::Server::http(&addr).map_err(|e| ServerError::Bind {
            addr: addr.clone(),
            reason: e.to_string(),
        })?;
        let server = Self {
            http,
            space,
            config,
        };
        match server.local_addr() {
            Some(local) => log::info!("serving on http://{}", local),
            None => log::info!("serving on {}", addr),
        }
        Ok(server)
    }

    /// The address actually bound, which differs from the configured one
    /// when the port is 0.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.http.server_addr().to_ip()
    }

    /// Handle requests until [`PreviewServer::shutdown`] is called or a
    /// worker hits a fatal error, which is returned.
    pub fn run(&self) -> Result<()> {
        let workers = self.config.workers.max(1);
        thread::scope(|scope| {
            let handles: Vec<_> = (0..workers).map(|_| scope.spawn(|| self.worker())).collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap_or(Err(ServerError::WorkerPanicked)))
                .fold(Ok(()), |acc, r| acc.and(r))
        })
    }

    /// Wake every worker blocked on the listener so `run` can return.
    pub fn shutdown(&self) {
        for _ in 0..self.config.workers.max(1) {
            self.http.unblock();
        }
    }

    fn worker(&self) -> Result<()> {
        for request in self.http.incoming_requests() {
            if let Err(e) = self.handle(request) {
                self.shutdown();
                return Err(e);
            }
        }
        Ok(())
    }

    fn handle(&self, request: Request) -> Result<()> {
        let method = request.method().to_string();
        let url = request.url().to_string();

        let (reply, fatal) = match route(&method, &url, &self.space, self.config.refresh_ms) {
            Ok(reply) => (reply, None),
            Err(e) => {
                log::error!("{} {} failed: {}", method, url, e);
                let reply = Reply {
                    status: 500,
                    content_type: None,
                    body: String::new(),
                };
                (reply, Some(e))
            }
        };
        log::debug!("{} {} -> {}", method, url, reply.status);

        let mut response =
            Response::from_string(reply.body).with_status_code(StatusCode(reply.status));
        if let Some(content_type) = reply.content_type {
            if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], content_type.as_bytes()) {
                response.add_header(header);
            }
        }
        if let Err(e) = request.respond(response) {
            log::warn!("failed to send response to {} {}: {}", method, url, e);
        }

        match fatal {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Bind with `config` and serve `space` until a fatal error.
pub fn serve(config: ServerConfig, space: SharedSpace) -> Result<()> {
    PreviewServer::bind(config, space)?.run()
}
