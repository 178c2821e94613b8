//! Request routing, independent of the transport.

use crate::page::{image_page, timestamp};
use crate::server::SharedSpace;
use crate::{Result, ServerError};

pub const STATUS_PATH: &str = "/status";

/// What to send back for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: Option<&'static str>,
    pub body: String,
}

impl Reply {
    fn ok(content_type: &'static str, body: String) -> Self {
        Self {
            status: 200,
            content_type: Some(content_type),
            body,
        }
    }

    fn method_not_allowed() -> Self {
        Self {
            status: 405,
            content_type: None,
            body: String::new(),
        }
    }
}

/// Answer `method` on `path`.
///
/// The query string is ignored. Page requests lock `space` for the whole
/// render, so concurrent requests fill defaults one at a time.
pub fn route(method: &str, path: &str, space: &SharedSpace, refresh_ms: u64) -> Result<Reply> {
    let path = path.split('?').next().unwrap_or(path);
    if !method.eq_ignore_ascii_case("GET") {
        log::warn!("{} {} not allowed", method, path);
        return Ok(Reply::method_not_allowed());
    }

    if path == STATUS_PATH {
        return Ok(Reply::ok("text/plain; charset=utf-8", "OK".to_string()));
    }

    let raster = {
        let mut space = space.lock().map_err(|_| ServerError::Poisoned)?;
        space.render()
    };
    let page = image_page(&raster, refresh_ms, timestamp())?;
    Ok(Reply::ok("text/html; charset=utf-8", page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::shared;
    use spaceplot_scene::{Color, DataSpace};

    #[test]
    fn test_status_get() {
        let space = shared(DataSpace::new());
        let reply = route("GET", "/status", &space, 1000).unwrap();
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body, "OK");
    }

    #[test]
    fn test_status_other_methods_have_no_body() {
        let space = shared(DataSpace::new());
        for method in ["POST", "PUT", "DELETE", "HEAD"] {
            let reply = route(method, "/status", &space, 1000).unwrap();
            assert_eq!(reply.status, 405);
            assert!(reply.body.is_empty());
        }
    }

    #[test]
    fn test_page_renders_and_resolves_defaults() {
        let space = shared(DataSpace::new());
        let reply = route("GET", "/", &space, 1000).unwrap();
        assert_eq!(reply.status, 200);
        assert_eq!(reply.content_type, Some("text/html; charset=utf-8"));
        assert!(reply.body.contains("data:image/png;base64,"));

        let space = space.lock().unwrap();
        assert_eq!((space.width, space.height), (800, 640));
        assert_eq!(space.background, Color::WHITE);
    }

    #[test]
    fn test_any_other_path_serves_page() {
        let space = shared(DataSpace {
            width: 4,
            height: 4,
            ..Default::default()
        });
        let reply = route("GET", "/anything?x=1", &space, 250).unwrap();
        assert!(reply.body.contains("},250);"));
    }

    #[test]
    fn test_status_ignores_query() {
        let space = shared(DataSpace::new());
        assert_eq!(route("GET", "/status?probe=1", &space, 1000).unwrap().body, "OK");
    }
}
