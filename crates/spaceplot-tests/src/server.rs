//! Serving collaborator: routing and a live socket round trip

#[cfg(test)]
mod tests {
    use spaceplot_scene::{Color, DataSpace};
    use spaceplot_server::{route, shared, PreviewServer, ServerConfig, DEFAULT_PORT};
    use std::io::{Read, Write};
    use std::net::TcpStream;
    use std::sync::Arc;
    use std::thread;

    fn ephemeral() -> ServerConfig {
        ServerConfig {
            port: 0,
            workers: 2,
            ..Default::default()
        }
    }

    fn http_get(addr: std::net::SocketAddr, path: &str) -> String {
        let mut stream = TcpStream::connect(addr).unwrap();
        write!(
            stream,
            "GET {} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
            path
        )
        .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).unwrap();
        response
    }

    #[test]
    fn test_default_port() {
        assert_eq!(ServerConfig::default().port, DEFAULT_PORT);
        assert_eq!(DEFAULT_PORT, 8282);
    }

    #[test]
    fn test_status_over_socket() {
        let server = Arc::new(PreviewServer::bind(ephemeral(), shared(DataSpace::new())).unwrap());
        let addr = server.local_addr().unwrap();

        let runner = {
            let server = Arc::clone(&server);
            thread::spawn(move || server.run())
        };

        let response = http_get(addr, "/status");
        assert!(response.starts_with("HTTP/1.1 200"));
        let body = response.split("\r\n\r\n").nth(1).unwrap();
        assert_eq!(body, "OK");

        server.shutdown();
        runner.join().unwrap().unwrap();
    }

    #[test]
    fn test_page_requests_share_one_scene() {
        let space = shared(DataSpace {
            width: 16,
            height: 8,
            ..Default::default()
        });

        for _ in 0..3 {
            let reply = route("GET", "/", &space, 1000).unwrap();
            assert_eq!(reply.status, 200);
        }

        let space = space.lock().unwrap();
        assert_eq!((space.width, space.height), (16, 8));
        assert_eq!(space.background, Color::WHITE);
    }
}
