//! Shared test utilities: a local stand-in for the developer tools endpoint

use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use tiny_http::{Header, Response, Server};

pub const EXA_RESPONSE: &str = r#"{"tools":[{"id":"exa","name":"Exa","icon":"exa","description":"Search","envKeys":["EXA_API_KEY"],"connected":true,"maskedKey":"sk-...ab12","sampleEnv":"EXA_API_KEY=your_key_here"}]}"#;

/// HTTP server answering `GET /api/developer-tools` with a fixed reply
pub struct MockToolsServer {
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<String>>>,
    server: Arc<Server>,
    handle: Option<JoinHandle<()>>,
}

impl MockToolsServer {
    /// Start a server on an ephemeral port
    pub fn start(status: u16, body: &str) -> Self {
        let server = Arc::new(Server::http("127.0.0.1:0").expect("Failed to bind mock server"));
        let addr = server
            .server_addr()
            .to_ip()
            .expect("Mock server should listen on TCP");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let handle = {
            let server = Arc::clone(&server);
            let requests = Arc::clone(&requests);
            let body = body.to_string();
            thread::spawn(move || {
                for request in server.incoming_requests() {
                    let url = request.url().to_string();
                    requests.lock().unwrap().push(url.clone());

                    let response = if url == "/api/developer-tools" {
                        Response::from_string(body.clone())
                            .with_status_code(status)
                            .with_header(
                                Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                                    .unwrap(),
                            )
                    } else {
                        Response::from_string("not found").with_status_code(404)
                    };
                    let _ = request.respond(response);
                }
            })
        };

        Self {
            base_url: format!("http://{}", addr),
            requests,
            server,
            handle: Some(handle),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Drop for MockToolsServer {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
