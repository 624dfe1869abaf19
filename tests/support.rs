use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use linkscan::enums::ai_provider_error::AiProviderError;
use linkscan::structs::model_response::ModelResponse;
use linkscan::structs::remote_model_request::RemoteModelRequest;
use linkscan::traits::ai_provider::AiProvider;

/// Replays canned answers in order and remembers every request it saw.
pub struct FakeProvider {
    answers: Mutex<VecDeque<Result<ModelResponse, AiProviderError>>>,
    pub requests: Mutex<Vec<RemoteModelRequest>>,
}

impl FakeProvider {
    pub fn answering(answer: Result<ModelResponse, AiProviderError>) -> Arc<Self> {
        Self::sequence(vec![answer])
    }

    pub fn sequence(answers: Vec<Result<ModelResponse, AiProviderError>>) -> Arc<Self> {
        Arc::new(Self {
            answers: Mutex::new(answers.into()),
            requests: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl AiProvider for FakeProvider {
    async fn generate(&self, request: &RemoteModelRequest) -> Result<ModelResponse, AiProviderError> {
        self.requests.lock().unwrap().push(request.clone());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AiProviderError::NetworkError("fake provider has no answers left".to_string())))
    }
}

pub struct CapturedRequest {
    pub head: String,
    pub body: String,
}

/// Serves a single HTTP response on localhost and hands back what the client sent.
pub async fn serve_once(status_line: &str, body: &str) -> (String, oneshot::Receiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/v1beta", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 4096];

        let header_end = loop {
            let read = socket.read(&mut chunk).await.unwrap();
            assert!(read > 0, "client closed before sending headers");
            buffer.extend_from_slice(&chunk[..read]);
            if let Some(pos) = find(&buffer, b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&buffer[..header_end]).to_string();
        let content_length = head
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length").then(|| value.trim().parse::<usize>().ok())?
            })
            .unwrap_or(0);

        while buffer.len() < header_end + content_length {
            let read = socket.read(&mut chunk).await.unwrap();
            if read == 0 {
                break;
            }
            buffer.extend_from_slice(&chunk[..read]);
        }

        let body = String::from_utf8_lossy(&buffer[header_end..]).to_string();
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        let _ = tx.send(CapturedRequest { head, body });
    });

    (base_url, rx)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|window| window == needle)
}
