use std::sync::{Arc, Mutex};

use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::{json, Value};

use spring_ai_chat::{ApiClient, ApiConfig, ChatService};

/// How the simulated backend answers every request.
#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    /// Answers `{ "response": "echo: <prompt or message>" }`.
    Echo,
    Status(u16),
    Malformed,
}

#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub content_type: Option<String>,
    pub body: Value,
}

struct BackendState {
    reply: Reply,
    requests: Mutex<Vec<Recorded>>,
}

pub struct Backend {
    pub base_url: String,
    state: web::Data<BackendState>,
}

impl Backend {
    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn chat_service(&self) -> ChatService {
        let client = ApiClient::new(&ApiConfig::new(self.base_url.clone())).unwrap();
        ChatService::new(Arc::new(client))
    }
}

async fn record(req: HttpRequest, body: web::Bytes, data: web::Data<BackendState>) -> HttpResponse {
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let content_type = req
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    data.requests.lock().unwrap().push(Recorded {
        path: req.path().to_string(),
        content_type,
        body: body.clone(),
    });

    match &data.reply {
        Reply::Json(value) => HttpResponse::Ok().json(value),
        Reply::Echo => {
            let text = body
                .get("prompt")
                .or_else(|| body.get("message"))
                .and_then(Value::as_str)
                .unwrap_or_default();
            HttpResponse::Ok().json(json!({ "response": format!("echo: {}", text) }))
        }
        Reply::Status(code) => {
            let status = StatusCode::from_u16(*code).unwrap();
            HttpResponse::build(status).body("backend exploded")
        }
        Reply::Malformed => HttpResponse::Ok()
            .content_type("application/json")
            .body(r#"{"response": "hel"#),
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Starts a backend on an ephemeral port, mounted like the real one under `/api`.
pub async fn spawn_backend(reply: Reply) -> anyhow::Result<Backend> {
    init_logging();

    let state = web::Data::new(BackendState {
        reply,
        requests: Mutex::new(Vec::new()),
    });
    let app_state = state.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .default_service(web::to(record))
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))?;

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());

    Ok(Backend {
        base_url: format!("http://{}/api", addr),
        state,
    })
}
