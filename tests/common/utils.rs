use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use once_cell::sync::Lazy;
use secrecy::ExposeSecret;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use uuid::Uuid;

use wavefeed_backend::run;
use wavefeed_backend::config::settings::{get_config, get_jwt_settings, DatabaseSettings};
use wavefeed_backend::services::{ChatService, UploadTransportService};
use wavefeed_backend::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::stdout
        );
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::sink
        );
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    pub jwt_secret: String,
    pub transport_stub: StubServer,
    pub chat_stub: StubServer,
}

/// One request captured by a stubbed external service.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: serde_json::Value,
}

/// Stand-in for an external HTTP service: records every request it
/// receives and answers 200 with an empty JSON object.
pub struct StubServer {
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn record_request(
    req: HttpRequest,
    body: web::Bytes,
    store: web::Data<Arc<Mutex<Vec<RecordedRequest>>>>,
) -> HttpResponse {
    let body = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    store.lock().unwrap().push(RecordedRequest {
        method: req.method().to_string(),
        path: req.path().to_string(),
        body,
    });
    HttpResponse::Ok().json(serde_json::json!({}))
}

pub async fn spawn_stub_server() -> StubServer {
    let listener = TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind stub port");
    let port = listener.local_addr().unwrap().port();
    let requests: Arc<Mutex<Vec<RecordedRequest>>> = Arc::new(Mutex::new(Vec::new()));
    let store = web::Data::new(requests.clone());

    let server = HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .default_service(web::route().to(record_request))
    })
    .listen(listener)
    .expect("Failed to start stub server")
    .run();
    let _ = tokio::spawn(server);

    StubServer {
        url: format!("http://127.0.0.1:{}", port),
        requests,
    }
}

/// Spin up the application on a random port against a fresh database,
/// with the upload transport and chat backend replaced by local stubs.
pub async fn spawn_app() -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    // Get port assigned by the OS
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let mut configuration = get_config().expect("Failed to read configuration.");
    configuration.database.db_name = Uuid::new_v4().to_string();
    // Each test gets its own database, built from host credentials
    configuration.database.db_url = None;
    let connection_pool = configure_db(&configuration.database).await;

    let transport_stub = spawn_stub_server().await;
    let chat_stub = spawn_stub_server().await;
    configuration.uploads.api_url = transport_stub.url.clone();
    configuration.chat.api_url = chat_stub.url.clone();

    let jwt_settings = get_jwt_settings(&configuration);
    let jwt_secret = configuration.jwt.secret.expose_secret().to_string();

    let upload_transport = UploadTransportService::new(configuration.uploads.clone());
    let chat_service = ChatService::new(configuration.chat.clone());

    let server = run(
        listener,
        connection_pool.clone(),
        jwt_settings,
        upload_transport,
        chat_service,
    )
    .expect("Failed to bind address");
    // Launch the server as a background task
    let _ = tokio::spawn(server);

    TestApp {
        address,
        db_pool: connection_pool,
        jwt_secret,
        transport_stub,
        chat_stub,
    }
}

pub async fn configure_db(config: &DatabaseSettings) -> PgPool {
    // Create database
    let mut connection = PgConnection::connect(&config.connection_string_without_db())
        .await
        .expect("Failed to connect to Postgres");
    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.db_name).as_str())
        .await
        .expect("Failed to create database.");

    // Migrate database
    let connection_pool = PgPool::connect(&config.connection_string().expose_secret())
        .await
        .expect("Failed to connect to Postgres.");
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate the database");

    connection_pool
}

/// Insert a user row the way the registration service would have.
pub async fn insert_test_user(pool: &PgPool, avatar_url: Option<&str>) -> Uuid {
    let user_id = Uuid::new_v4();
    sqlx::query("INSERT INTO users (id, username, avatar_url) VALUES ($1, $2, $3)")
        .bind(user_id)
        .bind(format!("user-{}", user_id))
        .bind(avatar_url)
        .execute(pool)
        .await
        .expect("Failed to insert test user");
    user_id
}

pub async fn media_row_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM media")
        .fetch_one(pool)
        .await
        .expect("Failed to count media rows")
}

#[derive(serde::Serialize)]
struct TestClaims {
    sub: String,
    username: String,
    exp: usize,
}

/// Mint a token the way the session-validation service would.
pub fn mint_token(test_app: &TestApp, user_id: Uuid, username: &str) -> String {
    let claims = TestClaims {
        sub: user_id.to_string(),
        username: username.to_string(),
        exp: (Utc::now().timestamp() + 3600) as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(test_app.jwt_secret.as_bytes()),
    )
    .expect("Failed to mint test token")
}

/// Same shape, signed with the wrong secret.
pub fn mint_forged_token(user_id: Uuid, username: &str) -> String {
    let claims = TestClaims {
        sub: user_id.to_string(),
        username: username.to_string(),
        exp: (Utc::now().timestamp() + 3600) as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"not-the-signing-secret"),
    )
    .expect("Failed to mint forged token")
}
