use liveclass_backend::{
    api::router::create_router,
    state::AppState,
    config::Config,
    domain::models::{auth::Claims, user::User},
    domain::ports::TutorService,
    infra::repositories::{
        sqlite_live_class_repo::SqliteLiveClassRepo,
        sqlite_user_repo::SqliteUserRepo,
    },
    error::AppError,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "test-secret-key";

pub struct MockTutorService;

#[async_trait]
impl TutorService for MockTutorService {
    async fn answer(&self, _api_key: &str, question: &str) -> Result<String, AppError> {
        Ok(format!("Mock tutor answer to: {}", question))
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            jwt_secret: TEST_JWT_SECRET.to_string(),
            gemini_api_key: Some("test-gemini-key".to_string()),
        };

        let state = Arc::new(AppState {
            config: config.clone(),
            live_class_repo: Arc::new(SqliteLiveClassRepo::new(pool.clone())),
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            tutor_service: Arc::new(MockTutorService),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn create_user(&self, first_name: &str, last_name: &str, email: &str, role: &str) -> User {
        let user = User::new(
            first_name.to_string(),
            last_name.to_string(),
            email.to_string(),
            role.to_string(),
        );
        self.state.user_repo.create(&user).await.expect("Failed to create test user")
    }

    pub async fn create_instructor(&self, first_name: &str, last_name: &str, email: &str) -> User {
        self.create_user(first_name, last_name, email, "Instructor").await
    }

    pub async fn create_student(&self, first_name: &str, last_name: &str, email: &str) -> User {
        self.create_user(first_name, last_name, email, "Student").await
    }

    /// Mint an access token the way the platform's auth service would.
    pub fn token_for(&self, user: &User) -> String {
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: user.id.clone(),
            exp: now + 3600,
            iat: now,
            role: user.role.clone(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
        )
        .expect("Failed to sign test token")
    }

    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> axum::response::Response {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.router.clone().oneshot(request).await.unwrap()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
