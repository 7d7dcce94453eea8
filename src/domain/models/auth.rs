use serde::{Deserialize, Serialize};

/// Access-token claims. Tokens are issued by the platform's auth service;
/// this backend only verifies them and reads the caller id and role.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    pub iat: usize,
    pub role: String,
}
