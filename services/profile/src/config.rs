/// Profile service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ProfileConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3114). Env var: `PROFILE_PORT`.
    pub profile_port: u16,
    /// Base URL of the identity provider REST API (e.g. "http://auth:9999").
    pub auth_url: String,
    /// Service key sent to the identity provider on every request.
    pub auth_api_key: String,
    /// Base URL of the object storage HTTP API.
    pub storage_url: String,
    /// Bucket holding uploaded documents (default "documents"). Env var:
    /// `STORAGE_BUCKET`.
    pub storage_bucket: String,
    /// Service key sent to the object storage API.
    pub storage_api_key: String,
    /// HS256 secret the identity provider signs session tokens with.
    pub jwt_secret: String,
    /// Domain attribute set on the session cookie.
    pub cookie_domain: String,
}

impl ProfileConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            profile_port: std::env::var("PROFILE_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3114),
            auth_url: std::env::var("AUTH_URL").expect("AUTH_URL"),
            auth_api_key: std::env::var("AUTH_API_KEY").expect("AUTH_API_KEY"),
            storage_url: std::env::var("STORAGE_URL").expect("STORAGE_URL"),
            storage_bucket: std::env::var("STORAGE_BUCKET").unwrap_or_else(|_| "documents".into()),
            storage_api_key: std::env::var("STORAGE_API_KEY").expect("STORAGE_API_KEY"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            cookie_domain: std::env::var("COOKIE_DOMAIN").expect("COOKIE_DOMAIN"),
        }
    }
}
