use super::{
    cors_config::{self, CorsHeaders},
    server_config::ServerConfig,
};

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: CorsHeaders,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
        }
    }
}
