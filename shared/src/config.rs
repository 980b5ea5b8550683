use anyhow::Result;
use std::env;

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub auth: AuthConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: env::var("DATABASE_HOST")?,
            port: env::var("DATABASE_PORT")?.parse::<u16>()?,
            username: env::var("DATABASE_USERNAME")?,
            password: env::var("DATABASE_PASSWORD")?,
            database: env::var("DATABASE_NAME")?,
        };
        let redis = RedisConfig {
            host: env::var("REDIS_HOST")?,
            port: env::var("REDIS_PORT")?.parse::<u16>()?,
        };
        let auth = AuthConfig {
            ttl: env::var("AUTH_TOKEN_TTL")?.parse::<u64>()?,
            initial_admin: InitialAdmin::from_env(),
        };
        let server = ServerConfig {
            port: match env::var("PORT") {
                Ok(port) => port.parse::<u16>()?,
                Err(_) => 8080,
            },
        };
        Ok(Self {
            database,
            redis,
            auth,
            server,
        })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

pub struct RedisConfig {
    pub host: String,
    pub port: u16,
}

pub struct AuthConfig {
    /// アクセストークンの有効期間（秒）
    pub ttl: u64,
    pub initial_admin: Option<InitialAdmin>,
}

/// 起動時に users テーブルへ登録する最初の管理者。
/// ADMIN_EMAIL と ADMIN_PASSWORD の両方がそろっている場合のみ有効。
#[derive(Clone)]
pub struct InitialAdmin {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl InitialAdmin {
    fn from_env() -> Option<Self> {
        let email = env::var("ADMIN_EMAIL").ok()?;
        let password = env::var("ADMIN_PASSWORD").ok()?;
        let name = env::var("ADMIN_NAME").unwrap_or_else(|_| "Administrator".into());
        Some(Self {
            name,
            email,
            password,
        })
    }
}

pub struct ServerConfig {
    pub port: u16,
}
