use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub max_db_connections: u32,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        // Determine environment (defaults to dev)
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());

        // Build configuration from config/*.toml + ENV overrides
        let config_builder = config::Config::builder()
            .add_source(
                config::File::with_name(&format!("config/{}", app_env)).required(false), // Allow missing config file, fallback to ENV
            )
            // Override with environment variables (prefix: APP_)
            .add_source(config::Environment::with_prefix("APP").separator("__"));

        let settings = config_builder.build()?;

        let database_url = settings
            .get_string("database.url")
            .or_else(|_| env::var("DATABASE_URL"))
            .unwrap_or_else(|_| {
                eprintln!("WARNING: DATABASE_URL not set, using local quizrh.db");
                "sqlite:quizrh.db?mode=rwc".to_string()
            });

        let port = settings
            .get_int("server.port")
            .ok()
            .and_then(|p| u16::try_from(p).ok())
            .or_else(|| env::var("PORT").ok().and_then(|p| p.parse::<u16>().ok()))
            .unwrap_or(3000);

        let max_db_connections = settings
            .get_int("database.max_connections")
            .ok()
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(10);

        Ok(Config {
            database_url,
            port,
            max_db_connections,
        })
    }
}
