use anyhow::Result;
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub database_url: String,
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub positionstack_api_key: String,
    pub positionstack_base_url: String,
    pub records_path: String,
    pub collaborator_timeout_secs: u64,
    pub log_level: String,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
        let bind_addr = format!("{}:{}", host, port);

        let gemini_api_key = env::var("GEMINI_API_KEY").unwrap_or_default();
        let gemini_base_url = env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string());
        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-1.5-flash".to_string());

        let positionstack_api_key = env::var("POSITIONSTACK_API_KEY").unwrap_or_default();
        let positionstack_base_url = env::var("POSITIONSTACK_BASE_URL")
            .unwrap_or_else(|_| "https://api.positionstack.com".to_string());

        let records_path = env::var("RECORDS_PATH").unwrap_or_else(|_| "Records.json".to_string());

        let collaborator_timeout_secs = env::var("COLLABORATOR_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10);

        let db_host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
        let db_port = env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());
        let db_name = env::var("DB_DATABASE").unwrap_or_else(|_| "whereabouts".to_string());
        let db_user = env::var("DB_USER").unwrap_or_else(|_| "whereabouts".to_string());
        let db_pwd = env::var("DB_PWD").unwrap_or_else(|_| "whereabouts".to_string());

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            format!(
                "postgres://{}:{}@{}:{}/{}",
                db_user, db_pwd, db_host, db_port, db_name
            )
        });

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            bind_addr,
            database_url,
            gemini_api_key,
            gemini_base_url,
            gemini_model,
            positionstack_api_key,
            positionstack_base_url,
            records_path,
            collaborator_timeout_secs,
            log_level,
        })
    }
}
