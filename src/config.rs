// src/config.rs

use crate::{
    db::{InventoryRepository, WarehouseRepository},
    services::{InventoryService, WarehouseService},
};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
    str::FromStr,
    time::Duration,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Variável de ambiente obrigatória ausente: {0}")]
    MissingVar(&'static str),

    #[error("Valor inválido para {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Configuração do processo, montada uma única vez na inicialização.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub request_timeout: Duration,
    pub static_dir: PathBuf,
    // Vazio = qualquer origem
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Lê o `.env` (se existir) e as variáveis de ambiente do processo.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingVar("DATABASE_URL"))?;

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            host: parse_or(&lookup, "HOST", IpAddr::V4(Ipv4Addr::UNSPECIFIED))?,
            port: parse_or(&lookup, "PORT", 8080)?,
            database_url,
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 5)?,
            acquire_timeout: Duration::from_secs(parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 3)?),
            request_timeout: Duration::from_secs(parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30)?),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public")),
            allowed_origins,
        })
    }

    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub warehouse_service: WarehouseService,
    pub inventory_service: InventoryService,
}

impl AppState {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect(&config.database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::from_pool(db_pool))
    }

    // --- Monta o gráfico de dependências ---
    pub fn from_pool(db_pool: PgPool) -> Self {
        let warehouse_repo = WarehouseRepository::new(db_pool.clone());
        let inventory_repo = InventoryRepository::new(db_pool.clone());

        let warehouse_service = WarehouseService::new(
            warehouse_repo.clone(),
            inventory_repo.clone(),
            db_pool.clone(),
        );
        let inventory_service =
            InventoryService::new(inventory_repo, warehouse_repo, db_pool.clone());

        Self {
            db_pool,
            warehouse_service,
            inventory_service,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config =
            Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/instock")]))
                .unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout, Duration::from_secs(3));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert!(config.allowed_origins.is_empty());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/instock"),
            ("HOST", "127.0.0.1"),
            ("PORT", "5050"),
            ("DB_MAX_CONNECTIONS", "12"),
            ("STATIC_DIR", "assets"),
            ("ALLOWED_ORIGINS", "http://localhost:3000, https://instock.example ,"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:5050".parse::<SocketAddr>().unwrap());
        assert_eq!(config.max_connections, 12);
        assert_eq!(config.static_dir, PathBuf::from("assets"));
        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost:3000".to_string(), "https://instock.example".to_string()]
        );
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let err = Config::from_lookup(lookup(&[("PORT", "5050")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("DATABASE_URL")));
    }

    #[test]
    fn invalid_numbers_are_reported_with_their_key() {
        let err = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/instock"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();

        match err {
            ConfigError::InvalidValue { key, value } => {
                assert_eq!(key, "PORT");
                assert_eq!(value, "eighty");
            }
            other => panic!("esperava InvalidValue, veio {other:?}"),
        }
    }
}
