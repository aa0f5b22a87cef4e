//! # Clientes Service 設定
//!
//! 環境変数から Clientes Service サーバーの設定を読み込む。
//!
//! 読み込みは [`ServiceConfig::from_lookup`] に集約し、
//! テストでは環境変数を触らずに任意の値を与えられるようにする。

use std::str::FromStr;

use gestao_shared::observability::LogFormat;
use thiserror::Error;

/// デフォルトのバインドアドレス
const DEFAULT_HOST: &str = "0.0.0.0";
/// デフォルトのポート番号
const DEFAULT_PORT: u16 = 8080;
/// デフォルトの最大 DB 接続数
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// 設定の読み込みエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// 必須の環境変数が未設定
    #[error("{name} is not set")]
    Missing { name: &'static str },

    /// 値が解釈できない
    #[error("{name} has an invalid value {value:?}: {reason}")]
    Invalid {
        name:   &'static str,
        value:  String,
        reason: String,
    },
}

/// リポジトリの保存先
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryBackend {
    /// PostgreSQL
    Postgres {
        /// データベース接続 URL
        database_url:    String,
        /// 最大接続数
        max_connections: u32,
        /// 起動時にマイグレーションを適用するか
        run_migrations:  bool,
    },
    /// プロセス内メモリ（再起動で消える）
    Memory,
}

/// Clientes Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// バインドアドレス
    pub host:       String,
    /// ポート番号
    pub port:       u16,
    /// リポジトリの保存先
    pub backend:    RepositoryBackend,
    /// ログ出力形式
    pub log_format: LogFormat,
}

impl ServiceConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 名前から値を引く関数で設定を読み込む
    ///
    /// | 変数名 | デフォルト |
    /// |--------|-----------|
    /// | `CLIENTES_HOST` | `0.0.0.0` |
    /// | `CLIENTES_PORT` | `8080` |
    /// | `REPOSITORY_BACKEND` | `postgres`（`postgres` / `memory`） |
    /// | `DATABASE_URL` | `postgres` の場合は必須 |
    /// | `DB_MAX_CONNECTIONS` | `10` |
    /// | `DB_RUN_MIGRATIONS` | `false` |
    /// | `LOG_FORMAT` | `pretty`（`json` / `pretty`） |
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("CLIENTES_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or("CLIENTES_PORT", lookup("CLIENTES_PORT"), DEFAULT_PORT)?;
        let log_format = parse_or("LOG_FORMAT", lookup("LOG_FORMAT"), LogFormat::default())?;

        let backend = match lookup("REPOSITORY_BACKEND").as_deref() {
            None | Some("postgres") => RepositoryBackend::Postgres {
                database_url:    lookup("DATABASE_URL").ok_or(ConfigError::Missing {
                    name: "DATABASE_URL",
                })?,
                max_connections: parse_or(
                    "DB_MAX_CONNECTIONS",
                    lookup("DB_MAX_CONNECTIONS"),
                    DEFAULT_MAX_CONNECTIONS,
                )?,
                run_migrations:  parse_or(
                    "DB_RUN_MIGRATIONS",
                    lookup("DB_RUN_MIGRATIONS"),
                    false,
                )?,
            },
            Some("memory") => RepositoryBackend::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name:   "REPOSITORY_BACKEND",
                    value:  other.to_string(),
                    reason: "expected \"postgres\" or \"memory\"".to_string(),
                });
            }
        };

        Ok(Self {
            host,
            port,
            backend,
            log_format,
        })
    }
}

/// 値があればパースし、なければデフォルト値を返す
fn parse_or<T>(name: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(default),
        Some(value) => value.parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
            value,
        }),
    }
}
