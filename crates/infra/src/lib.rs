//! # Gestão de Clientes インフラ層
//!
//! 外部システム（PostgreSQL）との接続を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **データベース接続**: PostgreSQL への接続プール管理とマイグレーション
//! - **リポジトリ実装**: 顧客リポジトリの PostgreSQL 実装とインメモリ実装
//!
//! ## 依存関係
//!
//! ```text
//! clientes-service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - PostgreSQL データベース接続管理
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと実装
//! - `mock` - テスト用モック（`test-utils` feature）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use gestao_infra::{db, repository::PostgresClienteRepository};
//!
//! async fn setup() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = db::create_pool("postgres://localhost/gestao_clientes", 10).await?;
//!     db::run_migrations(&pool).await?;
//!     let repo = PostgresClienteRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
#[cfg(feature = "test-utils")]
pub mod mock;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
