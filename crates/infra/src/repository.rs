//! # リポジトリ
//!
//! 顧客集約の永続化を担うリポジトリトレイトと、その実装を提供する。
//!
//! - [`PostgresClienteRepository`][]: 本番用（sqlx + PostgreSQL）
//! - [`InMemoryClienteRepository`][]: DB なしで動かすための実装（開発・E2E テスト用）
//!
//! どちらの実装も CNPJ の一意性を保存時に強制し、
//! 重複は [`InfraErrorKind::Conflict`](crate::InfraErrorKind::Conflict) で返す。

pub mod cliente_repository;
pub mod in_memory_cliente_repository;

pub use cliente_repository::{ClienteRepository, PostgresClienteRepository};
pub use in_memory_cliente_repository::InMemoryClienteRepository;
