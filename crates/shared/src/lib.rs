//! # Gestão de Clientes 共有ユーティリティ
//!
//! サービス全体で使用される共通型を提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（domain, infra, clientes-service）から依存できる
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - トレーシング初期化は `observability` feature でのみ有効化する

pub mod health;
pub mod observability;
pub mod operation_result;

pub use health::HealthResponse;
pub use operation_result::OperationResult;
