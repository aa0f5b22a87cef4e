//! # Gestão de Clientes ドメイン層
//!
//! 顧客（Cliente）管理のビジネスルールを担うドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **値オブジェクト**: 生成時に自己検証する不変オブジェクト（例: [`cnpj::Cnpj`]）
//! - **集約ルート**: ガード付きの操作でのみ状態を変更するエンティティ（例: [`cliente::Cliente`]）
//! - **ドメインエラー**: 検証失敗は panic ではなく `Result` で返す
//!
//! ## 依存関係の方向
//!
//! ```text
//! clientes-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）に一切依存しない。
//! 時刻も [`clock::Clock`] 経由で外から渡す。
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use gestao_domain::{cliente::Cliente, cnpj::Cnpj};
//!
//! let cnpj = Cnpj::new("11.222.333/0001-81")?;
//! let cliente = Cliente::new("Empresa Teste LTDA", cnpj, chrono::Utc::now())?;
//!
//! assert_eq!(cliente.to_string(), "Empresa Teste LTDA - 11.222.333/0001-81");
//! # Ok(())
//! # }
//! ```

pub mod cliente;
pub mod clock;
pub mod cnpj;
pub mod error;

pub use error::DomainError;
