//! # ドメイン層エラー定義
//!
//! 値オブジェクト・集約ごとのエラー型を 1 つにまとめる。
//!
//! ## エラーの種類
//!
//! | エラー種別 | 発生箇所 | 用途 |
//! |-----------|---------|------|
//! | [`CnpjError`] | [`Cnpj::new`](crate::cnpj::Cnpj::new) | CNPJ の形式・チェックディジット違反 |
//! | [`ClienteError`] | [`Cliente`](crate::cliente::Cliente) の生成・変更 | 名称の長さ、状態遷移の違反 |
//!
//! どちらも利用者の入力に起因する回復可能なエラーであり、
//! ユースケース層で失敗結果（`OperationResult`）に変換される。
//!
//! ## 使用例
//!
//! ```rust
//! use gestao_domain::{DomainError, cnpj::Cnpj};
//!
//! fn parse(raw: &str) -> Result<Cnpj, DomainError> {
//!     Ok(Cnpj::new(raw)?)
//! }
//!
//! let error = parse("11111111111111").unwrap_err();
//! assert_eq!(error.kind(), "repeated_digits");
//! ```

use thiserror::Error;

pub use crate::{cliente::ClienteError, cnpj::CnpjError};

/// ドメイン層で発生するエラー
///
/// メッセージは各エラー型の `Display` をそのまま使う（`transparent`）。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// CNPJ の検証エラー
    #[error(transparent)]
    Cnpj(#[from] CnpjError),

    /// 顧客エンティティの検証・状態遷移エラー
    #[error(transparent)]
    Cliente(#[from] ClienteError),
}

impl DomainError {
    /// ログ出力用のエラー種別（snake_case）
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::Cnpj(e) => e.into(),
            DomainError::Cliente(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_displayは内側のエラーメッセージをそのまま出力する() {
        let error = DomainError::from(CnpjError::InvalidCheckDigits);
        assert_eq!(error.to_string(), CnpjError::InvalidCheckDigits.to_string());
    }

    #[test]
    fn test_kindはバリアント名をsnake_caseで返す() {
        assert_eq!(
            DomainError::from(CnpjError::InvalidLength { found: 3 }).kind(),
            "invalid_length"
        );
        assert_eq!(
            DomainError::from(ClienteError::AlreadyInactive).kind(),
            "already_inactive"
        );
    }
}
