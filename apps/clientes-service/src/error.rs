//! # Clientes Service エラー定義
//!
//! ユースケース内部で使うエラーと、操作結果（`OperationResult`）への変換を定義する。
//!
//! ユースケースは `Result<_, CoreError>` と `?` で処理を組み立て、
//! 公開メソッドの境界で `OperationResult` に変換する。
//! そのため呼び出し元（ハンドラ）にエラーが漏れることはない。

use gestao_domain::{DomainError, cliente::ClienteError, cnpj::CnpjError};
use gestao_infra::InfraError;
use gestao_shared::OperationResult;
use thiserror::Error;

/// Clientes Service で発生するエラー
///
/// `Display` の出力がそのまま操作結果のメッセージになる。
#[derive(Debug, Error)]
pub enum CoreError {
    /// ドメインの検証エラー
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// 不正なリクエスト
    #[error("{0}")]
    BadRequest(String),

    /// 一意性の競合
    #[error("{0}")]
    Conflict(String),

    /// リソースが見つからない
    #[error("{0}")]
    NotFound(String),

    /// インフラ層のエラー
    #[error("{context}: {source}")]
    Infrastructure {
        /// 失敗した操作の説明（例: "error creating client"）
        context: &'static str,
        #[source]
        source:  InfraError,
    },
}

impl CoreError {
    /// インフラ層エラーを操作の説明付きで包む
    ///
    /// `map_err(CoreError::infrastructure("..."))` の形で使う。
    pub fn infrastructure(context: &'static str) -> impl FnOnce(InfraError) -> Self {
        move |source| Self::Infrastructure { context, source }
    }

    /// ログ出力用のエラー種別
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.kind(),
            Self::BadRequest(_) => "bad_request",
            Self::Conflict(_) => "conflict",
            Self::NotFound(_) => "not_found",
            Self::Infrastructure { .. } => "infrastructure",
        }
    }
}

impl From<CnpjError> for CoreError {
    fn from(e: CnpjError) -> Self {
        Self::Validation(e.into())
    }
}

impl From<ClienteError> for CoreError {
    fn from(e: ClienteError) -> Self {
        Self::Validation(e.into())
    }
}

impl<T> From<CoreError> for OperationResult<T> {
    fn from(e: CoreError) -> Self {
        OperationResult::failure(e.to_string())
    }
}
