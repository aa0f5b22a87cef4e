//! # 顧客ユースケース
//!
//! - [`command::CreateClienteUseCase`][]: 顧客登録
//! - [`query::GetClienteByIdUseCase`][]: ID による顧客取得
//!
//! どちらも [`ClienteDto`] を `OperationResult` に包んで返す。

pub mod command;
pub mod query;

use chrono::{DateTime, Utc};
use gestao_domain::cliente::Cliente;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 顧客の読み取りモデル
///
/// JSON のフィールド名は camelCase。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClienteDto {
    pub id:             Uuid,
    pub trade_name:     String,
    /// 区切り文字なしの 14 桁
    pub cnpj:           String,
    /// `DD.DDD.DDD/DDDD-DD` 形式
    pub cnpj_formatted: String,
    pub active:         bool,
    pub created_at:     DateTime<Utc>,
    pub updated_at:     Option<DateTime<Utc>>,
}

impl From<&Cliente> for ClienteDto {
    fn from(cliente: &Cliente) -> Self {
        Self {
            id:             *cliente.id().as_uuid(),
            trade_name:     cliente.trade_name().to_string(),
            cnpj:           cliente.cnpj().as_str().to_string(),
            cnpj_formatted: cliente.cnpj().formatted(),
            active:         cliente.is_active(),
            created_at:     cliente.created_at(),
            updated_at:     cliente.updated_at(),
        }
    }
}
