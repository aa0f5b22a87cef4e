//! 顧客登録ユースケース

use std::sync::Arc;

use gestao_domain::{
    cliente::{Cliente, ClienteError},
    clock::Clock,
    cnpj::Cnpj,
};
use gestao_infra::repository::ClienteRepository;
use gestao_shared::OperationResult;

use super::ClienteDto;
use crate::error::CoreError;

pub const CREATED_MESSAGE: &str = "client created successfully.";
pub const DUPLICATE_CNPJ_MESSAGE: &str = "a client with this CNPJ is already registered";
const CREATE_ERROR_CONTEXT: &str = "error creating client";

/// 顧客登録の入力
///
/// `cnpj` が `None` の場合はリクエストに CNPJ が含まれていなかったことを表す。
#[derive(Debug, Clone)]
pub struct CreateClienteInput {
    pub trade_name: String,
    pub cnpj:       Option<String>,
}

/// 顧客登録ユースケース
pub struct CreateClienteUseCase {
    repository: Arc<dyn ClienteRepository>,
    clock:      Arc<dyn Clock>,
}

impl CreateClienteUseCase {
    pub fn new(repository: Arc<dyn ClienteRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// 顧客を登録する
    ///
    /// 1. CNPJ を検証（不正ならリポジトリは呼ばない）
    /// 2. 同じ CNPJ の顧客が存在しないことを確認
    /// 3. Cliente を生成（屋号の検証）
    /// 4. 保存（一意制約違反は重複として扱う）
    #[tracing::instrument(skip_all, fields(cnpj = input.cnpj.as_deref().unwrap_or_default()))]
    pub async fn execute(&self, input: CreateClienteInput) -> OperationResult<ClienteDto> {
        match self.create(input).await {
            Ok(cliente) => {
                tracing::info!(id = %cliente.id(), "顧客を登録しました");
                OperationResult::success(ClienteDto::from(&cliente), CREATED_MESSAGE)
            }
            Err(e @ CoreError::Infrastructure { .. }) => {
                tracing::error!(error = %e, "顧客の登録に失敗しました");
                e.into()
            }
            Err(e) => {
                tracing::warn!(kind = e.kind(), error = %e, "顧客の登録を拒否しました");
                e.into()
            }
        }
    }

    async fn create(&self, input: CreateClienteInput) -> Result<Cliente, CoreError> {
        let cnpj = Cnpj::new(input.cnpj.ok_or(ClienteError::MissingCnpj)?)?;

        let existing = self
            .repository
            .find_by_cnpj(&cnpj)
            .await
            .map_err(CoreError::infrastructure(CREATE_ERROR_CONTEXT))?;
        if existing.is_some() {
            return Err(CoreError::Conflict(DUPLICATE_CNPJ_MESSAGE.to_string()));
        }

        let cliente = Cliente::new(&input.trade_name, cnpj, self.clock.now())?;

        // 確認から保存までの間に同じ CNPJ が登録された場合は一意制約違反になる
        match self.repository.insert(&cliente).await {
            Ok(()) => Ok(cliente),
            Err(e) if e.as_conflict().is_some() => {
                Err(CoreError::Conflict(DUPLICATE_CNPJ_MESSAGE.to_string()))
            }
            Err(e) => Err(CoreError::infrastructure(CREATE_ERROR_CONTEXT)(e)),
        }
    }
}
