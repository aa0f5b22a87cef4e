//! 顧客取得ユースケース

use std::sync::Arc;

use gestao_domain::cliente::{Cliente, ClienteId};
use gestao_infra::repository::ClienteRepository;
use gestao_shared::OperationResult;

use super::ClienteDto;
use crate::error::CoreError;

pub const RETRIEVED_MESSAGE: &str = "client retrieved successfully.";
pub const NOT_FOUND_MESSAGE: &str = "client not found";
pub const ID_REQUIRED_MESSAGE: &str = "client id is required";
const RETRIEVE_ERROR_CONTEXT: &str = "error retrieving client";

/// ID による顧客取得ユースケース
pub struct GetClienteByIdUseCase {
    repository: Arc<dyn ClienteRepository>,
}

impl GetClienteByIdUseCase {
    pub fn new(repository: Arc<dyn ClienteRepository>) -> Self {
        Self { repository }
    }

    /// 顧客を取得する
    ///
    /// nil UUID は検索せずに失敗とする。
    #[tracing::instrument(skip_all, fields(%id))]
    pub async fn execute(&self, id: ClienteId) -> OperationResult<ClienteDto> {
        match self.find(id).await {
            Ok(cliente) => OperationResult::success(ClienteDto::from(&cliente), RETRIEVED_MESSAGE),
            Err(e @ CoreError::Infrastructure { .. }) => {
                tracing::error!(error = %e, "顧客の取得に失敗しました");
                e.into()
            }
            Err(e) => {
                tracing::warn!(kind = e.kind(), error = %e, "顧客の取得を拒否しました");
                e.into()
            }
        }
    }

    async fn find(&self, id: ClienteId) -> Result<Cliente, CoreError> {
        if id.is_nil() {
            return Err(CoreError::BadRequest(ID_REQUIRED_MESSAGE.to_string()));
        }

        self.repository
            .find_by_id(&id)
            .await
            .map_err(CoreError::infrastructure(RETRIEVE_ERROR_CONTEXT))?
            .ok_or_else(|| CoreError::NotFound(NOT_FOUND_MESSAGE.to_string()))
    }
}
