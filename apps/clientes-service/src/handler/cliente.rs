//! # 顧客ハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /api/clientes` - 顧客登録
//! - `GET /api/clientes/{id}` - ID による顧客取得
//!
//! レスポンスボディは成功・失敗とも `OperationResult<ClienteDto>`。

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path,
        State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use gestao_domain::cliente::ClienteId;
use gestao_shared::OperationResult;
use serde::Deserialize;
use uuid::Uuid;

use crate::usecase::{ClienteDto, CreateClienteInput, CreateClienteUseCase, GetClienteByIdUseCase};

/// 顧客 API の共有状態
pub struct ClienteState {
    pub create_usecase: CreateClienteUseCase,
    pub get_usecase:    GetClienteByIdUseCase,
}

/// 顧客登録リクエスト
///
/// `tradeName` が無い、または `null` の場合は空文字として扱い、ユースケースの検証で失敗させる。
/// `cnpj` が無い、または `null` の場合は「CNPJ 必須」エラーになる。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClienteRequest {
    pub trade_name: Option<String>,
    pub cnpj:       Option<String>,
}

/// POST /api/clientes
///
/// ## レスポンス
///
/// - `201 Created`: 登録された顧客（`Location` ヘッダー付き）
/// - `400 Bad Request`: 検証エラー、CNPJ 重複、JSON 不正、保存失敗
#[tracing::instrument(skip_all)]
pub async fn create_cliente(
    State(state): State<Arc<ClienteState>>,
    payload: Result<Json<CreateClienteRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "リクエストボディを解釈できません");
            let result = OperationResult::<ClienteDto>::failure(format!(
                "invalid request body: {}",
                rejection.body_text()
            ));
            return (StatusCode::BAD_REQUEST, Json(result)).into_response();
        }
    };

    tracing::info!(cnpj = req.cnpj.as_deref().unwrap_or_default(), "顧客登録リクエスト");

    let result = state
        .create_usecase
        .execute(CreateClienteInput {
            trade_name: req.trade_name.unwrap_or_default(),
            cnpj:       req.cnpj,
        })
        .await;

    let location = result.data().map(|dto| format!("/api/clientes/{}", dto.id));
    match location {
        Some(location) => (
            StatusCode::CREATED,
            [(header::LOCATION, location)],
            Json(result),
        )
            .into_response(),
        None => {
            tracing::warn!(message = result.message(), "顧客登録に失敗しました");
            (StatusCode::BAD_REQUEST, Json(result)).into_response()
        }
    }
}

/// GET /api/clientes/{id}
///
/// ## レスポンス
///
/// - `200 OK`: 顧客
/// - `404 Not Found`: 顧客が存在しない、ID が不正
#[tracing::instrument(skip_all)]
pub async fn get_cliente(
    State(state): State<Arc<ClienteState>>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Response {
    let Path(id) = match id {
        Ok(id) => id,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "顧客 ID を解釈できません");
            let result = OperationResult::<ClienteDto>::failure(format!(
                "invalid client id: {}",
                rejection.body_text()
            ));
            return (StatusCode::NOT_FOUND, Json(result)).into_response();
        }
    };

    tracing::info!(%id, "顧客取得リクエスト");

    let result = state.get_usecase.execute(ClienteId::from_uuid(id)).await;

    if result.succeeded() {
        (StatusCode::OK, Json(result)).into_response()
    } else {
        tracing::warn!(%id, message = result.message(), "顧客の取得に失敗しました");
        (StatusCode::NOT_FOUND, Json(result)).into_response()
    }
}
