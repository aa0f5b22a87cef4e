//! # アプリケーション構築
//!
//! ユースケースと State の組み立て、ルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use gestao_domain::clock::Clock;
use gestao_infra::repository::ClienteRepository;
use tower_http::trace::TraceLayer;

use crate::{
    handler::{ClienteState, create_cliente, get_cliente, health_check},
    usecase::{CreateClienteUseCase, GetClienteByIdUseCase},
};

/// ルーターを構築する
///
/// リポジトリの実装（PostgreSQL / インメモリ / モック）と時計は呼び出し元が選ぶ。
pub fn build_app(repository: Arc<dyn ClienteRepository>, clock: Arc<dyn Clock>) -> Router {
    let cliente_state = Arc::new(ClienteState {
        create_usecase: CreateClienteUseCase::new(repository.clone(), clock),
        get_usecase:    GetClienteByIdUseCase::new(repository),
    });

    Router::new()
        .route("/health", get(health_check))
        .route("/api/clientes", post(create_cliente))
        .route("/api/clientes/{id}", get(get_cliente))
        .with_state(cliente_state)
        .layer(TraceLayer::new_for_http())
}
