//! # Clientes Service サーバー
//!
//! 顧客（Cliente）の登録と取得を提供する HTTP API。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `CLIENTES_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `CLIENTES_PORT` | No | ポート番号（デフォルト: `8080`） |
//! | `REPOSITORY_BACKEND` | No | `postgres`（デフォルト）または `memory` |
//! | `DATABASE_URL` | `postgres` の場合 **Yes** | PostgreSQL 接続 URL |
//! | `DB_MAX_CONNECTIONS` | No | 最大接続数（デフォルト: `10`） |
//! | `DB_RUN_MIGRATIONS` | No | 起動時にマイグレーションを適用するか（デフォルト: `false`） |
//! | `LOG_FORMAT` | No | `pretty`（デフォルト）または `json` |
//! | `RUST_LOG` | No | ログレベル（デフォルト: `info,gestao=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # DB なしで起動
//! REPOSITORY_BACKEND=memory cargo run -p gestao-clientes-service
//!
//! # PostgreSQL を使用
//! DATABASE_URL=postgres://... DB_RUN_MIGRATIONS=true cargo run -p gestao-clientes-service --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use gestao_clientes_service::{
    build_app,
    config::{RepositoryBackend, ServiceConfig},
};
use gestao_domain::clock::SystemClock;
use gestao_infra::{
    db,
    repository::{ClienteRepository, InMemoryClienteRepository, PostgresClienteRepository},
};
use gestao_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let config = ServiceConfig::from_env().context("設定の読み込みに失敗しました")?;

    let tracing_config = TracingConfig::new("clientes-service", config.log_format);
    let service_name = tracing_config.service_name.clone();
    init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = %service_name).entered();

    tracing::info!(
        "Clientes Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let repository: Arc<dyn ClienteRepository> = match &config.backend {
        RepositoryBackend::Postgres {
            database_url,
            max_connections,
            run_migrations,
        } => {
            let pool = db::create_pool(database_url, *max_connections)
                .await
                .context("データベース接続に失敗しました")?;
            tracing::info!("データベースに接続しました");

            if *run_migrations {
                db::run_migrations(&pool)
                    .await
                    .context("マイグレーションの適用に失敗しました")?;
                tracing::info!("マイグレーションを適用しました");
            }

            Arc::new(PostgresClienteRepository::new(pool))
        }
        RepositoryBackend::Memory => {
            tracing::warn!("インメモリリポジトリを使用します（再起動でデータは消えます）");
            Arc::new(InMemoryClienteRepository::new())
        }
    };

    let app = build_app(repository, Arc::new(SystemClock));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Clientes Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
