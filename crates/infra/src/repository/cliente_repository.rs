//! # ClienteRepository
//!
//! 顧客の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **CNPJ の一意性**: `IX_Clientes_Cnpj` 一意インデックスで保証し、
//!   違反は [`InfraError::conflict`] に変換する
//! - **復元時の再検証**: DB の値は [`Cnpj::new`] と [`TradeName::new`] を通してから
//!   ドメインモデルに戻す。検証に失敗した行は [`InfraError::unexpected`] とする
//! - **キャンセル**: 返された Future を drop すると処理は中断される

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gestao_domain::{
    cliente::{Cliente, ClienteId, TradeName},
    cnpj::Cnpj,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::InfraError;

/// 顧客リポジトリトレイト
#[async_trait]
pub trait ClienteRepository: Send + Sync {
    /// 顧客を追加する
    ///
    /// 同じ CNPJ の顧客が既に存在する場合は Conflict を返す。
    async fn insert(&self, cliente: &Cliente) -> Result<(), InfraError>;

    /// ID で顧客を検索する
    async fn find_by_id(&self, id: &ClienteId) -> Result<Option<Cliente>, InfraError>;

    /// CNPJ で顧客を検索する
    async fn find_by_cnpj(&self, cnpj: &Cnpj) -> Result<Option<Cliente>, InfraError>;

    /// CNPJ の顧客が存在するか判定する
    async fn exists_by_cnpj(&self, cnpj: &Cnpj) -> Result<bool, InfraError>;

    /// すべての顧客を作成日時順で取得する
    async fn find_all(&self) -> Result<Vec<Cliente>, InfraError>;

    /// 顧客を ID で置き換える
    ///
    /// 対象が存在しない場合は何もしない。
    async fn update(&self, cliente: &Cliente) -> Result<(), InfraError>;

    /// 顧客を削除する
    ///
    /// 対象が存在しない場合は何もしない。
    async fn delete(&self, id: &ClienteId) -> Result<(), InfraError>;
}

/// `"Clientes"` テーブルの 1 行
#[derive(Debug, sqlx::FromRow)]
struct ClienteRow {
    id:         Uuid,
    trade_name: String,
    cnpj:       String,
    active:     bool,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<ClienteRow> for Cliente {
    type Error = InfraError;

    fn try_from(row: ClienteRow) -> Result<Self, Self::Error> {
        let cnpj = Cnpj::new(&row.cnpj)
            .map_err(|e| InfraError::unexpected(format!("stored CNPJ is invalid: {e}")))?;
        let trade_name = TradeName::new(&row.trade_name)
            .map_err(|e| InfraError::unexpected(format!("stored trade name is invalid: {e}")))?;

        Ok(Cliente::from_db(
            ClienteId::from_uuid(row.id),
            trade_name,
            cnpj,
            row.active,
            row.created_at,
            row.updated_at,
        ))
    }
}

/// PostgreSQL 実装の ClienteRepository
#[derive(Debug, Clone)]
pub struct PostgresClienteRepository {
    pool: PgPool,
}

impl PostgresClienteRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClienteRepository for PostgresClienteRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(id = %cliente.id(), cnpj = %cliente.cnpj()))]
    async fn insert(&self, cliente: &Cliente) -> Result<(), InfraError> {
        let result = sqlx::query(
            r#"
            INSERT INTO "Clientes" ("Id", "NomeFantasia", "Cnpj", "Ativo", "DataCadastro", "DataAtualizacao")
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(cliente.id().as_uuid())
        .bind(cliente.trade_name().as_str())
        .bind(cliente.cnpj().as_str())
        .bind(cliente.is_active())
        .bind(cliente.created_at())
        .bind(cliente.updated_at())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(InfraError::conflict("Cliente", cliente.cnpj().as_str()))
            }
            Err(e) => Err(e.into()),
        }
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: &ClienteId) -> Result<Option<Cliente>, InfraError> {
        let row = sqlx::query_as::<_, ClienteRow>(
            r#"
            SELECT
                "Id" AS id,
                "NomeFantasia" AS trade_name,
                "Cnpj" AS cnpj,
                "Ativo" AS active,
                "DataCadastro" AS created_at,
                "DataAtualizacao" AS updated_at
            FROM "Clientes"
            WHERE "Id" = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Cliente::try_from).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%cnpj))]
    async fn find_by_cnpj(&self, cnpj: &Cnpj) -> Result<Option<Cliente>, InfraError> {
        let row = sqlx::query_as::<_, ClienteRow>(
            r#"
            SELECT
                "Id" AS id,
                "NomeFantasia" AS trade_name,
                "Cnpj" AS cnpj,
                "Ativo" AS active,
                "DataCadastro" AS created_at,
                "DataAtualizacao" AS updated_at
            FROM "Clientes"
            WHERE "Cnpj" = $1
            "#,
        )
        .bind(cnpj.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Cliente::try_from).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%cnpj))]
    async fn exists_by_cnpj(&self, cnpj: &Cnpj) -> Result<bool, InfraError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS (SELECT 1 FROM "Clientes" WHERE "Cnpj" = $1)"#,
        )
        .bind(cnpj.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Cliente>, InfraError> {
        let rows = sqlx::query_as::<_, ClienteRow>(
            r#"
            SELECT
                "Id" AS id,
                "NomeFantasia" AS trade_name,
                "Cnpj" AS cnpj,
                "Ativo" AS active,
                "DataCadastro" AS created_at,
                "DataAtualizacao" AS updated_at
            FROM "Clientes"
            ORDER BY "DataCadastro" ASC, "Id" ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Cliente::try_from).collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %cliente.id()))]
    async fn update(&self, cliente: &Cliente) -> Result<(), InfraError> {
        // CNPJ と作成日時は生成後に変わらないため更新対象に含めない
        sqlx::query(
            r#"
            UPDATE "Clientes"
            SET "NomeFantasia" = $2, "Ativo" = $3, "DataAtualizacao" = $4
            WHERE "Id" = $1
            "#,
        )
        .bind(cliente.id().as_uuid())
        .bind(cliente.trade_name().as_str())
        .bind(cliente.is_active())
        .bind(cliente.updated_at())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: &ClienteId) -> Result<(), InfraError> {
        sqlx::query(r#"DELETE FROM "Clientes" WHERE "Id" = $1"#)
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
