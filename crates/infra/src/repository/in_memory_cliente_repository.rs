//! # InMemoryClienteRepository
//!
//! プロセス内のメモリに顧客を保持するリポジトリ。
//! `REPOSITORY_BACKEND=memory` で起動した場合や、DB を使わない E2E テストで使う。
//!
//! ストア全体を 1 つの `RwLock` で保護する。
//! `insert` は書き込みロック内で CNPJ の重複を検査するため、
//! 同時に同じ CNPJ を登録しても保存されるのは 1 件だけになる。

use std::sync::Arc;

use async_trait::async_trait;
use gestao_domain::{
    cliente::{Cliente, ClienteId},
    cnpj::Cnpj,
};
use tokio::sync::RwLock;

use crate::{error::InfraError, repository::ClienteRepository};

/// インメモリ実装の ClienteRepository
///
/// `Clone` したインスタンスは同じストアを共有する。
#[derive(Debug, Clone, Default)]
pub struct InMemoryClienteRepository {
    clientes: Arc<RwLock<Vec<Cliente>>>,
}

impl InMemoryClienteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 保持しているすべての顧客を削除する
    pub async fn clear(&self) {
        self.clientes.write().await.clear();
    }
}

#[async_trait]
impl ClienteRepository for InMemoryClienteRepository {
    async fn insert(&self, cliente: &Cliente) -> Result<(), InfraError> {
        let mut clientes = self.clientes.write().await;
        if clientes.iter().any(|c| c.cnpj() == cliente.cnpj()) {
            return Err(InfraError::conflict("Cliente", cliente.cnpj().as_str()));
        }
        clientes.push(cliente.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ClienteId) -> Result<Option<Cliente>, InfraError> {
        Ok(self
            .clientes
            .read()
            .await
            .iter()
            .find(|c| c.id() == id)
            .cloned())
    }

    async fn find_by_cnpj(&self, cnpj: &Cnpj) -> Result<Option<Cliente>, InfraError> {
        Ok(self
            .clientes
            .read()
            .await
            .iter()
            .find(|c| c.cnpj() == cnpj)
            .cloned())
    }

    async fn exists_by_cnpj(&self, cnpj: &Cnpj) -> Result<bool, InfraError> {
        Ok(self.clientes.read().await.iter().any(|c| c.cnpj() == cnpj))
    }

    async fn find_all(&self) -> Result<Vec<Cliente>, InfraError> {
        let mut clientes = self.clientes.read().await.clone();
        clientes.sort_by_key(Cliente::created_at);
        Ok(clientes)
    }

    async fn update(&self, cliente: &Cliente) -> Result<(), InfraError> {
        let mut clientes = self.clientes.write().await;
        if let Some(existing) = clientes.iter_mut().find(|c| c.id() == cliente.id()) {
            *existing = cliente.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: &ClienteId) -> Result<(), InfraError> {
        self.clientes.write().await.retain(|c| c.id() != id);
        Ok(())
    }
}
