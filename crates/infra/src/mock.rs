//! # テスト用モックリポジトリ
//!
//! ユースケーステストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! gestao-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{
    Arc,
    Mutex,
    MutexGuard,
    PoisonError,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use gestao_domain::{
    cliente::{Cliente, ClienteId},
    cnpj::Cnpj,
};

use crate::{error::InfraError, repository::ClienteRepository};

/// モックが返す失敗の種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockFailure {
    /// 一意制約違反（Conflict）
    Conflict,
    /// その他のインフラエラー（Unexpected）
    Unexpected(String),
}

impl MockFailure {
    fn to_error(&self, cnpj: &str) -> InfraError {
        match self {
            Self::Conflict => InfraError::conflict("Cliente", cnpj),
            Self::Unexpected(msg) => InfraError::unexpected(msg.clone()),
        }
    }
}

// ===== MockClienteRepository =====

/// 呼び出し回数を記録し、失敗を注入できるモック
///
/// - `fail_on_insert`: 次以降の `insert` を失敗させる
/// - `fail_on_read`: 次以降の読み取り系メソッドを失敗させる
#[derive(Clone, Default)]
pub struct MockClienteRepository {
    clientes:     Arc<Mutex<Vec<Cliente>>>,
    insert_calls: Arc<AtomicUsize>,
    insert_fail:  Arc<Mutex<Option<MockFailure>>>,
    read_fail:    Arc<Mutex<Option<MockFailure>>>,
}

impl MockClienteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 事前データとして顧客を追加する（`insert` の呼び出し回数には数えない）
    pub fn add_cliente(&self, cliente: Cliente) {
        self.store().push(cliente);
    }

    /// `insert` が呼ばれた回数
    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    /// 保存されている顧客の件数
    pub fn len(&self) -> usize {
        self.store().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store().is_empty()
    }

    pub fn fail_on_insert(&self, failure: MockFailure) {
        *lock(&self.insert_fail) = Some(failure);
    }

    pub fn fail_on_read(&self, failure: MockFailure) {
        *lock(&self.read_fail) = Some(failure);
    }

    fn store(&self) -> MutexGuard<'_, Vec<Cliente>> {
        lock(&self.clientes)
    }

    fn check_read(&self) -> Result<(), InfraError> {
        match lock(&self.read_fail).as_ref() {
            Some(failure) => Err(failure.to_error("")),
            None => Ok(()),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl ClienteRepository for MockClienteRepository {
    async fn insert(&self, cliente: &Cliente) -> Result<(), InfraError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(failure) = lock(&self.insert_fail).as_ref() {
            return Err(failure.to_error(cliente.cnpj().as_str()));
        }

        let mut clientes = self.store();
        if clientes.iter().any(|c| c.cnpj() == cliente.cnpj()) {
            return Err(InfraError::conflict("Cliente", cliente.cnpj().as_str()));
        }
        clientes.push(cliente.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ClienteId) -> Result<Option<Cliente>, InfraError> {
        self.check_read()?;
        Ok(self.store().iter().find(|c| c.id() == id).cloned())
    }

    async fn find_by_cnpj(&self, cnpj: &Cnpj) -> Result<Option<Cliente>, InfraError> {
        self.check_read()?;
        Ok(self.store().iter().find(|c| c.cnpj() == cnpj).cloned())
    }

    async fn exists_by_cnpj(&self, cnpj: &Cnpj) -> Result<bool, InfraError> {
        self.check_read()?;
        Ok(self.store().iter().any(|c| c.cnpj() == cnpj))
    }

    async fn find_all(&self) -> Result<Vec<Cliente>, InfraError> {
        self.check_read()?;
        let mut clientes = self.store().clone();
        clientes.sort_by_key(Cliente::created_at);
        Ok(clientes)
    }

    async fn update(&self, cliente: &Cliente) -> Result<(), InfraError> {
        let mut clientes = self.store();
        if let Some(existing) = clientes.iter_mut().find(|c| c.id() == cliente.id()) {
            *existing = cliente.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: &ClienteId) -> Result<(), InfraError> {
        self.store().retain(|c| c.id() != id);
        Ok(())
    }
}
