//! # 顧客（Cliente）
//!
//! 顧客エンティティとそれに関連する値オブジェクトを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 説明 |
//! |---|------------|------|
//! | [`Cliente`] | 顧客 | CNPJ で識別される取引先企業（集約ルート） |
//! | [`ClienteId`] | 顧客 ID | UUID v7 |
//! | [`TradeName`] | 屋号（Nome Fantasia） | 3〜200 文字 |
//!
//! ## 設計方針
//!
//! - **ガード付きの変更**: 状態はメソッド経由でのみ変更し、不正な遷移はエラーにする
//! - **時刻の注入**: `now` は呼び出し元から渡す（[`crate::clock::Clock`] 参照）
//! - **更新日時**: 生成直後は `None`、変更に成功するたびに `now` で上書きする

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;
use thiserror::Error;
use uuid::Uuid;

use crate::cnpj::Cnpj;

/// 顧客 ID（一意識別子）
///
/// UUID v7 を使用し、生成順にソート可能。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct ClienteId(Uuid);

impl ClienteId {
    /// 新しい顧客 ID を生成する
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// 既存の UUID から顧客 ID を作成する
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// 内部の UUID 参照を取得する
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// nil UUID（全ビット 0）か判定する
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for ClienteId {
    fn default() -> Self {
        Self::new()
    }
}

/// 顧客エンティティのエラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ClienteError {
    #[error("trade name is required")]
    EmptyName,

    #[error("trade name must have at least {min} characters")]
    NameTooShort { min: usize },

    #[error("trade name must have at most {max} characters")]
    NameTooLong { max: usize },

    /// リクエストに CNPJ が含まれていない
    #[error("CNPJ is required")]
    MissingCnpj,

    #[error("client is already active")]
    AlreadyActive,

    #[error("client is already inactive")]
    AlreadyInactive,
}

/// 屋号（値オブジェクト）
///
/// 前後の空白を除去した上で長さを検証する。
/// 長さは Unicode スカラー値の数で数える（`Açaí` は 4 文字）。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct TradeName(String);

impl TradeName {
    /// 最小文字数
    pub const MIN_CHARS: usize = 3;
    /// 最大文字数
    pub const MAX_CHARS: usize = 200;

    /// 屋号を作成する
    ///
    /// # エラー
    ///
    /// - [`ClienteError::EmptyName`][]: 空または空白のみ
    /// - [`ClienteError::NameTooShort`][]: trim 後 3 文字未満
    /// - [`ClienteError::NameTooLong`][]: trim 後 200 文字超過
    pub fn new(value: impl AsRef<str>) -> Result<Self, ClienteError> {
        let trimmed = value.as_ref().trim();

        if trimmed.is_empty() {
            return Err(ClienteError::EmptyName);
        }

        let count = trimmed.chars().count();
        if count < Self::MIN_CHARS {
            return Err(ClienteError::NameTooShort {
                min: Self::MIN_CHARS,
            });
        }
        if count > Self::MAX_CHARS {
            return Err(ClienteError::NameTooLong {
                max: Self::MAX_CHARS,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// 顧客エンティティ（集約ルート）
///
/// # 不変条件
///
/// - `trade_name` は常に 3〜200 文字
/// - `cnpj` は常に検証済みで、生成後は変更されない
/// - 有効な顧客の有効化、無効な顧客の無効化はエラー（no-op ではない）
/// - `updated_at` は変更に成功したときだけ設定される
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cliente {
    id: ClienteId,
    trade_name: TradeName,
    cnpj: Cnpj,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Cliente {
    /// 新しい顧客を作成する
    ///
    /// 作成直後は有効（`active = true`）で、`updated_at` は `None`。
    pub fn new(
        trade_name: impl AsRef<str>,
        cnpj: Cnpj,
        now: DateTime<Utc>,
    ) -> Result<Self, ClienteError> {
        Ok(Self {
            id: ClienteId::new(),
            trade_name: TradeName::new(trade_name)?,
            cnpj,
            active: true,
            created_at: now,
            updated_at: None,
        })
    }

    /// 既存のデータから顧客を復元する（データベースから取得時）
    pub fn from_db(
        id: ClienteId,
        trade_name: TradeName,
        cnpj: Cnpj,
        active: bool,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            trade_name,
            cnpj,
            active,
            created_at,
            updated_at,
        }
    }

    // Getter メソッド

    pub fn id(&self) -> &ClienteId {
        &self.id
    }

    pub fn trade_name(&self) -> &TradeName {
        &self.trade_name
    }

    pub fn cnpj(&self) -> &Cnpj {
        &self.cnpj
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    // ビジネスロジックメソッド

    /// 屋号を変更する
    ///
    /// 検証に失敗した場合は何も変更しない。
    pub fn rename(
        &mut self,
        new_name: impl AsRef<str>,
        now: DateTime<Utc>,
    ) -> Result<(), ClienteError> {
        self.trade_name = TradeName::new(new_name)?;
        self.updated_at = Some(now);
        Ok(())
    }

    /// 顧客を有効化する
    pub fn activate(&mut self, now: DateTime<Utc>) -> Result<(), ClienteError> {
        if self.active {
            return Err(ClienteError::AlreadyActive);
        }
        self.active = true;
        self.updated_at = Some(now);
        Ok(())
    }

    /// 顧客を無効化する
    pub fn deactivate(&mut self, now: DateTime<Utc>) -> Result<(), ClienteError> {
        if !self.active {
            return Err(ClienteError::AlreadyInactive);
        }
        self.active = false;
        self.updated_at = Some(now);
        Ok(())
    }
}

impl std::fmt::Display for Cliente {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.trade_name, self.cnpj.formatted())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use super::*;

    // フィクスチャ

    #[fixture]
    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[fixture]
    fn cnpj() -> Cnpj {
        Cnpj::new("11.222.333/0001-81").unwrap()
    }

    #[fixture]
    fn cliente(cnpj: Cnpj, now: DateTime<Utc>) -> Cliente {
        Cliente::new("Empresa Teste LTDA", cnpj, now).unwrap()
    }

    // TradeName のテスト

    #[test]
    fn test_屋号は前後の空白を除去して保持する() {
        let name = TradeName::new("  Empresa Teste  ").unwrap();
        assert_eq!(name.as_str(), "Empresa Teste");
    }

    #[rstest]
    #[case("", ClienteError::EmptyName)]
    #[case("   ", ClienteError::EmptyName)]
    #[case("AB", ClienteError::NameTooShort { min: 3 })]
    #[case("  AB  ", ClienteError::NameTooShort { min: 3 })]
    #[case(&"a".repeat(201), ClienteError::NameTooLong { max: 200 })]
    fn test_屋号は不正な長さを拒否する(
        #[case] input: &str,
        #[case] expected: ClienteError,
    ) {
        assert_eq!(TradeName::new(input), Err(expected));
    }

    #[rstest]
    #[case("ABC")]
    #[case(&"a".repeat(200))]
    // マルチバイト文字も 1 文字として数える
    #[case("Açaí")]
    #[case(&"ç".repeat(200))]
    fn test_屋号は境界値の長さを受け入れる(#[case] input: &str) {
        assert!(TradeName::new(input).is_ok());
    }

    // Cliente のテスト

    #[rstest]
    fn test_新規顧客は有効で更新日時を持たない(cliente: Cliente, now: DateTime<Utc>) {
        assert!(cliente.is_active());
        assert_eq!(cliente.created_at(), now);
        assert_eq!(cliente.updated_at(), None);
        assert_eq!(cliente.trade_name().as_str(), "Empresa Teste LTDA");
        assert!(!cliente.id().is_nil());
    }

    #[rstest]
    fn test_新規顧客は屋号が不正なら作成できない(cnpj: Cnpj, now: DateTime<Utc>) {
        assert_eq!(
            Cliente::new("AB", cnpj, now),
            Err(ClienteError::NameTooShort { min: 3 })
        );
    }

    #[rstest]
    fn test_新規顧客ごとに異なるidが割り当てられる(cnpj: Cnpj, now: DateTime<Utc>) {
        let a = Cliente::new("Empresa A", cnpj.clone(), now).unwrap();
        let b = Cliente::new("Empresa B", cnpj, now).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[rstest]
    fn test_屋号を変更すると更新日時が設定される(mut cliente: Cliente, now: DateTime<Utc>) {
        let later = now + Duration::minutes(5);

        cliente.rename("Novo Nome", later).unwrap();

        assert_eq!(cliente.trade_name().as_str(), "Novo Nome");
        assert_eq!(cliente.updated_at(), Some(later));
    }

    #[rstest]
    fn test_屋号の変更に失敗した場合は何も変わらない(mut cliente: Cliente, now: DateTime<Utc>) {
        let before = cliente.clone();

        let result = cliente.rename(" ", now + Duration::minutes(5));

        assert_eq!(result, Err(ClienteError::EmptyName));
        assert_eq!(cliente, before);
    }

    #[rstest]
    fn test_無効化して再度有効化できる(mut cliente: Cliente, now: DateTime<Utc>) {
        cliente.deactivate(now + Duration::seconds(1)).unwrap();
        assert!(!cliente.is_active());

        cliente.activate(now + Duration::seconds(2)).unwrap();

        assert!(cliente.is_active());
        let updated_at = cliente.updated_at().unwrap();
        assert!(updated_at >= cliente.created_at());
        assert_eq!(updated_at, now + Duration::seconds(2));
    }

    #[rstest]
    fn test_無効な顧客の無効化はエラーになる(mut cliente: Cliente, now: DateTime<Utc>) {
        cliente.deactivate(now).unwrap();

        assert_eq!(cliente.deactivate(now), Err(ClienteError::AlreadyInactive));
    }

    #[rstest]
    fn test_有効な顧客の有効化はエラーになり更新日時は変わらない(
        mut cliente: Cliente,
        now: DateTime<Utc>,
    ) {
        assert_eq!(cliente.activate(now), Err(ClienteError::AlreadyActive));
        assert_eq!(cliente.updated_at(), None);
    }

    #[rstest]
    fn test_displayは屋号と整形済みcnpjを出力する(cliente: Cliente) {
        assert_eq!(
            cliente.to_string(),
            "Empresa Teste LTDA - 11.222.333/0001-81"
        );
    }

    #[rstest]
    fn test_from_dbは時刻を打ち直さずに復元する(cnpj: Cnpj, now: DateTime<Utc>) {
        let id = ClienteId::new();
        let updated = now + Duration::hours(1);

        let cliente = Cliente::from_db(
            id,
            TradeName::new("Empresa Teste").unwrap(),
            cnpj.clone(),
            false,
            now,
            Some(updated),
        );

        assert_eq!(cliente.id(), &id);
        assert_eq!(cliente.cnpj(), &cnpj);
        assert!(!cliente.is_active());
        assert_eq!(cliente.created_at(), now);
        assert_eq!(cliente.updated_at(), Some(updated));
    }
}
