//! # CNPJ（法人税番号）
//!
//! ブラジルの法人登録番号 CNPJ（Cadastro Nacional da Pessoa Jurídica）を
//! 表現する値オブジェクト。
//!
//! ## 形式
//!
//! 14 桁の数字で、表示時は `DD.DDD.DDD/DDDD-DD` の形に区切る。
//! 末尾 2 桁はチェックディジットで、先頭 12 桁（および 13 桁）から
//! 重み付き和の mod 11 で算出される。
//!
//! ## 正規化
//!
//! 入力中の数字以外の文字（`.` `/` `-` や空白）はすべて取り除く。
//! したがって `"11.222.333/0001-81"` と `"11222333000181"` は同じ値になる。
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use gestao_domain::cnpj::Cnpj;
//!
//! let cnpj = Cnpj::new("11.222.333/0001-81")?;
//! assert_eq!(cnpj.as_str(), "11222333000181");
//! assert_eq!(cnpj.formatted(), "11.222.333/0001-81");
//! assert_eq!(cnpj, Cnpj::new("11222333000181")?);
//! # Ok(())
//! # }
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;
use thiserror::Error;

/// CNPJ の桁数
pub const CNPJ_LENGTH: usize = 14;

/// 第 1 チェックディジット（13 桁目）の重み
const FIRST_CHECK_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// 第 2 チェックディジット（14 桁目）の重み
const SECOND_CHECK_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// CNPJ の検証エラー
///
/// 検証は以下の順で行い、最初に違反したものを返す。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum CnpjError {
    /// 入力が空、または空白のみ
    #[error("CNPJ must not be empty")]
    EmptyInput,

    /// 数字以外を除いた桁数が 14 ではない
    #[error("CNPJ must contain 14 digits (found {found})")]
    InvalidLength {
        /// 数字以外を除いた後の桁数
        found: usize,
    },

    /// 14 桁すべてが同じ数字
    #[error("CNPJ must not have all digits equal")]
    RepeatedDigits,

    /// チェックディジットが一致しない
    #[error("CNPJ check digits are invalid")]
    InvalidCheckDigits,
}

/// CNPJ（値オブジェクト）
///
/// # 不変条件
///
/// - ASCII 数字ちょうど 14 桁（区切り文字なし）
/// - 14 桁すべてが同じ数字ではない
/// - 13 桁目・14 桁目がチェックディジットの計算結果と一致する
///
/// 等価性とハッシュは正規化後の 14 桁文字列のみで決まる。順序は定義しない。
///
/// serde では正規化済みの 14 桁文字列として表現し、
/// デシリアライズ時は [`Cnpj::new`] と同じ検証を通す。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cnpj(String);

impl Cnpj {
    /// 文字列から CNPJ を生成する
    ///
    /// 数字以外の文字を取り除いてから検証する。
    ///
    /// # エラー
    ///
    /// - [`CnpjError::EmptyInput`][]: 入力が空または空白のみ
    /// - [`CnpjError::InvalidLength`][]: 数字が 14 桁ではない
    /// - [`CnpjError::RepeatedDigits`][]: すべて同じ数字
    /// - [`CnpjError::InvalidCheckDigits`][]: チェックディジット不一致
    pub fn new(raw: impl AsRef<str>) -> Result<Self, CnpjError> {
        let raw = raw.as_ref();

        if raw.trim().is_empty() {
            return Err(CnpjError::EmptyInput);
        }

        let value: String = raw.chars().filter(char::is_ascii_digit).collect();

        if value.len() != CNPJ_LENGTH {
            return Err(CnpjError::InvalidLength { found: value.len() });
        }

        let digits: Vec<u32> = value.bytes().map(|b| u32::from(b - b'0')).collect();

        if digits.iter().all(|&d| d == digits[0]) {
            return Err(CnpjError::RepeatedDigits);
        }

        if check_digit(&digits[..12], &FIRST_CHECK_WEIGHTS) != digits[12]
            || check_digit(&digits[..13], &SECOND_CHECK_WEIGHTS) != digits[13]
        {
            return Err(CnpjError::InvalidCheckDigits);
        }

        Ok(Self(value))
    }

    /// 正規化済みの 14 桁文字列を取得する（保存・比較用）
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }

    /// `DD.DDD.DDD/DDDD-DD` 形式の表示用文字列を返す
    pub fn formatted(&self) -> String {
        let v = &self.0;
        format!(
            "{}.{}.{}/{}-{}",
            &v[0..2],
            &v[2..5],
            &v[5..8],
            &v[8..12],
            &v[12..14]
        )
    }
}

/// 重み付き和の mod 11 からチェックディジットを算出する
///
/// 余りが 2 未満なら 0、それ以外は `11 - 余り`。
fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Cnpj {
    type Err = CnpjError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Cnpj {
    type Error = CnpjError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Cnpj> for String {
    fn from(cnpj: Cnpj) -> Self {
        cnpj.0
    }
}
