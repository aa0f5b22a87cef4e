//! # Clock（時刻プロバイダ）
//!
//! ユースケース層で `Utc::now()` を直接呼ばずに済ませるための抽象化。
//! `Cliente` の `created_at` / `updated_at` はここから得た時刻で打刻する。

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Duration, SubsecRound, Utc};

/// 現在時刻を提供するトレイト
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// 保持する時刻の小数秒の桁数
///
/// PostgreSQL の `TIMESTAMPTZ` はマイクロ秒精度のため、それより細かい桁は持たない。
pub const SUBSEC_DIGITS: u16 = 6;

/// システム時刻を返す実装
///
/// マイクロ秒未満は切り捨てる。DB に保存して読み戻しても時刻は変わらない。
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(SUBSEC_DIGITS)
    }
}

/// 手動で進める時計
///
/// `advance` を呼ぶまで同じ時刻を返し続ける。
/// 作成時刻と更新時刻の前後関係をテストで検証するために使う。
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// 時刻を `by` だけ進める
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
