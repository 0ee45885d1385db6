//! # Clock（時刻プロバイダ）
//!
//! [`User`](crate::user::User) の `created_at` / `updated_at` に渡す現在時刻を
//! 呼び出し元で取得するための抽象化。テストでは固定時刻を注入する。

use chrono::{DateTime, Duration, Utc};

/// 現在時刻を提供するトレイト
pub trait Clock: Send + Sync {
   fn now(&self) -> DateTime<Utc>;
}

/// 実際のシステム時刻を返す実装
pub struct SystemClock;

impl Clock for SystemClock {
   fn now(&self) -> DateTime<Utc> {
      Utc::now()
   }
}

/// 固定時刻を返すテスト用実装
///
/// [`advance`](Self::advance) で時刻を進められる。
pub struct FixedClock {
   now: DateTime<Utc>,
}

impl FixedClock {
   pub fn new(now: DateTime<Utc>) -> Self {
      Self { now }
   }

   /// 保持している時刻を `by` だけ進める
   pub fn advance(&mut self, by: Duration) {
      self.now += by;
   }
}

impl Clock for FixedClock {
   fn now(&self) -> DateTime<Utc> {
      self.now
   }
}
