//! # テスト用ユーティリティ
//!
//! `test-support` feature で公開される、[`PasswordHasher`] のテストダブル。
//! ドメイン層自身のテストと、下流クレート（永続化マッパーなど）のテストで使用する。

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::password::{PasswordHash, PasswordHasher, PasswordVerifyResult, PlainPassword};

/// 決定的なハッシュを返すテスト用ハッシャー
///
/// - `hash`: `fake-hash:{平文}` を返す
/// - `matches`: 既定ではハッシュを再計算して比較する。
///   [`with_verify_result`](Self::with_verify_result) で結果を固定できる
///
/// 呼び出し回数を記録するため、委譲の回数を検証できる。
#[derive(Debug, Default)]
pub struct FakePasswordHasher {
    verify_result: Option<PasswordVerifyResult>,
    hash_calls:    AtomicUsize,
    matches_calls: AtomicUsize,
}

impl FakePasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// `matches` の結果を固定したハッシャーを返す
    pub fn with_verify_result(self, matched: bool) -> Self {
        Self {
            verify_result: Some(PasswordVerifyResult::from(matched)),
            ..self
        }
    }

    /// 指定した平文に対してこのハッシャーが返すハッシュ
    pub fn expected_hash(raw: &str) -> PasswordHash {
        PasswordHash::new(format!("fake-hash:{raw}"))
    }

    /// `hash` の呼び出し回数
    pub fn hash_calls(&self) -> usize {
        self.hash_calls.load(Ordering::SeqCst)
    }

    /// `matches` の呼び出し回数
    pub fn matches_calls(&self) -> usize {
        self.matches_calls.load(Ordering::SeqCst)
    }
}

impl PasswordHasher for FakePasswordHasher {
    fn hash(&self, raw: &PlainPassword) -> PasswordHash {
        self.hash_calls.fetch_add(1, Ordering::SeqCst);
        Self::expected_hash(raw.as_str())
    }

    fn matches(&self, raw: &PlainPassword, hash: &PasswordHash) -> PasswordVerifyResult {
        self.matches_calls.fetch_add(1, Ordering::SeqCst);
        self.verify_result.unwrap_or_else(|| {
            PasswordVerifyResult::from(Self::expected_hash(raw.as_str()) == *hash)
        })
    }
}
