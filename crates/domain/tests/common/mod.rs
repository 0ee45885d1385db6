//! テスト共通フィクスチャ
//!
//! 統合テストで共通利用するハッシャーとユーザー生成ヘルパー。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use todolist_domain::{
    password::{Password, PasswordHash, PasswordHasher, PasswordVerifyResult, PlainPassword},
    user::{Email, Role, User, UserId, Username},
};

pub const INITIAL_PASSWORD: &str = "Initial#Pass1";

/// ソルト付きの文字列連結でハッシュを表現するハッシャー
///
/// 同じ平文でもソルトが異なればハッシュが変わることを確認できる。
pub struct SaltedHasher {
    salt: &'static str,
}

impl SaltedHasher {
    pub fn new(salt: &'static str) -> Self {
        Self { salt }
    }
}

impl PasswordHasher for SaltedHasher {
    fn hash(&self, raw: &PlainPassword) -> PasswordHash {
        PasswordHash::new(format!("{}${}", self.salt, raw.as_str()))
    }

    fn matches(&self, raw: &PlainPassword, hash: &PasswordHash) -> PasswordVerifyResult {
        PasswordVerifyResult::from(hash.as_str() == format!("{}${}", self.salt, raw.as_str()))
    }
}

pub fn new_user(hasher: &dyn PasswordHasher, role: Role, now: DateTime<Utc>) -> User {
    User::new(
        UserId::new(),
        Username::new("ricardo").unwrap(),
        Password::from_plain_text(&PlainPassword::new(INITIAL_PASSWORD), hasher).unwrap(),
        Email::new("ricardo@email.com").unwrap(),
        role,
        now,
    )
}
