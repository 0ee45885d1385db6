//! # ユーザー
//!
//! ユーザーエンティティとそれに関連する値オブジェクトを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 用途 |
//! |---|------------|------|
//! | [`User`] | ユーザー | 認証情報とロールを持つ利用者 |
//! | [`UserId`] | ユーザー ID | ユーザーの一意識別子 |
//! | [`Username`] | ユーザー名 | 表示・ログイン用の名前 |
//! | [`Email`] | メールアドレス | 連絡先かつログイン識別子 |
//! | [`Role`] | ロール | 一般ユーザー / 管理者 |
//!
//! ## 設計方針
//!
//! - **値オブジェクトによる検証**: 各フィールドの不変条件は値オブジェクトの生成時に保証済み。
//!   エンティティ側では再検証しない
//! - **時刻の注入**: `created_at` / `updated_at` に使う現在時刻は呼び出し元から受け取る
//!   （[`Clock`](crate::clock::Clock) 参照）
//! - **ハッシャーの注入**: パスワードの検証とハッシュ化には [`PasswordHasher`] を引数で受け取る
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use todolist_domain::{
//!     clock::{Clock, SystemClock},
//!     password::{Password, PasswordHash},
//!     user::{Email, Role, User, UserId, Username},
//! };
//!
//! let clock = SystemClock;
//! let user = User::new(
//!     UserId::new(),
//!     Username::new("ricardo")?,
//!     Password::from_hash(PasswordHash::new("$argon2id$v=19$...")),
//!     Email::new("ricardo@example.com")?,
//!     Role::User,
//!     clock.now(),
//! );
//!
//! assert!(!user.is_admin());
//! assert_eq!(user.created_at(), user.updated_at());
//! # Ok(())
//! # }
//! ```

mod email;

pub use email::Email;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::{
    DomainError,
    password::{Password, PasswordHash, PasswordHasher, PlainPassword},
};

define_uuid_id! {
    /// ユーザー ID（一意識別子）
    ///
    /// UUID v7 を使用し、生成順にソート可能。
    pub struct UserId;
}

define_validated_string! {
    /// ユーザー名（値オブジェクト）
    ///
    /// # バリデーション
    ///
    /// - 前後の空白は除去される
    /// - 空文字列ではない
    /// - 最大 50 文字
    pub struct Username {
        label: "ユーザー名",
        max_length: 50,
        error: InvalidUsername,
    }
}

/// ロール
///
/// ユーザーの権限区分。作成後に変更されることはない。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    IntoStaticStr,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// 一般ユーザー
    #[default]
    User,
    /// 管理者
    Admin,
}

impl std::str::FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

/// ユーザーエンティティ
///
/// # 不変条件
///
/// - `id` と `role` は作成後に変わらない
/// - `created_at` は作成後に変わらない
/// - ユーザー名・メールアドレス・パスワードの変更が成功するたびに `updated_at` は必ず増加する
/// - 検証はフィールドを置き換える前に行い、失敗時は状態を変更しない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id:         UserId,
    username:   Username,
    password:   Password,
    email:      Email,
    role:       Role,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// 新しいユーザーを作成する
    ///
    /// `created_at` と `updated_at` はともに `now` になる。
    pub fn new(
        id: UserId,
        username: Username,
        password: Password,
        email: Email,
        role: Role,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            password,
            email,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// 永続化されたデータからユーザーを復元する
    ///
    /// インフラ層のマッパー専用。タイムスタンプは渡された値をそのまま使い、
    /// 値オブジェクトの不変条件も再検証しない。
    pub fn reconstitute(
        id: UserId,
        username: Username,
        password: Password,
        email: Email,
        role: Role,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            password,
            email,
            role,
            created_at,
            updated_at,
        }
    }

    // Getter メソッド

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    /// 永続化用のパスワードハッシュを取得する
    pub fn hashed_password(&self) -> &PasswordHash {
        self.password.hash()
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // ビジネスロジックメソッド

    /// 管理者か判定する
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// 平文パスワードで認証する
    pub fn authenticate(&self, raw: &PlainPassword, hasher: &dyn PasswordHasher) -> bool {
        self.password.matches(raw, hasher)
    }

    /// ユーザー名を変更する
    pub fn change_username(&mut self, username: Username, now: DateTime<Utc>) {
        self.username = username;
        self.touch(now);
        tracing::debug!(user_id = %self.id, "ユーザー名を変更しました");
    }

    /// メールアドレスを変更する
    pub fn change_email(&mut self, email: Email, now: DateTime<Utc>) {
        self.email = email;
        self.touch(now);
        tracing::debug!(user_id = %self.id, "メールアドレスを変更しました");
    }

    /// パスワードを変更する
    ///
    /// 現在のパスワードを検証してから、新しいパスワードの強度を検証・ハッシュ化する。
    ///
    /// # エラー
    ///
    /// - 現在のパスワードが一致しない場合は `DomainError::InvalidCredentials`
    /// - 新しいパスワードが強度要件を満たさない場合は `DomainError::InvalidPassword`
    ///
    /// いずれの場合も状態は変更しない。
    pub fn change_password(
        &mut self,
        current_password: &PlainPassword,
        new_password: &PlainPassword,
        hasher: &dyn PasswordHasher,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        if !self.password.matches(current_password, hasher) {
            tracing::warn!(user_id = %self.id, "現在のパスワードが一致しないため変更を拒否しました");
            return Err(DomainError::InvalidCredentials(
                "現在のパスワードが正しくありません".to_string(),
            ));
        }

        self.password = Password::from_plain_text(new_password, hasher)?;
        self.touch(now);
        tracing::debug!(user_id = %self.id, "パスワードを変更しました");

        Ok(())
    }

    /// `updated_at` を更新する
    ///
    /// `now` が現在の `updated_at` 以前の場合は 1 ナノ秒だけ進める。
    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.updated_at + TimeDelta::nanoseconds(1));
    }
}
