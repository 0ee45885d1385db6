//! # Todolist ドメイン層
//!
//! To-Do リストアプリケーションのビジネスルールの中核を担うドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! このクレートは DDD（ドメイン駆動設計）の原則に従い、以下を提供する:
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（例: User）
//! - **値オブジェクト**: 識別子を持たない不変オブジェクト（例: Email, Password,
//!   TaskTitle）
//! - **ケイパビリティ**: インフラ層が実装し、操作ごとに注入されるトレイト
//!   （例: PasswordHasher）
//! - **ドメインエラー**: 入力値の検証失敗とビジネスルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! app → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、ハッシュアルゴリズム）には一切依存しない。
//! パスワードのハッシュ化は [`password::PasswordHasher`] の実装として外部から渡される。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`user`] - ユーザーエンティティとメールアドレス等の値オブジェクト
//! - [`password`] - パスワードの値オブジェクトとハッシャーのトレイト
//! - [`task`] - タスクの値オブジェクト
//! - [`clock`] - 現在時刻の抽象化
//!
//! ## 使用例
//!
//! ```rust
//! use todolist_domain::{DomainError, user::Email};
//!
//! let email = Email::new("User@Example.com").unwrap();
//! assert_eq!(email, Email::new("user@example.com").unwrap());
//!
//! let error = Email::new("user@example").unwrap_err();
//! assert!(matches!(error, DomainError::InvalidEmailFormat(_)));
//! ```

#[macro_use]
mod macros;

pub mod clock;
pub mod error;
pub mod password;
pub mod task;
pub mod user;

#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;

pub use error::DomainError;
