//! # ドメイン層エラー定義
//!
//! 値オブジェクトの生成時やエンティティの更新時に発生する、入力値の検証失敗と
//! ビジネスルール違反を表現するエラー型。
//!
//! ## 設計方針
//!
//! - **型による分類**: 失敗の種類をバリアントで表し、呼び出し側がパターンマッチで処理できる
//! - **thiserror 活用**: `#[error(...)]` マクロでエラーメッセージを生成する
//! - **最初の違反のみ報告**: 検証は先頭から順に行い、最初に違反したルールのメッセージを返す
//!
//! ## エラーの種類
//!
//! | エラー種別 | 発生箇所 |
//! |-----------|---------|
//! | `InvalidEmailFormat` | [`Email::new`](crate::user::Email::new) |
//! | `InvalidPassword` | [`Password::from_plain_text`](crate::password::Password::from_plain_text) |
//! | `InvalidTaskTitle` | [`TaskTitle::new`](crate::task::TaskTitle::new) |
//! | `InvalidCredentials` | [`User::change_password`](crate::user::User::change_password) |
//! | `InvalidUsername` | [`Username::new`](crate::user::Username::new) |
//! | `InvalidRole` | [`Role`](crate::user::Role) の文字列変換 |
//!
//! ## 使用例
//!
//! ```rust
//! use todolist_domain::{DomainError, task::TaskTitle};
//!
//! let error = TaskTitle::new("   ").unwrap_err();
//! assert!(matches!(error, DomainError::InvalidTaskTitle(_)));
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// いずれも同期的に、生成または更新の時点で返される。
/// リトライや部分的なロールバックは存在しない。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// メールアドレスの形式が不正
    #[error("メールアドレスの形式が不正です: {0}")]
    InvalidEmailFormat(String),

    /// パスワードが強度要件を満たさない
    #[error("パスワードが不正です: {0}")]
    InvalidPassword(String),

    /// タスクタイトルが不正
    #[error("タスクタイトルが不正です: {0}")]
    InvalidTaskTitle(String),

    /// 認証情報の不一致
    ///
    /// パスワード変更時に現在のパスワードが一致しなかった場合に使用する。
    /// 入力値の形式ではなく、ビジネスルールの違反を表す。
    #[error("認証情報が一致しません: {0}")]
    InvalidCredentials(String),

    /// ユーザー名が不正
    #[error("ユーザー名が不正です: {0}")]
    InvalidUsername(String),

    /// ロールの文字列表現が不正
    #[error("不正なロール: {0}")]
    InvalidRole(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(
        DomainError::InvalidEmailFormat("@ がありません".to_string()),
        "メールアドレスの形式が不正です: @ がありません"
    )]
    #[case(
        DomainError::InvalidPassword("8 文字以上である必要があります".to_string()),
        "パスワードが不正です: 8 文字以上である必要があります"
    )]
    #[case(
        DomainError::InvalidCredentials("現在のパスワードが正しくありません".to_string()),
        "認証情報が一致しません: 現在のパスワードが正しくありません"
    )]
    fn test_エラーメッセージに理由が含まれる(#[case] error: DomainError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }
}
