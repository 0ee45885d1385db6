//! # メールアドレス
//!
//! ユーザーの連絡先かつログイン識別子となるメールアドレスの値オブジェクト。
//!
//! ## 検証ルール
//!
//! 以下の順に検証し、最初に違反したルールでエラーを返す:
//!
//! 1. 空文字列・空白のみではない
//! 2. 全体で 254 文字以内
//! 3. `@` をちょうど 1 つ含み、先頭ではない
//! 4. ローカル部（`@` より前）
//!    - 64 文字以内
//!    - `A-Z a-z 0-9 . _ % + -` のみで構成される
//!    - `.` で始まらず、`.` で終わらない
//!    - `..` を含まない
//! 5. ドメイン部（`@` より後）
//!    - 空ではない
//!    - `A-Z a-z 0-9 . -` のみで構成される
//!    - `-` で始まらず、`-` で終わらない
//!    - `..` を含まない
//!    - `.` を 1 つ以上含む
//! 6. トップレベルドメイン（ドメイン部を `.` で区切った最後の空でない要素）が 2 文字以上
//!
//! ## 等価性
//!
//! 比較とハッシュは大文字小文字を区別しない。一方で [`Email::as_str`] は
//! 入力された表記をそのまま返す。

use std::{
    hash::{Hash, Hasher},
    sync::LazyLock,
};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// メールアドレス全体の最大文字数
const EMAIL_MAX_LENGTH: usize = 254;

/// ローカル部の最大文字数
const LOCAL_PART_MAX_LENGTH: usize = 64;

static LOCAL_PART_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+$").expect("ローカル部の正規表現が不正です")
});

static DOMAIN_PART_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.-]+$").expect("ドメイン部の正規表現が不正です")
});

/// メールアドレス（値オブジェクト）
///
/// 生成時にバリデーションを実行し、不正な値の作成を防ぐ。
/// 一度作成したら変更不可。メールアドレスの変更は新しいインスタンスの作成で表す。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// メールアドレスを作成する
    ///
    /// # エラー
    ///
    /// バリデーションに失敗した場合は `DomainError::InvalidEmailFormat` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.trim().is_empty() {
            return Err(invalid("メールアドレスは必須です"));
        }

        if value.chars().count() > EMAIL_MAX_LENGTH {
            return Err(invalid(format!(
                "メールアドレスは {EMAIL_MAX_LENGTH} 文字以内である必要があります"
            )));
        }

        let (local, domain) = split_at_sign(&value)?;
        validate_local_part(local)?;
        validate_domain_part(domain)?;

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_ascii_lowercase().hash(state);
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn invalid(message: impl Into<String>) -> DomainError {
    DomainError::InvalidEmailFormat(message.into())
}

/// `@` がちょうど 1 つで、先頭にないことを確認して分割する
fn split_at_sign(value: &str) -> Result<(&str, &str), DomainError> {
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.contains('@') => {
            Ok((local, domain))
        }
        _ => Err(invalid("メールアドレスには @ をちょうど 1 つ含める必要があります")),
    }
}

fn validate_local_part(local: &str) -> Result<(), DomainError> {
    if local.chars().count() > LOCAL_PART_MAX_LENGTH {
        return Err(invalid(format!(
            "ローカル部は {LOCAL_PART_MAX_LENGTH} 文字以内である必要があります"
        )));
    }

    if !LOCAL_PART_PATTERN.is_match(local) {
        return Err(invalid("ローカル部に使用できない文字が含まれています"));
    }

    if local.starts_with('.') || local.ends_with('.') {
        return Err(invalid("ローカル部を . で始める、または終えることはできません"));
    }

    if local.contains("..") {
        return Err(invalid("ローカル部に連続した . を含めることはできません"));
    }

    Ok(())
}

fn validate_domain_part(domain: &str) -> Result<(), DomainError> {
    if domain.trim().is_empty() {
        return Err(invalid("ドメイン部は必須です"));
    }

    if !DOMAIN_PART_PATTERN.is_match(domain) {
        return Err(invalid("ドメイン部に使用できない文字が含まれています"));
    }

    if domain.starts_with('-') || domain.ends_with('-') {
        return Err(invalid("ドメイン部を - で始める、または終えることはできません"));
    }

    if domain.contains("..") {
        return Err(invalid("ドメイン部に連続した . を含めることはできません"));
    }

    if !domain.contains('.') {
        return Err(invalid("ドメイン部には . を 1 つ以上含める必要があります"));
    }

    // 末尾の空セグメントは無視する（`example.com.` の TLD は `com`）
    let tld = domain.rsplit('.').find(|s| !s.is_empty()).unwrap_or_default();
    if tld.chars().count() < 2 {
        return Err(invalid("トップレベルドメインは 2 文字以上である必要があります"));
    }

    Ok(())
}
