//! # パスワード
//!
//! パスワード関連の値オブジェクトと、ハッシュ計算を抽象化するトレイトを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 用途 |
//! |---|------------|------|
//! | [`PlainPassword`] | 平文パスワード | ユーザーの入力値 |
//! | [`PasswordHash`] | パスワードハッシュ | 永続化用のハッシュ値 |
//! | [`PasswordVerifyResult`] | 検証結果 | パスワード検証の成否 |
//! | [`PasswordHasher`] | パスワードハッシャー | ハッシュ計算と検証（インフラ層が実装） |
//! | [`Password`] | パスワード | 強度検証済みのパスワード（ハッシュのみ保持） |
//!
//! ## 設計方針
//!
//! ハッシュアルゴリズム、ソルト、タイミング攻撃への耐性はすべて
//! [`PasswordHasher`] の実装の責務とする。ドメイン層はハッシャーを保持せず、
//! 必要な操作ごとに引数で受け取る。
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use todolist_domain::password::{
//!    Password, PasswordHash, PasswordHasher, PasswordVerifyResult, PlainPassword,
//! };
//!
//! struct ReversingHasher;
//!
//! impl PasswordHasher for ReversingHasher {
//!    fn hash(&self, raw: &PlainPassword) -> PasswordHash {
//!       PasswordHash::new(raw.as_str().chars().rev().collect::<String>())
//!    }
//!
//!    fn matches(&self, raw: &PlainPassword, hash: &PasswordHash) -> PasswordVerifyResult {
//!       PasswordVerifyResult::from(self.hash(raw) == *hash)
//!    }
//! }
//!
//! let hasher = ReversingHasher;
//! let password = Password::from_plain_text(&PlainPassword::new("ValidPassword1!"), &hasher)?;
//!
//! assert_eq!(password.hash().as_str(), "!1drowssaPdilaV");
//! assert!(password.matches(&PlainPassword::new("ValidPassword1!"), &hasher));
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// パスワードの最小文字数
const PASSWORD_MIN_LENGTH: usize = 8;

/// 平文パスワード（ユーザーの入力値）
///
/// ユーザーが入力したパスワードをラップする。
/// パスワードの新規設定とログイン時の検証の両方で使用する。
///
/// # セキュリティ
///
/// Debug 出力ではパスワードの値をマスクする。
#[derive(Clone)]
pub struct PlainPassword(String);

impl std::fmt::Debug for PlainPassword {
   fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
      f.debug_tuple("PlainPassword").field(&"[REDACTED]").finish()
   }
}

impl PlainPassword {
   /// パスワードを作成する
   pub fn new(value: impl Into<String>) -> Self {
      Self(value.into())
   }

   /// 文字列参照を取得する
   pub fn as_str(&self) -> &str {
      &self.0
   }
}

/// パスワードハッシュ（永続化用）
///
/// [`PasswordHasher`] が生成したハッシュ文字列をラップする。
/// 形式はハッシャーの実装に依存し、ドメイン層は内容を解釈しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordHash(String);

impl PasswordHash {
   /// ハッシュ文字列からインスタンスを作成する
   ///
   /// ハッシャーの実装と、データベースからの復元時に使用する。
   pub fn new(hash: impl Into<String>) -> Self {
      Self(hash.into())
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

/// パスワード検証結果
///
/// bool ではなく専用の型を使うことで、ハッシャー実装の戻り値の意図を明確にする。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordVerifyResult {
   /// パスワードが一致した
   Match,
   /// パスワードが一致しなかった
   Mismatch,
}

impl PasswordVerifyResult {
   /// 一致したかどうかを返す
   pub fn is_match(&self) -> bool {
      matches!(self, Self::Match)
   }

   /// 一致しなかったかどうかを返す
   pub fn is_mismatch(&self) -> bool {
      matches!(self, Self::Mismatch)
   }
}

impl From<bool> for PasswordVerifyResult {
   fn from(matched: bool) -> Self {
      if matched { Self::Match } else { Self::Mismatch }
   }
}

/// ハッシュ計算と検証を担当するトレイト
///
/// 具体的なアルゴリズム（Argon2id など）はインフラ層が実装する。
pub trait PasswordHasher: Send + Sync {
   /// 平文パスワードからハッシュを計算する
   fn hash(&self, raw: &PlainPassword) -> PasswordHash;

   /// 平文パスワードが保存済みハッシュと一致するか検証する
   fn matches(&self, raw: &PlainPassword, hash: &PasswordHash) -> PasswordVerifyResult;
}

/// パスワード（値オブジェクト）
///
/// 強度要件を満たした平文パスワードのハッシュのみを保持する。
/// 平文はハッシュ計算の直後に破棄され、このオブジェクトには残らない。
///
/// # 強度要件
///
/// 以下の順に検証し、最初に違反したルールでエラーを返す:
///
/// 1. 空文字列・空白のみではない
/// 2. 8 文字以上
/// 3. 英大文字を含む
/// 4. 英小文字を含む
/// 5. 数字を含む
/// 6. 英数字以外の記号を含む
/// 7. スペースを含まない
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
   hash: PasswordHash,
}

impl std::fmt::Debug for Password {
   fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
      f.debug_struct("Password").field("hash", &"[REDACTED]").finish()
   }
}

impl Password {
   /// 平文パスワードを検証し、ハッシュ化したパスワードを作成する
   ///
   /// 検証に成功した場合のみ `hasher.hash` を 1 回呼び出す。
   ///
   /// # エラー
   ///
   /// 強度要件を満たさない場合は `DomainError::InvalidPassword` を返す。
   pub fn from_plain_text(
      raw: &PlainPassword,
      hasher: &dyn PasswordHasher,
   ) -> Result<Self, DomainError> {
      validate_strength(raw.as_str())?;

      Ok(Self {
         hash: hasher.hash(raw),
      })
   }

   /// 保存済みのハッシュからパスワードを復元する（データベースから取得時）
   ///
   /// 平文が存在しないため強度要件は検証しない。
   pub fn from_hash(hash: PasswordHash) -> Self {
      Self { hash }
   }

   /// 平文パスワードが一致するか判定する
   ///
   /// 比較は `hasher.matches` にそのまま委譲する。
   pub fn matches(&self, raw: &PlainPassword, hasher: &dyn PasswordHasher) -> bool {
      hasher.matches(raw, &self.hash).is_match()
   }

   /// 保持しているハッシュを取得する
   pub fn hash(&self) -> &PasswordHash {
      &self.hash
   }
}

fn validate_strength(value: &str) -> Result<(), DomainError> {
   let violation = if value.trim().is_empty() {
      Some("パスワードは必須です".to_string())
   } else if value.chars().count() < PASSWORD_MIN_LENGTH {
      Some(format!(
         "パスワードは {PASSWORD_MIN_LENGTH} 文字以上である必要があります"
      ))
   } else if !value.chars().any(|c| c.is_ascii_uppercase()) {
      Some("パスワードには英大文字を 1 文字以上含める必要があります".to_string())
   } else if !value.chars().any(|c| c.is_ascii_lowercase()) {
      Some("パスワードには英小文字を 1 文字以上含める必要があります".to_string())
   } else if !value.chars().any(|c| c.is_ascii_digit()) {
      Some("パスワードには数字を 1 文字以上含める必要があります".to_string())
   } else if value.chars().all(|c| c.is_ascii_alphanumeric()) {
      Some("パスワードには記号を 1 文字以上含める必要があります".to_string())
   } else if value.contains(' ') {
      Some("パスワードにスペースを含めることはできません".to_string())
   } else {
      None
   };

   match violation {
      Some(message) => Err(DomainError::InvalidPassword(message)),
      None => Ok(()),
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;
   use crate::test_utils::FakePasswordHasher;

   const VALID_PASSWORD: &str = "ValidPassword1!";

   #[rstest]
   fn test_平文パスワードのdebug出力はマスクされる() {
      let password = PlainPassword::new("secret");
      let debug = format!("{:?}", password);
      assert!(debug.contains("[REDACTED]"));
      assert!(!debug.contains("secret"));
   }

   #[rstest]
   fn test_検証結果_一致と不一致() {
      assert!(PasswordVerifyResult::Match.is_match());
      assert!(PasswordVerifyResult::Mismatch.is_mismatch());
      assert_eq!(PasswordVerifyResult::from(true), PasswordVerifyResult::Match);
      assert_eq!(
         PasswordVerifyResult::from(false),
         PasswordVerifyResult::Mismatch
      );
   }

   #[rstest]
   fn test_有効な平文からパスワードを作成するとハッシャーを1回呼ぶ() {
      let hasher = FakePasswordHasher::new();

      let password =
         Password::from_plain_text(&PlainPassword::new(VALID_PASSWORD), &hasher).unwrap();

      assert_eq!(hasher.hash_calls(), 1);
      assert_eq!(
         password.hash(),
         &FakePasswordHasher::expected_hash(VALID_PASSWORD)
      );
   }

   #[rstest]
   fn test_パスワードのdebug出力にハッシュを含めない() {
      let hasher = FakePasswordHasher::new();
      let password =
         Password::from_plain_text(&PlainPassword::new(VALID_PASSWORD), &hasher).unwrap();

      let debug = format!("{:?}", password);

      assert!(debug.contains("[REDACTED]"));
      assert!(!debug.contains(password.hash().as_str()));
   }

   #[rstest]
   #[case("", "空文字列")]
   #[case("   ", "空白のみ")]
   #[case("Ab1!", "8文字未満")]
   #[case("validpassword1!", "英大文字なし")]
   #[case("VALIDPASSWORD1!", "英小文字なし")]
   #[case("ValidPassword!", "数字なし")]
   #[case("ValidPassword1", "記号なし")]
   #[case("Valid Password1!", "スペースを含む")]
   fn test_強度要件を満たさないパスワードを拒否する(
      #[case] input: &str,
      #[case] _reason: &str,
   ) {
      let hasher = FakePasswordHasher::new();

      let result = Password::from_plain_text(&PlainPassword::new(input), &hasher);

      assert!(matches!(result, Err(DomainError::InvalidPassword(_))));
      assert_eq!(hasher.hash_calls(), 0);
   }

   #[rstest]
   #[case("Ab1!", "パスワードは 8 文字以上である必要があります")]
   #[case(
      "validpassword1!",
      "パスワードには英大文字を 1 文字以上含める必要があります"
   )]
   #[case("Valid Password1", "パスワードにスペースを含めることはできません")]
   fn test_最初に違反したルールのメッセージを返す(
      #[case] input: &str,
      #[case] expected: &str,
   ) {
      let hasher = FakePasswordHasher::new();

      let result = Password::from_plain_text(&PlainPassword::new(input), &hasher);

      assert_eq!(
         result.unwrap_err(),
         DomainError::InvalidPassword(expected.to_string())
      );
   }

   #[rstest]
   #[case(true)]
   #[case(false)]
   fn test_matchesはハッシャーの結果をそのまま返す(#[case] verify_result: bool) {
      let hasher = FakePasswordHasher::new().with_verify_result(verify_result);
      let password = Password::from_hash(PasswordHash::new("stored-hash"));

      let matched = password.matches(&PlainPassword::new(VALID_PASSWORD), &hasher);

      assert_eq!(matched, verify_result);
      assert_eq!(hasher.matches_calls(), 1);
   }

   #[rstest]
   fn test_ハッシュから復元したパスワードは同じハッシュを保持する() {
      let hash = PasswordHash::new("$argon2id$v=19$...");

      let password = Password::from_hash(hash.clone());

      assert_eq!(password.hash(), &hash);
   }
}
