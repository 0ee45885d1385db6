//! # タスク
//!
//! タスクに関連する値オブジェクトを定義する。

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// タスクタイトルの最大文字数
const TASK_TITLE_MAX_LENGTH: usize = 100;

/// タスクタイトル（値オブジェクト）
///
/// # バリデーション
///
/// - 空文字列・空白のみではない
/// - 最大 100 文字（前後の空白を除去する前の文字数で判定する）
///
/// 検証後、前後の空白を除去した値を保持する。
///
/// # 使用例
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use todolist_domain::task::TaskTitle;
///
/// let title = TaskTitle::new("  Buy milk  ")?;
/// assert_eq!(title.as_str(), "Buy milk");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskTitle(String);

impl TaskTitle {
    /// タスクタイトルを作成する
    ///
    /// # Errors
    ///
    /// - 空文字列・空白のみの場合
    /// - 100 文字を超える場合
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.trim().is_empty() {
            return Err(DomainError::InvalidTaskTitle(
                "タスクタイトルは必須です".to_string(),
            ));
        }

        if value.chars().count() > TASK_TITLE_MAX_LENGTH {
            return Err(DomainError::InvalidTaskTitle(format!(
                "タスクタイトルは {TASK_TITLE_MAX_LENGTH} 文字以内である必要があります"
            )));
        }

        Ok(Self(value.trim().to_string()))
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

impl TryFrom<String> for TaskTitle {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskTitle> for String {
    fn from(title: TaskTitle) -> Self {
        title.0
    }
}

impl std::fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Buy milk", "Buy milk")]
    #[case("  Buy milk  ", "Buy milk")]
    #[case("\t牛乳を買う\n", "牛乳を買う")]
    fn test_タスクタイトルは前後の空白を除去して保持する(
        #[case] input: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(TaskTitle::new(input).unwrap().as_str(), expected);
    }

    #[rstest]
    #[case("", "空文字列")]
    #[case("   ", "空白のみ")]
    #[case(&"x".repeat(101), "101文字")]
    fn test_タスクタイトルは不正な値を拒否する(#[case] input: &str, #[case] _reason: &str) {
        assert!(matches!(
            TaskTitle::new(input),
            Err(DomainError::InvalidTaskTitle(_))
        ));
    }

    #[test]
    fn test_タスクタイトルは100文字まで受け入れる() {
        assert!(TaskTitle::new("x".repeat(100)).is_ok());
    }

    #[test]
    fn test_文字数は除去前の値で判定する() {
        let padded = format!(" {} ", "x".repeat(99));
        assert!(matches!(
            TaskTitle::new(padded),
            Err(DomainError::InvalidTaskTitle(_))
        ));
    }

    #[test]
    fn test_マルチバイト文字は1文字として数える() {
        assert!(TaskTitle::new("あ".repeat(100)).is_ok());
    }
}
