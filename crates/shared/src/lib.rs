//! # Todolist 共有ユーティリティ
//!
//! アプリケーション全体で使用される、ビジネスロジックを含まない共通機能を提供する。
//!
//! - [`observability`] - ログ出力形式の設定とトレーシングの初期化

pub mod observability;
