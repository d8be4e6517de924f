//! プロジェクト定義

use super::service::ServiceSpec;
use serde::{Deserialize, Serialize};

/// プロジェクト定義（設定ファイルのルート）
///
/// 1回のCLI呼び出しにつき1度だけロードされ、以後は不変。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// プロジェクト名（表示用。コンテナ名の導出には使用しない）
    #[serde(default)]
    pub project: String,
    /// 宣言順を保持したサービス一覧
    #[serde(default)]
    pub services: Vec<ServiceSpec>,
}
