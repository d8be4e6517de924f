//! サービス定義

use serde::{Deserialize, Serialize};

/// サービス定義（ユーザーが宣言したままの形）
///
/// YAML形式：
/// ```yaml
/// services:
///   - name: web
///     runtime: node-18
///     framework: next
///     folder: ./web
///     build: npm run build
///     package_manager: yarn
/// ```
///
/// name以外のフィールドは省略可能で、省略時は空文字列。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSpec {
    /// サービス名（必須・一意キー）
    pub name: String,
    /// ランタイム識別子（例: "node", "node-18", "php8.2"）
    #[serde(default)]
    pub runtime: String,
    /// Webフレームワーク名（空なら自動検出の対象）
    #[serde(default)]
    pub framework: String,
    /// ソースフォルダ（プロジェクトルートからの相対パス）
    #[serde(default)]
    pub folder: String,
    /// ビルドコマンド
    #[serde(default)]
    pub build: String,
    /// パッケージマネージャの明示指定（空なら自動検出の対象）
    #[serde(default)]
    pub package_manager: String,
}
