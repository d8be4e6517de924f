//! 解決済みサービス

/// コンテナ名の名前空間
///
/// 外部ランタイムのデフォルトネットワーク・コンテナ命名に合わせ、
/// 設定のプロジェクト名に関わらず固定。
pub const CONTAINER_NAMESPACE: &str = "fleet";

/// ランタイム別に解決済みのサービスビュー
///
/// `package_manager` と `framework` は、宣言が空だった場合のみ
/// ディスク上のレイアウトから自動検出された値が入る。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedService {
    pub name: String,
    /// 導出されたコンテナ識別子（`fleet-{name}-1`）
    pub container: String,
    pub folder: String,
    pub package_manager: String,
    pub framework: String,
}

/// サービス名からコンテナ識別子を導出
pub fn container_name(service: &str) -> String {
    format!("{}-{}-1", CONTAINER_NAMESPACE, service)
}
