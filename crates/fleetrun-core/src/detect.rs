//! 属性の自動検出
//!
//! サービスの宣言で空だった属性（パッケージマネージャ、フレームワーク）を
//! ソースフォルダの読み取り専用プローブで補完します。判定は記述子に定義
//! された優先順ルールの評価だけで、ランタイム固有の分岐は持ちません。

use crate::runtime::{ConsoleProbe, DetectRule, LockRule};
use std::path::Path;
use tracing::debug;

/// ロックファイルの存在からパッケージマネージャを判定
///
/// ルールを優先順に評価し、最初にロックファイルが存在したものを返す。
/// どれも存在しなければdefaultを返す。
pub fn detect_package_manager(folder: &Path, rules: &[LockRule], default: &str) -> String {
    for rule in rules {
        let marker = folder.join(rule.lock_file);
        if marker.exists() {
            debug!(manager = rule.manager, marker = %marker.display(), "Lock file matched");
            return rule.manager.to_string();
        }
    }
    default.to_string()
}

/// マニフェストとコンソールスクリプトからフレームワークを判定
///
/// コンソールスクリプトの存在判定が最優先。次にマニフェスト内の依存名を
/// ルールの優先順で照合し、最初のマッチを返す。判定できない場合と
/// マニフェストが読めない場合は空文字列（エラーにしない）。
pub fn detect_framework(
    folder: &Path,
    manifest: &str,
    rules: &[DetectRule],
    probe: Option<&ConsoleProbe>,
) -> String {
    let manifest_text = std::fs::read_to_string(folder.join(manifest)).unwrap_or_default();

    if let Some(probe) = probe
        && folder.join(probe.script).exists()
    {
        // 近縁バリアントはマニフェストの依存名で見分ける
        let detected = if manifest_text.contains(probe.variant_needle) {
            probe.variant
        } else {
            probe.framework
        };
        debug!(framework = detected, script = probe.script, "Console script matched");
        return detected.to_string();
    }

    for rule in rules {
        if manifest_text.contains(rule.needle) {
            debug!(framework = rule.framework, needle = rule.needle, "Framework rule matched");
            return rule.framework.to_string();
        }
    }
    String::new()
}
