//! 統合テスト用の共通ヘルパー
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// fleet.ymlをプロジェクトディレクトリに書き出す
pub fn write_config(dir: &Path, content: &str) {
    fs::write(dir.join("fleet.yml"), content).unwrap();
}

/// 受け取った引数を記録して終了する偽のコンテナランタイムを作成
///
/// 呼び出しごとに1行、引数列を{dir}/runtime-args.logへ追記する。
#[cfg(unix)]
pub fn write_fake_runtime(dir: &Path, exit_code: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let log_path = dir.join("runtime-args.log");
    let script_path = dir.join("fake-docker");
    let script = format!(
        "#!/bin/sh\necho \"$@\" >> '{}'\nexit {}\n",
        log_path.display(),
        exit_code
    );
    fs::write(&script_path, script).unwrap();
    fs::set_permissions(&script_path, fs::Permissions::from_mode(0o755)).unwrap();
    script_path
}

/// 偽ランタイムに記録された呼び出しを読み出す（未呼び出しなら空）
pub fn recorded_args(dir: &Path) -> String {
    fs::read_to_string(dir.join("runtime-args.log")).unwrap_or_default()
}

/// 偽ランタイムが一度でも呼び出されたか
pub fn runtime_was_invoked(dir: &Path) -> bool {
    dir.join("runtime-args.log").exists()
}
