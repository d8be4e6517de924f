//! サービス解決
//!
//! ProjectConfigを対象ランタイムでフィルタし、未指定の属性を自動検出で
//! 補完したResolvedServiceの一覧を作ります。

use crate::detect::{detect_framework, detect_package_manager};
use crate::error::{CoreError, Result};
use crate::model::{ProjectConfig, ResolvedService, ServiceSpec, container_name};
use crate::runtime::RuntimeDescriptor;
use std::path::Path;
use tracing::{debug, instrument};

/// 設定から対象ランタイムのサービスを解決
///
/// runtimeがファミリのプレフィックスで始まるサービスだけを、宣言順を
/// 保持して返す。1件もマッチしない場合はNoServicesForRuntime。
#[instrument(skip_all, fields(family = rt.family))]
pub fn resolve_services(
    config: &ProjectConfig,
    rt: &RuntimeDescriptor,
    project_root: &Path,
) -> Result<Vec<ResolvedService>> {
    let mut resolved = Vec::new();

    for spec in &config.services {
        if !spec.runtime.starts_with(rt.family) {
            continue;
        }
        debug!(service = %spec.name, runtime = %spec.runtime, "Service matched runtime family");
        resolved.push(resolve_one(spec, rt, project_root));
    }

    if resolved.is_empty() {
        return Err(CoreError::NoServicesForRuntime {
            family: rt.family.to_string(),
        });
    }
    Ok(resolved)
}

/// 1サービスを解決
///
/// 自動検出は対応する宣言フィールドが空で、かつフォルダがある場合のみ。
/// コンテナ識別子は常に導出し、設定からは読まない。
fn resolve_one(spec: &ServiceSpec, rt: &RuntimeDescriptor, project_root: &Path) -> ResolvedService {
    let folder_path = (!spec.folder.is_empty()).then(|| project_root.join(&spec.folder));

    let package_manager = if !spec.package_manager.is_empty() {
        spec.package_manager.clone()
    } else if let Some(folder) = &folder_path {
        detect_package_manager(folder, rt.lock_rules, rt.default_manager)
    } else {
        String::new()
    };

    let framework = if !spec.framework.is_empty() {
        spec.framework.clone()
    } else if let Some(folder) = &folder_path {
        detect_framework(folder, rt.manifest, rt.framework_rules, rt.console_probe.as_ref())
    } else {
        String::new()
    };

    ResolvedService {
        name: spec.name.clone(),
        container: container_name(&spec.name),
        folder: spec.folder.clone(),
        package_manager,
        framework,
    }
}
