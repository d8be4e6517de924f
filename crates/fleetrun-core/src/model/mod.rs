//! モデル定義
//!
//! fleetrunで使用されるデータモデルを定義します。
//! 設定ファイルに宣言された形（`ProjectConfig` / `ServiceSpec`）と、
//! ランタイム別に解決済みの形（`ResolvedService`）を分離しています。

mod project;
mod resolved;
mod service;

// Re-exports
pub use project::*;
pub use resolved::*;
pub use service::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_config_creation() {
        let config = ProjectConfig {
            project: "my-project".to_string(),
            services: vec![
                ServiceSpec {
                    name: "web".to_string(),
                    runtime: "node-18".to_string(),
                    ..Default::default()
                },
                ServiceSpec {
                    name: "api".to_string(),
                    runtime: "php8.2".to_string(),
                    ..Default::default()
                },
            ],
        };

        assert_eq!(config.project, "my-project");
        assert_eq!(config.services.len(), 2);
        assert_eq!(config.services[0].name, "web");
        assert_eq!(config.services[1].runtime, "php8.2");
    }

    #[test]
    fn test_service_spec_defaults() {
        // name以外のフィールドは空文字列がゼロ値
        let spec = ServiceSpec {
            name: "db".to_string(),
            ..Default::default()
        };

        assert!(spec.runtime.is_empty());
        assert!(spec.framework.is_empty());
        assert!(spec.folder.is_empty());
        assert!(spec.build.is_empty());
        assert!(spec.package_manager.is_empty());
    }

    #[test]
    fn test_container_name_is_fixed_to_fleet_namespace() {
        // プロジェクト名に関わらず fleet-{service}-1 形式
        assert_eq!(container_name("api"), "fleet-api-1");
        assert_eq!(container_name("web"), "fleet-web-1");
    }

    #[test]
    fn test_service_spec_serialization() {
        let spec = ServiceSpec {
            name: "web".to_string(),
            runtime: "node".to_string(),
            framework: "next".to_string(),
            folder: "./web".to_string(),
            build: "npm run build".to_string(),
            package_manager: "yarn".to_string(),
        };

        let json = serde_json::to_string(&spec).unwrap();
        let deserialized: ServiceSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, spec);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        // 余分なフィールドはエラーにしない
        let json = r#"{"name": "web", "runtime": "node", "replicas": 3}"#;
        let spec: ServiceSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.name, "web");
        assert_eq!(spec.runtime, "node");
    }
}
