#[cfg(test)]
mod roles_tests {
    use std::path::Path;
    use std::sync::Arc;
    use crate::config::structs::config_store::ConfigStore;
    use crate::config::structs::configuration::Configuration;

    fn touch(path: &str) {
        let path = Path::new(path);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "placeholder").unwrap();
    }

    pub(super) fn store(root: &Path, cloud: bool, node: bool, with_certificates: bool) -> Arc<ConfigStore> {
        let mut config = Configuration::init();
        config.module.name = String::from("secure-gateway");
        config.module.version = String::from("1.0.4");
        config.node.instance_id = String::from("instance-1");
        config.cloud.enabled = cloud;
        config.node.enabled = node;
        config.node.cloud_server.address = String::from("cloud.example.org");
        config.resolve(root);
        if with_certificates {
            for path in [
                &config.cloud.cert.server.file,
                &config.cloud.cert.ca.file,
                &config.node.cert.server.file,
                &config.node.cert.ca.file,
            ] {
                if !path.is_empty() {
                    touch(path);
                }
            }
        }
        Arc::new(ConfigStore::from_config(root.join("cfg").join("secure-gateway.json"), root.to_path_buf(), config))
    }

    mod construction_tests {
        use std::sync::Arc;
        use tempfile::TempDir;
        use crate::roles::enums::role_error::RoleError;
        use crate::roles::enums::role_kind::RoleKind;
        use crate::roles::roles::{build_roles, role_port};
        use crate::websocket::structs::channel_registry::ChannelRegistry;
        use super::store;

        #[test]
        fn test_no_roles_when_disabled() {
            let temp_dir = TempDir::new().unwrap();
            let roles = build_roles(store(temp_dir.path(), false, false, false), Arc::new(ChannelRegistry::new()), None).unwrap();
            assert!(roles.is_empty());
        }

        #[test]
        fn test_cloud_before_node() {
            let temp_dir = TempDir::new().unwrap();
            let roles = build_roles(store(temp_dir.path(), true, true, true), Arc::new(ChannelRegistry::new()), None).unwrap();
            let kinds: Vec<RoleKind> = roles.iter().map(|role| role.kind()).collect();
            assert_eq!(kinds, vec![RoleKind::Cloud, RoleKind::Node]);
        }

        #[test]
        fn test_missing_certificate_is_fatal() {
            let temp_dir = TempDir::new().unwrap();
            let result = build_roles(store(temp_dir.path(), true, false, false), Arc::new(ChannelRegistry::new()), None);
            match result {
                Err(RoleError::CertificateMissing { role, path }) => {
                    assert_eq!(role, RoleKind::Cloud);
                    assert!(path.ends_with("cloud.pfx"));
                }
                _ => panic!("expected a missing certificate error"),
            }
        }

        #[test]
        fn test_disabled_role_needs_no_certificate() {
            let temp_dir = TempDir::new().unwrap();
            let store = store(temp_dir.path(), false, true, true);
            assert!(store.read().cloud.cert.server.file.is_empty());
            let roles = build_roles(store, Arc::new(ChannelRegistry::new()), None).unwrap();
            assert_eq!(roles.len(), 1);
        }

        #[test]
        fn test_role_port_bounds() {
            assert_eq!(role_port(RoleKind::Cloud, 6931).unwrap(), 6931);
            assert!(matches!(role_port(RoleKind::Cloud, 0), Err(RoleError::InvalidPort { .. })));
            assert!(matches!(role_port(RoleKind::Node, 70000), Err(RoleError::InvalidPort { .. })));
        }

        #[test]
        fn test_roles_share_registry() {
            let temp_dir = TempDir::new().unwrap();
            let channels = Arc::new(ChannelRegistry::new());
            let roles = build_roles(store(temp_dir.path(), true, true, true), channels.clone(), None).unwrap();
            for role in &roles {
                assert!(Arc::ptr_eq(&role.channels(), &channels));
            }
        }
    }

    mod route_tests {
        use std::sync::Arc;
        use actix_web::{test, App, HttpRequest, HttpResponse};
        use tempfile::TempDir;
        use crate::roles::roles::build_roles;
        use crate::roles::structs::role_info::RoleInfo;
        use crate::roles::enums::role_kind::RoleKind;
        use crate::routing::structs::route_path::RoutePath;
        use crate::routing::structs::router::Router;
        use crate::routing::types::PreHandle;
        use crate::websocket::structs::channel_registry::ChannelRegistry;
        use super::store;

        fn router(root: &std::path::Path, pre_handle: PreHandle) -> Router {
            let roles = build_roles(store(root, true, true, true), Arc::new(ChannelRegistry::new()), None).unwrap();
            let mut router = Router::new();
            for role in roles {
                role.register_routes(&mut router, &RoutePath::new("/opt/api"), pre_handle.clone());
            }
            router
        }

        #[::core::prelude::v1::test]
        fn test_register_routes_prefixes() {
            let temp_dir = TempDir::new().unwrap();
            let router = router(temp_dir.path(), Arc::new(|_request: &HttpRequest| None));
            assert_eq!(router.prefixes(), vec!["/opt/api/cloud", "/opt/api/node"]);
        }

        #[actix_web::test]
        async fn test_cloud_info_route() {
            let temp_dir = TempDir::new().unwrap();
            let router = Arc::new(router(temp_dir.path(), Arc::new(|_request: &HttpRequest| None)));
            let app = test::init_service(
                App::new().configure(|cfg| router.configure(cfg))
            ).await;

            let request = test::TestRequest::get().uri("/opt/api/cloud/info").to_request();
            let info: RoleInfo = test::call_and_read_body_json(&app, request).await;
            assert_eq!(info.role, RoleKind::Cloud);
            assert_eq!(info.port, 6931);
            assert_eq!(info.instance_id, "instance-1");
            assert_eq!(info.cloud_server, None);
        }

        #[actix_web::test]
        async fn test_node_info_route() {
            let temp_dir = TempDir::new().unwrap();
            let router = Arc::new(router(temp_dir.path(), Arc::new(|_request: &HttpRequest| None)));
            let app = test::init_service(
                App::new().configure(|cfg| router.configure(cfg))
            ).await;

            let request = test::TestRequest::get().uri("/opt/api/node/info").to_request();
            let info: RoleInfo = test::call_and_read_body_json(&app, request).await;
            assert_eq!(info.role, RoleKind::Node);
            assert_eq!(info.cloud_server.as_deref(), Some("cloud.example.org:6931"));
        }

        #[actix_web::test]
        async fn test_pre_handle_short_circuits_roles() {
            let temp_dir = TempDir::new().unwrap();
            let deny: PreHandle = Arc::new(|request: &HttpRequest| {
                match request.headers().get("token") {
                    Some(_) => None,
                    None => Some(HttpResponse::Unauthorized().finish()),
                }
            });
            let router = Arc::new(router(temp_dir.path(), deny));
            let app = test::init_service(
                App::new().configure(|cfg| router.configure(cfg))
            ).await;

            for uri in ["/opt/api/cloud/info", "/opt/api/node/info", "/opt/api/cloud/channel"] {
                let request = test::TestRequest::get().uri(uri).to_request();
                let response = test::call_service(&app, request).await;
                assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED, "{uri}");
            }

            let request = test::TestRequest::get().uri("/opt/api/cloud/info").insert_header(("token", "abc")).to_request();
            let response = test::call_service(&app, request).await;
            assert!(response.status().is_success());
        }
    }
}
