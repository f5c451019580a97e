use std::path::{Path, PathBuf};
use crate::config::structs::configuration::{Configuration, DEFAULT_CLOUD_PORT, DEFAULT_HTTPS_PORT, DEFAULT_HTTP_PORT};
use crate::ssl::enums::server_role::ServerRole;
use crate::ssl::ssl::bind_certificates;

impl Configuration {
    /// Fills every unset field with a default derived from `root`.
    ///
    /// Only empty strings and non-positive ports count as unset, so running
    /// this on an already resolved configuration changes nothing.
    pub fn resolve(&mut self, root: &Path) {
        self.resolve_certificates(root);
        self.resolve_ports();
        self.resolve_site(root);
        self.resolve_sys(root);
        self.resolve_service();
    }

    pub fn resolve_certificates(&mut self, root: &Path) {
        let https = bind_certificates(ServerRole::Https, self.https.enabled, &self.https.cert.server.file, "", root);
        self.https.cert.server.file = https.server;

        let cloud = bind_certificates(ServerRole::Cloud, self.cloud.enabled, &self.cloud.cert.server.file, &self.cloud.cert.ca.file, root);
        self.cloud.cert.server.file = cloud.server;
        self.cloud.cert.ca.file = cloud.ca;

        let node = bind_certificates(ServerRole::Node, self.node.enabled, &self.node.cert.server.file, &self.node.cert.ca.file, root);
        self.node.cert.server.file = node.server;
        self.node.cert.ca.file = node.ca;
    }

    pub fn resolve_ports(&mut self) {
        fill_port(&mut self.http.port, DEFAULT_HTTP_PORT);
        fill_port(&mut self.https.port, DEFAULT_HTTPS_PORT);
        fill_port(&mut self.cloud.port, DEFAULT_CLOUD_PORT);
        fill_port(&mut self.node.cloud_server.port, DEFAULT_CLOUD_PORT);
    }

    pub fn resolve_site(&mut self, root: &Path) {
        let site = root.join("site");
        fill_path(&mut self.site.root.path, site.join("root"));
        fill_path(&mut self.site.doc.path, site.join("doc"));
        fill_path(&mut self.site.opt.path, site.join("opt"));
    }

    pub fn resolve_sys(&mut self, root: &Path) {
        fill_path(&mut self.sys.svc.custom.app, root.join("svc").join("custom"));
        fill_path(&mut self.sys.svc.custom.log, root.join("log").join("svc").join("custom"));
    }

    pub fn resolve_service(&mut self) {
        if self.svc.name.trim().is_empty() {
            self.svc.name = self.module.name.clone();
        }
    }
}

fn fill_path(value: &mut String, default: PathBuf) {
    if value.is_empty() {
        *value = default.to_string_lossy().into_owned();
    }
}

fn fill_port(value: &mut i32, default: i32) {
    if *value < 1 {
        *value = default;
    }
}
