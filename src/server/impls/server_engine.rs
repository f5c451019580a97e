use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use futures_util::future::try_join_all;
use log::{info, warn};
use crate::config::structs::config_store::ConfigStore;
use crate::roles::structs::server_options::ServerOptions;
use crate::routing::routing::API_PATH;
use crate::routing::structs::route_path::RoutePath;
use crate::routing::structs::router::Router;
use crate::routing::types::PreHandle;
use crate::server::enums::server_error::ServerError;
use crate::server::server::gateway_service;
use crate::server::structs::listener::Listener;
use crate::server::structs::server_engine::ServerEngine;
use crate::server::traits::gateway_handler::GatewayHandler;
use crate::ssl::ssl::load_server_config;
use crate::websocket::structs::channel_registry::ChannelRegistry;

impl ServerEngine {
    /// Wires the handler and loads every listener's TLS material.
    ///
    /// Any failure here is fatal to startup: a role that cannot be built or
    /// a listener without usable certificates is never served degraded.
    pub fn new(config: Arc<ConfigStore>, handler: Arc<dyn GatewayHandler>, pre_handle: PreHandle) -> Result<ServerEngine, ServerError> {
        let mut options = ServerOptions::new();
        handler.extend_opt_setup(Some(&mut options));

        let channels = Arc::new(ChannelRegistry::new());
        let mut router = Router::new();
        handler.init_routing(&mut router);
        handler.extend_opt_api(&mut router, &RoutePath::new(API_PATH), pre_handle, channels.clone())?;

        let listeners = {
            let cfg = config.read();
            let mut listeners = Vec::new();
            if cfg.http.enabled {
                listeners.push(Listener::plain("HTTP", cfg.http.port)?);
            }
            if cfg.https.enabled {
                let tls = load_server_config(&cfg.https.cert.server.file, None)?;
                listeners.push(Listener::tls("HTTPS", cfg.https.port, tls)?);
            }
            if options.cloud() {
                let tls = load_server_config(&cfg.cloud.cert.server.file, Some(&cfg.cloud.cert.ca.file))?;
                listeners.push(Listener::tls("CLOUD", cfg.cloud.port, tls)?);
            }
            listeners
        };

        Ok(ServerEngine {
            config,
            handler,
            options,
            router: Arc::new(router),
            channels,
            listeners,
            interactive: std::io::stdin().is_terminal(),
        })
    }

    pub fn config(&self) -> Arc<ConfigStore> {
        self.config.clone()
    }

    pub fn options(&self) -> ServerOptions {
        self.options
    }

    pub fn router(&self) -> Arc<Router> {
        self.router.clone()
    }

    pub fn channels(&self) -> Arc<ChannelRegistry> {
        self.channels.clone()
    }

    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    /// `false` when started by the service manager.
    pub fn interactive(&self) -> bool {
        self.interactive
    }

    pub fn site_index(&self) -> PathBuf {
        PathBuf::from(&self.config.read().site.opt.path).join("index.html")
    }

    /// Serves every listener until one fails or Ctrl-C is received.
    pub async fn run(self) -> Result<(), ServerError> {
        let site_index = self.site_index();
        let mut handles = Vec::new();
        let mut servers = Vec::new();
        for listener in self.listeners {
            let (handle, server) = gateway_service(listener, self.handler.clone(), self.router.clone(), site_index.clone())?;
            handles.push(handle);
            servers.push(server);
        }

        if servers.is_empty() {
            warn!("[BOOT] No listener enabled, nothing to serve");
            return Ok(());
        }

        let servers = try_join_all(servers);
        tokio::pin!(servers);
        tokio::select! {
            result = &mut servers => {
                result?;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown request received, shutting down...");
                for handle in &handles {
                    handle.stop(true).await;
                }
                servers.await?;
                info!("Server shutting down completed");
            }
        }
        Ok(())
    }
}
