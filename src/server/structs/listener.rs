#[derive(Debug, Clone)]
pub struct Listener {
    pub(crate) name: String,
    pub(crate) port: u16,
    pub(crate) tls: Option<rustls::ServerConfig>,
}
