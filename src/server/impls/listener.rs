use crate::server::enums::server_error::ServerError;
use crate::server::structs::listener::Listener;

impl Listener {
    pub fn plain(name: &str, port: i32) -> Result<Listener, ServerError> {
        Ok(Listener {
            name: name.to_string(),
            port: listener_port(name, port)?,
            tls: None,
        })
    }

    pub fn tls(name: &str, port: i32, config: rustls::ServerConfig) -> Result<Listener, ServerError> {
        Ok(Listener {
            name: name.to_string(),
            port: listener_port(name, port)?,
            tls: Some(config),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn is_tls(&self) -> bool {
        self.tls.is_some()
    }
}

fn listener_port(name: &str, port: i32) -> Result<u16, ServerError> {
    match u16::try_from(port) {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ServerError::InvalidPort { listener: name.to_string(), port }),
    }
}
