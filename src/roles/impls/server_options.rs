use crate::roles::structs::server_options::ServerOptions;

impl ServerOptions {
    pub fn new() -> ServerOptions {
        ServerOptions::default()
    }

    pub fn set_cloud(&mut self, enabled: bool) {
        self.cloud = enabled;
    }

    pub fn set_node(&mut self, enabled: bool) {
        self.node = enabled;
    }

    pub fn cloud(&self) -> bool {
        self.cloud
    }

    pub fn node(&self) -> bool {
        self.node
    }
}
