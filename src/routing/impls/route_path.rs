use crate::routing::structs::route_path::RoutePath;

impl RoutePath {
    pub fn new(prefix: &str) -> RoutePath {
        let trimmed = prefix.trim().trim_end_matches('/');
        let prefix = if trimmed.is_empty() || trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };
        RoutePath { prefix }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn join(&self, segment: &str) -> String {
        format!("{}/{}", self.prefix, segment.trim_matches('/'))
    }
}
