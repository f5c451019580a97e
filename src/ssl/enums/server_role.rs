/// The TLS-carrying roles of the gateway.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum ServerRole {
    Https,
    Cloud,
    Node,
}
