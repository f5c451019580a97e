/// Optional roles the server engine advertises and serves.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct ServerOptions {
    pub(crate) cloud: bool,
    pub(crate) node: bool,
}
