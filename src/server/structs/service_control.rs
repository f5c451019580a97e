use std::path::PathBuf;

/// systemd unit of the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceControl {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) exe: PathBuf,
    pub(crate) args: String,
    pub(crate) unit_folder: PathBuf,
}
