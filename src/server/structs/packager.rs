use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct Packager {
    pub(crate) root: PathBuf,
    pub(crate) name: String,
    pub(crate) version: String,
    pub(crate) exe: PathBuf,
    pub(crate) cfg: PathBuf,
}
