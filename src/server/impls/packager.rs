use std::path::{Path, PathBuf};
use log::info;
use crate::config::structs::module_config::ModuleConfig;
use crate::server::enums::service_error::ServiceError;
use crate::server::structs::packager::Packager;

impl Packager {
    pub fn new(root: &Path, module: &ModuleConfig, exe: &Path, cfg: &Path) -> Packager {
        Packager {
            root: root.to_path_buf(),
            name: module.name.clone(),
            version: module.version.clone(),
            exe: exe.to_path_buf(),
            cfg: cfg.to_path_buf(),
        }
    }

    /// `<root>/pkg/<name>-<version>`
    pub fn target(&self) -> PathBuf {
        self.root.join("pkg").join(format!("{}-{}", self.name, self.version))
    }

    /// Copies the executable to `bin/` and, when present, the configuration
    /// file to `cfg/` below [`Packager::target`].
    pub fn package(&self) -> Result<PathBuf, ServiceError> {
        let target = self.target();
        copy_into(&self.exe, &target.join("bin"))?;
        if self.cfg.is_file() {
            copy_into(&self.cfg, &target.join("cfg"))?;
        }
        info!("[PACKAGE] {} {} packaged into {}", self.name, self.version, target.display());
        Ok(target)
    }
}

fn copy_into(file: &Path, folder: &Path) -> Result<(), ServiceError> {
    let io_error = |path: &Path, e: std::io::Error| ServiceError::Io { path: path.display().to_string(), source: e };
    std::fs::create_dir_all(folder).map_err(|e| io_error(folder, e))?;
    let name = file.file_name().ok_or_else(|| io_error(file, std::io::Error::from(std::io::ErrorKind::InvalidInput)))?;
    std::fs::copy(file, folder.join(name)).map_err(|e| io_error(file, e))?;
    Ok(())
}
