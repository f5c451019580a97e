use std::path::{Path, PathBuf};
use std::process::Command;
use log::info;
use crate::config::structs::configuration::Configuration;
use crate::server::enums::service_action::ServiceAction;
use crate::server::enums::service_error::ServiceError;
use crate::server::structs::service_control::ServiceControl;

pub const SYSTEMD_UNIT_FOLDER: &str = "/etc/systemd/system";

impl ServiceControl {
    pub fn new(config: &Configuration, exe: &Path) -> ServiceControl {
        ServiceControl {
            name: config.svc.name.clone(),
            description: config.module.remark.clone(),
            exe: exe.to_path_buf(),
            args: config.svc.args.clone(),
            unit_folder: PathBuf::from(SYSTEMD_UNIT_FOLDER),
        }
    }

    pub fn with_unit_folder(mut self, folder: &Path) -> ServiceControl {
        self.unit_folder = folder.to_path_buf();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_path(&self) -> PathBuf {
        self.unit_folder.join(format!("{}.service", self.name))
    }

    pub fn unit_file(&self) -> String {
        let mut exec = self.exe.display().to_string();
        if !self.args.trim().is_empty() {
            exec.push(' ');
            exec.push_str(self.args.trim());
        }
        let working_directory = self.exe.parent().map(|p| p.display().to_string()).unwrap_or_default();
        format!(
            "[Unit]\n\
             Description={}\n\
             After=network.target\n\
             \n\
             [Service]\n\
             Type=simple\n\
             WorkingDirectory={}\n\
             ExecStart={}\n\
             Restart=on-failure\n\
             \n\
             [Install]\n\
             WantedBy=multi-user.target\n",
            self.description, working_directory, exec
        )
    }

    pub fn execute(&self, action: ServiceAction) -> Result<(), ServiceError> {
        if !cfg!(target_os = "linux") {
            return Err(ServiceError::Unsupported(std::env::consts::OS.to_string()));
        }
        info!("[SERVICE] {} {}", action, self.name);
        match action {
            ServiceAction::Install => {
                self.write_unit()?;
                systemctl(&["daemon-reload"])?;
                systemctl(&["enable", &self.name])
            }
            ServiceAction::Start => systemctl(&["start", &self.name]),
            ServiceAction::Stop => systemctl(&["stop", &self.name]),
            ServiceAction::Restart => systemctl(&["restart", &self.name]),
            ServiceAction::Remove => {
                systemctl(&["disable", &self.name])?;
                self.remove_unit()?;
                systemctl(&["daemon-reload"])
            }
        }
    }

    pub fn write_unit(&self) -> Result<(), ServiceError> {
        let path = self.unit_path();
        std::fs::write(&path, self.unit_file()).map_err(|e| ServiceError::Io { path: path.display().to_string(), source: e })?;
        info!("[SERVICE] Unit written to {}", path.display());
        Ok(())
    }

    pub fn remove_unit(&self) -> Result<(), ServiceError> {
        let path = self.unit_path();
        if !path.exists() {
            return Ok(());
        }
        std::fs::remove_file(&path).map_err(|e| ServiceError::Io { path: path.display().to_string(), source: e })
    }
}

fn systemctl(args: &[&str]) -> Result<(), ServiceError> {
    let command = format!("systemctl {}", args.join(" "));
    let status = Command::new("systemctl")
        .args(args)
        .status()
        .map_err(|e| ServiceError::Io { path: command.clone(), source: e })?;
    if !status.success() {
        return Err(ServiceError::CommandFailed { command, code: status.code() });
    }
    Ok(())
}
