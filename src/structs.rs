use std::path::{Path, PathBuf};
use clap::Parser;
use crate::server::enums::service_action::ServiceAction;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, disable_help_flag = true)]
pub struct Cli {
    /// Print usage, including the configuration location, and exit.
    #[arg(short, long)]
    pub help: bool,
    /// Bundle the executable and its configuration under `pkg/` and exit.
    #[arg(long)]
    pub package: bool,
    /// Configuration file to use instead of `<root>/cfg/<name>.json`.
    #[arg(long, value_name = "PATH")]
    pub cfg: Option<PathBuf>,
    /// Generate self-signed certificates for enabled roles whose files are missing.
    #[arg(long)]
    pub create_selfsigned: bool,
    /// Service lifecycle verb.
    #[arg(value_enum)]
    pub action: Option<ServiceAction>,
}

impl Cli {
    pub fn usage(cfg_path: &Path) -> String {
        let folder = cfg_path.parent().map(|p| p.display().to_string()).unwrap_or_default();
        let name = cfg_path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        format!(
            "{name_pkg} {version}\n\
             \n\
             Usage: {name_pkg} [OPTIONS] [install|start|stop|remove|restart]\n\
             \n\
             Options:\n\
             \x20 -h, --help             print this help and exit\n\
             \x20     --package          bundle the executable and configuration, then exit\n\
             \x20     --cfg=<PATH>       configuration file (default: {folder}/{name})\n\
             \x20     --create-selfsigned generate missing role certificates\n\
             \n\
             Configuration folder: {folder}\n\
             Configuration file:   {name}\n",
            name_pkg = env!("CARGO_PKG_NAME"),
            version = env!("CARGO_PKG_VERSION"),
        )
    }
}
