use std::process::exit;
use std::sync::Arc;
use clap::Parser;
use log::{error, info};
use tokio::runtime::Builder;
use secure_gateway::common::common::{module_root_folder, new_guid, setup_logging, zone_info};
use secure_gateway::config::structs::config_store::ConfigStore;
use secure_gateway::config::structs::module_config::ModuleConfig;
use secure_gateway::server::server::default_pre_handle;
use secure_gateway::server::structs::gateway::Gateway;
use secure_gateway::server::structs::packager::Packager;
use secure_gateway::server::structs::server_engine::ServerEngine;
use secure_gateway::server::structs::service_control::ServiceControl;
use secure_gateway::ssl::ssl::generate_missing_certificates;
use secure_gateway::structs::Cli;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let (exe, root) = match module_root_folder() {
        Ok(folders) => folders,
        Err(error) => {
            eprintln!("[BOOT] Unable to locate the executable: {error}");
            exit(101);
        }
    };

    let module = ModuleConfig {
        module_type: String::from("server"),
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        remark: String::from("Security Gateway"),
        path: exe.display().to_string(),
    };
    let cfg_path = args.cfg.clone().unwrap_or_else(|| root.join("cfg").join(format!("{}.json", module.name)));

    if args.help {
        print!("{}", Cli::usage(&cfg_path));
        exit(11);
    }

    if args.package {
        match Packager::new(&root, &module, &exe, &cfg_path).package() {
            Ok(target) => {
                println!("[PACKAGE] Written to {}", target.display());
                exit(0);
            }
            Err(error) => {
                eprintln!("[PACKAGE] {error}");
                exit(13);
            }
        }
    }

    let config = match ConfigStore::open(&cfg_path, &root, module) {
        Ok(config) => Arc::new(config),
        Err(error) => {
            eprintln!("[CONFIG] {error}");
            exit(101);
        }
    };
    {
        let mut cfg = config.write();
        cfg.svc.boot_time = Some(chrono::Local::now());
        cfg.node.instance_id = new_guid();
        if let Some(path) = &args.cfg {
            cfg.svc.args = format!("--cfg={}", path.display());
        }
    }

    let (log_config, service_name) = {
        let cfg = config.read();
        (cfg.log.clone(), cfg.svc.name.clone())
    };
    if let Err(error) = setup_logging(&log_config, &service_name) {
        eprintln!("[LOG] {error}");
        exit(101);
    }

    if args.create_selfsigned {
        let files = config.read().certificate_files();
        match generate_missing_certificates(&files, vec![String::from("localhost")]) {
            Ok(generated) => info!("[CERTGEN] {} certificate file(s) generated", generated.len()),
            Err(error) => {
                error!("[CERTGEN] {error}");
                exit(12);
            }
        }
    }

    let handler = Arc::new(Gateway::new(config.clone()));
    let engine = match ServerEngine::new(config.clone(), handler, default_pre_handle()) {
        Ok(engine) => engine,
        Err(error) => {
            error!("[BOOT] {error}");
            exit(12);
        }
    };

    if let Some(action) = args.action {
        let control = ServiceControl::new(&config.read(), &exe);
        match control.execute(action) {
            Ok(_) => {
                info!("[SERVICE] {} {} done", action, control.name());
                exit(0);
            }
            Err(error) => {
                error!("[SERVICE] {error}");
                exit(13);
            }
        }
    }

    {
        let cfg = config.read();
        let (zone_name, zone_offset) = zone_info();
        info!("{} - Version: {}", cfg.module.name, cfg.module.version);
        info!("[BOOT] Executable: {}", exe.display());
        info!("[BOOT] Service mode: {}", !engine.interactive());
        info!("[BOOT] Zone: {} ({:+})", zone_name, zone_offset);
        info!("[BOOT] Log folder: '{}', level: {}", cfg.log.folder, cfg.log.level);
        info!("[BOOT] Configuration: {}", config.path().display());
        match cfg.to_json() {
            Ok(json) => info!("[BOOT] {json}"),
            Err(error) => error!("[BOOT] {error}"),
        }
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            if let Err(error) = engine.run().await {
                error!("[BOOT] {error}");
                exit(1);
            }
            Ok(())
        })
}
