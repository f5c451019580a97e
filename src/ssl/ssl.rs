use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use log::info;
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use rustls::server::WebPkiClientVerifier;
use rustls::RootCertStore;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::server_role::ServerRole;
use crate::ssl::impls::server_role::CA_CERTIFICATE_FILE;
use crate::ssl::structs::certificate_binding::CertificateBinding;

pub fn certificate_folder(root: &Path) -> PathBuf
{
    root.join("crt")
}

/// Resolves the certificate paths of one role.
///
/// Disabled roles get their paths back untouched, blank included. Enabled
/// roles keep explicit paths and have blank ones derived from `root`. The
/// CA file name is the same for every role.
pub fn bind_certificates(role: ServerRole, enabled: bool, server: &str, ca: &str, root: &Path) -> CertificateBinding
{
    let mut binding = CertificateBinding {
        server: server.to_string(),
        ca: ca.to_string(),
    };
    if !enabled {
        return binding;
    }

    if binding.server.is_empty() {
        binding.server = certificate_folder(root)
            .join(role.server_certificate_file())
            .to_string_lossy()
            .into_owned();
    }
    if role.has_ca() && binding.ca.is_empty() {
        binding.ca = certificate_folder(root)
            .join(CA_CERTIFICATE_FILE)
            .to_string_lossy()
            .into_owned();
    }
    binding
}

pub fn ensure_crypto_provider()
{
    // Fails only when a provider is already installed.
    let _ = rustls::crypto::ring::default_provider().install_default();
}

fn open_pem(path: &str, not_found: fn(String) -> CertificateError) -> Result<BufReader<File>, CertificateError>
{
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(_) => Err(not_found(path.to_string())),
    }
}

fn read_certificates(path: &str, not_found: fn(String) -> CertificateError) -> Result<Vec<CertificateDer<'static>>, CertificateError>
{
    let reader = &mut open_pem(path, not_found)?;
    let certs = rustls_pemfile::certs(reader)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| CertificateError::CertParseError(format!("{path}: {e}")))?;
    if certs.is_empty() {
        return Err(CertificateError::CertParseError(format!("{path}: no certificate found")));
    }
    Ok(certs)
}

pub fn load_certificates(path: &str) -> Result<Vec<CertificateDer<'static>>, CertificateError>
{
    read_certificates(path, CertificateError::CertFileNotFound)
}

pub fn load_private_key(path: &str) -> Result<PrivateKeyDer<'static>, CertificateError>
{
    let reader = &mut open_pem(path, CertificateError::CertFileNotFound)?;
    match rustls_pemfile::private_key(reader) {
        Ok(Some(key)) => Ok(key),
        Ok(None) => Err(CertificateError::NoKeyFound(path.to_string())),
        Err(e) => Err(CertificateError::CertParseError(format!("{path}: {e}"))),
    }
}

pub fn load_root_store(path: &str) -> Result<RootCertStore, CertificateError>
{
    let mut roots = RootCertStore::empty();
    for cert in read_certificates(path, CertificateError::CaFileNotFound)? {
        roots.add(cert).map_err(|e| CertificateError::CertParseError(format!("{path}: {e}")))?;
    }
    Ok(roots)
}

/// Builds the rustls configuration of a TLS listener.
///
/// `server` is a PEM bundle holding the certificate chain followed by the
/// private key. With a `ca` file, client certificates signed by it are
/// requested and verified, but anonymous clients are still accepted.
pub fn load_server_config(server: &str, ca: Option<&str>) -> Result<rustls::ServerConfig, CertificateError>
{
    ensure_crypto_provider();

    let certs = load_certificates(server)?;
    let key = load_private_key(server)?;
    let builder = rustls::ServerConfig::builder();

    let config = match ca {
        None => builder.with_no_client_auth().with_single_cert(certs, key),
        Some(ca) => {
            let roots = load_root_store(ca)?;
            let verifier = WebPkiClientVerifier::builder(Arc::new(roots))
                .allow_unauthenticated()
                .build()
                .map_err(|e| CertificateError::ConfigError(e.to_string()))?;
            builder.with_client_cert_verifier(verifier).with_single_cert(certs, key)
        }
    };

    config.map_err(|e| CertificateError::ConfigError(e.to_string()))
}

/// Writes a self-signed certificate and its key as one PEM bundle.
pub fn generate_self_signed(path: &str, subject_alt_names: Vec<String>) -> Result<(), CertificateError>
{
    let certified = rcgen::generate_simple_self_signed(subject_alt_names)
        .map_err(|e| CertificateError::GenerateError(e.to_string()))?;

    let io_error = |e: std::io::Error| CertificateError::GenerateError(format!("{path}: {e}"));
    if let Some(parent) = Path::new(path).parent() {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }
    let mut file = File::create(path).map_err(io_error)?;
    file.write_all(certified.cert.pem().as_bytes()).map_err(io_error)?;
    file.write_all(certified.key_pair.serialize_pem().as_bytes()).map_err(io_error)?;

    info!("[CERTGEN] The certificate file {} has been generated, use it only for development reasons", path);
    Ok(())
}

/// Generates a self-signed bundle for every path in `paths` that does not
/// exist yet. Returns the paths that were written.
pub fn generate_missing_certificates(paths: &[String], subject_alt_names: Vec<String>) -> Result<Vec<String>, CertificateError>
{
    let mut generated = Vec::new();
    for path in paths {
        if path.is_empty() || Path::new(path).exists() || generated.contains(path) {
            continue;
        }
        generate_self_signed(path, subject_alt_names.clone())?;
        generated.push(path.clone());
    }
    Ok(generated)
}
