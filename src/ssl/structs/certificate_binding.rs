/// Resolved certificate paths of one role.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct CertificateBinding {
    pub server: String,
    pub ca: String,
}
