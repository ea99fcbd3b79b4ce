pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

/// Build metadata shown in the page footer.
pub struct VersionInfo {
    pub name: &'static str,
    pub version: &'static str,
}

pub static VERSION_INFO: VersionInfo = VersionInfo {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
};
