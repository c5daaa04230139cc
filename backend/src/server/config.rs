//! Server settings loaded via OrthoConfig and the resolved server
//! configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use actix_web::cookie::Key;
use ortho_config::OrthoConfig;
use serde::Deserialize;

use bookshelf::domain::CatalogueSeed;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SESSION_KEY_FILE: &str = "/var/run/secrets/session_key";

/// Startup toggles read from `BOOKSHELF_*` environment variables or the
/// matching command-line flags.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BOOKSHELF")]
pub struct ServerSettings {
    /// Socket address the HTTP listener binds to.
    pub bind_addr: Option<String>,
    /// File holding the session signing/encryption key material.
    pub session_key_file: Option<PathBuf>,
    /// Allow a throwaway session key when the key file cannot be read.
    #[ortho_config(default = false)]
    pub session_allow_ephemeral: bool,
    /// Mark session cookies `Secure`.
    #[ortho_config(default = true)]
    pub cookie_secure: bool,
    /// JSON catalogue replacing the built-in seed.
    pub seed_path: Option<PathBuf>,
}

impl ServerSettings {
    /// Parse the configured bind address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid bind address {raw:?}: {err}"),
            )
        })
    }

    /// Return the configured key path, falling back to the mounted secret.
    pub fn session_key_file(&self) -> PathBuf {
        self.session_key_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_KEY_FILE))
    }

    /// Load the catalogue seed from `seed_path`, or the built-in one.
    pub fn load_seed(&self) -> std::io::Result<CatalogueSeed> {
        match &self.seed_path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|err| {
                    std::io::Error::new(
                        err.kind(),
                        format!("failed to read seed at {}: {err}", path.display()),
                    )
                })?;
                CatalogueSeed::from_json(&raw).map_err(|err| {
                    std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        format!("invalid seed at {}: {err}", path.display()),
                    )
                })
            }
            None => CatalogueSeed::builtin().map_err(|err| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("invalid built-in seed: {err}"),
                )
            }),
        }
    }
}

/// Resolved configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) seed: CatalogueSeed,
}

impl ServerConfig {
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, bind_addr: SocketAddr, seed: CatalogueSeed) -> Self {
        Self {
            key,
            cookie_secure,
            bind_addr,
            seed,
        }
    }
}
