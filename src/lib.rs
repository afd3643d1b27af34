pub mod art;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod prompt;
#[cfg(feature = "server")]
pub mod server;

pub use art::{ArtClient, ArtTransport, Generator, HttpTransport, ImageClient};
pub use config::{ArtConfig, Config};
pub use error::{ArtError, ErrorKind, Result};
pub use models::*;
pub use prompt::{build_prompt, refine_prompt, StyleCatalog};
