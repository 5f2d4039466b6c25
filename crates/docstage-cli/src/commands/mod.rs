pub mod build;
pub mod common;
pub mod config;
pub mod index;
pub mod mirror;

pub use build::Build;
pub use common::CommandOptions;
pub use config::Config;
pub use index::Index;
pub use mirror::Mirror;
