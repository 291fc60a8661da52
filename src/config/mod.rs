mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, RealFileSystem};
pub use model::{CONFIG_VERSION, CheckConfig, Config, PreloadConfig, SessionConfig};
