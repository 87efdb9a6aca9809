mod env_provider;
mod logging;
mod settings;

pub use env_provider::{EnvironmentProvider, SystemEnvironment};
pub use logging::init_logging;
pub use settings::{AppSettings, DetectorSettings};

#[cfg(test)]
pub use env_provider::MockEnvironment;
