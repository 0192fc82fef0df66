mod loader;
mod store;
mod types;

pub use loader::{ConfigError, MIN_BREAKPOINT};
pub use store::ConfigStore;
pub use types::{Config, DisplayConfig};
