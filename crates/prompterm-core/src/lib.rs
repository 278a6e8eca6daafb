pub mod config;
pub mod debounce;
pub mod error;
pub mod script;
pub mod settings;
pub mod store;

pub use config::AppConfig;
pub use debounce::Debounce;
pub use error::{Error, Result};
pub use script::Script;
pub use settings::{Contrast, Settings};
pub use store::Store;
