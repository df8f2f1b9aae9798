pub mod errors;

pub use errors::{ConfigError, ThemeError, ThemegenError};

pub type Result<T> = std::result::Result<T, ThemegenError>;
