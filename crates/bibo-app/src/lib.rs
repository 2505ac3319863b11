//! Bibo App - Application runtime enumerations
//!
//! Closed sets an application selects at startup:
//! - Cache and database drivers
//! - Deployment environment
//! - Log level (mapped onto `tracing` levels)
//! - Application and API version tags
//! - Response buffer sizes
//! - `AppSettings`, which reads all of the above from the environment

pub mod buffer;
pub mod config;
pub mod driver;
pub mod environment;
pub mod log_level;
pub mod version;

pub use buffer::*;
pub use config::*;
pub use driver::*;
pub use environment::*;
pub use log_level::*;
pub use version::*;
