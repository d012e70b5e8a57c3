pub mod config;
pub mod error;

pub use config::SousChefConfig;
pub use error::{Result, SousChefError};
