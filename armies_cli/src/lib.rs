mod config;
mod showcase;
pub use config::*;
pub use showcase::*;
