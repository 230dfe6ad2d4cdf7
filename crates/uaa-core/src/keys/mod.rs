mod error;
mod resolver;
mod types;

pub use error::*;
pub use resolver::*;
pub use types::*;
