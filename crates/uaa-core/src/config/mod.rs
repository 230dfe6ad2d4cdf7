mod error;
mod model;
mod naming;
mod store;

pub use error::*;
pub use model::*;
pub use naming::*;
pub use store::*;
