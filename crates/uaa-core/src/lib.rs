#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]

pub mod client;
pub mod config;
pub mod health;
pub mod keys;

pub use crate::client::*;
pub use crate::config::*;
pub use crate::health::*;
pub use crate::keys::*;
