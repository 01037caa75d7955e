pub mod adapters;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::stdout::StdoutSink;
pub use crate::core::greeter::{greet, greet_to};
pub use crate::domain::model::GREETING;
pub use crate::utils::error::{GreeterError, Result};
