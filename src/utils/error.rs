use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreeterError {
    #[error("Output sink unavailable")]
    OutputUnavailable(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GreeterError>;
