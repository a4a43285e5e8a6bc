// Error types for the numeric core

use std::io::{Error, ErrorKind};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComplexError {
    #[error("Division by a zero complex value")]
    DivisionByZero,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RootError {
    #[error("Polynomial of degree {0} has no roots to find")]
    InvalidDegree(usize),
}

impl From<RootError> for Error {
    fn from(err : RootError) -> Error {
        Error::new(ErrorKind::InvalidData, err)
    }
}
