use std::result;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("cannot cycle over an empty sequence")]
    EmptySource,
}

pub type Result<T> = result::Result<T, Error>;
