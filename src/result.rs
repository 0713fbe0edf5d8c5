use crate::Hash160Error;

pub type Hash160Result<T> = std::result::Result<T, Hash160Error>;
