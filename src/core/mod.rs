pub mod amount;
pub mod constants;
pub mod error;
pub mod fraction;
pub mod pair;
pub mod paths;
pub mod percent;
pub mod price;
pub mod route;
pub mod token;
pub mod trade;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use error::RouterError;
pub type Result<T> = std::result::Result<T, RouterError>;
