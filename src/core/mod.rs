pub mod engine;
pub mod generator;
pub mod writer;

pub use crate::domain::model::{Place, Row, Temperature};
pub use crate::utils::error::Result;
