// Domain layer: the row value types. No I/O and no randomness here.

pub mod model;

pub use model::{Place, Row, Temperature};
