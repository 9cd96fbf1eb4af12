mod destination;
mod price;
pub mod sort;

pub use destination::Destination;
pub use price::{ParsePriceError, Price};
