pub mod barcode;
pub mod health;
pub mod vin;

pub use barcode::*;
pub use health::*;
pub use vin::*;
