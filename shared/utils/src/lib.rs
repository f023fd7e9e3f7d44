pub mod config;
pub mod logging;
pub mod error;
pub mod validation;
pub mod vin;
pub mod barcode;


pub use config::*;
pub use logging::*;
pub use error::*;
pub use validation::*;
