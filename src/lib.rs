pub mod coverage;
pub mod error;
pub mod index;
pub mod io;
pub mod stats;
