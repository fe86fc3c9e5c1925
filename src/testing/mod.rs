pub mod ports;

pub use ports::{MockProjectFs, TestFiles};
