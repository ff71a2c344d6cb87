//! アダプター実装

pub mod generator;
#[cfg(test)]
pub mod stub_generator;

pub use generator::DriverTextGenerator;
#[cfg(test)]
pub use stub_generator::StubGenerator;
