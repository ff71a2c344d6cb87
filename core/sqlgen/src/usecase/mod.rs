//! ユースケース

pub mod generate;

pub use generate::GenerateUseCase;
