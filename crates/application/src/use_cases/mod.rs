pub mod find_incomplete_macs;

pub use find_incomplete_macs::FindIncompleteMacsUseCase;
