//! Calculation module: three-layer architecture (domain, repository, service).

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use domain::{Calculation, CalculationRequest, NewCalculation, Operation};
pub use service::CalculationService;
