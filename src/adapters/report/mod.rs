//! Report generator adapters.

mod random_generator;

pub use random_generator::RandomReportGenerator;
