// Certificates module - data model, classification and inventory

pub mod classifier;
pub mod inventory;
pub mod types;

pub use classifier::{
    ClassificationResult, IssuerTally, StatusCounts, aggregate, classify, recompute_all,
};
pub use inventory::CertificateInventory;
pub use types::{AlertThresholds, Certificate, GeoLocation, Status};
