mod catalog;
mod tables;
mod types;

pub use catalog::BandCatalog;
pub use tables::band_plan;
pub use types::{Band, BandDef, BandRequirement, DuplexMode, FrequencyRange, Standard};
