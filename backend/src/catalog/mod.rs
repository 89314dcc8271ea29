pub mod crops;
pub mod models;
pub mod plant_diseases;

pub use models::{DiseaseCatalog, DiseaseRecord};
