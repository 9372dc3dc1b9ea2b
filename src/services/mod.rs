// Service exports
pub mod reference_data;

pub use reference_data::{
    load_doctors, load_symptom_map, parse_doctors, parse_symptom_map, DataLoadError, ReferenceData,
};
