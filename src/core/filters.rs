use crate::core::symptoms::Specializations;
use crate::models::Doctor;

/// Normalize an optional city filter; blank input means no filter
pub fn normalize_city(city: Option<&str>) -> Option<String> {
    city.map(|c| c.trim().to_lowercase()).filter(|c| !c.is_empty())
}

/// Check if a doctor practices one of the resolved specializations
#[inline]
pub fn matches_specialization(doctor: &Doctor, specializations: &Specializations) -> bool {
    specializations.contains(&doctor.specialization)
}

/// Check if a doctor is in the requested city
///
/// `city` must already be normalized. Doctors without a city never match a
/// city filter.
#[inline]
pub fn matches_city(doctor: &Doctor, city: Option<&str>) -> bool {
    match city {
        None => true,
        Some(wanted) => doctor
            .city
            .as_deref()
            .is_some_and(|c| c.trim().to_lowercase() == wanted),
    }
}
