use serde::{Deserialize, Serialize};

/// Doctor record from the reference roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub name: String,
    pub specialization: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

impl Doctor {
    /// Both coordinates, if the record has them
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
            _ => None,
        }
    }
}

/// A point on the globe in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Symptom phrase to specialization lookup table
///
/// Keys are stored lower-cased and scanned linearly: a key matches a token
/// when the token contains it as a substring.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymptomMap {
    entries: Vec<(String, Vec<String>)>,
}

impl SymptomMap {
    pub fn new<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<String>)>,
        K: Into<String>,
    {
        let mut entries: Vec<(String, Vec<String>)> = entries
            .into_iter()
            .map(|(key, specs)| (key.into().trim().to_lowercase(), specs))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        Self { entries }
    }

    /// Specializations of every key contained in `token`
    pub fn matches<'a>(&'a self, token: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(key, _)| token.contains(key.as_str()))
            .flat_map(|(_, specs)| specs.iter().map(String::as_str))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-request copy of a doctor with the computed distance attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedDoctor {
    pub name: String,
    pub specialization: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl MatchedDoctor {
    pub fn from_doctor(doctor: &Doctor, distance_km: Option<f64>) -> Self {
        Self {
            name: doctor.name.clone(),
            specialization: doctor.specialization.clone(),
            city: doctor.city.clone(),
            hospital: doctor.hospital.clone(),
            phone: doctor.phone.clone(),
            lat: doctor.lat,
            lng: doctor.lng,
            distance_km,
        }
    }
}
