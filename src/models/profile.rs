use serde::{Deserialize, Serialize};

/// A user's study profile as stored by the platform.
///
/// Every field is optional: profiles are filled in gradually and the
/// engine must score whatever subset of data both sides actually have.
/// The engine treats this struct as read-only input and never mutates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileData {
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(rename = "availableDays", default)]
    pub available_days: Vec<String>,
    #[serde(rename = "availableHours", default)]
    pub available_hours: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,

    /// Free text; recognized values are BEGINNER, INTERMEDIATE, ADVANCED, EXPERT.
    #[serde(rename = "skillLevel", default)]
    pub skill_level: Option<String>,
    /// Free text; recognized values are VISUAL, AUDITORY, KINESTHETIC,
    /// READING_WRITING, COLLABORATIVE, INDEPENDENT, SOLO, MIXED.
    #[serde(rename = "studyStyle", default)]
    pub study_style: Option<String>,
    #[serde(default)]
    pub role: Option<String>,

    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(rename = "aboutYourself", default)]
    pub about_yourself: Option<String>,

    #[serde(default)]
    pub age: Option<u8>,

    #[serde(rename = "locationLat", default)]
    pub location_lat: Option<f64>,
    #[serde(rename = "locationLng", default)]
    pub location_lng: Option<f64>,
    #[serde(rename = "locationCity", default)]
    pub location_city: Option<String>,
    #[serde(rename = "locationCountry", default)]
    pub location_country: Option<String>,

    #[serde(rename = "lastStudyDate", default)]
    pub last_study_date: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "isLookingForPartner", default)]
    pub is_looking_for_partner: Option<bool>,
}

/// The profile fields that count toward the minimum-data gate, in the
/// order they are reported back as missing.
pub const QUALIFYING_FIELDS: [&str; 9] = [
    "subjects",
    "interests",
    "goals",
    "availableDays",
    "availableHours",
    "skillLevel",
    "studyStyle",
    "school",
    "timezone",
];

/// A string field is present iff it is non-blank after trimming.
#[inline]
pub fn has_text(value: &Option<String>) -> bool {
    value.as_deref().map_or(false, |s| !s.trim().is_empty())
}

/// An array field is present iff it contains at least one non-blank element.
#[inline]
pub fn has_items(values: &[String]) -> bool {
    values.iter().any(|s| !s.trim().is_empty())
}

impl ProfileData {
    /// Whether the profile has at least one of the two core tag fields.
    pub fn has_subjects_or_interests(&self) -> bool {
        has_items(&self.subjects) || has_items(&self.interests)
    }

    fn qualifying_presence(&self) -> [bool; 9] {
        [
            has_items(&self.subjects),
            has_items(&self.interests),
            has_items(&self.goals),
            has_items(&self.available_days),
            has_items(&self.available_hours),
            has_text(&self.skill_level),
            has_text(&self.study_style),
            has_text(&self.school),
            has_text(&self.timezone),
        ]
    }

    /// Number of qualifying fields (see [`QUALIFYING_FIELDS`]) the profile
    /// has filled in.
    pub fn filled_field_count(&self) -> usize {
        self.qualifying_presence().iter().filter(|p| **p).count()
    }

    /// Qualifying fields the profile has NOT filled in, in report order.
    pub fn missing_fields(&self) -> Vec<String> {
        self.qualifying_presence()
            .iter()
            .zip(QUALIFYING_FIELDS.iter())
            .filter(|(present, _)| !**present)
            .map(|(_, name)| (*name).to_string())
            .collect()
    }

    /// Whether the profile carries any location signal at all (city,
    /// coordinates, or country).
    pub fn has_location(&self) -> bool {
        has_text(&self.location_city)
            || (self.location_lat.is_some() && self.location_lng.is_some())
            || has_text(&self.location_country)
    }
}
