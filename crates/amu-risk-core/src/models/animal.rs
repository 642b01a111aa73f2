//! Animal models.

use serde::{Deserialize, Serialize};

/// An owner-entered livestock record, the sole input to risk assessment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimalRecord {
    /// Local UUID - always present, generated locally
    pub id: String,
    /// Owner/farm identifier (echoed into trace labels)
    pub owner: String,
    /// Species as entered (e.g., "Cow", "Goat")
    pub species: String,
    /// Breed as entered
    pub breed: String,
    /// Age in months
    pub age_months: f64,
    /// Weight in kg
    pub weight_kg: f64,
    /// Whether an antibiotic course was given
    pub antibiotic_used: bool,
    /// Antibiotic product or active ingredient name
    pub antibiotic_name: Option<String>,
    /// Date of the last dose (ISO date or RFC 3339 timestamp)
    pub last_dose_date: Option<String>,
    /// Withdrawal period for the antibiotic, in days
    pub withdrawal_days: u32,
    /// Health status as entered (excellent, good, fair, poor, ...)
    pub health_status: String,
    /// Whether the vaccination schedule is up to date
    pub vaccination_status: bool,
}

impl AnimalRecord {
    /// Create a new untreated record with required fields.
    pub fn new(species: impl Into<String>, age_months: f64, weight_kg: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            owner: String::new(),
            species: species.into(),
            breed: String::new(),
            age_months,
            weight_kg,
            antibiotic_used: false,
            antibiotic_name: None,
            last_dose_date: None,
            withdrawal_days: 0,
            health_status: "good".to_string(),
            vaccination_status: true,
        }
    }

    /// Record an antibiotic course.
    pub fn with_antibiotic(
        mut self,
        name: Option<&str>,
        last_dose_date: Option<&str>,
        withdrawal_days: u32,
    ) -> Self {
        self.antibiotic_used = true;
        self.antibiotic_name = name.map(str::to_string);
        self.last_dose_date = last_dose_date.map(str::to_string);
        self.withdrawal_days = withdrawal_days;
        self
    }

    /// Set the health status.
    pub fn with_health(mut self, health_status: impl Into<String>) -> Self {
        self.health_status = health_status.into();
        self
    }

    /// Set the vaccination status.
    pub fn with_vaccination(mut self, vaccinated: bool) -> Self {
        self.vaccination_status = vaccinated;
        self
    }

    /// Set the owner and breed used on trace labels.
    pub fn with_identity(mut self, owner: impl Into<String>, breed: impl Into<String>) -> Self {
        self.owner = owner.into();
        self.breed = breed.into();
        self
    }

    /// Recognized species for baseline lookups.
    pub fn species_kind(&self) -> Species {
        Species::from_name(&self.species)
    }

    /// Parsed health status.
    pub fn health(&self) -> HealthStatus {
        HealthStatus::parse(&self.health_status)
    }

    /// Current weight relative to the species' optimal weight.
    pub fn weight_ratio(&self) -> f64 {
        self.weight_kg / self.species_kind().baseline().optimal_kg
    }
}

/// Species with a known weight baseline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Species {
    Cow,
    Buffalo,
    Goat,
    Sheep,
    Pig,
    Chicken,
    Duck,
    /// Anything else; scored against the default baseline
    Other,
}

impl Species {
    /// Recognize a species name (case-insensitive, surrounding whitespace ignored).
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "cow" => Species::Cow,
            "buffalo" => Species::Buffalo,
            "goat" => Species::Goat,
            "sheep" => Species::Sheep,
            "pig" => Species::Pig,
            "chicken" => Species::Chicken,
            "duck" => Species::Duck,
            _ => Species::Other,
        }
    }
}

/// Health status bands used by scoring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HealthStatus {
    Excellent,
    Good,
    /// "fair" or "moderate"
    Fair,
    /// "poor" or "critical"
    Poor,
    Unrecognized,
}

impl HealthStatus {
    /// Parse a free-text health status (case-insensitive).
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "excellent" => HealthStatus::Excellent,
            "good" => HealthStatus::Good,
            "fair" | "moderate" => HealthStatus::Fair,
            "poor" | "critical" => HealthStatus::Poor,
            _ => HealthStatus::Unrecognized,
        }
    }

    pub fn is_poor(&self) -> bool {
        matches!(self, HealthStatus::Poor)
    }
}
