//! Static reference tables for scoring.

use crate::models::Species;

/// Expected healthy weight range for a species.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesBaseline {
    pub min_kg: f64,
    pub optimal_kg: f64,
}

/// Baseline used for unrecognized species.
pub const DEFAULT_BASELINE: SpeciesBaseline = SpeciesBaseline {
    min_kg: 30.0,
    optimal_kg: 100.0,
};

/// Weight baselines per recognized species.
pub const SPECIES_BASELINES: &[(Species, SpeciesBaseline)] = &[
    (Species::Cow, SpeciesBaseline { min_kg: 80.0, optimal_kg: 300.0 }),
    (Species::Buffalo, SpeciesBaseline { min_kg: 90.0, optimal_kg: 350.0 }),
    (Species::Goat, SpeciesBaseline { min_kg: 15.0, optimal_kg: 35.0 }),
    (Species::Sheep, SpeciesBaseline { min_kg: 20.0, optimal_kg: 45.0 }),
    (Species::Pig, SpeciesBaseline { min_kg: 30.0, optimal_kg: 100.0 }),
    (Species::Chicken, SpeciesBaseline { min_kg: 1.0, optimal_kg: 2.5 }),
    (Species::Duck, SpeciesBaseline { min_kg: 1.0, optimal_kg: 2.0 }),
];

impl Species {
    /// Weight baseline for this species.
    pub fn baseline(&self) -> SpeciesBaseline {
        SPECIES_BASELINES
            .iter()
            .find(|(species, _)| species == self)
            .map(|(_, baseline)| *baseline)
            .unwrap_or(DEFAULT_BASELINE)
    }
}

/// Antibiotic name fragments that earn the highest drug-class points.
pub const CRITICAL_ANTIBIOTICS: &[&str] = &[
    "penicillin",
    "amoxicillin",
    "cephalosporin",
    "fluoroquinolone",
    "ciprofloxacin",
    "enrofloxacin",
    "tetracycline",
    "oxytetracycline",
    "streptomycin",
    "gentamicin",
    "colistin",
    "polymyxin",
];

/// Fragments classed as critically important for human medicine.
pub const CRITICALLY_IMPORTANT_FRAGMENTS: &[&str] = &[
    "fluoroquinolone",
    "ciprofloxacin",
    "enrofloxacin",
    "cephalosporin",
    "colistin",
    "polymyxin",
];

/// Fragments classed as highly important for human medicine.
pub const HIGHLY_IMPORTANT_FRAGMENTS: &[&str] = &[
    "penicillin",
    "amoxicillin",
    "ampicillin",
    "tetracycline",
    "oxytetracycline",
    "macrolide",
];

/// Common veterinary antibiotics, grouped by class.
pub const COMMON_ANTIBIOTICS: &[&str] = &[
    // Penicillins
    "Penicillin",
    "Amoxicillin",
    "Ampicillin",
    "Cloxacillin",
    // Cephalosporins
    "Ceftiofur",
    "Cephalexin",
    "Cefquinome",
    // Tetracyclines
    "Oxytetracycline",
    "Tetracycline",
    "Doxycycline",
    // Fluoroquinolones
    "Enrofloxacin",
    "Ciprofloxacin",
    "Marbofloxacin",
    // Aminoglycosides
    "Streptomycin",
    "Gentamicin",
    "Neomycin",
    // Macrolides
    "Tylosin",
    "Tilmicosin",
    "Erythromycin",
    // Sulfonamides
    "Sulfadimidine",
    "Sulfamethoxazole",
    "Trimethoprim",
    // Others
    "Colistin",
    "Lincomycin",
    "Florfenicol",
];
