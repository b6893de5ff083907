//! The medication table: dose components, renal policy, warnings and
//! reference sources for each supported drug.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How a dose component scales with the patient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    /// Multiplied by body weight in kg.
    PerKg(f64),
    /// The same for every patient.
    Fixed(f64),
}

impl Amount {
    pub fn for_weight(self, weight: f64) -> f64 {
        match self {
            Self::PerKg(per_kg) => weight * per_kg,
            Self::Fixed(amount) => amount,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoseComponent {
    pub name: &'static str,
    pub amount: Amount,
}

const fn per_kg(name: &'static str, amount: f64) -> DoseComponent {
    DoseComponent {
        name,
        amount: Amount::PerKg(amount),
    }
}

const fn fixed(name: &'static str, amount: f64) -> DoseComponent {
    DoseComponent {
        name,
        amount: Amount::Fixed(amount),
    }
}

/// Renal dose adjustment rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenalPolicy {
    /// Cleared independently of the kidney.
    None,
    /// Full dose above 80, 75% from 40, 50% from 10, 25% below.
    Banded,
    /// Full dose while GFR is above `above`, otherwise `factor` of it.
    Threshold { above: f64, factor: f64 },
}

impl RenalPolicy {
    /// Multiplier for a patient with the given GFR (mL/min/1.73m²).
    pub fn factor(self, gfr: f64) -> f64 {
        match self {
            Self::None => 1.0,
            Self::Banded => {
                if gfr > 80.0 {
                    1.0
                } else if gfr >= 40.0 {
                    0.75
                } else if gfr >= 10.0 {
                    0.5
                } else {
                    0.25
                }
            }
            Self::Threshold { above, factor } => {
                if gfr > above {
                    1.0
                } else {
                    factor
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReferenceSource {
    UpToDate,
    Micromedex,
    SanfordGuide,
}

impl fmt::Display for ReferenceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::UpToDate => "UpToDate",
            Self::Micromedex => "Micromedex",
            Self::SanfordGuide => "Sanford Guide",
        })
    }
}

/// Month the dosing references were last reviewed.
pub const REFERENCES_UPDATED: &str = "2025-01";

#[derive(Debug)]
pub struct Medication {
    pub id: &'static str,
    pub name: &'static str,
    /// Dosing as printed in the references, e.g. "5-7 mg/kg".
    pub standard_dose: &'static str,
    pub components: &'static [DoseComponent],
    /// Unit of the primary component.
    pub unit: &'static str,
    pub renal: RenalPolicy,
    pub warnings: &'static [&'static str],
    pub references: &'static [ReferenceSource],
}

impl Medication {
    /// The component a single calculated dose is reported for: `standard`,
    /// else `infusion`, else `bolus`, else whichever is listed first.
    pub fn primary(&self) -> Option<&DoseComponent> {
        ["standard", "infusion", "bolus"]
            .iter()
            .find_map(|name| self.components.iter().find(|c| c.name == *name))
            .or_else(|| self.components.first())
    }
}

use ReferenceSource::{Micromedex, SanfordGuide, UpToDate};

const BANDED: RenalPolicy = RenalPolicy::Banded;

static MEDICATIONS: [Medication; 9] = [
    Medication {
        id: "gentamicin",
        name: "Gentamicin",
        standard_dose: "5-7 mg/kg",
        components: &[per_kg("low", 5.0), per_kg("standard", 6.0), per_kg("high", 7.0)],
        unit: "mg",
        renal: BANDED,
        warnings: &[
            "Monitor peak (30-40 mcg/mL) and trough (<5 mcg/mL)",
            "Nephrotoxic and ototoxic",
            "Requires TDM",
        ],
        references: &[UpToDate, Micromedex, SanfordGuide],
    },
    Medication {
        id: "vancomycin",
        name: "Vancomycin",
        standard_dose: "15-20 mg/kg",
        components: &[per_kg("low", 15.0), per_kg("standard", 17.5), per_kg("high", 20.0)],
        unit: "mg",
        renal: BANDED,
        warnings: &[
            "Monitor trough (15-20 mcg/mL)",
            "Red man syndrome",
            "Nephrotoxic with aminoglycosides",
        ],
        references: &[UpToDate, Micromedex, SanfordGuide],
    },
    Medication {
        id: "amikacin",
        name: "Amikacin",
        standard_dose: "15-20 mg/kg",
        components: &[per_kg("low", 15.0), per_kg("standard", 17.5), per_kg("high", 20.0)],
        unit: "mg",
        renal: BANDED,
        warnings: &[
            "Monitor peak (25-35 mcg/mL) and trough (<5 mcg/mL)",
            "Nephrotoxic and ototoxic",
        ],
        references: &[UpToDate, Micromedex, SanfordGuide],
    },
    Medication {
        id: "heparin",
        name: "Unfractionated Heparin (UFH)",
        standard_dose: "80 units/kg bolus, 18 units/kg/hr infusion",
        components: &[per_kg("bolus", 80.0), per_kg("infusion", 18.0)],
        unit: "units/hr",
        renal: RenalPolicy::None,
        warnings: &["Monitor aPTT q6h", "HIT risk", "Protamine reverses"],
        references: &[UpToDate, Micromedex, SanfordGuide],
    },
    Medication {
        id: "propofol",
        name: "Propofol",
        standard_dose: "1-2 mg/kg bolus, 25-100 mcg/kg/min infusion",
        components: &[
            per_kg("bolus_low", 1.0),
            per_kg("bolus_high", 2.0),
            per_kg("infusion_low", 0.025),
            per_kg("infusion_high", 0.1),
        ],
        unit: "mg",
        renal: RenalPolicy::None,
        warnings: &[
            "Hypotension common",
            "Propofol infusion syndrome with prolonged use",
            "Pain on injection",
        ],
        references: &[UpToDate, Micromedex],
    },
    Medication {
        id: "fentanyl",
        name: "Fentanyl",
        standard_dose: "50-100 mcg bolus, 0.5-2 mcg/kg/min infusion",
        components: &[
            fixed("bolus_low", 50.0),
            fixed("bolus_high", 100.0),
            per_kg("infusion_low", 0.5),
            per_kg("infusion_high", 2.0),
        ],
        unit: "mcg",
        renal: RenalPolicy::Threshold {
            above: 30.0,
            factor: 0.75,
        },
        warnings: &[
            "Potent opioid",
            "Respiratory depression risk",
            "Chest wall rigidity at high doses",
        ],
        references: &[UpToDate, Micromedex, SanfordGuide],
    },
    Medication {
        id: "midazolam",
        name: "Midazolam",
        standard_dose: "0.5-2 mg bolus, 0.5-2 mcg/kg/min infusion",
        components: &[
            fixed("bolus_low", 0.5),
            fixed("bolus_high", 2.0),
            per_kg("infusion_low", 0.0005),
            per_kg("infusion_high", 0.002),
        ],
        unit: "mg",
        renal: RenalPolicy::None,
        warnings: &[
            "Shorter acting than diazepam",
            "Flumazenil reverses if needed",
            "Respiratory depression risk",
        ],
        references: &[UpToDate, Micromedex],
    },
    Medication {
        id: "insulin",
        name: "Insulin (Regular/Rapid)",
        standard_dose: "0.1 units/kg/hr IV infusion",
        components: &[per_kg("infusion", 0.1)],
        unit: "units/hr",
        renal: RenalPolicy::Threshold {
            above: 15.0,
            factor: 0.75,
        },
        warnings: &["Monitor glucose q1h", "Risk of hypoglycemia", "Check potassium"],
        references: &[UpToDate, Micromedex],
    },
    Medication {
        id: "dopamine",
        name: "Dopamine",
        standard_dose: "2-20 mcg/kg/min",
        components: &[
            per_kg("low", 2.0),
            per_kg("medium", 5.0),
            per_kg("high", 10.0),
            per_kg("max", 20.0),
        ],
        unit: "mcg/min",
        renal: RenalPolicy::None,
        warnings: &[
            "Dose-dependent effects",
            "Low=renal, medium=cardiac, high=vasopressor",
            "Titrate to effect",
        ],
        references: &[UpToDate, SanfordGuide],
    },
];

/// Every supported medication, in table order.
pub fn all() -> &'static [Medication] {
    &MEDICATIONS
}

/// Look up a medication by id (case-insensitive).
pub fn find(id: &str) -> Option<&'static Medication> {
    let id = id.trim();
    MEDICATIONS.iter().find(|m| m.id.eq_ignore_ascii_case(id))
}
