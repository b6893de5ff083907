//! Pretest probability and triage scores for acute presentations: Wells,
//! Centor, PSI/PORT, Glasgow-Blatchford, BISAP.

use clinicalc_core::models::risk::{Priority, RiskTier};
use clinicalc_formulas::formulas::gastroenterology::{
    bisap, glasgow_blatchford, BisapInput, GlasgowBlatchfordInput,
};
use clinicalc_formulas::formulas::respiratory::{
    centor, psi_class, psi_port, CentorInput, PsiClass, PsiInput,
};
use clinicalc_formulas::formulas::vascular::{wells_dvt, wells_pe, WellsDvtInput, WellsPeInput};

#[test]
fn wells_dvt_all_criteria_is_high_probability() {
    let result = wells_dvt(&WellsDvtInput {
        active_cancer: true,
        paralysis_immobilization: true,
        bedridden_surgery: true,
        localized_tenderness: true,
        entire_leg_swelling: true,
        calf_swelling: true,
        pitting_edema: true,
        collateral_veins: true,
        previous_dvt: true,
        alternative_diagnosis: false,
    });
    assert_eq!(result.score, 9.0);
    assert_eq!(result.score, result.max_score);
    assert_eq!(result.risk_tier, RiskTier::High);
    assert_eq!(result.risk_percentage, 75.0);
    assert_eq!(result.management_steps[0].priority, Priority::Urgent);
}

#[test]
fn wells_dvt_alternative_diagnosis_goes_below_zero() {
    let result = wells_dvt(&WellsDvtInput {
        alternative_diagnosis: true,
        ..WellsDvtInput::default()
    });
    assert_eq!(result.score, 0.0);
    assert_eq!(result.measured, Some(-2.0));
    assert_eq!(result.risk_tier, RiskTier::Low);
    assert_eq!(result.risk_percentage, 3.0);
}

#[test]
fn wells_dvt_tier_edges() {
    let one = WellsDvtInput {
        pitting_edema: true,
        ..WellsDvtInput::default()
    };
    assert_eq!(wells_dvt(&one).risk_tier, RiskTier::Moderate);

    let three = WellsDvtInput {
        active_cancer: true,
        calf_swelling: true,
        ..one
    };
    assert_eq!(wells_dvt(&three).risk_tier, RiskTier::High);

    // The deduction pulls three criteria back to moderate.
    let offset = WellsDvtInput {
        alternative_diagnosis: true,
        ..three
    };
    assert_eq!(wells_dvt(&offset).score, 1.0);
    assert_eq!(wells_dvt(&offset).risk_tier, RiskTier::Moderate);
}

#[test]
fn wells_pe_half_points_and_tiers() {
    let hemoptysis = wells_pe(&WellsPeInput {
        hemoptysis: true,
        ..WellsPeInput::default()
    });
    assert_eq!(hemoptysis.score, 1.0);
    assert_eq!(hemoptysis.risk_tier, RiskTier::Low);
    assert!(hemoptysis.recommendations.iter().any(|r| r.contains("PERC")));

    let six = WellsPeInput {
        clinical_dvt: true,
        pe_likely: true,
        ..WellsPeInput::default()
    };
    let result = wells_pe(&six);
    assert_eq!(result.score, 6.0);
    assert_eq!(result.risk_tier, RiskTier::Moderate);
    assert!(result.interpretation.contains("PE likely"));
    assert_eq!(result.management_steps[0].priority, Priority::Immediate);

    let high = wells_pe(&WellsPeInput {
        heart_rate: true,
        ..six
    });
    assert_eq!(high.score, 7.5);
    assert_eq!(high.risk_tier, RiskTier::High);
    assert_eq!(high.risk_percentage, 40.6);
}

#[test]
fn wells_pe_four_points_is_still_unlikely() {
    let result = wells_pe(&WellsPeInput {
        heart_rate: true,
        immobilization: true,
        hemoptysis: true,
        ..WellsPeInput::default()
    });
    assert_eq!(result.score, 4.0);
    assert!(result.interpretation.contains("PE unlikely"));
    assert_eq!(result.management_steps[0].priority, Priority::Routine);
}

#[test]
fn centor_scores_map_to_streptococcal_probability() {
    let none = centor(&CentorInput::default());
    assert_eq!(none.risk_percentage, 2.5);
    assert_eq!(none.risk_tier, RiskTier::Low);

    let two = centor(&CentorInput {
        fever: true,
        cough_absent: true,
        ..CentorInput::default()
    });
    assert_eq!(two.risk_percentage, 17.0);
    assert_eq!(two.risk_tier, RiskTier::Moderate);

    let all = centor(&CentorInput {
        fever: true,
        cough_absent: true,
        tonsillar_exudate: true,
        tender_anterior_nodes: true,
        age_3_14: true,
    });
    assert_eq!(all.score, all.max_score);
    assert_eq!(all.risk_percentage, 53.0);
    assert_eq!(all.risk_tier, RiskTier::High);
}

fn healthy_psi(age: f64, male: bool) -> PsiInput {
    PsiInput {
        age,
        male,
        nursing_home: false,
        neoplastic_disease: false,
        liver_disease: false,
        heart_failure: false,
        cerebrovascular_disease: false,
        renal_disease: false,
        altered_mental: false,
        respiratory_rate: 16.0,
        systolic_bp: 120.0,
        temperature: 37.0,
        pulse: 80.0,
        ph: 7.4,
        bun: 15.0,
        sodium: 140.0,
        glucose: 100.0,
        hematocrit: 40.0,
        pao2: 90.0,
        pleural_effusion: false,
    }
}

#[test]
fn psi_young_healthy_patient_is_class_one() {
    let input = healthy_psi(40.0, false);
    assert_eq!(psi_class(&input), PsiClass::I);
    let result = psi_port(&input);
    assert_eq!(result.score, 30.0);
    assert_eq!(result.risk_tier, RiskTier::Low);
    assert_eq!(result.risk_percentage, 0.1);
}

#[test]
fn psi_abnormal_exam_skips_class_one() {
    let input = PsiInput {
        altered_mental: true,
        ..healthy_psi(45.0, true)
    };
    assert_eq!(psi_class(&input), PsiClass::II);
    assert_eq!(psi_port(&input).score, 65.0);
}

#[test]
fn psi_class_boundaries() {
    assert_eq!(psi_class(&healthy_psi(55.0, true)), PsiClass::II);
    assert_eq!(psi_class(&healthy_psi(70.0, true)), PsiClass::II);
    assert_eq!(psi_class(&healthy_psi(71.0, true)), PsiClass::III);
    assert_eq!(psi_class(&healthy_psi(91.0, true)), PsiClass::IV);

    let class_v = PsiInput {
        neoplastic_disease: true,
        altered_mental: true,
        bun: 35.0,
        ..healthy_psi(80.0, true)
    };
    let result = psi_port(&class_v);
    assert_eq!(result.score, 150.0);
    assert_eq!(result.risk_tier, RiskTier::Critical);
    assert_eq!(result.risk_percentage, 27.0);
    assert_eq!(result.management_steps[0].priority, Priority::Immediate);
}

#[test]
fn psi_every_finding_reaches_maximum() {
    let result = psi_port(&PsiInput {
        age: 120.0,
        male: true,
        nursing_home: true,
        neoplastic_disease: true,
        liver_disease: true,
        heart_failure: true,
        cerebrovascular_disease: true,
        renal_disease: true,
        altered_mental: true,
        respiratory_rate: 35.0,
        systolic_bp: 80.0,
        temperature: 41.0,
        pulse: 130.0,
        ph: 7.2,
        bun: 40.0,
        sodium: 125.0,
        glucose: 300.0,
        hematocrit: 25.0,
        pao2: 50.0,
        pleural_effusion: true,
    });
    assert_eq!(result.score, result.max_score);
}

fn stable_bleed() -> GlasgowBlatchfordInput {
    GlasgowBlatchfordInput {
        blood_urea: 5.0,
        hemoglobin: 14.0,
        systolic_bp: 120.0,
        pulse: 80.0,
        female: false,
        melena: false,
        syncope: false,
        hepatic_disease: false,
        cardiac_failure: false,
    }
}

#[test]
fn glasgow_blatchford_zero_suits_outpatient_care() {
    let result = glasgow_blatchford(&stable_bleed());
    assert_eq!(result.score, 0.0);
    assert_eq!(result.risk_tier, RiskTier::Low);
    assert!(result.recommendations[0].contains("outpatient"));
}

#[test]
fn glasgow_blatchford_hemoglobin_cutoffs_depend_on_sex() {
    let male = GlasgowBlatchfordInput {
        hemoglobin: 12.5,
        ..stable_bleed()
    };
    let female = GlasgowBlatchfordInput {
        female: true,
        ..male
    };
    assert_eq!(glasgow_blatchford(&male).score, 1.0);
    assert_eq!(glasgow_blatchford(&female).score, 0.0);
}

#[test]
fn glasgow_blatchford_tier_edges() {
    let urea = GlasgowBlatchfordInput {
        blood_urea: 6.5,
        ..stable_bleed()
    };
    assert_eq!(glasgow_blatchford(&urea).score, 2.0);
    assert_eq!(glasgow_blatchford(&urea).risk_tier, RiskTier::Moderate);

    let seven = GlasgowBlatchfordInput {
        blood_urea: 10.0,
        systolic_bp: 85.0,
        ..stable_bleed()
    };
    assert_eq!(glasgow_blatchford(&seven).score, 7.0);
    assert_eq!(glasgow_blatchford(&seven).risk_tier, RiskTier::High);

    let worst = glasgow_blatchford(&GlasgowBlatchfordInput {
        blood_urea: 30.0,
        hemoglobin: 8.0,
        systolic_bp: 80.0,
        pulse: 110.0,
        female: false,
        melena: true,
        syncope: true,
        hepatic_disease: true,
        cardiac_failure: true,
    });
    assert_eq!(worst.score, worst.max_score);
    assert_eq!(worst.risk_tier, RiskTier::Critical);
    assert_eq!(worst.management_steps[0].priority, Priority::Immediate);
}

#[test]
fn bisap_mortality_by_score() {
    assert_eq!(bisap(&BisapInput::default()).risk_percentage, 0.1);

    let three = bisap(&BisapInput {
        bun: true,
        sirs: true,
        age: true,
        ..BisapInput::default()
    });
    assert_eq!(three.score, 3.0);
    assert_eq!(three.risk_percentage, 3.6);
    assert_eq!(three.risk_tier, RiskTier::High);

    let all = bisap(&BisapInput {
        bun: true,
        impaired_mental: true,
        sirs: true,
        age: true,
        pleural_effusion: true,
    });
    assert_eq!(all.score, all.max_score);
    assert_eq!(all.risk_percentage, 9.5);
}
