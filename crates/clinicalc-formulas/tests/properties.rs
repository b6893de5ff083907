//! Invariants every formula must hold: score within bounds, tier monotone
//! in score, identical output for identical input.

use clinicalc_core::models::result::ScoreResult;
use clinicalc_formulas::formulas::cardiology::{
    cha2ds2_vasc, has_bled, timi, Cha2ds2VascInput, HasBledInput, TimiInput,
};
use clinicalc_formulas::formulas::critical_care::{qsofa, sofa, QsofaInput, SofaInput};
use clinicalc_formulas::formulas::hepatology::{meld, MeldInput};
use clinicalc_formulas::formulas::neurology::{gcs, GcsInput};
use clinicalc_formulas::formulas::perioperative::{rcri, RcriInput};
use clinicalc_formulas::formulas::renal::{creatinine_clearance, CreatinineClearanceInput};
use clinicalc_formulas::formulas::gastroenterology::{bisap, BisapInput};
use clinicalc_formulas::formulas::respiratory::{
    centor, curb65, smart_cop, CentorInput, Curb65Input, SmartCopInput,
};
use clinicalc_formulas::formulas::vascular::{wells_dvt, wells_pe, WellsDvtInput, WellsPeInput};

fn bit(mask: u32, n: u32) -> bool {
    mask & (1 << n) != 0
}

fn assert_bounded(results: &[ScoreResult]) {
    for r in results {
        assert!(
            (0.0..=r.max_score).contains(&r.score),
            "score {} outside [0, {}]",
            r.score,
            r.max_score
        );
        assert!((0.0..=100.0).contains(&r.risk_percentage));
    }
}

/// Sorting by score must also sort by tier.
fn assert_monotone(results: &mut [ScoreResult], higher_is_worse: bool) {
    results.sort_by(|a, b| a.score.total_cmp(&b.score));
    for pair in results.windows(2) {
        let (lower, upper) = (&pair[0], &pair[1]);
        if higher_is_worse {
            assert!(
                lower.risk_tier <= upper.risk_tier,
                "score {} is {:?} but score {} is {:?}",
                lower.score,
                lower.risk_tier,
                upper.score,
                upper.risk_tier
            );
        } else {
            assert!(
                lower.risk_tier >= upper.risk_tier,
                "score {} is {:?} but score {} is {:?}",
                lower.score,
                lower.risk_tier,
                upper.score,
                upper.risk_tier
            );
        }
    }
}

#[test]
fn boolean_scores_hold_invariants_over_every_combination() {
    let mut cha = Vec::new();
    let mut bled = Vec::new();
    let mut curb = Vec::new();
    let mut smart = Vec::new();
    let mut timis = Vec::new();
    let mut rcris = Vec::new();

    for mask in 0..(1u32 << 9) {
        if mask < 1 << 8 {
            cha.push(cha2ds2_vasc(&Cha2ds2VascInput {
                chf: bit(mask, 0),
                hypertension: bit(mask, 1),
                age_75: bit(mask, 2),
                diabetes: bit(mask, 3),
                stroke_tia: bit(mask, 4),
                vascular_disease: bit(mask, 5),
                age_65_74: bit(mask, 6),
                female: bit(mask, 7),
            }));
            smart.push(smart_cop(&SmartCopInput {
                systolic_bp: bit(mask, 0),
                multilobar: bit(mask, 1),
                albumin: bit(mask, 2),
                respiratory_rate: bit(mask, 3),
                tachycardia: bit(mask, 4),
                confusion: bit(mask, 5),
                oxygen: bit(mask, 6),
                ph: bit(mask, 7),
            }));
        }
        if mask < 1 << 7 {
            timis.push(timi(&TimiInput {
                age_65: bit(mask, 0),
                risk_factors: bit(mask, 1),
                known_stenosis: bit(mask, 2),
                aspirin: bit(mask, 3),
                severe_angina: bit(mask, 4),
                st_deviation: bit(mask, 5),
                positive_marker: bit(mask, 6),
            }));
        }
        if mask < 1 << 6 {
            rcris.push(rcri(&RcriInput {
                high_risk_surgery: bit(mask, 0),
                ischemic_heart_disease: bit(mask, 1),
                heart_failure: bit(mask, 2),
                cerebrovascular_disease: bit(mask, 3),
                diabetes_insulin: bit(mask, 4),
                renal_insufficiency: bit(mask, 5),
            }));
        }
        if mask < 1 << 5 {
            curb.push(curb65(&Curb65Input {
                confusion: bit(mask, 0),
                urea: bit(mask, 1),
                respiratory_rate: bit(mask, 2),
                blood_pressure: bit(mask, 3),
                age_65: bit(mask, 4),
            }));
        }
        bled.push(has_bled(&HasBledInput {
            hypertension: bit(mask, 0),
            abnormal_renal_function: bit(mask, 1),
            abnormal_liver_function: bit(mask, 2),
            stroke: bit(mask, 3),
            bleeding: bit(mask, 4),
            labile_inr: bit(mask, 5),
            elderly: bit(mask, 6),
            drugs: bit(mask, 7),
            alcohol: bit(mask, 8),
        }));
    }

    for results in [&mut cha, &mut bled, &mut curb, &mut smart, &mut timis, &mut rcris] {
        assert_bounded(results);
        assert_monotone(results, true);
    }
}

#[test]
fn qsofa_sweep() {
    let mut results = Vec::new();
    for altered_mentation in [false, true] {
        for rr in (10..=40).step_by(3) {
            for sbp in (70..=140).step_by(10) {
                results.push(qsofa(&QsofaInput {
                    altered_mentation,
                    respiratory_rate: f64::from(rr),
                    systolic_bp: f64::from(sbp),
                }));
            }
        }
    }
    assert_bounded(&results);
    assert_monotone(&mut results, true);
}

#[test]
fn sofa_sweep() {
    let mut results = Vec::new();
    for step in 0..=10 {
        let t = f64::from(step) / 10.0;
        results.push(sofa(&SofaInput {
            pao2_fio2: 450.0 - 400.0 * t,
            platelets: 200.0 - 190.0 * t,
            bilirubin: 0.8 + 12.0 * t,
            mean_arterial_pressure: 105.0 - 45.0 * t,
            gcs: 15.0 - 12.0 * t,
            creatinine: 0.8 + 5.0 * t,
        }));
    }
    assert_bounded(&results);
    assert_monotone(&mut results, true);
}

#[test]
fn gcs_is_monotone_in_the_lower_is_worse_direction() {
    let mut results = Vec::new();
    for e in 1..=4 {
        for v in 1..=5 {
            for m in 1..=6 {
                results.push(gcs(&GcsInput {
                    eye_opening: f64::from(e),
                    verbal_response: f64::from(v),
                    motor_response: f64::from(m),
                }));
            }
        }
    }
    assert_bounded(&results);
    assert_monotone(&mut results, false);
}

#[test]
fn creatinine_clearance_is_monotone_in_the_lower_is_worse_direction() {
    let mut results = Vec::new();
    for tenth in 4..=80 {
        for female in [false, true] {
            results.push(creatinine_clearance(&CreatinineClearanceInput {
                age: 55.0,
                weight: 75.0,
                creatinine: f64::from(tenth) / 10.0,
                female,
            }));
        }
    }
    assert_bounded(&results);
    assert_monotone(&mut results, false);
}

#[test]
fn meld_stays_within_clamp_range() {
    let mut results = Vec::new();
    for inr in [0.5, 1.0, 1.5, 2.5, 4.0, 9.0] {
        for bilirubin in [0.3, 1.0, 3.0, 10.0, 40.0] {
            for creatinine in [0.4, 1.0, 2.0, 4.0] {
                let result = meld(&MeldInput {
                    inr,
                    bilirubin,
                    creatinine,
                });
                assert!((6.0..=40.0).contains(&result.score));
                results.push(result);
            }
        }
    }
    assert_bounded(&results);
    assert_monotone(&mut results, true);
}

#[test]
fn formulas_are_deterministic() {
    let input = SofaInput {
        pao2_fio2: 180.0,
        platelets: 80.0,
        bilirubin: 2.5,
        mean_arterial_pressure: 68.0,
        gcs: 11.0,
        creatinine: 2.2,
    };
    assert_eq!(sofa(&input), sofa(&input));

    let crcl = CreatinineClearanceInput {
        age: 72.0,
        weight: 64.0,
        creatinine: 1.7,
        female: true,
    };
    let (a, b) = (creatinine_clearance(&crcl), creatinine_clearance(&crcl));
    assert_eq!(a, b);
    assert_eq!(a.measured.map(f64::to_bits), b.measured.map(f64::to_bits));
}

#[test]
fn pretest_probability_scores_hold_invariants_over_every_combination() {
    let mut dvt = Vec::new();
    let mut pe = Vec::new();
    let mut centors = Vec::new();
    let mut bisaps = Vec::new();

    for mask in 0..(1u32 << 10) {
        dvt.push(wells_dvt(&WellsDvtInput {
            active_cancer: bit(mask, 0),
            paralysis_immobilization: bit(mask, 1),
            bedridden_surgery: bit(mask, 2),
            localized_tenderness: bit(mask, 3),
            entire_leg_swelling: bit(mask, 4),
            calf_swelling: bit(mask, 5),
            pitting_edema: bit(mask, 6),
            collateral_veins: bit(mask, 7),
            previous_dvt: bit(mask, 8),
            alternative_diagnosis: bit(mask, 9),
        }));
        if mask < 1 << 7 {
            pe.push(wells_pe(&WellsPeInput {
                clinical_dvt: bit(mask, 0),
                pe_likely: bit(mask, 1),
                heart_rate: bit(mask, 2),
                immobilization: bit(mask, 3),
                previous_vte: bit(mask, 4),
                hemoptysis: bit(mask, 5),
                malignancy: bit(mask, 6),
            }));
        }
        if mask < 1 << 5 {
            centors.push(centor(&CentorInput {
                fever: bit(mask, 0),
                cough_absent: bit(mask, 1),
                tonsillar_exudate: bit(mask, 2),
                tender_anterior_nodes: bit(mask, 3),
                age_3_14: bit(mask, 4),
            }));
            bisaps.push(bisap(&BisapInput {
                bun: bit(mask, 0),
                impaired_mental: bit(mask, 1),
                sirs: bit(mask, 2),
                age: bit(mask, 3),
                pleural_effusion: bit(mask, 4),
            }));
        }
    }

    for results in [&mut dvt, &mut pe, &mut centors, &mut bisaps] {
        assert_bounded(results);
        assert_monotone(results, true);
    }
}
