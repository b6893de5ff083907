use clinicalc_core::models::risk::{Priority, RiskTier};
use clinicalc_formulas::formulas::critical_care::{
    apache_ii, news2, news2_components, qsofa, sofa, sofa_components, ApacheIiInput,
    Consciousness, News2Input, QsofaInput, SofaInput,
};

fn qsofa_input(altered_mentation: bool, respiratory_rate: f64, systolic_bp: f64) -> QsofaInput {
    QsofaInput {
        altered_mentation,
        respiratory_rate,
        systolic_bp,
    }
}

#[test]
fn qsofa_normal_vitals_is_low_risk() {
    let result = qsofa(&qsofa_input(false, 18.0, 120.0));
    assert_eq!(result.score, 0.0);
    assert_eq!(result.max_score, 3.0);
    assert_eq!(result.risk_tier, RiskTier::Low);
    assert_eq!(result.risk_percentage, 10.0);
    assert!(result.interpretation.starts_with("LOW RISK"));
}

#[test]
fn qsofa_all_criteria_is_high_risk() {
    let result = qsofa(&qsofa_input(true, 26.0, 88.0));
    assert_eq!(result.score, 3.0);
    assert_eq!(result.risk_tier, RiskTier::High);
    assert_eq!(result.risk_percentage, 80.0);
    assert!(result
        .management_steps
        .iter()
        .all(|s| s.priority == Priority::Immediate));
}

#[test]
fn qsofa_respiratory_rate_edge_is_inclusive() {
    assert_eq!(qsofa(&qsofa_input(false, 22.0, 120.0)).score, 1.0);
    assert_eq!(qsofa(&qsofa_input(false, 21.0, 120.0)).score, 0.0);
}

#[test]
fn qsofa_systolic_edge_is_exclusive() {
    assert_eq!(qsofa(&qsofa_input(false, 18.0, 100.0)).score, 0.0);
    assert_eq!(qsofa(&qsofa_input(false, 18.0, 99.0)).score, 1.0);
}

#[test]
fn qsofa_one_point_stays_low_two_points_turn_high() {
    assert_eq!(qsofa(&qsofa_input(true, 18.0, 120.0)).risk_tier, RiskTier::Low);
    assert_eq!(qsofa(&qsofa_input(true, 22.0, 120.0)).risk_tier, RiskTier::High);
}

fn normal_sofa() -> SofaInput {
    SofaInput {
        pao2_fio2: 400.0,
        platelets: 150.0,
        bilirubin: 1.0,
        mean_arterial_pressure: 100.0,
        gcs: 15.0,
        creatinine: 1.0,
    }
}

#[test]
fn sofa_normal_physiology_scores_zero() {
    let result = sofa(&normal_sofa());
    assert_eq!(result.score, 0.0);
    assert_eq!(result.max_score, 24.0);
    assert_eq!(result.risk_tier, RiskTier::Low);
    assert_eq!(result.risk_percentage, 5.0);
}

#[test]
fn sofa_worst_physiology_hits_maximum() {
    let result = sofa(&SofaInput {
        pao2_fio2: 50.0,
        platelets: 10.0,
        bilirubin: 13.0,
        mean_arterial_pressure: 60.0,
        gcs: 5.0,
        creatinine: 6.0,
    });
    assert_eq!(result.score, 24.0);
    assert_eq!(result.risk_tier, RiskTier::Critical);
    assert_eq!(result.risk_percentage, 95.0);
}

#[test]
fn sofa_component_edges() {
    let components = sofa_components(&SofaInput {
        pao2_fio2: 300.0,
        platelets: 100.0,
        bilirubin: 1.2,
        mean_arterial_pressure: 70.0,
        gcs: 12.0,
        creatinine: 3.5,
    });
    assert_eq!(components.respiratory, 1);
    assert_eq!(components.coagulation, 1);
    assert_eq!(components.hepatic, 1);
    assert_eq!(components.cardiovascular, 3);
    assert_eq!(components.neurological, 2);
    assert_eq!(components.renal, 3);
    assert_eq!(components.total(), 11);
}

#[test]
fn sofa_tier_thresholds() {
    let mut input = normal_sofa();
    // respiratory 4 + coagulation 1 = 5
    input.pao2_fio2 = 90.0;
    input.platelets = 120.0;
    assert_eq!(sofa(&input).risk_tier, RiskTier::Moderate);
    // + hepatic 3 = 8
    input.bilirubin = 6.0;
    assert_eq!(sofa(&input).risk_tier, RiskTier::High);
    // + renal 3 = 11
    input.creatinine = 3.5;
    assert_eq!(sofa(&input).risk_tier, RiskTier::Critical);
}

#[test]
fn apache_age_addend_bands() {
    let base = ApacheIiInput {
        temperature: 37.0,
        heart_rate: 80.0,
        respiratory_rate: 16.0,
        systolic_bp: 100.0,
        age: 40.0,
    };
    let score_at = |age: f64| apache_ii(&ApacheIiInput { age, ..base }).score;
    assert_eq!(score_at(40.0), 0.0);
    assert_eq!(score_at(45.0), 1.0);
    assert_eq!(score_at(55.0), 3.0);
    assert_eq!(score_at(65.0), 5.0);
    assert_eq!(score_at(75.0), 6.0);
}

#[test]
fn apache_abnormal_vitals_score_in_both_directions() {
    let hot = apache_ii(&ApacheIiInput {
        temperature: 41.5,
        heart_rate: 80.0,
        respiratory_rate: 16.0,
        systolic_bp: 100.0,
        age: 40.0,
    });
    let cold = apache_ii(&ApacheIiInput {
        temperature: 29.0,
        heart_rate: 80.0,
        respiratory_rate: 16.0,
        systolic_bp: 100.0,
        age: 40.0,
    });
    assert_eq!(hot.score, 4.0);
    assert_eq!(cold.score, 4.0);
}

#[test]
fn apache_worst_vitals_top_out_below_critical() {
    let result = apache_ii(&ApacheIiInput {
        temperature: 42.0,
        heart_rate: 190.0,
        respiratory_rate: 55.0,
        systolic_bp: 40.0,
        age: 80.0,
    });
    assert_eq!(result.score, 22.0);
    assert_eq!(result.risk_tier, RiskTier::High);
    assert!(result.score <= result.max_score);
}

fn resting_apache() -> ApacheIiInput {
    ApacheIiInput {
        temperature: 37.0,
        heart_rate: 80.0,
        respiratory_rate: 16.0,
        systolic_bp: 100.0,
        age: 40.0,
    }
}

#[test]
fn apache_vital_sign_band_edges() {
    let score_with = |input: ApacheIiInput| apache_ii(&input).score;
    let base = resting_apache();

    assert_eq!(score_with(ApacheIiInput { temperature: 38.5, ..base }), 1.0);
    assert_eq!(score_with(ApacheIiInput { temperature: 38.4, ..base }), 0.0);
    assert_eq!(score_with(ApacheIiInput { temperature: 32.1, ..base }), 1.0);
    assert_eq!(score_with(ApacheIiInput { temperature: 32.0, ..base }), 3.0);
    assert_eq!(score_with(ApacheIiInput { temperature: 29.9, ..base }), 4.0);

    assert_eq!(score_with(ApacheIiInput { heart_rate: 110.0, ..base }), 1.0);
    assert_eq!(score_with(ApacheIiInput { heart_rate: 109.0, ..base }), 0.0);
    assert_eq!(score_with(ApacheIiInput { heart_rate: 69.0, ..base }), 1.0);
    assert_eq!(score_with(ApacheIiInput { heart_rate: 70.0, ..base }), 0.0);
    assert_eq!(score_with(ApacheIiInput { heart_rate: 140.0, ..base }), 3.0);

    assert_eq!(score_with(ApacheIiInput { respiratory_rate: 25.0, ..base }), 1.0);
    assert_eq!(score_with(ApacheIiInput { respiratory_rate: 11.0, ..base }), 1.0);
    assert_eq!(score_with(ApacheIiInput { respiratory_rate: 12.0, ..base }), 0.0);

    assert_eq!(score_with(ApacheIiInput { systolic_bp: 79.0, ..base }), 1.0);
    assert_eq!(score_with(ApacheIiInput { systolic_bp: 80.0, ..base }), 0.0);
    assert_eq!(score_with(ApacheIiInput { systolic_bp: 69.0, ..base }), 3.0);
    assert_eq!(score_with(ApacheIiInput { systolic_bp: 110.0, ..base }), 1.0);
}

#[test]
fn apache_tier_edges() {
    // age 6 + temperature 4 + heart rate 4 = 14
    let fourteen = ApacheIiInput {
        temperature: 41.0,
        heart_rate: 180.0,
        age: 75.0,
        ..resting_apache()
    };
    let result = apache_ii(&fourteen);
    assert_eq!(result.score, 14.0);
    assert_eq!(result.risk_tier, RiskTier::Low);
    assert_eq!(result.risk_percentage, 8.0);

    let fifteen = apache_ii(&ApacheIiInput { respiratory_rate: 25.0, ..fourteen });
    assert_eq!(fifteen.score, 15.0);
    assert_eq!(fifteen.risk_tier, RiskTier::Moderate);
    assert_eq!(fifteen.risk_percentage, 25.0);

    // + respiratory 4 + systolic 1 = 19
    let nineteen = apache_ii(&ApacheIiInput {
        respiratory_rate: 50.0,
        systolic_bp: 110.0,
        ..fourteen
    });
    assert_eq!(nineteen.score, 19.0);
    assert_eq!(nineteen.risk_tier, RiskTier::Moderate);

    // + respiratory 3 + systolic 3 = 20
    let twenty = apache_ii(&ApacheIiInput {
        respiratory_rate: 35.0,
        systolic_bp: 130.0,
        ..fourteen
    });
    assert_eq!(twenty.score, 20.0);
    assert_eq!(twenty.risk_tier, RiskTier::High);
    assert_eq!(twenty.risk_percentage, 55.0);
}

fn well_news2() -> News2Input {
    News2Input {
        respiratory_rate: 16.0,
        spo2: 97.0,
        supplemental_oxygen: false,
        temperature: 37.0,
        systolic_bp: 120.0,
        heart_rate: 80.0,
        consciousness: Consciousness::Alert,
    }
}

#[test]
fn news2_normal_observations_score_zero() {
    let result = news2(&well_news2());
    assert_eq!(result.score, 0.0);
    assert_eq!(result.max_score, 20.0);
    assert_eq!(result.risk_tier, RiskTier::Low);
    assert_eq!(result.management_steps[0].priority, Priority::Routine);
}

#[test]
fn news2_parameter_band_edges() {
    let points = |input: News2Input| news2_components(&input);
    let base = well_news2();

    assert_eq!(points(News2Input { respiratory_rate: 8.0, ..base }).respiratory_rate, 3);
    assert_eq!(points(News2Input { respiratory_rate: 9.0, ..base }).respiratory_rate, 1);
    assert_eq!(points(News2Input { respiratory_rate: 21.0, ..base }).respiratory_rate, 2);
    assert_eq!(points(News2Input { respiratory_rate: 25.0, ..base }).respiratory_rate, 3);

    assert_eq!(points(News2Input { spo2: 96.0, ..base }).spo2, 0);
    assert_eq!(points(News2Input { spo2: 95.0, ..base }).spo2, 1);
    assert_eq!(points(News2Input { spo2: 93.0, ..base }).spo2, 2);
    assert_eq!(points(News2Input { spo2: 91.0, ..base }).spo2, 3);

    assert_eq!(points(News2Input { temperature: 35.0, ..base }).temperature, 3);
    assert_eq!(points(News2Input { temperature: 38.1, ..base }).temperature, 1);
    assert_eq!(points(News2Input { temperature: 39.1, ..base }).temperature, 2);

    assert_eq!(points(News2Input { systolic_bp: 111.0, ..base }).systolic_bp, 0);
    assert_eq!(points(News2Input { systolic_bp: 100.0, ..base }).systolic_bp, 2);
    assert_eq!(points(News2Input { systolic_bp: 220.0, ..base }).systolic_bp, 3);

    assert_eq!(points(News2Input { heart_rate: 91.0, ..base }).heart_rate, 1);
    assert_eq!(points(News2Input { heart_rate: 131.0, ..base }).heart_rate, 3);
    assert_eq!(points(News2Input { heart_rate: 40.0, ..base }).heart_rate, 3);
}

#[test]
fn news2_single_red_score_is_low_medium() {
    let result = news2(&News2Input {
        consciousness: Consciousness::NewConfusion,
        ..well_news2()
    });
    assert_eq!(result.score, 3.0);
    assert_eq!(result.risk_tier, RiskTier::Moderate);
    assert_eq!(result.management_steps[0].priority, Priority::Urgent);
}

#[test]
fn news2_aggregate_thresholds() {
    // oxygen 2 + heart rate 2 = 4, no red score
    let four = News2Input {
        supplemental_oxygen: true,
        heart_rate: 120.0,
        ..well_news2()
    };
    assert_eq!(news2(&four).risk_tier, RiskTier::Low);

    let five = News2Input { temperature: 38.5, ..four };
    assert_eq!(news2(&five).score, 5.0);
    assert_eq!(news2(&five).risk_tier, RiskTier::High);

    let seven = News2Input { respiratory_rate: 22.0, ..five };
    let result = news2(&seven);
    assert_eq!(result.score, 7.0);
    assert_eq!(result.risk_tier, RiskTier::Critical);
    assert_eq!(result.management_steps[0].priority, Priority::Immediate);
}

#[test]
fn news2_worst_observations_hit_maximum() {
    let result = news2(&News2Input {
        respiratory_rate: 30.0,
        spo2: 85.0,
        supplemental_oxygen: true,
        temperature: 34.0,
        systolic_bp: 80.0,
        heart_rate: 150.0,
        consciousness: Consciousness::Unresponsive,
    });
    assert_eq!(result.score, result.max_score);
}
