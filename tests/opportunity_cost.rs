//! 적립식 투자 미래 가치와 시나리오 비교.
use subscription_toolbox::analysis::opportunity_cost::{
    calculate_all_scenarios, find_scenario, simulate_investment, time_series, MAX_YEARS, SCENARIOS,
};

#[test]
fn one_year_at_twelve_percent() {
    let r = simulate_investment(1_000, 1, 0.12);
    assert_eq!(r.total_invested, 12_000);
    assert_eq!(r.total_value, 12_683);
    assert_eq!(r.total_return, 683);
}

#[test]
fn zero_rate_returns_principal() {
    let r = simulate_investment(1_000, 5, 0.0);
    assert_eq!(r.total_invested, 60_000);
    assert_eq!(r.total_value, 60_000);
    assert_eq!(r.total_return, 0);
}

#[test]
fn zero_years_or_zero_saving() {
    let r = simulate_investment(1_000, 0, 0.10);
    assert_eq!(r.total_invested, 0);
    assert_eq!(r.total_value, 0);
    let r = simulate_investment(0, 10, 0.10);
    assert_eq!(r.total_value, 0);
}

#[test]
fn ten_year_scenarios() {
    let all = calculate_all_scenarios(10_000, 10);
    assert_eq!(all.len(), SCENARIOS.len());
    let values: Vec<(&str, i64)> = all.iter().map(|s| (s.scenario.id, s.result.total_value)).collect();
    assert_eq!(
        values,
        vec![
            ("deposit", 1_434_325),
            ("savings", 1_472_498),
            ("sp500", 2_048_450),
            ("kospi", 1_829_460),
            ("crypto", 31_945_724),
        ]
    );
    assert!(all.iter().all(|s| s.result.total_invested == 1_200_000));
}

#[test]
fn time_series_starts_at_zero_and_ends_at_total() {
    let series = time_series(1_000, 3, 0.1);
    assert_eq!(series.len(), 4);
    assert_eq!(series[0].year, 0);
    assert_eq!(series[0].invested, 0);
    assert_eq!(series[0].value, 0);
    let last = series.last().expect("last point");
    assert_eq!(last.year, 3);
    assert_eq!(last.value, simulate_investment(1_000, 3, 0.1).total_value);
    assert!(series.windows(2).all(|w| w[1].value > w[0].value));
}

#[test]
fn scenario_lookup() {
    assert_eq!(find_scenario("sp500").map(|s| s.annual_rate), Some(0.10));
    assert_eq!(find_scenario(" KOSPI ").map(|s| s.id), Some("kospi"));
    assert!(find_scenario("lottery").is_none());
}

#[test]
fn long_crypto_horizon_matches_closed_form() {
    let rate: f64 = 0.5 / 12.0;
    for years in [16u32, 25, 40] {
        for saving in [84_002i64, 9_990, 123_457] {
            let months = f64::from(years * 12);
            let expected =
                (saving as f64 * ((1.0 + rate).powf(months) - 1.0) / rate + 0.5).floor() as i64;
            assert_eq!(
                simulate_investment(saving, years, 0.5).total_value,
                expected,
                "years={years} saving={saving}"
            );
        }
    }
    assert_eq!(simulate_investment(84_002, 16, 0.5).total_value, 5_108_021_889);
}

#[test]
fn huge_inputs_saturate_instead_of_overflowing() {
    let r = simulate_investment(1_000, 400_000_000, 0.0);
    assert_eq!(r.total_invested, i64::MAX);
    assert_eq!(r.total_return, 0);

    let r = simulate_investment(i64::MAX / 100, 100, 0.0);
    assert_eq!(r.total_invested, i64::MAX);

    let r = simulate_investment(1_000_000, u32::MAX, 0.5);
    assert_eq!(r.total_value, i64::MAX);
    assert!(r.total_return >= 0);

    let r = simulate_investment(i64::MIN, 10, 0.1);
    assert_eq!(r.total_invested, i64::MIN);
}

#[test]
fn time_series_is_capped() {
    let series = time_series(1_000, u32::MAX, 0.04);
    assert_eq!(series.len(), MAX_YEARS as usize + 1);
    assert_eq!(series.last().map(|p| p.year), Some(MAX_YEARS));
}
