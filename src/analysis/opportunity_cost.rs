//! 아낀 구독료를 매달 투자했을 때의 미래 가치(연금 종가 공식).

use super::cost::round_half_up;

/// 시뮬레이션과 연도별 곡선이 다루는 최대 기간 [년]
pub const MAX_YEARS: u32 = 100;

/// 비교용 수익률 시나리오.
#[derive(Debug)]
pub struct InvestmentScenario {
    pub id: &'static str,
    pub name: &'static str,
    /// 연 수익률(0.04 = 4%)
    pub annual_rate: f64,
    pub description: &'static str,
}

pub const SCENARIOS: [InvestmentScenario; 5] = [
    InvestmentScenario {
        id: "deposit",
        name: "정기예금",
        annual_rate: 0.035,
        description: "원금 보장, 시중은행 1년 예금 금리 수준",
    },
    InvestmentScenario {
        id: "savings",
        name: "적금",
        annual_rate: 0.04,
        description: "매달 같은 금액을 넣는 적금 금리 수준",
    },
    InvestmentScenario {
        id: "sp500",
        name: "S&P 500",
        annual_rate: 0.10,
        description: "미국 대표 지수의 장기 평균 수익률",
    },
    InvestmentScenario {
        id: "kospi",
        name: "코스피",
        annual_rate: 0.08,
        description: "국내 대표 지수의 장기 평균 수익률",
    },
    InvestmentScenario {
        id: "crypto",
        name: "코인",
        annual_rate: 0.50,
        description: "변동성이 매우 큰 투기적 자산 (참고용)",
    },
];

pub fn find_scenario(id: &str) -> Option<&'static InvestmentScenario> {
    SCENARIOS.iter().find(|s| s.id.eq_ignore_ascii_case(id.trim()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvestmentResult {
    pub total_invested: i64,
    pub total_value: i64,
    pub total_return: i64,
}

/// 매달 `monthly_saving`을 `years`년 동안 적립했을 때의 결과.
///
/// 월 단위 반복이 아니라 닫힌 형태의 공식
/// `S * ((1 + r)^n - 1) / r` (r = 연수익률/12, n = 개월 수)을 그대로 쓴다.
pub fn simulate_investment(monthly_saving: i64, years: u32, annual_rate: f64) -> InvestmentResult {
    let monthly_rate = annual_rate / 12.0;
    let total_months = years.saturating_mul(12);
    let total_invested = monthly_saving.saturating_mul(i64::from(total_months));
    let total_value = if monthly_rate == 0.0 {
        total_invested
    } else {
        let growth = (1.0 + monthly_rate).powf(f64::from(total_months));
        saturating_won(monthly_saving as f64 * (growth - 1.0) / monthly_rate)
    };
    InvestmentResult {
        total_invested,
        total_value,
        total_return: total_value.saturating_sub(total_invested),
    }
}

/// i64 범위를 넘는 금액은 양 끝값에 붙인다. NaN은 0.
fn saturating_won(value: f64) -> i64 {
    if value.is_nan() {
        0
    } else {
        round_half_up(value) as i64
    }
}

#[derive(Debug, Clone)]
pub struct ScenarioResult {
    pub scenario: &'static InvestmentScenario,
    pub result: InvestmentResult,
}

pub fn calculate_all_scenarios(monthly_saving: i64, years: u32) -> Vec<ScenarioResult> {
    SCENARIOS
        .iter()
        .map(|scenario| ScenarioResult {
            scenario,
            result: simulate_investment(monthly_saving, years, scenario.annual_rate),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSeriesPoint {
    pub year: u32,
    pub invested: i64,
    pub value: i64,
}

/// 0년차부터 `years`년차까지 연 단위 누적 곡선. 각 연도는 처음부터 다시 계산한다.
/// 기간은 `MAX_YEARS`에서 자른다.
pub fn time_series(monthly_saving: i64, years: u32, annual_rate: f64) -> Vec<TimeSeriesPoint> {
    let years = years.min(MAX_YEARS);
    let mut points = Vec::with_capacity(years as usize + 1);
    points.push(TimeSeriesPoint {
        year: 0,
        invested: 0,
        value: 0,
    });
    for year in 1..=years {
        let r = simulate_investment(monthly_saving, year, annual_rate);
        points.push(TimeSeriesPoint {
            year,
            invested: r.total_invested,
            value: r.total_value,
        });
    }
    points
}
