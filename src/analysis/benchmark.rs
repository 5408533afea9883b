use super::cost::round_won;
use crate::reference::benchmarks::find_benchmark;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchmarkLevel {
    Heavy,
    Average,
    Below,
    Minimal,
}

impl BenchmarkLevel {
    pub fn label(&self) -> &'static str {
        match self {
            BenchmarkLevel::Heavy => "헤비 유저",
            BenchmarkLevel::Average => "평균",
            BenchmarkLevel::Below => "평균 이하",
            BenchmarkLevel::Minimal => "거의 안 씀",
        }
    }

    fn feedback(&self, service: &str) -> String {
        match self {
            BenchmarkLevel::Heavy => {
                format!("{service}을(를) 상위권으로 많이 쓰고 있어요. 본전은 충분히 뽑고 있어요.")
            }
            BenchmarkLevel::Average => {
                format!("{service} 이용 시간이 국내 평균과 비슷해요.")
            }
            BenchmarkLevel::Below => {
                format!("{service}을(를) 평균보다 적게 쓰고 있어요. 요금제를 점검해 보세요.")
            }
            BenchmarkLevel::Minimal => {
                format!("{service}을(를) 거의 쓰지 않고 있어요. 해지를 고려해 보세요.")
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    /// 매칭된 기준 테이블 키
    pub service_name: &'static str,
    pub user_minutes: f64,
    pub average_minutes: f64,
    pub heavy_user_minutes: f64,
    pub light_user_minutes: f64,
    pub percent_of_average: i64,
    pub level: BenchmarkLevel,
    pub feedback: String,
    pub is_verified: bool,
}

/// 주간 이용 시간을 국내 평균과 비교한다. 기준 데이터가 없으면 `None`.
pub fn analyze_benchmark(service_name: &str, user_minutes: f64) -> Option<BenchmarkResult> {
    let bm = find_benchmark(service_name)?;
    let percent_of_average = if bm.average_weekly_minutes == 0.0 {
        0
    } else {
        round_won(user_minutes / bm.average_weekly_minutes * 100.0)
    };
    // 순서대로 첫 조건이 이긴다.
    let level = if user_minutes >= bm.heavy_user_minutes {
        BenchmarkLevel::Heavy
    } else if percent_of_average >= 80 {
        BenchmarkLevel::Average
    } else if percent_of_average >= 30 {
        BenchmarkLevel::Below
    } else {
        BenchmarkLevel::Minimal
    };
    Some(BenchmarkResult {
        service_name: bm.name,
        user_minutes,
        average_minutes: bm.average_weekly_minutes,
        heavy_user_minutes: bm.heavy_user_minutes,
        light_user_minutes: bm.light_user_minutes,
        percent_of_average,
        level,
        feedback: level.feedback(service_name.trim()),
        is_verified: bm.verified,
    })
}
