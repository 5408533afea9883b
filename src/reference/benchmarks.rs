use super::matching::resolve;

/// 서비스별 국내 이용자 주간 평균 이용 시간 [분/주].
#[derive(Debug)]
pub struct UsageBenchmark {
    pub name: &'static str,
    pub average_weekly_minutes: f64,
    pub heavy_user_minutes: f64,
    pub light_user_minutes: f64,
    /// 공개 조사 자료로 확인된 값이면 true, 유사 서비스에서 추정한 값이면 false.
    pub verified: bool,
}

pub fn benchmarks() -> &'static [UsageBenchmark] {
    BENCHMARKS
}

pub fn find_benchmark(name: &str) -> Option<&'static UsageBenchmark> {
    resolve(BENCHMARKS, |b| b.name, name)
}

const fn bm(
    name: &'static str,
    average_weekly_minutes: f64,
    heavy_user_minutes: f64,
    light_user_minutes: f64,
    verified: bool,
) -> UsageBenchmark {
    UsageBenchmark {
        name,
        average_weekly_minutes,
        heavy_user_minutes,
        light_user_minutes,
        verified,
    }
}

// 클라우드/쇼핑 멤버십은 "이용 시간" 개념이 약해 넣지 않는다.
const BENCHMARKS: &[UsageBenchmark] = &[
    bm("넷플릭스", 420.0, 840.0, 120.0, true),
    bm("유튜브 프리미엄", 630.0, 1_260.0, 180.0, true),
    bm("디즈니+", 240.0, 600.0, 60.0, false),
    bm("티빙", 300.0, 720.0, 90.0, true),
    bm("웨이브", 270.0, 660.0, 80.0, true),
    bm("쿠팡플레이", 180.0, 480.0, 60.0, false),
    bm("왓챠", 210.0, 540.0, 60.0, false),
    bm("스포티파이", 450.0, 900.0, 150.0, false),
    bm("멜론", 480.0, 960.0, 150.0, true),
    bm("지니뮤직", 360.0, 840.0, 120.0, false),
    bm("애플뮤직", 420.0, 900.0, 120.0, false),
    bm("유튜브 뮤직", 450.0, 900.0, 150.0, false),
    bm("마이크로소프트 365", 300.0, 900.0, 60.0, false),
    bm("노션", 240.0, 720.0, 60.0, false),
    bm("ChatGPT Plus", 210.0, 600.0, 60.0, false),
    bm("닌텐도 스위치 온라인", 360.0, 840.0, 120.0, false),
    bm("Xbox 게임 패스", 420.0, 1_050.0, 120.0, false),
    bm("밀리의 서재", 180.0, 420.0, 60.0, true),
    bm("리디셀렉트", 150.0, 360.0, 45.0, false),
];
