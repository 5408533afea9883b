//! 국내 평균 이용 시간 대비 비교.
use subscription_toolbox::analysis::benchmark::{analyze_benchmark, BenchmarkLevel};
use subscription_toolbox::reference::benchmarks::find_benchmark;

#[test]
fn netflix_levels() {
    let heavy = analyze_benchmark("넷플릭스", 850.0).expect("benchmark");
    assert_eq!(heavy.level, BenchmarkLevel::Heavy);
    assert!(heavy.is_verified);

    let avg = analyze_benchmark("넷플릭스", 336.0).expect("benchmark");
    assert_eq!(avg.percent_of_average, 80);
    assert_eq!(avg.level, BenchmarkLevel::Average);

    let below = analyze_benchmark("넷플릭스", 126.0).expect("benchmark");
    assert_eq!(below.percent_of_average, 30);
    assert_eq!(below.level, BenchmarkLevel::Below);

    let none = analyze_benchmark("넷플릭스", 0.0).expect("benchmark");
    assert_eq!(none.percent_of_average, 0);
    assert_eq!(none.level, BenchmarkLevel::Minimal);
}

#[test]
fn heavy_threshold_is_checked_before_percent() {
    let r = analyze_benchmark("넷플릭스", 840.0).expect("benchmark");
    assert_eq!(r.percent_of_average, 200);
    assert_eq!(r.level, BenchmarkLevel::Heavy);
    let r = analyze_benchmark("넷플릭스", 839.0).expect("benchmark");
    assert_eq!(r.level, BenchmarkLevel::Average);
}

#[test]
fn fuzzy_service_names() {
    let r = analyze_benchmark("디즈니 플러스", 240.0).expect("benchmark");
    assert_eq!(r.service_name, "디즈니+");
    assert_eq!(r.percent_of_average, 100);
    assert!(!r.is_verified);

    let r = analyze_benchmark("넷플릭스 프리미엄", 420.0).expect("benchmark");
    assert_eq!(r.service_name, "넷플릭스");
    assert!(r.feedback.contains("넷플릭스 프리미엄"));
}

#[test]
fn unknown_service_has_no_data() {
    assert!(analyze_benchmark("동네 헬스장", 100.0).is_none());
    assert!(analyze_benchmark("", 100.0).is_none());
    assert!(find_benchmark("   ").is_none());
}

#[test]
fn exact_key_beats_substring() {
    let bm = find_benchmark("유튜브 뮤직").expect("benchmark");
    assert_eq!(bm.name, "유튜브 뮤직");
    let bm = find_benchmark("유튜브").expect("benchmark");
    assert_eq!(bm.name, "유튜브 프리미엄");
}
