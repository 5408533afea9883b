//! 분당 비용, ROI 등급, 추천 정책.
mod common;

use chrono::NaiveDate;
use subscription_toolbox::analysis::roi::{
    analyze, analyze_all, cost_per_minute, potential_savings, recommend, roi_grade,
    sharing_available, Action, RoiGrade,
};
use subscription_toolbox::model::{Category, InputMethod, SubscriptionStatus, WeeklyUsage};

#[test]
fn zero_usage_is_infinite_cost() {
    assert_eq!(cost_per_minute(17_000, 0.0), f64::INFINITY);
    assert_eq!(cost_per_minute(17_000, -5.0), f64::INFINITY);
    assert_eq!(roi_grade(f64::INFINITY), RoiGrade::F);
    assert_eq!(roi_grade(f64::NAN), RoiGrade::F);
}

#[test]
fn cost_per_minute_uses_weeks_per_month() {
    let cpm = cost_per_minute(4_330, 100.0);
    assert!((cpm - 10.0).abs() < 1e-9);
}

#[test]
fn grade_boundaries() {
    assert_eq!(roi_grade(0.0), RoiGrade::A);
    assert_eq!(roi_grade(9.99), RoiGrade::A);
    assert_eq!(roi_grade(10.0), RoiGrade::B);
    assert_eq!(roi_grade(29.99), RoiGrade::B);
    assert_eq!(roi_grade(30.0), RoiGrade::C);
    assert_eq!(roi_grade(69.99), RoiGrade::C);
    assert_eq!(roi_grade(70.0), RoiGrade::D);
    assert_eq!(roi_grade(150.0), RoiGrade::D);
    assert_eq!(roi_grade(10_000.0), RoiGrade::D);
}

#[test]
fn recommendation_table() {
    let sub = common::monthly("넷플릭스", Category::Video, 17_000);
    assert_eq!(recommend(RoiGrade::A, &sub, true).action, Action::Keep);
    assert_eq!(recommend(RoiGrade::B, &sub, true).action, Action::Share);
    assert_eq!(recommend(RoiGrade::B, &sub, false).action, Action::Keep);
    assert_eq!(recommend(RoiGrade::C, &sub, true).action, Action::Share);
    assert_eq!(recommend(RoiGrade::C, &sub, false).action, Action::Downgrade);
    assert_eq!(recommend(RoiGrade::D, &sub, true).action, Action::Cancel);

    let f = recommend(RoiGrade::F, &sub, true);
    assert_eq!(f.action, Action::Cancel);
    assert!(f.reason.contains("17000"));
}

#[test]
fn already_shared_is_never_told_to_share() {
    let sub = common::shared("넷플릭스", Category::Video, 4_250, 4);
    assert_eq!(recommend(RoiGrade::B, &sub, true).action, Action::Keep);
    assert_eq!(recommend(RoiGrade::C, &sub, true).action, Action::Downgrade);
}

#[test]
fn savings_per_action() {
    assert_eq!(potential_savings(Action::Cancel, 17_000), 17_000);
    assert_eq!(potential_savings(Action::Downgrade, 17_000), 5_100);
    assert_eq!(potential_savings(Action::Share, 17_001), 8_501);
    assert_eq!(potential_savings(Action::Keep, 17_000), 0);
}

#[test]
fn analyze_unused_subscription() {
    let sub = common::monthly("넷플릭스", Category::Video, 17_000);
    let r = analyze(&sub, 0.0, true);
    assert_eq!(r.grade, RoiGrade::F);
    assert_eq!(r.recommendation, Action::Cancel);
    assert_eq!(r.cost_per_minute, 0.0);
    assert_eq!(r.monthly_usage_minutes, 0);
    assert_eq!(r.potential_savings, 17_000);
}

#[test]
fn analyze_grades_by_usage() {
    let sub = common::monthly("넷플릭스", Category::Video, 17_000);

    let heavy = analyze(&sub, 420.0, false);
    assert_eq!(heavy.grade, RoiGrade::A);
    assert_eq!(heavy.monthly_usage_minutes, 1_819);
    assert!((heavy.cost_per_minute - 9.3).abs() < 1e-9);

    assert_eq!(analyze(&sub, 200.0, false).grade, RoiGrade::B);

    let c = analyze(&sub, 100.0, true);
    assert_eq!(c.grade, RoiGrade::C);
    assert_eq!(c.recommendation, Action::Share);
    assert_eq!(c.potential_savings, 8_500);

    let c = analyze(&sub, 100.0, false);
    assert_eq!(c.recommendation, Action::Downgrade);
    assert_eq!(c.potential_savings, 5_100);

    assert_eq!(analyze(&sub, 10.0, false).grade, RoiGrade::D);
}

#[test]
fn sub_won_cost_per_minute_keeps_one_decimal() {
    let sub = common::monthly("넷플릭스", Category::Video, 17_000);
    let r = analyze(&sub, 10_080.0, false);
    assert_eq!(r.grade, RoiGrade::A);
    assert!((r.cost_per_minute - 0.4).abs() < 1e-9);

    let r = analyze(&sub, 100.0, false);
    assert!((r.cost_per_minute - 39.3).abs() < 1e-9);
}

#[test]
fn sharing_availability_from_presets() {
    assert!(sharing_available(&common::monthly("넷플릭스", Category::Video, 17_000)));
    assert!(sharing_available(&common::monthly("디즈니 플러스", Category::Video, 13_900)));
    assert!(!sharing_available(&common::monthly("멜론", Category::Music, 10_900)));
    assert!(!sharing_available(&common::monthly("동네 헬스장", Category::Other, 50_000)));
}

#[test]
fn analyze_all_uses_average_usage_of_billable_subscriptions() {
    let netflix = common::monthly("넷플릭스", Category::Video, 17_000);
    let melon = common::with_status("멜론", Category::Music, 10_900, SubscriptionStatus::Cancelled);
    let notion = common::with_status("노션", Category::Productivity, 14_000, SubscriptionStatus::Trial);
    let w1 = NaiveDate::from_ymd_opt(2026, 10, 5).expect("date");
    let w2 = NaiveDate::from_ymd_opt(2026, 10, 12).expect("date");
    let records = vec![
        WeeklyUsage::record(netflix.id.clone(), w1, 400, InputMethod::Manual).expect("record"),
        WeeklyUsage::record(netflix.id.clone(), w2, 440, InputMethod::Manual).expect("record"),
        WeeklyUsage::record(melon.id.clone(), w2, 600, InputMethod::Manual).expect("record"),
    ];
    let subs = vec![netflix, melon, notion];

    let results = analyze_all(&subs, &records, false);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].subscription_name, "넷플릭스");
    assert_eq!(results[0].grade, RoiGrade::A);
    assert_eq!(results[1].subscription_name, "노션");
    assert_eq!(results[1].grade, RoiGrade::F);
}

#[test]
fn assume_sharing_turns_downgrade_into_share() {
    let melon = common::monthly("멜론", Category::Music, 10_900);
    let w = NaiveDate::from_ymd_opt(2026, 10, 12).expect("date");
    let records = vec![WeeklyUsage::record(melon.id.clone(), w, 60, InputMethod::Feeling).expect("record")];
    let subs = vec![melon];
    assert_eq!(analyze_all(&subs, &records, false)[0].recommendation, Action::Downgrade);
    assert_eq!(analyze_all(&subs, &records, true)[0].recommendation, Action::Share);
}
