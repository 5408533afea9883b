//! 데이터 파일과 설정 파일 입출력.
use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Deserialize;

use subscription_toolbox::analysis::cost::total_monthly_cost;
use subscription_toolbox::config::{self, Config, ConfigError};
use subscription_toolbox::model::{
    BillingCycle, Category, InputMethod, Subscription, SubscriptionDraft, SubscriptionStatus,
    UsageImportRow, ValidationError, WeeklyUsage,
};
use subscription_toolbox::portfolio::{Portfolio, PortfolioError};
use subscription_toolbox::usage::import_rows;
use tempfile::tempdir;

const SAMPLE: &str = r#"
[[subscriptions]]
name = "넷플릭스"
category = "video"
billing_cycle = "monthly"
price = 17000

[[subscriptions]]
name = "디즈니+"
category = "video"
billing_cycle = "yearly"
price = 139000
status = "trial"

[[subscriptions]]
name = "멜론"
category = "music"
billing_cycle = "monthly"
price = 10900
status = "cancelled"

[[usage]]
subscription = "넷플릭스"
week_start = "2026-10-12"
minutes = 420

[[usage]]
subscription = "디즈니+"
week_start = "2026-10-12"
minutes = 120
method = "feeling"
"#;

#[test]
fn parse_sample_portfolio() {
    let p = Portfolio::parse(SAMPLE).expect("parse");
    assert_eq!(p.subscriptions.len(), 3);
    assert_eq!(p.subscriptions[1].monthly_price(), 11_583);
    assert_eq!(p.subscriptions[1].status, SubscriptionStatus::Trial);
    assert_eq!(p.subscriptions[2].status, SubscriptionStatus::Cancelled);
    assert_eq!(total_monthly_cost(&p.subscriptions), 17_000 + 11_583);

    assert_eq!(p.usage.len(), 2);
    assert_eq!(p.usage[0].subscription_id, p.subscriptions[0].id);
    assert_eq!(p.usage[1].input_method, InputMethod::Feeling);
    assert_eq!(p.usage[0].input_method, InputMethod::Manual);
}

#[test]
fn invalid_entries_are_rejected() {
    let bad_price = r#"
[[subscriptions]]
name = "넷플릭스"
category = "video"
billing_cycle = "monthly"
price = -1
"#;
    match Portfolio::parse(bad_price) {
        Err(PortfolioError::Invalid { name, source }) => {
            assert_eq!(name, "넷플릭스");
            assert_eq!(source, ValidationError::PriceOutOfRange(-1));
        }
        other => panic!("unexpected: {other:?}"),
    }

    let unknown = r#"
[[usage]]
subscription = "왓챠"
week_start = "2026-10-12"
minutes = 10
"#;
    assert!(matches!(
        Portfolio::parse(unknown),
        Err(PortfolioError::UnknownSubscription(name)) if name == "왓챠"
    ));

    let too_long = r#"
[[subscriptions]]
name = "넷플릭스"
category = "video"
billing_cycle = "monthly"
price = 17000

[[usage]]
subscription = "넷플릭스"
week_start = "2026-10-12"
minutes = 20000
"#;
    assert!(matches!(
        Portfolio::parse(too_long),
        Err(PortfolioError::Invalid { .. })
    ));
}

#[test]
fn save_and_reload_keeps_ids() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("subscriptions.toml");
    let p = Portfolio::parse(SAMPLE).expect("parse");
    p.save(&path).expect("save");

    let back = Portfolio::load(&path).expect("load");
    let ids: Vec<&str> = back.subscriptions.iter().map(|s| s.id.as_str()).collect();
    let orig: Vec<&str> = p.subscriptions.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, orig);
    assert_eq!(back.usage, p.usage);
}

#[test]
fn missing_data_file_is_empty() {
    let dir = tempdir().expect("tempdir");
    let p = Portfolio::load(&dir.path().join("none.toml")).expect("load");
    assert!(p.subscriptions.is_empty());
    assert!(p.usage.is_empty());
}

#[test]
fn config_is_created_with_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = config::load_or_default(&path).expect("config");
    assert!(path.exists());
    assert_eq!(cfg.investment.years, 10);
    assert_eq!(cfg.investment.scenario, "sp500");
    assert!(!cfg.sharing.assume_available);

    let mut changed = cfg.clone();
    changed.investment.years = 5;
    changed.sharing.assume_available = true;
    changed.save(&path).expect("save");
    let back = config::load_or_default(&path).expect("reload");
    assert_eq!(back.investment.years, 5);
    assert!(back.sharing.assume_available);
}

#[test]
fn partial_config_fills_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[investment]\nyears = 3\n").expect("write");
    let cfg = config::load_or_default(&path).expect("config");
    assert_eq!(cfg.investment.years, 3);
    assert_eq!(cfg.investment.scenario, "sp500");
    assert_eq!(cfg.data_path, Config::default().data_path);
}

#[test]
fn unknown_scenario_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[investment]\nscenario = \"lottery\"\n").expect("write");
    assert!(matches!(
        config::load_or_default(&path),
        Err(ConfigError::UnknownScenario(s)) if s == "lottery"
    ));
}

fn netflix_with_id(id: &str) -> Subscription {
    let mut draft = SubscriptionDraft::new("넷플릭스", Category::Video, BillingCycle::Monthly, 17_000);
    draft.id = Some(id.to_string());
    Subscription::create(draft).expect("create")
}

#[test]
fn same_name_subscriptions_keep_their_own_usage() {
    let week = NaiveDate::from_ymd_opt(2026, 10, 12).expect("date");
    let p = Portfolio {
        subscriptions: vec![netflix_with_id("a"), netflix_with_id("b")],
        usage: vec![WeeklyUsage::record("b", week, 300, InputMethod::Manual).expect("record")],
    };
    let back = Portfolio::parse(&p.to_toml_string().expect("serialize")).expect("parse");
    assert_eq!(back.usage.len(), 1);
    assert_eq!(back.usage[0].subscription_id, "b");
}

#[test]
fn usage_without_id_binds_by_name() {
    let content = r#"
[[subscriptions]]
id = "n1"
name = "넷플릭스"
category = "video"
billing_cycle = "monthly"
price = 17000

[[usage]]
subscription = "넷플릭스"
subscription_id = "gone"
week_start = "2026-10-12"
minutes = 60
"#;
    let p = Portfolio::parse(content).expect("parse");
    assert_eq!(p.usage[0].subscription_id, "n1");
}

fn demo_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join(file)
}

#[derive(Deserialize)]
struct ImportRows {
    rows: Vec<UsageImportRow>,
}

#[test]
fn demo_files_follow_the_schema() {
    let p = Portfolio::load(&demo_path("subscriptions.toml")).expect("demo portfolio");
    assert_eq!(p.subscriptions.len(), 6);
    assert_eq!(p.usage.len(), 4);
    assert_eq!(p.subscriptions[4].monthly_price(), 7_417);

    let content = fs::read_to_string(demo_path("usage_rows.toml")).expect("read rows");
    let file: ImportRows = toml::from_str(&content).expect("parse rows");
    assert_eq!(file.rows.len(), 3);
    let outcome = import_rows(&file.rows, &p.subscriptions);
    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.unmatched, vec!["Spotify".to_string()]);
}
