use std::io::{self, Write};

use crate::analysis::benchmark::analyze_benchmark;
use crate::analysis::bundle::find_bundle_opportunities;
use crate::analysis::cost::{
    cancelled_monthly_savings, cost_by_category, cycle_savings, total_monthly_cost,
    total_yearly_cost,
};
use crate::analysis::cost_feeling::{cost_feeling, total_cost_feeling};
use crate::analysis::discount::find_applicable_discounts;
use crate::analysis::dna::analyze_dna;
use crate::analysis::opportunity_cost::{
    calculate_all_scenarios, find_scenario, time_series, MAX_YEARS, SCENARIOS,
};
use crate::analysis::roi::analyze_all;
use crate::analysis::sharing::{find_sharing_opportunities, total_sharing_potential};
use crate::app::AppError;
use crate::config::Config;
use crate::model::BillingCycle;
use crate::portfolio::Portfolio;
use crate::reference::services::find_service;
use crate::usage::{self, ImportOutcome};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Summary,
    Roi,
    Sharing,
    Bundles,
    Discounts,
    Invest,
    Dna,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== 구독 가계부 ===");
    println!("1) 지출 요약");
    println!("2) ROI 분석");
    println!("3) 공유 절약");
    println!("4) 번들 추천");
    println!("5) 할인 이벤트");
    println!("6) 기회비용 시뮬레이션");
    println!("7) 구독 DNA");
    println!("8) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Summary),
            "2" => return Ok(MenuChoice::Roi),
            "3" => return Ok(MenuChoice::Sharing),
            "4" => return Ok(MenuChoice::Bundles),
            "5" => return Ok(MenuChoice::Discounts),
            "6" => return Ok(MenuChoice::Invest),
            "7" => return Ok(MenuChoice::Dna),
            "8" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 천 단위 구분 기호를 넣은 원화 표기.
pub fn won(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if amount < 0 {
        format!("-{out}원")
    } else {
        format!("{out}원")
    }
}

pub fn print_summary(portfolio: &Portfolio) {
    let subs = &portfolio.subscriptions;
    println!("\n-- 지출 요약 --");
    if subs.is_empty() {
        println!("등록된 구독이 없습니다.");
        return;
    }
    let total = total_monthly_cost(subs);
    println!("월 합계: {}  /  연 합계: {}", won(total), won(total_yearly_cost(subs)));
    let saved = cancelled_monthly_savings(subs);
    if saved > 0 {
        println!("해지로 아끼는 중: 월 {}", won(saved));
    }
    println!("{}", total_cost_feeling(total).message);

    println!("\n[카테고리별]");
    for (category, spend) in cost_by_category(subs) {
        if spend > 0 {
            println!("  {:<6} {}", category.label(), won(spend));
        }
    }

    println!("\n[구독별 하루 비용]");
    for sub in subs.iter().filter(|s| s.is_billable()) {
        let feeling = cost_feeling(sub.monthly_price());
        let comparison = feeling
            .comparison
            .as_ref()
            .map(|c| c.text.as_str())
            .unwrap_or("");
        println!(
            "  {} 월 {} → 하루 {} [{}] {}",
            sub.name,
            won(sub.monthly_price()),
            won(feeling.daily_cost),
            feeling.label,
            comparison
        );
        if sub.billing_cycle() == BillingCycle::Monthly {
            let yearly_plan = find_service(&sub.name).and_then(|svc| {
                svc.plans
                    .iter()
                    .filter(|p| p.cycle == BillingCycle::Yearly)
                    .map(|p| p.price)
                    .min()
            });
            if let Some(yearly) = yearly_plan {
                let cs = cycle_savings(sub.monthly_price(), yearly);
                if cs.yearly_savings > 0 {
                    println!(
                        "    연간 결제 시 연 {} 절약 ({}%)",
                        won(cs.yearly_savings),
                        cs.percent_saved
                    );
                }
            }
        }
    }

    let orphans = usage::orphaned_records(&portfolio.usage, subs);
    if !orphans.is_empty() {
        println!("\n구독과 연결되지 않은 사용량 기록 {}건은 제외했습니다.", orphans.len());
    }
}

pub fn print_roi(portfolio: &Portfolio, cfg: &Config) {
    println!("\n-- ROI 분석 --");
    let analyses = analyze_all(
        &portfolio.subscriptions,
        &portfolio.usage,
        cfg.sharing.assume_available,
    );
    if analyses.is_empty() {
        println!("분석할 구독이 없습니다.");
        return;
    }
    for a in &analyses {
        println!(
            "[{}] {} 월 {} | 분당 {:.1}원 | 월 {}분",
            a.grade,
            a.subscription_name,
            won(a.monthly_price),
            a.cost_per_minute,
            a.monthly_usage_minutes
        );
        println!("    추천: {} - {}", a.recommendation.label(), a.reason);
        if a.potential_savings > 0 {
            println!("    예상 절감: 월 {}", won(a.potential_savings));
        }
        let weekly = usage::average_weekly_minutes(&portfolio.usage, &a.subscription_id)
            .unwrap_or(0.0);
        if let Some(bm) = analyze_benchmark(&a.subscription_name, weekly) {
            let mark = if bm.is_verified { "" } else { " (추정치)" };
            println!(
                "    평균 대비 {}% [{}]{} {}",
                bm.percent_of_average,
                bm.level.label(),
                mark,
                bm.feedback
            );
        }
    }
    let total: i64 = analyses.iter().map(|a| a.potential_savings).sum();
    println!("\n추천대로 하면 매달 최대 {}을 아낄 수 있어요.", won(total));
}

/// ROI 추천을 모두 따랐을 때의 월 절감액 합계.
pub fn recommended_monthly_saving(portfolio: &Portfolio, cfg: &Config) -> i64 {
    analyze_all(
        &portfolio.subscriptions,
        &portfolio.usage,
        cfg.sharing.assume_available,
    )
    .iter()
    .map(|a| a.potential_savings)
    .sum()
}

pub fn print_sharing(portfolio: &Portfolio) {
    println!("\n-- 공유 절약 --");
    let opportunities = find_sharing_opportunities(&portfolio.subscriptions);
    if opportunities.is_empty() {
        println!("공유로 아낄 수 있는 구독이 없습니다.");
        return;
    }
    for o in &opportunities {
        println!(
            "{}: 지금 {} → {} {}명 공유 시 1인 {} (월 {} 절약, 연 {})",
            o.subscription_name,
            won(o.current_price),
            o.family_plan_name,
            o.max_members,
            won(o.price_per_member),
            won(o.savings_per_person),
            won(o.yearly_savings)
        );
    }
    println!(
        "공유로 매달 최대 {} 절약 가능",
        won(total_sharing_potential(&opportunities))
    );
}

pub fn print_bundles(portfolio: &Portfolio) {
    println!("\n-- 번들 추천 --");
    let bundles = find_bundle_opportunities(&portfolio.subscriptions);
    if bundles.is_empty() {
        println!("지금 구독 조합에 더 저렴한 번들이 없습니다.");
        return;
    }
    for b in &bundles {
        println!(
            "{} ({}) {}: {} 대신 → 월 {} 절약",
            b.bundle.name,
            b.bundle.provider,
            won(b.bundle.price),
            b.matched_names.join(" + "),
            won(b.monthly_savings)
        );
    }
}

pub fn print_discounts(portfolio: &Portfolio) {
    println!("\n-- 할인 이벤트 --");
    let discounts = find_applicable_discounts(&portfolio.subscriptions);
    if discounts.is_empty() {
        println!("적용 가능한 할인이 없습니다.");
        return;
    }
    for d in &discounts {
        println!(
            "{} → {}: 월 {} 할인, {}개월간 {} ({})",
            d.subscription_name,
            d.event.name,
            won(d.monthly_discount),
            d.event.duration_months,
            won(d.total_discount),
            d.event.conditions
        );
    }
}

pub fn print_investment(monthly_saving: i64, years: u32, cfg: &Config) {
    println!("\n-- 기회비용: 매달 {}을 {}년 투자하면 --", won(monthly_saving), years);
    for r in calculate_all_scenarios(monthly_saving, years) {
        let marker = if r.scenario.id == cfg.investment.scenario {
            "*"
        } else {
            " "
        };
        println!(
            "{marker} {:<8} ({:.1}%): 원금 {} → {} (수익 {})",
            r.scenario.name,
            r.scenario.annual_rate * 100.0,
            won(r.result.total_invested),
            won(r.result.total_value),
            won(r.result.total_return)
        );
    }
    if let Some(scenario) = find_scenario(&cfg.investment.scenario) {
        println!("\n[{} 연도별]", scenario.name);
        for p in time_series(monthly_saving, years, scenario.annual_rate) {
            println!("  {:>2}년차: 원금 {} / 평가액 {}", p.year, won(p.invested), won(p.value));
        }
    }
}

/// 기회비용 메뉴를 처리한다.
pub fn handle_investment(portfolio: &Portfolio, cfg: &Config) -> Result<(), AppError> {
    let suggested = recommended_monthly_saving(portfolio, cfg);
    println!("\n추천 절감액 기준 월 {} (엔터 시 사용)", won(suggested));
    let monthly = read_i64_or("매달 아낄 금액 [원]: ", suggested)?;
    let years = read_i64_or("투자 기간 [년]: ", i64::from(cfg.investment.years))?;
    let years = u32::try_from(years.clamp(0, i64::from(MAX_YEARS))).unwrap_or(cfg.investment.years);
    print_investment(monthly, years, cfg);
    Ok(())
}

pub fn print_dna(portfolio: &Portfolio) {
    let dna = analyze_dna(&portfolio.subscriptions);
    let p = dna.profile;
    println!("\n-- 구독 DNA --");
    println!("{} {} ({}개 구독)", p.emoji, p.name, dna.active_count);
    println!("{}", p.description);
    for c in p.characteristics {
        println!("  · {c}");
    }
    println!("절약 팁: {}", p.savings_tip);
    println!("\n[카테고리 분포]");
    for stat in &dna.breakdown {
        println!(
            "  {:<6} {}개  {}",
            stat.category.label(),
            stat.count,
            won(stat.spend)
        );
    }
}

pub fn print_import(outcome: &ImportOutcome) {
    println!("가져온 주간 기록: {}건", outcome.records.len());
    if !outcome.unmatched.is_empty() {
        println!("매칭되지 않은 앱: {}", outcome.unmatched.join(", "));
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!(
        "현재 투자 기간: {}년, 기본 시나리오: {}, 공유 가능 가정: {}",
        cfg.investment.years, cfg.investment.scenario, cfg.sharing.assume_available
    );
    let years = read_i64_or("투자 기간 [년] (엔터 시 유지): ", i64::from(cfg.investment.years))?;
    if (1..=i64::from(MAX_YEARS)).contains(&years) {
        cfg.investment.years = years as u32;
    } else {
        println!("1~{MAX_YEARS}년 범위가 아니므로 변경하지 않습니다.");
    }
    let ids: Vec<&str> = SCENARIOS.iter().map(|s| s.id).collect();
    println!("시나리오: {}", ids.join(", "));
    let sel = read_line("기본 시나리오 (엔터 시 유지): ")?;
    let sel = sel.trim();
    if !sel.is_empty() {
        match find_scenario(sel) {
            Some(s) => cfg.investment.scenario = s.id.to_string(),
            None => println!("알 수 없는 시나리오이므로 변경하지 않습니다."),
        }
    }
    let share = read_line("공유 가능 가정 (y/n, 엔터 시 유지): ")?;
    match share.trim() {
        "y" | "Y" => cfg.sharing.assume_available = true,
        "n" | "N" => cfg.sharing.assume_available = false,
        _ => {}
    }
    println!("설정이 저장되었습니다.");
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_i64_or(prompt: &str, default: i64) -> Result<i64, AppError> {
    loop {
        let s = read_line(prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.replace(',', "").parse::<i64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}
