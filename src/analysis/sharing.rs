//! 가족/공유 요금제로 나눠 낼 때의 1인당 비용과 절감액.

use super::cost::monthly_price;
use crate::model::Subscription;
use crate::reference::services::find_family_plan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharingSavings {
    pub price_per_member: i64,
    /// 현재 요금 - 1인당 요금. 음수면 나눠 내는 쪽이 더 비싸다.
    pub savings: i64,
}

/// 공유 인원(최대 인원으로 제한)으로 가족 요금제를 나눴을 때의 절감액.
/// 인원이 0 이하이면 둘 다 0이다.
pub fn sharing_savings(
    current_price: i64,
    family_plan_price: i64,
    max_members: i32,
    actual_members: i32,
) -> SharingSavings {
    let effective_members = actual_members.min(max_members);
    if effective_members <= 0 {
        return SharingSavings {
            price_per_member: 0,
            savings: 0,
        };
    }
    let price_per_member = ceil_div(family_plan_price, i64::from(effective_members));
    SharingSavings {
        price_per_member,
        savings: current_price - price_per_member,
    }
}

/// 1인당 요금이 개인 요금보다 싸지려면 몇 명이 필요한지.
/// 개인 요금이 0 이하이면 손익분기가 없으므로 `f64::INFINITY`.
pub fn break_even_members(individual_price: i64, family_plan_price: i64) -> f64 {
    if individual_price <= 0 {
        return f64::INFINITY;
    }
    (family_plan_price as f64 / individual_price as f64).ceil()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharingOpportunity {
    pub subscription_id: String,
    pub subscription_name: String,
    pub current_price: i64,
    pub family_plan_name: &'static str,
    /// 월 환산 가족 요금
    pub family_plan_price: i64,
    pub max_members: u32,
    pub price_per_member: i64,
    pub savings_per_person: i64,
    pub yearly_savings: i64,
}

/// 아직 공유하지 않는 구독 중 가족 요금제로 바꾸면 이득인 것들을
/// 1인당 절감액이 큰 순으로 돌려준다. 절감액이 0 이하인 경우는 빠진다.
pub fn find_sharing_opportunities(subscriptions: &[Subscription]) -> Vec<SharingOpportunity> {
    let mut found: Vec<SharingOpportunity> = subscriptions
        .iter()
        .filter(|s| s.is_billable() && !s.is_shared)
        .filter_map(|s| {
            let plan = find_family_plan(&s.name)?;
            let family_monthly = monthly_price(plan.price, plan.cycle);
            let price_per_member = ceil_div(family_monthly, i64::from(plan.max_members.max(1)));
            let savings_per_person = s.monthly_price() - price_per_member;
            if savings_per_person <= 0 {
                return None;
            }
            Some(SharingOpportunity {
                subscription_id: s.id.clone(),
                subscription_name: s.name.clone(),
                current_price: s.monthly_price(),
                family_plan_name: plan.name,
                family_plan_price: family_monthly,
                max_members: plan.max_members,
                price_per_member,
                savings_per_person,
                yearly_savings: savings_per_person * 12,
            })
        })
        .collect();
    // sort_by는 안정 정렬이라 동률이면 입력 순서가 유지된다.
    found.sort_by(|a, b| b.savings_per_person.cmp(&a.savings_per_person));
    found
}

pub fn total_sharing_potential(opportunities: &[SharingOpportunity]) -> i64 {
    opportunities.iter().map(|o| o.savings_per_person).sum()
}

fn ceil_div(value: i64, divisor: i64) -> i64 {
    (value as f64 / divisor as f64).ceil() as i64
}
