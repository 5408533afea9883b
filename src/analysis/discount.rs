use super::cost::round_won;
use crate::model::Subscription;
use crate::reference::discounts::{discount_events, Discount, DiscountEvent};
use crate::reference::matching::names_match;

#[derive(Debug, Clone)]
pub struct ApplicableDiscount {
    pub event: &'static DiscountEvent,
    pub subscription_id: String,
    pub subscription_name: String,
    pub monthly_discount: i64,
    /// 할인 기간 전체 절감액
    pub total_discount: i64,
}

/// 월 요금에 할인을 적용한 금액. 정액 할인은 월 요금을 넘지 않는다.
pub fn discount_amount(discount: Discount, monthly_price: i64) -> i64 {
    match discount {
        Discount::Amount(won) => won.min(monthly_price).max(0),
        Discount::Percent(p) => round_won(monthly_price as f64 * f64::from(p) / 100.0),
    }
}

/// 지금 구독 중인 서비스에 걸린 할인 이벤트를 할인액이 큰 순서로 찾는다.
pub fn find_applicable_discounts(subscriptions: &[Subscription]) -> Vec<ApplicableDiscount> {
    let mut found = Vec::new();
    for sub in subscriptions.iter().filter(|s| s.is_billable()) {
        for event in discount_events() {
            if !event.target_services.iter().any(|t| names_match(t, &sub.name)) {
                continue;
            }
            let monthly_discount = discount_amount(event.discount, sub.monthly_price());
            if monthly_discount <= 0 {
                continue;
            }
            found.push(ApplicableDiscount {
                event,
                subscription_id: sub.id.clone(),
                subscription_name: sub.name.clone(),
                monthly_discount,
                total_discount: monthly_discount * i64::from(event.duration_months),
            });
        }
    }
    found.sort_by(|a, b| b.monthly_discount.cmp(&a.monthly_discount));
    found
}
