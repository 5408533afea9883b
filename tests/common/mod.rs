//! 통합 테스트용 구독 생성 헬퍼.
#![allow(dead_code)]

use subscription_toolbox::model::{
    BillingCycle, Category, Subscription, SubscriptionDraft, SubscriptionStatus,
};

pub fn monthly(name: &str, category: Category, price: i64) -> Subscription {
    Subscription::create(SubscriptionDraft::new(name, category, BillingCycle::Monthly, price))
        .expect("valid subscription")
}

pub fn yearly(name: &str, category: Category, price: i64) -> Subscription {
    Subscription::create(SubscriptionDraft::new(name, category, BillingCycle::Yearly, price))
        .expect("valid subscription")
}

pub fn with_status(name: &str, category: Category, price: i64, status: SubscriptionStatus) -> Subscription {
    Subscription::create(
        SubscriptionDraft::new(name, category, BillingCycle::Monthly, price).with_status(status),
    )
    .expect("valid subscription")
}

pub fn shared(name: &str, category: Category, price: i64, count: u32) -> Subscription {
    Subscription::create(
        SubscriptionDraft::new(name, category, BillingCycle::Monthly, price).shared_with(count),
    )
    .expect("valid subscription")
}
