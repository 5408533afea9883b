use crate::model::Subscription;
use crate::reference::bundles::{bundle_deals, find_bundle, BundleDeal};
use crate::reference::matching::names_match;

#[derive(Debug, Clone)]
pub struct BundleMatch {
    pub bundle: &'static BundleDeal,
    pub matched_ids: Vec<String>,
    pub matched_names: Vec<String>,
    /// 매칭된 구독들의 월 요금 합
    pub current_total: i64,
    /// current_total - 번들 가격. 음수면 번들이 더 비싸다.
    pub monthly_savings: i64,
}

/// 번들 구성 서비스마다 아직 쓰이지 않은 첫 번째 구독을 짝지어 준다.
/// 하나의 구독은 한 번만 센다.
pub fn match_bundle(bundle: &'static BundleDeal, subscriptions: &[Subscription]) -> BundleMatch {
    let mut matched: Vec<&Subscription> = Vec::new();
    for service in bundle.included_services {
        let hit = subscriptions.iter().filter(|s| s.is_billable()).find(|s| {
            names_match(service, &s.name) && !matched.iter().any(|m| m.id == s.id)
        });
        if let Some(sub) = hit {
            matched.push(sub);
        }
    }
    let current_total: i64 = matched.iter().map(|s| s.monthly_price()).sum();
    BundleMatch {
        bundle,
        matched_ids: matched.iter().map(|s| s.id.clone()).collect(),
        matched_names: matched.iter().map(|s| s.name.clone()).collect(),
        current_total,
        monthly_savings: current_total - bundle.price,
    }
}

/// 지금 따로 내는 금액보다 싼 번들만 절감액이 큰 순서로 추천한다.
pub fn find_bundle_opportunities(subscriptions: &[Subscription]) -> Vec<BundleMatch> {
    let mut found: Vec<BundleMatch> = bundle_deals()
        .iter()
        .map(|b| match_bundle(b, subscriptions))
        .filter(|m| !m.matched_ids.is_empty() && m.bundle.price < m.current_total)
        .collect();
    found.sort_by(|a, b| b.monthly_savings.cmp(&a.monthly_savings));
    found
}

/// 특정 번들로 갈아탔을 때의 결과. 번들이 없거나 겹치는 구독이 없으면 `None`.
pub fn bundle_switch_savings(bundle_name: &str, subscriptions: &[Subscription]) -> Option<BundleMatch> {
    let bundle = find_bundle(bundle_name)?;
    let m = match_bundle(bundle, subscriptions);
    if m.matched_ids.is_empty() {
        None
    } else {
        Some(m)
    }
}
