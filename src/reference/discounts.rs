/// 할인 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discount {
    /// 월 정액 할인 [원]
    Amount(i64),
    /// 월 요금의 백분율
    Percent(u8),
}

#[derive(Debug)]
pub struct DiscountEvent {
    pub name: &'static str,
    pub target_services: &'static [&'static str],
    pub discount: Discount,
    pub conditions: &'static str,
    /// 할인이 유지되는 개월 수
    pub duration_months: u32,
}

pub fn discount_events() -> &'static [DiscountEvent] {
    DISCOUNT_EVENTS
}

const DISCOUNT_EVENTS: &[DiscountEvent] = &[
    DiscountEvent {
        name: "통신사 VIP 넷플릭스 혜택",
        target_services: &["넷플릭스"],
        discount: Discount::Amount(5_500),
        conditions: "통신사 VIP 등급 이상",
        duration_months: 12,
    },
    DiscountEvent {
        name: "디즈니+ 연간 멤버십",
        target_services: &["디즈니+"],
        discount: Discount::Percent(16),
        conditions: "연간 결제로 전환 시",
        duration_months: 12,
    },
    DiscountEvent {
        name: "티빙 첫 달 반값",
        target_services: &["티빙"],
        discount: Discount::Percent(50),
        conditions: "신규 또는 6개월 이상 미이용 회원",
        duration_months: 1,
    },
    DiscountEvent {
        name: "스포티파이 프리미엄 체험",
        target_services: &["스포티파이"],
        discount: Discount::Percent(100),
        conditions: "프리미엄을 처음 이용하는 회원",
        duration_months: 3,
    },
    DiscountEvent {
        name: "KT 멤버십 밀리의 서재",
        target_services: &["밀리의 서재"],
        discount: Discount::Amount(3_000),
        conditions: "KT 멤버십 회원",
        duration_months: 6,
    },
    DiscountEvent {
        name: "네이버플러스 첫 달 무료",
        target_services: &["네이버플러스 멤버십"],
        discount: Discount::Percent(100),
        conditions: "신규 가입자",
        duration_months: 1,
    },
    DiscountEvent {
        name: "카드사 음악 스트리밍 할인",
        target_services: &["멜론", "지니뮤직", "유튜브 뮤직"],
        discount: Discount::Amount(2_000),
        conditions: "제휴 카드로 자동결제 시",
        duration_months: 12,
    },
];
