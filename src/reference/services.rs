use super::matching::resolve;
use crate::model::{BillingCycle, Category};

#[derive(Debug, Clone, Copy)]
pub struct PlanPreset {
    pub name: &'static str,
    pub price: i64,
    pub cycle: BillingCycle,
}

/// 여러 명이 함께 쓰는 요금제.
#[derive(Debug, Clone, Copy)]
pub struct FamilyPlan {
    pub name: &'static str,
    pub price: i64,
    pub cycle: BillingCycle,
    pub max_members: u32,
}

#[derive(Debug)]
pub struct ServicePreset {
    pub name: &'static str,
    pub category: Category,
    pub icon: &'static str,
    pub plans: &'static [PlanPreset],
    pub family_plan: Option<FamilyPlan>,
}

pub fn services() -> &'static [ServicePreset] {
    SERVICES
}

pub fn find_service(name: &str) -> Option<&'static ServicePreset> {
    resolve(SERVICES, |s| s.name, name)
}

/// 이름에 해당하는 가족/공유 요금제. 프리셋이 없거나 공유 요금제가 없으면 `None`.
pub fn find_family_plan(name: &str) -> Option<FamilyPlan> {
    find_service(name).and_then(|s| s.family_plan)
}

const fn monthly(name: &'static str, price: i64) -> PlanPreset {
    PlanPreset {
        name,
        price,
        cycle: BillingCycle::Monthly,
    }
}

const fn yearly(name: &'static str, price: i64) -> PlanPreset {
    PlanPreset {
        name,
        price,
        cycle: BillingCycle::Yearly,
    }
}

const fn family(
    name: &'static str,
    price: i64,
    cycle: BillingCycle,
    max_members: u32,
) -> Option<FamilyPlan> {
    Some(FamilyPlan {
        name,
        price,
        cycle,
        max_members,
    })
}

const SERVICES: &[ServicePreset] = &[
    // 영상
    ServicePreset {
        name: "넷플릭스",
        category: Category::Video,
        icon: "🎬",
        plans: &[
            monthly("광고형 스탠다드", 5_500),
            monthly("스탠다드", 13_500),
            monthly("프리미엄", 17_000),
        ],
        family_plan: family("프리미엄", 17_000, BillingCycle::Monthly, 4),
    },
    ServicePreset {
        name: "유튜브 프리미엄",
        category: Category::Video,
        icon: "▶️",
        plans: &[monthly("개인", 14_900)],
        family_plan: None,
    },
    ServicePreset {
        name: "디즈니+",
        category: Category::Video,
        icon: "🏰",
        plans: &[
            monthly("스탠다드", 9_900),
            monthly("프리미엄", 13_900),
            yearly("프리미엄 연간", 139_000),
        ],
        family_plan: family("프리미엄", 13_900, BillingCycle::Monthly, 4),
    },
    ServicePreset {
        name: "티빙",
        category: Category::Video,
        icon: "📺",
        plans: &[
            monthly("광고형 스탠다드", 5_500),
            monthly("베이직", 9_500),
            monthly("스탠다드", 13_500),
            monthly("프리미엄", 17_000),
        ],
        family_plan: family("프리미엄", 17_000, BillingCycle::Monthly, 4),
    },
    ServicePreset {
        name: "웨이브",
        category: Category::Video,
        icon: "🌊",
        plans: &[
            monthly("베이직", 7_900),
            monthly("스탠다드", 10_900),
            monthly("프리미엄", 13_900),
        ],
        family_plan: family("프리미엄", 13_900, BillingCycle::Monthly, 4),
    },
    ServicePreset {
        name: "쿠팡플레이",
        category: Category::Video,
        icon: "🏈",
        plans: &[monthly("와우 멤버십 포함", 7_890)],
        family_plan: None,
    },
    ServicePreset {
        name: "왓챠",
        category: Category::Video,
        icon: "🍿",
        plans: &[monthly("베이직", 7_900), monthly("프리미엄", 12_900)],
        family_plan: family("프리미엄", 12_900, BillingCycle::Monthly, 4),
    },
    // 음악
    ServicePreset {
        name: "스포티파이",
        category: Category::Music,
        icon: "🎧",
        plans: &[monthly("개인", 10_900), monthly("듀오", 16_350)],
        family_plan: family("듀오", 16_350, BillingCycle::Monthly, 2),
    },
    ServicePreset {
        name: "멜론",
        category: Category::Music,
        icon: "🍈",
        plans: &[monthly("스트리밍 클럽", 10_900)],
        family_plan: None,
    },
    ServicePreset {
        name: "지니뮤직",
        category: Category::Music,
        icon: "🧞",
        plans: &[monthly("스마트 음악감상", 8_400)],
        family_plan: None,
    },
    ServicePreset {
        name: "애플뮤직",
        category: Category::Music,
        icon: "🎵",
        plans: &[monthly("개인", 11_000), monthly("가족", 16_900)],
        family_plan: family("가족", 16_900, BillingCycle::Monthly, 6),
    },
    ServicePreset {
        name: "유튜브 뮤직",
        category: Category::Music,
        icon: "🎶",
        plans: &[monthly("개인", 11_990)],
        family_plan: None,
    },
    // 클라우드
    ServicePreset {
        name: "아이클라우드+",
        category: Category::Cloud,
        icon: "☁️",
        plans: &[
            monthly("50GB", 1_100),
            monthly("200GB", 4_400),
            monthly("2TB", 14_000),
        ],
        family_plan: family("200GB 가족 공유", 4_400, BillingCycle::Monthly, 6),
    },
    ServicePreset {
        name: "구글 원",
        category: Category::Cloud,
        icon: "💾",
        plans: &[
            monthly("100GB", 2_400),
            monthly("2TB", 11_900),
            yearly("2TB 연간", 119_000),
        ],
        family_plan: family("2TB 가족 공유", 11_900, BillingCycle::Monthly, 6),
    },
    ServicePreset {
        name: "네이버 MYBOX",
        category: Category::Cloud,
        icon: "📦",
        plans: &[monthly("30GB", 3_000), monthly("2TB", 10_000)],
        family_plan: None,
    },
    // 생산성
    ServicePreset {
        name: "마이크로소프트 365",
        category: Category::Productivity,
        icon: "📊",
        plans: &[yearly("Personal", 89_000), yearly("Family", 119_000)],
        family_plan: family("Family", 119_000, BillingCycle::Yearly, 6),
    },
    ServicePreset {
        name: "노션",
        category: Category::Productivity,
        icon: "📝",
        plans: &[monthly("플러스", 14_000)],
        family_plan: None,
    },
    ServicePreset {
        name: "ChatGPT Plus",
        category: Category::Productivity,
        icon: "🤖",
        plans: &[monthly("Plus", 29_000)],
        family_plan: None,
    },
    // 쇼핑
    ServicePreset {
        name: "쿠팡 와우",
        category: Category::Shopping,
        icon: "🚀",
        plans: &[monthly("와우 멤버십", 7_890)],
        family_plan: None,
    },
    ServicePreset {
        name: "네이버플러스 멤버십",
        category: Category::Shopping,
        icon: "🟢",
        plans: &[monthly("월간", 4_900), yearly("연간", 46_800)],
        family_plan: family("가족 공유", 4_900, BillingCycle::Monthly, 4),
    },
    ServicePreset {
        name: "배민클럽",
        category: Category::Shopping,
        icon: "🛵",
        plans: &[monthly("월간", 3_990)],
        family_plan: None,
    },
    ServicePreset {
        name: "컬리멤버스",
        category: Category::Shopping,
        icon: "🥬",
        plans: &[monthly("월간", 1_900)],
        family_plan: None,
    },
    // 게임
    ServicePreset {
        name: "닌텐도 스위치 온라인",
        category: Category::Gaming,
        icon: "🎮",
        plans: &[yearly("개인 12개월", 19_900), yearly("패밀리 12개월", 34_900)],
        family_plan: family("패밀리 12개월", 34_900, BillingCycle::Yearly, 8),
    },
    ServicePreset {
        name: "Xbox 게임 패스",
        category: Category::Gaming,
        icon: "🟩",
        plans: &[monthly("코어", 7_900), monthly("얼티밋", 16_700)],
        family_plan: None,
    },
    ServicePreset {
        name: "PlayStation Plus",
        category: Category::Gaming,
        icon: "🕹️",
        plans: &[
            monthly("에센셜", 7_500),
            monthly("스페셜", 11_800),
            monthly("디럭스", 13_400),
        ],
        family_plan: None,
    },
    // 독서
    ServicePreset {
        name: "밀리의 서재",
        category: Category::Reading,
        icon: "📚",
        plans: &[monthly("월 구독", 9_900)],
        family_plan: None,
    },
    ServicePreset {
        name: "리디셀렉트",
        category: Category::Reading,
        icon: "📖",
        plans: &[monthly("월 구독", 4_900)],
        family_plan: None,
    },
    ServicePreset {
        name: "윌라",
        category: Category::Reading,
        icon: "🎙️",
        plans: &[monthly("오디오북", 9_900)],
        family_plan: None,
    },
];
