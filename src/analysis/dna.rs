//! 카테고리 분포로 구독 성향("구독 DNA")을 분류한다.

use crate::model::{Category, Subscription};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DnaType {
    Minimalist,
    Entertainment,
    Maximalist,
    Techie,
    Productivity,
    Shopper,
    Balanced,
}

/// 유형별 고정 소개 문구.
#[derive(Debug)]
pub struct DnaProfile {
    pub dna_type: DnaType,
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub characteristics: [&'static str; 3],
    pub savings_tip: &'static str,
}

impl DnaType {
    pub fn profile(&self) -> &'static DnaProfile {
        let idx = match self {
            DnaType::Minimalist => 0,
            DnaType::Entertainment => 1,
            DnaType::Maximalist => 2,
            DnaType::Techie => 3,
            DnaType::Productivity => 4,
            DnaType::Shopper => 5,
            DnaType::Balanced => 6,
        };
        &PROFILES[idx]
    }
}

/// active/trial 구독만으로 유형을 정한다. 위에서부터 첫 규칙이 이긴다.
pub fn classify(subscriptions: &[Subscription]) -> DnaType {
    let live: Vec<&Subscription> = subscriptions.iter().filter(|s| s.is_billable()).collect();
    let total = live.len();
    if total == 0 || total <= 2 {
        return DnaType::Minimalist;
    }
    let count = |c: Category| live.iter().filter(|s| s.category == c).count();
    let entertainment = live.iter().filter(|s| s.category.is_entertainment()).count();
    let cloud = count(Category::Cloud);
    let productivity = count(Category::Productivity);
    let work = cloud + productivity;
    let ratio = |n: usize| n as f64 / total as f64;

    if total >= 6 {
        return if ratio(entertainment) >= 0.6 {
            DnaType::Entertainment
        } else {
            DnaType::Maximalist
        };
    }
    if entertainment >= 3 && ratio(entertainment) >= 0.5 {
        return DnaType::Entertainment;
    }
    if work >= 2 && ratio(work) >= 0.4 {
        return if cloud >= 1 && productivity >= 1 {
            DnaType::Techie
        } else {
            DnaType::Productivity
        };
    }
    if count(Category::Shopping) >= 2 {
        return DnaType::Shopper;
    }
    DnaType::Balanced
}

#[derive(Debug, Clone)]
pub struct DnaAnalysis {
    pub dna_type: DnaType,
    pub profile: &'static DnaProfile,
    pub active_count: usize,
    pub breakdown: Vec<CategoryStat>,
}

pub fn analyze_dna(subscriptions: &[Subscription]) -> DnaAnalysis {
    let dna_type = classify(subscriptions);
    DnaAnalysis {
        dna_type,
        profile: dna_type.profile(),
        active_count: subscriptions.iter().filter(|s| s.is_billable()).count(),
        breakdown: category_breakdown(subscriptions),
    }
}

/// 레이더 차트용 카테고리별 개수/월 지출.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStat {
    pub category: Category,
    pub count: usize,
    pub spend: i64,
}

/// 8개 카테고리 전부를 순서대로 돌려준다(없는 카테고리는 0).
pub fn category_breakdown(subscriptions: &[Subscription]) -> Vec<CategoryStat> {
    Category::ALL
        .iter()
        .map(|&category| {
            let subs = subscriptions
                .iter()
                .filter(|s| s.is_billable() && s.category == category);
            CategoryStat {
                category,
                count: subs.clone().count(),
                spend: subs.map(|s| s.monthly_price()).sum(),
            }
        })
        .collect()
}

static PROFILES: [DnaProfile; 7] = [
    DnaProfile {
        dna_type: DnaType::Minimalist,
        name: "미니멀리스트",
        emoji: "🌱",
        description: "꼭 필요한 구독만 남기는 절제파예요.",
        characteristics: [
            "구독 개수가 적어요",
            "새 서비스 가입에 신중해요",
            "고정 지출 관리가 잘 돼요",
        ],
        savings_tip: "연간 결제로 바꿀 수 있는 구독이 있는지 확인해 보세요.",
    },
    DnaProfile {
        dna_type: DnaType::Entertainment,
        name: "엔터테인먼트 러버",
        emoji: "🍿",
        description: "영상·음악·게임으로 여가를 채우는 즐거움 추구형이에요.",
        characteristics: [
            "OTT와 음악 구독이 많아요",
            "신작이 나오면 바로 챙겨봐요",
            "비슷한 서비스를 중복 구독하기 쉬워요",
        ],
        savings_tip: "보는 작품이 끝나면 OTT를 번갈아 구독해 보세요.",
    },
    DnaProfile {
        dna_type: DnaType::Maximalist,
        name: "맥시멀리스트",
        emoji: "🛍️",
        description: "여러 분야의 구독을 폭넓게 즐기는 수집가예요.",
        characteristics: [
            "구독이 6개 이상이에요",
            "분야를 가리지 않아요",
            "잊고 있는 구독이 있을 수 있어요",
        ],
        savings_tip: "한 달 동안 한 번도 안 쓴 구독부터 정리해 보세요.",
    },
    DnaProfile {
        dna_type: DnaType::Techie,
        name: "테크 얼리어답터",
        emoji: "💻",
        description: "클라우드와 생산성 도구를 함께 쓰는 디지털 작업형이에요.",
        characteristics: [
            "클라우드 저장 공간을 챙겨요",
            "업무 도구에 투자를 아끼지 않아요",
            "여러 기기를 넘나들며 작업해요",
        ],
        savings_tip: "클라우드와 오피스가 묶인 요금제가 있는지 확인해 보세요.",
    },
    DnaProfile {
        dna_type: DnaType::Productivity,
        name: "생산성 추구형",
        emoji: "📈",
        description: "일과 공부를 돕는 도구에 돈을 쓰는 실속파예요.",
        characteristics: [
            "업무·학습 도구 비중이 높아요",
            "효율을 중요하게 생각해요",
            "유료 기능을 적극 활용해요",
        ],
        savings_tip: "학생·팀 요금제나 연간 할인을 찾아보세요.",
    },
    DnaProfile {
        dna_type: DnaType::Shopper,
        name: "쇼핑 멤버십 수집가",
        emoji: "🛒",
        description: "배송·적립 혜택을 위해 멤버십을 모으는 혜택형이에요.",
        characteristics: [
            "쇼핑 멤버십이 2개 이상이에요",
            "무료 배송을 중요하게 생각해요",
            "적립 혜택을 꼼꼼히 챙겨요",
        ],
        savings_tip: "가장 자주 쓰는 쇼핑몰 멤버십 하나로 합쳐 보세요.",
    },
    DnaProfile {
        dna_type: DnaType::Balanced,
        name: "밸런스형",
        emoji: "⚖️",
        description: "여러 분야를 고르게 구독하는 균형 잡힌 사용자예요.",
        characteristics: [
            "특정 분야에 치우치지 않아요",
            "필요에 따라 구독을 바꿔요",
            "지출이 고르게 분산돼 있어요",
        ],
        savings_tip: "겹치는 기능이 있는 구독끼리 비교해 보세요.",
    },
];
