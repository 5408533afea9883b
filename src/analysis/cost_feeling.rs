//! 구독료를 "하루 얼마" 감각으로 바꿔 보여주는 계산.

use super::cost::round_won;
use crate::reference::daily_items::daily_items;

/// 치킨 한 마리 기준가 [원]
pub const CHICKEN_PRICE: i64 = 20_000;
/// 커피 한 잔 기준가 [원]
pub const COFFEE_PRICE: i64 = 4_500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CostLevel {
    Free,
    Cheap,
    Moderate,
    Expensive,
    Premium,
}

impl CostLevel {
    pub fn label(&self) -> &'static str {
        match self {
            CostLevel::Free => "무료",
            CostLevel::Cheap => "가벼움",
            CostLevel::Moderate => "적당함",
            CostLevel::Expensive => "부담됨",
            CostLevel::Premium => "사치",
        }
    }

    /// 화면 색상 토큰
    pub fn color(&self) -> &'static str {
        match self {
            CostLevel::Free => "gray",
            CostLevel::Cheap => "green",
            CostLevel::Moderate => "blue",
            CostLevel::Expensive => "orange",
            CostLevel::Premium => "red",
        }
    }
}

pub fn daily_cost(monthly_price: i64) -> i64 {
    round_won(monthly_price as f64 / 30.0)
}

pub fn cost_level(daily_cost: i64) -> CostLevel {
    if daily_cost <= 0 {
        CostLevel::Free
    } else if daily_cost < 200 {
        CostLevel::Cheap
    } else if daily_cost < 500 {
        CostLevel::Moderate
    } else if daily_cost < 1_000 {
        CostLevel::Expensive
    } else {
        CostLevel::Premium
    }
}

#[derive(Debug, Clone)]
pub struct ItemComparison {
    pub item: &'static str,
    pub item_price: i64,
    /// 하루 비용 / 물건 가격
    pub ratio: f64,
    pub text: String,
}

/// 하루 비용과 가격 차이가 가장 작은 일상 물건과 비교한다.
/// 차이가 같으면 테이블에서 먼저 나온 물건을 고른다.
pub fn compare_with_daily_item(daily_cost: i64) -> Option<ItemComparison> {
    let item = daily_items()
        .iter()
        .min_by_key(|i| (i.price - daily_cost).abs())?;
    let ratio = if item.price > 0 {
        daily_cost as f64 / item.price as f64
    } else {
        0.0
    };
    let text = if (0.8..=1.2).contains(&ratio) {
        format!("{} 하나 정도예요", item.name)
    } else if ratio < 0.8 {
        format!("{}보다 저렴해요", item.name)
    } else {
        format!("{} {}개 값이에요", item.name, round_won(ratio))
    };
    Some(ItemComparison {
        item: item.name,
        item_price: item.price,
        ratio,
        text,
    })
}

#[derive(Debug, Clone)]
pub struct CostFeeling {
    pub monthly_price: i64,
    pub daily_cost: i64,
    pub level: CostLevel,
    pub label: &'static str,
    pub color: &'static str,
    pub comparison: Option<ItemComparison>,
}

pub fn cost_feeling(monthly_price: i64) -> CostFeeling {
    let daily = daily_cost(monthly_price);
    let level = cost_level(daily);
    CostFeeling {
        monthly_price,
        daily_cost: daily,
        level,
        label: level.label(),
        color: level.color(),
        comparison: compare_with_daily_item(daily),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalCostFeeling {
    pub monthly_total: i64,
    pub yearly_total: i64,
    pub chicken_count: i64,
    pub coffee_count: i64,
    pub message: String,
}

/// 전체 월 구독료를 치킨/커피 개수로 환산한다.
pub fn total_cost_feeling(monthly_total: i64) -> TotalCostFeeling {
    if monthly_total <= 0 {
        return TotalCostFeeling {
            monthly_total: 0,
            yearly_total: 0,
            chicken_count: 0,
            coffee_count: 0,
            message: "아직 등록된 구독이 없어요".to_string(),
        };
    }
    let chicken_count = monthly_total.div_euclid(CHICKEN_PRICE);
    let coffee_count = monthly_total.div_euclid(COFFEE_PRICE);
    TotalCostFeeling {
        monthly_total,
        yearly_total: monthly_total * 12,
        chicken_count,
        coffee_count,
        message: format!(
            "매달 치킨 {chicken_count}마리, 커피 {coffee_count}잔 값을 구독에 쓰고 있어요"
        ),
    }
}
