use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{self, ValidationError};
use crate::analysis::cost::monthly_price;

/// 구독 서비스 분류. 순서는 화면 표시 순서와 같다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Video,
    Music,
    Cloud,
    Productivity,
    Shopping,
    Gaming,
    Reading,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Video,
        Category::Music,
        Category::Cloud,
        Category::Productivity,
        Category::Shopping,
        Category::Gaming,
        Category::Reading,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Video => "영상",
            Category::Music => "음악",
            Category::Cloud => "클라우드",
            Category::Productivity => "생산성",
            Category::Shopping => "쇼핑",
            Category::Gaming => "게임",
            Category::Reading => "독서",
            Category::Other => "기타",
        }
    }

    /// 영상/음악/게임은 DNA 분류에서 하나의 "엔터테인먼트" 묶음으로 센다.
    pub fn is_entertainment(&self) -> bool {
        matches!(self, Category::Video | Category::Music | Category::Gaming)
    }
}

/// 결제 주기.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

/// 구독 상태. active/trial만 비용 집계와 분석 대상이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    #[default]
    Active,
    Trial,
    Paused,
    Cancelled,
}

impl SubscriptionStatus {
    pub fn is_billable(&self) -> bool {
        matches!(self, SubscriptionStatus::Active | SubscriptionStatus::Trial)
    }
}

fn default_billing_day() -> u8 {
    1
}

fn default_shared_count() -> u32 {
    1
}

/// 구독 추가/수정 폼에 해당하는 입력값. 검증을 통과해야 `Subscription`이 된다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub category: Category,
    pub billing_cycle: BillingCycle,
    /// 결제 주기당 금액 [원]
    pub price: i64,
    #[serde(default = "default_billing_day")]
    pub billing_day: u8,
    #[serde(default)]
    pub status: SubscriptionStatus,
    #[serde(default)]
    pub is_shared: bool,
    #[serde(default = "default_shared_count")]
    pub shared_count: u32,
}

impl SubscriptionDraft {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        billing_cycle: BillingCycle,
        price: i64,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            category,
            billing_cycle,
            price,
            billing_day: default_billing_day(),
            status: SubscriptionStatus::Active,
            is_shared: false,
            shared_count: default_shared_count(),
        }
    }

    pub fn with_status(mut self, status: SubscriptionStatus) -> Self {
        self.status = status;
        self
    }

    /// 이미 `count`명이 나눠 내는 가격으로 표시한다.
    pub fn shared_with(mut self, count: u32) -> Self {
        self.is_shared = true;
        self.shared_count = count;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        validation::check_price(self.price)?;
        validation::check_billing_day(self.billing_day)?;
        let min_count = if self.is_shared { 2 } else { 1 };
        if self.shared_count < min_count {
            return Err(ValidationError::SharedCountInvalid(self.shared_count));
        }
        Ok(())
    }
}

/// 사용자가 추적하는 정기 결제 서비스.
///
/// `monthly_price`는 `price`와 `billing_cycle`에서 파생되므로 직접 바꿀 수 없다.
/// 파일에서 읽을 때도 반드시 `SubscriptionDraft`를 거친다.
#[derive(Debug, Clone)]
pub struct Subscription {
    pub id: String,
    pub name: String,
    pub category: Category,
    billing_cycle: BillingCycle,
    price: i64,
    monthly_price: i64,
    pub billing_day: u8,
    pub status: SubscriptionStatus,
    pub is_shared: bool,
    pub shared_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Subscription {
    /// 입력값을 검증한 뒤 id/타임스탬프를 부여해 새 구독을 만든다.
    pub fn create(draft: SubscriptionDraft) -> Result<Self, ValidationError> {
        draft.validate()?;
        let now = Utc::now();
        let id = draft
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        Ok(Self {
            id,
            name: draft.name.trim().to_string(),
            category: draft.category,
            billing_cycle: draft.billing_cycle,
            price: draft.price,
            monthly_price: monthly_price(draft.price, draft.billing_cycle),
            billing_day: draft.billing_day,
            status: draft.status,
            is_shared: draft.is_shared,
            shared_count: draft.shared_count,
            created_at: now,
            updated_at: now,
        })
    }

    /// 수정 내용을 반영한다. id와 생성 시각은 유지된다.
    pub fn apply_edit(&mut self, draft: SubscriptionDraft) -> Result<(), ValidationError> {
        draft.validate()?;
        self.name = draft.name.trim().to_string();
        self.category = draft.category;
        self.billing_day = draft.billing_day;
        self.status = draft.status;
        self.is_shared = draft.is_shared;
        self.shared_count = draft.shared_count;
        self.set_pricing(draft.price, draft.billing_cycle)?;
        Ok(())
    }

    /// 가격/주기를 바꾸고 월 환산가를 다시 계산한다.
    pub fn set_pricing(&mut self, price: i64, cycle: BillingCycle) -> Result<(), ValidationError> {
        validation::check_price(price)?;
        self.price = price;
        self.billing_cycle = cycle;
        self.monthly_price = monthly_price(price, cycle);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// 해지는 삭제가 아니라 상태 전이다.
    pub fn cancel(&mut self) {
        self.status = SubscriptionStatus::Cancelled;
        self.updated_at = Utc::now();
    }

    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn billing_cycle(&self) -> BillingCycle {
        self.billing_cycle
    }

    pub fn monthly_price(&self) -> i64 {
        self.monthly_price
    }

    pub fn is_billable(&self) -> bool {
        self.status.is_billable()
    }

    /// 저장용 입력 형태로 되돌린다.
    pub fn to_draft(&self) -> SubscriptionDraft {
        SubscriptionDraft {
            id: Some(self.id.clone()),
            name: self.name.clone(),
            category: self.category,
            billing_cycle: self.billing_cycle,
            price: self.price,
            billing_day: self.billing_day,
            status: self.status,
            is_shared: self.is_shared,
            shared_count: self.shared_count,
        }
    }
}
