use thiserror::Error;

/// 구독 가격 상한 [원]
pub const MAX_PRICE: i64 = 1_000_000;
/// 한 주의 전체 분(7 * 24 * 60). 주간 사용량 상한이다.
pub const MAX_WEEKLY_MINUTES: u32 = 10_080;

/// 데이터 입력 단계에서 거부되는 값들. 계산기 내부에서는 사용하지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("서비스 이름이 비어 있습니다.")]
    EmptyName,
    #[error("가격은 0원 이상 {max}원 이하여야 합니다: {0}원", max = MAX_PRICE)]
    PriceOutOfRange(i64),
    #[error("결제일은 1~31 사이여야 합니다: {0}")]
    BillingDayOutOfRange(u8),
    #[error("공유 인원이 올바르지 않습니다: {0}명")]
    SharedCountInvalid(u32),
    #[error("주간 사용 시간은 {max}분을 넘을 수 없습니다: {0}분", max = MAX_WEEKLY_MINUTES)]
    UsageMinutesOutOfRange(u32),
}

pub fn check_price(price: i64) -> Result<(), ValidationError> {
    if (0..=MAX_PRICE).contains(&price) {
        Ok(())
    } else {
        Err(ValidationError::PriceOutOfRange(price))
    }
}

pub fn check_billing_day(day: u8) -> Result<(), ValidationError> {
    if (1..=31).contains(&day) {
        Ok(())
    } else {
        Err(ValidationError::BillingDayOutOfRange(day))
    }
}

pub fn check_weekly_minutes(minutes: u32) -> Result<(), ValidationError> {
    if minutes <= MAX_WEEKLY_MINUTES {
        Ok(())
    } else {
        Err(ValidationError::UsageMinutesOutOfRange(minutes))
    }
}
