//! 구독/사용량 엔티티와 입력 검증 게이트.

pub mod subscription;
pub mod usage_record;
pub mod validation;

pub use subscription::*;
pub use usage_record::*;
pub use validation::ValidationError;
