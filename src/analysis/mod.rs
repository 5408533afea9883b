//! 구독/사용량 스냅샷을 받아 파생 지표를 만드는 순수 계산기 모음.
//!
//! 어떤 함수도 I/O를 하지 않고 오류를 던지지 않는다. 0으로 나누기나
//! 기준 데이터 없음은 0, `f64::INFINITY`, `None` 같은 약속된 값으로 표현한다.

pub mod benchmark;
pub mod bundle;
pub mod cost;
pub mod cost_feeling;
pub mod discount;
pub mod dna;
pub mod opportunity_cost;
pub mod roi;
pub mod sharing;
