//! 프로세스 전체에서 공유하는 읽기 전용 기준 테이블.
//! 가격/이용시간은 국내 공개 요금표와 조사치를 근사한 참고값이다.

pub mod benchmarks;
pub mod bundles;
pub mod daily_items;
pub mod discounts;
pub mod matching;
pub mod services;

pub use matching::{match_names, names_match, normalize, resolve, MatchTier};
