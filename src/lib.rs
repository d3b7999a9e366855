//! 현가·연간 등가·편익-비용 비교로 투자 대안을 평가하는 공학경제 계산 라이브러리.

pub mod alternative;
pub mod analysis;
pub mod currency;
pub mod factors;
pub mod scenario;
