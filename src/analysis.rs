use std::collections::HashMap;

use crate::alternative::Alternative;
use crate::currency::format_currency;
use crate::factors::{self, FactorError};

/// 아무것도 하지 않는 기준안을 가리키는 예약 대안 이름.
pub const NULL_ALTERNATIVE: &str = "Null";

/// 대안 비교 분석 수행 중 발생 가능한 오류.
#[derive(Debug)]
pub enum AnalysisError {
    /// 계수 계산 오류 (이자율 또는 기간이 0)
    Factor(FactorError),
    /// 비교할 대안이 하나도 없음
    NoAlternatives,
    /// 편익-비용 비교에 필요한 대안 수가 맞지 않음
    AlternativeCount { expected: usize, actual: usize },
    /// 이용자 비용 맵에 해당 대안 이름이 없음
    UserCostNotFound(String),
    /// 두 대안의 연간 등가 비용이 같아 증분 비교가 성립하지 않음
    EqualAnnualCost { cost: f64 },
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisError::Factor(e) => write!(f, "계수 계산 오류: {e}"),
            AnalysisError::NoAlternatives => write!(f, "분석할 대안이 없습니다"),
            AnalysisError::AlternativeCount { expected, actual } => write!(
                f,
                "대안 수 오류: {expected}개가 필요하지만 {actual}개가 주어졌습니다"
            ),
            AnalysisError::UserCostNotFound(name) => {
                write!(f, "이용자 비용 누락: {name}")
            }
            AnalysisError::EqualAnnualCost { cost } => write!(
                f,
                "연간 등가 비용이 {cost}로 같아 증분 비교를 할 수 없습니다"
            ),
        }
    }
}

impl std::error::Error for AnalysisError {}

impl From<FactorError> for AnalysisError {
    fn from(e: FactorError) -> Self {
        AnalysisError::Factor(e)
    }
}

/// 대안 목록과 고정 이자율로 구성한 공학경제 분석.
///
/// 구성 뒤에는 상태가 변하지 않으며, 같은 입력에 대한 결과는 진단 로그를
/// 제외하면 항상 같다. 비용이 같은 대안이 여럿이면 목록에서 먼저 온 쪽이
/// 선택된다.
#[derive(Debug, Clone)]
pub struct EconomicAnalysis {
    /// 비교 대상 대안 목록
    pub alternatives: Vec<Alternative>,
    /// 기간당 이자율 (소수, 0.10 = 10%)
    pub interest_rate: f64,
}

impl EconomicAnalysis {
    pub fn new(alternatives: Vec<Alternative>, interest_rate: f64) -> Self {
        Self {
            alternatives,
            interest_rate,
        }
    }

    /// SPCAF(일시불 복리계수): 현재 금액에서 n년 뒤 미래 금액을 구할 때 곱한다.
    pub fn spcaf(&self, years: u32) -> f64 {
        factors::spcaf(self.interest_rate, years)
    }

    /// SPPWF(일시불 현가계수): 미래 금액에서 현재 가치를 구할 때 곱한다.
    pub fn sppwf(&self, years: u32) -> f64 {
        factors::sppwf(self.interest_rate, years)
    }

    /// USPWF(등가지불 현가계수): 매년 같은 금액에서 현재 가치 합을 구할 때 곱한다.
    pub fn uspwf(&self, years: u32) -> Result<f64, FactorError> {
        factors::uspwf(self.interest_rate, years)
    }

    /// CRF(자본회수계수): 현재 금액에서 매년 회수할 금액을 구할 때 곱한다.
    pub fn crf(&self, years: u32) -> Result<f64, FactorError> {
        factors::crf(self.interest_rate, years)
    }

    /// USSFF(감채기금계수): 미래 목표 금액에서 매년 적립액을 구할 때 곱한다.
    pub fn ussff(&self, years: u32) -> Result<f64, FactorError> {
        factors::ussff(self.interest_rate, years)
    }

    /// USCAF(등가지불 복리계수): 매년 적립액에서 n년 뒤 모인 금액을 구할 때 곱한다.
    pub fn uscaf(&self, years: u32) -> Result<f64, FactorError> {
        factors::uscaf(self.interest_rate, years)
    }

    /// 대안의 모든 비용 흐름을 현재 가치 하나로 모은다 [$]. 낮을수록 유리하다.
    pub fn present_worth(&self, alt: &Alternative) -> Result<f64, FactorError> {
        let uspwf = self.uspwf(alt.service_life)?;
        let sppwf = self.sppwf(alt.service_life);
        Ok(alt.initial_cost + alt.annual_maintenance_cost * uspwf
            - alt.salvage_value * sppwf
            + alt.other_annual_total() * uspwf)
    }

    /// 대안의 모든 비용 흐름을 연간 등가 비용으로 바꾼다 [$/년].
    pub fn annual_cost(&self, alt: &Alternative) -> Result<f64, FactorError> {
        let crf = self.crf(alt.service_life)?;
        let ussff = self.ussff(alt.service_life)?;
        Ok(alt.initial_cost * crf + alt.annual_maintenance_cost - alt.salvage_value * ussff
            + alt.other_annual_total())
    }

    /// 현가 비교법: 모든 대안의 현가를 구해 가장 낮은 대안을 고른다.
    ///
    /// 내용연수가 모두 같을 때에만 비교가 공정하며, 그 확인은 호출자 몫이다.
    pub fn present_worth_method(&self) -> Result<String, AnalysisError> {
        let mut best: Option<(&str, f64)> = None;
        for alt in &self.alternatives {
            let pworth = self.present_worth(alt)?;
            if best.map_or(true, |(_, lowest)| pworth < lowest) {
                best = Some((alt.name.as_str(), pworth));
            }
        }
        let (name, cost) = best.ok_or(AnalysisError::NoAlternatives)?;
        tracing::debug!(best = name, cost, "현가 기준 최저 비용 대안");
        Ok(format!(
            "Best Alternative: {name}\nCost: {}",
            format_currency(cost)
        ))
    }

    /// 연간 등가 비교법: 모든 대안의 연간 등가 비용을 구해 가장 낮은 대안을 고른다.
    ///
    /// 연 단위로 맞춰 비교하므로 내용연수가 서로 달라도 쓸 수 있다.
    pub fn annual_cost_method(&self) -> Result<String, AnalysisError> {
        let mut best: Option<(&str, f64)> = None;
        for alt in &self.alternatives {
            let aworth = self.annual_cost(alt)?;
            if best.map_or(true, |(_, lowest)| aworth < lowest) {
                best = Some((alt.name.as_str(), aworth));
            }
        }
        let (name, cost) = best.ok_or(AnalysisError::NoAlternatives)?;
        tracing::debug!(best = name, cost, "연간 등가 기준 최저 비용 대안");
        Ok(format!(
            "Best Alternative: {name}\nCost: {}",
            format_currency(cost)
        ))
    }

    /// 편익-비용 비율법: 정확히 두 대안을 증분 편익-비용 비율로 비교한다.
    ///
    /// `user_costs`는 대안 이름을 연간 이용자 비용 [$]에 대응시키며,
    /// 이름이 [`NULL_ALTERNATIVE`]인 대안은 무시행 기준안으로 취급한다.
    /// 계산된 비율은 반환 문자열과 별개로 info 레벨 진단 이벤트로 남는다.
    pub fn benefit_cost_method(
        &self,
        user_costs: &HashMap<String, f64>,
    ) -> Result<String, AnalysisError> {
        if self.alternatives.len() != 2 {
            return Err(AnalysisError::AlternativeCount {
                expected: 2,
                actual: self.alternatives.len(),
            });
        }
        let (first, second) = (&self.alternatives[0], &self.alternatives[1]);
        if first.name == NULL_ALTERNATIVE {
            return self.against_null_baseline(second, user_costs);
        }
        if second.name == NULL_ALTERNATIVE {
            return self.against_null_baseline(first, user_costs);
        }

        // 연간 등가 비용이 낮은 쪽이 기준안, 높은 쪽이 증분 투자안이 된다
        let first_cost = self.annual_cost(first)?;
        let second_cost = self.annual_cost(second)?;
        let (baseline, challenger, increment) = if first_cost < second_cost {
            (first, second, second_cost - first_cost)
        } else if first_cost > second_cost {
            (second, first, first_cost - second_cost)
        } else {
            return Err(AnalysisError::EqualAnnualCost { cost: first_cost });
        };
        let benefit =
            user_cost_of(user_costs, &baseline.name)? - user_cost_of(user_costs, &challenger.name)?;
        let ratio = benefit / increment;
        report_ratio(ratio);
        let best = if ratio > 1.0 {
            &challenger.name
        } else {
            &baseline.name
        };
        Ok(format!("Best Alternative: {best}"))
    }

    /// 무시행 기준안과 실제 대안 하나를 비교한다. 추가 비용은 대안의 연간
    /// 등가 비용 전체가 된다.
    fn against_null_baseline(
        &self,
        alt: &Alternative,
        user_costs: &HashMap<String, f64>,
    ) -> Result<String, AnalysisError> {
        let annual = self.annual_cost(alt)?;
        // 연간 등가 비용이 0이면 무시행 기준안과 차이가 없어 비율이 정의되지 않는다
        if annual == 0.0 {
            return Err(AnalysisError::EqualAnnualCost { cost: annual });
        }
        let benefit =
            user_cost_of(user_costs, NULL_ALTERNATIVE)? - user_cost_of(user_costs, &alt.name)?;
        let ratio = benefit / annual;
        report_ratio(ratio);
        if ratio > 1.0 {
            Ok(format!("Best Alternative: {}", alt.name))
        } else {
            Ok(String::from("Best Alternative: Null Alternative"))
        }
    }
}

impl std::fmt::Display for EconomicAnalysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Alternatives Analyzed:{}", self.alternatives.len())?;
        for (idx, alt) in self.alternatives.iter().enumerate() {
            writeln!(f, "{}: {}", idx + 1, alt.name)?;
        }
        Ok(())
    }
}

/// 이용자 비용 맵에서 대안 이름으로 값을 찾는다.
fn user_cost_of(user_costs: &HashMap<String, f64>, name: &str) -> Result<f64, AnalysisError> {
    user_costs
        .get(name)
        .copied()
        .ok_or_else(|| AnalysisError::UserCostNotFound(name.to_string()))
}

/// 증분 편익-비용 비율을 소수 둘째 자리로 반올림해 진단 이벤트로 남긴다.
fn report_ratio(ratio: f64) {
    let rounded = format!("{ratio:.2}");
    tracing::info!(bc_ratio = %rounded, "증분 편익-비용 비율");
}
