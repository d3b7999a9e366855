use serde::{Deserialize, Serialize};

use crate::currency::format_currency;

/// 고정 비용 항목 외에 추가로 발생하는 연간 비용 한 건.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtherAnnualCost {
    /// 비용 항목 라벨 (예: "roadway lighting")
    pub label: String,
    /// 연간 비용 [$]
    pub amount: f64,
}

/// 평가 대상 대안(후보 투자안) 한 건의 비용 구조.
///
/// 생성 뒤에는 읽기 전용으로 다룬다. 금액 필드는 음수를 허용하며
/// 부호 규약상 음수는 수입(비용 감소)으로 해석한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alternative {
    /// 대안 이름. 이용자 비용 맵의 조회 키가 되므로 분석 안에서 고유해야 한다.
    pub name: String,
    /// 내용연수 [년]. 0이면 등가지불 계수 계산이 오류를 돌려준다.
    pub service_life: u32,
    /// 초기 투자비 [$]
    pub initial_cost: f64,
    /// 연간 유지관리비 [$]
    pub annual_maintenance_cost: f64,
    /// 내용연수 말 잔존가치 [$]. 비용을 줄이는 방향으로 계산된다.
    pub salvage_value: f64,
    /// 기타 연간 비용 목록. 넣은 순서가 보고서 출력 순서가 된다.
    #[serde(default)]
    pub other_annual_costs: Vec<OtherAnnualCost>,
}

impl Alternative {
    /// 기타 연간 비용이 없는 대안을 만든다.
    pub fn new(
        name: impl Into<String>,
        service_life: u32,
        initial_cost: f64,
        annual_maintenance_cost: f64,
        salvage_value: f64,
    ) -> Self {
        Self {
            name: name.into(),
            service_life,
            initial_cost,
            annual_maintenance_cost,
            salvage_value,
            other_annual_costs: Vec::new(),
        }
    }

    /// 기타 연간 비용 항목을 하나 덧붙인 대안을 돌려준다.
    pub fn with_other_cost(mut self, label: impl Into<String>, amount: f64) -> Self {
        self.other_annual_costs.push(OtherAnnualCost {
            label: label.into(),
            amount,
        });
        self
    }

    /// 기타 연간 비용의 합 [$]
    pub fn other_annual_total(&self) -> f64 {
        self.other_annual_costs.iter().map(|cost| cost.amount).sum()
    }
}

impl std::fmt::Display for Alternative {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Alternative: {}", self.name)?;
        writeln!(f, "Service Life: {} years", self.service_life)?;
        writeln!(f, "Initial Cost: {}", format_currency(self.initial_cost))?;
        writeln!(
            f,
            "Annual Maintenance Cost: {}",
            format_currency(self.annual_maintenance_cost)
        )?;
        writeln!(f, "Salvage Value: {}", format_currency(self.salvage_value))?;
        for cost in &self.other_annual_costs {
            writeln!(f, "{}: {}", cost.label, format_currency(cost.amount))?;
        }
        Ok(())
    }
}
