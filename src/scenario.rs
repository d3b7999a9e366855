use serde::{Deserialize, Serialize};

use crate::alternative::Alternative;
use crate::analysis::EconomicAnalysis;

/// 시나리오 문서 해석/직렬화 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ScenarioError {
    /// TOML 역직렬화 오류
    Parse(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioError::Parse(e) => write!(f, "시나리오 해석 오류: {e}"),
            ScenarioError::Serialize(e) => write!(f, "시나리오 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ScenarioError {}

impl From<toml::de::Error> for ScenarioError {
    fn from(e: toml::de::Error) -> Self {
        ScenarioError::Parse(e)
    }
}

impl From<toml::ser::Error> for ScenarioError {
    fn from(e: toml::ser::Error) -> Self {
        ScenarioError::Serialize(e)
    }
}

/// TOML 시나리오 문서의 최상위 구조.
///
/// `[[alternative]]` 테이블 배열이 대안 목록이 되고, 문서에 적힌 순서가
/// 그대로 분석의 대안 순서가 된다.
#[derive(Debug, Serialize, Deserialize)]
struct ScenarioDoc {
    /// 기간당 이자율 (소수, 0.10 = 10%)
    interest_rate: f64,
    /// 대안 목록
    #[serde(default, rename = "alternative")]
    alternatives: Vec<Alternative>,
}

/// TOML 시나리오 문자열에서 분석을 만든다. 파일 입출력은 호출자 몫이다.
pub fn from_toml_str(document: &str) -> Result<EconomicAnalysis, ScenarioError> {
    let doc: ScenarioDoc = toml::from_str(document)?;
    Ok(EconomicAnalysis::new(doc.alternatives, doc.interest_rate))
}

/// 분석을 같은 시나리오 형식의 TOML 문자열로 만든다.
pub fn to_toml_str(analysis: &EconomicAnalysis) -> Result<String, ScenarioError> {
    let doc = ScenarioDoc {
        interest_rate: analysis.interest_rate,
        alternatives: analysis.alternatives.clone(),
    };
    Ok(toml::to_string_pretty(&doc)?)
}
