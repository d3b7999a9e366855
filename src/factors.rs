/// 이자율 환산 계수 계산 시 발생 가능한 오류.
#[derive(Debug)]
pub enum FactorError {
    /// 이자율이나 기간이 0이어서 등가지불 계수의 분모가 0이 되는 경우
    DivisionByZero {
        /// 문제가 된 이자율 (소수, 0.10 = 10%)
        interest_rate: f64,
        /// 문제가 된 기간 [년]
        years: u32,
    },
}

impl std::fmt::Display for FactorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FactorError::DivisionByZero {
                interest_rate,
                years,
            } => write!(
                f,
                "0으로 나눌 수 없음: 이자율 {interest_rate}, 기간 {years}년"
            ),
        }
    }
}

impl std::error::Error for FactorError {}

/// SPCAF(일시불 복리계수): 현재 금액이 n년 뒤 불어나는 배율. (1+i)^n
pub fn spcaf(interest_rate: f64, years: u32) -> f64 {
    // i32 범위를 넘는 기간은 지수를 포화시켜 음수로 뒤집히지 않게 한다
    (1.0 + interest_rate).powi(years.min(i32::MAX as u32) as i32)
}

/// SPPWF(일시불 현가계수): 미래 금액을 현재 가치로 당기는 배율. SPCAF의 역수
pub fn sppwf(interest_rate: f64, years: u32) -> f64 {
    1.0 / spcaf(interest_rate, years)
}

/// USPWF(등가지불 현가계수): 매년 같은 금액 n번을 현재 가치 합으로 바꾸는 배율.
pub fn uspwf(interest_rate: f64, years: u32) -> Result<f64, FactorError> {
    let compound = series_compound(interest_rate, years)?;
    Ok((compound - 1.0) / (interest_rate * compound))
}

/// CRF(자본회수계수): 현재 금액을 매년 같은 회수액으로 바꾸는 배율. USPWF의 역수
pub fn crf(interest_rate: f64, years: u32) -> Result<f64, FactorError> {
    Ok(1.0 / uspwf(interest_rate, years)?)
}

/// USSFF(감채기금계수): n년 뒤 목표 금액을 매년 적립액으로 바꾸는 배율.
pub fn ussff(interest_rate: f64, years: u32) -> Result<f64, FactorError> {
    let compound = series_compound(interest_rate, years)?;
    Ok(interest_rate / (compound - 1.0))
}

/// USCAF(등가지불 복리계수): 매년 같은 적립액이 n년 뒤 모이는 배율. USSFF의 역수
pub fn uscaf(interest_rate: f64, years: u32) -> Result<f64, FactorError> {
    Ok(1.0 / ussff(interest_rate, years)?)
}

/// 등가지불 계수 공통의 분모 조건(i != 0, n >= 1)을 검사한 뒤 SPCAF를 돌려준다.
fn series_compound(interest_rate: f64, years: u32) -> Result<f64, FactorError> {
    if interest_rate == 0.0 || years == 0 {
        return Err(FactorError::DivisionByZero {
            interest_rate,
            years,
        });
    }
    Ok(spcaf(interest_rate, years))
}
