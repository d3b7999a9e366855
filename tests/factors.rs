//! 이자율 환산 계수 회귀 테스트. i=10%, n=10년 기준 예제 값과 역수 관계를 확인한다.

use engineering_economy_toolbox::analysis::EconomicAnalysis;
use engineering_economy_toolbox::factors::{crf, spcaf, sppwf, uscaf, ussff, uspwf, FactorError};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.12} got {actual:.12} (diff {diff:e}, tol {rel_tol:e})"
    );
}

#[test]
fn reference_values_at_ten_percent_ten_years() {
    assert_close("SPCAF", spcaf(0.10, 10), 2.593_742_460_100_002, 1e-12);
    assert_close("SPPWF", sppwf(0.10, 10), 0.385_543_289_429_531_4, 1e-12);
    assert_close("USPWF", uspwf(0.10, 10).expect("uspwf"), 6.144_567_105_704_685, 1e-12);
    assert_close("CRF", crf(0.10, 10).expect("crf"), 0.162_745_394_882_511_5, 1e-12);
    assert_close("USSFF", ussff(0.10, 10).expect("ussff"), 0.062_745_394_882_511_5, 1e-12);
    assert_close("USCAF", uscaf(0.10, 10).expect("uscaf"), 15.937_424_601_000_02, 1e-12);
}

#[test]
fn reciprocal_pairs_agree_across_rate_and_life_grid() {
    for &rate in &[0.02, 0.05, 0.10, 0.18] {
        for years in 1..=40 {
            let label = format!("i={rate} n={years}");
            assert_close(&label, sppwf(rate, years) * spcaf(rate, years), 1.0, 1e-12);
            assert_close(
                &label,
                crf(rate, years).expect("crf") * uspwf(rate, years).expect("uspwf"),
                1.0,
                1e-12,
            );
            assert_close(
                &label,
                uscaf(rate, years).expect("uscaf") * ussff(rate, years).expect("ussff"),
                1.0,
                1e-12,
            );
        }
    }
}

#[test]
fn single_payment_factors_are_one_at_zero_years() {
    assert_close("SPCAF(0)", spcaf(0.10, 0), 1.0, 0.0);
    assert_close("SPPWF(0)", sppwf(0.10, 0), 1.0, 0.0);
}

#[test]
fn huge_service_life_saturates_instead_of_wrapping() {
    // 지수가 i32 범위를 넘어도 부호가 뒤집히지 않고 수학적 극한을 따른다
    let compound = spcaf(0.10, u32::MAX);
    assert!(compound.is_infinite() && compound > 0.0, "SPCAF = {compound}");
    assert_eq!(sppwf(0.10, u32::MAX), 0.0);
}

#[test]
fn series_factors_reject_zero_years() {
    for result in [uspwf(0.10, 0), crf(0.10, 0), ussff(0.10, 0), uscaf(0.10, 0)] {
        match result {
            Err(FactorError::DivisionByZero {
                interest_rate,
                years,
            }) => {
                assert_close("잘못된 이자율 보고", interest_rate, 0.10, 0.0);
                assert_eq!(years, 0);
            }
            Ok(factor) => panic!("기간 0년이 계수 {factor}를 돌려줌"),
        }
    }
}

#[test]
fn series_factors_reject_zero_interest() {
    for result in [uspwf(0.0, 5), crf(0.0, 5), ussff(0.0, 5), uscaf(0.0, 5)] {
        match result {
            Err(FactorError::DivisionByZero {
                interest_rate,
                years,
            }) => {
                assert_eq!(interest_rate, 0.0);
                assert_eq!(years, 5);
            }
            Ok(factor) => panic!("이자율 0이 계수 {factor}를 돌려줌"),
        }
    }
}

#[test]
fn division_error_message_names_the_offending_inputs() {
    let err = uspwf(0.0, 5).expect_err("이자율 0은 오류여야 함");
    let message = err.to_string();
    assert!(message.contains("이자율 0"), "message: {message}");
    assert!(message.contains("5년"), "message: {message}");
}

#[test]
fn analysis_factor_methods_match_the_free_functions() {
    let econ = EconomicAnalysis::new(Vec::new(), 0.10);
    assert_close("SPCAF 위임", econ.spcaf(10), spcaf(0.10, 10), 0.0);
    assert_close("SPPWF 위임", econ.sppwf(10), sppwf(0.10, 10), 0.0);
    let delegated = [
        ("USPWF 위임", econ.uspwf(10), uspwf(0.10, 10)),
        ("CRF 위임", econ.crf(10), crf(0.10, 10)),
        ("USSFF 위임", econ.ussff(10), ussff(0.10, 10)),
        ("USCAF 위임", econ.uscaf(10), uscaf(0.10, 10)),
    ];
    for (label, method, free) in delegated {
        assert_close(label, method.expect(label), free.expect(label), 0.0);
    }
}
