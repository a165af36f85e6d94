//! 평점 값
//!
//! 범위 검증은 하지 않고 숫자만 허용합니다. 정수는 정수로, 소수는 소수로
//! 그대로 저장되고 응답에도 그대로 돌려줍니다.

use serde::{Deserialize, Serialize};

/// 숫자형 평점 값
///
/// - `4` → `Integer(4)`
/// - `4.5` → `Decimal(4.5)`
/// - `"5"`, `true`, `null` 등 숫자가 아닌 값은 역직렬화 단계에서 거부됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RatingValue {
    Integer(i64),
    Decimal(f64),
}

impl From<i64> for RatingValue {
    fn from(value: i64) -> Self {
        RatingValue::Integer(value)
    }
}

impl From<i32> for RatingValue {
    fn from(value: i32) -> Self {
        RatingValue::Integer(i64::from(value))
    }
}

impl From<f64> for RatingValue {
    fn from(value: f64) -> Self {
        RatingValue::Decimal(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integers_and_decimals_keep_their_shape() {
        let int: RatingValue = serde_json::from_value(json!(4)).unwrap();
        let dec: RatingValue = serde_json::from_value(json!(4.5)).unwrap();

        assert_eq!(int, RatingValue::Integer(4));
        assert_eq!(dec, RatingValue::Decimal(4.5));
        assert_eq!(serde_json::to_value(int).unwrap(), json!(4));
        assert_eq!(serde_json::to_value(dec).unwrap(), json!(4.5));
    }

    #[test]
    fn test_out_of_range_values_are_passed_through() {
        let negative: RatingValue = serde_json::from_value(json!(-10)).unwrap();
        let huge: RatingValue = serde_json::from_value(json!(1000)).unwrap();

        assert_eq!(negative, RatingValue::Integer(-10));
        assert_eq!(huge, RatingValue::Integer(1000));
    }

    #[test]
    fn test_non_numeric_values_are_rejected() {
        for value in [json!("5"), json!(true), json!(null), json!([5]), json!({ "v": 5 })] {
            assert!(
                serde_json::from_value::<RatingValue>(value.clone()).is_err(),
                "{} should be rejected",
                value
            );
        }
    }
}
