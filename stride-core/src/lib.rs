//! Stride Core - Fundamental types
//!
//! This crate provides the core types used throughout Stride:
//! - `Number`: Arbitrary precision decimal numbers
//! - `StrideError`: Structured errors with codes and suggestions

mod number;
mod error;

pub use number::{Number, NumberError};
pub use error::{StrideError, ErrorContext, Severity, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Number, StrideError, Severity};
    pub use crate::error::codes;
}

#[cfg(test)]
mod tests {
    use super::*;

    mod number_tests {
        use super::*;

        #[test]
        fn test_from_i64() {
            let n = Number::from_i64(42);
            assert_eq!(n.to_i64(), Some(42));
        }

        #[test]
        fn test_from_str_integer() {
            let n = Number::from_str("150").unwrap();
            assert_eq!(n.to_i64(), Some(150));
        }

        #[test]
        fn test_from_str_decimal() {
            let n = Number::from_str("3.14").unwrap();
            assert!(!n.is_integer());
            assert_eq!(n.as_compact(), "3.14");
        }

        #[test]
        fn test_from_str_fraction() {
            let n = Number::from_str("1/2").unwrap();
            assert_eq!(n.as_compact(), "0.5");
        }

        #[test]
        fn test_from_str_scientific() {
            let n = Number::from_str("1.5e2").unwrap();
            assert_eq!(n.to_i64(), Some(150));
        }

        #[test]
        fn test_from_str_integer_mantissa_scientific() {
            let n = Number::from_str("25e-1").unwrap();
            assert_eq!(n.as_compact(), "2.5");

            let n = Number::from_str("125e3").unwrap();
            assert_eq!(n.to_i64(), Some(125000));
        }

        #[test]
        fn test_from_str_rejects_garbage() {
            assert!(Number::from_str("abc").is_err());
            assert!(Number::from_str("1.2.3").is_err());
        }

        #[test]
        fn test_fraction_with_zero_denominator() {
            let err = Number::from_str("1/0").unwrap_err();
            assert!(matches!(err, NumberError::DivisionByZero));
        }

        #[test]
        fn test_from_f64() {
            let n = Number::from_f64(0.5);
            assert_eq!(n, Number::from_str("0.5").unwrap());
            assert!(Number::from_f64(f64::NAN).is_zero());
        }

        #[test]
        fn test_arithmetic() {
            let a = Number::from_i64(40);
            let b = Number::from_i64(2);
            assert_eq!(a.add(&b).to_i64(), Some(42));
            assert_eq!(a.sub(&b).to_i64(), Some(38));
            assert_eq!(a.mul(&b).to_i64(), Some(80));
            assert_eq!(a.checked_div(&b).unwrap().to_i64(), Some(20));
        }

        #[test]
        fn test_division_by_zero() {
            let a = Number::from_i64(1);
            let zero = Number::from_i64(0);
            assert!(a.checked_div(&zero).is_err());
        }

        #[test]
        fn test_is_zero() {
            assert!(Number::from_i64(0).is_zero());
            assert!(Number::from_str("0.0").unwrap().is_zero());
            assert!(!Number::from_i64(1).is_zero());
        }

        #[test]
        fn test_is_negative() {
            assert!(Number::from_i64(-5).is_negative());
            assert!(!Number::from_i64(5).is_negative());
            assert!(!Number::from_i64(0).is_negative());
        }

        #[test]
        fn test_is_integer_after_fraction_sum() {
            let half = Number::from_ratio(1, 2);
            assert!(!half.is_integer());
            assert!(half.add(&half).is_integer());
        }

        #[test]
        fn test_abs() {
            assert_eq!(Number::from_i64(-42).abs(), Number::from_i64(42));
            assert_eq!(Number::from_i64(42).abs(), Number::from_i64(42));
        }

        #[test]
        fn test_as_compact() {
            assert_eq!(Number::from_i64(42).as_compact(), "42");
            assert_eq!(Number::from_i64(-7).as_compact(), "-7");
            assert_eq!(Number::from_str("3.0").unwrap().as_compact(), "3");
            assert_eq!(Number::from_str("2.5").unwrap().as_compact(), "2.5");
            assert_eq!(Number::from_str("-0.25").unwrap().as_compact(), "-0.25");
        }

        #[test]
        fn test_as_decimal() {
            let n = Number::from_str("1.5").unwrap();
            assert_eq!(n.as_decimal(2), "1.50");
        }

        #[test]
        fn test_to_f64() {
            let n = Number::from_str("2.5").unwrap();
            assert_eq!(n.to_f64(), Some(2.5));
        }

        #[test]
        fn test_ordering() {
            assert!(Number::from_i64(1) < Number::from_i64(2));
            assert!(Number::from_str("-0.5").unwrap() < Number::from_i64(0));
            assert_eq!(Number::from_ratio(1, 2), Number::from_str("0.5").unwrap());
        }

        #[test]
        fn test_serde_round_trip() {
            let n = Number::from_str("2.5").unwrap();
            let json = serde_json::to_string(&n).unwrap();
            let back: Number = serde_json::from_str(&json).unwrap();
            assert_eq!(n, back);
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_constructor_codes() {
            assert_eq!(StrideError::parse_error("x").code, codes::PARSE_ERROR);
            assert_eq!(StrideError::div_zero().code, codes::DIV_ZERO);
            assert_eq!(StrideError::invalid_input("bad").code, codes::INVALID_INPUT);
            assert_eq!(StrideError::empty_sequence().code, codes::EMPTY_SEQUENCE);
            assert_eq!(StrideError::internal("oops").code, codes::INTERNAL);
        }

        #[test]
        fn test_invalid_input_keeps_message_verbatim() {
            let err = StrideError::invalid_input("Number of terms must be a positive integer");
            assert_eq!(err.message, "Number of terms must be a positive integer");
        }

        #[test]
        fn test_context_builders() {
            let err = StrideError::invalid_input("bad")
                .for_parameter("num_terms")
                .with_value("0")
                .with_note("from tool call");

            let ctx = err.context.unwrap();
            assert_eq!(ctx.parameter.as_deref(), Some("num_terms"));
            assert_eq!(ctx.value.as_deref(), Some("0"));
            assert_eq!(ctx.notes, vec!["from tool call"]);
        }

        #[test]
        fn test_display_includes_code_and_suggestion() {
            let text = StrideError::parse_error("xyz").to_string();
            assert!(text.contains("[PARSE_ERROR]"));
            assert!(text.contains("suggestion:"));
        }

        #[test]
        fn test_limit_exceeded_is_warning() {
            let err = StrideError::limit_exceeded(1000);
            assert_eq!(err.code, codes::LIMIT_EXCEEDED);
            assert_eq!(err.severity, Severity::Warning);
            assert!(err.message.contains("1000"));
        }

        #[test]
        fn test_internal_is_fatal() {
            assert_eq!(StrideError::internal("oops").severity, Severity::Fatal);
        }

        #[test]
        fn test_from_number_error() {
            let err = StrideError::from(NumberError::DivisionByZero);
            assert_eq!(err.code, codes::DIV_ZERO);

            let err = StrideError::from(NumberError::ParseError("abc".to_string()));
            assert_eq!(err.code, codes::PARSE_ERROR);
            assert!(err.message.contains("abc"));
        }

        #[test]
        fn test_serialization_skips_empty_fields() {
            let v = serde_json::to_value(StrideError::div_zero()).unwrap();
            assert!(v.get("context").is_none());
            assert_eq!(v["severity"], "error");

            let v = serde_json::to_value(StrideError::limit_exceeded(1000)).unwrap();
            assert_eq!(v["severity"], "warning");
        }
    }
}
