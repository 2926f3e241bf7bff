use crate::value::{Value, ValueType};

#[derive(Debug, Clone, PartialEq)]
pub enum CastError {
    /// Invalid format for the target type (e.g., "abc" for an integer)
    InvalidFormat { value: String, target_type: ValueType },
    /// Numeric overflow when casting between numeric types
    NumericOverflow { value: String, target_type: ValueType },
    /// The value has no exact representation in the target type
    LossyConversion { value: String, target_type: ValueType },
}

impl std::fmt::Display for CastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CastError::InvalidFormat { value, target_type } => {
                write!(f, "invalid format '{}' for type {}", value, target_type)
            }
            CastError::NumericOverflow { value, target_type } => {
                write!(f, "numeric overflow: '{}' cannot fit in {}", value, target_type)
            }
            CastError::LossyConversion { value, target_type } => {
                write!(f, "'{}' cannot be represented exactly as {}", value, target_type)
            }
        }
    }
}

impl std::error::Error for CastError {}

/// Integer narrowing shared by every integer source.
fn narrow(n: i64, target_type: ValueType) -> Result<Value, CastError> {
    let overflow = || CastError::NumericOverflow { value: n.to_string(), target_type };
    match target_type {
        ValueType::I16 => i16::try_from(n).map(Value::I16).map_err(|_| overflow()),
        ValueType::I32 => i32::try_from(n).map(Value::I32).map_err(|_| overflow()),
        ValueType::I64 => Ok(Value::I64(n)),
        ValueType::F64 => {
            // i64::MAX rounds up to 2^63, which saturates back to i64::MAX
            let float = n as f64;
            if float >= i64::MAX as f64 || float as i64 != n {
                return Err(CastError::LossyConversion { value: n.to_string(), target_type });
            }
            Ok(Value::F64(float))
        }
        ValueType::Bool => Ok(Value::Bool(n != 0)),
        ValueType::String => Ok(Value::String(n.to_string())),
    }
}

impl Value {
    /// Cast this value to the specified target type
    pub fn cast_to(&self, target_type: ValueType) -> Result<Value, CastError> {
        match (self, target_type) {
            // Integer sources share one widening/narrowing path
            (Value::I16(n), _) => narrow(*n as i64, target_type),
            (Value::I32(n), _) => narrow(*n as i64, target_type),
            (Value::I64(n), _) => narrow(*n, target_type),

            (Value::F64(n), ValueType::I16 | ValueType::I32 | ValueType::I64) => {
                if !n.is_finite() || n.fract() != 0.0 {
                    return Err(CastError::LossyConversion { value: n.to_string(), target_type });
                }
                if *n < i64::MIN as f64 || *n >= i64::MAX as f64 {
                    return Err(CastError::NumericOverflow { value: n.to_string(), target_type });
                }
                narrow(*n as i64, target_type)
            }
            (Value::F64(n), ValueType::Bool) => Ok(Value::Bool(*n != 0.0)),
            (Value::F64(n), ValueType::String) => Ok(Value::String(n.to_string())),

            // Bool to numeric conversions
            (Value::Bool(b), ValueType::I16) => Ok(Value::I16(if *b { 1 } else { 0 })),
            (Value::Bool(b), ValueType::I32) => Ok(Value::I32(if *b { 1 } else { 0 })),
            (Value::Bool(b), ValueType::I64) => Ok(Value::I64(if *b { 1 } else { 0 })),
            (Value::Bool(b), ValueType::F64) => Ok(Value::F64(if *b { 1.0 } else { 0.0 })),
            (Value::Bool(b), ValueType::String) => Ok(Value::String(b.to_string())),

            // String to scalar conversions
            (Value::String(s), ValueType::I16) => match s.trim().parse::<i16>() {
                Ok(n) => Ok(Value::I16(n)),
                Err(_) => Err(CastError::InvalidFormat { value: s.clone(), target_type }),
            },
            (Value::String(s), ValueType::I32) => match s.trim().parse::<i32>() {
                Ok(n) => Ok(Value::I32(n)),
                Err(_) => Err(CastError::InvalidFormat { value: s.clone(), target_type }),
            },
            (Value::String(s), ValueType::I64) => match s.trim().parse::<i64>() {
                Ok(n) => Ok(Value::I64(n)),
                Err(_) => Err(CastError::InvalidFormat { value: s.clone(), target_type }),
            },
            (Value::String(s), ValueType::F64) => match s.trim().parse::<f64>() {
                Ok(n) => Ok(Value::F64(n)),
                Err(_) => Err(CastError::InvalidFormat { value: s.clone(), target_type }),
            },
            (Value::String(s), ValueType::Bool) => match s.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(Value::Bool(true)),
                "false" | "0" | "no" | "off" => Ok(Value::Bool(false)),
                _ => Err(CastError::InvalidFormat { value: s.clone(), target_type }),
            },

            (Value::F64(_), ValueType::F64) | (Value::Bool(_), ValueType::Bool) | (Value::String(_), ValueType::String) => Ok(self.clone()),
        }
    }
}
