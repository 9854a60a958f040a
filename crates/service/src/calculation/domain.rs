use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Stored calculation record (business view is the entity row itself).
pub type Calculation = models::calculation::Model;

/// Supported arithmetic. Parsing an unknown name is the only way to reach
/// `UnsupportedOperation`; everything past `FromStr` is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Sqrt,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Sqrt,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Sqrt => "sqrt",
        }
    }

    /// Value a missing `operand2` stands for. Divide has none; sqrt never
    /// reads the second operand.
    pub fn identity(self) -> Option<f64> {
        match self {
            Operation::Add | Operation::Subtract => Some(0.0),
            Operation::Multiply => Some(1.0),
            Operation::Divide | Operation::Sqrt => None,
        }
    }

    /// Input rejections that are the caller's fault (400).
    pub fn check_domain(self, operand1: f64, operand2: Option<f64>) -> Result<(), ServiceError> {
        match self {
            Operation::Divide if operand2 == Some(0.0) => {
                Err(ServiceError::InvalidInput("Division by zero is not allowed".into()))
            }
            Operation::Sqrt if operand1 < 0.0 => {
                Err(ServiceError::InvalidInput("Cannot take square root of negative number".into()))
            }
            _ => Ok(()),
        }
    }

    /// Run the arithmetic. Fails with `Computation` when a required operand
    /// is missing or the result is not a finite number.
    pub fn apply(self, operand1: f64, operand2: Option<f64>) -> Result<f64, ServiceError> {
        let rhs = || {
            operand2.or(self.identity()).ok_or_else(|| {
                ServiceError::Computation(format!("Internal calculation error: {} requires operand2", self))
            })
        };
        let result = match self {
            Operation::Add => operand1 + rhs()?,
            Operation::Subtract => operand1 - rhs()?,
            Operation::Multiply => operand1 * rhs()?,
            Operation::Divide => operand1 / rhs()?,
            Operation::Sqrt => operand1.sqrt(),
        };
        if !result.is_finite() {
            return Err(ServiceError::Computation(format!(
                "Internal calculation error: {} produced a non-finite result",
                self
            )));
        }
        Ok(result)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| ServiceError::UnsupportedOperation("Unsupported operation type".into()))
    }
}

/// Body of `POST /calculate/`.
///
/// `operand1` stays untyped so a non-numeric value is reported as 415
/// after the operation-name check, instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub operation: String,
    pub operand1: serde_json::Value,
    #[serde(default)]
    pub operand2: Option<f64>,
}

impl CalculationRequest {
    pub fn new(operation: impl Into<String>, operand1: f64, operand2: Option<f64>) -> Self {
        Self { operation: operation.into(), operand1: serde_json::Value::from(operand1), operand2 }
    }

    /// Validate and compute, in this order: empty name (400), non-numeric
    /// operand1 (415), unknown operation (422), domain checks (400),
    /// arithmetic (500).
    pub fn evaluate(&self) -> Result<NewCalculation, ServiceError> {
        if self.operation.trim().is_empty() {
            return Err(ServiceError::InvalidInput("Operation name cannot be empty".into()));
        }
        let operand1 = self
            .operand1
            .as_f64()
            .ok_or_else(|| ServiceError::UnsupportedMediaType("Operand1 must be a number".into()))?;
        let operation: Operation = self.operation.parse()?;

        operation.check_domain(operand1, self.operand2)?;
        let result = operation.apply(operand1, self.operand2)?;

        Ok(NewCalculation { operation, operand1, operand2: self.operand2, result })
    }
}

/// A validated, computed calculation ready to be stored. `operand2` is kept
/// as supplied; the identity default only feeds the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewCalculation {
    pub operation: Operation,
    pub operand1: f64,
    pub operand2: Option<f64>,
    pub result: f64,
}
