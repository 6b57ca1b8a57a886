use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a binary arithmetic operation.
    ///
    /// Two integer operands stay in the integer domain, with `/` truncating
    /// toward zero. Mixed operands promote the integer side to a real via
    /// the checked conversion. Division by a zero right-hand operand fails
    /// in either domain.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed value.
    ///
    /// # Example
    /// ```
    /// use embex::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::Value},
    /// };
    ///
    /// let result = Evaluator::eval_binary(BinaryOperator::Mul,
    ///                                     Value::Real(1.5),
    ///                                     Value::Integer(2)).unwrap();
    /// assert_eq!(result, Value::Real(3.0));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: Value, right: Value) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Value::{Integer, Real};

        match (left, right) {
            (Integer(a), Integer(b)) => match op {
                Add => Ok(Integer(a + b)),
                Sub => Ok(Integer(a - b)),
                Mul => Ok(Integer(a * b)),
                Div => {
                    if b == 0 {
                        Err(RuntimeError::DivisionByZero)
                    } else {
                        Ok(Integer(a / b))
                    }
                },
            },
            _ => {
                let a = left.as_real()?;
                let b = right.as_real()?;

                Ok(Real(match op {
                            Add => a + b,
                            Sub => a - b,
                            Mul => a * b,
                            Div => {
                                if b == 0.0 {
                                    return Err(RuntimeError::DivisionByZero);
                                }
                                a / b
                            },
                        }))
            },
        }
    }
}
