//! Expression tree and evaluation.

use super::errors::EvalError;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    Pi,
    E,
}
impl Constant {
    pub const fn value(self) -> f64 {
        match self {
            Constant::Pi => std::f64::consts::PI,
            Constant::E  => std::f64::consts::E,
        }
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}
impl BinaryOp {
    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "^",
        }
    }
}


/// Built-in single-argument functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sin, Cos, Tan,
    Asin, Acos, Atan,
    Sinh, Cosh, Tanh,
    Exp, Ln, Log10, Log2,
    Sqrt, Cbrt, Abs,
}

impl Function {
    /// Resolves a lower-case name. `log` is the natural log.
    pub fn from_name(name: &str) -> Option<Self> {
        let f = match name {
            "sin"  => Function::Sin,
            "cos"  => Function::Cos,
            "tan"  => Function::Tan,
            "asin" => Function::Asin,
            "acos" => Function::Acos,
            "atan" => Function::Atan,
            "sinh" => Function::Sinh,
            "cosh" => Function::Cosh,
            "tanh" => Function::Tanh,
            "exp"  => Function::Exp,
            "ln" | "log" => Function::Ln,
            "log10" => Function::Log10,
            "log2"  => Function::Log2,
            "sqrt" => Function::Sqrt,
            "cbrt" => Function::Cbrt,
            "abs"  => Function::Abs,
            _ => return None,
        };
        Some(f)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Function::Sin   => "sin",
            Function::Cos   => "cos",
            Function::Tan   => "tan",
            Function::Asin  => "asin",
            Function::Acos  => "acos",
            Function::Atan  => "atan",
            Function::Sinh  => "sinh",
            Function::Cosh  => "cosh",
            Function::Tanh  => "tanh",
            Function::Exp   => "exp",
            Function::Ln    => "ln",
            Function::Log10 => "log10",
            Function::Log2  => "log2",
            Function::Sqrt  => "sqrt",
            Function::Cbrt  => "cbrt",
            Function::Abs   => "abs",
        }
    }

    /// `false` where the function is undefined over the reals.
    fn in_domain(self, a: f64) -> bool {
        match self {
            Function::Ln | Function::Log10 | Function::Log2 => a > 0.0,
            Function::Sqrt                                  => a >= 0.0,
            Function::Asin | Function::Acos                 => (-1.0..=1.0).contains(&a),
            _ => true,
        }
    }

    fn apply(self, a: f64) -> f64 {
        match self {
            Function::Sin   => a.sin(),
            Function::Cos   => a.cos(),
            Function::Tan   => a.tan(),
            Function::Asin  => a.asin(),
            Function::Acos  => a.acos(),
            Function::Atan  => a.atan(),
            Function::Sinh  => a.sinh(),
            Function::Cosh  => a.cosh(),
            Function::Tanh  => a.tanh(),
            Function::Exp   => a.exp(),
            Function::Ln    => a.ln(),
            Function::Log10 => a.log10(),
            Function::Log2  => a.log2(),
            Function::Sqrt  => a.sqrt(),
            Function::Cbrt  => a.cbrt(),
            Function::Abs   => a.abs(),
        }
    }
}


#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Variable,
    Constant(Constant),
    Neg(Box<Expr>),
    Binary { op: BinaryOp, lhs: Box<Expr>, rhs: Box<Expr> },
    Call { function: Function, arg: Box<Expr> },
}

impl Expr {
    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary { op, lhs: Box::new(lhs), rhs: Box::new(rhs) }
    }

    pub fn call(function: Function, arg: Expr) -> Self {
        Expr::Call { function, arg: Box::new(arg) }
    }

    /// `true` if `x` appears anywhere in the tree.
    pub fn has_variable(&self) -> bool {
        match self {
            Expr::Variable                  => true,
            Expr::Number(_) | Expr::Constant(_) => false,
            Expr::Neg(inner)                => inner.has_variable(),
            Expr::Binary { lhs, rhs, .. }   => lhs.has_variable() || rhs.has_variable(),
            Expr::Call { arg, .. }          => arg.has_variable(),
        }
    }

    /// Evaluates the tree at `x`.
    ///
    /// # Errors
    /// - [`EvalError::DivisionByZero`] if a divisor is exactly zero
    /// - [`EvalError::Domain`] if an operation leaves the real domain
    ///   (`sqrt(-1)`, `ln(0)`, `(-8)^(1/3)`)
    /// - [`EvalError::NonFinite`] on overflow
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        match self {
            Expr::Number(v)    => Ok(*v),
            Expr::Variable     => Ok(x),
            Expr::Constant(c)  => Ok(c.value()),
            Expr::Neg(inner)   => Ok(-inner.eval(x)?),

            Expr::Binary { op, lhs, rhs } => {
                let a = lhs.eval(x)?;
                let b = rhs.eval(x)?;
                let v = match op {
                    BinaryOp::Add => a + b,
                    BinaryOp::Sub => a - b,
                    BinaryOp::Mul => a * b,
                    BinaryOp::Div => {
                        if b == 0.0 {
                            return Err(EvalError::DivisionByZero);
                        }
                        a / b
                    }
                    BinaryOp::Pow => a.powf(b),
                };
                checked(op.symbol(), a, v)
            }

            Expr::Call { function, arg } => {
                let a = arg.eval(x)?;
                if !function.in_domain(a) {
                    return Err(EvalError::Domain { op: function.name(), arg: a });
                }
                checked(function.name(), a, function.apply(a))
            }
        }
    }
}

#[inline]
fn checked(op: &'static str, arg: f64, v: f64) -> Result<f64, EvalError> {
    if v.is_nan() {
        return Err(EvalError::Domain { op, arg });
    }
    if v.is_infinite() {
        return Err(EvalError::NonFinite { op });
    }
    Ok(v)
}
