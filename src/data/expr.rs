//! Expression evaluation over a sampled domain.
//!
//! Expressions are parsed once into an [`Expr`] tree and then evaluated
//! elementwise against the domain samples. Intermediate results are either a
//! scalar or an array with one value per sample; binary operations broadcast a
//! scalar against an array, so `2`, `pi / 4` and `x**2` all evaluate without any
//! rewriting of the source text.
//!
//! Grammar (lowest to highest precedence):
//!
//! ```text
//! sum     := product (('+' | '-') product)*
//! product := unary (('*' | '/' | '%') unary)*
//! unary   := ('+' | '-') unary | power
//! power   := atom (('**' | '^') unary)?
//! atom    := number | 'x' | 'pi' | 'e' | ident '(' args ')' | '(' sum ')'
//! ```

use thiserror::Error;

/// Name of the free variable sampled over the domain.
pub const VARIABLE: &str = "x";

/// Deepest syntax tree the parser builds. Evaluation and drop recurse over the
/// tree, so the bound keeps them within the stack.
pub const MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("empty expression")]
    Empty,
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    #[error("unexpected '{found}' at position {pos}")]
    UnexpectedToken { found: String, pos: usize },
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("invalid number '{text}' at position {pos}")]
    InvalidNumber { text: String, pos: usize },
    #[error("unknown identifier '{0}'")]
    UnknownIdentifier(String),
    #[error("unknown function '{0}'")]
    UnknownFunction(String),
    #[error("function '{name}' takes {expected} argument(s), got {got}")]
    WrongArity {
        name: String,
        expected: usize,
        got: usize,
    },
    #[error("expression nested too deeply at position {pos}")]
    TooDeep { pos: usize },
}

// ---------- Tokens ----------

#[derive(Debug, Clone, PartialEq)]
enum Tok {
    Num(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Pow,
    LParen,
    RParen,
    Comma,
}

impl Tok {
    fn describe(&self) -> String {
        match self {
            Tok::Num(v) => v.to_string(),
            Tok::Ident(s) => s.clone(),
            Tok::Plus => "+".into(),
            Tok::Minus => "-".into(),
            Tok::Star => "*".into(),
            Tok::Slash => "/".into(),
            Tok::Percent => "%".into(),
            Tok::Pow => "**".into(),
            Tok::LParen => "(".into(),
            Tok::RParen => ")".into(),
            Tok::Comma => ",".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Token {
    tok: Tok,
    pos: usize,
}

fn tokenize(src: &str) -> Result<Vec<Token>, EvalError> {
    let bytes = src.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i];
        let start = i;
        let tok = match c {
            b' ' | b'\t' | b'\n' | b'\r' => {
                i += 1;
                continue;
            }
            b'0'..=b'9' | b'.' => {
                i = scan_number(bytes, i);
                let text = &src[start..i];
                let v: f64 = text.parse().map_err(|_| EvalError::InvalidNumber {
                    text: text.to_string(),
                    pos: start,
                })?;
                Tok::Num(v)
            }
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => {
                while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                    i += 1;
                }
                Tok::Ident(src[start..i].to_string())
            }
            b'*' if bytes.get(i + 1) == Some(&b'*') => {
                i += 2;
                Tok::Pow
            }
            _ => {
                let tok = match c {
                    b'+' => Tok::Plus,
                    b'-' => Tok::Minus,
                    b'*' => Tok::Star,
                    b'/' => Tok::Slash,
                    b'%' => Tok::Percent,
                    b'^' => Tok::Pow,
                    b'(' => Tok::LParen,
                    b')' => Tok::RParen,
                    b',' => Tok::Comma,
                    _ => {
                        let ch = src[start..].chars().next().unwrap_or('?');
                        return Err(EvalError::UnexpectedChar { ch, pos: start });
                    }
                };
                i += 1;
                tok
            }
        };
        out.push(Token { tok, pos: start });
    }
    Ok(out)
}

/// Returns the index one past the end of the numeric literal starting at `i`.
fn scan_number(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        // Only an exponent when digits follow; otherwise `e` starts an identifier.
        if j < bytes.len() && bytes[j].is_ascii_digit() {
            i = j;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
        }
    }
    i
}

// ---------- Syntax tree ----------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl BinOp {
    fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            BinOp::Add => a + b,
            BinOp::Sub => a - b,
            BinOp::Mul => a * b,
            BinOp::Div => a / b,
            // Result takes the sign of the divisor.
            BinOp::Rem => a - b * (a / b).floor(),
            BinOp::Pow => a.powf(b),
        }
    }
}

/// Built-in functions callable from expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
    Exp,
    Expm1,
    Ln,
    Log10,
    Log2,
    Log1p,
    Sqrt,
    Abs,
    Floor,
    Ceil,
    Sign,
    Atan2,
    Pow,
}

impl Func {
    pub fn lookup(name: &str) -> Option<Func> {
        let f = match name {
            "sin" => Func::Sin,
            "cos" => Func::Cos,
            "tan" => Func::Tan,
            "arcsin" | "asin" => Func::Asin,
            "arccos" | "acos" => Func::Acos,
            "arctan" | "atan" => Func::Atan,
            "sinh" => Func::Sinh,
            "cosh" => Func::Cosh,
            "tanh" => Func::Tanh,
            "arcsinh" | "asinh" => Func::Asinh,
            "arccosh" | "acosh" => Func::Acosh,
            "arctanh" | "atanh" => Func::Atanh,
            "exp" => Func::Exp,
            "expm1" => Func::Expm1,
            "log" | "ln" => Func::Ln,
            "log10" => Func::Log10,
            "log2" => Func::Log2,
            "log1p" => Func::Log1p,
            "sqrt" => Func::Sqrt,
            "abs" => Func::Abs,
            "floor" => Func::Floor,
            "ceil" => Func::Ceil,
            "sign" => Func::Sign,
            "arctan2" | "atan2" => Func::Atan2,
            "pow" => Func::Pow,
            _ => return None,
        };
        Some(f)
    }

    pub fn arity(self) -> usize {
        match self {
            Func::Atan2 | Func::Pow => 2,
            _ => 1,
        }
    }

    fn apply1(self, v: f64) -> f64 {
        match self {
            Func::Sin => v.sin(),
            Func::Cos => v.cos(),
            Func::Tan => v.tan(),
            Func::Asin => v.asin(),
            Func::Acos => v.acos(),
            Func::Atan => v.atan(),
            Func::Sinh => v.sinh(),
            Func::Cosh => v.cosh(),
            Func::Tanh => v.tanh(),
            Func::Asinh => v.asinh(),
            Func::Acosh => v.acosh(),
            Func::Atanh => v.atanh(),
            Func::Exp => v.exp(),
            Func::Expm1 => v.exp_m1(),
            Func::Ln => v.ln(),
            Func::Log10 => v.log10(),
            Func::Log2 => v.log2(),
            Func::Log1p => v.ln_1p(),
            Func::Sqrt => v.sqrt(),
            Func::Abs => v.abs(),
            Func::Floor => v.floor(),
            Func::Ceil => v.ceil(),
            Func::Sign => {
                if v > 0.0 {
                    1.0
                } else if v < 0.0 {
                    -1.0
                } else {
                    v
                }
            }
            Func::Atan2 | Func::Pow => f64::NAN,
        }
    }

    fn apply2(self, a: f64, b: f64) -> f64 {
        match self {
            Func::Atan2 => a.atan2(b),
            Func::Pow => a.powf(b),
            _ => f64::NAN,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Num(f64),
    Var,
    Neg(Box<Expr>),
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Call {
        func: Func,
        args: Vec<Expr>,
    },
}

// ---------- Parser ----------

struct Parser {
    tokens: Vec<Token>,
    at: usize,
    /// Height of the tree along the path currently being parsed.
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Tok> {
        self.tokens.get(self.at).map(|t| &t.tok)
    }

    fn next(&mut self) -> Option<Token> {
        let t = self.tokens.get(self.at).cloned();
        if t.is_some() {
            self.at += 1;
        }
        t
    }

    /// Descend one tree level, failing past [`MAX_DEPTH`].
    fn enter(&mut self) -> Result<(), EvalError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            let pos = self
                .tokens
                .get(self.at)
                .or(self.tokens.last())
                .map_or(0, |t| t.pos);
            return Err(EvalError::TooDeep { pos });
        }
        Ok(())
    }

    fn unexpected(tok: Token) -> EvalError {
        EvalError::UnexpectedToken {
            found: tok.tok.describe(),
            pos: tok.pos,
        }
    }

    fn expect(&mut self, want: Tok) -> Result<(), EvalError> {
        match self.next() {
            Some(t) if t.tok == want => Ok(()),
            Some(t) => Err(Self::unexpected(t)),
            None => Err(EvalError::UnexpectedEnd),
        }
    }

    fn sum(&mut self) -> Result<Expr, EvalError> {
        let base = self.depth;
        let mut lhs = self.product()?;
        loop {
            let op = match self.peek() {
                Some(Tok::Plus) => BinOp::Add,
                Some(Tok::Minus) => BinOp::Sub,
                _ => break,
            };
            self.at += 1;
            // Each operator in a chain adds a level to the left-leaning tree.
            self.enter()?;
            let rhs = self.product()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        self.depth = base;
        Ok(lhs)
    }

    fn product(&mut self) -> Result<Expr, EvalError> {
        let base = self.depth;
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek() {
                Some(Tok::Star) => BinOp::Mul,
                Some(Tok::Slash) => BinOp::Div,
                Some(Tok::Percent) => BinOp::Rem,
                _ => break,
            };
            self.at += 1;
            self.enter()?;
            let rhs = self.unary()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        self.depth = base;
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Expr, EvalError> {
        self.enter()?;
        let expr = match self.peek() {
            Some(Tok::Minus) => {
                self.at += 1;
                Ok(Expr::Neg(Box::new(self.unary()?)))
            }
            Some(Tok::Plus) => {
                self.at += 1;
                self.unary()
            }
            _ => self.power(),
        }?;
        self.depth -= 1;
        Ok(expr)
    }

    fn power(&mut self) -> Result<Expr, EvalError> {
        let base = self.atom()?;
        if let Some(Tok::Pow) = self.peek() {
            self.at += 1;
            // Right-associative; the exponent may carry its own sign.
            let exp = self.unary()?;
            return Ok(Expr::Binary {
                op: BinOp::Pow,
                lhs: Box::new(base),
                rhs: Box::new(exp),
            });
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<Expr, EvalError> {
        let Token { tok, pos } = self.next().ok_or(EvalError::UnexpectedEnd)?;
        match tok {
            Tok::Num(v) => Ok(Expr::Num(v)),
            Tok::LParen => {
                let inner = self.sum()?;
                self.expect(Tok::RParen)?;
                Ok(inner)
            }
            Tok::Ident(name) => {
                if let Some(Tok::LParen) = self.peek() {
                    self.at += 1;
                    self.call(name)
                } else {
                    match name.as_str() {
                        VARIABLE => Ok(Expr::Var),
                        "pi" => Ok(Expr::Num(std::f64::consts::PI)),
                        "e" => Ok(Expr::Num(std::f64::consts::E)),
                        _ => Err(EvalError::UnknownIdentifier(name)),
                    }
                }
            }
            other => Err(EvalError::UnexpectedToken {
                found: other.describe(),
                pos,
            }),
        }
    }

    fn call(&mut self, name: String) -> Result<Expr, EvalError> {
        let func = Func::lookup(&name).ok_or_else(|| EvalError::UnknownFunction(name.clone()))?;
        let mut args = Vec::new();
        if let Some(Tok::RParen) = self.peek() {
            self.at += 1;
        } else {
            loop {
                args.push(self.sum()?);
                match self.next() {
                    Some(Token { tok: Tok::Comma, .. }) => continue,
                    Some(Token { tok: Tok::RParen, .. }) => break,
                    Some(t) => return Err(Self::unexpected(t)),
                    None => return Err(EvalError::UnexpectedEnd),
                }
            }
        }
        if args.len() != func.arity() {
            return Err(EvalError::WrongArity {
                name,
                expected: func.arity(),
                got: args.len(),
            });
        }
        Ok(Expr::Call { func, args })
    }
}

/// Parse an expression string into a syntax tree.
pub fn parse(src: &str) -> Result<Expr, EvalError> {
    let tokens = tokenize(src)?;
    if tokens.is_empty() {
        return Err(EvalError::Empty);
    }
    let mut p = Parser {
        tokens,
        at: 0,
        depth: 0,
    };
    let expr = p.sum()?;
    match p.next() {
        None => Ok(expr),
        Some(t) => Err(Parser::unexpected(t)),
    }
}

// ---------- Evaluation ----------

/// Intermediate evaluation result.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(f64),
    Array(Vec<f64>),
}

impl Value {
    fn map(self, f: impl Fn(f64) -> f64) -> Value {
        match self {
            Value::Scalar(v) => Value::Scalar(f(v)),
            Value::Array(mut a) => {
                a.iter_mut().for_each(|v| *v = f(*v));
                Value::Array(a)
            }
        }
    }

    fn zip_with(self, other: Value, f: impl Fn(f64, f64) -> f64) -> Value {
        match (self, other) {
            (Value::Scalar(a), Value::Scalar(b)) => Value::Scalar(f(a, b)),
            (Value::Scalar(a), Value::Array(mut b)) => {
                b.iter_mut().for_each(|v| *v = f(a, *v));
                Value::Array(b)
            }
            (Value::Array(mut a), Value::Scalar(b)) => {
                a.iter_mut().for_each(|v| *v = f(*v, b));
                Value::Array(a)
            }
            (Value::Array(mut a), Value::Array(b)) => {
                a.iter_mut().zip(b).for_each(|(v, w)| *v = f(*v, w));
                Value::Array(a)
            }
        }
    }

    /// Broadcast to an array of `len` samples.
    pub fn into_array(self, len: usize) -> Vec<f64> {
        match self {
            Value::Scalar(v) => vec![v; len],
            Value::Array(a) => a,
        }
    }
}

impl Expr {
    pub fn eval(&self, xs: &[f64]) -> Value {
        match self {
            Expr::Num(v) => Value::Scalar(*v),
            Expr::Var => Value::Array(xs.to_vec()),
            Expr::Neg(inner) => inner.eval(xs).map(|v| -v),
            Expr::Binary { op, lhs, rhs } => {
                let op = *op;
                lhs.eval(xs).zip_with(rhs.eval(xs), move |a, b| op.apply(a, b))
            }
            Expr::Call { func, args } => {
                let func = *func;
                match args.as_slice() {
                    [a] => a.eval(xs).map(move |v| func.apply1(v)),
                    [a, b] => a.eval(xs).zip_with(b.eval(xs), move |p, q| func.apply2(p, q)),
                    _ => Value::Scalar(f64::NAN),
                }
            }
        }
    }
}

/// Parse `src` and evaluate it over every sample in `xs`.
///
/// The result always has `xs.len()` values; expressions that do not mention the
/// variable are broadcast to a constant array.
pub fn evaluate(src: &str, xs: &[f64]) -> Result<Vec<f64>, EvalError> {
    Ok(parse(src)?.eval(xs).into_array(xs.len()))
}
