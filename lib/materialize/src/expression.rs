use crate::{MaterializeError, MaterializeResult};
use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used, reason = "The pattern is a constant")]
static UNPRINTABLE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{C}\p{Z}]+").expect("valid pattern"));

/// Evaluates the expression of an expression value source.
///
/// Expressions belong to the host application. Hosts plug their expression language in
/// through this trait.
pub trait ExpressionEvaluator {
    /// Evaluates `expression` with `value` bound to the input value.
    ///
    /// Returns `None` if the expression produces no value.
    fn evaluate(&self, expression: &str, value: &str) -> MaterializeResult<Option<String>>;

    /// Rejects expressions that [ExpressionEvaluator::evaluate] can never handle.
    ///
    /// Called once per expression when a [Materializer](crate::Materializer) is created. The
    /// default accepts everything and leaves errors to evaluation.
    fn check(&self, _expression: &str) -> MaterializeResult<()> {
        Ok(())
    }
}

/// Understands the identity expression and a few string cleanups:
///
/// - `value`
/// - `value.trim()` or `trim(value)`
/// - `value.toStrippedLiteral()` or `toStrippedLiteral(value)`, see [strip_literal]
///
/// An optional `grel:` language prefix is accepted.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinEvaluator;

#[derive(Clone, Copy)]
enum Builtin {
    Identity,
    Trim,
    StripLiteral,
}

impl Builtin {
    fn parse(expression: &str) -> MaterializeResult<Self> {
        let body = expression.trim();
        let body = body.strip_prefix("grel:").unwrap_or(body).trim();
        match body {
            "value" => Ok(Builtin::Identity),
            "value.trim()" | "trim(value)" => Ok(Builtin::Trim),
            "value.toStrippedLiteral()" | "toStrippedLiteral(value)" => Ok(Builtin::StripLiteral),
            _ => Err(MaterializeError::UnsupportedExpression(expression.to_owned())),
        }
    }
}

impl ExpressionEvaluator for BuiltinEvaluator {
    fn evaluate(&self, expression: &str, value: &str) -> MaterializeResult<Option<String>> {
        let result = match Builtin::parse(expression)? {
            Builtin::Identity => value.to_owned(),
            Builtin::Trim => value.trim().to_owned(),
            Builtin::StripLiteral => strip_literal(value),
        };
        Ok(Some(result))
    }

    fn check(&self, expression: &str) -> MaterializeResult<()> {
        Builtin::parse(expression).map(|_| ())
    }
}

/// Prepares a string for use as a literal: runs of separators (including non-breaking spaces)
/// and control characters become a single space, and the ends are trimmed.
///
/// This departs from the OpenRefine `toStrippedLiteral` function of the RDF Transform extension,
/// which deletes such runs outright and fails on empty input. Here `"a\u{A0}b"` becomes `"a b"`
/// rather than `"ab"`, and empty input yields an empty string, which produces no term.
pub fn strip_literal(value: &str) -> String {
    UNPRINTABLE_RUNS.replace_all(value, " ").trim().to_owned()
}
