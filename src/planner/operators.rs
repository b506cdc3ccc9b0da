// Mon Feb 16 2026 - Alex

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Unambiguous operator tokens -> generated method names, covering the
/// C++-overloadable set. Tokens whose meaning depends on arity are handled
/// separately in [`operator_method_name`].
static OPERATOR_TABLE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut table = HashMap::new();
    table.insert("/", "OperatorDivide");
    table.insert("%", "OperatorModulo");
    table.insert("^", "OperatorBitwiseXor");
    table.insert("|", "OperatorBitwiseOr");
    table.insert("~", "OperatorBitwiseNot");
    table.insert("!", "OperatorLogicalNot");
    table.insert("=", "OperatorAssign");
    table.insert("<", "OperatorLess");
    table.insert(">", "OperatorGreater");
    table.insert("+=", "OperatorAddAssign");
    table.insert("-=", "OperatorSubtractAssign");
    table.insert("*=", "OperatorMultiplyAssign");
    table.insert("/=", "OperatorDivideAssign");
    table.insert("%=", "OperatorModuloAssign");
    table.insert("^=", "OperatorXorAssign");
    table.insert("&=", "OperatorAndAssign");
    table.insert("|=", "OperatorOrAssign");
    table.insert("<<", "OperatorShiftLeft");
    table.insert(">>", "OperatorShiftRight");
    table.insert("<<=", "OperatorShiftLeftAssign");
    table.insert(">>=", "OperatorShiftRightAssign");
    table.insert("==", "OperatorEquals");
    table.insert("!=", "OperatorNotEquals");
    table.insert("<=", "OperatorLessEquals");
    table.insert(">=", "OperatorGreaterEquals");
    table.insert("&&", "OperatorLogicalAnd");
    table.insert("||", "OperatorLogicalOr");
    table.insert("++", "OperatorIncrement");
    table.insert("--", "OperatorDecrement");
    table.insert(",", "OperatorComma");
    table.insert("->", "OperatorArrow");
    table.insert("->*", "OperatorArrowStar");
    table.insert("[]", "OperatorIndex");
    table.insert("new", "OperatorNew");
    table.insert("delete", "OperatorDelete");
    table.insert("new[]", "OperatorNewArray");
    table.insert("delete[]", "OperatorDeleteArray");
    table
});

/// Map a declared operator name (`operator+`, `operator[]`, ...) to its
/// generated method name. `param_count` is the declared parameter count,
/// excluding any implicit receiver; it disambiguates the tokens whose unary
/// and binary forms differ.
pub fn operator_method_name(declared: &str, param_count: usize) -> Option<&'static str> {
    let token = declared.strip_prefix("operator").unwrap_or(declared).trim();
    if token.is_empty() {
        return None;
    }

    match token {
        "+" => Some(if param_count == 0 { "OperatorPlus" } else { "OperatorAdd" }),
        "-" => Some(if param_count == 0 { "OperatorNegate" } else { "OperatorSubtract" }),
        "*" => Some(if param_count == 0 { "OperatorDereference" } else { "OperatorMultiply" }),
        "&" => Some(if param_count == 0 { "OperatorAddressOf" } else { "OperatorBitwiseAnd" }),
        "()" => Some(if param_count == 1 { "OperatorCast" } else { "OperatorCall" }),
        _ => OPERATOR_TABLE.get(token).copied(),
    }
}
