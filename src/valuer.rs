//! SqlValuer：由调用方定义、在交给驱动之前才求值的参数。
//!
//! 片段组合阶段只负责携带 valuer，不会调用它；
//! 只有 [`Query::values`](crate::Query::values) 需要具体值时才会求值。

use crate::value::SqlValue;

/// Valuer 求值失败。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("sql valuer error: {0}")]
pub struct ValuerError(pub String);

/// 可在交付驱动前动态计算实际值的 trait。
pub trait SqlValuer: dyn_clone::DynClone + std::fmt::Debug + Send + Sync {
    fn value(&self) -> Result<SqlValue, ValuerError>;
}

dyn_clone::clone_trait_object!(SqlValuer);
