//! 组合时的值槽：普通参数或嵌套片段。

use crate::fragment::Fragment;
use crate::param::Param;
use crate::value::SqlValue;
use crate::valuer::SqlValuer;

/// 传给 [`Fragment::compose`] 的一个值。
///
/// - `Value`：成为一个占位符和一个参数。
/// - `Fragment`：原地展开，文本与参数都并入外层片段。
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Value(Param),
    Fragment(Fragment),
}

crate::value::impl_from_sql_values!(Arg, |v| Arg::Value(Param::Value(v)));

impl<T: Into<SqlValue>> From<Option<T>> for Arg {
    fn from(v: Option<T>) -> Self {
        Self::Value(Param::Value(SqlValue::from_option(v)))
    }
}

impl From<Param> for Arg {
    fn from(v: Param) -> Self {
        Self::Value(v)
    }
}

impl From<Box<dyn SqlValuer>> for Arg {
    fn from(v: Box<dyn SqlValuer>) -> Self {
        Self::Value(Param::Valuer(v))
    }
}

impl From<Fragment> for Arg {
    fn from(v: Fragment) -> Self {
        Self::Fragment(v)
    }
}

impl From<&Fragment> for Arg {
    fn from(v: &Fragment) -> Self {
        Self::Fragment(v.clone())
    }
}
