//! SQL 参数值类型。

use std::borrow::Cow;

/// SQL 参数值。片段本身不检查值的内容，只负责按顺序携带。
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    String(Cow<'static, str>),
    Bytes(Vec<u8>),
    DateTime(time::OffsetDateTime),
    /// 数组 / 嵌套结构（例如 PostgreSQL 的 `ANY($1)`），整体作为一个参数。
    Array(Vec<SqlValue>),
}

impl SqlValue {
    /// 将 `Option<T>` 映射为 `SqlValue`：`None => Null`，`Some(v) => v.into()`。
    pub fn from_option<T: Into<SqlValue>>(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

impl From<()> for SqlValue {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i8> for SqlValue {
    fn from(v: i8) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i16> for SqlValue {
    fn from(v: i16) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<u8> for SqlValue {
    fn from(v: u8) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u16> for SqlValue {
    fn from(v: u16) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u32> for SqlValue {
    fn from(v: u32) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u64> for SqlValue {
    fn from(v: u64) -> Self {
        Self::U64(v)
    }
}

impl From<f32> for SqlValue {
    fn from(v: f32) -> Self {
        Self::F64(v as f64)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        Self::String(Cow::Owned(v))
    }
}

impl From<&'static str> for SqlValue {
    fn from(v: &'static str) -> Self {
        Self::String(Cow::Borrowed(v))
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl From<time::OffsetDateTime> for SqlValue {
    fn from(v: time::OffsetDateTime) -> Self {
        Self::DateTime(v)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        Self::from_option(v)
    }
}

impl From<Vec<SqlValue>> for SqlValue {
    fn from(v: Vec<SqlValue>) -> Self {
        Self::Array(v)
    }
}

/// 为包装类型批量实现“所有可转为 `SqlValue` 的 Rust 类型”的 `From`。
macro_rules! impl_from_sql_values {
    (@each $target:ty, |$v:ident| $wrap:expr; $($t:ty),* $(,)?) => {
        $(
            impl From<$t> for $target {
                fn from(v: $t) -> Self {
                    let $v: $crate::value::SqlValue = v.into();
                    $wrap
                }
            }
        )*
    };
    ($target:ty, |$v:ident| $wrap:expr) => {
        $crate::value::impl_from_sql_values!(
            @each $target, |$v| $wrap;
            $crate::value::SqlValue, (), bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64,
            String, &'static str, Vec<u8>, time::OffsetDateTime, Vec<$crate::value::SqlValue>
        );
    };
}
pub(crate) use impl_from_sql_values;

#[cfg(test)]
mod tests {
    use super::SqlValue;
    use pretty_assertions::assert_eq;
    use time::macros::datetime;

    #[test]
    fn from_option_some() {
        assert_eq!(SqlValue::from_option(Some(123_i64)), SqlValue::I64(123));
    }

    #[test]
    fn from_option_none() {
        assert_eq!(SqlValue::from_option::<i64>(None), SqlValue::Null);
        assert_eq!(SqlValue::from(Option::<&'static str>::None), SqlValue::Null);
    }

    #[test]
    fn from_unit_is_null() {
        let v: SqlValue = ().into();
        assert_eq!(v, SqlValue::Null);
    }

    #[test]
    fn from_string_borrowed_and_owned() {
        let a: SqlValue = "abc".into();
        let b: SqlValue = String::from("abc").into();
        assert_eq!(a, b);
    }

    #[test]
    fn from_datetime() {
        let dt = datetime!(2024-01-02 03:04:05 UTC);
        assert_eq!(SqlValue::from(dt), SqlValue::DateTime(dt));
    }

    #[test]
    fn array_keeps_nesting() {
        let v: SqlValue = vec![SqlValue::from(1_i32), SqlValue::Array(vec![2_u8.into()])].into();
        assert_eq!(
            v,
            SqlValue::Array(vec![
                SqlValue::I64(1),
                SqlValue::Array(vec![SqlValue::U64(2)])
            ])
        );
    }
}
