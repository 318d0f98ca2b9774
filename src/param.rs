//! 片段中携带的绑定参数。

use crate::value::SqlValue;
use crate::valuer::{SqlValuer, ValuerError};

/// 一个绑定参数：具体值，或由调用方提供的 valuer。
#[derive(Clone)]
pub enum Param {
    Value(SqlValue),
    Valuer(Box<dyn SqlValuer>),
}

impl Param {
    /// 求出具体值；valuer 会在这里被调用。
    pub fn resolve(&self) -> Result<SqlValue, ValuerError> {
        match self {
            Self::Value(v) => Ok(v.clone()),
            Self::Valuer(v) => v.value(),
        }
    }
}

impl std::fmt::Debug for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Valuer(v) => f.debug_tuple("Valuer").field(v).finish(),
        }
    }
}

/// valuer 是不透明的，与任何参数都不相等。
impl PartialEq for Param {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => a == b,
            _ => false,
        }
    }
}

crate::value::impl_from_sql_values!(Param, |v| Param::Value(v));

impl<T: Into<SqlValue>> From<Option<T>> for Param {
    fn from(v: Option<T>) -> Self {
        Self::Value(SqlValue::from_option(v))
    }
}

impl From<Box<dyn SqlValuer>> for Param {
    fn from(v: Box<dyn SqlValuer>) -> Self {
        Self::Valuer(v)
    }
}

#[cfg(test)]
mod tests {
    use super::Param;
    use crate::value::SqlValue;
    use crate::valuer::{SqlValuer, ValuerError};
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone)]
    struct Fixed(i64);

    impl SqlValuer for Fixed {
        fn value(&self) -> Result<SqlValue, ValuerError> {
            Ok(SqlValue::I64(self.0))
        }
    }

    #[derive(Debug, Clone)]
    struct Broken;

    impl SqlValuer for Broken {
        fn value(&self) -> Result<SqlValue, ValuerError> {
            Err(ValuerError("broken".into()))
        }
    }

    #[test]
    fn resolve_plain_value() {
        let p = Param::from("Blake");
        assert_eq!(p.resolve(), Ok(SqlValue::from("Blake")));
    }

    #[test]
    fn resolve_valuer() {
        let p = Param::from(Box::new(Fixed(7)) as Box<dyn SqlValuer>);
        assert_eq!(p.resolve(), Ok(SqlValue::I64(7)));

        let bad = Param::from(Box::new(Broken) as Box<dyn SqlValuer>);
        assert_eq!(bad.resolve(), Err(ValuerError("broken".into())));
    }

    #[test]
    fn valuer_never_equal() {
        let p = Param::from(Box::new(Fixed(1)) as Box<dyn SqlValuer>);
        assert!(p != p.clone());
        assert_eq!(Param::from(1_i64), Param::from(1_i32));
    }
}
