//! Query：交给数据库驱动的 `(sql, params)` 结果。

use crate::param::Param;
use crate::value::SqlValue;
use crate::valuer::ValuerError;

/// 渲染完成的查询：SQL 文本中的占位符与 `params` 一一对应、顺序一致。
///
/// `Query` 是最终产物，不能再作为参数嵌套进别的片段；需要继续组合时请保留 [`Fragment`](crate::Fragment)。
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub sql: String,
    pub params: Vec<Param>,
}

impl Query {
    pub fn new(sql: impl Into<String>, params: Vec<Param>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    pub fn into_parts(self) -> (String, Vec<Param>) {
        (self.sql, self.params)
    }

    /// 求出所有参数的具体值（调用其中的 valuer），遇到第一个错误即返回。
    pub fn values(&self) -> Result<Vec<SqlValue>, ValuerError> {
        self.params.iter().map(Param::resolve).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Query;
    use crate::param::Param;
    use crate::value::SqlValue;
    use crate::valuer::{SqlValuer, ValuerError};
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone)]
    struct Failing;

    impl SqlValuer for Failing {
        fn value(&self) -> Result<SqlValue, ValuerError> {
            Err(ValuerError("no value".into()))
        }
    }

    #[test]
    fn values_resolve_in_order() {
        let q = Query::new("a = ? AND b = ?", vec![Param::from(1_i64), Param::from("x")]);
        assert_eq!(
            q.values(),
            Ok(vec![SqlValue::I64(1), SqlValue::from("x")])
        );
        let (sql, params) = q.into_parts();
        assert_eq!(sql, "a = ? AND b = ?");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn fields_follow_rendered_fragment() {
        let f = crate::sql!("name = {} AND age > {}", "Blake", 30_i64).unwrap();
        let q = f.build();
        assert_eq!(q.sql, "name = ? AND age > ?");
        assert_eq!(q.params, f.params());
        assert_eq!(q.params.len(), f.param_count());
    }

    #[test]
    fn values_stop_on_valuer_error() {
        let q = Query::new(
            "a = ?",
            vec![Param::from(Box::new(Failing) as Box<dyn SqlValuer>)],
        );
        assert_eq!(q.values(), Err(ValuerError("no value".into())));
    }
}
