#[cfg(test)]
mod tests {
    use crate::error::FragmentError;
    use crate::fragment::Fragment;
    use crate::join::{bulk, join};
    use crate::param::Param;
    use crate::template::template;
    use crate::value::SqlValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn sql_macro_without_values() {
        let f = crate::sql!("SELECT * FROM books").unwrap();
        assert_eq!(f.to_anonymous().sql, "SELECT * FROM books");
        assert!(f.params().is_empty());
    }

    #[test]
    fn sql_macro_matches_compose() {
        let author = "Blake";
        let from_macro = crate::sql!("SELECT * FROM books WHERE author = {}", author).unwrap();
        let composed =
            Fragment::compose(["SELECT * FROM books WHERE author = ", ""], [author]).unwrap();
        assert_eq!(from_macro, composed);
    }

    #[test]
    fn sql_macro_nests_fragments_and_builders() {
        let ids = join([1_i64, 2, 3]).unwrap();
        let rows = bulk([["Blake"], ["Taylor"]]).unwrap();
        let upsert = crate::sql!(
            "INSERT INTO authors (name) VALUES {} ON CONFLICT DO NOTHING; DELETE FROM books WHERE id IN ({}) AND draft = {}",
            rows,
            &ids,
            true,
        )
        .unwrap();

        let q = upsert.to_numbered();
        assert_eq!(
            q.sql,
            "INSERT INTO authors (name) VALUES ($1),($2) ON CONFLICT DO NOTHING; DELETE FROM books WHERE id IN ($3,$4,$5) AND draft = $6"
        );
        assert_eq!(
            q.params,
            vec![
                Param::from("Blake"),
                Param::from("Taylor"),
                Param::from(1_i64),
                Param::from(2_i64),
                Param::from(3_i64),
                Param::from(SqlValue::Bool(true)),
            ]
        );
    }

    #[test]
    fn sql_macro_reports_arity() {
        assert_eq!(
            crate::sql!("a = {} AND b = {}", 1_i64),
            Err(FragmentError::ArityMismatch {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(
            template("a = 1", [2_i64]),
            Err(FragmentError::ArityMismatch {
                expected: 0,
                actual: 1
            })
        );
    }

    #[test]
    fn sql_macro_keeps_escaped_braces() {
        let f = crate::sql!("SELECT '{{}}' || {}", Option::<i64>::None).unwrap();
        assert_eq!(f.to_anonymous().sql, "SELECT '{}' || ?");
        assert_eq!(f.params(), &[Param::Value(SqlValue::Null)]);
    }
}
