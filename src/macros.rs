//! `sql!`：以模板字符串形式组合片段，值按出现顺序填入 `{}`。
//!
//! ```
//! use halo_fragment::{Marker, sql};
//!
//! let author = "Blake";
//! let sub = sql!("SELECT id FROM authors WHERE name = {}", author).unwrap();
//! let q = sql!("SELECT * FROM books WHERE author_id IN ({}) LIMIT {}", sub, 10).unwrap();
//!
//! assert_eq!(
//!     q.to_sql(Marker::Dollar),
//!     "SELECT * FROM books WHERE author_id IN (SELECT id FROM authors WHERE name = $1) LIMIT $2"
//! );
//! ```

/// 返回 `Result<Fragment, FragmentError>`；`{}` 的个数与值的个数不一致时为 `ArityMismatch`。
#[macro_export]
macro_rules! sql {
    ($format:expr $(,)?) => {
        $crate::template::template($format, ::std::vec::Vec::<$crate::Arg>::new())
    };
    ($format:expr, $($arg:expr),+ $(,)?) => {
        $crate::template::template($format, ::std::vec![$($crate::Arg::from($arg)),+])
    };
}
pub use crate::sql;
