//! halo-sql-fragment：可组合的参数化 SQL 片段。
//!
//! 字面 SQL 文本与绑定参数分开存储，最终渲染为驱动所需的 `(sql, params)`，
//! 而不是把值拼进字符串。

pub mod arg;
pub mod error;
pub mod flavor;
pub mod fragment;
pub mod join;
pub mod macros;
#[cfg(test)]
mod macros_tests;
pub mod marker;
pub mod param;
pub mod query;
mod string_builder;
pub mod template;
pub mod value;
pub mod valuer;

pub use crate::arg::Arg;
pub use crate::error::FragmentError;
pub use crate::flavor::{Flavor, UnknownFlavor};
pub use crate::fragment::{Fragment, empty, raw};
pub use crate::join::{JoinOptions, bulk, bulk_with, join, join_with};
pub use crate::marker::Marker;
pub use crate::param::Param;
pub use crate::query::Query;
pub use crate::template::template;
pub use crate::value::SqlValue;
pub use crate::valuer::{SqlValuer, ValuerError};
