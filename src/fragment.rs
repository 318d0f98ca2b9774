//! Fragment：字面文本段与绑定参数分离存储的 SQL 片段，以及把片段组合、展平的算法。
//!
//! 一个含 N 个参数的片段恰好有 N+1 个文本段，`segments[i]` 是第 i 个占位符之前的文本，
//! 最后一段是末尾文本。嵌套片段在组合时就地展开，因此任何片段都是“扁平”的。
//!
//! ```
//! use halo_fragment::{Fragment, Marker};
//!
//! let authors = Fragment::compose(["SELECT id FROM authors WHERE name = ", ""], ["Blake"]).unwrap();
//! let books = Fragment::compose(
//!     ["SELECT * FROM books WHERE author_id IN (", ")"],
//!     [authors],
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     books.to_sql(Marker::Dollar),
//!     "SELECT * FROM books WHERE author_id IN (SELECT id FROM authors WHERE name = $1)"
//! );
//! ```

use crate::arg::Arg;
use crate::error::FragmentError;
use crate::flavor::Flavor;
use crate::marker::Marker;
use crate::param::Param;
use crate::query::Query;
use crate::string_builder::StringBuilder;
use std::fmt;

/// 不可变的 SQL 片段。
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    segments: Vec<String>,
    params: Vec<Param>,
}

/// 只有字面文本、没有参数的片段。
pub fn raw(text: impl Into<String>) -> Fragment {
    Fragment::raw(text)
}

/// 空片段，等价于 `raw("")`。
pub fn empty() -> Fragment {
    Fragment::empty()
}

impl Fragment {
    /// 用字面文本段和值组合出一个片段。
    ///
    /// `segments` 必须恰好比 `args` 多一个。普通值变成一个占位符；
    /// [`Arg::Fragment`] 会被展开：其首段接到当前末段之后，参数依次追加，
    /// 外层紧随其后的文本再接到它的末段之后，所以接缝处不会多出占位符。
    pub fn compose<S, A>(
        segments: impl IntoIterator<Item = S>,
        args: impl IntoIterator<Item = A>,
    ) -> Result<Self, FragmentError>
    where
        S: Into<String>,
        A: Into<Arg>,
    {
        let literals: Vec<String> = segments.into_iter().map(Into::into).collect();
        let args: Vec<Arg> = args.into_iter().map(Into::into).collect();

        if literals.len() != args.len() + 1 {
            let err = if literals.is_empty() {
                FragmentError::EmptyTemplate
            } else {
                FragmentError::ArityMismatch {
                    expected: literals.len() - 1,
                    actual: args.len(),
                }
            };
            tracing::debug!(error = %err, "fragment composition rejected");
            return Err(err);
        }

        let mut literals = literals.into_iter();
        let mut out_segments = Vec::with_capacity(args.len() + 1);
        let mut out_params = Vec::with_capacity(args.len());
        out_segments.extend(literals.next());

        for (arg, literal) in args.into_iter().zip(literals) {
            match arg {
                Arg::Value(p) => {
                    out_params.push(p);
                    out_segments.push(literal);
                }
                Arg::Fragment(nested) => {
                    let (nested_segments, nested_params) = nested.into_parts();
                    let mut nested_segments = nested_segments.into_iter();
                    if let Some(head) = nested_segments.next() {
                        append_to_last(&mut out_segments, &head);
                    }
                    for (p, s) in nested_params.into_iter().zip(nested_segments) {
                        out_params.push(p);
                        out_segments.push(s);
                    }
                    append_to_last(&mut out_segments, &literal);
                }
            }
        }

        tracing::trace!(
            segments = out_segments.len(),
            params = out_params.len(),
            "fragment composed"
        );

        Ok(Self {
            segments: out_segments,
            params: out_params,
        })
    }

    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            segments: vec![text.into()],
            params: Vec::new(),
        }
    }

    pub fn empty() -> Self {
        Self::raw("")
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// 参数个数（即占位符个数）。
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// 没有参数且文本为空。
    pub fn is_empty(&self) -> bool {
        self.params.is_empty() && self.segments.iter().all(String::is_empty)
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Param>) {
        (self.segments, self.params)
    }

    /// 按 `marker` 渲染 SQL 文本。
    pub fn to_sql(&self, marker: Marker) -> String {
        self.write_sql(marker, 0)
    }

    /// 按 `marker` 渲染，得到 `(sql, params)`。
    pub fn render(&self, marker: Marker) -> Query {
        self.render_from(marker, 0)
    }

    /// 与 [`render`](Self::render) 相同，但编号占位符从 `offset + 1` 开始，
    /// 用于拼接到已经绑定了 `offset` 个参数的语句之后。`?` 风格不受影响。
    pub fn render_from(&self, marker: Marker, offset: usize) -> Query {
        Query::new(self.write_sql(marker, offset), self.params.clone())
    }

    pub fn build_with_flavor(&self, flavor: Flavor) -> Query {
        self.render(flavor.marker())
    }

    /// 主占位符风格 `?` 下的 `(sql, params)`；结果只取决于片段本身。
    pub fn build(&self) -> Query {
        self.render(Marker::Question)
    }

    /// 主风格 `?` 下的 SQL 文本；参数见 [`params`](Self::params)。
    pub fn text(&self) -> String {
        self.to_sql(Marker::Question)
    }

    pub fn to_anonymous(&self) -> Query {
        self.render(Marker::Question)
    }

    pub fn to_numbered(&self) -> Query {
        self.render(Marker::Dollar)
    }

    pub fn to_colon_numbered(&self) -> Query {
        self.render(Marker::Colon)
    }

    fn write_sql(&self, marker: Marker, offset: usize) -> String {
        let text_len: usize = self.segments.iter().map(String::len).sum();
        let mut buf = StringBuilder::with_capacity(text_len + self.params.len() * 4);
        let mut segments = self.segments.iter();
        if let Some(first) = segments.next() {
            buf.write_str(first);
        }
        for (i, seg) in segments.enumerate() {
            buf.write_placeholder(marker, offset + i + 1);
            buf.write_str(seg);
        }
        buf.into_string()
    }
}

fn append_to_last(segments: &mut [String], text: &str) {
    if let Some(last) = segments.last_mut() {
        last.push_str(text);
    }
}

impl Default for Fragment {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
