//! join / bulk：把一组值或一组行包装成单个片段，全部交给 [`Fragment::compose`] 完成。

use crate::arg::Arg;
use crate::error::FragmentError;
use crate::fragment::Fragment;

/// join / bulk 的分隔符与前后缀。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinOptions {
    pub separator: String,
    pub prefix: String,
    pub suffix: String,
}

impl Default for JoinOptions {
    fn default() -> Self {
        Self {
            separator: ",".to_string(),
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}

impl JoinOptions {
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }
}

/// 用 `,` 连接所有值：`join([1, 2, 3])` 渲染为 `?,?,?`。
pub fn join<A: Into<Arg>>(values: impl IntoIterator<Item = A>) -> Result<Fragment, FragmentError> {
    join_with(values, &JoinOptions::default())
}

/// 以 `[prefix, sep, ..., sep, suffix]` 为文本段组合 `values`。
pub fn join_with<A: Into<Arg>>(
    values: impl IntoIterator<Item = A>,
    opts: &JoinOptions,
) -> Result<Fragment, FragmentError> {
    let values: Vec<Arg> = values.into_iter().map(Into::into).collect();
    if values.is_empty() {
        tracing::debug!("join called without values");
        return Err(FragmentError::EmptyJoinInput);
    }
    Fragment::compose(
        delimited(&opts.prefix, &opts.separator, &opts.suffix, values.len()),
        values,
    )
}

/// 把二维数组组合为 `(?,?),(?,?)` 形式的元组列表，行内与行间都使用默认 `,`。
pub fn bulk<R, A>(rows: impl IntoIterator<Item = R>) -> Result<Fragment, FragmentError>
where
    R: IntoIterator<Item = A>,
    A: Into<Arg>,
{
    bulk_with(rows, &JoinOptions::default())
}

/// 每行先组合成 `(` + 以 `separator` 连接的值 + `)`，再用同一组选项 join 所有行。
///
/// 所有行的列数必须与第 0 行一致。
pub fn bulk_with<R, A>(
    rows: impl IntoIterator<Item = R>,
    opts: &JoinOptions,
) -> Result<Fragment, FragmentError>
where
    R: IntoIterator<Item = A>,
    A: Into<Arg>,
{
    let rows: Vec<Vec<Arg>> = rows
        .into_iter()
        .map(|row| row.into_iter().map(Into::into).collect())
        .collect();

    let width = match rows.first() {
        Some(first) if !first.is_empty() => first.len(),
        _ => {
            tracing::debug!(rows = rows.len(), "bulk called without rows or columns");
            return Err(FragmentError::EmptyBulkInput);
        }
    };

    if let Some((row, actual)) = rows
        .iter()
        .enumerate()
        .find_map(|(i, r)| (r.len() != width).then_some((i, r.len())))
    {
        let err = FragmentError::RaggedBulkInput {
            row,
            expected: width,
            actual,
        };
        tracing::debug!(error = %err, "bulk rows are ragged");
        return Err(err);
    }

    let tuples = rows
        .into_iter()
        .map(|row| Fragment::compose(delimited("(", &opts.separator, ")", width), row))
        .collect::<Result<Vec<_>, _>>()?;

    join_with(tuples, opts)
}

/// `[prefix, sep × (n-1), suffix]`，共 n+1 段。
fn delimited(prefix: &str, separator: &str, suffix: &str, n: usize) -> Vec<String> {
    let mut segments = Vec::with_capacity(n + 1);
    segments.push(prefix.to_string());
    segments.extend(std::iter::repeat_n(separator.to_string(), n.saturating_sub(1)));
    segments.push(suffix.to_string());
    segments
}
