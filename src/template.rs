//! 模板输入：把 `"... {} ..."` 形式的字符串切分成文本段，再交给 [`Fragment::compose`]。
//!
//! - `{}`：一个值的位置。
//! - `{{` / `}}`：字面的 `{` / `}`。
//! - 其它花括号按字面输出。

use crate::arg::Arg;
use crate::error::FragmentError;
use crate::fragment::Fragment;
use crate::string_builder::StringBuilder;

/// 按 `{}` 切分模板并组合：`template("a = {} AND b = {}", [1, 2])`。
pub fn template<A: Into<Arg>>(
    format: &str,
    args: impl IntoIterator<Item = A>,
) -> Result<Fragment, FragmentError> {
    Fragment::compose(split_segments(format), args)
}

/// 切出 `{}` 之间的文本段，结果总是比 `{}` 的个数多一段。
pub(crate) fn split_segments(format: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut buf = StringBuilder::with_capacity(format.len());
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, chars.peek().copied()) {
            ('{', Some('}')) => {
                chars.next();
                segments.push(buf.take());
            }
            ('{', Some('{')) | ('}', Some('}')) => {
                chars.next();
                buf.write_char(c);
            }
            _ => buf.write_char(c),
        }
    }

    segments.push(buf.into_string());
    segments
}
