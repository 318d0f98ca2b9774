//! 占位符风格。

/// SQL 占位符风格；同一个片段在不同风格下参数顺序与个数完全一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// 重复的匿名占位符 `?`（MySQL/SQLite 等）。
    Question,
    /// `$1, $2, ...`（PostgreSQL）。
    Dollar,
    /// `:1, :2, ...`（Oracle）。
    Colon,
    /// `@p1, @p2, ...`（SQLServer）。
    AtP,
}

impl Marker {
    /// 写入第 `index_1_based` 个占位符。
    pub(crate) fn write_placeholder(self, index_1_based: usize, out: &mut String) {
        match self {
            Self::Question => out.push('?'),
            Self::Dollar => {
                out.push('$');
                out.push_str(&index_1_based.to_string());
            }
            Self::Colon => {
                out.push(':');
                out.push_str(&index_1_based.to_string());
            }
            Self::AtP => {
                out.push_str("@p");
                out.push_str(&index_1_based.to_string());
            }
        }
    }
}
