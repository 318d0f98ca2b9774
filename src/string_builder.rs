//! 渲染用的字符串缓冲区。

use crate::marker::Marker;

#[derive(Debug, Default, Clone)]
pub(crate) struct StringBuilder {
    buf: String,
}

impl StringBuilder {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            buf: String::with_capacity(n),
        }
    }

    pub(crate) fn write_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    pub(crate) fn write_char(&mut self, c: char) {
        self.buf.push(c);
    }

    pub(crate) fn write_placeholder(&mut self, marker: Marker, index_1_based: usize) {
        marker.write_placeholder(index_1_based, &mut self.buf);
    }

    /// 取出当前内容并清空，用于逐段切分模板。
    pub(crate) fn take(&mut self) -> String {
        std::mem::take(&mut self.buf)
    }

    pub(crate) fn into_string(self) -> String {
        self.buf
    }
}
