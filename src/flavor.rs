//! Flavor：按数据库方言选择占位符风格。
//!
//! 片段本身与方言无关，方言只在渲染时通过
//! [`Fragment::build_with_flavor`](crate::Fragment::build_with_flavor) 显式传入。

use crate::marker::Marker;
use std::str::FromStr;

/// 数据库方言，只决定渲染时的占位符风格。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flavor {
    #[default]
    MySQL,
    SQLite,
    PostgreSQL,
    Oracle,
    SQLServer,
}

impl Flavor {
    /// 该方言驱动所期望的占位符风格。
    pub fn marker(self) -> Marker {
        match self {
            Self::MySQL | Self::SQLite => Marker::Question,
            Self::PostgreSQL => Marker::Dollar,
            Self::Oracle => Marker::Colon,
            Self::SQLServer => Marker::AtP,
        }
    }
}

impl From<Flavor> for Marker {
    fn from(f: Flavor) -> Self {
        f.marker()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sql flavor {0:?}")]
pub struct UnknownFlavor(pub String);

/// 从配置里的方言名解析，大小写不敏感，接受常见别名（`pg`、`postgres`、`mssql` 等）。
impl FromStr for Flavor {
    type Err = UnknownFlavor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Self::MySQL),
            "sqlite" | "sqlite3" => Ok(Self::SQLite),
            "postgresql" | "postgres" | "pg" => Ok(Self::PostgreSQL),
            "oracle" => Ok(Self::Oracle),
            "sqlserver" | "mssql" => Ok(Self::SQLServer),
            _ => Err(UnknownFlavor(s.to_string())),
        }
    }
}
