use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkRouterError {
    NotFound(String),
    NoDestinationResolved(String),
    MalformedPredicate(String),
    ShortCodeConflict(String),
    Validation(String),
    FileOperation(String),
    Serialization(String),
    Config(String),
    GeoIp(String),
}

impl LinkRouterError {
    /// 获取错误代码（CLI 输出时附带）
    pub fn code(&self) -> &'static str {
        match self {
            LinkRouterError::NotFound(_) => "E001",
            LinkRouterError::NoDestinationResolved(_) => "E002",
            LinkRouterError::MalformedPredicate(_) => "E003",
            LinkRouterError::ShortCodeConflict(_) => "E004",
            LinkRouterError::Validation(_) => "E005",
            LinkRouterError::FileOperation(_) => "E006",
            LinkRouterError::Serialization(_) => "E007",
            LinkRouterError::Config(_) => "E008",
            LinkRouterError::GeoIp(_) => "E009",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            LinkRouterError::NotFound(_) => "Link Not Found",
            LinkRouterError::NoDestinationResolved(_) => "No Destination Resolved",
            LinkRouterError::MalformedPredicate(_) => "Malformed Predicate",
            LinkRouterError::ShortCodeConflict(_) => "Short Code Conflict",
            LinkRouterError::Validation(_) => "Validation Error",
            LinkRouterError::FileOperation(_) => "File Operation Error",
            LinkRouterError::Serialization(_) => "Serialization Error",
            LinkRouterError::Config(_) => "Configuration Error",
            LinkRouterError::GeoIp(_) => "GeoIP Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            LinkRouterError::NotFound(msg)
            | LinkRouterError::NoDestinationResolved(msg)
            | LinkRouterError::MalformedPredicate(msg)
            | LinkRouterError::ShortCodeConflict(msg)
            | LinkRouterError::Validation(msg)
            | LinkRouterError::FileOperation(msg)
            | LinkRouterError::Serialization(msg)
            | LinkRouterError::Config(msg)
            | LinkRouterError::GeoIp(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于终端）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LinkRouterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LinkRouterError {}

impl LinkRouterError {
    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        LinkRouterError::NotFound(msg.into())
    }

    pub fn no_destination_resolved<T: Into<String>>(msg: T) -> Self {
        LinkRouterError::NoDestinationResolved(msg.into())
    }

    pub fn malformed_predicate<T: Into<String>>(msg: T) -> Self {
        LinkRouterError::MalformedPredicate(msg.into())
    }

    pub fn short_code_conflict<T: Into<String>>(msg: T) -> Self {
        LinkRouterError::ShortCodeConflict(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        LinkRouterError::Validation(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        LinkRouterError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        LinkRouterError::Serialization(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        LinkRouterError::Config(msg.into())
    }

    pub fn geoip<T: Into<String>>(msg: T) -> Self {
        LinkRouterError::GeoIp(msg.into())
    }

    /// 链接存在但没有任何目标匹配
    pub fn is_unresolved(&self) -> bool {
        matches!(self, LinkRouterError::NoDestinationResolved(_))
    }
}

impl From<std::io::Error> for LinkRouterError {
    fn from(err: std::io::Error) -> Self {
        LinkRouterError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for LinkRouterError {
    fn from(err: serde_json::Error) -> Self {
        LinkRouterError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for LinkRouterError {
    fn from(err: toml::ser::Error) -> Self {
        LinkRouterError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for LinkRouterError {
    fn from(err: config::ConfigError) -> Self {
        LinkRouterError::Config(err.to_string())
    }
}

impl From<maxminddb::MaxMindDbError> for LinkRouterError {
    fn from(err: maxminddb::MaxMindDbError) -> Self {
        LinkRouterError::GeoIp(err.to_string())
    }
}

impl From<csv::Error> for LinkRouterError {
    fn from(err: csv::Error) -> Self {
        LinkRouterError::GeoIp(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LinkRouterError>;
