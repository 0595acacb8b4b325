use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("record is not an array")]
    NotARecord,
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("field `{field}` should be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
    #[error("date '{0}' is not YY-MM-DD or YYYY-MM-DD")]
    BadDate(String),
    #[error("catalog error: {0}")]
    Catalog(String),
    #[error("dataset error: {0}")]
    Dataset(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("unable to parse config {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}
