use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum RestrictionError {
    #[error("I/O error: {0}")]
    #[diagnostic(code(pulsar_restriction::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(
        code(pulsar_restriction::serde),
        help("Flat maps are JSON objects of string to string; restrictions are nested JSON objects")
    )]
    Serde(#[from] serde_json::Error),

    #[error("Reserved value `{value}` used for {}", .keys.join(", "))]
    #[diagnostic(
        code(pulsar_restriction::reserved_value),
        help("This value marks an unset key in the flat form and cannot be stored as a resource name")
    )]
    ReservedValue { value: String, keys: Vec<String> },

    #[error("Unrecognized flat keys: {}", .keys.join(", "))]
    #[diagnostic(
        code(pulsar_restriction::unknown_keys),
        help("Run `restriction keys` for the supported keys, or disable codec.strict_keys")
    )]
    UnknownKeys { keys: Vec<String> },
}
