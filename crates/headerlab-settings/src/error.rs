use headerlab_types::UnknownToken;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid config TOML")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported config schema: {0} (expected headerlab.config.v1)")]
    UnsupportedSchema(String),

    #[error("unknown preset: {name} (expected one of: {expected})")]
    UnknownPreset { name: String, expected: String },

    #[error("invalid value for `{field}`")]
    InvalidValue {
        field: &'static str,
        #[source]
        source: UnknownToken,
    },

    #[error("edit script step {index}: {reason}")]
    InvalidStep { index: usize, reason: String },

    #[error("invalid value for `{field}`: header values must not contain CR or LF")]
    LineBreak { field: &'static str },
}
