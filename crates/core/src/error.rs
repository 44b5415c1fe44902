#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Missing required query parameter: {parameter}")]
    MissingParameter { parameter: &'static str },

    #[error("Unsupported content type: {requested}")]
    UnsupportedType { requested: String },
}
