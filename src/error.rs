use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Justification code {0} has no mapping")]
    UnmappedJustification(i32),

    #[error("Rotation angle {0} is outside every orientation bucket")]
    RotationOutOfRange(f64),

    #[error("Failed to convert component '{component}': {source}")]
    Component {
        component: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Attaches the owning component's name to an error raised while converting it.
    pub fn in_component(self, component: &str) -> Self {
        match self {
            Error::Component { .. } => self,
            other => Error::Component {
                component: component.to_string(),
                source: Box::new(other),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
