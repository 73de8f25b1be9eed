//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error used as the preserved cause of wrapped failures
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for the Tooling Model Registry
#[derive(Error, Debug)]
pub enum Error {
    /// No builder in the registry chain can build the requested model
    #[error("No builders are available to build a model of type '{model_name}'.")]
    UnknownModel {
        /// The requested model name
        model_name: String,
    },

    /// Two or more builders registered in one registry match the requested model
    #[error("Multiple builders are available to build a model of type '{model_name}'.")]
    AmbiguousBuilder {
        /// The requested model name
        model_name: String,
        /// Diagnostic names of the competing builders, in registration order
        candidates: Vec<String>,
    },

    /// Failure raised by a model builder while producing a model
    #[error("{message}")]
    ModelBuild {
        /// Description of the failure, as reported by the builder
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },
}

// Resolution error creation methods
impl Error {
    /// Create an unknown model error
    pub fn unknown_model<S: Into<String>>(model_name: S) -> Self {
        Self::UnknownModel {
            model_name: model_name.into(),
        }
    }

    /// Create an ambiguous builder error
    pub fn ambiguous_builder<S: Into<String>>(model_name: S, candidates: Vec<String>) -> Self {
        Self::AmbiguousBuilder {
            model_name: model_name.into(),
            candidates,
        }
    }

    /// Name of the model this error refers to, for resolution errors
    pub fn model_name(&self) -> Option<&str> {
        match self {
            Self::UnknownModel { model_name } | Self::AmbiguousBuilder { model_name, .. } => {
                Some(model_name)
            }
            _ => None,
        }
    }
}

// Model production error creation methods
impl Error {
    /// Create a model build error
    pub fn model_build<S: Into<String>>(message: S) -> Self {
        Self::ModelBuild {
            message: message.into(),
            source: None,
        }
    }

    /// Create a model build error with source
    pub fn model_build_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::ModelBuild {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn config_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
