use thiserror::Error;

/// Errors for command routing. These always point at a wiring defect,
/// never at a bad request.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("No handler registered for command {0}")]
    HandlerNotRegistered(&'static str),

    #[error("Handler already registered for command {0}")]
    AlreadyRegistered(&'static str),

    #[error("Commands without a registered handler: {0:?}")]
    MissingHandlers(Vec<&'static str>),

    #[error("Handler for {0} received or produced an unexpected type")]
    TypeMismatch(&'static str),
}
