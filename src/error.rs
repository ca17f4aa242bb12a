use std::sync::RwLock;

use log::error;
use thiserror::Error;

/// Errors raised by the triangular surface kernel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrngError {
    #[error("direction is not one of U, V or W")]
    DirectionNotValid,

    #[error("undefined geometry type")]
    UndefinedGeometry,

    #[error("parameter {value} is out of the domain [{min}, {max}]")]
    ParameterOutOfDomain { value: f64, min: f64, max: f64 },

    #[error("B-spline order {order} is larger than the length {length}")]
    WrongOrder { length: usize, order: usize },

    #[error("B-spline triangular surfaces are not supported")]
    BsplineUnsupported,

    #[error("Gregory triangular surfaces must be converted to Bezier first")]
    GregoryUnsupported,

    #[error("sampling method is not supported for triangular surfaces")]
    SamplingMethodUnsupported,
}

/// Convenience type alias for results using [`TrngError`].
pub type Result<T> = std::result::Result<T, TrngError>;

/// A handler invoked by [`OrFatal::or_fatal`] before the process gives up.
pub type FatalErrorHandler = fn(&TrngError);

static FATAL_ERROR_HANDLER: RwLock<Option<FatalErrorHandler>> = RwLock::new(None);

/// Register a handler for fatal errors, returning the previous one.
/// Passing `None` restores the default behaviour (log and panic).
pub fn set_fatal_error_handler(handler: Option<FatalErrorHandler>) -> Option<FatalErrorHandler> {
    match FATAL_ERROR_HANDLER.write() {
        Ok(mut guard) => std::mem::replace(&mut *guard, handler),
        Err(poisoned) => std::mem::replace(&mut *poisoned.into_inner(), handler),
    }
}

/// Short, static description of an error kind
pub fn describe_error(err: &TrngError) -> &'static str {
    match err {
        TrngError::DirectionNotValid => "Dir is not valid",
        TrngError::UndefinedGeometry => "Undefined geometry type",
        TrngError::ParameterOutOfDomain { .. } => "Parameter is out of domain",
        TrngError::WrongOrder { .. } => "Provided order is wrong",
        TrngError::BsplineUnsupported => "Bspline triangular surfaces are not supported",
        TrngError::GregoryUnsupported => "Gregory triangular surfaces are not supported",
        TrngError::SamplingMethodUnsupported => "Sampling method is not supported",
    }
}

/// Escape hatch for callers that want the "report and abort" behaviour
/// instead of handling [`TrngError`] themselves.
pub trait OrFatal<T> {
    fn or_fatal(self) -> T;
}

impl<T> OrFatal<T> for Result<T> {
    fn or_fatal(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => fatal_error(&err),
        }
    }
}

fn fatal_error(err: &TrngError) -> ! {
    error!("trisurf: {}", describe_error(err));
    let handler = match FATAL_ERROR_HANDLER.read() {
        Ok(guard) => *guard,
        Err(poisoned) => *poisoned.into_inner(),
    };
    if let Some(handler) = handler {
        handler(err);
    }
    panic!("trisurf: {err}");
}
