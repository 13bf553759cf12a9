use core::fmt::Debug;

pub trait Error: Debug {
    fn kind(&self) -> ErrorKind;
}

/// Device error kind that can be used across board implementations
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The function is unimplemented
    Unimplemented,
    /// The device does not support the requested resource
    Unsupported,
    /// An argument is outside of the range the hardware can represent
    OutOfRange,
    /// A required device could not be found
    NoDevice,
}

impl Error for core::convert::Infallible {
    fn kind(&self) -> ErrorKind {
        match *self {}
    }
}

impl Error for ErrorKind {
    fn kind(&self) -> ErrorKind {
        *self
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Unimplemented => write!(f, "The function is unimplemented"),
            Self::Unsupported => write!(f, "The resource is not supported by the device"),
            Self::OutOfRange => write!(f, "The argument is out of range"),
            Self::NoDevice => write!(f, "The device could not be found"),
        }
    }
}

pub trait ErrorType {
    /// Error type
    type Error: Error;
}

impl<T: ErrorType> ErrorType for &mut T {
    type Error = T::Error;
}
