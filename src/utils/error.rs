use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParkingError {
    #[error("invalid capacity: {capacity}")]
    InvalidCapacity { capacity: i64 },

    #[error("parking lot is full")]
    LotFull,

    #[error("ticket not found for {registration}")]
    TicketNotFound { registration: String },

    #[error("vehicle {registration} is already parked at slot {slot}")]
    AlreadyParked { registration: String, slot: usize },

    #[error("invalid parking duration: {hours} hours")]
    InvalidDuration { hours: i64 },

    #[error("Invalid {command} command")]
    MalformedCommand { command: String },

    #[error("invalid number '{value}' for {command}")]
    InvalidArgument { command: String, value: String },

    #[error("Unknown command: {kind}")]
    UnknownCommand { kind: String },

    #[error("failed to open file {path}: {source}")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("error reading file: {0}")]
    FileRead(#[source] std::io::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Bad input on a single command line
    Low,
    /// Domain rule rejected an operation
    Medium,
    /// Configuration cannot be used
    High,
    /// The command stream itself is unreadable
    Critical,
}

impl ParkingError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ParkingError::MalformedCommand { .. }
            | ParkingError::InvalidArgument { .. }
            | ParkingError::UnknownCommand { .. } => ErrorSeverity::Low,
            ParkingError::InvalidCapacity { .. }
            | ParkingError::LotFull
            | ParkingError::TicketNotFound { .. }
            | ParkingError::AlreadyParked { .. }
            | ParkingError::InvalidDuration { .. } => ErrorSeverity::Medium,
            ParkingError::ConfigError { .. } | ParkingError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            ParkingError::FileOpen { .. } | ParkingError::FileRead(_) | ParkingError::IoError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    /// Errors that only affect the current command line; the run continues.
    pub fn is_line_local(&self) -> bool {
        matches!(self.severity(), ErrorSeverity::Low | ErrorSeverity::Medium)
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low | ErrorSeverity::Medium => 0,
            ErrorSeverity::High | ErrorSeverity::Critical => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParkingError>;
