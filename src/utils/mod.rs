pub mod cancel;
pub mod errors;
pub mod http;

// Re-export commonly used types
pub use cancel::{CancelToken, Cancelled};
pub use errors::{ConfigError, ServiceError, ServiceResult, TransportError, UserMessage};
pub use http::{ApiRequest, HttpTransport, Transport};
