// Port Layer - Interfaces the transport implements or calls

pub mod service_method;

// Re-exports
pub use service_method::{MethodRequest, ResponseSink, ServiceMethod, ServiceMethods};
