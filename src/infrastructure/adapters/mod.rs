//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

mod http_transport;

pub use http_transport::{HttpTransportConfig, ReqwestTransport};
