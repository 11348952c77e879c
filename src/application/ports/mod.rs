//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口，测试中可用替身实现替换

mod navigator;
mod notifier;
mod session_store;
mod transport;

pub use navigator::NavigatorPort;
pub use notifier::{Notification, NotificationLevel, NotifierPort};
pub use session_store::{SessionStorePort, StoreError};
pub use transport::{
    FilePart, HttpTransportPort, OutboundRequest, RawResponse, RequestBody, TransportError,
};
