// 请求契约层
// 类型化的接口描述 + 统一的请求执行器

pub mod client;
pub mod models;
pub mod operation;
pub mod operations;
pub mod transport;

pub use client::ApiClient;
pub use operation::{Operation, Params, ResultShape};
pub use transport::{HttpTransport, OutboundRequest, RawResponse, Transport, TransportError};
