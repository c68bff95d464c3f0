// 接口描述模块
// 每个接口声明方法、路径、参数和结果类型，并在 ApiClient 上提供对应的调用方法

pub mod auth;
pub mod login_info;
pub mod menu;

pub use auth::*;
pub use login_info::*;
pub use menu::*;
