// API 数据传输对象模块
// 包含所有与服务端交互的数据结构

pub mod auth;
pub mod common;
pub mod login_info;
pub mod menu;
pub mod user;

// 重新导出常用类型
pub use auth::*;
pub use common::*;
pub use login_info::*;
pub use menu::*;
pub use user::*;
