//! cfg 模块 - 组件配置
//!
//! 以 `{ type, options }` 的形式描述组件，通过类型注册表在运行时创建 trait object。
//! 日志模块的 formatter 和 transport 都通过这里完成声明式创建。

pub mod macros;
pub mod registry;
pub mod serde_duration;
pub mod type_options;

pub use registry::{create_trait_from_type_options, is_registered, register_trait};
pub use serde_duration::HumanDur;
pub use type_options::TypeOptions;
