//! 组件注册相关的宏定义

/// 为配置类型实现 `TryFrom<Config>`，委托给 `Type::new(config) -> anyhow::Result<Self>`
///
/// 用法：`impl_try_from!(ConfigType => Type)`
#[macro_export]
macro_rules! impl_try_from {
    ($config_type:ty => $target_type:ty) => {
        impl TryFrom<$config_type> for $target_type {
            type Error = anyhow::Error;

            fn try_from(config: $config_type) -> anyhow::Result<Self> {
                <$target_type>::new(config)
            }
        }
    };
}

/// 为 Box<T> 类型自动实现到 Box<dyn Trait> 的转换
///
/// 用法：`impl_box_from!(Type => dyn TraitName)`
#[macro_export]
macro_rules! impl_box_from {
    ($source_type:ty => dyn $trait_name:path) => {
        impl From<Box<$source_type>> for Box<dyn $trait_name> {
            fn from(source: Box<$source_type>) -> Self {
                source as Box<dyn $trait_name>
            }
        }
    };
}
