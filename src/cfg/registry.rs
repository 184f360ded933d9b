// 类型注册表和工厂函数

use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::RwLock;

use super::type_options::TypeOptions;

// 构造函数返回 Box<dyn Any>，其中实际装的是 Box<dyn Trait>
type TraitConstructor =
    Box<dyn Fn(JsonValue) -> Result<Box<dyn Any + Send + Sync>> + Send + Sync>;

// 外层 key 是 Trait 的 TypeId，内层 key 是类型名称
static TRAIT_REGISTRY: Lazy<RwLock<HashMap<TypeId, HashMap<String, TraitConstructor>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// 为实现特定 Trait 的类型注册构造函数
///
/// 构造过程允许失败（例如文件无法打开、URL 非法），错误会原样返回给调用方，
/// 因此要求 `T: TryFrom<Config, Error = anyhow::Error>`。
///
/// # 类型参数
/// - `T`: 具体实现类型
/// - `Trait`: 目标 trait（使用 `dyn Trait` 形式）
/// - `Config`: 配置类型
///
/// # 示例
/// ```ignore
/// register_trait::<FileTransport, dyn LogTransport, FileTransportConfig>("FileTransport")?;
///
/// let transport: Box<dyn LogTransport> = create_trait_from_type_options(&type_options)?;
/// ```
pub fn register_trait<T, Trait, Config>(type_name: &str) -> Result<()>
where
    T: Send + Sync + 'static,
    Trait: ?Sized + Send + Sync + 'static,
    Config: DeserializeOwned + Send + Sync + 'static,
    T: TryFrom<Config, Error = anyhow::Error>,
    Box<T>: Into<Box<Trait>>,
{
    let type_name = type_name.to_string();
    let trait_id = TypeId::of::<Trait>();

    let constructor: TraitConstructor = Box::new(move |value| {
        let config: Config = serde_json::from_value(value)?;
        let instance = T::try_from(config)?;
        let trait_object: Box<Trait> = Box::new(instance).into();
        Ok(Box::new(trait_object) as Box<dyn Any + Send + Sync>)
    });

    let mut registry = TRAIT_REGISTRY
        .write()
        .map_err(|_| anyhow!("Failed to acquire write lock"))?;
    registry
        .entry(trait_id)
        .or_default()
        .insert(type_name, constructor);

    Ok(())
}

/// 检查某个类型名称是否已经为 Trait 注册
pub fn is_registered<Trait>(type_name: &str) -> bool
where
    Trait: ?Sized + 'static,
{
    TRAIT_REGISTRY
        .read()
        .map(|registry| {
            registry
                .get(&TypeId::of::<Trait>())
                .map_or(false, |types| types.contains_key(type_name))
        })
        .unwrap_or(false)
}

/// 根据 TypeOptions 创建 trait object
pub fn create_trait_from_type_options<Trait>(type_options: &TypeOptions) -> Result<Box<Trait>>
where
    Trait: ?Sized + Send + Sync + 'static,
{
    let trait_id = TypeId::of::<Trait>();
    let registry = TRAIT_REGISTRY
        .read()
        .map_err(|_| anyhow!("Failed to acquire read lock"))?;

    let constructor = registry
        .get(&trait_id)
        .and_then(|types| types.get(&type_options.type_name))
        .ok_or_else(|| anyhow!("Type '{}' not registered for this trait", type_options.type_name))?;

    let any_box = constructor(type_options.options.clone())
        .map_err(|e| e.context(format!("Failed to create '{}'", type_options.type_name)))?;

    any_box
        .downcast::<Box<Trait>>()
        .map(|boxed| *boxed)
        .map_err(|_| anyhow!("Failed to downcast to target trait type"))
}
