use logx::log::{
    global_config, init_from_options, is_initialized, LogError, Logger, LoggerConfigOptions,
};
use serial_test::serial;

#[tokio::test]
#[serial]
async fn test_global_logger_requires_init() -> anyhow::Result<()> {
    assert!(!is_initialized());
    assert!(matches!(
        Logger::global("MyClass"),
        Err(LogError::NotInitialized)
    ));

    let options: LoggerConfigOptions = json5::from_str(
        r#"{
            transports: [
                { level: "debug", formatter: { type: "TextFormatter", options: { colored: true } } },
            ],
        }"#,
    )?;
    let config = init_from_options(options)?;
    assert_eq!(config.default_transports().len(), 1);

    let mut logger = Logger::global("MyClass")?;
    assert_eq!(logger.context(), "MyClass");
    assert!(std::sync::Arc::ptr_eq(logger.config(), &global_config()?));
    logger.info("global logger ready").await?;

    let err = init_from_options(LoggerConfigOptions::default()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LogError>(),
        Some(LogError::AlreadyInitialized)
    ));

    Ok(())
}
