use actionbar::logger::Logger;

#[test]
fn test_config_based_logging() {
    let logger = Logger::from_config(false);
    assert!(!logger.is_file_enabled());

    let logger = Logger::from_config(true);
    assert!(logger.is_file_enabled());
}

#[test]
fn test_logs_newest_first() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 2);
    assert!(logs[0].contains("second"));
    assert!(logs[1].contains("first"));

    logger.clear();
    assert!(logger.get_logs().is_empty());
}

#[test]
fn test_buffer_keeps_latest_lines() {
    let logger = Logger::new();
    for index in 0..600 {
        logger.log(format!("line {}", index));
    }

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 500);
    assert!(logs[0].ends_with("line 599"));
    assert!(logs[499].ends_with("line 100"));
}

#[test]
fn test_log_records_are_captured() {
    let logger = Logger::new();

    log::Log::log(
        &logger,
        &log::Record::builder()
            .args(format_args!("Measured 3 items"))
            .level(log::Level::Debug)
            .build(),
    );

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("DEBUG"));
    assert!(logs[0].contains("Measured 3 items"));
}

#[test]
fn test_clones_share_buffer() {
    let logger = Logger::new();
    let clone = logger.clone();

    clone.log("from clone".to_string());
    assert_eq!(logger.get_logs().len(), 1);
}
