use crate::logger::{self, Configuration, FileNameMode, Level, MemorySink, configure, log};
use crate::test_utilities::isolate_global_logger;

#[test]
fn global_facade_silent_by_default() {
    let _guard = isolate_global_logger();
    let sink = MemorySink::new();
    logger::set_sink(sink.clone());

    for level in Level::ALL {
        log(level, "should not appear", "a/b.rs");
    }
    assert!(sink.lines().is_empty());
    assert_eq!(logger::configuration(), Configuration::new());
}

#[test]
fn configure_filters_levels() {
    let _guard = isolate_global_logger();
    let sink = MemorySink::new();
    logger::set_sink(sink.clone());

    configure([Level::Error], FileNameMode::Show);
    log(Level::Debug, "x", "a/b.swift");
    assert!(sink.lines().is_empty());

    log(Level::Error, "Disk full", "a/b.swift");
    assert_eq!(sink.lines(), vec!["Disk full. [b.swift]".to_string()]);
}

#[test]
fn configure_hide_mode_drops_file_name() {
    let _guard = isolate_global_logger();
    let sink = MemorySink::new();
    logger::set_sink(sink.clone());

    configure([Level::Debug], FileNameMode::Hide);
    log(Level::Debug, "Loaded.", "x/y.swift");
    assert_eq!(sink.lines(), vec!["Loaded.".to_string()]);
}

#[test]
fn configure_last_call_wins() {
    let _guard = isolate_global_logger();
    let sink = MemorySink::new();
    logger::set_sink(sink.clone());

    configure([Level::Debug, Level::Error], FileNameMode::Show);
    configure([Level::HttpResponse], FileNameMode::Hide);

    assert!(!logger::is_enabled(Level::Debug));
    assert!(!logger::is_enabled(Level::Error));
    assert!(logger::is_enabled(Level::HttpResponse));

    logger::debug("dropped", "a.rs");
    logger::http_response("200 OK", "a.rs");
    assert_eq!(sink.lines(), vec!["200 OK.".to_string()]);
}

#[test]
fn configure_all_enables_every_level() {
    let _guard = isolate_global_logger();
    let sink = MemorySink::new();
    logger::set_sink(sink.clone());

    logger::configure_all(FileNameMode::Hide);
    logger::http_response("response", "a.rs");
    logger::error("error", "a.rs");
    logger::debug("debug", "a.rs");
    logger::flush();

    assert_eq!(
        sink.lines(),
        vec![
            "response.".to_string(),
            "error.".to_string(),
            "debug.".to_string(),
        ]
    );
}

#[test]
fn empty_level_set_is_silent() {
    let _guard = isolate_global_logger();
    let sink = MemorySink::new();
    logger::set_sink(sink.clone());

    configure(Vec::new(), FileNameMode::Show);
    logger::error("nothing", "a.rs");
    assert!(sink.lines().is_empty());
}
