#![allow(non_snake_case)]

use super::*;

#[test]
fn level_filter___maps_every_level() {
    assert_eq!(level_filter(LogLevel::Trace), LevelFilter::TRACE);
    assert_eq!(level_filter(LogLevel::Debug), LevelFilter::DEBUG);
    assert_eq!(level_filter(LogLevel::Info), LevelFilter::INFO);
    assert_eq!(level_filter(LogLevel::Warn), LevelFilter::WARN);
    assert_eq!(level_filter(LogLevel::Error), LevelFilter::ERROR);
    assert_eq!(level_filter(LogLevel::Off), LevelFilter::OFF);
}

#[test]
fn env_level___unset___is_none() {
    assert_eq!(env_level(None), None);
}

#[test]
fn env_level___valid_value___is_parsed() {
    assert_eq!(env_level(Some("debug")), Some(LogLevel::Debug));
    assert_eq!(env_level(Some(" TRACE ")), Some(LogLevel::Trace));
}

#[test]
fn env_level___garbage___is_none() {
    assert_eq!(env_level(Some("loud")), None);
}

#[test]
fn initial_level___no_env___is_warn() {
    assert_eq!(initial_level(None), LogLevel::Warn);
    assert_eq!(initial_level(Some(LogLevel::Error)), LogLevel::Error);
}

#[test]
fn effective_level___no_env___option_wins() {
    assert_eq!(effective_level(None, LogLevel::Off), LogLevel::Off);
    assert_eq!(effective_level(None, LogLevel::Error), LogLevel::Error);
    assert_eq!(effective_level(None, LogLevel::Debug), LogLevel::Debug);
}

#[test]
fn effective_level___env_set___env_wins() {
    assert_eq!(effective_level(Some(LogLevel::Debug), LogLevel::Off), LogLevel::Debug);
    assert_eq!(effective_level(Some(LogLevel::Off), LogLevel::Trace), LogLevel::Off);
}

#[test]
fn ReloadHandle___reload_level___without_handle___fails() {
    let handle = ReloadHandle::new();

    let result = handle.reload_level(LogLevel::Info);

    assert_eq!(result, Err("Reload handle not initialized".to_string()));
}

#[test]
fn ReloadHandle___reload_level___with_handle___succeeds() {
    let (_layer, reload) = reload::Layer::<LevelFilter, tracing_subscriber::Registry>::new(
        LevelFilter::WARN,
    );
    let handle = ReloadHandle::new();
    handle.set_handle(reload.clone());

    handle.reload_level(LogLevel::Debug).unwrap();

    assert_eq!(reload.clone_current(), Some(LevelFilter::DEBUG));
}

#[test]
fn ReloadHandle___global___is_singleton() {
    assert!(std::ptr::eq(ReloadHandle::global(), ReloadHandle::global()));
}
