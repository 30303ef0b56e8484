use crate::tests::common;
use crate::utils::platform;
use crate::utils::theme::{apply, initialize, resolve, Theme};

#[test]
fn persisted_value_wins_over_platform_signal() {
    assert_eq!(resolve(Some("dark".to_string()), Some(false)), Theme::Dark);
    assert_eq!(resolve(Some("dark".to_string()), None), Theme::Dark);
    assert_eq!(resolve(Some("light".to_string()), Some(true)), Theme::Light);
}

#[test]
fn falls_back_to_platform_signal_without_persisted_value() {
    assert_eq!(resolve(None, Some(true)), Theme::Dark);
    assert_eq!(resolve(None, Some(false)), Theme::Light);
}

#[test]
fn defaults_to_light_without_platform_signal() {
    assert_eq!(resolve(None, None), Theme::Light);
}

#[test]
fn invalid_persisted_value_falls_through() {
    assert_eq!(resolve(Some("solarized".to_string()), Some(true)), Theme::Dark);
    assert_eq!(resolve(Some(String::new()), None), Theme::Light);
}

#[test]
fn complement_is_an_involution() {
    assert_eq!(Theme::Dark.complement().complement(), Theme::Dark);
    assert_eq!(Theme::Light.complement().complement(), Theme::Light);
    assert_ne!(Theme::Dark.complement(), Theme::Dark);
}

#[test]
fn theme_literals_round_trip() {
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
    assert!("DARK".parse::<Theme>().is_err());
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::Light.as_str(), "light");
}

#[test]
fn apply_persists_the_current_value() {
    let _guard = common::store_lock();
    common::setup();
    platform::clear_persisted();

    apply(Theme::Dark);
    assert_eq!(platform::load_persisted().as_deref(), Some("dark"));
    // A fresh session over the same storage comes back dark.
    assert_eq!(initialize(), Theme::Dark);
}

#[test]
fn toggle_sequence_keeps_storage_in_sync() {
    let _guard = common::store_lock();
    common::setup();
    platform::clear_persisted();

    // No stored key, ambient signal dark: startup resolves dark.
    let startup = resolve(platform::load_persisted(), Some(true));
    assert_eq!(startup, Theme::Dark);
    apply(startup);

    let toggled = startup.complement();
    apply(toggled);
    assert_eq!(toggled, Theme::Light);
    assert_eq!(platform::load_persisted().as_deref(), Some("light"));
    assert_eq!(initialize(), Theme::Light);

    let toggled_back = toggled.complement();
    apply(toggled_back);
    assert_eq!(toggled_back, Theme::Dark);
    assert_eq!(platform::load_persisted().as_deref(), Some("dark"));
    assert_eq!(initialize(), Theme::Dark);
}

#[test]
fn reapplying_the_same_value_is_idempotent() {
    let _guard = common::store_lock();
    platform::clear_persisted();

    apply(Theme::Light);
    apply(Theme::Light);
    assert_eq!(platform::load_persisted().as_deref(), Some("light"));
    assert_eq!(initialize(), Theme::Light);
}
