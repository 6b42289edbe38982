#[cfg(test)]
mod tests {
    use crate::commands::settings::{settings_from_value, Settings, NOTIFICATIONS_ENABLED_KEY};
    use serde_json::json;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert!(settings.notifications_enabled);
    }

    #[test]
    fn test_missing_value_yields_default() {
        let settings = settings_from_value(None);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_explicit_false_is_respected() {
        let settings = settings_from_value(Some(&json!(false)));
        assert!(!settings.notifications_enabled);
    }

    #[test]
    fn test_explicit_true_is_respected() {
        let settings = settings_from_value(Some(&json!(true)));
        assert!(settings.notifications_enabled);
    }

    #[test]
    fn test_malformed_values_yield_default() {
        // A hand-edited or corrupt settings file must never fail the load.
        let malformed = vec![
            json!(null),
            json!("yes"),
            json!(1),
            json!(0.5),
            json!([true]),
            json!({"enabled": false}),
        ];

        for value in &malformed {
            let settings = settings_from_value(Some(value));
            assert_eq!(
                settings,
                Settings::default(),
                "value {:?} should fall back to defaults",
                value
            );
        }
    }

    #[test]
    fn test_serialization_uses_store_key() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert!(json.contains(&format!("\"{}\":true", NOTIFICATIONS_ENABLED_KEY)));
    }

    #[test]
    fn test_round_trip() {
        let settings = Settings {
            notifications_enabled: false,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, settings);
    }

    #[test]
    fn test_double_toggle_round_trips() {
        let original = Settings::default();

        // Each toggle persists the flipped value wholesale; reading it back
        // through the tolerant parser must reproduce it exactly.
        let once = settings_from_value(Some(&json!(!original.notifications_enabled)));
        assert_ne!(once, original);

        let twice = settings_from_value(Some(&json!(!once.notifications_enabled)));
        assert_eq!(twice, original);
    }
}
