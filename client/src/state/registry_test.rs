use super::*;

// =============================================================
// WidgetKind
// =============================================================

#[test]
fn widget_kind_serializes_as_lowercase_tag() {
    for kind in WidgetKind::ALL {
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{}\"", kind.tag()));
    }
}

#[test]
fn widget_kind_rejects_unknown_tag() {
    assert!(serde_json::from_str::<WidgetKind>("\"clock\"").is_err());
}

#[test]
fn widget_kind_default_titles() {
    assert_eq!(WidgetKind::Weather.default_title(), "Weather");
    assert_eq!(WidgetKind::Crypto.default_title(), "Crypto Prices");
    assert_eq!(WidgetKind::Tasks.default_title(), "Tasks");
}

#[test]
fn widget_kind_config_keys_are_instance_scoped() {
    assert_eq!(WidgetKind::Weather.config_key("w1"), "weatherLocation-w1");
    assert_eq!(WidgetKind::Crypto.config_key("c1"), "cryptoCoins-c1");
    assert_eq!(WidgetKind::Tasks.config_key("t1"), "tasks-t1");
}

// =============================================================
// WidgetSize
// =============================================================

#[test]
fn widget_size_default_is_md() {
    assert_eq!(WidgetSize::default(), WidgetSize::Md);
}

#[test]
fn widget_size_cycle_wraps() {
    assert_eq!(WidgetSize::Sm.next(), WidgetSize::Md);
    assert_eq!(WidgetSize::Md.next(), WidgetSize::Lg);
    assert_eq!(WidgetSize::Lg.next(), WidgetSize::Sm);
}

#[test]
fn widget_size_serializes_as_short_name() {
    assert_eq!(serde_json::to_string(&WidgetSize::Lg).unwrap(), "\"lg\"");
    assert_eq!(serde_json::from_str::<WidgetSize>("\"sm\"").unwrap(), WidgetSize::Sm);
    assert_eq!(WidgetSize::Md.as_str(), "md");
}

#[test]
fn widget_size_grid_classes_differ() {
    assert_ne!(WidgetSize::Sm.grid_class(), WidgetSize::Md.grid_class());
    assert_ne!(WidgetSize::Md.grid_class(), WidgetSize::Lg.grid_class());
}
