use super::*;

#[test]
fn resize_hint_names_next_size() {
    assert_eq!(resize_hint(WidgetSize::Sm), "Resize (sm → md)");
    assert_eq!(resize_hint(WidgetSize::Lg), "Resize (lg → sm)");
}
