use super::*;

#[test]
fn demo_hint_lists_credentials() {
    assert_eq!(demo_hint(), "demo@example.com / password");
}
