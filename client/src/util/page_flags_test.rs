use super::*;

#[test]
fn show_tips_script_assigns_window_global() {
    assert_eq!(show_tips_script(true), "window.show_tips = true;");
    assert_eq!(show_tips_script(false), "window.show_tips = false;");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn show_tips_flag_is_false_outside_browser() {
    assert!(!show_tips_flag());
}
