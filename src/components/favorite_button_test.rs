use super::*;

#[test]
fn active_button_is_marked() {
    assert_eq!(button_class(false, true), "btn-favorito ativo");
    assert_eq!(button_class(true, false), "btn-fav-sm");
}

#[test]
fn heart_is_solid_only_when_active() {
    assert_eq!(heart_icon(true), "fas fa-heart");
    assert_eq!(heart_icon(false), "far fa-heart");
}
