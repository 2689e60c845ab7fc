use super::*;

#[test]
fn toggle_flips_immediately() {
    let mut state = FavoriteState::default();
    let toggle = state.begin_toggle(7).unwrap();
    assert_eq!(toggle.action, FavoriteAction::Add);
    assert!(!toggle.previous);
    assert!(state.is_favorite(7));
    assert!(state.is_pending(7));
}

#[test]
fn accepted_toggle_keeps_new_value() {
    let mut state = FavoriteState::default();
    let toggle = state.begin_toggle(7).unwrap();
    state.settle(toggle, true);
    assert!(state.is_favorite(7));
    assert!(!state.is_pending(7));
}

#[test]
fn failed_toggle_restores_visual_state() {
    let mut state = FavoriteState::from_flags([(3, true), (4, false)]);
    let before = state.clone();

    let remove = state.begin_toggle(3).unwrap();
    assert_eq!(remove.action, FavoriteAction::Remove);
    assert!(!state.is_favorite(3));
    state.settle(remove, false);

    let add = state.begin_toggle(4).unwrap();
    state.settle(add, false);

    assert_eq!(state, before);
}

#[test]
fn clicks_while_pending_are_ignored() {
    let mut state = FavoriteState::default();
    let toggle = state.begin_toggle(1).unwrap();
    assert_eq!(state.begin_toggle(1), None);
    assert!(state.is_favorite(1));
    state.settle(toggle, true);
    assert!(state.begin_toggle(1).is_some());
}

#[test]
fn endpoints_and_messages() {
    assert_eq!(FavoriteAction::Add.endpoint(12), "/api/favoritos/adicionar/12");
    assert_eq!(FavoriteAction::Remove.endpoint(12), "/api/favoritos/remover/12");
    assert_eq!(FavoriteAction::Add.success_message(), "Produto adicionado aos favoritos");
}

#[test]
fn seed_does_not_clobber_pending_toggle() {
    let mut state = FavoriteState::default();
    let _toggle = state.begin_toggle(1).unwrap();
    state.seed([(1, false), (2, true)]);
    assert!(state.is_favorite(1));
    assert!(state.is_favorite(2));
}
