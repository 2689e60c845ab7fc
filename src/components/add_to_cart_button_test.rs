use super::*;

#[test]
fn outcome_classifies_results() {
    assert_eq!(AddOutcome::from_result(&Ok(())), AddOutcome::Added);
    assert_eq!(AddOutcome::from_result(&Err(ApiError::Unauthorized(403))), AddOutcome::LoginRequired);
    assert_eq!(AddOutcome::from_result(&Err(ApiError::Status(500))), AddOutcome::Failed);
    assert_eq!(AddOutcome::from_result(&Err(ApiError::Network("x".to_owned()))), AddOutcome::Failed);
}

#[test]
fn login_required_message_explains_redirect_reason() {
    assert_eq!(
        AddOutcome::LoginRequired.message(),
        "Você precisa estar logado para adicionar itens ao carrinho."
    );
}
