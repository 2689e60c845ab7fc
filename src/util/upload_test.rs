use super::*;

#[test]
fn accepts_jpeg_and_png_within_limit() {
    assert_eq!(validate_logo("image/jpeg", 1024), Ok(()));
    assert_eq!(validate_logo("image/png", MAX_LOGO_BYTES), Ok(()));
    assert_eq!(validate_logo("image/jpg", 0), Ok(()));
}

#[test]
fn rejects_other_types() {
    assert_eq!(
        validate_logo("image/gif", 10),
        Err(UploadError::UnsupportedType("image/gif".to_owned()))
    );
    assert!(matches!(validate_logo("", 10), Err(UploadError::UnsupportedType(_))));
}

#[test]
fn rejects_files_over_five_mebibytes() {
    assert_eq!(validate_logo("image/png", MAX_LOGO_BYTES + 1), Err(UploadError::TooLarge(MAX_LOGO_BYTES + 1)));
}

#[test]
fn type_is_checked_before_size() {
    assert!(matches!(validate_logo("application/pdf", MAX_LOGO_BYTES * 2), Err(UploadError::UnsupportedType(_))));
}

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(
        UploadError::UnsupportedType("x".to_owned()).to_string(),
        "Formato de arquivo inválido. Use JPG ou PNG."
    );
    assert_eq!(UploadError::TooLarge(1).to_string(), "Arquivo muito grande. Máximo 5MB.");
}
