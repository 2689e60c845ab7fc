//! Store logo upload validation.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

pub const ACCEPTED_LOGO_TYPES: &[&str] = &["image/jpeg", "image/png", "image/jpg"];
pub const MAX_LOGO_BYTES: u64 = 5 * 1024 * 1024;

/// Why a selected logo file was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("Formato de arquivo inválido. Use JPG ou PNG.")]
    UnsupportedType(String),
    #[error("Arquivo muito grande. Máximo 5MB.")]
    TooLarge(u64),
}

/// Accept JPEG/PNG files no larger than [`MAX_LOGO_BYTES`].
pub fn validate_logo(mime: &str, size: u64) -> Result<(), UploadError> {
    if !ACCEPTED_LOGO_TYPES.contains(&mime) {
        return Err(UploadError::UnsupportedType(mime.to_owned()));
    }
    if size > MAX_LOGO_BYTES {
        return Err(UploadError::TooLarge(size));
    }
    Ok(())
}

/// A validated logo selected in the registration form.
#[derive(Clone, Debug)]
pub struct LogoUpload {
    pub name: String,
    pub mime: String,
    pub size: u64,
    #[cfg(feature = "csr")]
    pub file: web_sys::File,
}

#[cfg(feature = "csr")]
impl LogoUpload {
    /// Validate a browser file selection.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_file(file: web_sys::File) -> Result<Self, UploadError> {
        let mime = file.type_();
        let size = file.size() as u64;
        validate_logo(&mime, size)?;
        Ok(Self { name: file.name(), mime, size, file })
    }
}
