//! Client-side gate for design lab uploads.

use std::fmt;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{File, FileReader};
use yew::Callback;

/// 5 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;
pub const IMAGE_MIME_PREFIX: &str = "image/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_bytes: u64,
    pub mime_prefix: &'static str,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_bytes: MAX_UPLOAD_BYTES,
            mime_prefix: IMAGE_MIME_PREFIX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    WrongType,
    TooLarge { max_bytes: u64 },
    Unreadable,
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongType => write!(f, "Bitte laden Sie nur Bilddateien hoch (JPG, PNG, WebP)."),
            Self::TooLarge { max_bytes } => write!(
                f,
                "Die Datei ist zu groß (max. {}MB erlaubt).",
                max_bytes / (1024 * 1024)
            ),
            Self::Unreadable => write!(f, "Fehler beim Laden der Datei."),
        }
    }
}

impl UploadPolicy {
    /// Type is checked before size, so a huge PDF reports the type problem.
    pub fn check(&self, mime: &str, size: u64) -> Result<(), UploadError> {
        if !mime.starts_with(self.mime_prefix) {
            return Err(UploadError::WrongType);
        }
        if size > self.max_bytes {
            return Err(UploadError::TooLarge { max_bytes: self.max_bytes });
        }
        Ok(())
    }
}

/// `data:<mime>;base64,<payload>` as produced by `FileReader::read_as_data_url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    pub mime_type: String,
    pub data: String,
}

impl DataUrl {
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let rest = raw.strip_prefix("data:")?;
        let (header, data) = rest.split_once(',')?;
        let mime_type = header.strip_suffix(";base64")?;
        if mime_type.is_empty() || data.is_empty() {
            return None;
        }
        Some(Self::new(mime_type, data))
    }

    pub fn extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/jpeg" => "jpg",
            "image/webp" => "webp",
            _ => "png",
        }
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.mime_type, self.data)
    }
}

/// A `FileReader` in progress. Dropping it aborts the read and detaches the
/// handlers, so the owner keeps it alive until `done` has fired.
pub struct PendingRead {
    reader: FileReader,
    _onload: Closure<dyn FnMut()>,
    _onerror: Closure<dyn FnMut()>,
}

impl Drop for PendingRead {
    fn drop(&mut self) {
        self.reader.set_onload(None);
        self.reader.set_onerror(None);
        self.reader.abort();
    }
}

impl UploadPolicy {
    /// Checks `file` and, if it passes, starts reading it as a data URL.
    /// Nothing is read when the check fails.
    pub fn read(
        &self,
        file: &File,
        done: Callback<Result<DataUrl, UploadError>>,
    ) -> Result<PendingRead, UploadError> {
        self.check(&file.type_(), file.size() as u64)?;

        let reader = FileReader::new().map_err(|_| UploadError::Unreadable)?;

        let onload = {
            let reader = reader.clone();
            let done = done.clone();
            Closure::wrap(Box::new(move || {
                let parsed = reader
                    .result()
                    .ok()
                    .and_then(|value| value.as_string())
                    .and_then(|raw| DataUrl::parse(&raw))
                    .ok_or(UploadError::Unreadable);
                done.emit(parsed);
            }) as Box<dyn FnMut()>)
        };
        let onerror = Closure::wrap(Box::new(move || {
            done.emit(Err(UploadError::Unreadable));
        }) as Box<dyn FnMut()>);

        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        reader
            .read_as_data_url(file)
            .map_err(|_| UploadError::Unreadable)?;

        Ok(PendingRead {
            reader,
            _onload: onload,
            _onerror: onerror,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_image_is_rejected_by_type() {
        let policy = UploadPolicy::default();
        assert_eq!(policy.check("application/pdf", 10), Err(UploadError::WrongType));
        assert_eq!(
            policy.check("text/plain", MAX_UPLOAD_BYTES * 2),
            Err(UploadError::WrongType)
        );
    }

    #[test]
    fn size_ceiling_is_inclusive() {
        let policy = UploadPolicy::default();
        assert_eq!(policy.check("image/png", MAX_UPLOAD_BYTES), Ok(()));
        assert_eq!(policy.check("image/jpeg", 0), Ok(()));
        assert_eq!(
            policy.check("image/png", MAX_UPLOAD_BYTES + 1),
            Err(UploadError::TooLarge { max_bytes: MAX_UPLOAD_BYTES })
        );
    }

    #[test]
    fn policy_can_be_overridden() {
        let policy = UploadPolicy { max_bytes: 1024, mime_prefix: "image/png" };
        assert_eq!(policy.check("image/jpeg", 10), Err(UploadError::WrongType));
        assert!(policy.check("image/png", 2048).is_err());
    }

    #[test]
    fn error_text_names_the_limit() {
        let err = UploadError::TooLarge { max_bytes: MAX_UPLOAD_BYTES };
        assert_eq!(err.to_string(), "Die Datei ist zu groß (max. 5MB erlaubt).");
    }

    #[test]
    fn data_url_parse_and_format() {
        let url = DataUrl::parse("data:image/webp;base64,AAAA").unwrap();
        assert_eq!(url.mime_type, "image/webp");
        assert_eq!(url.data, "AAAA");
        assert_eq!(url.extension(), "webp");
        assert_eq!(url.to_string(), "data:image/webp;base64,AAAA");

        assert_eq!(DataUrl::parse("data:image/png,AAAA"), None);
        assert_eq!(DataUrl::parse("https://example.com/a.png"), None);
        assert_eq!(DataUrl::parse("data:;base64,AAAA"), None);
    }
}
