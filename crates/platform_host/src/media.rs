//! Image upload contracts. Only the returned public URL is persisted by callers.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`MediaUploadService`] async methods.
pub type MediaUploadFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// One file read from a picker, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// Original file name including extension.
    pub file_name: String,
    /// MIME type reported by the picker.
    pub content_type: String,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

/// Result of one successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedAsset {
    /// Public HTTPS URL for the hosted image.
    pub url: String,
    /// Provider-side asset id, when reported.
    pub public_id: Option<String>,
}

/// Host service that stores an image with a third-party media host.
pub trait MediaUploadService {
    /// Uploads `file` into `folder` and returns its public URL.
    fn upload<'a>(
        &'a self,
        file: &'a UploadFile,
        folder: &'a str,
    ) -> MediaUploadFuture<'a, Result<UploadedAsset, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Upload service for builds with no media host configured.
pub struct NoopMediaUploadService;

impl MediaUploadService for NoopMediaUploadService {
    fn upload<'a>(
        &'a self,
        _file: &'a UploadFile,
        _folder: &'a str,
    ) -> MediaUploadFuture<'a, Result<UploadedAsset, String>> {
        Box::pin(async { Err("media upload unavailable".to_string()) })
    }
}

#[derive(Debug, Default)]
struct MemoryUploads {
    uploaded: Vec<String>,
    rejected_names: Vec<String>,
}

#[derive(Debug, Clone, Default)]
/// In-memory upload service that fabricates stable `memory://` URLs.
pub struct MemoryMediaUploadService {
    inner: Rc<RefCell<MemoryUploads>>,
}

impl MemoryMediaUploadService {
    /// Makes uploads of `file_name` fail.
    pub fn reject(&self, file_name: impl Into<String>) {
        self.inner.borrow_mut().rejected_names.push(file_name.into());
    }

    /// URLs issued so far, in upload order.
    pub fn uploaded_urls(&self) -> Vec<String> {
        self.inner.borrow().uploaded.clone()
    }
}

impl MediaUploadService for MemoryMediaUploadService {
    fn upload<'a>(
        &'a self,
        file: &'a UploadFile,
        folder: &'a str,
    ) -> MediaUploadFuture<'a, Result<UploadedAsset, String>> {
        Box::pin(async move {
            let mut inner = self.inner.borrow_mut();
            if inner.rejected_names.iter().any(|name| name == &file.file_name) {
                return Err(format!("upload rejected: {}", file.file_name));
            }
            let public_id = format!("{folder}/{}-{}", inner.uploaded.len() + 1, file.file_name);
            let url = format!("memory://{public_id}");
            inner.uploaded.push(url.clone());
            Ok(UploadedAsset {
                url,
                public_id: Some(public_id),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    fn file(name: &str) -> UploadFile {
        UploadFile {
            file_name: name.to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn memory_upload_issues_sequential_urls() {
        let service = MemoryMediaUploadService::default();
        let first = block_on(service.upload(&file("a.png"), "fabric-store")).expect("upload a");
        let second = block_on(service.upload(&file("b.png"), "fabric-store")).expect("upload b");
        assert_eq!(first.url, "memory://fabric-store/1-a.png");
        assert_eq!(second.url, "memory://fabric-store/2-b.png");
        assert_eq!(service.uploaded_urls().len(), 2);
    }

    #[test]
    fn rejected_files_fail_without_recording() {
        let service = MemoryMediaUploadService::default();
        service.reject("bad.png");
        assert!(block_on(service.upload(&file("bad.png"), "x")).is_err());
        assert!(service.uploaded_urls().is_empty());
    }

    #[test]
    fn noop_upload_is_an_error() {
        assert!(block_on(NoopMediaUploadService.upload(&file("a.png"), "x")).is_err());
    }
}
