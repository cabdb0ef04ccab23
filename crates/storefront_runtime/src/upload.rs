//! Image selection for admin forms: client-side file screening, upload batching and the explicit
//! append/replace operations that commit uploaded URLs into form state.

use std::collections::VecDeque;

use futures::future::join_all;
use platform_host::{MediaUploadService, UploadFile};

/// How many images a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadMode {
    /// One image; a new upload replaces it.
    Single,
    /// A gallery of up to `max_files` images; new uploads are appended.
    Multiple {
        /// Gallery capacity.
        max_files: usize,
    },
}

impl UploadMode {
    /// Maximum number of images the field holds.
    pub const fn capacity(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Multiple { max_files } => max_files,
        }
    }
}

/// Per-field upload configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOptions {
    /// Media-host folder.
    pub folder: String,
    /// Single or gallery field.
    pub mode: UploadMode,
    /// Per-file size limit.
    pub max_file_size_bytes: u64,
    /// Accepted lowercase extensions.
    pub allowed_formats: Vec<String>,
}

/// Metadata of a picked file, available before its bytes are read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    /// File name with extension.
    pub file_name: String,
    /// Size in bytes.
    pub size_bytes: u64,
}

/// Why a picked file was not uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadRejection {
    /// Extension is not in the allowed list.
    UnsupportedFormat {
        /// Offending file.
        file_name: String,
    },
    /// File exceeds the size limit.
    TooLarge {
        /// Offending file.
        file_name: String,
    },
    /// The field is already full.
    TooMany {
        /// Offending file.
        file_name: String,
    },
    /// The media host refused the file.
    Failed {
        /// Offending file.
        file_name: String,
        /// Host message.
        message: String,
    },
}

impl UploadRejection {
    /// File the rejection is about.
    pub fn file_name(&self) -> &str {
        match self {
            Self::UnsupportedFormat { file_name }
            | Self::TooLarge { file_name }
            | Self::TooMany { file_name }
            | Self::Failed { file_name, .. } => file_name,
        }
    }
}

fn extension(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Splits picked files into the indices that may be uploaded and the rejections.
///
/// In single mode only the last acceptable file is kept, since it would replace the others.
/// In gallery mode files beyond the remaining capacity are rejected as [`UploadRejection::TooMany`].
pub fn screen_candidates(
    options: &UploadOptions,
    existing_count: usize,
    candidates: &[UploadCandidate],
) -> (Vec<usize>, Vec<UploadRejection>) {
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();

    for (index, candidate) in candidates.iter().enumerate() {
        let allowed = extension(&candidate.file_name)
            .map(|ext| options.allowed_formats.iter().any(|f| f == &ext))
            .unwrap_or(false);
        if !allowed {
            rejected.push(UploadRejection::UnsupportedFormat {
                file_name: candidate.file_name.clone(),
            });
        } else if candidate.size_bytes > options.max_file_size_bytes {
            rejected.push(UploadRejection::TooLarge {
                file_name: candidate.file_name.clone(),
            });
        } else {
            accepted.push(index);
        }
    }

    match options.mode {
        UploadMode::Single => {
            if let Some(last) = accepted.pop() {
                accepted = vec![last];
            }
        }
        UploadMode::Multiple { max_files } => {
            let room = max_files.saturating_sub(existing_count);
            for index in accepted.split_off(room.min(accepted.len())) {
                rejected.push(UploadRejection::TooMany {
                    file_name: candidates[index].file_name.clone(),
                });
            }
        }
    }

    (accepted, rejected)
}

/// Ordered image URLs held by a form field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageSelection {
    urls: Vec<String>,
}

impl ImageSelection {
    /// Selection holding `urls`.
    pub fn from_urls(urls: impl IntoIterator<Item = String>) -> Self {
        Self {
            urls: urls.into_iter().filter(|url| !url.is_empty()).collect(),
        }
    }

    /// Selection holding one URL, or nothing when it is empty.
    pub fn single(url: &str) -> Self {
        Self::from_urls([url.to_string()])
    }

    /// Appends `urls` after the current images, up to `capacity` images in total. Returns how
    /// many were added.
    pub fn append_images(
        &mut self,
        urls: impl IntoIterator<Item = String>,
        capacity: usize,
    ) -> usize {
        let before = self.urls.len();
        for url in urls {
            if self.urls.len() >= capacity {
                break;
            }
            if !url.is_empty() {
                self.urls.push(url);
            }
        }
        self.urls.len() - before
    }

    /// Makes `url` the only image.
    pub fn replace_image(&mut self, url: String) {
        self.urls.clear();
        if !url.is_empty() {
            self.urls.push(url);
        }
    }

    /// Commits a finished batch according to `mode`.
    pub fn commit(&mut self, mode: UploadMode, urls: Vec<String>) {
        match mode {
            UploadMode::Single => {
                if let Some(url) = urls.into_iter().last() {
                    self.replace_image(url);
                }
            }
            UploadMode::Multiple { max_files } => {
                self.append_images(urls, max_files);
            }
        }
    }

    /// Removes the image at `index`, if present.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.urls.len()).then(|| self.urls.remove(index))
    }

    /// Current URLs in order.
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// First image, if any.
    pub fn first(&self) -> Option<&str> {
        self.urls.first().map(String::as_str)
    }

    /// Number of images.
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Returns whether no image is selected.
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

/// What a finished batch produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueueOutcome {
    /// URLs of successful uploads, in the order the files were picked.
    pub urls: Vec<String>,
    /// Files that failed to upload.
    pub failures: Vec<UploadRejection>,
}

/// Tracks one batch of uploads and reports once every file has settled.
#[derive(Debug, Clone, Default)]
pub struct UploadQueue {
    slots: VecDeque<Option<Result<String, UploadRejection>>>,
}

impl UploadQueue {
    /// Starts a batch of `files` uploads.
    pub fn begin(files: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(files).collect(),
        }
    }

    /// Returns whether uploads are still outstanding.
    pub fn is_busy(&self) -> bool {
        self.slots.iter().any(Option::is_none)
    }

    /// Records the result for slot `index`. Returns the batch outcome when this was the last
    /// outstanding upload.
    pub fn settle(
        &mut self,
        index: usize,
        result: Result<String, UploadRejection>,
    ) -> Option<QueueOutcome> {
        let slot = self.slots.get_mut(index)?;
        if slot.is_some() {
            return None;
        }
        *slot = Some(result);
        if self.is_busy() {
            return None;
        }
        let mut outcome = QueueOutcome::default();
        for settled in self.slots.drain(..).flatten() {
            match settled {
                Ok(url) => outcome.urls.push(url),
                Err(rejection) => outcome.failures.push(rejection),
            }
        }
        Some(outcome)
    }
}

/// Uploads `files` concurrently into `folder` and returns the batch outcome.
pub async fn upload_batch<M: MediaUploadService + ?Sized>(
    media: &M,
    folder: &str,
    files: &[UploadFile],
) -> QueueOutcome {
    let mut queue = UploadQueue::begin(files.len());
    let results = join_all(files.iter().map(|file| media.upload(file, folder))).await;
    let mut outcome = QueueOutcome::default();
    for (index, (file, result)) in files.iter().zip(results).enumerate() {
        let settled = result.map(|asset| asset.url).map_err(|message| {
            UploadRejection::Failed {
                file_name: file.file_name.clone(),
                message,
            }
        });
        if let Some(done) = queue.settle(index, settled) {
            outcome = done;
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::MemoryMediaUploadService;
    use pretty_assertions::assert_eq;

    use super::*;

    fn options(mode: UploadMode) -> UploadOptions {
        UploadOptions {
            folder: "fabric-store".to_string(),
            mode,
            max_file_size_bytes: 5 * 1024 * 1024,
            allowed_formats: ["jpg", "jpeg", "png", "webp"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    fn candidate(name: &str, size_bytes: u64) -> UploadCandidate {
        UploadCandidate {
            file_name: name.to_string(),
            size_bytes,
        }
    }

    fn file(name: &str) -> UploadFile {
        UploadFile {
            file_name: name.to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: vec![0xff, 0xd8],
        }
    }

    #[test]
    fn screening_rejects_format_size_and_overflow() {
        let picked = vec![
            candidate("a.JPG", 10),
            candidate("b.gif", 10),
            candidate("c.png", 6 * 1024 * 1024),
            candidate("d.webp", 10),
            candidate("e.jpeg", 10),
        ];
        let (accepted, rejected) =
            screen_candidates(&options(UploadMode::Multiple { max_files: 10 }), 8, &picked);
        assert_eq!(accepted, vec![0, 3]);
        assert_eq!(
            rejected,
            vec![
                UploadRejection::UnsupportedFormat {
                    file_name: "b.gif".to_string()
                },
                UploadRejection::TooLarge {
                    file_name: "c.png".to_string()
                },
                UploadRejection::TooMany {
                    file_name: "e.jpeg".to_string()
                },
            ]
        );
    }

    #[test]
    fn single_mode_keeps_last_acceptable_file() {
        let picked = vec![candidate("a.png", 1), candidate("b.png", 1), candidate("noext", 1)];
        let (accepted, rejected) = screen_candidates(&options(UploadMode::Single), 1, &picked);
        assert_eq!(accepted, vec![1]);
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].file_name(), "noext");
    }

    #[test]
    fn append_respects_capacity_and_replace_keeps_one() {
        let mut images = ImageSelection::from_urls(vec!["a".to_string()]);
        let added = images.append_images(vec!["b".to_string(), "c".to_string()], 2);
        assert_eq!(added, 1);
        assert_eq!(images.urls(), ["a".to_string(), "b".to_string()]);

        images.replace_image("z".to_string());
        assert_eq!(images.urls(), ["z".to_string()]);
        assert_eq!(images.remove(3), None);
        assert_eq!(images.remove(0), Some("z".to_string()));
        assert!(images.is_empty());
    }

    #[test]
    fn commit_selects_operation_by_mode() {
        let mut gallery = ImageSelection::single("a");
        gallery.commit(
            UploadMode::Multiple { max_files: 10 },
            vec!["b".to_string(), "c".to_string()],
        );
        assert_eq!(gallery.len(), 3);

        let mut avatar = ImageSelection::single("old");
        avatar.commit(UploadMode::Single, vec!["new".to_string()]);
        assert_eq!(avatar.first(), Some("new"));
        avatar.commit(UploadMode::Single, Vec::new());
        assert_eq!(avatar.first(), Some("new"));
    }

    #[test]
    fn queue_reports_once_after_last_settles() {
        let mut queue = UploadQueue::begin(2);
        assert!(queue.is_busy());
        assert_eq!(queue.settle(1, Ok("second".to_string())), None);
        assert_eq!(queue.settle(1, Ok("dup".to_string())), None);
        let outcome = queue
            .settle(0, Ok("first".to_string()))
            .expect("batch ends");
        assert_eq!(outcome.urls, vec!["first", "second"]);
        assert!(outcome.failures.is_empty());
    }

    #[test]
    fn batch_upload_keeps_successes_and_reports_failures() {
        let media = MemoryMediaUploadService::default();
        media.reject("bad.png");
        let outcome = block_on(upload_batch(
            &media,
            "fabric-store",
            &[file("a.jpg"), file("bad.png"), file("b.jpg")],
        ));
        assert_eq!(
            outcome.urls,
            vec!["memory://fabric-store/1-a.jpg", "memory://fabric-store/2-b.jpg"]
        );
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].file_name(), "bad.png");
    }
}
