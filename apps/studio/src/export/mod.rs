//! Download pipeline: render at neutral zoom, rasterize the page, and either
//! hand the PNG straight back or wrap it into a single-page PDF sized to the
//! capture's aspect ratio. Rasterization and PDF wrapping sit behind traits
//! so hosts can plug in a headless browser and a writer of their choice.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, info};

use crate::analytics::{emit, EventKind};
use crate::render::RenderedPage;
use crate::slots::{SlotKey, SlotOutcome};
use crate::store::AppState;

pub const PNG_FILENAME: &str = "resume.png";
pub const PDF_FILENAME: &str = "resume.pdf";

// CSS pixels are 96 to the inch, PDF points 72.
const PT_PER_PX: f32 = 72.0 / 96.0;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("an export is already in progress")]
    Busy,

    #[error("page capture failed: {0}")]
    Capture(String),

    #[error("document assembly failed: {0}")]
    Document(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Pdf,
}

impl ExportFormat {
    pub fn filename(&self) -> &'static str {
        match self {
            Self::Png => PNG_FILENAME,
            Self::Pdf => PDF_FILENAME,
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Pdf => "application/pdf",
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Pdf => "pdf",
        }
    }
}

/// A rasterized page as produced by the capture backend.
#[derive(Debug, Clone)]
pub struct CapturedImage {
    pub png: Vec<u8>,
    pub width_px: u32,
    pub height_px: u32,
}

/// PDF page dimensions in points, derived from the capture so the page
/// matches the rendered aspect ratio exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSizePt {
    pub width: f32,
    pub height: f32,
}

pub fn page_size_for(image: &CapturedImage) -> PageSizePt {
    PageSizePt {
        width: image.width_px as f32 * PT_PER_PX,
        height: image.height_px as f32 * PT_PER_PX,
    }
}

/// Rasterizes one rendered page to PNG.
#[async_trait]
pub trait PageCapture: Send + Sync {
    async fn capture(&self, page: &RenderedPage) -> Result<CapturedImage, ExportError>;
}

/// Wraps a captured image into a downloadable document (PDF).
pub trait DocumentWriter: Send + Sync {
    fn wrap(&self, image: &CapturedImage, page: PageSizePt) -> Result<Vec<u8>, ExportError>;
}

#[derive(Debug)]
pub struct ExportOutput {
    pub filename: &'static str,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

pub struct ExportService {
    capture: Arc<dyn PageCapture>,
    writer: Arc<dyn DocumentWriter>,
}

impl ExportService {
    pub fn new(capture: Arc<dyn PageCapture>, writer: Arc<dyn DocumentWriter>) -> Self {
        Self { capture, writer }
    }

    /// Runs one export end to end. A second call while one is in flight is
    /// rejected with [`ExportError::Busy`] and leaves the first untouched.
    /// The page is always captured at zoom 1.0; the user's zoom is restored
    /// whether the capture succeeds or fails.
    pub async fn export(
        &self,
        state: &mut AppState,
        format: ExportFormat,
    ) -> Result<ExportOutput, ExportError> {
        state
            .slots
            .try_begin(SlotKey::Export)
            .map_err(|_| ExportError::Busy)?;
        emit(
            state.sink(),
            EventKind::DownloadStarted {
                format: format.as_str().to_string(),
            },
        );
        info!(format = format.as_str(), template = %state.template, "Starting export");

        let saved_zoom = state.zoom;
        state.set_zoom(1.0);
        let page = state.render();
        let captured = self.capture.capture(&page).await;
        state.set_zoom(saved_zoom);

        let result = captured.and_then(|image| match format {
            ExportFormat::Png => Ok(image.png),
            ExportFormat::Pdf => self.writer.wrap(&image, page_size_for(&image)),
        });

        match result {
            Ok(bytes) => {
                state.slots.settle(SlotKey::Export, SlotOutcome::Success);
                emit(
                    state.sink(),
                    EventKind::DownloadCompleted {
                        format: format.as_str().to_string(),
                    },
                );
                info!(format = format.as_str(), bytes = bytes.len(), "Export complete");
                Ok(ExportOutput {
                    filename: format.filename(),
                    mime: format.mime(),
                    bytes,
                })
            }
            Err(err) => {
                state.slots.settle(SlotKey::Export, SlotOutcome::Failure);
                emit(
                    state.sink(),
                    EventKind::DownloadFailed {
                        format: format.as_str().to_string(),
                        error: err.to_string(),
                    },
                );
                error!(format = format.as_str(), error = %err, "Export failed");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::RecordingSink;
    use crate::models::seed::seed_document;
    use crate::slots::SlotState;

    struct StubCapture {
        fail: bool,
    }

    #[async_trait]
    impl PageCapture for StubCapture {
        async fn capture(&self, _page: &RenderedPage) -> Result<CapturedImage, ExportError> {
            if self.fail {
                return Err(ExportError::Capture("browser unavailable".to_string()));
            }
            Ok(CapturedImage {
                png: vec![0x89, 0x50, 0x4E, 0x47],
                width_px: 794,
                height_px: 1123,
            })
        }
    }

    struct StubWriter;

    impl DocumentWriter for StubWriter {
        fn wrap(&self, image: &CapturedImage, page: PageSizePt) -> Result<Vec<u8>, ExportError> {
            let mut bytes = format!("%PDF {}x{}\n", page.width, page.height).into_bytes();
            bytes.extend_from_slice(&image.png);
            Ok(bytes)
        }
    }

    fn service(fail: bool) -> ExportService {
        ExportService::new(Arc::new(StubCapture { fail }), Arc::new(StubWriter))
    }

    fn state() -> AppState {
        AppState::new(seed_document(), Arc::new(RecordingSink::default()))
    }

    #[test]
    fn test_page_size_follows_capture_aspect() {
        let image = CapturedImage {
            png: Vec::new(),
            width_px: 960,
            height_px: 1440,
        };
        let size = page_size_for(&image);
        assert_eq!(size.width, 720.0);
        assert_eq!(size.height, 1080.0);
    }

    #[tokio::test]
    async fn test_png_export_returns_capture_bytes() {
        let mut state = state();
        let out = service(false)
            .export(&mut state, ExportFormat::Png)
            .await
            .unwrap();
        assert_eq!(out.filename, "resume.png");
        assert_eq!(out.mime, "image/png");
        assert_eq!(out.bytes, vec![0x89, 0x50, 0x4E, 0x47]);
        assert_eq!(
            state.slots.state(SlotKey::Export),
            SlotState::Settled(SlotOutcome::Success)
        );
    }

    #[tokio::test]
    async fn test_pdf_export_wraps_the_capture() {
        let mut state = state();
        let out = service(false)
            .export(&mut state, ExportFormat::Pdf)
            .await
            .unwrap();
        assert_eq!(out.filename, "resume.pdf");
        assert!(out.bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_second_export_rejected_while_pending() {
        let mut state = state();
        state.slots.try_begin(SlotKey::Export).unwrap();
        let err = service(false)
            .export(&mut state, ExportFormat::Png)
            .await
            .unwrap_err();
        assert!(matches!(err, ExportError::Busy));
        assert_eq!(
            state.slots.state(SlotKey::Export),
            SlotState::Pending,
            "the first export's slot is untouched"
        );
    }

    #[tokio::test]
    async fn test_zoom_restored_after_failed_capture() {
        let mut state = state();
        state.set_zoom(1.3);
        let err = service(true)
            .export(&mut state, ExportFormat::Png)
            .await
            .unwrap_err();
        assert!(matches!(err, ExportError::Capture(_)));
        assert_eq!(state.zoom, 1.3, "user zoom survives a failed export");
        assert_eq!(
            state.slots.state(SlotKey::Export),
            SlotState::Settled(SlotOutcome::Failure)
        );
    }

    #[tokio::test]
    async fn test_failed_export_can_be_retried() {
        let mut state = state();
        assert!(service(true).export(&mut state, ExportFormat::Pdf).await.is_err());
        assert!(service(false).export(&mut state, ExportFormat::Pdf).await.is_ok());
    }
}
