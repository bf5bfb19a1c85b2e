//! The explicit application state: one document plus the view selection
//! (template, theme, zoom) and the task slots. There are no process-wide
//! globals; the host owns exactly one `AppState` and every edit replaces the
//! document value wholesale.

use std::sync::Arc;

use uuid::Uuid;

use crate::analytics::{emit, EventKind, EventSink};
use crate::assist::{self, TextModel};
use crate::editor::ops::{update_experience, update_personal, ExperiencePatch, PersonalPatch};
use crate::models::resume::ResumeData;
use crate::render::{render_page, RenderedPage, TemplateId, Theme};
use crate::slots::{SlotBusy, SlotKey, SlotOutcome, Slots};

pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 1.5;
pub const ZOOM_STEP: f32 = 0.1;
const DEFAULT_ZOOM: f32 = 0.8;

pub struct AppState {
    pub document: ResumeData,
    pub template: TemplateId,
    pub theme: Theme,
    pub zoom: f32,
    pub slots: Slots,
    sink: Arc<dyn EventSink>,
}

impl AppState {
    pub fn new(document: ResumeData, sink: Arc<dyn EventSink>) -> Self {
        Self {
            document,
            template: TemplateId::ModernSidebar,
            theme: Theme::Dark,
            zoom: DEFAULT_ZOOM,
            slots: Slots::new(),
            sink,
        }
    }

    pub fn sink(&self) -> &dyn EventSink {
        self.sink.as_ref()
    }

    /// Applies one pure edit and replaces the document.
    pub fn apply(&mut self, edit: impl FnOnce(&ResumeData) -> ResumeData) {
        self.document = edit(&self.document);
    }

    /// Switches the rendering template. Instantaneous and side-effect-free
    /// for the document — only the projector selection changes.
    pub fn select_template(&mut self, id: TemplateId) {
        self.template = id;
        emit(
            self.sink.as_ref(),
            EventKind::TemplateSelected {
                template_id: id.as_str().to_string(),
            },
        );
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        emit(
            self.sink.as_ref(),
            EventKind::ThemeToggled {
                theme: self.theme.as_str().to_string(),
            },
        );
    }

    /// Tab panels live in the host UI; the store only records the change.
    pub fn record_tab_change(&self, tab: &str) {
        emit(
            self.sink.as_ref(),
            EventKind::EditorTabChanged {
                tab_name: tab.to_string(),
            },
        );
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    /// Projects the current document through the current view selection.
    pub fn render(&self) -> RenderedPage {
        render_page(&self.document, self.template, self.theme, self.zoom)
    }

    /// Enhances the personal quote through the text model and splices the
    /// result back into the document. Rejected while a quote enhance is
    /// already in flight; the model's own failures degrade to the original
    /// text inside [`assist::enhance`], so the slot always settles success.
    pub async fn enhance_quote(&mut self, model: &dyn TextModel) -> Result<(), SlotBusy> {
        self.slots.try_begin(SlotKey::Quote)?;
        emit(
            self.sink.as_ref(),
            EventKind::AiEnhancementUsed {
                context: "personal quote".to_string(),
            },
        );
        let improved = assist::enhance(model, &self.document.personal.quote, "personal quote").await;
        self.document = update_personal(
            &self.document,
            PersonalPatch {
                quote: Some(improved),
                ..Default::default()
            },
        );
        self.slots.settle(SlotKey::Quote, SlotOutcome::Success);
        Ok(())
    }

    /// Generates a bullet for one experience entry's description. Unknown
    /// ids are a silent no-op before any slot or model activity.
    pub async fn generate_experience_bullet(
        &mut self,
        model: &dyn TextModel,
        id: Uuid,
    ) -> Result<(), SlotBusy> {
        let Some(entry) = self.document.experience.iter().find(|e| e.id == id) else {
            return Ok(());
        };
        let (role, company) = (entry.role.clone(), entry.company.clone());

        self.slots.try_begin(SlotKey::Experience(id))?;
        emit(self.sink.as_ref(), EventKind::AiBulletGenerated);
        let bullet = assist::generate_bullet(model, &role, &company).await;
        self.document = update_experience(
            &self.document,
            id,
            ExperiencePatch {
                description: Some(bullet),
                ..Default::default()
            },
        );
        self.slots.settle(SlotKey::Experience(id), SlotOutcome::Success);
        Ok(())
    }
}
