use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;

use crate::config::DraftingConfig;

use super::export::{to_exportable, ExportableDocument};
use super::interest::{assess_interest, InterestAssessment, InterestError, InterestRequest};
use super::ledger::{build_ledger, CostComponents, CostLedger, FeeSchedule, LedgerError};
use super::outline::{ContractOutline, OutlineError};
use super::repository::{OutlineDraft, OutlineId, OutlineRepository, RepositoryError};
use super::templates::{render, DocumentKind, DocumentRequest, FreeFormContractRequest, Markup};
use super::validation::ValidationError;

/// Service composing validation, the renderers and the outline repository for the shell.
pub struct DraftingService<R> {
    repository: Arc<R>,
    config: DraftingConfig,
}

static OUTLINE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_outline_id() -> OutlineId {
    let id = OUTLINE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    OutlineId(format!("outline-{id:06}"))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    pub kind: DocumentKind,
    pub markup: Markup,
}

/// Cost components derived for a document kind together with the ledger they produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerQuote {
    pub kind: DocumentKind,
    pub components: CostComponents,
    pub ledger: CostLedger,
}

impl<R> DraftingService<R>
where
    R: OutlineRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: DraftingConfig) -> Self {
        Self { repository, config }
    }

    pub fn config(&self) -> &DraftingConfig {
        &self.config
    }

    /// Validate and render a document.
    pub fn render(
        &self,
        request: DocumentRequest,
    ) -> Result<RenderedDocument, DraftingServiceError> {
        let request = self.prepare(request);
        request.validate()?;
        Ok(self.render_prepared(&request))
    }

    /// Render without the form checks, producing placeholders for whatever is missing.
    pub fn render_draft(&self, request: DocumentRequest) -> RenderedDocument {
        let request = self.prepare(request);
        self.render_prepared(&request)
    }

    pub fn export(
        &self,
        request: DocumentRequest,
    ) -> Result<ExportableDocument, DraftingServiceError> {
        let rendered = self.render(request)?;
        Ok(self.package(&rendered))
    }

    pub fn package(&self, rendered: &RenderedDocument) -> ExportableDocument {
        let document = to_exportable(&rendered.markup).for_kind(rendered.kind);
        tracing::info!(
            kind = ?rendered.kind,
            file_name = %document.file_name,
            bytes = document.len(),
            "document exported"
        );
        document
    }

    /// Derive cost components from the kind's fee policy and the configured VAT rate.
    pub fn ledger(
        &self,
        kind: DocumentKind,
        schedule: &FeeSchedule,
    ) -> Result<LedgerQuote, DraftingServiceError> {
        let policy = kind
            .fee_policy()
            .ok_or(DraftingServiceError::NoCostLedger(kind))?;
        let components = policy.apply(schedule, self.config.vat_rate_percent)?;
        let ledger = build_ledger(&components)?;
        tracing::debug!(?kind, ?policy, total = %ledger.total, "cost ledger built");

        Ok(LedgerQuote {
            kind,
            components,
            ledger,
        })
    }

    pub fn interest(
        &self,
        request: &InterestRequest,
    ) -> Result<InterestAssessment, DraftingServiceError> {
        let assessment = assess_interest(request)?;
        tracing::debug!(days = assessment.days, "interest assessed");
        Ok(assessment)
    }

    pub fn create_outline(&self) -> Result<OutlineDraft, DraftingServiceError> {
        let draft = OutlineDraft {
            id: next_outline_id(),
            outline: ContractOutline::new(),
        };
        let stored = self.repository.insert(draft)?;
        tracing::info!(outline = %stored.id, "outline created");
        Ok(stored)
    }

    pub fn outline(&self, id: &OutlineId) -> Result<OutlineDraft, DraftingServiceError> {
        let draft = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(draft)
    }

    pub fn add_section(
        &self,
        id: &OutlineId,
        title: String,
    ) -> Result<OutlineDraft, DraftingServiceError> {
        self.edit_outline(id, "section added", |outline| {
            outline.add_section(title);
            Ok(())
        })
    }

    pub fn rename_section(
        &self,
        id: &OutlineId,
        index: usize,
        title: String,
    ) -> Result<OutlineDraft, DraftingServiceError> {
        self.edit_outline(id, "section renamed", |outline| {
            outline.rename_section(index, title)
        })
    }

    pub fn remove_section(
        &self,
        id: &OutlineId,
        index: usize,
    ) -> Result<OutlineDraft, DraftingServiceError> {
        self.edit_outline(id, "section removed", |outline| {
            outline.remove_section(index).map(|_| ())
        })
    }

    pub fn add_article(
        &self,
        id: &OutlineId,
        section_index: usize,
        text: String,
    ) -> Result<OutlineDraft, DraftingServiceError> {
        self.edit_outline(id, "article added", |outline| {
            outline.add_article(section_index, text).map(|_| ())
        })
    }

    pub fn remove_article(
        &self,
        id: &OutlineId,
        section_index: usize,
        article_index: usize,
    ) -> Result<OutlineDraft, DraftingServiceError> {
        self.edit_outline(id, "article removed", |outline| {
            outline
                .remove_article(section_index, article_index)
                .map(|_| ())
        })
    }

    /// Drop a draft once the user is done with it.
    pub fn discard_outline(&self, id: &OutlineId) -> Result<(), DraftingServiceError> {
        let draft = self.repository.remove(id)?;
        tracing::info!(outline = %draft.id, "outline discarded");
        Ok(())
    }

    /// Render a free-form contract from the stored outline, replacing any outline in `request`.
    pub fn render_outline(
        &self,
        id: &OutlineId,
        mut request: FreeFormContractRequest,
    ) -> Result<RenderedDocument, DraftingServiceError> {
        request.outline = self.outline(id)?.outline;
        self.render(DocumentRequest::FreeFormContract(request))
    }

    fn prepare(&self, mut request: DocumentRequest) -> DocumentRequest {
        request.apply_defaults(&self.config);
        request
    }

    fn render_prepared(&self, request: &DocumentRequest) -> RenderedDocument {
        let kind = request.kind();
        let markup = render(request);
        tracing::info!(?kind, bytes = markup.len(), "document rendered");
        RenderedDocument { kind, markup }
    }

    /// One edit applied by the repository under exclusive access to the draft.
    fn edit_outline<F>(
        &self,
        id: &OutlineId,
        action: &'static str,
        edit: F,
    ) -> Result<OutlineDraft, DraftingServiceError>
    where
        F: FnOnce(&mut ContractOutline) -> Result<(), OutlineError>,
    {
        let draft = self
            .repository
            .modify(id, |outline| edit(outline).map_err(DraftingServiceError::from))?;
        tracing::debug!(
            outline = %draft.id,
            sections = draft.outline.section_count(),
            articles = draft.outline.article_count(),
            "{action}"
        );
        Ok(draft)
    }
}

/// Error raised by the drafting service.
#[derive(Debug, thiserror::Error)]
pub enum DraftingServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Interest(#[from] InterestError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Outline(#[from] OutlineError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("{} has no cost ledger", .0.label())]
    NoCostLedger(DocumentKind),
}
