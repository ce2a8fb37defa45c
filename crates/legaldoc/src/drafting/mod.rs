//! Croatian legal document drafting: party model, cost ledger, interest calculator,
//! document templates, contract outlines and the `.doc` export envelope.
//!
//! Rendering is pure. The only mutable state is the outline draft, which the shell keeps
//! behind [`OutlineRepository`] and edits one read-modify-write action at a time.

pub mod domain;
pub mod export;
pub mod format;
pub mod interest;
pub mod ledger;
pub mod outline;
pub mod repository;
pub mod router;
pub mod service;
pub mod templates;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{LegalEntity, NaturalPerson, Party, PropertyParcel};
pub use export::{to_exportable, ExportableDocument};
pub use interest::{
    assess_interest, compute_interest, InterestAssessment, InterestError, InterestRequest,
};
pub use ledger::{
    build_ledger, CostComponents, CostItem, CostLedger, FeePolicy, FeeSchedule, LedgerError,
};
pub use outline::{ContractOutline, OutlineError, OutlineSection};
pub use repository::{OutlineDraft, OutlineId, OutlineRepository, RepositoryError};
pub use router::drafting_router;
pub use service::{DraftingService, DraftingServiceError, LedgerQuote, RenderedDocument};
pub use templates::{render, DocumentKind, DocumentRequest, Markup};
pub use validation::{oib_is_valid, ValidationError};
