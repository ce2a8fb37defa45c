//! Document templates. One request type and one render function per document kind;
//! dispatch is a closed enum so a new kind cannot be left unhandled.

mod blocks;
pub mod contracts;
pub mod labour;
pub mod land_registry;
pub mod litigation;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::DraftingConfig;

use super::ledger::FeePolicy;

pub use contracts::{
    render_free_form_contract, render_standard_contract, ContractKind, ContractParty,
    ContractProfile, FreeFormContractRequest, StandardContractRequest,
};
pub use labour::{
    render_employment_contract, render_termination, EmploymentContractRequest, EmploymentTerm,
    TerminationKind, TerminationRequest,
};
pub use land_registry::{
    render_cancellation_action, render_registration_petition, render_title_statement,
    CancellationActionRequest, RegistrationPetitionRequest, TitleStatementRequest,
};
pub use litigation::{
    render_appeal, render_enforcement, render_lawsuit, AppealGrounds, AppealRequest, AppealScope,
    EnforcementRequest, LawsuitRequest,
};

/// Rendered document body (HTML fragment).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Markup(String);

impl Markup {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Markup {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    CivilLawsuit,
    EnforcementPetition,
    Appeal,
    StandardContract,
    EmploymentContract,
    TerminationDecision,
    TitleStatement,
    RegistrationPetition,
    CancellationAction,
    FreeFormContract,
}

impl DocumentKind {
    pub const fn ordered() -> [Self; 10] {
        [
            Self::CivilLawsuit,
            Self::EnforcementPetition,
            Self::Appeal,
            Self::StandardContract,
            Self::EmploymentContract,
            Self::TerminationDecision,
            Self::TitleStatement,
            Self::RegistrationPetition,
            Self::CancellationAction,
            Self::FreeFormContract,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CivilLawsuit => "Tužba",
            Self::EnforcementPetition => "Prijedlog za ovrhu",
            Self::Appeal => "Žalba",
            Self::StandardContract => "Ugovor",
            Self::EmploymentContract => "Ugovor o radu",
            Self::TerminationDecision => "Odluka o otkazu",
            Self::TitleStatement => "Tabularna izjava",
            Self::RegistrationPetition => "Zemljišnoknjižni prijedlog",
            Self::CancellationAction => "Brisovna tužba",
            Self::FreeFormContract => "Slobodni ugovor",
        }
    }

    /// Download name (without extension) offered for the exported file.
    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::CivilLawsuit => "Tuzba",
            Self::EnforcementPetition => "Ovrha",
            Self::Appeal => "Zalba",
            Self::StandardContract => "Ugovor",
            Self::EmploymentContract => "Ugovor_o_radu",
            Self::TerminationDecision => "Otkaz",
            Self::TitleStatement => "Tabularna",
            Self::RegistrationPetition => "ZK_Prijedlog",
            Self::CancellationAction => "Brisovna_tuzba",
            Self::FreeFormContract => "Ugovor_slobodni",
        }
    }

    /// Fee policy used to derive cost components, `None` for kinds without a cost ledger.
    pub const fn fee_policy(self) -> Option<FeePolicy> {
        match self {
            Self::CivilLawsuit
            | Self::Appeal
            | Self::StandardContract
            | Self::CancellationAction => Some(FeePolicy::VatOnDrafting),
            Self::EnforcementPetition => Some(FeePolicy::VatOnDraftingAndMaterial),
            Self::RegistrationPetition => Some(FeePolicy::CourtFeeOnly),
            Self::EmploymentContract
            | Self::TerminationDecision
            | Self::TitleStatement
            | Self::FreeFormContract => None,
        }
    }
}

/// Structured input for a single render call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocumentRequest {
    CivilLawsuit(LawsuitRequest),
    EnforcementPetition(EnforcementRequest),
    Appeal(AppealRequest),
    StandardContract(StandardContractRequest),
    EmploymentContract(EmploymentContractRequest),
    TerminationDecision(TerminationRequest),
    TitleStatement(TitleStatementRequest),
    RegistrationPetition(RegistrationPetitionRequest),
    CancellationAction(CancellationActionRequest),
    FreeFormContract(FreeFormContractRequest),
}

impl DocumentRequest {
    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::CivilLawsuit(_) => DocumentKind::CivilLawsuit,
            Self::EnforcementPetition(_) => DocumentKind::EnforcementPetition,
            Self::Appeal(_) => DocumentKind::Appeal,
            Self::StandardContract(_) => DocumentKind::StandardContract,
            Self::EmploymentContract(_) => DocumentKind::EmploymentContract,
            Self::TerminationDecision(_) => DocumentKind::TerminationDecision,
            Self::TitleStatement(_) => DocumentKind::TitleStatement,
            Self::RegistrationPetition(_) => DocumentKind::RegistrationPetition,
            Self::CancellationAction(_) => DocumentKind::CancellationAction,
            Self::FreeFormContract(_) => DocumentKind::FreeFormContract,
        }
    }

    /// Fills shell-level defaults (place of drafting) left blank by the form.
    pub fn apply_defaults(&mut self, config: &DraftingConfig) {
        let place = match self {
            Self::Appeal(request) => &mut request.place,
            Self::StandardContract(request) => &mut request.place,
            Self::EmploymentContract(request) => &mut request.place,
            Self::TerminationDecision(request) => &mut request.place,
            Self::CancellationAction(request) => &mut request.place,
            Self::FreeFormContract(request) => &mut request.place,
            Self::CivilLawsuit(_)
            | Self::EnforcementPetition(_)
            | Self::TitleStatement(_)
            | Self::RegistrationPetition(_) => return,
        };
        if place.trim().is_empty() {
            *place = config.default_place.clone();
        }
    }
}

pub fn render(request: &DocumentRequest) -> Markup {
    match request {
        DocumentRequest::CivilLawsuit(request) => render_lawsuit(request),
        DocumentRequest::EnforcementPetition(request) => render_enforcement(request),
        DocumentRequest::Appeal(request) => render_appeal(request),
        DocumentRequest::StandardContract(request) => render_standard_contract(request),
        DocumentRequest::EmploymentContract(request) => render_employment_contract(request),
        DocumentRequest::TerminationDecision(request) => render_termination(request),
        DocumentRequest::TitleStatement(request) => render_title_statement(request),
        DocumentRequest::RegistrationPetition(request) => render_registration_petition(request),
        DocumentRequest::CancellationAction(request) => render_cancellation_action(request),
        DocumentRequest::FreeFormContract(request) => render_free_form_contract(request),
    }
}
