use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use serde_json::Value;

use crate::config::DraftingConfig;
use crate::drafting::domain::{Party, PropertyParcel};
use crate::drafting::ledger::CostComponents;
use crate::drafting::outline::ContractOutline;
use crate::drafting::repository::{OutlineDraft, OutlineId, OutlineRepository, RepositoryError};
use crate::drafting::templates::{
    AppealGrounds, AppealRequest, AppealScope, CancellationActionRequest, ContractKind,
    ContractParty, DocumentRequest, EmploymentContractRequest, EmploymentTerm,
    EnforcementRequest, FreeFormContractRequest, LawsuitRequest, RegistrationPetitionRequest,
    StandardContractRequest, TerminationKind, TerminationRequest, TitleStatementRequest,
};
use crate::drafting::{drafting_router, DraftingService};

pub(super) const PLAINTIFF_OIB: &str = "12345678903";
pub(super) const DEFENDANT_OIB: &str = "69696969694";
pub(super) const COMPANY_OIB: &str = "98765432106";

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn plaintiff() -> Party {
    Party::natural("Ivan Horvat", PLAINTIFF_OIB, "Ilica 1, Zagreb")
}

pub(super) fn defendant() -> Party {
    Party::natural("Marko Marić", DEFENDANT_OIB, "Riva 5, Split")
}

pub(super) fn company() -> Party {
    Party::legal(
        "Gradnja d.o.o.",
        COMPANY_OIB,
        "080123456",
        "Ana Kovač, direktorica",
        "Zagreb, Vukovarska 10",
    )
}

pub(super) fn parcel() -> PropertyParcel {
    PropertyParcel {
        cadastral_municipality: "Trešnjevka".to_string(),
        folio: "1234".to_string(),
        parcel_number: "567/8".to_string(),
        description: "kuća i dvorište".to_string(),
    }
}

pub(super) fn costs() -> CostComponents {
    CostComponents {
        drafting: dec!(100),
        vat: dec!(25),
        material: dec!(0),
        court_fee: dec!(50),
    }
}

pub(super) fn lawsuit() -> LawsuitRequest {
    LawsuitRequest {
        court: "Općinski građanski sud u Zagrebu".to_string(),
        attorney: Some("Odvjetnik Petar Perić".to_string()),
        plaintiff: plaintiff(),
        defendant: defendant(),
        subject: "Isplate".to_string(),
        claim_value: dec!(1500),
        due_date: Some(date(2024, 1, 15)),
        facts: "Tuženik nije platio račun.\nOpomena je poslana.".to_string(),
        evidence: "Račun br. 1/2024".to_string(),
        costs: Some(costs()),
    }
}

pub(super) fn lawsuit_request() -> DocumentRequest {
    DocumentRequest::CivilLawsuit(lawsuit())
}

pub(super) fn enforcement() -> EnforcementRequest {
    EnforcementRequest {
        notary: "Ivana Babić".to_string(),
        creditor: company(),
        debtor: defendant(),
        principal: dec!(2500.40),
        credible_document: "Račun br. 77/2024".to_string(),
        document_date: Some(date(2024, 2, 1)),
        due_date: Some(date(2024, 3, 1)),
        costs: Some(costs()),
    }
}

pub(super) fn appeal() -> AppealRequest {
    AppealRequest {
        first_instance_court: "Općinskog građanskog suda u Zagrebu".to_string(),
        second_instance_court: "Županijski sud u Zagrebu".to_string(),
        plaintiff: "Ivan Horvat".to_string(),
        defendant: "Marko Marić".to_string(),
        judgment_number: "P-123/2024".to_string(),
        judgment_date: Some(date(2024, 5, 10)),
        scope: AppealScope::Entirety,
        grounds: AppealGrounds::default(),
        reasoning: "Sud je pogrešno ocijenio iskaz svjedoka.".to_string(),
        place: String::new(),
        drafted_on: Some(date(2024, 5, 20)),
        costs: None,
    }
}

pub(super) fn sale_contract() -> StandardContractRequest {
    StandardContractRequest {
        kind: ContractKind::Sale,
        first_party: plaintiff(),
        second_party: defendant(),
        place: "Split".to_string(),
        drafted_on: Some(date(2024, 6, 1)),
        subject: String::new(),
        amount: dec!(12000),
        term: String::new(),
        repayment_date: None,
        deposit: None,
        notarized: false,
        costs: None,
    }
}

pub(super) fn termination(kind: TerminationKind) -> TerminationRequest {
    TerminationRequest {
        kind,
        employer: company(),
        employee: defendant(),
        contract_date: Some(date(2020, 3, 1)),
        reasoning: "Ukinuto je radno mjesto.".to_string(),
        notice_period: "mjesec dana".to_string(),
        prior_warning: None,
        place: "Zagreb".to_string(),
        drafted_on: Some(date(2024, 9, 30)),
    }
}

pub(super) fn cancellation(bad_faith: bool) -> CancellationActionRequest {
    CancellationActionRequest {
        court: "Općinski sud u Zagrebu".to_string(),
        attorney: None,
        plaintiff: plaintiff(),
        defendant: defendant(),
        parcel: parcel(),
        claim_value: dec!(80000),
        registration_number: "Z-4567/2023".to_string(),
        registration_date: Some(date(2023, 4, 12)),
        instrument: "Ugovor o darovanju".to_string(),
        instrument_date: Some(date(2023, 3, 30)),
        invalidity_reason: "Potpis darovatelja je krivotvoren.".to_string(),
        defendant_in_bad_faith: bad_faith,
        place: "Zagreb".to_string(),
        drafted_on: Some(date(2024, 1, 10)),
        costs: None,
    }
}

pub(super) fn employment() -> EmploymentContractRequest {
    EmploymentContractRequest {
        employer: company(),
        employee: defendant(),
        position: "Voditelj gradilišta".to_string(),
        gross_salary: dec!(2100),
        start_date: Some(date(2024, 10, 1)),
        term: EmploymentTerm::Indefinite,
        probation_months: None,
        weekly_hours: None,
        place: "Zagreb".to_string(),
        drafted_on: Some(date(2024, 9, 20)),
    }
}

pub(super) fn title_statement() -> TitleStatementRequest {
    TitleStatementRequest {
        seller: plaintiff(),
        buyer: defendant(),
        parcel: parcel(),
        contract_date: Some(date(2024, 4, 2)),
    }
}

pub(super) fn registration_petition() -> RegistrationPetitionRequest {
    RegistrationPetitionRequest {
        court: "Općinski sud u Zagrebu".to_string(),
        petitioner: defendant(),
        counterparty: plaintiff(),
        parcel: parcel(),
        contract_info: "Ugovor o kupoprodaji od 02.04.2024.".to_string(),
        title_statement_info: "Tabularna izjava od 02.04.2024.".to_string(),
        costs: None,
    }
}

pub(super) fn free_form() -> FreeFormContractRequest {
    let mut outline = ContractOutline::new();
    let general = outline.add_section("Opće odredbe");
    outline
        .add_article(general, "Stranke uređuju suradnju.")
        .expect("article");
    outline
        .add_article(general, "Suradnja traje godinu dana.")
        .expect("article");
    outline.add_section("");
    let closing = outline.add_section("Završne odredbe");
    outline
        .add_article(closing, "Sporove rješava sud u Zagrebu.")
        .expect("article");

    FreeFormContractRequest {
        title: "Ugovor o suradnji".to_string(),
        parties: vec![
            ContractParty {
                role: "naručitelj".to_string(),
                party: company(),
            },
            ContractParty {
                role: "izvođač".to_string(),
                party: plaintiff(),
            },
        ],
        place: "Zagreb".to_string(),
        drafted_on: Some(date(2024, 7, 1)),
        outline,
    }
}

/// One complete request per document kind, in `DocumentKind::ordered()` order.
pub(super) fn every_kind() -> Vec<DocumentRequest> {
    vec![
        lawsuit_request(),
        DocumentRequest::EnforcementPetition(enforcement()),
        DocumentRequest::Appeal(appeal()),
        DocumentRequest::StandardContract(sale_contract()),
        DocumentRequest::EmploymentContract(employment()),
        DocumentRequest::TerminationDecision(termination(TerminationKind::BusinessGrounds)),
        DocumentRequest::TitleStatement(title_statement()),
        DocumentRequest::RegistrationPetition(registration_petition()),
        DocumentRequest::CancellationAction(cancellation(true)),
        DocumentRequest::FreeFormContract(free_form()),
    ]
}

pub(super) fn build_service() -> (DraftingService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = DraftingService::new(repository.clone(), DraftingConfig::default());
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) drafts: Arc<Mutex<HashMap<OutlineId, OutlineDraft>>>,
}

impl OutlineRepository for MemoryRepository {
    fn insert(&self, draft: OutlineDraft) -> Result<OutlineDraft, RepositoryError> {
        let mut guard = self.drafts.lock().expect("repository mutex poisoned");
        if guard.contains_key(&draft.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(draft.id.clone(), draft.clone());
        Ok(draft)
    }

    fn fetch(&self, id: &OutlineId) -> Result<Option<OutlineDraft>, RepositoryError> {
        let guard = self.drafts.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn modify<E, F>(&self, id: &OutlineId, edit: F) -> Result<OutlineDraft, E>
    where
        F: FnOnce(&mut ContractOutline) -> Result<(), E>,
        E: From<RepositoryError>,
    {
        let mut guard = self.drafts.lock().expect("repository mutex poisoned");
        let draft = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        let mut outline = draft.outline.clone();
        edit(&mut outline)?;
        draft.outline = outline;
        Ok(draft.clone())
    }

    fn remove(&self, id: &OutlineId) -> Result<OutlineDraft, RepositoryError> {
        let mut guard = self.drafts.lock().expect("repository mutex poisoned");
        guard.remove(id).ok_or(RepositoryError::NotFound)
    }
}

pub(super) struct UnavailableRepository;

impl OutlineRepository for UnavailableRepository {
    fn insert(&self, _draft: OutlineDraft) -> Result<OutlineDraft, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn fetch(&self, _id: &OutlineId) -> Result<Option<OutlineDraft>, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn modify<E, F>(&self, _id: &OutlineId, _edit: F) -> Result<OutlineDraft, E>
    where
        F: FnOnce(&mut ContractOutline) -> Result<(), E>,
        E: From<RepositoryError>,
    {
        Err(RepositoryError::Unavailable("storage offline".to_string()).into())
    }

    fn remove(&self, _id: &OutlineId) -> Result<OutlineDraft, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assert_unprocessable(response: &Response) {
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

pub(super) fn drafting_router_with_service(
    service: DraftingService<MemoryRepository>,
) -> axum::Router {
    drafting_router(Arc::new(service))
}
