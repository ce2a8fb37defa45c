use super::common::*;
use rust_decimal_macros::dec;
use std::sync::Arc;

use crate::config::DraftingConfig;
use crate::drafting::interest::{InterestError, InterestRequest};
use crate::drafting::ledger::{CostItem, FeeSchedule};
use crate::drafting::outline::OutlineError;
use crate::drafting::repository::{OutlineId, OutlineRepository, RepositoryError};
use crate::drafting::templates::{
    ContractParty, DocumentKind, DocumentRequest, FreeFormContractRequest,
};
use crate::drafting::validation::ValidationError;
use crate::drafting::{DraftingService, DraftingServiceError};

#[test]
fn render_fills_default_place() {
    let (service, _) = build_service();
    let rendered = service
        .render(DocumentRequest::Appeal(appeal()))
        .expect("appeal renders");
    assert_eq!(rendered.kind, DocumentKind::Appeal);
    assert!(rendered
        .markup
        .as_str()
        .contains("U Zagreb, dana 20.05.2024."));
}

#[test]
fn render_rejects_invalid_oib() {
    let (service, _) = build_service();
    let mut request = lawsuit();
    request.defendant = crate::drafting::domain::Party::natural(
        "Marko Marić",
        "12345678901",
        "Riva 5, Split",
    );

    match service.render(DocumentRequest::CivilLawsuit(request)) {
        Err(DraftingServiceError::Validation(ValidationError::InvalidOib { role })) => {
            assert_eq!(role, "TUŽENIK");
        }
        other => panic!("expected invalid OIB, got {other:?}"),
    }
}

#[test]
fn draft_rendering_skips_form_checks() {
    let (service, _) = build_service();
    let mut request = lawsuit();
    request.court.clear();

    assert!(service
        .render(DocumentRequest::CivilLawsuit(request.clone()))
        .is_err());
    let draft = service.render_draft(DocumentRequest::CivilLawsuit(request));
    assert!(!draft.markup.is_empty());
}

#[test]
fn export_names_file_after_kind() {
    let (service, _) = build_service();
    let document = service
        .export(DocumentRequest::EnforcementPetition(enforcement()))
        .expect("export");
    assert_eq!(document.file_name, "Ovrha.doc");
    assert_eq!(document.mime.essence_str(), "application/msword");
    assert!(document.content.contains("PRIJEDLOG ZA OVRHU"));
}

#[test]
fn ledger_applies_configured_vat_rate() {
    let repository = Arc::new(MemoryRepository::default());
    let config = DraftingConfig {
        default_place: "Rijeka".to_string(),
        vat_rate_percent: dec!(13),
    };
    let service = DraftingService::new(repository, config);
    let schedule = FeeSchedule {
        drafting: dec!(200),
        material: dec!(100),
        court_fee: dec!(0),
        charge_vat: true,
    };

    let quote = service
        .ledger(DocumentKind::EnforcementPetition, &schedule)
        .expect("quote");
    assert_eq!(quote.components.vat, dec!(39));
    assert_eq!(quote.ledger.total, dec!(339));
    assert!(quote.ledger.shows(CostItem::MaterialOrNotaryAward));
    assert!(!quote.ledger.shows(CostItem::CourtFee));
}

#[test]
fn registration_petition_claims_court_fee_only() {
    let (service, _) = build_service();
    let schedule = FeeSchedule {
        drafting: dec!(200),
        material: dec!(30),
        court_fee: dec!(40),
        charge_vat: true,
    };
    let quote = service
        .ledger(DocumentKind::RegistrationPetition, &schedule)
        .expect("quote");
    assert_eq!(quote.ledger.total, dec!(40));
    assert_eq!(quote.ledger.lines.len(), 2);
}

#[test]
fn kinds_without_costs_have_no_ledger() {
    let (service, _) = build_service();
    match service.ledger(DocumentKind::TitleStatement, &FeeSchedule::default()) {
        Err(DraftingServiceError::NoCostLedger(DocumentKind::TitleStatement)) => {}
        other => panic!("expected missing ledger, got {other:?}"),
    }
}

#[test]
fn interest_rejects_reversed_range() {
    let (service, _) = build_service();
    let request = InterestRequest {
        principal: dec!(1000),
        annual_rate_percent: dec!(12),
        accrual_start: date(2024, 3, 1),
        as_of: date(2024, 1, 1),
    };
    match service.interest(&request) {
        Err(DraftingServiceError::Interest(InterestError::InvalidDateRange { .. })) => {}
        other => panic!("expected invalid range, got {other:?}"),
    }
}

#[test]
fn outline_edits_are_persisted() {
    let (service, repository) = build_service();
    let created = service.create_outline().expect("create");
    assert_eq!(created.outline.section_count(), 0);

    service
        .add_section(&created.id, "Predmet".to_string())
        .expect("section");
    service
        .add_article(&created.id, 0, "Izvođač izvodi radove.".to_string())
        .expect("article");
    let renamed = service
        .rename_section(&created.id, 0, "Predmet ugovora".to_string())
        .expect("rename");
    assert_eq!(renamed.outline.sections()[0].title, "Predmet ugovora");

    let stored = repository
        .fetch(&created.id)
        .expect("fetch")
        .expect("stored draft");
    assert_eq!(stored.outline.article_count(), 1);
    assert_eq!(stored, renamed);

    let trimmed = service
        .remove_article(&created.id, 0, 0)
        .expect("remove article");
    assert_eq!(trimmed.outline.article_count(), 0);
    let emptied = service.remove_section(&created.id, 0).expect("remove");
    assert_eq!(emptied.outline.section_count(), 0);
}

#[test]
fn outline_ids_are_unique() {
    let (service, _) = build_service();
    let first = service.create_outline().expect("first");
    let second = service.create_outline().expect("second");
    assert_ne!(first.id, second.id);
    assert!(first.id.0.starts_with("outline-"));
}

#[test]
fn out_of_range_edit_leaves_outline_untouched() {
    let (service, repository) = build_service();
    let created = service.create_outline().expect("create");
    service
        .add_section(&created.id, "Predmet".to_string())
        .expect("section");

    match service.remove_article(&created.id, 0, 3) {
        Err(DraftingServiceError::Outline(OutlineError::ArticleOutOfRange {
            section: 0,
            index: 3,
            len: 0,
        })) => {}
        other => panic!("expected article out of range, got {other:?}"),
    }
    match service.rename_section(&created.id, 5, "X".to_string()) {
        Err(DraftingServiceError::Outline(OutlineError::SectionOutOfRange { .. })) => {}
        other => panic!("expected section out of range, got {other:?}"),
    }

    let stored = repository
        .fetch(&created.id)
        .expect("fetch")
        .expect("stored draft");
    assert_eq!(stored.outline.sections()[0].title, "Predmet");
}

#[test]
fn discarded_outline_leaves_the_repository() {
    let (service, repository) = build_service();
    let kept = service.create_outline().expect("kept");
    let dropped = service.create_outline().expect("dropped");

    service.discard_outline(&dropped.id).expect("discard");

    assert!(repository.fetch(&dropped.id).expect("fetch").is_none());
    assert!(repository.fetch(&kept.id).expect("fetch").is_some());
    match service.add_section(&dropped.id, "Predmet".to_string()) {
        Err(DraftingServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
    match service.discard_outline(&dropped.id) {
        Err(DraftingServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn concurrent_section_edits_all_land() {
    let (service, repository) = build_service();
    let created = service.create_outline().expect("create");

    std::thread::scope(|scope| {
        for worker in 0..4 {
            let service = &service;
            let id = &created.id;
            scope.spawn(move || {
                for step in 0..20 {
                    service
                        .add_section(id, format!("Dio {worker}.{step}"))
                        .expect("section added");
                }
            });
        }
    });

    let stored = repository
        .fetch(&created.id)
        .expect("fetch")
        .expect("stored draft");
    assert_eq!(stored.outline.section_count(), 80);
}

#[test]
fn unknown_outline_is_not_found() {
    let (service, _) = build_service();
    match service.add_section(&OutlineId("outline-missing".to_string()), "X".to_string()) {
        Err(DraftingServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn unavailable_storage_is_reported() {
    let service = DraftingService::new(Arc::new(UnavailableRepository), DraftingConfig::default());
    match service.create_outline() {
        Err(DraftingServiceError::Repository(RepositoryError::Unavailable(reason))) => {
            assert_eq!(reason, "storage offline");
        }
        other => panic!("expected unavailable repository, got {other:?}"),
    }
}

#[test]
fn stored_outline_replaces_request_outline() {
    let (service, _) = build_service();
    let created = service.create_outline().expect("create");
    service
        .add_section(&created.id, "Cijena".to_string())
        .expect("section");
    service
        .add_article(&created.id, 0, "Cijena iznosi 500 EUR.".to_string())
        .expect("article");

    let request = FreeFormContractRequest {
        title: "Ugovor o usluzi".to_string(),
        parties: vec![ContractParty {
            role: "naručitelj".to_string(),
            party: company(),
        }],
        ..FreeFormContractRequest::default()
    };
    let rendered = service
        .render_outline(&created.id, request)
        .expect("render outline");
    let html = rendered.markup.as_str();
    assert_eq!(rendered.kind, DocumentKind::FreeFormContract);
    assert!(html.contains("I. CIJENA"));
    assert!(html.contains("Cijena iznosi 500 EUR."));
    assert!(html.contains("Sklopljen u Zagreb"));
}
