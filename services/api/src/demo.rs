use crate::documents::drafting_service;
use crate::infra::InMemoryOutlineRepository;
use chrono::{Local, NaiveDate};
use clap::Args;
use legaldoc::config::DraftingConfig;
use legaldoc::drafting::templates::{
    AppealGrounds, AppealRequest, AppealScope, CancellationActionRequest, ContractKind,
    ContractParty, EmploymentContractRequest, EmploymentTerm, EnforcementRequest,
    FreeFormContractRequest, LawsuitRequest, RegistrationPetitionRequest,
    StandardContractRequest, TerminationKind, TerminationRequest, TitleStatementRequest,
};
use legaldoc::drafting::{
    DocumentKind, DocumentRequest, DraftingService, FeeSchedule, InterestRequest, Party,
    PropertyParcel,
};
use legaldoc::error::AppError;
use rust_decimal::Decimal;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Write every sample export into this directory.
    #[arg(long)]
    pub(crate) out_dir: Option<PathBuf>,
    /// Override the drafting date printed on samples (defaults to today).
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let service = drafting_service(DraftingConfig::default());

    if let Some(dir) = &args.out_dir {
        fs::create_dir_all(dir)?;
    }

    println!("Legal document drafting demo ({})", today.format("%d.%m.%Y."));
    println!("\nDocuments");
    for request in sample_requests(&service, today)? {
        let rendered = service.render(request)?;
        let document = service.package(&rendered);
        println!(
            "  {:<28} {:>7} bytes  {}",
            rendered.kind.label(),
            document.len(),
            document.file_name
        );
        if let Some(dir) = &args.out_dir {
            fs::write(dir.join(&document.file_name), document.content)?;
        }
    }

    println!("\nCost ledgers");
    let schedule = FeeSchedule {
        drafting: Decimal::from(250),
        material: Decimal::from(40),
        court_fee: Decimal::from(100),
        charge_vat: true,
    };
    for kind in DocumentKind::ordered() {
        if kind.fee_policy().is_none() {
            continue;
        }
        let quote = service.ledger(kind, &schedule)?;
        println!(
            "  {:<28} {} ({} rows)",
            kind.label(),
            quote.ledger.total_display,
            quote.ledger.lines.len()
        );
    }

    println!("\nInterest");
    let assessment = service.interest(&InterestRequest {
        principal: Decimal::from(10_000),
        annual_rate_percent: Decimal::from(12),
        accrual_start: today - chrono::Duration::days(31),
        as_of: today,
    })?;
    println!("  {}", assessment.summary());
    println!("  Ukupno za naplatu: {}", assessment.total_due_display);

    Ok(())
}

fn parties() -> (Party, Party, Party) {
    (
        Party::natural("Ivan Horvat", "12345678903", "Ilica 1, Zagreb"),
        Party::natural("Marko Marić", "69696969694", "Riva 5, Split"),
        Party::legal(
            "Gradnja d.o.o.",
            "98765432106",
            "080123456",
            "Ana Kovač, direktorica",
            "Zagreb, Vukovarska 10",
        ),
    )
}

fn sample_parcel() -> PropertyParcel {
    PropertyParcel {
        cadastral_municipality: "Trešnjevka".to_string(),
        folio: "1234".to_string(),
        parcel_number: "567/8".to_string(),
        description: "kuća i dvorište".to_string(),
    }
}

/// One request per document kind; the free-form contract is built from a stored outline.
fn sample_requests(
    service: &DraftingService<InMemoryOutlineRepository>,
    today: NaiveDate,
) -> Result<Vec<DocumentRequest>, AppError> {
    let (citizen, neighbour, company) = parties();
    let earlier = |days: i64| today - chrono::Duration::days(days);
    let costs = service
        .ledger(
            DocumentKind::CivilLawsuit,
            &FeeSchedule {
                drafting: Decimal::from(250),
                court_fee: Decimal::from(100),
                charge_vat: true,
                ..FeeSchedule::default()
            },
        )?
        .components;

    let outline = service.create_outline()?;
    service.add_section(&outline.id, "Predmet ugovora".to_string())?;
    service.add_article(
        &outline.id,
        0,
        "Izvođač se obvezuje izraditi web stranicu Naručitelja.".to_string(),
    )?;
    service.add_section(&outline.id, "Naknada".to_string())?;
    service.add_article(
        &outline.id,
        1,
        "Naručitelj plaća naknadu od 2.000,00 EUR.".to_string(),
    )?;
    let draft = service.outline(&outline.id)?;
    service.discard_outline(&draft.id)?;
    let outline = draft.outline;

    Ok(vec![
        DocumentRequest::CivilLawsuit(LawsuitRequest {
            court: "Općinski građanski sud u Zagrebu".to_string(),
            attorney: Some("Odvjetnik Petar Perić".to_string()),
            plaintiff: citizen.clone(),
            defendant: neighbour.clone(),
            subject: "Isplate".to_string(),
            claim_value: Decimal::from(1500),
            due_date: Some(earlier(90)),
            facts: "Tuženik nije podmirio račun za izvedene radove.".to_string(),
            evidence: "Račun br. 1/2024\nOpomena pred tužbu".to_string(),
            costs: Some(costs),
        }),
        DocumentRequest::EnforcementPetition(EnforcementRequest {
            notary: "Ivana Babić".to_string(),
            creditor: company.clone(),
            debtor: neighbour.clone(),
            principal: Decimal::from(2500),
            credible_document: "Račun br. 77/2024".to_string(),
            document_date: Some(earlier(60)),
            due_date: Some(earlier(45)),
            costs: None,
        }),
        DocumentRequest::Appeal(AppealRequest {
            first_instance_court: "Općinskog građanskog suda u Zagrebu".to_string(),
            second_instance_court: "Županijski sud u Zagrebu".to_string(),
            plaintiff: "Ivan Horvat".to_string(),
            defendant: "Marko Marić".to_string(),
            judgment_number: "P-123/2024".to_string(),
            judgment_date: Some(earlier(10)),
            scope: AppealScope::Entirety,
            grounds: AppealGrounds {
                procedural_violation: false,
                erroneous_facts: true,
                misapplied_law: true,
            },
            reasoning: "Sud je pogrešno ocijenio iskaz svjedoka.".to_string(),
            place: String::new(),
            drafted_on: Some(today),
            costs: None,
        }),
        DocumentRequest::StandardContract(StandardContractRequest {
            kind: ContractKind::Lease,
            first_party: citizen.clone(),
            second_party: neighbour.clone(),
            place: "Split".to_string(),
            drafted_on: Some(today),
            amount: Decimal::from(600),
            deposit: Some(Decimal::from(600)),
            notarized: true,
            ..StandardContractRequest::default()
        }),
        DocumentRequest::EmploymentContract(EmploymentContractRequest {
            employer: company.clone(),
            employee: neighbour.clone(),
            position: "Voditelj gradilišta".to_string(),
            gross_salary: Decimal::from(2100),
            start_date: Some(today),
            term: EmploymentTerm::Indefinite,
            probation_months: Some(3),
            weekly_hours: None,
            place: String::new(),
            drafted_on: Some(today),
        }),
        DocumentRequest::TerminationDecision(TerminationRequest {
            kind: TerminationKind::BusinessGrounds,
            employer: company.clone(),
            employee: neighbour.clone(),
            contract_date: Some(earlier(1500)),
            reasoning: "Radno mjesto ukinuto je zbog reorganizacije.".to_string(),
            notice_period: "mjesec dana".to_string(),
            prior_warning: None,
            place: String::new(),
            drafted_on: Some(today),
        }),
        DocumentRequest::TitleStatement(TitleStatementRequest {
            seller: citizen.clone(),
            buyer: neighbour.clone(),
            parcel: sample_parcel(),
            contract_date: Some(earlier(5)),
        }),
        DocumentRequest::RegistrationPetition(RegistrationPetitionRequest {
            court: "Općinski sud u Zagrebu".to_string(),
            petitioner: neighbour.clone(),
            counterparty: citizen.clone(),
            parcel: sample_parcel(),
            contract_info: "Kupoprodajni ugovor (izvornik)".to_string(),
            title_statement_info: "Tabularna izjava (ovjerena)".to_string(),
            costs: None,
        }),
        DocumentRequest::CancellationAction(CancellationActionRequest {
            court: "Općinski sud u Zagrebu".to_string(),
            attorney: None,
            plaintiff: citizen.clone(),
            defendant: neighbour,
            parcel: sample_parcel(),
            claim_value: Decimal::from(80_000),
            registration_number: "Z-4567/2023".to_string(),
            registration_date: Some(earlier(400)),
            instrument: "Ugovor o darovanju".to_string(),
            instrument_date: Some(earlier(410)),
            invalidity_reason: "Potpis darovatelja je krivotvoren.".to_string(),
            defendant_in_bad_faith: true,
            place: String::new(),
            drafted_on: Some(today),
            costs: None,
        }),
        DocumentRequest::FreeFormContract(FreeFormContractRequest {
            title: "Ugovor o izradi web stranice".to_string(),
            parties: vec![
                ContractParty {
                    role: "Naručitelj".to_string(),
                    party: company,
                },
                ContractParty {
                    role: "Izvođač".to_string(),
                    party: citizen,
                },
            ],
            place: String::new(),
            drafted_on: Some(today),
            outline,
        }),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_cover_every_kind_and_validate() {
        let service = drafting_service(DraftingConfig::default());
        let today = NaiveDate::from_ymd_opt(2024, 10, 1).expect("valid date");
        let samples = sample_requests(&service, today).expect("samples build");

        let kinds: Vec<DocumentKind> = samples.iter().map(DocumentRequest::kind).collect();
        assert_eq!(kinds, DocumentKind::ordered().to_vec());
        for request in samples {
            let kind = request.kind();
            service
                .render(request)
                .unwrap_or_else(|err| panic!("{kind:?} sample rejected: {err}"));
        }
    }

    #[test]
    fn demo_writes_one_export_per_kind() {
        let dir = std::env::temp_dir().join(format!("legaldoc-demo-{}", std::process::id()));
        run_demo(DemoArgs {
            out_dir: Some(dir.clone()),
            today: NaiveDate::from_ymd_opt(2024, 10, 1),
        })
        .expect("demo runs");

        let written = fs::read_dir(&dir).expect("out dir").count();
        assert_eq!(written, DocumentKind::ordered().len());
        fs::remove_dir_all(dir).ok();
    }
}
