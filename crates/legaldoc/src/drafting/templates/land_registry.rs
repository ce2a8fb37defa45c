//! Land-register filings: title statement, registration petition and cancellation action.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::blocks::{
    body, centered_bold, cost_ledger, court_heading, heading, narrative, numbered_lines,
    ordered_list, party_block, petitum, place_and_date, signature, title, Point,
};
use super::Markup;
use crate::drafting::domain::{Party, PropertyParcel};
use crate::drafting::format::{format_money, format_optional_date, or_blank};
use crate::drafting::ledger::CostComponents;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleStatementRequest {
    pub seller: Party,
    pub buyer: Party,
    pub parcel: PropertyParcel,
    /// Date of the underlying sale contract.
    pub contract_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationPetitionRequest {
    pub court: String,
    pub petitioner: Party,
    pub counterparty: Party,
    pub parcel: PropertyParcel,
    /// Attachment line describing the contract, e.g. "Ugovor o kupoprodaji od 01.02.2024.".
    pub contract_info: String,
    /// Attachment line describing the title statement.
    pub title_statement_info: String,
    pub costs: Option<CostComponents>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CancellationActionRequest {
    pub court: String,
    pub attorney: Option<String>,
    pub plaintiff: Party,
    pub defendant: Party,
    pub parcel: PropertyParcel,
    pub claim_value: Decimal,
    /// Land-register case number (Z-broj) of the contested entry.
    pub registration_number: String,
    pub registration_date: Option<NaiveDate>,
    /// Instrument the contested entry rests on.
    pub instrument: String,
    pub instrument_date: Option<NaiveDate>,
    pub invalidity_reason: String,
    /// Whether the defendant knew, or should have known, the instrument was invalid.
    pub defendant_in_bad_faith: bool,
    pub place: String,
    pub drafted_on: Option<NaiveDate>,
    pub costs: Option<CostComponents>,
}

pub fn render_title_statement(request: &TitleStatementRequest) -> Markup {
    let parcel = &request.parcel;

    let mut html = title("TABULARNA IZJAVA", Some("(Clausula Intabulandi)"));
    html.push_str(&party_block("PRODAVATELJ", &request.seller));
    html.push_str(&party_block("KUPAC", &request.buyer));

    let description = match parcel.description.trim() {
        "" => String::new(),
        text => format!("<br>Opis u naravi: {text}"),
    };
    html.push_str(&body(&format!(
        "Temeljem Ugovora od {} za nekretninu upisanu u zk.ul. {}, K.O. {}, \
         k.č.br. {}.{description}",
        format_optional_date(request.contract_date),
        parcel.folio(),
        parcel.municipality(),
        parcel.parcel(),
    )));
    html.push_str(&format!(
        "<div class='doc-body clausula'>Ja, PRODAVATELJ {}, ovime izričito ovlašćujem KUPCA {} \
         da bez mog daljnjeg pitanja ili odobrenja zatraži uknjižbu prava vlasništva na \
         navedenoj nekretnini u svoju korist.</div>",
        request.seller.display_name(),
        request.buyer.display_name(),
    ));

    html.push_str("<br><br>");
    html.push_str(&signature("PRODAVATELJ", Some("(Ovjera JB)")));

    Markup::from(html)
}

fn parcel_listing(parcel: &PropertyParcel) -> String {
    format!(
        "<b>Katastarska općina (k.o.):</b> {}<br><b>Broj zk. uloška:</b> {}<br>\
         <b>Broj čestice (k.č.br.):</b> {}{}",
        parcel.municipality(),
        parcel.folio(),
        parcel.parcel(),
        parcel.nature_suffix()
    )
}

pub fn render_registration_petition(request: &RegistrationPetitionRequest) -> Markup {
    let mut html = format!(
        "<div style=\"font-weight: bold; font-size: 14px;\">{}</div>\
         <div style=\"font-size: 12px;\">Zemljišnoknjižni odjel</div><br><br>",
        or_blank(&request.court).to_uppercase()
    );
    html.push_str(&party_block("PREDLAGATELJ", &request.petitioner));
    html.push_str(&party_block("PROTUSTRANKA", &request.counterparty));
    html.push_str("<div class='party-info'><b>RADI:</b> Uknjižbe prava vlasništva</div><br>");
    html.push_str(&title(
        "ZEMLJIŠNOKNJIŽNI PRIJEDLOG",
        Some("za uknjižbu prava vlasništva"),
    ));

    html.push_str(&body(&format!(
        "Predlagatelj predlaže da naslovni sud, na temelju priloženih isprava, u zemljišnim \
         knjigama za nekretninu upisanu kao:<br><br>{}<br><br>provede upis, odnosno dozvoli:",
        parcel_listing(&request.parcel)
    )));
    html.push_str(
        "<div class='section-title' style='text-align: center; border: 1px solid black; \
         padding: 10px; margin: 20px 0;'>UKNJIŽBU PRAVA VLASNIŠTVA<br>\
         u korist Predlagatelja (u cijelosti / 1/1 dijela).</div>",
    );
    html.push_str(&body(
        "Predlagatelj prilaže izvornike/ovjerene preslike isprava koje su temelj za upis.",
    ));

    html.push_str(&heading("POPIS PRILOGA:"));
    html.push_str(&body(&ordered_list([
        request.contract_info.as_str(),
        request.title_statement_info.as_str(),
        "Dokaz o uplati sudske pristojbe",
        "Dokaz o državljanstvu / OIB (preslika osobne iskaznice)",
    ])));

    html.push_str(&cost_ledger(request.costs.as_ref()));
    html.push_str("<br><br>");
    html.push_str(&signature(
        "PREDLAGATELJ",
        Some("(potpis nije nužno ovjeravati)"),
    ));

    Markup::from(html)
}

const BAD_FAITH: &str = "Tuženik je prilikom stjecanja bio nesavjestan (u zloj vjeri) jer je \
     znao, odnosno morao znati, da je temeljni pravni posao nevaljan, te se stoga ne može \
     pozivati na načelo povjerenja u zemljišne knjige.";

const GOOD_FAITH_DEADLINE: &str = "Tužba se podnosi u zakonskom roku propisanom člankom 129. \
     ZZK za stjecatelje u dobroj vjeri.";

pub fn render_cancellation_action(request: &CancellationActionRequest) -> Markup {
    let parcel = &request.parcel;
    let court = or_blank(&request.court);
    let entry_number = or_blank(&request.registration_number);
    let instrument = or_blank(&request.instrument);
    let instrument_date = format_optional_date(request.instrument_date);
    let parcel_reference = format!(
        "zk.ul. {}, k.o. {}, k.č.br. {}",
        parcel.folio(),
        parcel.municipality(),
        parcel.parcel()
    );

    let mut html = court_heading(court, request.attorney.as_deref());
    html.push_str(&format!(
        "<div class='party-info'><b>PRAVNA STVAR:</b><br><b>TUŽITELJ:</b> {}<br>\
         <b>TUŽENIK:</b> {}</div>",
        request.plaintiff.to_markup(),
        request.defendant.to_markup()
    ));
    html.push_str(&format!(
        "<div class='party-info'><b>Radi:</b> Brisanja uknjižbe i uspostave prijašnjeg ZK \
         stanja<br><b>Vrijednost predmeta spora (VPS): {}</b></div><br>",
        format_money(request.claim_value)
    ));
    html.push_str(&title("BRISOVNA TUŽBA", None));

    let faith = if request.defendant_in_bad_faith {
        BAD_FAITH
    } else {
        GOOD_FAITH_DEADLINE
    };
    html.push_str(&heading("I. ČINJENIČNI NAVODI"));
    html.push_str(&body(&format!(
        "Tužitelj je bio isključivi vlasnik nekretnine upisane u <b>{parcel_reference}</b>{}.\
         <br><br>Dana {}, u zemljišnim knjigama naslovnog suda, pod brojem <b>{entry_number}</b>, \
         provedena je nevaljana uknjižba prava vlasništva u korist Tuženika.<br><br>\
         Navedena uknjižba temelji se na ispravi: {instrument} od dana {instrument_date}.<br><br>\
         Tužitelj tvrdi da je navedena isprava (temeljni pravni posao) ništetna/nevaljana iz \
         sljedećih razloga:<br><i>{}</i><br><br>\
         S obzirom na to da je temeljni pravni posao ništetan, ništetna je i sama uknjižba koja \
         je na temelju njega provedena (načelo kauzalnosti).<br><br>{faith}",
        parcel.nature_suffix(),
        format_optional_date(request.registration_date),
        narrative(&request.invalidity_reason),
    )));

    html.push_str(&heading("DOKAZI:"));
    html.push_str(&body(&numbered_lines([
        "ZK izvadak (povijesni i trenutni).".to_string(),
        format!("Uvid u ZK spis broj {entry_number}."),
        format!("{instrument} (predmet pobijanja)."),
        "Saslušanje stranaka.".to_string(),
        "Po potrebi grafološko ili drugo vještačenje.".to_string(),
    ])));

    html.push_str(&heading("II. TUŽBENI ZAHTJEV"));
    html.push_str(&body(
        "Slijedom navedenog, Tužitelj predlaže da Sud donese sljedeću",
    ));
    html.push_str(&centered_bold("PRESUDU"));
    html.push_str(&body(&petitum([
        Point {
            lead: "Utvrđuje se da je ništetan i bez pravnog učinka".to_string(),
            body: format!(
                "{instrument} od dana {instrument_date}, sklopljen između stranaka (ili prednika)."
            ),
        },
        Point {
            lead: "Utvrđuje se da je nevaljana uknjižba".to_string(),
            body: format!(
                "prava vlasništva u korist tuženika, provedena u zemljišnim knjigama {court}, u \
                 {parcel_reference}, pod poslovnim brojem {entry_number}."
            ),
        },
        Point {
            lead: "Nalaže se brisanje uknjižbe".to_string(),
            body: "prava vlasništva upisanog u korist Tuženika na nekretnini iz točke II. \
                   izreke, te <b>uspostava prijašnjeg zemljišnoknjižnog stanja</b> kakvo je \
                   bilo prije provedbe nevaljanog upisa, na način da se ponovno upiše pravo \
                   vlasništva u korist Tužitelja."
                .to_string(),
        },
        Point {
            lead: String::new(),
            body: "Nalaže se Tuženiku naknaditi Tužitelju parnični trošak u roku od 15 dana."
                .to_string(),
        },
    ])));

    html.push_str(&cost_ledger(request.costs.as_ref()));
    html.push_str("<br><br>");
    html.push_str(&place_and_date(&request.place, request.drafted_on));
    html.push_str(&signature("TUŽITELJ", None));
    html.push_str(&format!(
        "<br><br><div style=\"font-size: 10pt;\"><b>PRILOZI:</b><br>{}</div>",
        numbered_lines([
            "Dokaz o uplati sudske pristojbe.",
            "ZK izvadak.",
            "Preslika osporene isprave.",
            "Punomoć za zastupanje.",
        ])
    ));

    Markup::from(html)
}
