//! Court filings: civil lawsuit, enforcement petition and appeal.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::blocks::{
    bullet_list, centered_bold, cost_ledger, court_heading, heading, narrative, party_line,
    place_and_date, signature,
};
use super::Markup;
use crate::drafting::domain::Party;
use crate::drafting::format::{format_money, format_optional_date, or_blank, TEXT_PLACEHOLDER};
use crate::drafting::ledger::CostComponents;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LawsuitRequest {
    pub court: String,
    /// Attorney acting under power of attorney, if any.
    pub attorney: Option<String>,
    pub plaintiff: Party,
    pub defendant: Party,
    /// Short "radi" line, e.g. "Isplate (Dugovanja)".
    pub subject: String,
    /// Value of the dispute (VPS); also the principal claimed.
    pub claim_value: Decimal,
    /// Interest accrues from this date.
    pub due_date: Option<NaiveDate>,
    pub facts: String,
    pub evidence: String,
    pub costs: Option<CostComponents>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnforcementRequest {
    /// Notary public the petition is addressed to (name, city).
    pub notary: String,
    pub creditor: Party,
    pub debtor: Party,
    pub principal: Decimal,
    /// Credible document the claim rests on, e.g. an invoice number.
    pub credible_document: String,
    pub document_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub costs: Option<CostComponents>,
}

/// Part of the judgment under appeal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppealScope {
    #[default]
    Entirety,
    CostDecision,
    AwardingPart,
}

impl AppealScope {
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::Entirety => "u cijelosti",
            Self::CostDecision => "u dijelu odluke o trošku",
            Self::AwardingPart => "u dosuđujućem dijelu",
        }
    }
}

/// Statutory appeal grounds selected by the appellant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppealGrounds {
    pub procedural_violation: bool,
    pub erroneous_facts: bool,
    pub misapplied_law: bool,
}

pub const UNSTATED_GROUNDS: &str = "(Navesti razloge)";

impl AppealGrounds {
    pub fn any(&self) -> bool {
        self.procedural_violation || self.erroneous_facts || self.misapplied_law
    }

    /// Fixed sentence per selected ground, or the placeholder when none is selected.
    pub fn sentences(&self) -> Vec<&'static str> {
        let selected = [
            (
                self.procedural_violation,
                "Zbog bitne povrede odredaba parničnog postupka",
            ),
            (
                self.erroneous_facts,
                "Zbog pogrešno ili nepotpuno utvrđenog činjeničnog stanja",
            ),
            (
                self.misapplied_law,
                "Zbog pogrešne primjene materijalnog prava",
            ),
        ];
        let sentences: Vec<&'static str> = selected
            .into_iter()
            .filter_map(|(chosen, sentence)| chosen.then_some(sentence))
            .collect();
        if sentences.is_empty() {
            vec![UNSTATED_GROUNDS]
        } else {
            sentences
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppealRequest {
    pub first_instance_court: String,
    pub second_instance_court: String,
    pub plaintiff: String,
    pub defendant: String,
    pub judgment_number: String,
    pub judgment_date: Option<NaiveDate>,
    pub scope: AppealScope,
    pub grounds: AppealGrounds,
    pub reasoning: String,
    pub place: String,
    pub drafted_on: Option<NaiveDate>,
    pub costs: Option<CostComponents>,
}

fn justified(text: &str) -> String {
    format!("<div class='justified'>{text}</div>")
}

pub fn render_lawsuit(request: &LawsuitRequest) -> Markup {
    let claim = format_money(request.claim_value);
    let mut html = court_heading(&request.court, request.attorney.as_deref());

    html.push_str(&justified(&format!(
        "{}<br>{}<br><br><b>Radi:</b> {}<br><b>Vrijednost predmeta spora (VPS): {claim}</b>",
        party_line("TUŽITELJ", &request.plaintiff),
        party_line("TUŽENIK", &request.defendant),
        or_blank(&request.subject),
    )));
    html.push_str("<br><div class='header-doc'>TUŽBA</div>");

    html.push_str(&heading("I. ČINJENIČNI NAVODI"));
    html.push_str(&justified(&narrative(&request.facts)));

    html.push_str(&heading("II. DOKAZI"));
    html.push_str(&justified(&format!(
        "Predlaže se izvođenje sljedećih dokaza:<br>{}",
        narrative(&request.evidence)
    )));

    html.push_str(&heading("III. TUŽBENI ZAHTJEV"));
    html.push_str(&justified(&format!(
        "Slijedom navedenog, budući da Tuženik nije podmirio svoju dospjelu obvezu, Tužitelj \
         predlaže da naslovni Sud donese sljedeću<br><br>{}<br>\
         <b>I. Nalaže se Tuženiku</b> da Tužitelju isplati iznos od <b>{claim}</b> zajedno sa \
         zakonskom zateznom kamatom koja teče od dana dospijeća {} pa do isplate, po stopi \
         određenoj zakonom.<br><br>\
         <b>II. Nalaže se Tuženiku</b> da Tužitelju naknadi troškove ovog parničnog postupka, \
         u roku od 15 dana, zajedno sa zateznom kamatom od dana donošenja presude do isplate.",
        centered_bold("PRESUDU"),
        format_optional_date(request.due_date),
    )));

    html.push_str(&cost_ledger(request.costs.as_ref()));
    html.push_str(
        "<br><br><div class='signature-row'>\
         <div style='display:inline-block; width: 50%;'><b>PRILOZI:</b><br>\
         1. Punomoć<br>2. Dokaz o uplati pristojbe<br>3. Dokazi navedeni u točki II.</div>\
         <div class='signature-block'><b>TUŽITELJ</b><br>(po punomoćniku)<br><br>\
         ______________________</div></div>",
    );

    Markup::from(html)
}

pub fn render_enforcement(request: &EnforcementRequest) -> Markup {
    let principal = format_money(request.principal);
    let cost_total = match request.costs.as_ref() {
        None => format_money(Decimal::ZERO),
        Some(costs) => costs
            .checked_total()
            .map(format_money)
            .unwrap_or_else(|| TEXT_PLACEHOLDER.to_string()),
    };

    let mut html = format!(
        "<div style=\"font-weight: bold;\">JAVNOM BILJEŽNIKU {}</div><br>",
        or_blank(&request.notary).to_uppercase()
    );
    html.push_str(&justified(&format!(
        "{}<br>{}<br><br><b>Radi:</b> Ovrhe na temelju vjerodostojne isprave<br>\
         <b>Vrijednost tražbine: {principal}</b>",
        party_line("OVRHOVODITELJ", &request.creditor),
        party_line("OVRŠENIK", &request.debtor),
    )));
    html.push_str(
        "<br><div class='header-doc'>PRIJEDLOG ZA OVRHU<br>\
         <span style='font-size:11pt; font-weight:normal'>\
         na temelju vjerodostojne isprave</span></div>",
    );
    html.push_str(&justified(&format!(
        "Na temelju vjerodostojne isprave <b>{}</b> od dana {}, iz koje proizlazi dospjela \
         tražbina Ovrhovoditelja prema Ovršeniku, Ovrhovoditelj predlaže da Javni bilježnik \
         donese sljedeće:",
        or_blank(&request.credible_document),
        format_optional_date(request.document_date),
    )));

    html.push_str(&format!(
        "<div style='border: 2px solid black; padding: 15px; margin: 20px 0;'>\
         <div class='header-doc' style='margin:0;'>RJEŠENJE O OVRSI</div>\
         <div style='text-align:center; font-size:10pt;'>\
         (na temelju vjerodostojne isprave)</div><br>{}</div>",
        justified(&format!(
            "<b>I. NALAŽE SE Ovršeniku</b> da Ovrhovoditelju u roku od osam dana od dana dostave \
             ovog rješenja namiri tražbinu u iznosu od <b>{principal}</b>, zajedno sa zakonskim \
             zateznim kamatama koje teku od dana dospijeća <b>{}</b> pa do isplate, kao i da mu \
             naknadi troškove ovog postupka u iznosu od <b>{}</b>.<br><br>\
             <b>II. ODREĐUJE SE OVRHA</b> radi naplate tražbine iz točke I. ovog rješenja i \
             troškova postupka. Ovrha će se provesti na novčanim sredstvima Ovršenika po svim \
             računima kod banaka, te na cjelokupnoj imovini Ovršenika.",
            format_optional_date(request.due_date),
            cost_total,
        ))
    ));

    html.push_str(&cost_ledger(request.costs.as_ref()));
    html.push_str("<br><br>");
    html.push_str(&signature("OVRHOVODITELJ", None));

    Markup::from(html)
}

pub fn render_appeal(request: &AppealRequest) -> Markup {
    let first_court = or_blank(&request.first_instance_court);
    let judgment_number = or_blank(&request.judgment_number);

    let mut html = format!(
        "<div style=\"font-weight: bold; font-size: 14px;\">{}</div>\
         <div>(kao drugostupanjskom sudu)</div><br><div>putem</div><br>\
         <div style=\"font-weight: bold;\">{}</div><div>(kao prvostupanjskog suda)</div><br><br>",
        or_blank(&request.second_instance_court).to_uppercase(),
        first_court.to_uppercase(),
    );
    html.push_str(&justified(&format!(
        "<b>PRAVNA STVAR:</b><br><b>TUŽITELJ:</b> {}<br><b>TUŽENIK:</b> {}<br>\
         <b>Poslovni broj: {judgment_number}</b>",
        or_blank(&request.plaintiff),
        or_blank(&request.defendant),
    )));
    html.push_str(&format!(
        "<br><div class='header-doc'>ŽALBA</div>\
         <div style=\"text-align: center;\">protiv presude {first_court} poslovni broj \
         {judgment_number} od dana {}</div><br>",
        format_optional_date(request.judgment_date),
    ));
    html.push_str(&justified(&format!(
        "Žalitelj ovime pravovremeno, u otvorenom zakonskom roku, podnosi žalbu protiv navedene \
         presude {} zbog sljedećih zakonskih razloga (čl. 353. ZPP):",
        request.scope.phrase()
    )));
    html.push_str(&bullet_list(request.grounds.sentences()));

    html.push_str(&heading("I. OBRAZLOŽENJE"));
    html.push_str(&justified(&narrative(&request.reasoning)));
    html.push_str(&heading("II. PRIJEDLOG"));
    html.push_str(&justified(
        "Slijedom navedenog, predlaže se da naslovni drugostupanjski sud ovu žalbu uvaži, \
         pobijanu presudu ukine i predmet vrati prvostupanjskom sudu na ponovno suđenje.",
    ));

    html.push_str(&cost_ledger(request.costs.as_ref()));
    html.push_str("<br><br>");
    html.push_str(&place_and_date(&request.place, request.drafted_on));
    html.push_str(&signature("ŽALITELJ", Some("(po punomoćniku)")));

    Markup::from(html)
}
