//! Civil-law contracts: the four standard kinds and the free-form outline contract.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::blocks::{
    articles, concluded_between, cost_ledger, heading, narrative, non_empty, signatures, title,
    Article,
};
use super::Markup;
use crate::drafting::domain::Party;
use crate::drafting::format::{format_money, format_optional_date, or_blank, roman};
use crate::drafting::ledger::CostComponents;
use crate::drafting::outline::ContractOutline;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractKind {
    #[default]
    Sale,
    Lease,
    Work,
    Loan,
}

/// Fixed wording attached to each standard contract kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractProfile {
    pub title: &'static str,
    pub first_role: &'static str,
    pub second_role: &'static str,
    pub amount_label: &'static str,
    /// Term clause used when the request leaves the term blank.
    pub default_term: &'static str,
    /// Subject clause used when the request leaves the subject blank.
    pub default_subject: &'static str,
    /// Party named as having paid the deposit.
    pub deposit_payer: &'static str,
}

impl ContractKind {
    pub const fn profile(self) -> ContractProfile {
        match self {
            Self::Sale => ContractProfile {
                title: "UGOVOR O KUPOPRODAJI",
                first_role: "PRODAVATELJ",
                second_role: "KUPAC",
                amount_label: "Cijena",
                default_term: "Odmah po isplati cijene.",
                default_subject: "",
                deposit_payer: "Kupac",
            },
            Self::Lease => ContractProfile {
                title: "UGOVOR O NAJMU",
                first_role: "NAJMODAVAC",
                second_role: "NAJMOPRIMAC",
                amount_label: "Mjesečna najamnina/zakupnina",
                default_term: "Trajanje ugovora: 1 godina.",
                default_subject: "",
                deposit_payer: "Najmoprimac",
            },
            Self::Work => ContractProfile {
                title: "UGOVOR O DJELU",
                first_role: "NARUČITELJ",
                second_role: "IZVOĐAČ",
                amount_label: "Honorar (neto/bruto)",
                default_term: "Rok izvršenja posla: 30 dana.",
                default_subject: "",
                deposit_payer: "Naručitelj",
            },
            Self::Loan => ContractProfile {
                title: "UGOVOR O ZAJMU",
                first_role: "ZAJMODAVAC",
                second_role: "ZAJMOPRIMAC",
                amount_label: "Glavnica zajma",
                default_term: "Rok povrata:",
                default_subject: "Predmet ugovora je novčani zajam.",
                deposit_payer: "Zajmoprimac",
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandardContractRequest {
    pub kind: ContractKind,
    pub first_party: Party,
    pub second_party: Party,
    pub place: String,
    pub drafted_on: Option<NaiveDate>,
    pub subject: String,
    /// Price, rent, fee or loan principal depending on the kind.
    pub amount: Decimal,
    /// Free-text term clause; blank falls back to the kind's default.
    pub term: String,
    /// Repayment date quoted by loan contracts.
    pub repayment_date: Option<NaiveDate>,
    pub deposit: Option<Decimal>,
    pub notarized: bool,
    pub costs: Option<CostComponents>,
}

impl StandardContractRequest {
    fn subject_clause(&self, profile: &ContractProfile) -> String {
        match non_empty(&self.subject) {
            Some(_) => narrative(&self.subject),
            None => or_blank(profile.default_subject).to_string(),
        }
    }

    fn price_clause(&self, profile: &ContractProfile) -> String {
        let mut clause = format!("{}: {}.", profile.amount_label, format_money(self.amount));
        if let Some(deposit) = self.deposit {
            clause.push_str(&format!(
                "<br><b>Kapara:</b> Ugovorne strane potvrđuju da je {} isplatio kaparu u \
                 iznosu od {}.",
                profile.deposit_payer,
                format_money(deposit)
            ));
        }
        clause
    }

    fn term_clause(&self, profile: &ContractProfile) -> String {
        if non_empty(&self.term).is_some() {
            return narrative(&self.term);
        }
        match self.kind {
            ContractKind::Loan => format!(
                "{} {}",
                profile.default_term,
                format_optional_date(self.repayment_date)
            ),
            ContractKind::Sale | ContractKind::Lease | ContractKind::Work => {
                profile.default_term.to_string()
            }
        }
    }
}

pub fn render_standard_contract(request: &StandardContractRequest) -> Markup {
    let profile = request.kind.profile();

    let mut html = title(profile.title, None);
    html.push_str(&concluded_between(&request.place, request.drafted_on));
    html.push_str(&format!(
        "<div class='party-info'>1. <b>{}:</b><br>{}<br><br>2. <b>{}:</b><br>{}</div>",
        profile.first_role,
        request.first_party.to_markup(),
        profile.second_role,
        request.second_party.to_markup()
    ));

    let mut clauses = vec![
        Article::new(request.subject_clause(&profile)),
        Article::new(request.price_clause(&profile)),
        Article::new(request.term_clause(&profile)),
    ];
    if request.notarized {
        clauses.push(Article::with_topic(
            "(Solemnizacija)",
            "Ugovorne strane suglasne su da se ovaj Ugovor solemnizira (potvrdi) kod Javnog \
             bilježnika."
                .to_string(),
        ));
    }
    let (article_html, _) = articles(1, clauses);
    html.push_str(&article_html);

    html.push_str("<br><br>");
    html.push_str(&cost_ledger(request.costs.as_ref()));
    html.push_str("<br>");
    html.push_str(&signatures(&[profile.first_role, profile.second_role]));

    Markup::from(html)
}

/// A party together with the role it plays in a free-form contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractParty {
    pub role: String,
    pub party: Party,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreeFormContractRequest {
    pub title: String,
    pub parties: Vec<ContractParty>,
    pub place: String,
    pub drafted_on: Option<NaiveDate>,
    pub outline: ContractOutline,
}

pub fn render_free_form_contract(request: &FreeFormContractRequest) -> Markup {
    let heading_text = non_empty(&request.title).unwrap_or("UGOVOR").to_uppercase();
    let mut html = title(&heading_text, None);
    html.push_str(&concluded_between(&request.place, request.drafted_on));

    let parties: Vec<String> = request
        .parties
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            format!(
                "{}. <b>{}:</b><br>{}",
                idx + 1,
                or_blank(&entry.role).to_uppercase(),
                entry.party.to_markup()
            )
        })
        .collect();
    if !parties.is_empty() {
        html.push_str(&format!(
            "<div class='party-info'>{}</div>",
            parties.join("<br><br>")
        ));
    }

    let mut next_article = 1;
    let mut part = 0;
    for section in request.outline.sections() {
        let (article_html, emitted) = articles(
            next_article,
            section
                .articles
                .iter()
                .map(|text| Article::new(narrative(text))),
        );
        let section_title = non_empty(&section.title);
        if emitted == 0 && section_title.is_none() {
            continue;
        }
        part += 1;
        next_article += emitted;

        let label = match section_title {
            Some(text) => format!("{}. {}", roman(part), text.to_uppercase()),
            None => format!("{}.", roman(part)),
        };
        html.push_str(&heading(&label));
        html.push_str(&article_html);
    }

    let roles: Vec<String> = request
        .parties
        .iter()
        .map(|entry| or_blank(&entry.role).to_uppercase())
        .collect();
    html.push_str("<br><br>");
    html.push_str(&signatures(&roles));

    Markup::from(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_distinct_title_and_roles() {
        let profiles = [
            ContractKind::Sale,
            ContractKind::Lease,
            ContractKind::Work,
            ContractKind::Loan,
        ]
        .map(ContractKind::profile);
        assert_eq!(
            profiles.map(|profile| (profile.title, profile.first_role, profile.second_role)),
            [
                ("UGOVOR O KUPOPRODAJI", "PRODAVATELJ", "KUPAC"),
                ("UGOVOR O NAJMU", "NAJMODAVAC", "NAJMOPRIMAC"),
                ("UGOVOR O DJELU", "NARUČITELJ", "IZVOĐAČ"),
                ("UGOVOR O ZAJMU", "ZAJMODAVAC", "ZAJMOPRIMAC"),
            ]
        );
    }

    #[test]
    fn loan_term_quotes_repayment_date() {
        let request = StandardContractRequest {
            kind: ContractKind::Loan,
            repayment_date: NaiveDate::from_ymd_opt(2025, 3, 1),
            ..StandardContractRequest::default()
        };
        assert_eq!(
            request.term_clause(&ContractKind::Loan.profile()),
            "Rok povrata: 01.03.2025."
        );
        assert_eq!(
            request.subject_clause(&ContractKind::Loan.profile()),
            "Predmet ugovora je novčani zajam."
        );
    }
}
