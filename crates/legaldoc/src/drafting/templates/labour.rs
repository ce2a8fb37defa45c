//! Employment documents: contract of employment and termination decision.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::blocks::{
    articles, body, centered_bold, concluded_between, heading, narrative, non_empty,
    numbered_lines, party_block, place_and_date, signature, signatures, title, Article,
};
use super::Markup;
use crate::drafting::domain::Party;
use crate::drafting::format::{
    format_date, format_money, format_optional_date, months_phrase, or_blank, TEXT_PLACEHOLDER,
};

const FULL_TIME_HOURS: u8 = 40;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EmploymentTerm {
    #[default]
    Indefinite,
    FixedTerm {
        #[serde(default)]
        until: Option<NaiveDate>,
        #[serde(default)]
        reason: String,
    },
}

impl EmploymentTerm {
    const fn heading(&self) -> &'static str {
        match self {
            Self::Indefinite => "NA NEODREĐENO",
            Self::FixedTerm { .. } => "NA ODREĐENO",
        }
    }

    fn clause(&self) -> String {
        match self {
            Self::Indefinite => "Ovaj Ugovor sklapa se na neodređeno vrijeme.".to_string(),
            Self::FixedTerm { until, reason } => format!(
                "Ovaj Ugovor sklapa se na određeno vrijeme, do {}, iz razloga: {}.",
                format_optional_date(*until),
                or_blank(reason)
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmploymentContractRequest {
    pub employer: Party,
    pub employee: Party,
    pub position: String,
    /// Monthly gross salary.
    pub gross_salary: Decimal,
    pub start_date: Option<NaiveDate>,
    pub term: EmploymentTerm,
    /// Probation clause is emitted only for a non-zero number of months.
    pub probation_months: Option<u8>,
    /// Defaults to full time.
    pub weekly_hours: Option<u8>,
    pub place: String,
    pub drafted_on: Option<NaiveDate>,
}

pub fn render_employment_contract(request: &EmploymentContractRequest) -> Markup {
    let mut html = title(
        &format!("UGOVOR O RADU<br>{}", request.term.heading()),
        None,
    );
    html.push_str(&concluded_between(&request.place, request.drafted_on));
    html.push_str(&format!(
        "<div class='party-info'>1. <b>POSLODAVAC:</b><br>{}<br><br>2. <b>RADNIK:</b><br>{}</div>",
        request.employer.to_markup(),
        request.employee.to_markup()
    ));

    let probation = request
        .probation_months
        .filter(|months| *months > 0)
        .map(|months| {
            format!(
                "Ugovara se probni rad u trajanju od {}. Ako radnik ne zadovolji na probnom \
                 radu, poslodavac može otkazati ovaj Ugovor uz otkazni rok od sedam dana.",
                months_phrase(months)
            )
        })
        .unwrap_or_default();
    let hours = request.weekly_hours.unwrap_or(FULL_TIME_HOURS);
    let working_time = if hours >= FULL_TIME_HOURS {
        format!("Radnik će raditi u punom radnom vremenu od {hours} sati tjedno.")
    } else {
        format!("Radnik će raditi u nepunom radnom vremenu od {hours} sati tjedno.")
    };

    let (article_html, _) = articles(
        1,
        vec![
            Article::with_topic(
                "Radno mjesto",
                format!(
                    "Radnik se zapošljava na radnom mjestu: <b>{}</b>.",
                    or_blank(&request.position)
                ),
            ),
            Article::with_topic(
                "Početak rada",
                format!(
                    "Radnik počinje s radom dana {}.",
                    format_optional_date(request.start_date)
                ),
            ),
            Article::with_topic("Trajanje", request.term.clause()),
            Article::with_topic("Probni rad", probation),
            Article::with_topic("Radno vrijeme", working_time),
            Article::with_topic(
                "Plaća",
                format!(
                    "Za obavljeni rad radniku pripada bruto plaća u iznosu od {} mjesečno.",
                    format_money(request.gross_salary)
                ),
            ),
            Article::with_topic(
                "Završne odredbe",
                "Na sva pitanja koja nisu uređena ovim Ugovorom primjenjuju se odredbe Zakona \
                 o radu i drugih propisa Republike Hrvatske. Ovaj Ugovor sastavljen je u dva \
                 istovjetna primjerka, od kojih svaka strana zadržava po jedan."
                    .to_string(),
            ),
        ],
    );
    html.push_str(&article_html);
    html.push_str("<br><br>");
    html.push_str(&signatures(&["POSLODAVAC", "RADNIK"]));

    Markup::from(html)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationKind {
    #[default]
    BusinessGrounds,
    PersonalGrounds,
    FaultBased,
    /// Extraordinary dismissal without notice.
    Summary,
}

impl TerminationKind {
    pub const fn heading(self) -> &'static str {
        match self {
            Self::BusinessGrounds => "POSLOVNO UVJETOVANI OTKAZ",
            Self::PersonalGrounds => "OSOBNO UVJETOVANI OTKAZ",
            Self::FaultBased => "OTKAZ UVJETOVAN SKRIVLJENIM PONAŠANJEM RADNIKA",
            Self::Summary => "IZVANREDNI OTKAZ",
        }
    }

    pub const fn legal_basis(self) -> &'static str {
        match self {
            Self::BusinessGrounds => "članka 115. stavka 1. podstavka 1. Zakona o radu",
            Self::PersonalGrounds => "članka 115. stavka 1. podstavka 2. Zakona o radu",
            Self::FaultBased => "članka 115. stavka 1. podstavka 3. Zakona o radu",
            Self::Summary => "članka 116. Zakona o radu",
        }
    }

    const fn cause(self) -> &'static str {
        match self {
            Self::BusinessGrounds => {
                "zbog prestanka potrebe za obavljanjem određenog posla zbog gospodarskih, \
                 tehnoloških ili organizacijskih razloga"
            }
            Self::PersonalGrounds => {
                "jer radnik nije u mogućnosti uredno izvršavati svoje obveze iz radnog odnosa \
                 zbog određenih trajnih osobina ili sposobnosti"
            }
            Self::FaultBased => "jer radnik krši obveze iz radnog odnosa",
            Self::Summary => {
                "zbog osobito teške povrede obveze iz radnog odnosa, zbog koje nastavak radnog \
                 odnosa nije moguć"
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminationRequest {
    pub kind: TerminationKind,
    pub employer: Party,
    pub employee: Party,
    /// Date the terminated contract of employment was concluded.
    pub contract_date: Option<NaiveDate>,
    pub reasoning: String,
    /// Free text, e.g. "30 dana". Ignored for summary dismissal.
    pub notice_period: String,
    /// Written warning preceding the termination, if one was given.
    pub prior_warning: Option<NaiveDate>,
    pub place: String,
    pub drafted_on: Option<NaiveDate>,
}

const LEGAL_REMEDY: &str = "Protiv ove odluke radnik može u roku od 15 dana od dana dostave \
     odluke zahtijevati od poslodavca ostvarenje povrijeđenog prava. Ako poslodavac u roku od \
     15 dana od dostave zahtjeva ne udovolji tom zahtjevu, radnik može u daljnjem roku od 15 \
     dana zahtijevati zaštitu povrijeđenog prava pred nadležnim sudom.";

pub fn render_termination(request: &TerminationRequest) -> Markup {
    let kind = request.kind;
    let employee = request.employee.display_name();

    let mut html = title("ODLUKA O OTKAZU", Some(kind.heading()));
    html.push_str(&party_block("POSLODAVAC", &request.employer));
    html.push_str(&party_block("RADNIK", &request.employee));
    html.push_str(&body(&format!(
        "Na temelju {}, Poslodavac {} donosi sljedeću",
        kind.legal_basis(),
        request.employer.display_name()
    )));
    html.push_str(&centered_bold("ODLUKU"));

    let notice = match kind {
        TerminationKind::Summary => "Ugovor o radu prestaje danom dostave ove odluke radniku, \
             bez obveze poštivanja otkaznog roka."
            .to_string(),
        TerminationKind::BusinessGrounds
        | TerminationKind::PersonalGrounds
        | TerminationKind::FaultBased => format!(
            "Otkazni rok iznosi {} i počinje teći danom dostave ove odluke radniku.",
            or_blank(&request.notice_period)
        ),
    };
    let warning = request
        .prior_warning
        .map(|date| {
            format!(
                "Radnik je prije otkazivanja pisano upozoren dana {} na obveze iz radnog odnosa \
                 i na mogućnost otkaza u slučaju nastavka kršenja tih obveza.",
                format_date(date)
            )
        })
        .unwrap_or_default();

    html.push_str(&body(&numbered_lines([
        format!(
            "Radniku {employee} otkazuje se Ugovor o radu sklopljen dana {}, {}.",
            format_optional_date(request.contract_date),
            kind.cause()
        ),
        notice,
        warning,
    ])));

    html.push_str(&heading("Obrazloženje"));
    let reasoning = match non_empty(&request.reasoning) {
        Some(_) => narrative(&request.reasoning),
        None => TEXT_PLACEHOLDER.to_string(),
    };
    html.push_str(&body(&reasoning));
    html.push_str(&heading("Uputa o pravnom lijeku"));
    html.push_str(&body(LEGAL_REMEDY));

    html.push_str("<br><br>");
    html.push_str(&place_and_date(&request.place, request.drafted_on));
    html.push_str(&signature("POSLODAVAC", None));
    html.push_str(&body(&format!(
        "<b>Dostaviti:</b><br>1. Radniku {employee}<br>2. Pismohrana"
    )));

    Markup::from(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_kind_cites_its_own_provision() {
        assert!(TerminationKind::BusinessGrounds
            .legal_basis()
            .contains("podstavka 1."));
        assert!(TerminationKind::PersonalGrounds
            .legal_basis()
            .contains("podstavka 2."));
        assert!(TerminationKind::FaultBased
            .legal_basis()
            .contains("podstavka 3."));
        assert_eq!(
            TerminationKind::Summary.legal_basis(),
            "članka 116. Zakona o radu"
        );
    }

    #[test]
    fn fixed_term_deserializes_with_tag() {
        let term: EmploymentTerm = serde_json::from_str(
            r#"{"type":"fixed_term","until":"2025-12-31","reason":"zamjena"}"#,
        )
        .expect("term parses");
        assert_eq!(
            term.clause(),
            "Ovaj Ugovor sklapa se na određeno vrijeme, do 31.12.2025., iz razloga: zamjena."
        );
    }
}
