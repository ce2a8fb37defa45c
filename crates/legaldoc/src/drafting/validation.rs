//! Input checks applied by the shell before rendering. Renderers themselves never fail.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::domain::{Party, PropertyParcel};
use super::ledger::CostComponents;
use super::templates::{DocumentRequest, EmploymentTerm};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Nedostaju podaci stranke {role} (ime ili tvrtka i OIB).")]
    MissingParty { role: String },
    #[error("OIB stranke {role} nije ispravan.")]
    InvalidOib { role: String },
    #[error("Obavezno polje nije ispunjeno: {field}.")]
    MissingField { field: &'static str },
    #[error("Iznos ne smije biti negativan: {field}.")]
    NegativeAmount { field: &'static str },
    #[error("Iznos je prevelik: {field}.")]
    AmountOutOfRange { field: &'static str },
    #[error("Datum '{later}' ne može biti prije datuma '{earlier}'.")]
    DateOrder {
        earlier: &'static str,
        later: &'static str,
    },
}

/// ISO 7064 MOD 11,10 check over an 11-digit OIB.
pub fn oib_is_valid(oib: &str) -> bool {
    let digits: Option<Vec<u32>> = oib.chars().map(|c| c.to_digit(10)).collect();
    let Some(digits) = digits else {
        return false;
    };
    if digits.len() != 11 {
        return false;
    }

    let mut remainder = 10;
    for digit in &digits[..10] {
        remainder = (remainder + digit) % 10;
        if remainder == 0 {
            remainder = 10;
        }
        remainder = (remainder * 2) % 11;
    }
    (11 - remainder) % 10 == digits[10]
}

fn party(role: &str, party: &Party) -> Result<(), ValidationError> {
    if !party.is_valid() {
        return Err(ValidationError::MissingParty {
            role: role.to_string(),
        });
    }
    if !oib_is_valid(party.oib().trim()) {
        return Err(ValidationError::InvalidOib {
            role: role.to_string(),
        });
    }
    Ok(())
}

fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(())
}

fn non_negative(field: &'static str, amount: Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ValidationError::NegativeAmount { field });
    }
    Ok(())
}

fn costs(components: Option<&CostComponents>) -> Result<(), ValidationError> {
    let Some(components) = components else {
        return Ok(());
    };
    non_negative("sastav", components.drafting)?;
    non_negative("PDV", components.vat)?;
    non_negative("materijalni troškovi", components.material)?;
    non_negative("sudska pristojba", components.court_fee)?;
    if components.checked_total().is_none() {
        return Err(ValidationError::AmountOutOfRange {
            field: "ukupni troškovi",
        });
    }
    Ok(())
}

fn ordered(
    earlier: &'static str,
    earlier_date: Option<NaiveDate>,
    later: &'static str,
    later_date: Option<NaiveDate>,
) -> Result<(), ValidationError> {
    match (earlier_date, later_date) {
        (Some(first), Some(second)) if second < first => {
            Err(ValidationError::DateOrder { earlier, later })
        }
        _ => Ok(()),
    }
}

fn parcel(parcel: &PropertyParcel) -> Result<(), ValidationError> {
    required("katastarska općina", &parcel.cadastral_municipality)?;
    required("broj čestice", &parcel.parcel_number)
}

impl DocumentRequest {
    /// Checks the request the way the form does before a document is generated.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::CivilLawsuit(request) => {
                required("sud", &request.court)?;
                party("TUŽITELJ", &request.plaintiff)?;
                party("TUŽENIK", &request.defendant)?;
                non_negative("vrijednost predmeta spora", request.claim_value)?;
                costs(request.costs.as_ref())
            }
            Self::EnforcementPetition(request) => {
                required("javni bilježnik", &request.notary)?;
                party("OVRHOVODITELJ", &request.creditor)?;
                party("OVRŠENIK", &request.debtor)?;
                required("vjerodostojna isprava", &request.credible_document)?;
                non_negative("glavnica", request.principal)?;
                ordered(
                    "datum isprave",
                    request.document_date,
                    "datum dospijeća",
                    request.due_date,
                )?;
                costs(request.costs.as_ref())
            }
            Self::Appeal(request) => {
                required("prvostupanjski sud", &request.first_instance_court)?;
                required("drugostupanjski sud", &request.second_instance_court)?;
                required("tužitelj", &request.plaintiff)?;
                required("tuženik", &request.defendant)?;
                required("poslovni broj presude", &request.judgment_number)?;
                ordered(
                    "datum presude",
                    request.judgment_date,
                    "datum sastava",
                    request.drafted_on,
                )?;
                costs(request.costs.as_ref())
            }
            Self::StandardContract(request) => {
                let profile = request.kind.profile();
                party(profile.first_role, &request.first_party)?;
                party(profile.second_role, &request.second_party)?;
                non_negative("iznos", request.amount)?;
                if let Some(deposit) = request.deposit {
                    non_negative("kapara", deposit)?;
                }
                costs(request.costs.as_ref())
            }
            Self::EmploymentContract(request) => {
                party("POSLODAVAC", &request.employer)?;
                party("RADNIK", &request.employee)?;
                required("radno mjesto", &request.position)?;
                non_negative("bruto plaća", request.gross_salary)?;
                match &request.term {
                    EmploymentTerm::Indefinite => Ok(()),
                    EmploymentTerm::FixedTerm { until, .. } => ordered(
                        "početak rada",
                        request.start_date,
                        "kraj ugovora na određeno",
                        *until,
                    ),
                }
            }
            Self::TerminationDecision(request) => {
                party("POSLODAVAC", &request.employer)?;
                party("RADNIK", &request.employee)?;
                required("obrazloženje", &request.reasoning)?;
                ordered(
                    "datum ugovora o radu",
                    request.contract_date,
                    "datum upozorenja",
                    request.prior_warning,
                )?;
                ordered(
                    "datum upozorenja",
                    request.prior_warning,
                    "datum odluke",
                    request.drafted_on,
                )?;
                ordered(
                    "datum ugovora o radu",
                    request.contract_date,
                    "datum odluke",
                    request.drafted_on,
                )
            }
            Self::TitleStatement(request) => {
                party("PRODAVATELJ", &request.seller)?;
                party("KUPAC", &request.buyer)?;
                parcel(&request.parcel)
            }
            Self::RegistrationPetition(request) => {
                required("sud", &request.court)?;
                party("PREDLAGATELJ", &request.petitioner)?;
                party("PROTUSTRANKA", &request.counterparty)?;
                parcel(&request.parcel)?;
                costs(request.costs.as_ref())
            }
            Self::CancellationAction(request) => {
                required("sud", &request.court)?;
                party("TUŽITELJ", &request.plaintiff)?;
                party("TUŽENIK", &request.defendant)?;
                parcel(&request.parcel)?;
                required("broj upisa", &request.registration_number)?;
                non_negative("vrijednost predmeta spora", request.claim_value)?;
                ordered(
                    "datum isprave",
                    request.instrument_date,
                    "datum uknjižbe",
                    request.registration_date,
                )?;
                costs(request.costs.as_ref())
            }
            Self::FreeFormContract(request) => {
                if request.parties.is_empty() {
                    return Err(ValidationError::MissingField {
                        field: "ugovorne strane",
                    });
                }
                for entry in &request.parties {
                    required("uloga stranke", &entry.role)?;
                    party(entry.role.trim(), &entry.party)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_good_oibs() {
        for oib in ["12345678903", "69696969694", "11111111119", "44444444446"] {
            assert!(oib_is_valid(oib), "{oib} should pass the check digit");
        }
    }

    #[test]
    fn rejects_bad_check_digit_and_shape() {
        assert!(!oib_is_valid("12345678901"));
        assert!(!oib_is_valid("1234567890"));
        assert!(!oib_is_valid("1234567890a"));
        assert!(!oib_is_valid(""));
    }

    #[test]
    fn cost_totals_must_fit() {
        let oversized = CostComponents {
            drafting: Decimal::MAX,
            court_fee: Decimal::MAX,
            ..CostComponents::default()
        };
        assert_eq!(
            costs(Some(&oversized)),
            Err(ValidationError::AmountOutOfRange {
                field: "ukupni troškovi"
            })
        );
        assert!(costs(Some(&CostComponents {
            drafting: Decimal::MAX,
            ..CostComponents::default()
        }))
        .is_ok());
        assert!(costs(None).is_ok());
    }

    #[test]
    fn dates_in_order_or_missing_pass() {
        let first = NaiveDate::from_ymd_opt(2024, 1, 1);
        let second = NaiveDate::from_ymd_opt(2024, 2, 1);
        assert!(ordered("a", first, "b", second).is_ok());
        assert!(ordered("a", first, "b", first).is_ok());
        assert!(ordered("a", None, "b", second).is_ok());
        assert_eq!(
            ordered("a", second, "b", first),
            Err(ValidationError::DateOrder {
                earlier: "a",
                later: "b"
            })
        );
    }
}
