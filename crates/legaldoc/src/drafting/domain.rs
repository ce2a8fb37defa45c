use serde::{Deserialize, Serialize};

use super::format::or_blank;

pub const NATURAL_PERSON_PLACEHOLDER: &str =
    "____________________ (ime), OIB: ____________________";
pub const LEGAL_ENTITY_PLACEHOLDER: &str =
    "____________________ (tvrtka), OIB: ____________________";

/// A party to a filing or contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Party {
    NaturalPerson(NaturalPerson),
    LegalEntity(LegalEntity),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NaturalPerson {
    pub full_name: String,
    pub oib: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegalEntity {
    pub company: String,
    pub oib: String,
    /// Court-register number (MBS).
    pub registration_number: String,
    pub representative: String,
    pub seat: String,
}

impl Default for Party {
    fn default() -> Self {
        Self::NaturalPerson(NaturalPerson::default())
    }
}

impl Party {
    pub fn natural(full_name: &str, oib: &str, address: &str) -> Self {
        Self::NaturalPerson(NaturalPerson {
            full_name: full_name.to_string(),
            oib: oib.to_string(),
            address: address.to_string(),
        })
    }

    pub fn legal(
        company: &str,
        oib: &str,
        registration_number: &str,
        representative: &str,
        seat: &str,
    ) -> Self {
        Self::LegalEntity(LegalEntity {
            company: company.to_string(),
            oib: oib.to_string(),
            registration_number: registration_number.to_string(),
            representative: representative.to_string(),
            seat: seat.to_string(),
        })
    }

    /// True when the identifying fields (name or company, and OIB) are filled in.
    pub fn is_valid(&self) -> bool {
        !self.name().trim().is_empty() && !self.oib().trim().is_empty()
    }

    pub fn oib(&self) -> &str {
        match self {
            Party::NaturalPerson(person) => &person.oib,
            Party::LegalEntity(entity) => &entity.oib,
        }
    }

    fn name(&self) -> &str {
        match self {
            Party::NaturalPerson(person) => &person.full_name,
            Party::LegalEntity(entity) => &entity.company,
        }
    }

    /// Single-line reference to the party, blank when not yet entered.
    pub fn display_name(&self) -> &str {
        or_blank(self.name())
    }

    /// Multi-line party block, or the fixed placeholder while the party is incomplete.
    pub fn to_markup(&self) -> String {
        if !self.is_valid() {
            return match self {
                Party::NaturalPerson(_) => NATURAL_PERSON_PLACEHOLDER.to_string(),
                Party::LegalEntity(_) => LEGAL_ENTITY_PLACEHOLDER.to_string(),
            };
        }

        match self {
            Party::NaturalPerson(person) => format!(
                "<b>{}</b><br>Adresa: {}<br>OIB: {}",
                person.full_name.trim(),
                person.address.trim(),
                person.oib.trim()
            ),
            Party::LegalEntity(entity) => format!(
                "<b>{}</b><br>Sjedište: {}<br>OIB: {}, MBS: {}<br>Zastupana po: {}",
                entity.company.trim(),
                entity.seat.trim(),
                entity.oib.trim(),
                entity.registration_number.trim(),
                entity.representative.trim()
            ),
        }
    }
}

/// Real property as identified in the land register.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyParcel {
    /// Cadastral municipality (k.o.).
    pub cadastral_municipality: String,
    /// Land-register folio (zk. uložak).
    pub folio: String,
    /// Parcel number (k.č.br.).
    pub parcel_number: String,
    /// Description "in nature", optional.
    pub description: String,
}

impl PropertyParcel {
    pub fn municipality(&self) -> &str {
        or_blank(&self.cadastral_municipality)
    }

    pub fn folio(&self) -> &str {
        or_blank(&self.folio)
    }

    pub fn parcel(&self) -> &str {
        or_blank(&self.parcel_number)
    }

    /// `", u naravi <description>"`, empty when no description was given.
    pub fn nature_suffix(&self) -> String {
        let description = self.description.trim();
        if description.is_empty() {
            String::new()
        } else {
            format!(", u naravi {description}")
        }
    }
}
