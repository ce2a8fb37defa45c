//! Cost ledger (troškovnik) attached to filings, plus the fee policies callers use to
//! derive VAT before building it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::format::format_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostItem {
    DraftingFee,
    Vat,
    MaterialOrNotaryAward,
    CourtFee,
}

impl CostItem {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::DraftingFee,
            Self::Vat,
            Self::MaterialOrNotaryAward,
            Self::CourtFee,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::DraftingFee => "Sastav podneska/isprave (Tbr. Tarife)",
            Self::Vat => "PDV",
            Self::MaterialOrNotaryAward => "Materijalni troškovi / JB Nagrada",
            Self::CourtFee => "Sudska pristojba",
        }
    }

    /// The drafting row is listed even when it is zero.
    pub const fn always_shown(self) -> bool {
        matches!(self, Self::DraftingFee)
    }
}

/// Fee components as supplied by the caller. Missing keys are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostComponents {
    pub drafting: Decimal,
    pub vat: Decimal,
    pub material: Decimal,
    pub court_fee: Decimal,
}

impl CostComponents {
    pub fn amount(&self, item: CostItem) -> Decimal {
        match item {
            CostItem::DraftingFee => self.drafting,
            CostItem::Vat => self.vat,
            CostItem::MaterialOrNotaryAward => self.material,
            CostItem::CourtFee => self.court_fee,
        }
    }

    /// Sum of all four components, `None` when it does not fit a `Decimal`.
    pub fn checked_total(&self) -> Option<Decimal> {
        self.drafting
            .checked_add(self.vat)?
            .checked_add(self.material)?
            .checked_add(self.court_fee)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("Iznos troškova je izvan dopuštenog raspona.")]
    AmountOutOfRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostLine {
    /// Position among the rows actually shown, starting at 1.
    pub number: usize,
    pub item: CostItem,
    pub label: &'static str,
    pub amount: Decimal,
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostLedger {
    pub lines: Vec<CostLine>,
    /// Sum of all four components, including rows that are not shown.
    pub total: Decimal,
    pub total_display: String,
}

pub fn build_ledger(components: &CostComponents) -> Result<CostLedger, LedgerError> {
    let total = components
        .checked_total()
        .ok_or(LedgerError::AmountOutOfRange)?;
    let lines = CostItem::ordered()
        .into_iter()
        .filter(|item| item.always_shown() || components.amount(*item) > Decimal::ZERO)
        .enumerate()
        .map(|(idx, item)| {
            let amount = components.amount(item);
            CostLine {
                number: idx + 1,
                item,
                label: item.label(),
                amount,
                display: format_amount(amount),
            }
        })
        .collect();

    Ok(CostLedger {
        lines,
        total,
        total_display: format_amount(total),
    })
}

impl CostLedger {
    pub fn shows(&self, item: CostItem) -> bool {
        self.lines.iter().any(|line| line.item == item)
    }

    /// Table markup embedded at the end of a filing.
    pub fn render(&self) -> String {
        let mut html = String::from(
            "<div class='section-title' style='margin-top: 30px;'>POPIS TROŠKOVA POSTUPKA:</div>\
             <table class='cost-table'>",
        );
        for line in &self.lines {
            html.push_str(&format!(
                "<tr><td width=\"70%\">{}. {}:</td><td width=\"30%\" align=\"right\">{}</td></tr>",
                line.number, line.label, line.display
            ));
        }
        html.push_str(&format!(
            "<tr style='font-weight: bold; background-color: #f0f0f0;'>\
             <td style='padding: 10px;'>UKUPNO:</td>\
             <td style='padding: 10px;' align=\"right\">{}</td></tr></table>",
            self.total_display
        ));
        html
    }
}

/// Fee inputs before VAT is derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeSchedule {
    pub drafting: Decimal,
    /// Material costs or the notary's award.
    pub material: Decimal,
    pub court_fee: Decimal,
    pub charge_vat: bool,
}

/// How a document type derives its cost components from a fee schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeePolicy {
    /// VAT on the drafting fee alone.
    VatOnDrafting,
    /// VAT on the drafting fee plus the notary award.
    VatOnDraftingAndMaterial,
    /// Only the court fee is claimed.
    CourtFeeOnly,
}

impl FeePolicy {
    pub fn apply(
        self,
        schedule: &FeeSchedule,
        vat_rate_percent: Decimal,
    ) -> Result<CostComponents, LedgerError> {
        let vat_on = |base: Option<Decimal>| {
            if !schedule.charge_vat {
                return Ok(Decimal::ZERO);
            }
            base.and_then(|base| base.checked_mul(vat_rate_percent))
                .and_then(|amount| amount.checked_div(Decimal::ONE_HUNDRED))
                .ok_or(LedgerError::AmountOutOfRange)
        };

        let components = match self {
            FeePolicy::VatOnDrafting => CostComponents {
                drafting: schedule.drafting,
                vat: vat_on(Some(schedule.drafting))?,
                material: schedule.material,
                court_fee: schedule.court_fee,
            },
            FeePolicy::VatOnDraftingAndMaterial => CostComponents {
                drafting: schedule.drafting,
                vat: vat_on(schedule.drafting.checked_add(schedule.material))?,
                material: schedule.material,
                court_fee: schedule.court_fee,
            },
            FeePolicy::CourtFeeOnly => CostComponents {
                court_fee: schedule.court_fee,
                ..CostComponents::default()
            },
        };
        components
            .checked_total()
            .ok_or(LedgerError::AmountOutOfRange)?;
        Ok(components)
    }
}
