use crate::infra::InMemoryOutlineRepository;
use chrono::NaiveDate;
use clap::Args;
use legaldoc::config::{AppConfig, DraftingConfig};
use legaldoc::drafting::{DocumentRequest, DraftingService, InterestRequest};
use legaldoc::error::AppError;
use legaldoc::telemetry::{self, LogSink};
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct RenderArgs {
    /// JSON document request (tagged by `kind`)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Write the `.doc` export to this path instead of printing markup
    #[arg(long)]
    pub(crate) export: Option<PathBuf>,
    /// Render placeholders for missing data instead of rejecting the request
    #[arg(long)]
    pub(crate) skip_validation: bool,
}

#[derive(Args, Debug)]
pub(crate) struct InterestArgs {
    /// Outstanding principal in EUR
    #[arg(long)]
    pub(crate) principal: Decimal,
    /// Annual statutory rate in percent
    #[arg(long)]
    pub(crate) rate: Decimal,
    /// Accrual start (due date), YYYY-MM-DD
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) from: NaiveDate,
    /// Calculation date, YYYY-MM-DD
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) to: NaiveDate,
}

pub(crate) fn drafting_service(
    config: DraftingConfig,
) -> DraftingService<InMemoryOutlineRepository> {
    DraftingService::new(Arc::new(InMemoryOutlineRepository::default()), config)
}

pub(crate) fn load_request(path: &Path) -> Result<DocumentRequest, AppError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

pub(crate) fn run_render(args: RenderArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init_with_sink(&config.telemetry, LogSink::Stderr)?;

    let service = drafting_service(config.drafting);
    let request = load_request(&args.input)?;
    let rendered = if args.skip_validation {
        service.render_draft(request)
    } else {
        service.render(request)?
    };

    match args.export {
        Some(path) => {
            let document = service.package(&rendered);
            fs::write(&path, document.content)?;
            println!(
                "{} written to {} (suggested name {})",
                rendered.kind.label(),
                path.display(),
                document.file_name
            );
        }
        None => println!("{}", rendered.markup),
    }
    Ok(())
}

pub(crate) fn run_interest(args: InterestArgs) -> Result<(), AppError> {
    let service = drafting_service(DraftingConfig::default());
    let assessment = service.interest(&InterestRequest {
        principal: args.principal,
        annual_rate_percent: args.rate,
        accrual_start: args.from,
        as_of: args.to,
    })?;

    println!("{}", assessment.summary());
    println!("Ukupno za naplatu: {}", assessment.total_due_display);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use legaldoc::drafting::DocumentKind;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("legaldoc-{}-{name}", std::process::id()));
        fs::write(&path, contents).expect("write scratch file");
        path
    }

    #[test]
    fn load_request_reads_tagged_json() {
        let path = scratch_file(
            "appeal.json",
            r#"{ "kind": "appeal", "plaintiff": "Ivan Horvat", "judgment_number": "P-1/2024" }"#,
        );
        let request = load_request(&path).expect("request parses");
        assert_eq!(request.kind(), DocumentKind::Appeal);
        fs::remove_file(path).ok();
    }

    #[test]
    fn load_request_rejects_unknown_kind() {
        let path = scratch_file("unknown.json", r#"{ "kind": "last_will" }"#);
        match load_request(&path) {
            Err(AppError::Json(_)) => {}
            other => panic!("expected json error, got {other:?}"),
        }
        fs::remove_file(path).ok();
    }

    #[test]
    fn interest_rejects_reversed_dates() {
        let args = InterestArgs {
            principal: Decimal::from(1000),
            rate: Decimal::from(12),
            from: NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date"),
            to: NaiveDate::from_ymd_opt(2024, 2, 1).expect("valid date"),
        };
        match run_interest(args) {
            Err(AppError::Interest(_)) => {}
            other => panic!("expected interest error, got {other:?}"),
        }
    }
}
