//! Markup building blocks shared by the templates.

use chrono::NaiveDate;

use super::super::domain::Party;
use super::super::format::{format_optional_date, line_breaks, or_blank, roman};
use super::super::ledger::{build_ledger, CostComponents};

pub(super) fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Narrative text with line breaks converted and nothing else touched.
pub(super) fn narrative(text: &str) -> String {
    line_breaks(text)
}

pub(super) fn representation(attorney: Option<&str>) -> String {
    match attorney.and_then(non_empty) {
        Some(name) => format!("<br>Zastupan po punomoćniku: {name}<br>"),
        None => String::new(),
    }
}

pub(super) fn court_heading(court: &str, attorney: Option<&str>) -> String {
    format!(
        "<div style=\"font-weight: bold; font-size: 14px;\">{}</div>\
         <div style=\"font-size: 12px;\">{}</div><br>",
        or_blank(court).to_uppercase(),
        representation(attorney)
    )
}

pub(super) fn title(title: &str, subtitle: Option<&str>) -> String {
    match subtitle {
        Some(subtitle) => format!(
            "<div class='header-doc'>{title}<br>\
             <span style='font-size: 11pt; font-weight: normal;'>{subtitle}</span></div>"
        ),
        None => format!("<div class='header-doc'>{title}</div>"),
    }
}

pub(super) fn party_line(role: &str, party: &Party) -> String {
    format!("<b>{role}:</b> {}", party.to_markup())
}

pub(super) fn party_block(role: &str, party: &Party) -> String {
    format!(
        "<div class='party-info'><b>{role}:</b><br>{}</div>",
        party.to_markup()
    )
}

pub(super) fn body(text: &str) -> String {
    format!("<div class='doc-body'>{text}</div>")
}

pub(super) fn heading(text: &str) -> String {
    format!("<div class='section-title'>{text}</div>")
}

pub(super) fn centered_bold(text: &str) -> String {
    format!("<div style=\"text-align: center; font-weight: bold; margin: 10px 0;\">{text}</div>")
}

pub(super) struct Article {
    pub(super) topic: Option<String>,
    pub(super) body: String,
}

impl Article {
    pub(super) fn new(body: String) -> Self {
        Self { topic: None, body }
    }

    pub(super) fn with_topic(topic: &str, body: String) -> Self {
        Self {
            topic: Some(topic.to_string()),
            body,
        }
    }
}

/// Contract articles numbered from `first_number` over non-empty bodies.
/// Returns the markup and how many articles were emitted.
pub(super) fn articles<I>(first_number: usize, items: I) -> (String, usize)
where
    I: IntoIterator<Item = Article>,
{
    let mut html = String::new();
    let mut emitted = 0;
    for article in items {
        if non_empty(&article.body).is_none() {
            continue;
        }
        let number = first_number + emitted;
        let label = match article.topic.as_deref().and_then(non_empty) {
            Some(topic) => format!("Članak {number}.<br>{topic}"),
            None => format!("Članak {number}."),
        };
        html.push_str(&heading(&label));
        html.push_str(&body(&article.body));
        emitted += 1;
    }
    (html, emitted)
}

pub(super) struct Point {
    pub(super) lead: String,
    pub(super) body: String,
}

/// Petitum points numbered `I.`, `II.`, ... over non-empty points.
pub(super) fn petitum<I>(points: I) -> String
where
    I: IntoIterator<Item = Point>,
{
    points
        .into_iter()
        .filter(|point| non_empty(&point.lead).is_some() || non_empty(&point.body).is_some())
        .enumerate()
        .map(|(idx, point)| {
            let lead = match non_empty(&point.lead) {
                Some(lead) => format!("<b>{}. {lead}</b>", roman(idx + 1)),
                None => format!("<b>{}.</b>", roman(idx + 1)),
            };
            format!("{lead} {}", point.body.trim())
        })
        .collect::<Vec<_>>()
        .join("<br><br>")
}

/// `1. a<br>2. b` over non-empty entries.
pub(super) fn numbered_lines<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .filter_map(|item| non_empty(item.as_ref()).map(str::to_string))
        .enumerate()
        .map(|(idx, item)| format!("{}. {item}", idx + 1))
        .collect::<Vec<_>>()
        .join("<br>")
}

pub(super) fn ordered_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let entries: String = items
        .into_iter()
        .filter_map(|item| non_empty(item.as_ref()).map(|entry| format!("<li>{entry}</li>")))
        .collect();
    format!("<ol>{entries}</ol>")
}

pub(super) fn bullet_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let entries: String = items
        .into_iter()
        .map(|item| format!("<li>{}</li>", item.as_ref()))
        .collect();
    format!("<ul>{entries}</ul>")
}

/// Ledger table for the filing. Components whose total overflows produce no table.
pub(super) fn cost_ledger(costs: Option<&CostComponents>) -> String {
    costs
        .and_then(|components| build_ledger(components).ok())
        .map(|ledger| ledger.render())
        .unwrap_or_default()
}

pub(super) fn place_and_date(place: &str, date: Option<NaiveDate>) -> String {
    format!(
        "<div style=\"text-align: right;\">U {}, dana {}</div>",
        or_blank(place),
        format_optional_date(date)
    )
}

pub(super) fn concluded_between(place: &str, drafted_on: Option<NaiveDate>) -> String {
    body(&format!(
        "Sklopljen u {}, dana {}, između:",
        or_blank(place),
        format_optional_date(drafted_on)
    ))
}

/// Single signature in the right half of the page.
pub(super) fn signature(role: &str, note: Option<&str>) -> String {
    let note = note
        .map(|note| format!("<br>{note}"))
        .unwrap_or_default();
    format!(
        "<table width=\"100%\" border=\"0\"><tr><td width=\"50%\"></td>\
         <td width=\"50%\" align=\"center\"><b>{role}</b>{note}<br><br>\
         ______________________</td></tr></table>"
    )
}

/// Side-by-side signatures, one column per role.
pub(super) fn signatures<S: AsRef<str>>(roles: &[S]) -> String {
    if roles.is_empty() {
        return String::new();
    }
    let width = 100 / roles.len();
    let cells: String = roles
        .iter()
        .map(|role| {
            format!(
                "<td width=\"{width}%\" align=\"center\"><b>{}</b><br><br>__________</td>",
                role.as_ref()
            )
        })
        .collect();
    format!("<table width=\"100%\"><tr>{cells}</tr></table>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrative_only_converts_line_breaks() {
        assert_eq!(
            narrative("  Prvi red\r\nDrugi red\n"),
            "  Prvi red<br>Drugi red<br>"
        );
        assert_eq!(narrative(""), "");
    }

    #[test]
    fn articles_skip_empty_bodies_without_consuming_numbers() {
        let (html, emitted) = articles(
            1,
            vec![
                Article::new("Predmet.".to_string()),
                Article::new("   ".to_string()),
                Article::with_topic("Cijena", "Cijena je 100 EUR.".to_string()),
            ],
        );
        assert_eq!(emitted, 2);
        assert!(html.contains("Članak 1."));
        assert!(html.contains("Članak 2.<br>Cijena"));
        assert!(!html.contains("Članak 3."));
    }

    #[test]
    fn petitum_numbers_emitted_points_with_roman_numerals() {
        let html = petitum(vec![
            Point {
                lead: "Nalaže se".to_string(),
                body: "isplata.".to_string(),
            },
            Point {
                lead: String::new(),
                body: String::new(),
            },
            Point {
                lead: "Nalaže se".to_string(),
                body: "naknada troškova.".to_string(),
            },
        ]);
        assert_eq!(
            html,
            "<b>I. Nalaže se</b> isplata.<br><br><b>II. Nalaže se</b> naknada troškova."
        );
    }

    #[test]
    fn representation_is_omitted_without_attorney() {
        assert_eq!(representation(None), "");
        assert_eq!(representation(Some("  ")), "");
        assert_eq!(
            representation(Some("Odvjetnik Ivo Ivić")),
            "<br>Zastupan po punomoćniku: Odvjetnik Ivo Ivić<br>"
        );
    }

    #[test]
    fn numbered_lines_renumber_after_gaps() {
        assert_eq!(numbered_lines(["a", "", "b"]), "1. a<br>2. b");
    }
}
