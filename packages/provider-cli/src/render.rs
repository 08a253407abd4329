//! Plain-text rendering of search results

use std::fmt::{self, Write};

use colored::Colorize;
use provider_search::{ProviderCardView, ResultsView, EMPTY_HINT, EMPTY_MESSAGE, LOADING_MESSAGE};

pub fn results(view: &ResultsView) -> String {
    match view {
        ResultsView::Loading => LOADING_MESSAGE.to_string(),
        ResultsView::Empty => format!("{EMPTY_MESSAGE}\n{}", EMPTY_HINT.dimmed()),
        ResultsView::Listing { heading, cards } => {
            let mut out = format!("{}\n", heading.bold());
            for card in cards {
                out.push('\n');
                // Writing into a String cannot fail.
                let _ = write_card(&mut out, card);
            }
            out
        }
    }
}

fn write_card(out: &mut String, card: &ProviderCardView) -> fmt::Result {
    match card.enumeration_label {
        Some(label) => writeln!(
            out,
            "{}  [{} \u{b7} {label}]",
            card.display_name.bold(),
            card.enumeration_type
        )?,
        None => writeln!(out, "{}  [{}]", card.display_name.bold(), card.enumeration_type)?,
    }
    writeln!(out, "  NPI: {}", card.npi)?;
    if let Some(location) = &card.location {
        writeln!(out, "  Location: {location}")?;
    }
    if let Some(specialty) = &card.specialty {
        writeln!(out, "  Specialty: {specialty}")?;
    }
    if let Some(website) = &card.website {
        writeln!(out, "  Website: {}", website.blue().underline())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use provider_search::Provider;

    fn provider(npi: &str, org: Option<&str>) -> Provider {
        Provider {
            npi: npi.to_string(),
            enumeration_type: "NPI-2".to_string(),
            first_name: None,
            last_name: None,
            organization_name: org.map(str::to_string),
            city: Some("Austin".into()),
            state: Some("TX".into()),
            postal_code: None,
            taxonomy: None,
            website: None,
            confidence: 0.7,
        }
    }

    #[test]
    fn empty_results_show_placeholder() {
        colored::control::set_override(false);
        let text = results(&ResultsView::build(&[], false));
        assert!(text.starts_with(EMPTY_MESSAGE));
        assert!(!text.contains("Found 0"));
    }

    #[test]
    fn listing_has_heading_and_cards() {
        colored::control::set_override(false);
        let providers = [provider("1", Some("Acme Clinic")), provider("2", None)];
        let text = results(&ResultsView::build(&providers, false));
        assert!(text.starts_with("Found 2 providers"));
        assert!(text.contains("Acme Clinic  [NPI-2 \u{b7} Organization]"));
        assert!(text.contains("Unknown Provider"));
        assert!(text.contains("Location: Austin, TX"));
        assert!(!text.contains("Specialty:"));
    }

    #[test]
    fn loading_ignores_held_results() {
        let view = ResultsView::build(&[provider("1", None)], true);
        assert_eq!(results(&view), LOADING_MESSAGE);
    }
}
