//! Spreadsheet form of the quotation ledger.
//!
//! The output is CSV with a UTF-8 byte-order mark and CRLF line endings so
//! that Excel opens it directly, even under an `.xls` name.

use webquote_shared::QuotationRecord;

pub const BOM: char = '\u{feff}';
pub const LINE_END: &str = "\r\n";

pub const HEADERS: [&str; 32] = [
    "Sr.No",
    "Quotation ID",
    "Date",
    "Client Name",
    "Company Name",
    "Project Title",
    "Email",
    "Phone",
    "Address",
    "Start Date",
    "Project Type",
    "Target Audience",
    "Multilingual Support",
    "Project Goal",
    "Device Compatibility",
    "Website Type",
    "Logo Design",
    "Performance Level",
    "Frontend Technology",
    "Backend Technology",
    "Database Technology",
    "Hosting Platform",
    "DevOps Tools",
    "Additional Services",
    "Accessibility Compliance",
    "Selected Features",
    "Payment Gateways",
    "CMS Required",
    "Base Cost",
    "Features Cost",
    "Total Cost INR",
    "Timeline",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerCsvError {
    #[error("unterminated quoted field on line {0}")]
    UnterminatedQuote(usize),
    #[error("unexpected character after closing quote on line {0}")]
    TrailingCharacters(usize),
}

/// Doubles embedded quotes and wraps the field in quotes when it contains a
/// comma, quote, CR or LF.
pub fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn columns(index: usize, record: &QuotationRecord) -> [String; 32] {
    [
        index.to_string(),
        record.quotation_id.clone(),
        record.generated_date.clone(),
        record.client_name.clone(),
        record.company_name.clone(),
        record.project_title.clone(),
        record.email.clone(),
        record.phone.clone(),
        record.address.clone(),
        record.preferred_start_date.clone(),
        record.project_type.clone(),
        record.target_audience.clone(),
        record.multilingual_support.clone(),
        record.project_goal.clone(),
        record.device_compatibility.clone(),
        record.website_type.clone(),
        record.logo_design.clone(),
        record.performance_level.clone(),
        record.frontend_tech.clone(),
        record.backend_tech.clone(),
        record.database_tech.clone(),
        record.hosting_tech.clone(),
        record.devops_tech.clone(),
        record.additional_services.clone(),
        record.accessibility_compliance.clone(),
        record.selected_features.clone(),
        record.payment_gateways.clone(),
        record.cms_required.clone(),
        record.formatted_base_cost.clone(),
        record.formatted_features_cost.clone(),
        record.formatted_total_inr.clone(),
        record.timeline.clone(),
    ]
}

/// One data row, without the line ending. `index` is the 1-based Sr.No.
pub fn render_row(index: usize, record: &QuotationRecord) -> String {
    columns(index, record)
        .iter()
        .map(|field| escape_field(field))
        .collect::<Vec<_>>()
        .join(",")
}

/// The whole ledger: BOM, header row, then every record in order.
pub fn render_ledger(records: &[QuotationRecord]) -> String {
    let mut out = String::new();
    out.push(BOM);
    out.push_str(&HEADERS.join(","));
    out.push_str(LINE_END);

    for (i, record) in records.iter().enumerate() {
        out.push_str(&render_row(i + 1, record));
        out.push_str(LINE_END);
    }
    out
}

/// Reads CSV text back into rows of fields. The header row is returned like
/// any other row; a leading BOM is skipped.
pub fn parse_ledger(text: &str) -> Result<Vec<Vec<String>>, LedgerCsvError> {
    let text = text.strip_prefix(BOM).unwrap_or(text);

    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut line = 1;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if field.is_empty() => {
                let start = line;
                loop {
                    match chars.next() {
                        Some('"') if chars.peek() == Some(&'"') => {
                            chars.next();
                            field.push('"');
                        }
                        Some('"') => break,
                        Some(c) => {
                            if c == '\n' {
                                line += 1;
                            }
                            field.push(c);
                        }
                        None => return Err(LedgerCsvError::UnterminatedQuote(start)),
                    }
                }
                match chars.peek() {
                    None | Some(',') | Some('\r') | Some('\n') => {}
                    Some(_) => return Err(LedgerCsvError::TrailingCharacters(line)),
                }
            }
            ',' => row.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
                line += 1;
            }
            c => field.push(c),
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(client: &str) -> QuotationRecord {
        QuotationRecord {
            quotation_id: "QTN-1710498600000".into(),
            generated_date: "2024-03-15".into(),
            client_name: client.into(),
            company_name: "Rao Textiles".into(),
            project_title: "Storefront".into(),
            email: "asha@raotextiles.in".into(),
            phone: "N/A".into(),
            address: "12 MG Road,\nBengaluru".into(),
            preferred_start_date: "To be decided".into(),
            project_type: "website".into(),
            target_audience: "Retail buyers, Wholesalers".into(),
            project_goal: "Sell \"handloom\" online".into(),
            device_compatibility: "desktop, mobile".into(),
            website_type: "eCommerce Store".into(),
            cms_required: "WordPress".into(),
            accessibility_compliance: "Basic Accessibility".into(),
            logo_design: "No logo design needed".into(),
            performance_level: "Enterprise Performance".into(),
            frontend_tech: "React.js".into(),
            backend_tech: "Node.js + Express".into(),
            database_tech: "MySQL".into(),
            hosting_tech: "Shared Hosting".into(),
            devops_tech: "Basic Deployment".into(),
            additional_services: "SSL Certificate".into(),
            selected_features: "Shopping Cart, Inventory Management".into(),
            payment_gateways: "stripe".into(),
            multilingual_support: "English".into(),
            base_cost: 190_000,
            features_cost: 83_000,
            total_cost_inr: 273_000,
            timeline: "15-17 weeks".into(),
            formatted_base_cost: "₹1,90,000".into(),
            formatted_features_cost: "₹83,000".into(),
            formatted_total_inr: "₹2,73,000".into(),
        }
    }

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("a, b"), "\"a, b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
        assert_eq!(escape_field(""), "");
    }

    #[test]
    fn test_empty_ledger_is_bom_and_header() {
        let csv = render_ledger(&[]);

        assert!(csv.starts_with('\u{feff}'));
        assert!(csv.ends_with("Total Cost INR,Timeline\r\n"));
        assert_eq!(csv.matches("\r\n").count(), 1);
    }

    #[test]
    fn test_rows_are_numbered_from_one() {
        let csv = render_ledger(&[sample("Asha"), sample("Ravi")]);
        let rows = parse_ledger(&csv).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], HEADERS.to_vec());
        assert_eq!(rows[1][0], "1");
        assert_eq!(rows[2][0], "2");
        assert_eq!(rows[2][3], "Ravi");
    }

    #[test]
    fn test_round_trip_preserves_display_strings() {
        let record = sample("Asha, Rao");
        let csv = render_ledger(std::slice::from_ref(&record));
        let rows = parse_ledger(&csv).unwrap();
        let row = &rows[1];

        assert_eq!(row.len(), HEADERS.len());
        assert_eq!(row[3], "Asha, Rao");
        assert_eq!(row[8], "12 MG Road,\nBengaluru");
        assert_eq!(row[13], "Sell \"handloom\" online");
        assert_eq!(row[25], "Shopping Cart, Inventory Management");
        assert_eq!(row[28], "₹1,90,000");
        assert_eq!(row[30], "₹2,73,000");
        assert_eq!(row[31], "15-17 weeks");
    }

    #[test]
    fn test_projected_record_survives_round_trip() {
        use crate::projection::project;
        use chrono::{TimeZone, Utc};
        use webquote_catalog::Selection;
        use webquote_engine::QuoteEngine;

        let selection = Selection {
            client_name: Some("Rao, Asha".into()),
            company_name: Some("\"Rao\" Textiles".into()),
            project_title: Some("Store\r\nfront".into()),
            address: Some("12 MG Road,\nBengaluru".into()),
            project_goal: Some("Sell \"handloom\", online\r".into()),
            website_type: Some("ecommerce".into()),
            frontend_tech: Some("tailwind".into()),
            target_audience: vec!["Retail, \"B2C\"".into(), "Wholesalers".into()],
            payment_gateway: vec!["stripe".into(), "razorpay".into()],
            ..Default::default()
        }
        .with_feature("shoppingCart", true)
        .with_feature("googleAnalytics", true);
        let engine = QuoteEngine::default();
        let quote = engine.quote(&selection);
        let at = Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap();
        let record = project(&selection, engine.table(), &quote.cost, &quote.timeline, at);

        let rows = parse_ledger(&render_ledger(std::slice::from_ref(&record))).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], columns(1, &record).to_vec());
    }

    #[test]
    fn test_parse_rejects_broken_quotes() {
        assert_eq!(
            parse_ledger("a,\"open\r\n"),
            Err(LedgerCsvError::UnterminatedQuote(1))
        );
        assert_eq!(
            parse_ledger("\"done\"x,b\r\n"),
            Err(LedgerCsvError::TrailingCharacters(1))
        );
    }
}
