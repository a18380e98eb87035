use ariadne::{Color, Label, Report, ReportKind, Source};
use ieml::IemlError;

/// Format an IemlError for the terminal, with Ariadne for parse errors
pub fn format_error(error: &IemlError) -> String {
    match error {
        IemlError::Parse(details) => {
            let mut output = Vec::new();

            let enhanced_message = format!(
                "Parse error: {} (at {}:{}:{})",
                details.message, details.source_id, details.span.line, details.span.col
            );

            let mut report =
                Report::build(ReportKind::Error, &details.source_id, details.span.start)
                    .with_message(enhanced_message)
                    .with_label(
                        Label::new((&details.source_id, details.span.start..details.span.end))
                            .with_message("")
                            .with_color(Color::Red),
                    );

            if let Some(suggestion) = &details.suggestion {
                report = report.with_help(suggestion);
            }

            match report.finish().write(
                (
                    &details.source_id,
                    Source::from(details.source_text.as_ref()),
                ),
                &mut output,
            ) {
                Ok(_) => String::from_utf8_lossy(&output).to_string(),
                Err(_) => format!("{}", error),
            }
        }
        IemlError::InvalidTreeStructure { kind, cause } => {
            format!("Invalid {} tree: {}", kind, cause)
        }
        IemlError::SizeExceeded {
            what,
            limit,
            actual,
        } => {
            let mut message = format!(
                "Size limit exceeded: {}\n  Limit: {}\n  Actual: {}",
                what, limit, actual
            );
            if what.contains("nodes") {
                message.push_str("\n  Raise the limit with --max-nodes");
            }
            message
        }
        other => format!("{}", other),
    }
}
