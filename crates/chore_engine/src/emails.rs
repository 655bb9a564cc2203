use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use chore_core::{extract_emails, EmailMatch};
use chore_logging::{chore_info, chore_warn, TaskLogger};

use crate::{write_artifact, ExtractSummary, TaskError};

/// Read `input`, write its unique addresses to `output`, one per line.
///
/// The output is always rewritten; when nothing is found it ends up empty.
pub fn extract_emails_to_file(
    input: &Path,
    output: &Path,
    log: &TaskLogger,
) -> Result<ExtractSummary, TaskError> {
    let content = fs::read_to_string(input).map_err(|err| match err.kind() {
        ErrorKind::NotFound => TaskError::MissingInput(input.to_path_buf()),
        _ => TaskError::io(input, err),
    })?;

    let emails = if content.trim().is_empty() {
        chore_warn!(log, "Input file is empty: {}", input.display());
        Vec::new()
    } else {
        let found = extract_emails(&content);
        if found.is_empty() {
            chore_warn!(log, "No email addresses found in {}", input.display());
        }
        found
    };

    let written = write_artifact(output, &render_lines(&emails))?;
    chore_info!(log, "Extracted {} unique email addresses", emails.len());
    chore_info!(log, "Saved to: {}", written.display());

    Ok(ExtractSummary {
        output: written,
        count: emails.len(),
    })
}

fn render_lines(emails: &[EmailMatch]) -> String {
    emails.iter().fold(String::new(), |mut out, email| {
        out.push_str(email.as_str());
        out.push('\n');
        out
    })
}
