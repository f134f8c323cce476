//! Report rendering: aligned text table or JSON.

use anyhow::Result;
use linkscreen_core::ScreenReport;
use std::io::Write;

/// Write `report` to `out`, one line per verdict plus a summary, or as a JSON array.
pub fn write_report<W: Write>(out: &mut W, report: &ScreenReport, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
        return Ok(());
    }

    for v in report.verdicts() {
        let status = if v.safe { "SAFE" } else { "UNSAFE" };
        writeln!(out, "{:<7} {:<16} {}", status, v.reason, v.url)?;
    }
    let unsafe_count = report.unsafe_count();
    writeln!(
        out,
        "{} URL(s): {} safe, {} unsafe",
        report.len(),
        report.len() - unsafe_count,
        unsafe_count
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkscreen_core::Verdict;

    fn sample() -> ScreenReport {
        ScreenReport::new(vec![
            Verdict::reputation("https://safe-site.com", true),
            Verdict::blacklisted("https://malware.example.com"),
        ])
    }

    #[test]
    fn text_table() {
        let mut buf = Vec::new();
        write_report(&mut buf, &sample(), false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "SAFE    simulated_check  https://safe-site.com");
        assert_eq!(lines[1], "UNSAFE  blacklisted      https://malware.example.com");
        assert_eq!(lines[2], "2 URL(s): 1 safe, 1 unsafe");
    }

    #[test]
    fn json_array_in_input_order() {
        let mut buf = Vec::new();
        write_report(&mut buf, &sample(), true).unwrap();
        let parsed: Vec<Verdict> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, sample().into_verdicts());
    }

    #[test]
    fn empty_report_prints_summary_only() {
        let mut buf = Vec::new();
        write_report(&mut buf, &ScreenReport::default(), false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "0 URL(s): 0 safe, 0 unsafe\n");
    }
}
