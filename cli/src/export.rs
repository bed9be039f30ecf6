//! Export of the result rows to a file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;

use hosthunter_common::network::record::AddressRecord;

use crate::terminal::table::HEADERS;

/// File name used when `-o` is given without a value.
pub const DEFAULT_OUTPUT: &str = "output.csv";

const HTML_TITLE: &str = "HostHunter Results";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xml,
    Html,
}

impl ExportFormat {
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(ExportFormat::Csv),
            "json" => Some(ExportFormat::Json),
            "xml" => Some(ExportFormat::Xml),
            "html" | "htm" => Some(ExportFormat::Html),
            _ => None,
        }
    }

    /// An explicit choice wins, then the extension, then CSV.
    pub fn resolve(explicit: Option<Self>, path: &Path) -> Self {
        explicit
            .or_else(|| Self::from_extension(path))
            .unwrap_or(ExportFormat::Csv)
    }
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    ip: &'a str,
    status: &'a str,
    hostname: &'a str,
}

impl<'a> From<&'a AddressRecord> for JsonRecord<'a> {
    fn from(record: &'a AddressRecord) -> Self {
        let [ip, status, hostname] = record.columns();
        Self { ip, status, hostname }
    }
}

pub struct Exporter;

impl Exporter {
    /// Writes all records to `path`, returning how many rows were written.
    pub fn export(path: &Path, format: ExportFormat, records: &[AddressRecord]) -> std::io::Result<usize> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        match format {
            ExportFormat::Csv => write_csv(&mut writer, records)?,
            ExportFormat::Json => write_json(&mut writer, records)?,
            ExportFormat::Xml => write_xml(&mut writer, records)?,
            ExportFormat::Html => write_html(&mut writer, records)?,
        }

        writer.flush()?;
        Ok(records.len())
    }
}

pub fn write_csv<W: Write>(writer: &mut W, records: &[AddressRecord]) -> std::io::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADERS)?;

    for record in records {
        csv_writer.write_record(record.columns())?;
    }

    csv_writer.flush()
}

pub fn write_json<W: Write>(writer: &mut W, records: &[AddressRecord]) -> std::io::Result<()> {
    let rows: Vec<JsonRecord<'_>> = records.iter().map(JsonRecord::from).collect();
    serde_json::to_writer_pretty(&mut *writer, &rows)?;
    writeln!(writer)
}

pub fn write_xml<W: Write>(writer: &mut W, records: &[AddressRecord]) -> std::io::Result<()> {
    writeln!(writer, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(writer, "<results>")?;

    for record in records {
        let [ip, status, hostname] = record.columns().map(escape_markup);
        writeln!(writer, "  <result>")?;
        writeln!(writer, "    <ip>{ip}</ip>")?;
        writeln!(writer, "    <status>{status}</status>")?;
        writeln!(writer, "    <hostname>{hostname}</hostname>")?;
        writeln!(writer, "  </result>")?;
    }

    writeln!(writer, "</results>")
}

pub fn write_html<W: Write>(writer: &mut W, records: &[AddressRecord]) -> std::io::Result<()> {
    writeln!(writer, "<!DOCTYPE html>")?;
    writeln!(writer, r#"<html lang="en">"#)?;
    writeln!(writer, "<head>")?;
    writeln!(writer, r#"  <meta charset="UTF-8">"#)?;
    writeln!(writer, "  <title>{HTML_TITLE}</title>")?;
    writeln!(writer, "  <style>")?;
    writeln!(writer, "    body {{ font-family: Arial, sans-serif; }}")?;
    writeln!(writer, "    table {{ width: 100%; border-collapse: collapse; }}")?;
    writeln!(writer, "    th, td {{ padding: 8px 12px; border: 1px solid #ddd; text-align: left; }}")?;
    writeln!(writer, "    th {{ background-color: #f4f4f4; }}")?;
    writeln!(writer, "  </style>")?;
    writeln!(writer, "</head>")?;
    writeln!(writer, "<body>")?;
    writeln!(writer, "  <h1>{HTML_TITLE}</h1>")?;
    writeln!(writer, "  <table>")?;

    let head: Vec<String> = HEADERS.iter().map(|h| format!("<th>{}</th>", escape_markup(h))).collect();
    writeln!(writer, "    <thead><tr>{}</tr></thead>", head.concat())?;

    writeln!(writer, "    <tbody>")?;
    for record in records {
        let cells: Vec<String> = record
            .columns()
            .iter()
            .map(|v| format!("<td>{}</td>", escape_markup(v)))
            .collect();
        writeln!(writer, "      <tr>{}</tr>", cells.concat())?;
    }
    writeln!(writer, "    </tbody>")?;

    writeln!(writer, "  </table>")?;
    writeln!(writer, "</body>")?;
    writeln!(writer, "</html>")
}

/// Escapes text for use in XML and HTML element content.
fn escape_markup(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hosthunter_common::network::record::Outcome;
    use tempfile::tempdir;

    fn sample() -> Vec<AddressRecord> {
        vec![
            AddressRecord::new("8.8.8.8", Outcome::Resolved("dns.google".into())),
            AddressRecord::new("192.168.1.1", Outcome::Unresolved),
            AddressRecord::new("999.1.1.1", Outcome::Invalid),
            AddressRecord::new("weird, \"quoted\"", Outcome::Invalid),
        ]
    }

    fn markup_sample() -> Vec<AddressRecord> {
        vec![
            AddressRecord::new("8.8.8.8", Outcome::Resolved("dns.google".into())),
            AddressRecord::new("<b>&'x'", Outcome::Invalid),
        ]
    }

    #[test]
    fn test_export_csv_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let records = sample();

        let written = Exporter::export(&path, ExportFormat::Csv, &records).unwrap();
        assert_eq!(written, records.len());

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(reader.headers().unwrap(), &csv::StringRecord::from(HEADERS.to_vec()));

        let rows: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows.len(), records.len());
        for (row, record) in rows.iter().zip(&records) {
            assert_eq!(row, &csv::StringRecord::from(record.columns().to_vec()));
        }
    }

    #[test]
    fn test_csv_escaping() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &sample()).unwrap();
        let content = String::from_utf8(buf).unwrap();

        assert!(content.starts_with("IP Address,Status,Hostname\n"));
        assert!(content.contains("192.168.1.1,Failed,No hostname found\n"));
        assert!(content.contains("\"weird, \"\"quoted\"\"\",Invalid,N/A\n"));
    }

    #[test]
    fn test_export_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");

        Exporter::export(&path, ExportFormat::Json, &sample()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value[0]["ip"], "8.8.8.8");
        assert_eq!(value[0]["status"], "Success");
        assert_eq!(value[0]["hostname"], "dns.google");
        assert_eq!(value[2]["status"], "Invalid");
        assert_eq!(value[2]["hostname"], "N/A");
        assert_eq!(value.as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_export_xml() {
        let mut buf = Vec::new();
        write_xml(&mut buf, &markup_sample()).unwrap();
        let content = String::from_utf8(buf).unwrap();

        assert!(content.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<results>\n"));
        assert!(content.contains(
            "  <result>\n    <ip>8.8.8.8</ip>\n    <status>Success</status>\n    <hostname>dns.google</hostname>\n  </result>\n"
        ));
        assert!(content.contains("<ip>&lt;b&gt;&amp;&#39;x&#39;</ip>"));
        assert!(content.contains("<hostname>N/A</hostname>"));
        assert_eq!(content.matches("<result>").count(), 2);
        assert!(content.ends_with("</results>\n"));
    }

    #[test]
    fn test_export_html() {
        let mut buf = Vec::new();
        write_html(&mut buf, &markup_sample()).unwrap();
        let content = String::from_utf8(buf).unwrap();

        assert!(content.starts_with("<!DOCTYPE html>\n"));
        assert!(content.contains("<title>HostHunter Results</title>"));
        assert!(content.contains("<thead><tr><th>IP Address</th><th>Status</th><th>Hostname</th></tr></thead>"));
        assert!(content.contains("<tr><td>8.8.8.8</td><td>Success</td><td>dns.google</td></tr>"));
        assert!(content.contains("<tr><td>&lt;b&gt;&amp;&#39;x&#39;</td><td>Invalid</td><td>N/A</td></tr>"));
        assert!(!content.contains("<b>"));
    }

    #[test]
    fn test_markup_escaping() {
        assert_eq!(escape_markup("dns.google"), "dns.google");
        assert_eq!(escape_markup("a&b<c>\"d\"'e'"), "a&amp;b&lt;c&gt;&quot;d&quot;&#39;e&#39;");
    }

    #[test]
    fn test_export_format_resolution() {
        assert_eq!(ExportFormat::from_extension(Path::new("a.JSON")), Some(ExportFormat::Json));
        assert_eq!(ExportFormat::from_extension(Path::new("a.csv")), Some(ExportFormat::Csv));
        assert_eq!(ExportFormat::from_extension(Path::new("a.xml")), Some(ExportFormat::Xml));
        assert_eq!(ExportFormat::from_extension(Path::new("a.html")), Some(ExportFormat::Html));
        assert_eq!(ExportFormat::from_extension(Path::new("a.HTM")), Some(ExportFormat::Html));
        assert_eq!(ExportFormat::from_extension(Path::new("results")), None);

        assert_eq!(ExportFormat::resolve(None, Path::new("results.txt")), ExportFormat::Csv);
        assert_eq!(ExportFormat::resolve(None, Path::new("r.json")), ExportFormat::Json);
        assert_eq!(
            ExportFormat::resolve(Some(ExportFormat::Csv), Path::new("r.json")),
            ExportFormat::Csv
        );
        assert_eq!(
            ExportFormat::resolve(Some(ExportFormat::Html), Path::new("r.txt")),
            ExportFormat::Html
        );
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        assert!(Exporter::export(&path, ExportFormat::Csv, &sample()).is_err());
    }
}
