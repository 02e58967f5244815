use super::config::OutputFormat;
use alnum::ResultSet;
use std::io::Write;

/// Renders `set` completely before anything is written, so a failure never
/// leaves a partial document behind.
pub fn render(set: &ResultSet, format: OutputFormat) -> alnum::Result<String> {
    match format {
        OutputFormat::Json => set.to_json(false),
        OutputFormat::Pretty => set.to_json(true),
        OutputFormat::Codes => Ok(set.codes().collect::<Vec<_>>().join("\n")),
    }
}

pub fn emit<W: Write>(mut out: W, document: &str) -> std::io::Result<()> {
    writeln!(out, "{document}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alnum::{GeneratorConfig, generate};

    fn set() -> ResultSet {
        let config = GeneratorConfig::builder().workers(5).seed(21).build().unwrap();
        generate(&config).unwrap()
    }

    #[test]
    fn codes_are_one_per_line() {
        let set = set();
        let doc = render(&set, OutputFormat::Codes).unwrap();
        let lines: Vec<_> = doc.lines().collect();
        assert_eq!(lines.len(), 5);
        for (line, record) in lines.iter().zip(set.records()) {
            assert_eq!(*line, record.code());
        }
    }

    #[test]
    fn json_formats_decode_to_the_same_set() {
        let set = set();
        for format in [OutputFormat::Json, OutputFormat::Pretty] {
            let doc = render(&set, format).unwrap();
            assert_eq!(ResultSet::from_json(&doc).unwrap(), set);
        }
        assert!(!render(&set, OutputFormat::Json).unwrap().contains('\n'));
    }

    #[test]
    fn emit_appends_newline() {
        let mut buf = Vec::new();
        emit(&mut buf, "[]").unwrap();
        assert_eq!(buf, b"[]\n");
    }
}
