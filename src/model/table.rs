//! Parsed view over a results CSV blob.
//!
//! The service's CSV is positional: row 0 is the header, column 0 the email,
//! column 2 the exists flag. [`ResultsTable`] borrows the blob and exposes
//! rows without copying; exports keep the original row text byte-for-byte.
//!
//! Field access is RFC 4180 quote-aware because the service quotes fields
//! containing commas (messages like "Domain does not exist, ..."). A naive
//! positional split would desynchronize columns on such rows.

/// A single data row of the results table, borrowing the original line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultRow<'a> {
    raw: &'a str,
}

impl<'a> ResultRow<'a> {
    /// The original line text, unchanged (including any trailing `\r`).
    #[must_use]
    pub const fn raw(&self) -> &'a str {
        self.raw
    }

    /// Extract the field at `index`, unescaping quotes.
    ///
    /// Returns `None` when the row has fewer fields. The caller trims:
    /// rows from the `/validate` endpoint carry a trailing `\r` on the
    /// last field.
    #[must_use]
    pub fn field(&self, index: usize) -> Option<String> {
        split_fields(self.raw).into_iter().nth(index)
    }

    /// The email address (column 0).
    #[must_use]
    pub fn email(&self) -> Option<String> {
        self.field(super::COL_EMAIL)
            .map(|f| f.trim().to_string())
    }

    /// Whether the exists flag (column 2) is the literal `true` after
    /// trimming. Any other value, or a missing column, counts as false.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.field(super::COL_EXISTS)
            .is_some_and(|f| f.trim() == "true")
    }
}

/// Read-only view over a results CSV blob: header plus data rows.
///
/// Empty and whitespace-only lines are discarded; everything else is kept
/// verbatim. The table never mutates its input.
#[derive(Debug, Clone)]
pub struct ResultsTable<'a> {
    header: &'a str,
    rows: Vec<ResultRow<'a>>,
}

impl<'a> ResultsTable<'a> {
    /// Parse a CSV blob into header and data rows.
    #[must_use]
    pub fn parse(csv_data: &'a str) -> Self {
        let mut lines = csv_data.split('\n');
        let header = lines.next().unwrap_or("");
        let rows = lines
            .filter(|line| !line.trim().is_empty())
            .map(|raw| ResultRow { raw })
            .collect();
        Self { header, rows }
    }

    /// The header row, verbatim.
    #[must_use]
    pub const fn header(&self) -> &'a str {
        self.header
    }

    /// The non-blank data rows, in input order.
    #[must_use]
    pub fn rows(&self) -> &[ResultRow<'a>] {
        &self.rows
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no data rows (header only).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Split a CSV line into fields, honoring RFC 4180 double quoting.
///
/// A field wrapped in double quotes may contain commas; `""` inside a
/// quoted field unescapes to a single quote. Unquoted fields are returned
/// as-is, so plain positional rows behave like a straight comma split.
#[must_use]
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if current.is_empty() => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_row() {
        assert_eq!(
            split_fields("a@x.com,true,true,ok"),
            vec!["a@x.com", "true", "true", "ok"]
        );
    }

    #[test]
    fn test_split_quoted_comma() {
        assert_eq!(
            split_fields("a@x.com,false,false,\"no MX, domain gone\""),
            vec!["a@x.com", "false", "false", "no MX, domain gone"]
        );
    }

    #[test]
    fn test_split_escaped_quote() {
        assert_eq!(
            split_fields("\"he said \"\"hi\"\"\",x"),
            vec!["he said \"hi\"", "x"]
        );
    }

    #[test]
    fn test_split_empty_fields() {
        assert_eq!(split_fields("a,,c"), vec!["a", "", "c"]);
        assert_eq!(split_fields(""), vec![""]);
    }

    #[test]
    fn test_parse_skips_blank_rows() {
        let table = ResultsTable::parse("Email,Valid,Exists,Message\na@x.com,true,true,ok\n\n  \n");
        assert_eq!(table.header(), "Email,Valid,Exists,Message");
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].raw(), "a@x.com,true,true,ok");
    }

    #[test]
    fn test_parse_header_only() {
        let table = ResultsTable::parse("Email,Valid,Exists,Message\n");
        assert!(table.is_empty());
        assert_eq!(table.header(), "Email,Valid,Exists,Message");
    }

    #[test]
    fn test_exists_flag_trims_crlf() {
        // /validate responses use CRLF line endings
        let table =
            ResultsTable::parse("Email,Valid,Exists,Message\r\na@x.com,true,true,ok\r\nb@x.com,true,false,no\r\n");
        assert!(table.rows()[0].exists());
        assert!(!table.rows()[1].exists());
        assert_eq!(table.rows()[0].email().as_deref(), Some("a@x.com"));
    }

    #[test]
    fn test_exists_false_when_column_missing() {
        let table = ResultsTable::parse("Email,Valid,Exists,Message\nmalformed-row\n");
        assert!(!table.rows()[0].exists());
    }

    #[test]
    fn test_quoted_email_extraction() {
        let table = ResultsTable::parse(
            "Email,Valid,Exists,Message\n\"odd,addr\"@x.com,true,true,ok\n",
        );
        // Quoted local part keeps its comma intact
        assert_eq!(table.rows()[0].email().as_deref(), Some("odd,addr@x.com"));
        assert!(table.rows()[0].exists());
    }
}
