//! Line-oriented input shared by the header parser and the body decoder.

use std::io::{self, BufRead};

/// Wraps a reader and hands out lines that carry content.
///
/// Blank lines, whitespace-only lines and `#` comments are skipped without
/// being reported; trailing `#` comments are stripped from content lines.
/// Bytes that are not valid UTF-8 become U+FFFD, so a stray Latin-1 byte
/// spoils at most the line it sits on.
pub(crate) struct LineSource<R> {
    reader: R,
    bytes: Vec<u8>,
    buf: String,
    line_number: usize,
}

impl<R: BufRead> LineSource<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader,
            bytes: Vec::new(),
            buf: String::new(),
            line_number: 0,
        }
    }

    /// Next line with content, trimmed. `None` once the stream is exhausted.
    pub(crate) fn next_content(&mut self) -> io::Result<Option<&str>> {
        loop {
            self.bytes.clear();
            if self.reader.read_until(b'\n', &mut self.bytes)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;
            self.buf.clear();
            self.buf.push_str(&String::from_utf8_lossy(&self.bytes));
            if !content(&self.buf).is_empty() {
                break;
            }
        }
        Ok(Some(content(&self.buf)))
    }

    /// 1-based number of the line most recently returned.
    pub(crate) const fn line_number(&self) -> usize {
        self.line_number
    }
}

fn content(line: &str) -> &str {
    let line = line.split_once('#').map_or(line, |(before, _)| before);
    line.trim_start_matches('\u{feff}').trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &str) -> Vec<(usize, String)> {
        collect_bytes(text.as_bytes())
    }

    fn collect_bytes(bytes: &[u8]) -> Vec<(usize, String)> {
        let mut lines = LineSource::new(bytes);
        let mut out = Vec::new();
        while let Some(line) = lines.next_content().unwrap() {
            let line = line.to_string();
            out.push((lines.line_number(), line));
        }
        out
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let lines = collect("# header comment\nOFF\n\n   \t\n4 1 0 # counts\n");
        assert_eq!(
            lines,
            vec![(2, "OFF".to_string()), (5, "4 1 0".to_string())]
        );
    }

    #[test]
    fn handles_crlf_and_missing_final_newline() {
        let lines = collect("OFF\r\n1 0 0\r\n0 0 0");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].1, "OFF");
        assert_eq!(lines[2].1, "0 0 0");
    }

    #[test]
    fn strips_byte_order_mark() {
        let lines = collect("\u{feff}OFF\n");
        assert_eq!(lines[0].1, "OFF");
    }

    #[test]
    fn invalid_utf8_is_replaced_not_fatal() {
        let lines = collect_bytes(b"OFF\n# cr\xe9\xe9 par moi\n1 0 0\n0 \xff 0\n");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], (3, "1 0 0".to_string()));
        assert_eq!(lines[2], (4, "0 \u{fffd} 0".to_string()));
    }

    #[test]
    fn trailing_comment_is_stripped() {
        let lines = collect("0 0 0 # apex\n");
        assert_eq!(lines, vec![(1, "0 0 0".to_string())]);
    }

    #[test]
    fn empty_stream() {
        assert!(collect("").is_empty());
        assert!(collect("\n\n# nothing\n").is_empty());
    }
}
