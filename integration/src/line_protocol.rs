//! The generic line-oriented connector (§6): a newline-terminated,
//! request-response protocol over a byte stream, with `EOF` as the
//! end-of-stream sentinel on both directions.
//!
//! Concrete feeds plug a parse or format function into
//! [`LineInboundConnector`]/[`LineOutboundConnector`]; the transport itself
//! (buffered reader/writer, file-name handshake, `success` acknowledgement)
//! is shared.

use backoffice_fabric::{error::BackOfficeError, SyncShutdown};
use std::io::{BufRead, Write};

const EOF_SENTINEL: &str = "EOF";

/// Reads one record per line from `reader`, handing each non-`EOF` line to
/// `parse`. Returns `Ok(None)` once the `EOF` sentinel is read.
pub struct LineInboundConnector<R, V> {
    reader: R,
    feed: &'static str,
    parse: Box<dyn FnMut(&str) -> Result<V, BackOfficeError>>,
}

impl<R, V> LineInboundConnector<R, V>
where
    R: BufRead,
{
    pub fn new(
        reader: R,
        feed: &'static str,
        parse: impl FnMut(&str) -> Result<V, BackOfficeError> + 'static,
    ) -> Self {
        Self {
            reader,
            feed,
            parse: Box::new(parse),
        }
    }
}

impl<R, V> backoffice_fabric::InboundConnector<V> for LineInboundConnector<R, V>
where
    R: BufRead,
{
    fn next_record(&mut self) -> Result<Option<V>, BackOfficeError> {
        let mut line = String::new();
        let bytes_read = self.reader.read_line(&mut line).map_err(|err| {
            tracing::error!(feed = self.feed, %err, "inbound transport failure");
            BackOfficeError::Transport(err.to_string())
        })?;

        if bytes_read == 0 {
            return Ok(None);
        }
        let line = line.trim_end_matches(['\n', '\r']);
        if line == EOF_SENTINEL {
            return Ok(None);
        }

        (self.parse)(line).map(Some)
    }
}

/// Writes one formatted line per published value to `writer`, followed by
/// the `EOF` sentinel on [`SyncShutdown::shutdown`].
pub struct LineOutboundConnector<W, V> {
    writer: W,
    format: Box<dyn FnMut(&V) -> String>,
    shutdown: bool,
}

impl<W, V> LineOutboundConnector<W, V>
where
    W: Write,
{
    pub fn new(writer: W, format: impl FnMut(&V) -> String + 'static) -> Self {
        Self {
            writer,
            format: Box::new(format),
            shutdown: false,
        }
    }
}

impl<W, V> backoffice_fabric::OutboundConnector<V> for LineOutboundConnector<W, V>
where
    W: Write,
{
    fn publish(&mut self, value: &V) -> Result<(), BackOfficeError> {
        let line = (self.format)(value);
        writeln!(self.writer, "{line}").map_err(|err| BackOfficeError::Transport(err.to_string()))
    }
}

impl<W, V> SyncShutdown for LineOutboundConnector<W, V>
where
    W: Write,
{
    type Result = Result<(), BackOfficeError>;

    fn shutdown(&mut self) -> Self::Result {
        if self.shutdown {
            return Ok(());
        }
        self.shutdown = true;
        writeln!(self.writer, "{EOF_SENTINEL}")
            .map_err(|err| BackOfficeError::Transport(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backoffice_fabric::InboundConnector;
    use std::io::Cursor;

    #[test]
    fn inbound_stops_at_eof_sentinel() {
        let data = "a\nb\nEOF\n";
        let mut connector: LineInboundConnector<_, String> =
            LineInboundConnector::new(Cursor::new(data), "test", |line| Ok(line.to_string()));

        assert_eq!(connector.next_record().unwrap(), Some("a".to_string()));
        assert_eq!(connector.next_record().unwrap(), Some("b".to_string()));
        assert_eq!(connector.next_record().unwrap(), None);
    }

    #[test]
    fn outbound_writes_formatted_lines_then_eof() {
        let buf: Vec<u8> = Vec::new();
        let mut connector: LineOutboundConnector<_, u32> =
            LineOutboundConnector::new(buf, |v: &u32| format!("value={v}"));

        connector.publish(&1).unwrap();
        connector.publish(&2).unwrap();
        connector.shutdown().unwrap();

        let written = String::from_utf8(connector.writer).unwrap();
        assert_eq!(written, "value=1\nvalue=2\nEOF\n");
    }
}
