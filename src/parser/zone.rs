use crate::{
    flatten_rdata, parse_ttl, CarryOver, CleanLine, Defaults, ParseOptions, ParserError, Record,
    SyntaxErrorKind,
};
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Result of parsing one master file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Value of the most recent `$ORIGIN`, empty if there was none.
    pub origin: String,
    /// Value of the most recent `$TTL`, zero if there was none.
    pub default_ttl: u32,
    /// Records in file order.
    pub records: Vec<Record>,
}

/// Parses the master file at `path` with the default, lenient options.
pub fn parse_zone<P: AsRef<Path>>(path: P) -> Result<Zone, ParserError> {
    parse_zone_with(path, &ParseOptions::default())
}

pub fn parse_zone_with<P: AsRef<Path>>(
    path: P,
    options: &ParseOptions,
) -> Result<Zone, ParserError> {
    let path = path.as_ref();
    debug!("parsing zone file {}", path.display());

    let file = File::open(path)?;
    let zone = Zone::parse_reader(BufReader::new(file), options)?;

    debug!(
        "parsed {} records from {}",
        zone.records.len(),
        path.display()
    );

    Ok(zone)
}

impl Zone {
    pub fn parse_str(input: &str, options: &ParseOptions) -> Result<Self, ParserError> {
        Zone::parse_reader(input.as_bytes(), options)
    }

    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so
    /// only real read failures surface as [`ParserError::Io`].
    pub fn parse_reader<R: BufRead>(
        mut reader: R,
        options: &ParseOptions,
    ) -> Result<Self, ParserError> {
        let mut classifier = Classifier::new(options);
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(&['\n', '\r'][..]);
            classifier.feed(line_no, line)?;
        }

        classifier.finish()
    }
}

/// A multi-line record waiting for its closing parenthesis.
#[derive(Debug)]
struct Pending {
    start: usize,
    inherit_owner: bool,
    text: String,
}

#[derive(Debug, Default)]
enum Block {
    #[default]
    Idle,
    Accumulating(Pending),
}

/// Reads physical lines, handles directives and hands each logical record to
/// [`Record::assemble`].
struct Classifier<'a> {
    options: &'a ParseOptions,
    zone: Zone,
    carry: CarryOver,
    block: Block,
}

impl<'a> Classifier<'a> {
    fn new(options: &'a ParseOptions) -> Self {
        Self {
            options,
            zone: Zone::default(),
            carry: CarryOver::default(),
            block: Block::Idle,
        }
    }

    fn feed(&mut self, line_no: usize, raw: &str) -> Result<(), ParserError> {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(';') {
            return Ok(());
        }

        self.block = match std::mem::take(&mut self.block) {
            Block::Idle => self.idle(line_no, raw, line)?,
            Block::Accumulating(mut pending) => {
                let clean = CleanLine::new(line);
                pending.text.push(' ');
                pending.text.push_str(&clean.text);

                if clean.closes {
                    debug!(
                        "multi-line record from line {} closed at line {}",
                        pending.start, line_no
                    );
                    self.emit(pending.start, &pending.text, pending.inherit_owner, true)?;
                    Block::Idle
                } else {
                    Block::Accumulating(pending)
                }
            }
        };

        Ok(())
    }

    fn idle(&mut self, line_no: usize, raw: &str, line: &str) -> Result<Block, ParserError> {
        if line.starts_with('$') {
            self.directive(line_no, line)?;
            return Ok(Block::Idle);
        }

        let inherit_owner = raw.starts_with(char::is_whitespace);
        let clean = CleanLine::new(line);

        if clean.opens_block() {
            debug!("multi-line record starts at line {}", line_no);
            return Ok(Block::Accumulating(Pending {
                start: line_no,
                inherit_owner,
                text: clean.text,
            }));
        }

        self.emit(line_no, &clean.text, inherit_owner, false)?;
        Ok(Block::Idle)
    }

    fn directive(&mut self, line_no: usize, line: &str) -> Result<(), ParserError> {
        let clean = CleanLine::new(line);
        let mut parts = clean.text.split_whitespace();
        let keyword = parts.next().unwrap_or_default();
        let argument = parts.next();

        match keyword.to_ascii_uppercase().as_str() {
            "$ORIGIN" => match argument {
                Some(origin) => {
                    debug!("line {}: origin is now {}", line_no, origin);
                    self.zone.origin = origin.to_string();
                }
                None => self.ignore(
                    line_no,
                    SyntaxErrorKind::MalformedDirective("$ORIGIN without a name".into()),
                )?,
            },
            "$TTL" => match argument.map(parse_ttl) {
                Some(Ok(ttl)) => {
                    debug!("line {}: default TTL is now {}", line_no, ttl);
                    self.zone.default_ttl = ttl;
                    self.carry.ttl = None;
                }
                Some(Err(e)) => {
                    self.ignore(line_no, SyntaxErrorKind::MalformedDirective(e.to_string()))?
                }
                None => self.ignore(
                    line_no,
                    SyntaxErrorKind::MalformedDirective("$TTL without a value".into()),
                )?,
            },
            _ => self.ignore(line_no, SyntaxErrorKind::UnknownDirective(keyword.to_string()))?,
        }

        Ok(())
    }

    /// Directive problems are only errors in strict mode.
    fn ignore(&self, line_no: usize, kind: SyntaxErrorKind) -> Result<(), ParserError> {
        if self.options.strict_directives {
            return Err(ParserError::syntax(line_no, kind));
        }

        warn!("line {}: ignoring {}", line_no, kind);
        Ok(())
    }

    fn emit(
        &mut self,
        line_no: usize,
        text: &str,
        inherit_owner: bool,
        multi_line: bool,
    ) -> Result<(), ParserError> {
        let defaults = Defaults {
            origin: &self.zone.origin,
            ttl: self.zone.default_ttl,
            class: &self.options.default_class,
        };

        let mut record = Record::assemble(text, inherit_owner, &mut self.carry, defaults)
            .map_err(|kind| ParserError::syntax(line_no, kind))?;
        if multi_line {
            record.rdata = flatten_rdata(&record.rdata);
        }

        trace!("line {}: {:?}", line_no, record);
        self.zone.records.push(record);

        Ok(())
    }

    fn finish(self) -> Result<Zone, ParserError> {
        match self.block {
            Block::Idle => Ok(self.zone),
            Block::Accumulating(pending) => Err(ParserError::syntax(
                pending.start,
                SyntaxErrorKind::UnterminatedRecord,
            )),
        }
    }
}
