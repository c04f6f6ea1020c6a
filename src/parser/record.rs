use crate::{parse_ttl, split_fields, SyntaxErrorKind};
use serde::{Deserialize, Serialize};

/// Class mnemonics recognised in the class position of a record.
pub const CLASSES: [&str; 5] = ["IN", "CH", "HS", "NONE", "ANY"];

pub fn is_class(token: &str) -> bool {
    CLASSES.iter().any(|c| c.eq_ignore_ascii_case(token))
}

/// One resource record as written in the master file. The rdata is kept as
/// text: fields joined by single spaces, comments and parentheses removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub ttl: u32,
    pub class: String,
    #[serde(rename = "type")]
    pub rtype: String,
    pub rdata: String,
    /// `$ORIGIN` in force when the record was read.
    pub origin: String,
}

/// Owner, TTL and class carried from one record to the next.
#[derive(Debug, Default, Clone)]
pub struct CarryOver {
    pub name: Option<String>,
    pub ttl: Option<u32>,
    pub class: Option<String>,
}

/// Zone-wide values a record falls back on.
#[derive(Debug, Clone, Copy)]
pub struct Defaults<'a> {
    pub origin: &'a str,
    pub ttl: u32,
    pub class: &'a str,
}

/// Expands `@`, relative and absolute owner names against `origin`.
///
/// With no origin set, relative names are returned as written and `@` becomes
/// the empty name.
pub fn resolve_name(token: &str, origin: &str) -> String {
    if token == "@" {
        origin.to_string()
    } else if token.ends_with('.') || origin.is_empty() {
        token.to_string()
    } else {
        format!("{}.{}", token, origin)
    }
}

/// The leading name/TTL/class/type fields of a record.
#[derive(Debug, Default, PartialEq, Eq)]
struct Header {
    name: Option<String>,
    ttl: Option<u32>,
    class: Option<String>,
    rtype: String,
}

impl Header {
    /// Classifies the leading fields in the order name, TTL, class, type and
    /// returns the header with the number of fields it consumed.
    fn parse(
        fields: &[String],
        inherit_owner: bool,
        origin: &str,
    ) -> Result<(Self, usize), SyntaxErrorKind> {
        let mut header = Header::default();
        let mut idx = 0;

        if !inherit_owner {
            header.name = Some(resolve_name(&fields[idx], origin));
            idx += 1;
        }

        if let Some(ttl) = fields.get(idx).and_then(|f| parse_ttl(f).ok()) {
            header.ttl = Some(ttl);
            idx += 1;
        }

        if let Some(class) = fields.get(idx).filter(|f| is_class(f)) {
            header.class = Some(class.to_ascii_uppercase());
            idx += 1;
        }

        match fields.get(idx) {
            Some(rtype) => header.rtype = rtype.to_ascii_uppercase(),
            None => return Err(SyntaxErrorKind::MissingType),
        }

        Ok((header, idx + 1))
    }
}

impl Record {
    /// Builds a record from one logical line that has already had its
    /// comments and parentheses removed.
    ///
    /// `inherit_owner` is set when the line started with whitespace, in which
    /// case the first field is not a name. The carry-over state is updated
    /// with whatever the line sets explicitly.
    pub fn assemble(
        line: &str,
        inherit_owner: bool,
        carry: &mut CarryOver,
        defaults: Defaults<'_>,
    ) -> Result<Self, SyntaxErrorKind> {
        let fields = split_fields(line);
        if fields.len() < 2 {
            return Err(SyntaxErrorKind::TooFewFields);
        }

        let (header, used) = Header::parse(&fields, inherit_owner, defaults.origin)?;

        if let Some(name) = header.name {
            carry.name = Some(name);
        }
        if let Some(ttl) = header.ttl {
            carry.ttl = Some(ttl);
        }
        if let Some(class) = header.class {
            carry.class = Some(class);
        }

        Ok(Record {
            name: carry.name.clone().unwrap_or_default(),
            ttl: carry.ttl.unwrap_or(defaults.ttl),
            class: carry
                .class
                .clone()
                .unwrap_or_else(|| defaults.class.to_string()),
            rtype: header.rtype,
            rdata: fields[used..].join(" "),
            origin: defaults.origin.to_string(),
        })
    }
}
