/// A physical line with its comment cut off and its parentheses taken out.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CleanLine {
    pub text: String,
    /// Unquoted `(` left open at the end of the line.
    pub depth: usize,
    /// Whether an unquoted `)` appeared anywhere on the line.
    pub closes: bool,
    /// An unquoted `)` came before the first unquoted `(`.
    pub closes_first: bool,
}

impl CleanLine {
    /// Cuts the line at the first unquoted `;` and removes every unquoted
    /// parenthesis. Quotes and backslash escapes are kept for [`split_fields`].
    pub fn new(line: &str) -> Self {
        let mut out = CleanLine::default();
        let mut in_quotes = false;
        let mut escape_next = false;

        for c in line.chars() {
            if escape_next {
                out.text.push(c);
                escape_next = false;
                continue;
            }

            match c {
                '\\' => {
                    escape_next = true;
                    out.text.push(c);
                }
                '"' => {
                    in_quotes = !in_quotes;
                    out.text.push(c);
                }
                ';' if !in_quotes => break,
                '(' if !in_quotes => out.depth += 1,
                ')' if !in_quotes => {
                    if out.depth == 0 && !out.closes {
                        out.closes_first = true;
                    }
                    out.depth = out.depth.saturating_sub(1);
                    out.closes = true;
                }
                c => out.text.push(c),
            }
        }

        out
    }

    /// An opening parenthesis is still waiting for its `)` on a later line.
    /// A line that closes before it opens never starts a block.
    pub fn opens_block(&self) -> bool {
        self.depth > 0 && !self.closes_first
    }
}

/// Drops every `;`, `(` and `)` and collapses whitespace runs to one space.
/// Applied to the rdata of records joined from several lines, where quoted
/// text gets no special treatment.
pub fn flatten_rdata(rdata: &str) -> String {
    let kept: String = rdata
        .chars()
        .filter(|c| !matches!(c, ';' | '(' | ')'))
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits a record line into whitespace-separated fields.
///
/// Whitespace inside double quotes is kept. A backslash makes the next
/// character literal and is dropped, as are the quote characters.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut escape_next = false;

    for c in line.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
            continue;
        }

        match c {
            '\\' => escape_next = true,
            '"' => in_quotes = !in_quotes,
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    fields.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }

    if !current.is_empty() {
        fields.push(current);
    }

    fields
}
