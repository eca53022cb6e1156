// src/core/lexer.rs
// Flat markup event stream over a whole document.
// Tags are scanned quote-aware, entities are decoded, comments/doctype/PIs vanish,
// and the bodies of <script>/<style> are skipped as raw text.

use std::borrow::Cow;

use html_escape::decode_html_entities;

/// Longest `&...;` run we are willing to treat as an entity.
const MAX_ENTITY_LEN: usize = 32;

const RAW_TEXT_TAGS: &[&str] = &["script", "style"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event<'a> {
    /// Tag name is ASCII-lowercased.
    Start { name: String, self_closing: bool },
    End { name: String },
    Text(&'a str),
    /// Named entity, already decoded (`&amp;` → `&`). Unknown names stay verbatim.
    Entity(Cow<'a, str>),
    /// Numeric character reference, already decoded (`&#12354;` → `あ`).
    CharRef(Cow<'a, str>),
}

pub struct Lexer<'a> {
    s: &'a str,
    b: &'a [u8],
    i: usize,
    n: usize,
    raw_until: Option<String>,
}

impl<'a> Lexer<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, b: s.as_bytes(), i: 0, n: s.len(), raw_until: None }
    }

    #[inline]
    fn starts_with_ci(&self, at: usize, pat: &str) -> bool {
        self.b
            .get(at..at + pat.len())
            .is_some_and(|w| w.eq_ignore_ascii_case(pat.as_bytes()))
    }

    /// Index just past the `>` closing the tag opened at `from`, honoring quotes.
    fn tag_end(&self, from: usize) -> usize {
        let mut j = from;
        let mut in_s = false; // '
        let mut in_d = false; // "
        while j < self.n {
            match self.b[j] {
                b'\'' if !in_d => in_s = !in_s,
                b'"' if !in_s => in_d = !in_d,
                b'>' if !in_s && !in_d => return j + 1,
                _ => {}
            }
            j += 1;
        }
        self.n
    }

    fn find_from(&self, from: usize, pat: &str) -> Option<usize> {
        self.s.get(from..)?.find(pat).map(|p| p + from)
    }

    fn tag_name(&self, from: usize) -> (String, usize) {
        let mut j = from;
        while j < self.n && (self.b[j].is_ascii_alphanumeric() || matches!(self.b[j], b'-' | b':' | b'_')) {
            j += 1;
        }
        (self.s[from..j].to_ascii_lowercase(), j)
    }

    /// Skip everything up to (not including) the `</name` that ends a raw-text element.
    fn skip_raw_text(&mut self, name: &str) {
        let close = format!("</{name}");
        let mut j = self.i;
        while j < self.n {
            if self.b[j] == b'<' && self.starts_with_ci(j, &close) {
                self.i = j;
                return;
            }
            j += 1;
        }
        self.i = self.n;
    }

    /// Called on `<`. Returns `None` for markup that produces no event.
    fn lex_markup(&mut self) -> Option<Event<'a>> {
        let at = self.i;
        let next = self.b.get(at + 1).copied();

        match next {
            Some(b'!') => {
                self.i = if self.starts_with_ci(at, "<!--") {
                    self.find_from(at + 4, "-->").map_or(self.n, |p| p + 3)
                } else {
                    self.tag_end(at + 2)
                };
                None
            }
            Some(b'?') => {
                self.i = self.tag_end(at + 2);
                None
            }
            Some(b'/') if self.b.get(at + 2).is_some_and(u8::is_ascii_alphabetic) => {
                let (name, _) = self.tag_name(at + 2);
                self.i = self.tag_end(at + 2);
                Some(Event::End { name })
            }
            Some(c) if c.is_ascii_alphabetic() => {
                let (name, after_name) = self.tag_name(at + 1);
                let end = self.tag_end(after_name);
                let self_closing = end >= 2 && self.b[end - 1] == b'>' && self.b[end - 2] == b'/';
                self.i = end;
                if !self_closing && RAW_TEXT_TAGS.contains(&name.as_str()) {
                    self.raw_until = Some(name.clone());
                }
                Some(Event::Start { name, self_closing })
            }
            // A stray '<' is just text.
            _ => {
                self.i = at + 1;
                Some(Event::Text(&self.s[at..at + 1]))
            }
        }
    }

    /// Called on `&`. Well-formed references are decoded; anything else is literal text.
    fn lex_reference(&mut self) -> Event<'a> {
        let at = self.i;
        let limit = (at + MAX_ENTITY_LEN).min(self.n);
        let mut j = at + 1;
        while j < limit && (self.b[j].is_ascii_alphanumeric() || self.b[j] == b'#') {
            j += 1;
        }
        if j < limit && self.b[j] == b';' && j > at + 1 {
            let raw = &self.s[at..=j];
            self.i = j + 1;
            let decoded = decode_html_entities(raw);
            if raw.as_bytes()[1] == b'#' {
                Event::CharRef(decoded)
            } else {
                Event::Entity(decoded)
            }
        } else {
            self.i = at + 1;
            Event::Text(&self.s[at..at + 1])
        }
    }

    fn lex_text(&mut self) -> Event<'a> {
        let at = self.i;
        let mut j = at;
        while j < self.n && !matches!(self.b[j], b'<' | b'&') {
            j += 1;
        }
        self.i = j;
        Event::Text(&self.s[at..j])
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(name) = self.raw_until.take() {
            self.skip_raw_text(&name);
        }
        while self.i < self.n {
            match self.b[self.i] {
                b'<' => {
                    if let Some(ev) = self.lex_markup() {
                        return Some(ev);
                    }
                }
                b'&' => return Some(self.lex_reference()),
                _ => return Some(self.lex_text()),
            }
        }
        None
    }
}
