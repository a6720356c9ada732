use crate::tui::theme::{Component, Theme};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use similar::{Algorithm, DiffTag, capture_diff_slices};
use unicode_width::UnicodeWidthChar;

/// One run of a word diff. Unchanged runs have both flags unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSegment {
    pub value: String,
    pub added: bool,
    pub removed: bool,
}

impl DiffSegment {
    pub fn unchanged(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            added: false,
            removed: false,
        }
    }

    pub fn added(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            added: true,
            removed: false,
        }
    }

    pub fn removed(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            added: false,
            removed: true,
        }
    }

    fn same_kind(&self, other: &Self) -> bool {
        self.added == other.added && self.removed == other.removed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordDiffOptions {
    pub ignore_case: bool,
}

impl Default for WordDiffOptions {
    fn default() -> Self {
        Self { ignore_case: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenClass {
    Word,
    Space,
    Newline,
    Symbol,
}

impl TokenClass {
    fn of(ch: char) -> Self {
        if ch == '\n' {
            TokenClass::Newline
        } else if ch.is_whitespace() {
            TokenClass::Space
        } else if ch.is_alphanumeric() || ch == '_' {
            TokenClass::Word
        } else {
            TokenClass::Symbol
        }
    }

    fn extends_run(self) -> bool {
        matches!(self, TokenClass::Word | TokenClass::Space)
    }
}

/// Split text into words, whitespace runs, newlines and single symbols.
fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut current: Option<TokenClass> = None;

    for (idx, ch) in text.char_indices() {
        let class = TokenClass::of(ch);
        if let Some(prev) = current {
            if prev != class || !class.extends_run() {
                tokens.push(&text[start..idx]);
                start = idx;
            }
        }
        current = Some(class);
    }

    if start < text.len() {
        tokens.push(&text[start..]);
    }
    tokens
}

fn push_segment(segments: &mut Vec<DiffSegment>, segment: DiffSegment) {
    if segment.value.is_empty() {
        return;
    }
    match segments.last_mut() {
        Some(last) if last.same_kind(&segment) => last.value.push_str(&segment.value),
        _ => segments.push(segment),
    }
}

/// Word-level diff of `old` against `new`.
///
/// Unchanged runs carry the text of `new`, so a case-only edit shows the new
/// casing when `ignore_case` is set.
pub fn diff_words(old: &str, new: &str, options: WordDiffOptions) -> Vec<DiffSegment> {
    let old_tokens = tokenize(old);
    let new_tokens = tokenize(new);

    let key = |token: &&str| {
        if options.ignore_case {
            token.to_lowercase()
        } else {
            (*token).to_string()
        }
    };
    let old_keys: Vec<String> = old_tokens.iter().map(key).collect();
    let new_keys: Vec<String> = new_tokens.iter().map(key).collect();

    let mut segments = Vec::new();
    for op in capture_diff_slices(Algorithm::Myers, &old_keys, &new_keys) {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => push_segment(
                &mut segments,
                DiffSegment::unchanged(new_tokens[new_range].concat()),
            ),
            DiffTag::Delete => push_segment(
                &mut segments,
                DiffSegment::removed(old_tokens[old_range].concat()),
            ),
            DiffTag::Insert => push_segment(
                &mut segments,
                DiffSegment::added(new_tokens[new_range].concat()),
            ),
            DiffTag::Replace => {
                push_segment(
                    &mut segments,
                    DiffSegment::removed(old_tokens[old_range].concat()),
                );
                push_segment(
                    &mut segments,
                    DiffSegment::added(new_tokens[new_range].concat()),
                );
            }
        }
    }

    segments
}

/// Renders a word diff as styled inline runs.
pub struct WordDiffWidget<'a> {
    old: &'a str,
    new: &'a str,
    theme: &'a Theme,
    options: WordDiffOptions,
    wrap_width: usize,
    max_lines: Option<usize>,
}

impl<'a> WordDiffWidget<'a> {
    pub fn new(old: &'a str, new: &'a str, theme: &'a Theme) -> Self {
        Self {
            old,
            new,
            theme,
            options: WordDiffOptions::default(),
            wrap_width: 80,
            max_lines: None,
        }
    }

    pub fn with_options(mut self, options: WordDiffOptions) -> Self {
        self.options = options;
        self
    }

    /// A width of 0 disables wrapping
    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width;
        self
    }

    pub fn with_max_lines(mut self, max: Option<usize>) -> Self {
        self.max_lines = max;
        self
    }

    pub fn segments(&self) -> Vec<DiffSegment> {
        diff_words(self.old, self.new, self.options)
    }

    fn segment_style(&self, segment: &DiffSegment) -> Style {
        if segment.added {
            self.theme.style(Component::CodeAddition)
        } else if segment.removed {
            self.theme
                .style(Component::CodeDeletion)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            self.theme.text()
        }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        // Split segments into logical lines, keeping each run's style
        let mut logical: Vec<Vec<Span<'static>>> = vec![Vec::new()];
        for segment in self.segments() {
            let style = self.segment_style(&segment);
            for (i, piece) in segment.value.split('\n').enumerate() {
                if i > 0 {
                    logical.push(Vec::new());
                }
                if !piece.is_empty() {
                    if let Some(line) = logical.last_mut() {
                        line.push(Span::styled(piece.to_string(), style));
                    }
                }
            }
        }

        // Text ending in a newline leaves an empty trailing line
        if logical.last().is_some_and(Vec::is_empty) {
            logical.pop();
        }

        let mut lines: Vec<Line<'static>> = logical
            .into_iter()
            .flat_map(|spans| wrap_spans(spans, self.wrap_width))
            .collect();

        if let Some(max) = self.max_lines {
            if lines.len() > max {
                let remaining = lines.len() - max;
                lines.truncate(max);
                lines.push(Line::from(Span::styled(
                    format!("... ({remaining} more lines)"),
                    self.theme.dim_text().add_modifier(Modifier::ITALIC),
                )));
            }
        }

        lines
    }
}

/// Hard-wrap a row of spans by display width without losing span styles.
fn wrap_spans(spans: Vec<Span<'static>>, width: usize) -> Vec<Line<'static>> {
    let width = if width == 0 { usize::MAX } else { width };
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0usize;

    for span in spans {
        let style = span.style;
        let mut chunk = String::new();
        for ch in span.content.chars() {
            let w = ch.width().unwrap_or(0);
            if used > 0 && used + w > width {
                if !chunk.is_empty() {
                    current.push(Span::styled(std::mem::take(&mut chunk), style));
                }
                lines.push(Line::from(std::mem::take(&mut current)));
                used = 0;
            }
            chunk.push(ch);
            used += w;
        }
        if !chunk.is_empty() {
            current.push(Span::styled(chunk, style));
        }
    }

    lines.push(Line::from(current));
    lines
}
