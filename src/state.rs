use std::sync::Arc;

use crate::scanner;

/// Marks where a named context region began
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located<C> {
    pub row: usize,
    pub col: usize,
    pub context: C,
}

/// One record of the execution trace: the text a context region consumed and
/// the context stack (outermost first) that was active for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEntry<C> {
    pub consumed: String,
    pub context: Vec<Located<C>>,
}

/// The execution trace, most recent entry first
pub type Trace<C> = im::Vector<TraceEntry<C>>;

/// The record threaded through every parser.
///
/// States are values: every combinator hands back a new state instead of
/// mutating the one it received. Cloning is O(1) because the source is shared
/// and the context stack and trace are persistent vectors.
#[derive(Debug)]
pub struct State<C: Clone> {
    source: Arc<[u16]>,
    offset: usize,
    row: usize,
    col: usize,
    indent: usize,
    context: im::Vector<Located<C>>,
    trace: Trace<C>,
}

impl<C: Clone> Clone for State<C> {
    fn clone(&self) -> Self {
        State {
            source: Arc::clone(&self.source),
            offset: self.offset,
            row: self.row,
            col: self.col,
            indent: self.indent,
            context: self.context.clone(),
            trace: self.trace.clone(),
        }
    }
}

impl<C: Clone> State<C> {
    /// Fresh state at the start of `source`
    pub fn new(source: &str) -> Self {
        State {
            source: source.encode_utf16().collect(),
            offset: 0,
            row: 1,
            col: 1,
            indent: 1,
            context: im::Vector::new(),
            trace: im::Vector::new(),
        }
    }

    pub fn source(&self) -> &[u16] {
        &self.source
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Active context regions, outermost first
    pub fn context(&self) -> &im::Vector<Located<C>> {
        &self.context
    }

    pub fn trace(&self) -> &Trace<C> {
        &self.trace
    }

    pub fn into_trace(self) -> Trace<C> {
        self.trace
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Decode the code units between two offsets
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.source.len());
        let start = start.min(end);
        String::from_utf16_lossy(&self.source[start..end])
    }

    /// Move to a new position. The caller guarantees `row`/`col` describe `offset`.
    pub fn advance(mut self, offset: usize, row: usize, col: usize) -> Self {
        self.offset = offset;
        self.row = row;
        self.col = col;
        self
    }

    /// Move forward on the current row; only valid when no newline or wide
    /// character lies between the current offset and `offset`
    pub fn bump_offset(self, offset: usize) -> Self {
        let col = self.col + (offset - self.offset);
        let row = self.row;
        self.advance(offset, row, col)
    }

    /// Apply a single-character scan result
    pub fn chomp_char(self, step: scanner::SubChar) -> Self {
        match step {
            scanner::SubChar::Miss => self,
            scanner::SubChar::Newline => {
                let (offset, row) = (self.offset + 1, self.row + 1);
                self.advance(offset, row, 1)
            }
            scanner::SubChar::Next(offset) => {
                let (row, col) = (self.row, self.col + 1);
                self.advance(offset, row, col)
            }
        }
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_context(mut self, context: im::Vector<Located<C>>) -> Self {
        self.context = context;
        self
    }

    /// Enter a context region at the current position
    pub fn push_context(mut self, context: C) -> Self {
        self.context.push_back(Located {
            row: self.row,
            col: self.col,
            context,
        });
        self
    }

    pub fn record_trace(mut self, entry: TraceEntry<C>) -> Self {
        self.trace.push_front(entry);
        self
    }
}
