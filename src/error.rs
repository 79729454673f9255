use std::fmt;
use std::sync::Arc;

use crate::state::{Located, State};

/// A single point of failure: where it happened, what was expected there, and
/// the context regions (outermost first) that were active
#[derive(Debug, Clone, PartialEq)]
pub struct DeadEnd<C, X> {
    pub row: usize,
    pub col: usize,
    pub problem: X,
    pub context_stack: Vec<Located<C>>,
}

impl<C, X: fmt::Display> fmt::Display for DeadEnd<C, X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}: {}", self.row, self.col, self.problem)
    }
}

/// Persistent multiset of dead ends.
///
/// Appending only allocates a new node, so accumulating failures across many
/// alternatives stays linear. The tree is flattened once, at the end of a run.
#[derive(Debug)]
pub enum Bag<C, X> {
    Empty,
    AddRight(Arc<Bag<C, X>>, Arc<DeadEnd<C, X>>),
    Append(Arc<Bag<C, X>>, Arc<Bag<C, X>>),
}

impl<C, X> Clone for Bag<C, X> {
    fn clone(&self) -> Self {
        match self {
            Bag::Empty => Bag::Empty,
            Bag::AddRight(bag, dead_end) => Bag::AddRight(Arc::clone(bag), Arc::clone(dead_end)),
            Bag::Append(left, right) => Bag::Append(Arc::clone(left), Arc::clone(right)),
        }
    }
}

enum Work<'a, C, X> {
    Bag(&'a Bag<C, X>),
    Item(&'a DeadEnd<C, X>),
}

impl<C, X> Bag<C, X> {
    pub fn empty() -> Self {
        Bag::Empty
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Bag::Empty)
    }

    pub fn add_right(self, dead_end: DeadEnd<C, X>) -> Self {
        Bag::AddRight(Arc::new(self), Arc::new(dead_end))
    }

    /// Concatenate two bags; `self` comes first when flattened
    pub fn append(self, other: Bag<C, X>) -> Self {
        match (self, other) {
            (Bag::Empty, other) => other,
            (this, Bag::Empty) => this,
            (this, other) => Bag::Append(Arc::new(this), Arc::new(other)),
        }
    }
}

impl<C: Clone, X> Bag<C, X> {
    /// A bag holding one dead end at the state's position and context
    pub fn from_state(state: &State<C>, problem: X) -> Self {
        Self::from_info(state.row(), state.col(), problem, state)
    }

    /// A bag holding one dead end at an explicit position, with the state's context
    pub fn from_info(row: usize, col: usize, problem: X, state: &State<C>) -> Self {
        Bag::Empty.add_right(DeadEnd {
            row,
            col,
            problem,
            context_stack: state.context().iter().cloned().collect(),
        })
    }
}

impl<C: Clone, X: Clone> Bag<C, X> {
    /// Flatten into a list: left side of an append first, an added dead end
    /// after the bag it was added to
    pub fn to_list(&self) -> Vec<DeadEnd<C, X>> {
        let mut dead_ends = Vec::new();
        let mut work = vec![Work::Bag(self)];

        while let Some(next) = work.pop() {
            match next {
                Work::Item(dead_end) => dead_ends.push(dead_end.clone()),
                Work::Bag(Bag::Empty) => {}
                Work::Bag(Bag::AddRight(bag, dead_end)) => {
                    work.push(Work::Item(dead_end));
                    work.push(Work::Bag(bag));
                }
                Work::Bag(Bag::Append(left, right)) => {
                    work.push(Work::Bag(right));
                    work.push(Work::Bag(left));
                }
            }
        }

        dead_ends
    }
}

/// Render up to two lines of context on each side of `row`, marking the
/// failing line and pointing at `col`.
///
/// Columns count characters, so the pointer lines up for single-width text.
pub fn render(source: &str, row: usize, col: usize) -> String {
    let mut lines = Vec::new();

    for (index, line) in source.split('\n').enumerate() {
        let number = index + 1;
        if number + 2 < row || number > row + 2 {
            continue;
        }

        let prefix = if number == row {
            format!("  > {} | ", number)
        } else {
            format!("    {} | ", number)
        };
        lines.push(format!("{}{}", prefix, line));

        if number == row {
            let pointer_offset = prefix.len() + col.saturating_sub(1);
            lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
        }
    }

    lines.join("\n")
}
