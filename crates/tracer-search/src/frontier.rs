//! Pending-work containers.
//!
//! The search engine only needs four operations from its frontier, captured
//! by the [`Frontier`] trait. [`Storage`] is the stock implementation: one
//! `VecDeque` whose removal end is fixed by a [`Discipline`] chosen at
//! construction.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// Container of pending search states.
pub trait Frontier<T> {
    /// Add an item. Amortised O(1).
    fn insert(&mut self, item: T);

    /// Remove the next item according to the container's discipline.
    ///
    /// Fails with [`EmptyContainerError`] when empty; callers are expected
    /// to check [`is_empty`](Self::is_empty) first.
    fn remove(&mut self) -> Result<T, EmptyContainerError>;

    /// Whether no items are pending.
    fn is_empty(&self) -> bool;

    /// Number of pending items.
    fn len(&self) -> usize;
}

/// Order in which a [`Storage`] hands items back.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Discipline {
    /// Last in, first out (depth-first exploration).
    #[default]
    Stack,
    /// First in, first out (breadth-first exploration).
    Queue,
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discipline::Stack => write!(f, "stack"),
            Discipline::Queue => write!(f, "queue"),
        }
    }
}

impl FromStr for Discipline {
    type Err = ParseDisciplineError;

    /// Accepts the command-line flags `-s` / `-q` as well as the words
    /// `stack` / `queue` (any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "-s" | "stack" => Ok(Discipline::Stack),
            "-q" | "queue" => Ok(Discipline::Queue),
            _ => Err(ParseDisciplineError(s.to_string())),
        }
    }
}

/// Unknown storage discipline name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDisciplineError(pub String);

impl fmt::Display for ParseDisciplineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported data structure \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for ParseDisciplineError {}

/// [`Frontier::remove`] called on an empty container.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EmptyContainerError;

impl fmt::Display for EmptyContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "remove called on an empty container")
    }
}

impl std::error::Error for EmptyContainerError {}

/// A stack or a queue, decided once at construction.
#[derive(Clone, Debug)]
pub struct Storage<T> {
    discipline: Discipline,
    items: VecDeque<T>,
}

impl<T> Storage<T> {
    /// Create an empty container using `discipline`.
    pub fn new(discipline: Discipline) -> Self {
        Self {
            discipline,
            items: VecDeque::new(),
        }
    }

    /// Create an empty last-in-first-out container.
    pub fn stack() -> Self {
        Self::new(Discipline::Stack)
    }

    /// Create an empty first-in-first-out container.
    pub fn queue() -> Self {
        Self::new(Discipline::Queue)
    }

    /// The discipline this container was created with.
    pub fn discipline(&self) -> Discipline {
        self.discipline
    }
}

impl<T> Frontier<T> for Storage<T> {
    fn insert(&mut self, item: T) {
        self.items.push_back(item);
    }

    fn remove(&mut self) -> Result<T, EmptyContainerError> {
        let item = match self.discipline {
            Discipline::Stack => self.items.pop_back(),
            Discipline::Queue => self.items.pop_front(),
        };
        item.ok_or(EmptyContainerError)
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<F: Frontier<i32>>(f: &mut F) -> Vec<i32> {
        let mut out = Vec::new();
        while !f.is_empty() {
            out.push(f.remove().unwrap());
        }
        out
    }

    #[test]
    fn stack_is_lifo() {
        let mut s = Storage::stack();
        for i in 1..=4 {
            s.insert(i);
        }
        assert_eq!(s.len(), 4);
        assert_eq!(drain(&mut s), vec![4, 3, 2, 1]);
    }

    #[test]
    fn queue_is_fifo() {
        let mut q = Storage::queue();
        for i in 1..=4 {
            q.insert(i);
        }
        assert_eq!(drain(&mut q), vec![1, 2, 3, 4]);
    }

    #[test]
    fn interleaved_operations() {
        let mut s = Storage::stack();
        s.insert(1);
        s.insert(2);
        assert_eq!(s.remove(), Ok(2));
        s.insert(3);
        assert_eq!(drain(&mut s), vec![3, 1]);

        let mut q = Storage::queue();
        q.insert(1);
        q.insert(2);
        assert_eq!(q.remove(), Ok(1));
        q.insert(3);
        assert_eq!(drain(&mut q), vec![2, 3]);
    }

    #[test]
    fn remove_from_empty_fails() {
        for d in [Discipline::Stack, Discipline::Queue] {
            let mut s: Storage<i32> = Storage::new(d);
            assert!(s.is_empty());
            assert_eq!(s.len(), 0);
            assert_eq!(s.remove(), Err(EmptyContainerError));
            s.insert(7);
            assert_eq!(s.remove(), Ok(7));
            assert_eq!(s.remove(), Err(EmptyContainerError));
            assert_eq!(s.discipline(), d);
        }
    }

    #[test]
    fn discipline_from_flags_and_names() {
        assert_eq!("-s".parse::<Discipline>(), Ok(Discipline::Stack));
        assert_eq!("-q".parse::<Discipline>(), Ok(Discipline::Queue));
        assert_eq!("Stack".parse::<Discipline>(), Ok(Discipline::Stack));
        assert_eq!("queue".parse::<Discipline>(), Ok(Discipline::Queue));
        assert_eq!(
            "-x".parse::<Discipline>(),
            Err(ParseDisciplineError("-x".to_string()))
        );
        assert_eq!(Discipline::default(), Discipline::Stack);
        assert_eq!(Discipline::Queue.to_string(), "queue");
    }
}
