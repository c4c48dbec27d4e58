use crate::EmptyCollection;

/// LIFO stack. Unlike [`crate::Queue`], removing or peeking at the top of an
/// empty stack is an error, not a `None` sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top entry.
    pub fn pop(&mut self) -> Result<T, EmptyCollection> {
        self.items.pop().ok_or(EmptyCollection)
    }

    /// Returns the top entry without removing it.
    pub fn peek(&self) -> Result<&T, EmptyCollection> {
        self.items.last().ok_or(EmptyCollection)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Drains top to bottom, the same order repeated `pop` calls would yield.
impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = std::iter::Rev<std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter().rev()
    }
}
