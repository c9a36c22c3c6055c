use crate::util::error::Empty;

/// A last-in first-out collection. Only the most recently pushed element is accessible.
///
/// Implementors also provide these operations as inherent methods, so the trait only needs to be
/// in scope for code that is generic over the backing storage.
pub trait Stack<T> {
    /// The reason a push can be refused. Unbounded stacks use
    /// [`Infallible`](std::convert::Infallible).
    type PushError;

    /// Places `item` on top of the stack.
    fn push(&mut self, item: T) -> Result<(), Self::PushError>;

    /// Removes the top element and returns it.
    fn pop(&mut self) -> Result<T, Empty>;

    /// Returns a reference to the top element.
    fn peek(&self) -> Result<&T, Empty>;

    /// Returns the number of elements currently held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every element.
    fn clear(&mut self);
}
