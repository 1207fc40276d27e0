/// Operand stack for the VM with a maximum size enforced in debug builds.
///
/// The compiler computes how deep a program's stack gets, so the VM sizes the
/// stack exactly once and never reallocates. Overflow and underflow both mean
/// the program was built wrong; they are asserted in debug builds only.
///
/// # Examples
///
/// ```
/// use rpnexpr_core::vm::Stack;
///
/// let mut stack = Stack::new(2);
/// stack.push(3.5);
/// stack.push(0.5);
/// assert_eq!(stack.pop(), 0.5);
/// assert_eq!(stack.len(), 1);
/// ```
pub struct Stack<T> {
    items: Vec<T>,
    max_size: usize,
}

impl<T> Stack<T> {
    /// Creates a stack that holds at most `max_size` values.
    pub fn new(max_size: usize) -> Self {
        Self {
            items: Vec::with_capacity(max_size),
            max_size,
        }
    }

    /// Pushes a value onto the stack.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if the stack is already at maximum capacity.
    #[inline]
    pub fn push(&mut self, value: T) {
        debug_assert!(
            self.items.len() < self.max_size,
            "Stack overflow: attempted to push beyond maximum size of {}",
            self.max_size
        );
        self.items.push(value);
    }

    /// Removes and returns the top value.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty. Programs are validated when they are
    /// built, so this only happens on a malformed program.
    #[inline]
    pub fn pop(&mut self) -> T {
        match self.items.pop() {
            Some(value) => value,
            None => panic!("Stack underflow: pop from an empty stack"),
        }
    }

    /// Pops the top two values, returning them in push order.
    #[inline]
    pub fn pop_pair(&mut self) -> (T, T) {
        let b = self.pop();
        let a = self.pop();
        (a, b)
    }

    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the maximum capacity of the stack.
    ///
    /// Note that this limit is only enforced in debug builds.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.max_size
    }

    /// Consumes the stack, returning its only value.
    ///
    /// # Panics
    ///
    /// Panics in debug mode unless exactly one value is left.
    #[inline]
    pub fn into_result(mut self) -> T {
        debug_assert_eq!(
            self.items.len(),
            1,
            "program must leave exactly one value on the stack"
        );
        self.pop()
    }
}
