/// Operator precedence levels for Rholang code generation.
///
/// Lower values bind tighter. `None` is the "no precedence" level used
/// for statement contexts, where a child expression is never wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Order {
    /// Literals, variables, parenthesized expressions.
    Atomic = 0,
    /// Unary operators (`-`, `~`, `not`, `*`, `@`, `%`) and method receivers.
    Unary = 1,
    /// `*`, `/`, `%`, `%%`.
    Multiplicative = 2,
    /// `+`, `-`, `++`, `--`.
    Additive = 3,
    /// `<`, `<=`, `>`, `>=`.
    Relational = 4,
    /// `==`, `!=`, `matches`.
    Equality = 5,
    /// `/\` and `and`.
    LogicalAnd = 6,
    /// `\/` and `or`.
    LogicalOr = 7,
    /// Statement contexts.
    None = 99,
}

impl Order {
    /// Whether an expression at this level must be parenthesized when it
    /// is substituted into a slot demanding at most `binding`.
    pub fn needs_parens(self, binding: Order) -> bool {
        self > binding
    }

    /// The next tighter level. Left-associative operators demand this
    /// for their right operand, so an equal-precedence right child
    /// keeps its parentheses: `a - (b - c)` must not flatten.
    pub fn tighter(self) -> Order {
        match self {
            Order::Atomic | Order::Unary => Order::Atomic,
            Order::Multiplicative => Order::Unary,
            Order::Additive => Order::Multiplicative,
            Order::Relational => Order::Additive,
            Order::Equality => Order::Relational,
            Order::LogicalAnd => Order::Equality,
            Order::LogicalOr => Order::LogicalAnd,
            Order::None => Order::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_values_match_the_table() {
        assert_eq!(Order::Atomic as u8, 0);
        assert_eq!(Order::Unary as u8, 1);
        assert_eq!(Order::None as u8, 99);
        assert!(Order::Atomic < Order::Unary);
        assert!(Order::Multiplicative < Order::Additive);
        assert!(Order::LogicalOr < Order::None);
    }

    #[test]
    fn looser_children_are_wrapped() {
        // a * (b + c): the addition binds looser than the multiplicative slot.
        assert!(Order::Additive.needs_parens(Order::Multiplicative));
        // (a * b) + c needs no wrap around the multiplication.
        assert!(!Order::Multiplicative.needs_parens(Order::Additive));
        // Statement contexts never wrap.
        assert!(!Order::LogicalOr.needs_parens(Order::None));
    }

    #[test]
    fn tighter_steps_down_one_level() {
        assert_eq!(Order::Additive.tighter(), Order::Multiplicative);
        assert_eq!(Order::Atomic.tighter(), Order::Atomic);
        assert_eq!(Order::None.tighter(), Order::None);
        // An equal-precedence child wraps against the tightened slot.
        assert!(Order::Additive.needs_parens(Order::Additive.tighter()));
    }
}
