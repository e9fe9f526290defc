//! The l_system module provides a simple Lindenmayer string rewriter. Expanded
//! strings are walked by [`crate::drawing::walk_lpath`], which turns them into
//! turtle strokes.

use std::collections::HashMap;

/// # LSystem
///
/// An axiom plus one replacement rule per symbol. Symbols without a rule are
/// copied through untouched.
///
/// # Example
///
/// ```rust
/// use turtle_soup::l_system::LSystem;
/// use turtle_soup::drawing::walk_lpath;
/// use turtle_soup::turtle::{Turtle, TurtleTrait};
/// use std::collections::HashMap;
///
/// let gosper = LSystem {
///     axiom: "A".to_string(),
///     rules: HashMap::from([
///         ('A', "A-B--B+A++AA+B-".to_string()),
///         ('B', "+A-BB--B-A++A+B".to_string())]),
/// };
///
/// let mut t = Turtle::new();
/// walk_lpath(&mut t, &gosper.expand(2), 60.0, 8.0);
/// assert_eq!(t.path().len(), 49);
/// ```
#[derive(Clone, Debug)]
pub struct LSystem {
    pub axiom: String,
    pub rules: HashMap<char, String>,
}

impl LSystem {
    /// The Gosper flowsnake, walked with 60 degree turns.
    pub fn gosper() -> LSystem {
        LSystem {
            axiom: "A".to_string(),
            rules: HashMap::from([
                ('A', "A-B--B+A++AA+B-".to_string()),
                ('B', "+A-BB--B-A++A+B".to_string()),
            ]),
        }
    }

    fn rewrite(&self, state: &str) -> String {
        state
            .chars()
            .map(|c| match self.rules.get(&c) {
                Some(replacement) => replacement.clone(),
                None => String::from(c),
            })
            .collect()
    }

    /// Apply the rules `order` times to the axiom.
    pub fn expand(&self, order: u32) -> String {
        (0..order).fold(self.axiom.clone(), |state, _| self.rewrite(&state))
    }
}
