//! Dude names.

use tower_core::RngOracle;

/// Names used when no data file is supplied.
pub const BUILTIN_NAMES: &[&str] = &[
    "Aldric", "Bryn", "Cora", "Dax", "Edda", "Fenn", "Gareth", "Hilde", "Ivo", "Jora", "Kell",
    "Lysa", "Mordo", "Nim", "Osric", "Pell", "Quill", "Rhea", "Sten", "Tova", "Ulf", "Vera",
    "Wick", "Yara", "Zane",
];

/// Draws names without repeating until the pool runs dry.
///
/// Once every name has been handed out a new round starts and names gain a
/// round suffix (`"Cora 2"`).
#[derive(Clone, Debug)]
pub struct NamePool {
    names: Vec<String>,
    remaining: Vec<usize>,
    round: u32,
}

impl NamePool {
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let remaining = (0..names.len()).collect();
        Self {
            names,
            remaining,
            round: 1,
        }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_NAMES.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Draws the next name. An empty pool yields `"Dude"`.
    pub fn draw(&mut self, rng: &mut dyn RngOracle) -> String {
        if self.names.is_empty() {
            return "Dude".to_string();
        }
        if self.remaining.is_empty() {
            self.remaining = (0..self.names.len()).collect();
            self.round += 1;
        }

        let pick = rng.below(self.remaining.len() as u32) as usize;
        let name = &self.names[self.remaining.swap_remove(pick)];
        if self.round == 1 {
            name.clone()
        } else {
            format!("{name} {}", self.round)
        }
    }
}

impl Default for NamePool {
    fn default() -> Self {
        Self::builtin()
    }
}
