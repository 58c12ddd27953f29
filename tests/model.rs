//! Randomized operations checked against a flat model.

use rand::Rng;

use double_seq::{DoubleSeq, Error};

/// Elements in a `Vec` plus the cursor position measured from the front.
#[derive(Debug, Default)]
struct Model {
    elements: Vec<f64>,
    cursor: Option<usize>,
}

impl Model {
    fn add_before(&mut self, value: f64) {
        let at = self.cursor.unwrap_or(0);
        self.elements.insert(at, value);
        self.cursor = Some(at);
    }

    fn add_after(&mut self, value: f64) {
        let at = match self.cursor {
            Some(cursor) => cursor + 1,
            None => self.elements.len(),
        };
        self.elements.insert(at, value);
        self.cursor = Some(at);
    }

    fn start(&mut self) {
        self.cursor = if self.elements.is_empty() {
            None
        } else {
            Some(0)
        };
    }

    /// Returns whether there was a current element to advance from.
    fn advance(&mut self) -> bool {
        match self.cursor {
            None => false,
            Some(cursor) => {
                self.cursor = if cursor + 1 == self.elements.len() {
                    None
                } else {
                    Some(cursor + 1)
                };
                true
            }
        }
    }

    /// Returns whether there was a current element to remove.
    fn remove_current(&mut self) -> bool {
        match self.cursor {
            None => false,
            Some(cursor) => {
                self.elements.remove(cursor);
                // Removing the head makes the new head current; every other
                // removal leaves no current element.
                self.cursor = (cursor == 0 && !self.elements.is_empty()).then_some(0);
                true
            }
        }
    }

    fn render(&self) -> String {
        let mut out = String::from("<");
        for (i, value) in self.elements.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            if self.cursor == Some(i) {
                out.push_str(&format!("[{value}]"));
            } else {
                out.push_str(&format!("{value}"));
            }
        }
        out.push('>');
        out
    }
}

#[test]
fn random_operations_match_flat_model() {
    let mut rng = rand::rng();
    for _ in 0..50 {
        let mut seq = DoubleSeq::new();
        let mut model = Model::default();
        for _ in 0..300 {
            let value = f64::from(rng.random_range(0..100));
            match rng.random_range(0..8) {
                0 => {
                    seq.add_before(value);
                    model.add_before(value);
                }
                1 | 2 => {
                    seq.add_after(value);
                    model.add_after(value);
                }
                3 => {
                    seq.start();
                    model.start();
                }
                4 => assert_eq!(seq.advance().is_ok(), model.advance()),
                5 => assert_eq!(seq.remove_current().is_ok(), model.remove_current()),
                6 => {
                    let other: DoubleSeq = (0..rng.random_range(0..4))
                        .map(f64::from)
                        .collect();
                    seq.add_all(Some(&other)).unwrap();
                    model.elements.extend(other.iter());
                }
                // A clone must be indistinguishable from the original.
                _ => seq = seq.clone(),
            }

            assert_eq!(seq.len(), model.elements.len());
            assert_eq!(seq.is_current(), model.cursor.is_some());
            assert_eq!(seq.to_string(), model.render());
            match model.cursor {
                Some(cursor) => assert_eq!(seq.get_current(), Ok(model.elements[cursor])),
                None => assert_eq!(seq.get_current(), Err(Error::NoCurrentElement)),
            }
        }
    }
}

#[test]
fn random_concatenation_matches_flat_model() {
    let mut rng = rand::rng();
    for _ in 0..100 {
        let s1: DoubleSeq = (0..rng.random_range(0..6))
            .map(|_| f64::from(rng.random_range(0..100)))
            .collect();
        let mut s2: DoubleSeq = (0..rng.random_range(0..6))
            .map(|_| f64::from(rng.random_range(0..100)))
            .collect();
        if !s2.is_empty() {
            s2.start();
        }

        let result = DoubleSeq::concatenation(Some(&s1), Some(&s2)).unwrap();
        assert_eq!(result.len(), s1.len() + s2.len());
        assert!(!result.is_current());
        assert!(
            result
                .iter()
                .eq(s1.iter().chain(s2.iter()))
        );
    }
}
