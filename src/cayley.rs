//! Cayley table rendering.
//!
//! Groups display as their multiplication table. Element strings of up to
//! three characters are used literally; longer ones are replaced by
//! single-letter symbols, with `e` bound to the identity and a legend
//! printed above the table.
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::element::Element;
use crate::group::Group;

// 'e' leads so that the identity-first iteration order binds it to the
// identity; the alphabet skips its usual position.
const SYMBOLS: &str = "eabcdfghijklmnopqrstuvwxyz";

impl<T> fmt::Display for Group<T>
where
    T: Clone + Eq + Hash + fmt::Display + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let elements: Vec<Element<T>> = self.iter().collect();
        let strings: Vec<String> = elements.iter().map(|e| e.to_string()).collect();
        let mut width = strings.iter().map(|s| s.chars().count()).max().unwrap_or(0);

        let mut symbols: HashMap<T, String> = HashMap::new();
        if width > 3 {
            if elements.len() > SYMBOLS.chars().count() {
                return f.write_str("This Group is too large to represent as a Cayley table!");
            }
            width = 1;
            for (element, symbol) in elements.iter().zip(SYMBOLS.chars()) {
                symbols.insert(element.value().clone(), symbol.to_string());
                writeln!(f, "{}: {}", symbol, element)?;
            }
            writeln!(f)?;
        } else {
            for (element, string) in elements.iter().zip(strings.iter()) {
                symbols.insert(
                    element.value().clone(),
                    format!("{:<width$}", string, width = width),
                );
            }
        }

        let rule = vec!["─".repeat(width); elements.len()].join(" • ");
        let mut first_row = true;
        for b in &elements {
            if !first_row {
                writeln!(f)?;
                f.write_str(&rule)?;
                writeln!(f)?;
            }
            first_row = false;
            let mut first_cell = true;
            for a in &elements {
                if !first_cell {
                    f.write_str(" │ ")?;
                }
                first_cell = false;
                f.write_str(&symbols[&self.apply_raw(a.value(), b.value())])?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::archetype::{dn, sn, zn};

    #[test]
    fn short_labels_are_used_literally() {
        let rendered = format!("{}", zn(2).unwrap());
        assert_eq!(rendered, "0 │ 1\n─ • ─\n1 │ 0");
    }

    #[test]
    fn rows_apply_the_column_element_first() {
        let rendered = format!("{}", zn(3).unwrap());
        let rows: Vec<&str> = rendered.lines().filter(|l| l.contains('│')).collect();
        assert_eq!(rows, vec!["0 │ 1 │ 2", "1 │ 2 │ 0", "2 │ 0 │ 1"]);
    }

    #[test]
    fn long_labels_are_symbolized() {
        let rendered = format!("{}", sn(3).unwrap());
        // legend first, with 'e' on the identity, then a blank line
        assert!(rendered.starts_with("e: ()\n"));
        assert!(rendered.contains("\n\n"));
        let rows = rendered.lines().filter(|l| l.contains('│')).count();
        assert_eq!(rows, 6);
    }

    #[test]
    fn oversized_symbol_tables_are_refused() {
        let rendered = format!("{}", dn(14).unwrap());
        assert_eq!(
            rendered,
            "This Group is too large to represent as a Cayley table!"
        );
    }
}
