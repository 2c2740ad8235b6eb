//! Tag filter dropdown

use std::fmt;

/// Tag choices with the current selection
pub struct TagFilter<'a> {
    available: &'a [String],
    selected: &'a [String],
}

impl<'a> TagFilter<'a> {
    pub fn new(available: &'a [String], selected: &'a [String]) -> Self {
        Self {
            available,
            selected,
        }
    }

    /// Button label: `Tags`, or `Tags (n)` with a selection
    pub fn label(&self) -> String {
        if self.selected.is_empty() {
            "Tags".to_string()
        } else {
            format!("Tags ({})", self.selected.len())
        }
    }
}

impl fmt::Display for TagFilter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let check = |on: bool| if on { "[x]" } else { "[ ]" };

        writeln!(f, "{}", self.label())?;
        write!(f, "  {} All", check(self.selected.is_empty()))?;
        for tag in self.available {
            write!(f, "\n  {} {}", check(self.selected.contains(tag)), tag)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_label_counts_selection() {
        let available = strings(&["dessert", "veg"]);
        assert_eq!(TagFilter::new(&available, &[]).label(), "Tags");

        let selected = strings(&["veg"]);
        assert_eq!(TagFilter::new(&available, &selected).label(), "Tags (1)");
    }

    #[test]
    fn test_options_mark_selection() {
        let available = strings(&["dessert", "veg"]);
        let selected = strings(&["veg"]);
        assert_eq!(
            TagFilter::new(&available, &selected).to_string(),
            "Tags (1)\n  [ ] All\n  [ ] dessert\n  [x] veg"
        );
        assert_eq!(
            TagFilter::new(&available, &[]).to_string(),
            "Tags\n  [x] All\n  [ ] dessert\n  [ ] veg"
        );
    }
}
