pub const LEAVES_PER_ROW: usize = 5;

/// Leaf layout of the decorative tree: one leaf per completed task, rows of
/// [`LEAVES_PER_ROW`] stacking upward from the trunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canopy {
    leaves: usize,
}

impl Canopy {
    pub fn for_completed(completed_count: usize) -> Self {
        Self {
            leaves: completed_count,
        }
    }

    pub fn leaves(&self) -> usize {
        self.leaves
    }

    /// Leaf count of each row, bottom row first.
    pub fn rows(&self) -> Vec<usize> {
        let full = self.leaves / LEAVES_PER_ROW;
        let mut rows = vec![LEAVES_PER_ROW; full];
        let rest = self.leaves % LEAVES_PER_ROW;
        if rest > 0 {
            rows.push(rest);
        }
        rows
    }

    pub fn render(&self, leaf: &str, trunk: &str) -> String {
        let mut lines: Vec<String> = self
            .rows()
            .iter()
            .rev()
            .map(|count| vec![leaf; *count].join(" "))
            .collect();

        let width = LEAVES_PER_ROW * 2 - 1;
        let trunk_pad = " ".repeat(width / 2);
        lines.push(format!("{trunk_pad}{trunk}"));
        lines.push(format!("{trunk_pad}{trunk}"));
        lines.join("\n")
    }
}
