// File: crates/chart-core/src/palette.rs
// Summary: Ordered series color palette passed explicitly to the adapter's color builder.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Build a palette; an empty list falls back to the default colors.
    pub fn new<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors = colors.into_iter().map(Into::into).collect::<Vec<_>>();
        if colors.is_empty() { Self::default() } else { Self { colors } }
    }

    /// Color for series `index`, cycling through the palette.
    pub fn color(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize { self.colors.len() }
    pub fn is_empty(&self) -> bool { self.colors.is_empty() }
}

impl Default for Palette {
    fn default() -> Self {
        Self { colors: ["#4bc0c0", "#9966ff", "#ff9f40", "#ff6384"].map(String::from).to_vec() }
    }
}
