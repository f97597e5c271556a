use crate::LayoutError;

/// Measurement unit of a paper profile. Only points are supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Unit {
    #[default]
    Pt,
}

impl Unit {
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Pt => "pt",
        }
    }
}

/// A named page-size preset: physical page, margin, and the usable extent
/// between the margins.
#[derive(Debug, Clone, PartialEq)]
pub struct PaperProfile {
    pub name: &'static str,
    pub unit: Unit,
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub available_horizontal: f32,
    pub available_vertical: f32,
}

impl PaperProfile {
    /// US Letter in points with a one inch margin on each side.
    pub const fn letter() -> Self {
        Self {
            name: "letter",
            unit: Unit::Pt,
            page_width: 612.0,
            page_height: 792.0,
            margin: 72.0,
            available_horizontal: 468.0,
            available_vertical: 648.0,
        }
    }

    /// Looks up a preset by name, ignoring case.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "letter" => Some(Self::letter()),
            _ => None,
        }
    }

    /// Names accepted by [`PaperProfile::by_name`].
    pub fn preset_names() -> &'static [&'static str] {
        &["letter"]
    }

    /// Edge length of the largest tracing box: four blocks, each two boxes
    /// wide, span the usable width.
    pub fn large_box_edge(&self) -> f32 {
        self.available_horizontal / 8.0
    }

    /// Space left between the two rows of blocks on a page.
    pub fn vertical_gap(&self) -> f32 {
        self.available_vertical - 2.0 * 5.0 * self.large_box_edge()
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if !(self.available_horizontal > 0.0 && self.available_vertical > 0.0) {
            return Err(LayoutError::InvalidPaper(format!(
                "'{}' has non-positive usable extent {}x{}",
                self.name, self.available_horizontal, self.available_vertical
            )));
        }
        if self.available_horizontal >= self.page_width
            || self.available_vertical >= self.page_height
        {
            return Err(LayoutError::InvalidPaper(format!(
                "'{}' usable extent {}x{} does not fit inside the {}x{} page",
                self.name,
                self.available_horizontal,
                self.available_vertical,
                self.page_width,
                self.page_height
            )));
        }
        if self.margin < 0.0 {
            return Err(LayoutError::InvalidPaper(format!(
                "'{}' has negative margin {}",
                self.name, self.margin
            )));
        }
        let gap = self.vertical_gap();
        if gap < 0.0 {
            return Err(LayoutError::InvalidPaper(format!(
                "'{}' is too short for two rows of blocks (vertical gap {:.2})",
                self.name, gap
            )));
        }
        Ok(())
    }
}

impl Default for PaperProfile {
    fn default() -> Self {
        Self::letter()
    }
}
