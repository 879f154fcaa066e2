//! Presentation-side values derived from the attribute.
//!
//! Everything here is computed from simulation state but never written back
//! into it, so floats are acceptable.

/// Tint instruction handed to the drawing pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TintOverride {
    /// Normalised RGB tint.
    pub rgb: [f32; 3],
    /// Normalised opacity of the tint.
    pub alpha: f32,
    /// Replace the base colour instead of multiplying with it.
    pub replace_base_color: bool,
}

/// Minimal view of one drawable belonging to an entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Renderable {
    /// Decorations (selection boxes, pips, text) are never tinted.
    pub decorative: bool,
    /// Tint applied by render decorators this frame.
    pub tint: Option<TintOverride>,
}

impl Renderable {
    /// A gameplay renderable with no tint.
    #[must_use]
    pub const fn body() -> Self {
        Self {
            decorative: false,
            tint: None,
        }
    }

    /// A decorative renderable with no tint.
    #[must_use]
    pub const fn decoration() -> Self {
        Self {
            decorative: true,
            tint: None,
        }
    }
}

/// Viewer-side state consulted before showing a selection bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionBarContext {
    /// The owner is in the viewer's selection.
    pub selected: bool,
    /// The pointer hovers the owner.
    pub hovered: bool,
    /// The viewer asked for bars on every unit.
    pub always_show: bool,
}

impl SelectionBarContext {
    /// Whether the viewer's policy allows bars for this owner.
    #[must_use]
    pub const fn allows_display(self) -> bool {
        self.always_show || self.selected || self.hovered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::nothing(SelectionBarContext::default(), false)]
    #[case::selected(SelectionBarContext { selected: true, ..Default::default() }, true)]
    #[case::hovered(SelectionBarContext { hovered: true, ..Default::default() }, true)]
    #[case::always(SelectionBarContext { always_show: true, ..Default::default() }, true)]
    fn display_policy(#[case] context: SelectionBarContext, #[case] expected: bool) {
        assert_eq!(context.allows_display(), expected);
    }
}
