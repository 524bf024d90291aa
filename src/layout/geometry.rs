//! Geometry value types for layout specifications

/// A width/height pair in layout units
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A layout dimension along one axis
///
/// Fractional dimensions resolve against the enclosing container; estimated
/// dimensions are a starting size, refined once content has been measured.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Dimension {
    /// Fraction of the container's width
    FractionalWidth(f32),
    /// Fraction of the container's height
    FractionalHeight(f32),
    /// Absolute size in layout units
    Absolute(f32),
    /// Content-driven size with the given starting estimate
    Estimated(f32),
}

impl Dimension {
    /// Resolve this dimension to layout units within `container`
    ///
    /// Estimated dimensions resolve to their estimate; the final size is up
    /// to the rendering host once content has been measured.
    pub fn resolve(&self, container: Size) -> f32 {
        match self {
            Dimension::FractionalWidth(f) => f * container.width,
            Dimension::FractionalHeight(f) => f * container.height,
            Dimension::Absolute(units) => *units,
            Dimension::Estimated(units) => *units,
        }
    }

    /// Whether the final size is content-driven
    pub fn is_estimated(&self) -> bool {
        matches!(self, Dimension::Estimated(_))
    }
}

/// Directional insets around a layout element
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub top: f32,
    pub leading: f32,
    pub bottom: f32,
    pub trailing: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        top: 0.0,
        leading: 0.0,
        bottom: 0.0,
        trailing: 0.0,
    };

    pub fn new(top: f32, leading: f32, bottom: f32, trailing: f32) -> Self {
        Self {
            top,
            leading,
            bottom,
            trailing,
        }
    }

    /// Insets on the leading and trailing edges only
    pub fn horizontal(leading: f32, trailing: f32) -> Self {
        Self {
            top: 0.0,
            leading,
            bottom: 0.0,
            trailing,
        }
    }

    /// Insets on the top and bottom edges only
    pub fn vertical(top: f32, bottom: f32) -> Self {
        Self {
            top,
            leading: 0.0,
            bottom,
            trailing: 0.0,
        }
    }

    /// Total horizontal inset
    pub fn horizontal_total(&self) -> f32 {
        self.leading + self.trailing
    }

    /// Total vertical inset
    pub fn vertical_total(&self) -> f32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_resolve() {
        let container = Size::new(400.0, 300.0);

        assert_eq!(Dimension::FractionalWidth(0.5).resolve(container), 200.0);
        assert_eq!(Dimension::FractionalHeight(1.0 / 3.0).resolve(container), 100.0);
        assert_eq!(Dimension::Absolute(44.0).resolve(container), 44.0);
        assert_eq!(Dimension::Estimated(250.0).resolve(container), 250.0);
    }

    #[test]
    fn test_dimension_estimated() {
        assert!(Dimension::Estimated(300.0).is_estimated());
        assert!(!Dimension::Absolute(300.0).is_estimated());
        assert!(!Dimension::FractionalWidth(1.0).is_estimated());
    }

    #[test]
    fn test_edge_insets_totals() {
        let insets = EdgeInsets::new(8.0, 4.0, 20.0, 4.0);

        assert_eq!(insets.horizontal_total(), 8.0);
        assert_eq!(insets.vertical_total(), 28.0);

        let horizontal = EdgeInsets::horizontal(4.0, 4.0);
        assert_eq!(horizontal.top, 0.0);
        assert_eq!(horizontal.leading, 4.0);
    }
}
