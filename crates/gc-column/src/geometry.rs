//! Column geometry.

use crate::error::ColumnResult;
use gc_core::ensure_positive;
use gc_core::units::{Length, m};

/// Axial profile of a geometric quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Profile {
    Constant(Length),
    /// Linear taper from the inlet value to the outlet value
    Linear { inlet: Length, outlet: Length },
}

impl Profile {
    pub fn constant(value: Length) -> Self {
        Profile::Constant(value)
    }

    pub fn taper(inlet: Length, outlet: Length) -> Self {
        Profile::Linear { inlet, outlet }
    }

    /// Value at position `x` on a column of length `length`.
    pub fn at(&self, x: Length, length: Length) -> Length {
        match *self {
            Profile::Constant(v) => v,
            Profile::Linear { inlet, outlet } => {
                m(inlet.value + (outlet.value - inlet.value) * x.value / length.value)
            }
        }
    }

    /// Smallest value over [0, L]; linear profiles attain it at an end.
    pub fn min(&self) -> Length {
        match *self {
            Profile::Constant(v) => v,
            Profile::Linear { inlet, outlet } => m(inlet.value.min(outlet.value)),
        }
    }
}

/// Capillary column: length, inner diameter and stationary film thickness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub length: Length,
    pub diameter: Profile,
    pub film_thickness: Profile,
}

impl Column {
    pub fn new(length: Length, diameter: Profile, film_thickness: Profile) -> ColumnResult<Self> {
        let column = Self {
            length,
            diameter,
            film_thickness,
        };
        column.check()?;
        Ok(column)
    }

    /// Column with constant diameter and film thickness.
    pub fn uniform(length: Length, diameter: Length, film_thickness: Length) -> ColumnResult<Self> {
        Self::new(
            length,
            Profile::constant(diameter),
            Profile::constant(film_thickness),
        )
    }

    pub fn diameter_at(&self, x: Length) -> Length {
        self.diameter.at(x, self.length)
    }

    pub fn film_thickness_at(&self, x: Length) -> Length {
        self.film_thickness.at(x, self.length)
    }

    /// Phase ratio df/d at `x`.
    pub fn phase_ratio_at(&self, x: Length) -> f64 {
        self.film_thickness_at(x).value / self.diameter_at(x).value
    }

    pub(crate) fn check(&self) -> ColumnResult<()> {
        ensure_positive(self.length.value, "column length must be positive")?;
        ensure_positive(
            self.diameter.min().value,
            "column diameter must be positive along the column",
        )?;
        ensure_positive(
            self.film_thickness.min().value,
            "film thickness must be positive along the column",
        )?;
        Ok(())
    }
}
