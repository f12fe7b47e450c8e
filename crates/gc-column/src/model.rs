//! `ColumnModel`: one run's setup bound to its pressure formulation.

use crate::error::ColumnResult;
use crate::flow;
use crate::plate_height;
use crate::pressure;
use crate::pressure_model::{PressureModel, PressureModelKind};
use crate::residency;
use crate::retention;
use crate::setup::ColumnSetup;
use crate::solute::Solute;
use crate::validate;
use gc_core::units::{DynVisc, Length, Pressure, Temperature, Time, Velocity, VolumeRate, mps};

/// Entry point for every column quantity.
///
/// All methods take position `x` from the inlet and time `t` and are free of
/// side effects, so a model can be shared across threads. Quantities without a
/// named unit type (restrictions, residencies, diffusion coefficients) are
/// plain SI values.
#[derive(Debug)]
pub struct ColumnModel {
    setup: ColumnSetup,
    pressure_model: Box<dyn PressureModel>,
}

impl ColumnModel {
    pub fn new(setup: ColumnSetup, pressure_model: impl PressureModel + 'static) -> Self {
        Self {
            setup,
            pressure_model: Box::new(pressure_model),
        }
    }

    pub fn with_kind(setup: ColumnSetup, kind: PressureModelKind) -> Self {
        Self {
            setup,
            pressure_model: kind.build(),
        }
    }

    pub fn setup(&self) -> &ColumnSetup {
        &self.setup
    }

    pub fn pressure_model(&self) -> &dyn PressureModel {
        self.pressure_model.as_ref()
    }

    pub fn length(&self) -> Length {
        self.setup.length()
    }

    /// Plausibility checks over all program breakpoints.
    pub fn validate(&self) -> ColumnResult<()> {
        validate::validate(self)
    }

    pub fn temperature(&self, x: Length, t: Time) -> ColumnResult<Temperature> {
        self.setup.temperature_at(x, t)
    }

    pub fn viscosity(&self, x: Length, t: Time) -> ColumnResult<DynVisc> {
        self.setup.viscosity_at(x, t)
    }

    /// κ(x, t) [Pa·s·K/m³].
    pub fn flow_restriction(&self, x: Length, t: Time) -> ColumnResult<f64> {
        self.pressure_model.flow_restriction(&self.setup, x, t)
    }

    pub fn pressure(&self, x: Length, t: Time) -> ColumnResult<Pressure> {
        pressure::pressure(self.pressure_model(), &self.setup, x, t)
    }

    pub fn inlet_pressure(&self, t: Time) -> ColumnResult<Pressure> {
        flow::inlet_pressure(self.pressure_model(), &self.setup, t)
    }

    pub fn outlet_pressure(&self, t: Time) -> Pressure {
        self.setup.boundary.outlet_pressure(t)
    }

    pub fn flow(&self, t: Time) -> ColumnResult<VolumeRate> {
        flow::flow(self.pressure_model(), &self.setup, t)
    }

    pub fn holdup_time(&self, t: Time) -> ColumnResult<Time> {
        self.pressure_model.holdup_time(&self.setup, t)
    }

    /// L / t_M.
    pub fn average_velocity(&self, t: Time) -> ColumnResult<Velocity> {
        Ok(mps(self.length().value / self.holdup_time(t)?.value))
    }

    /// r_M = 1/u [s/m].
    pub fn mobile_phase_residency(&self, x: Length, t: Time) -> ColumnResult<f64> {
        residency::mobile_phase_residency(self.pressure_model(), &self.setup, x, t)
    }

    pub fn velocity(&self, x: Length, t: Time) -> ColumnResult<Velocity> {
        residency::velocity(self.pressure_model(), &self.setup, x, t)
    }

    pub fn retention_factor(&self, solute: &Solute, x: Length, t: Time) -> ColumnResult<f64> {
        retention::retention_factor(&self.setup, solute, x, t)
    }

    /// dt/dx of the solute band [s/m], the right-hand side of the migration ODE.
    pub fn residency(&self, solute: &Solute, x: Length, t: Time) -> ColumnResult<f64> {
        residency::residency(self.pressure_model(), &self.setup, solute, x, t)
    }

    /// D_M [m²/s].
    pub fn diffusion_mobile(&self, solute: &Solute, x: Length, t: Time) -> ColumnResult<f64> {
        plate_height::diffusion_mobile(self.pressure_model(), &self.setup, solute, x, t)
    }

    pub fn plate_height(&self, solute: &Solute, x: Length, t: Time) -> ColumnResult<Length> {
        plate_height::plate_height(self.pressure_model(), &self.setup, solute, x, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::Boundary;
    use crate::field::Isothermal;
    use crate::geometry::Column;
    use crate::program::Program;
    use gc_core::units::{k, m, pa, s};
    use gc_fluids::CarrierGas;

    fn model(kind: PressureModelKind) -> ColumnModel {
        let setup = ColumnSetup::new(
            Column::uniform(m(10.0), m(2.5e-4), m(2.5e-7)).unwrap(),
            CarrierGas::He,
            Isothermal::new(k(350.0)),
            Boundary::pressure_controlled(Program::constant(2e5), Program::constant(1e5)),
        );
        ColumnModel::with_kind(setup, kind)
    }

    #[test]
    fn average_velocity_is_length_over_holdup() {
        let model = model(PressureModelKind::Gradient);
        let tm = model.holdup_time(s(0.0)).unwrap().value;
        let u = model.average_velocity(s(0.0)).unwrap().value;
        assert!((u - 10.0 / tm).abs() < 1e-12);
    }

    #[test]
    fn facade_reports_kind() {
        assert_eq!(
            model(PressureModelKind::Uniform).pressure_model().kind(),
            PressureModelKind::Uniform
        );
    }

    #[test]
    fn outputs_carry_units() {
        let model = model(PressureModelKind::Uniform);
        assert_eq!(model.length(), m(10.0));
        assert_eq!(model.temperature(m(2.0), s(0.0)).unwrap(), k(350.0));
        assert_eq!(model.outlet_pressure(s(0.0)), pa(1e5));
        assert_eq!(model.inlet_pressure(s(0.0)).unwrap(), pa(2e5));
        let eta = model.viscosity(m(2.0), s(0.0)).unwrap().value;
        assert!(eta > 1e-5 && eta < 5e-5, "eta = {eta}");
        let f = model.flow(s(0.0)).unwrap().value;
        assert!(f > 0.0);
    }

    #[test]
    fn repeated_evaluation_is_bit_identical() {
        let model = model(PressureModelKind::Gradient);
        let solute = Solute::new("decane", 420.0, 32.0, 120.0, 1e-3, 1e-4);
        let eval = || {
            (
                model.pressure(m(4.0), s(0.0)).unwrap().value,
                model.plate_height(&solute, m(4.0), s(0.0)).unwrap().value,
            )
        };
        let (first, second) = (eval(), eval());
        assert_eq!(first.0.to_bits(), second.0.to_bits());
        assert_eq!(first.1.to_bits(), second.1.to_bits());
    }

    #[test]
    fn model_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ColumnModel>();
    }
}
