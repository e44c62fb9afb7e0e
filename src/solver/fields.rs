//! Primitive input fields and flux output fields.

use crate::equations::{ConservedState, PrimitiveState};
use crate::error::Result;
use crate::grid::{Centering, GridFunction, GridLayout};
use crate::reconstruction::{ReconstructionMethod, Reconstructor};
use crate::types::{Direction, FacePair, GridIndex};

/// Borrowed cell-centred primitive fields.
#[derive(Clone, Copy, Debug)]
pub struct PrimitiveFields<'a> {
    /// Rest-mass density ρ
    pub rho: &'a GridFunction,
    /// Velocity vⁱ
    pub vel: [&'a GridFunction; 3],
    /// Specific internal energy ε
    pub eps: &'a GridFunction,
    /// Magnetic field Bⁱ
    pub bvec: [&'a GridFunction; 3],
}

impl<'a> PrimitiveFields<'a> {
    /// Primitive state of a single cell.
    #[inline]
    pub fn at_cell(&self, idx: GridIndex) -> PrimitiveState {
        PrimitiveState::new(
            self.rho.get(idx),
            self.vel.map(|f| f.get(idx)),
            self.eps.get(idx),
            self.bvec.map(|f| f.get(idx)),
        )
    }

    /// Reconstruct all eight primitives at a face.
    pub fn reconstruct<R>(
        &self,
        reconstructor: &R,
        face: GridIndex,
        method: ReconstructionMethod,
        dir: Direction,
    ) -> FacePair<PrimitiveState>
    where
        R: Reconstructor + ?Sized,
    {
        let at = |field: &GridFunction| reconstructor.reconstruct(field, face, method, dir);

        let rho = at(self.rho);
        let eps = at(self.eps);
        let vel = self.vel.map(at);
        let bvec = self.bvec.map(at);

        let side = |pick: fn(&FacePair<f64>) -> f64| {
            PrimitiveState::new(
                pick(&rho),
                std::array::from_fn(|a| pick(&vel[a])),
                pick(&eps),
                std::array::from_fn(|a| pick(&bvec[a])),
            )
        };
        FacePair::new(side(|p| p.minus), side(|p| p.plus))
    }

    /// Check that every field is cell-centred on `layout`.
    pub fn check(&self, layout: &GridLayout) -> Result<()> {
        self.iter()
            .try_for_each(|field| field.check(Centering::Cell, layout))
    }

    fn iter(&self) -> impl Iterator<Item = &'a GridFunction> {
        std::iter::once(self.rho)
            .chain(self.vel)
            .chain(std::iter::once(self.eps))
            .chain(self.bvec)
    }
}

/// Owned cell-centred primitive fields.
#[derive(Clone, Debug)]
pub struct PrimitiveStorage {
    pub rho: GridFunction,
    pub vel: [GridFunction; 3],
    pub eps: GridFunction,
    pub bvec: [GridFunction; 3],
}

impl PrimitiveStorage {
    const VEL_NAMES: [&'static str; 3] = ["velx", "vely", "velz"];
    const B_NAMES: [&'static str; 3] = ["Bvecx", "Bvecy", "Bvecz"];

    /// Fill every cell (ghosts included) from a function of position.
    pub fn from_fn<F>(layout: &GridLayout, f: F) -> Self
    where
        F: Fn([f64; 3]) -> PrimitiveState,
    {
        let field = |name: &str, pick: &dyn Fn(&PrimitiveState) -> f64| {
            GridFunction::from_fn(name, Centering::Cell, layout, |_, x| pick(&f(x)))
        };
        Self {
            rho: field("rho", &|p: &PrimitiveState| p.rho),
            vel: std::array::from_fn(|a| field(Self::VEL_NAMES[a], &|p: &PrimitiveState| p.vel[a])),
            eps: field("eps", &|p: &PrimitiveState| p.eps),
            bvec: std::array::from_fn(|a| field(Self::B_NAMES[a], &|p: &PrimitiveState| p.bvec[a])),
        }
    }

    /// The same state in every cell.
    pub fn uniform(layout: &GridLayout, state: PrimitiveState) -> Self {
        Self::from_fn(layout, |_| state)
    }

    /// Borrow as [`PrimitiveFields`].
    pub fn fields(&self) -> PrimitiveFields<'_> {
        PrimitiveFields {
            rho: &self.rho,
            vel: self.vel.each_ref(),
            eps: &self.eps,
            bvec: self.bvec.each_ref(),
        }
    }
}

/// The eight face-centred flux fields of one direction.
#[derive(Clone, Debug)]
pub struct FluxFields {
    direction: Direction,
    pub dens: GridFunction,
    pub mom: [GridFunction; 3],
    pub tau: GridFunction,
    pub btilde: [GridFunction; 3],
}

impl FluxFields {
    /// Zero-initialized flux fields on the faces normal to `dir`.
    ///
    /// Fields are named after the variable with an `f<dir>` prefix, e.g.
    /// `fxdens` or `fyBz`.
    pub fn new(layout: &GridLayout, dir: Direction) -> Self {
        let centering = Centering::Face(dir);
        let field = |var: &str| GridFunction::new(format!("f{dir}{var}"), centering, layout);
        Self {
            direction: dir,
            dens: field(ConservedState::NAMES[0]),
            mom: std::array::from_fn(|a| field(ConservedState::NAMES[1 + a])),
            tau: field(ConservedState::NAMES[4]),
            btilde: std::array::from_fn(|a| field(ConservedState::NAMES[5 + a])),
        }
    }

    /// Face normal of these fluxes.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Flux at a face.
    pub fn get(&self, idx: GridIndex) -> ConservedState {
        ConservedState::new(
            self.dens.get(idx),
            std::array::from_fn(|a| self.mom[a].get(idx)),
            self.tau.get(idx),
            std::array::from_fn(|a| self.btilde[a].get(idx)),
        )
    }

    /// Store the flux at a face.
    pub fn set(&mut self, idx: GridIndex, flux: &ConservedState) {
        self.dens.set(idx, flux.dens);
        for (field, value) in self.mom.iter_mut().zip(flux.mom) {
            field.set(idx, value);
        }
        self.tau.set(idx, flux.tau);
        for (field, value) in self.btilde.iter_mut().zip(flux.btilde) {
            field.set(idx, value);
        }
    }

    /// Check that every field lives on the faces normal to `dir` of `layout`.
    pub fn check(&self, dir: Direction, layout: &GridLayout) -> Result<()> {
        self.iter()
            .try_for_each(|field| field.check(Centering::Face(dir), layout))
    }

    /// Iterate over the fields in [`ConservedState::NAMES`] order.
    pub fn iter(&self) -> impl Iterator<Item = &GridFunction> {
        std::iter::once(&self.dens)
            .chain(&self.mom)
            .chain(std::iter::once(&self.tau))
            .chain(&self.btilde)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconstruction::StencilReconstructor;

    #[test]
    fn test_flux_field_names() {
        let layout = GridLayout::uniform(2, 1);
        let fluxes = FluxFields::new(&layout, Direction::Y);
        let names: Vec<&str> = fluxes.iter().map(GridFunction::name).collect();
        assert_eq!(
            names,
            ["fydens", "fymomx", "fymomy", "fymomz", "fytau", "fyBx", "fyBy", "fyBz"]
        );
        assert!(fluxes.check(Direction::Y, &layout).is_ok());
        assert!(fluxes.check(Direction::X, &layout).is_err());
    }

    #[test]
    fn test_flux_get_set() {
        let layout = GridLayout::uniform(2, 1);
        let mut fluxes = FluxFields::new(&layout, Direction::X);
        let idx = GridIndex::new(1, 2, 1);
        let flux = ConservedState::new(1.0, [2.0, 3.0, 4.0], 5.0, [6.0, 7.0, 8.0]);

        fluxes.set(idx, &flux);
        assert_eq!(fluxes.get(idx), flux);
        assert_eq!(fluxes.get(GridIndex::new(0, 0, 0)), ConservedState::zero());
    }

    #[test]
    fn test_reconstruct_splits_sides() {
        let layout = GridLayout::new([4, 1, 1], [1, 1, 1]);
        let storage = PrimitiveStorage::from_fn(&layout, |x| {
            let rho = if x[0] < 2.0 { 2.0 } else { 1.0 };
            PrimitiveState::new(rho, [0.1, 0.2, 0.3], 1.5, [0.0, 0.5, 0.0])
        });
        assert!(storage.fields().check(&layout).is_ok());

        // Face at x = 2 separates cells 2 and 3 (ghost offset 1)
        let face = GridIndex::new(3, 1, 1);
        let prims = storage.fields().reconstruct(
            &StencilReconstructor,
            face,
            ReconstructionMethod::Godunov,
            Direction::X,
        );

        assert_eq!(prims.minus.rho, 2.0);
        assert_eq!(prims.plus.rho, 1.0);
        assert_eq!(prims.plus.vel, [0.1, 0.2, 0.3]);
        assert_eq!(prims.minus.bvec, [0.0, 0.5, 0.0]);
    }
}
