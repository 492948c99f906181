use crate::{AverageMass, Charge, Charged, Fallback, Massive, MolecularFormula, Residue};

impl Residue {
    #[must_use]
    pub const fn code(&self) -> char {
        self.code
    }

    #[must_use]
    pub fn abbr(&self) -> &str {
        &self.abbr
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn formula(&self) -> MolecularFormula {
        self.formula
    }

    #[must_use]
    pub const fn mass(&self) -> AverageMass {
        self.mass
    }

    #[must_use]
    pub const fn charge(&self) -> Charge {
        self.charge
    }

    /// Percentage occurrence of this residue across reference proteomes
    #[must_use]
    pub const fn frequency(&self) -> f64 {
        self.frequency
    }
}

impl Massive for Residue {
    fn average_mass(&self) -> AverageMass {
        self.mass
    }
}

impl Charged for Residue {
    fn charge(&self) -> Charge {
        self.charge
    }
}

// ---------------------------------------------------------------------------------------------------------------------

impl Fallback {
    #[must_use]
    pub const fn formula(&self) -> MolecularFormula {
        self.formula
    }

    #[must_use]
    pub const fn mass(&self) -> AverageMass {
        self.mass
    }
}

impl Massive for Fallback {
    fn average_mass(&self) -> AverageMass {
        self.mass
    }
}
