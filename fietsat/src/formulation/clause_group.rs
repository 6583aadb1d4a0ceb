use std::fmt::Display;
use std::fmt::Formatter;

use crate::basic_types::Clause;
use crate::problem::DriverId;
use crate::problem::ExperienceLevel;
use crate::problem::RouteId;

/// The four families of constraints which together encode the assignment rules.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConstraintFamily {
    /// A driver is assigned to a route at no more than one experience level.
    OneLevelPerAssignment,
    /// A driver is assigned to no more than one route.
    OneRoutePerDriver,
    /// Every experience level of a route is filled by one driver.
    OneDriverPerSlot,
    /// A driver is never assigned above their own experience level.
    ExperienceCeiling,
}

impl ConstraintFamily {
    pub const ALL: [ConstraintFamily; 4] = [
        ConstraintFamily::OneLevelPerAssignment,
        ConstraintFamily::OneRoutePerDriver,
        ConstraintFamily::OneDriverPerSlot,
        ConstraintFamily::ExperienceCeiling,
    ];
}

impl Display for ConstraintFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let description = match self {
            ConstraintFamily::OneLevelPerAssignment => "one level per driver and route",
            ConstraintFamily::OneRoutePerDriver => "one route per driver",
            ConstraintFamily::OneDriverPerSlot => "one driver per route and level",
            ConstraintFamily::ExperienceCeiling => "experience ceiling",
        };
        write!(f, "{description}")
    }
}

/// The entity a [`ClauseBundle`] was generated for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BundleOwner {
    Driver(DriverId),
    Assignment(DriverId, RouteId),
    Slot(RouteId, ExperienceLevel),
    Ceiling(DriverId, RouteId, ExperienceLevel),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClauseBundle {
    pub owner: BundleOwner,
    pub clauses: Vec<Clause>,
}

/// All clause bundles of one [`ConstraintFamily`], in generation order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClauseGroup {
    family: ConstraintFamily,
    bundles: Vec<ClauseBundle>,
}

impl ClauseGroup {
    pub(crate) fn new(family: ConstraintFamily) -> ClauseGroup {
        ClauseGroup {
            family,
            bundles: vec![],
        }
    }

    pub(crate) fn push(&mut self, owner: BundleOwner, clauses: Vec<Clause>) {
        self.bundles.push(ClauseBundle { owner, clauses });
    }

    pub fn family(&self) -> ConstraintFamily {
        self.family
    }

    pub fn bundles(&self) -> &[ClauseBundle] {
        &self.bundles
    }

    pub fn clauses(&self) -> impl Iterator<Item = &Clause> + '_ {
        self.bundles.iter().flat_map(|bundle| bundle.clauses.iter())
    }

    pub fn num_clauses(&self) -> usize {
        self.bundles.iter().map(|bundle| bundle.clauses.len()).sum()
    }
}
