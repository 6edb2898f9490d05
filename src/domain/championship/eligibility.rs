//! Championship eligibility predicate
//!
//! One predicate serves both call sites: the read-only eligible-teams
//! listing and the enroll gate. Keeping them on the same function means the
//! offer list and the enroll decision can never disagree.

use super::entity::Championship;
use crate::domain::team::Team;

/// Whether a team may join a championship, based purely on the
/// championship's scope and the team's country/continent.
///
/// Pure and total: no side effects, defined for every scope.
pub fn is_eligible(team: &Team, championship: &Championship) -> bool {
    championship.scope().admits(team)
}
