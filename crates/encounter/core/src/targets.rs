//! Named groups of players each mechanic is expected to hit.
//!
//! Membership is a pure function of the roster: each set lists status
//! effects, and a set contains whichever players hold them. Effects nobody
//! holds are skipped, so sets can be smaller than their table.
use std::collections::BTreeSet;

use strum::{EnumCount, IntoEnumIterator};

use crate::roster::{CompositeStatus, Roster, StatusEffect, StatusRef};
use crate::state::ActorId;

use CompositeStatus::{LongOrIceDps, ShortOrIceTank};
use StatusEffect::{
    IceDps, IceTank, LongHighTank, LongLowTank, MidDps, MidTank, ShortHighDps, ShortLowDps,
};
use StatusRef::{Composite as C, Concrete as S};

const STACK1: &[StatusRef] = &[
    S(IceTank),
    S(MidTank),
    S(LongHighTank),
    S(LongLowTank),
    S(MidDps),
    C(LongOrIceDps),
];
const STACK2: &[StatusRef] = &[
    C(ShortOrIceTank),
    S(LongHighTank),
    S(LongLowTank),
    S(ShortHighDps),
    S(ShortLowDps),
    C(LongOrIceDps),
];
const STACK3: &[StatusRef] = &[
    C(ShortOrIceTank),
    S(MidTank),
    S(ShortHighDps),
    S(ShortLowDps),
    S(MidDps),
    S(IceDps),
];
const STACK4: &[StatusRef] = &[S(LongHighTank), S(LongLowTank), S(MidDps), C(LongOrIceDps)];
const LASER1: &[StatusRef] = &[S(LongHighTank), S(LongLowTank), C(LongOrIceDps)];
const LASER2: &[StatusRef] = &[C(ShortOrIceTank), S(ShortHighDps), S(ShortLowDps)];
const LASER3: &[StatusRef] = &[S(MidTank), S(MidDps)];

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetSet {
    Stack1,
    Stack2,
    Stack3,
    Stack4,
    Laser1,
    Laser2,
    Laser3,
}

impl TargetSet {
    /// Status effects whose holders belong to this set.
    pub const fn statuses(self) -> &'static [StatusRef] {
        match self {
            Self::Stack1 => STACK1,
            Self::Stack2 => STACK2,
            Self::Stack3 => STACK3,
            Self::Stack4 => STACK4,
            Self::Laser1 => LASER1,
            Self::Laser2 => LASER2,
            Self::Laser3 => LASER3,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Every [`TargetSet`] materialised for one roster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetSetCatalog {
    sets: [BTreeSet<ActorId>; TargetSet::COUNT],
}

impl TargetSetCatalog {
    pub fn build(roster: &Roster) -> Self {
        let mut sets: [BTreeSet<ActorId>; TargetSet::COUNT] = Default::default();
        for set in TargetSet::iter() {
            sets[set.index()] = set
                .statuses()
                .iter()
                .filter_map(|&status| roster.by_status(status))
                .map(|player| player.id)
                .collect();
        }
        Self { sets }
    }

    pub fn get(&self, set: TargetSet) -> &BTreeSet<ActorId> {
        &self.sets[set.index()]
    }

    pub fn contains(&self, set: TargetSet, id: ActorId) -> bool {
        self.get(set).contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{Role, RosterResolver};
    use crate::testing::{self, FixedTelemetry};

    fn ids(roster: &Roster, roles: &[Role]) -> BTreeSet<ActorId> {
        roles.iter().map(|&role| roster.by_role(role).id).collect()
    }

    #[test]
    fn builds_sets_for_ice_tank_party() {
        use Role::*;
        let roster = testing::standard_roster();
        let catalog = TargetSetCatalog::build(&roster);

        let expected = [
            (TargetSet::Stack1, vec![MT, ST, H1, H2, D3, D4]),
            (TargetSet::Stack2, vec![MT, H1, H2, D1, D2, D4]),
            (TargetSet::Stack3, vec![MT, ST, D1, D2, D3]),
            (TargetSet::Stack4, vec![H1, H2, D3, D4]),
            (TargetSet::Laser1, vec![H1, H2, D4]),
            (TargetSet::Laser2, vec![MT, D1, D2]),
            (TargetSet::Laser3, vec![ST, D3]),
        ];
        for (set, roles) in expected {
            assert_eq!(catalog.get(set), &ids(&roster, &roles), "{set}");
        }
    }

    #[test]
    fn ice_dps_party_loses_ice_tank_from_stack1() {
        use Role::*;
        let input = testing::input(testing::ICE_DPS_STATUSES, 2);
        let roster = RosterResolver::resolve(&input, &FixedTelemetry::party()).unwrap();
        let catalog = TargetSetCatalog::build(&roster);

        assert_eq!(catalog.get(TargetSet::Stack1), &ids(&roster, &[ST, H1, H2, D3, D4]));
        assert_eq!(
            catalog.get(TargetSet::Stack3),
            &ids(&roster, &[MT, ST, D1, D2, D3, D4])
        );
    }

    #[test]
    fn every_member_belongs_to_the_roster() {
        let roster = testing::standard_roster();
        let catalog = TargetSetCatalog::build(&roster);
        for set in TargetSet::iter() {
            for &id in catalog.get(set) {
                assert!(roster.player(id).is_some(), "{set} {id}");
            }
        }
    }
}
