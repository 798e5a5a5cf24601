//! Unit tests for pk-core primitives.

#[cfg(test)]
mod ids {
    use crate::{GraphDims, NodeKind, TypeIndex};

    fn dims() -> GraphDims {
        // 3x2 floor, 2 floors, 4 access types
        GraphDims::new(3, 2, 2, 4)
    }

    #[test]
    fn cell_and_node_counts() {
        let d = dims();
        assert_eq!(d.cell_count(), 12);
        assert_eq!(d.node_count(), 2 * 12 + 4);
    }

    #[test]
    fn drive_walk_pair_shares_cell_index() {
        let d = dims();
        let drive = d.drive(1, 1, 0);
        let walk = d.walk(1, 1, 0);
        assert_eq!(walk.0 - drive.0, d.cell_count() as u32);
        assert!(d.is_drive(drive));
        assert!(d.is_walk(walk));
        assert!(d.is_drive_walk_bridge(drive, walk));
    }

    #[test]
    fn coords_roundtrip() {
        let d = dims();
        for z in 0..d.p {
            for y in 0..d.m {
                for x in 0..d.n {
                    let node = d.drive(x, y, z);
                    assert_eq!(d.coords_of(node), (x, y, z));
                }
            }
        }
    }

    #[test]
    fn floor_cell_count_differs_from_cell_count_for_multi_floor_grids() {
        let d = dims();
        assert_eq!(d.floor_cell_count(), 6);
        assert_ne!(d.floor_cell_count(), d.cell_count());
    }

    #[test]
    fn kind_of_classifies_all_three_ranges() {
        let d = dims();
        assert!(matches!(d.kind_of(d.drive(0, 0, 0)), NodeKind::Drive { x: 0, y: 0, z: 0 }));
        assert!(matches!(d.kind_of(d.walk(2, 1, 1)), NodeKind::Walk { x: 2, y: 1, z: 1 }));
        match d.kind_of(d.sink(TypeIndex(3))) {
            NodeKind::Sink { type_index } => assert_eq!(type_index.0, 3),
            other => panic!("expected Sink, got {other:?}"),
        }
    }

    #[test]
    fn node_sentinel() {
        use crate::NodeId;
        assert!(NodeId::NONE.is_none());
        assert_eq!(NodeId::default(), NodeId::NONE);
    }
}

#[cfg(test)]
mod role {
    use crate::CellRole;

    #[test]
    fn char_roundtrip() {
        for c in ['@', ' ', '.', 'x', 'u', 'd', 'e', 'a'] {
            let role = CellRole::from_char(c).unwrap();
            assert_eq!(role.to_char(), c);
        }
        assert!(CellRole::from_char('?').is_none());
    }

    #[test]
    fn spot_is_drive_in_only() {
        assert!(CellRole::Spot.drivable_dest());
        assert!(!CellRole::Spot.drives_out());
    }

    #[test]
    fn access_is_walk_out_only() {
        assert!(CellRole::Access.walkable_dest());
        assert!(!CellRole::Access.walks_out());
    }

    #[test]
    fn wall_admits_nothing() {
        assert!(!CellRole::Wall.drivable_dest());
        assert!(!CellRole::Wall.walkable_dest());
        assert!(!CellRole::Wall.drives_out());
        assert!(!CellRole::Wall.walks_out());
    }

    #[test]
    fn entrance_is_not_a_valid_drive_target() {
        assert!(!CellRole::Entrance.drivable_dest());
    }

    #[test]
    fn ramps_drive_and_walk_out() {
        assert!(CellRole::RampUp.drives_out());
        assert!(CellRole::RampUp.walks_out());
        assert!(CellRole::RampDown.is_ramp());
        assert!(!CellRole::Driveway.is_ramp());
    }
}

#[cfg(test)]
mod time {
    use crate::SimTime;

    #[test]
    fn arithmetic() {
        let a = SimTime(10);
        let b = SimTime(3);
        assert_eq!((a - b).get(), 7);
        assert_eq!((a + b).get(), 13);
        assert!(SimTime::ZERO < a);
    }

    #[test]
    fn ordering_for_tie_break() {
        let mut times = vec![SimTime(5), SimTime(1), SimTime(3)];
        times.sort();
        assert_eq!(times, vec![SimTime(1), SimTime(3), SimTime(5)]);
    }
}

#[cfg(test)]
mod error {
    use crate::ParkError;

    #[test]
    fn recoverable_kinds() {
        assert!(ParkError::ParkFull.is_recoverable());
        assert!(ParkError::Unreachable { entrance: 0, access_type: 'c' }.is_recoverable());
        assert!(!ParkError::GraphNotBuilt.is_recoverable());
        assert!(!ParkError::UnknownVehicle("car7".into()).is_recoverable());
    }
}
