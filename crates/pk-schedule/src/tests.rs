//! Unit tests for the order merge stream and waiting queue.

#[cfg(test)]
mod merge {
    use pk_core::SimTime;

    use crate::order::{ArrivalRequest, RestrictionScope, RestrictionWindow, VehicleOrder};
    use crate::{OrderStream, ScheduledOrder};

    fn arrival(id: &str, t: i64) -> VehicleOrder {
        VehicleOrder::Arrival(ArrivalRequest {
            id: id.to_string(),
            t_request: SimTime(t),
            entrance: (0, 0, 0),
            access_type: 'C',
        })
    }

    #[test]
    fn orders_come_out_in_non_decreasing_time() {
        let vehicles = vec![arrival("a", 5), arrival("b", 1), arrival("c", 3)];
        let mut stream = OrderStream::merge(vehicles, vec![]);
        let mut times = Vec::new();
        while let Some((t, _)) = stream.next() {
            times.push(t.get());
        }
        assert_eq!(times, vec![1, 3, 5]);
    }

    #[test]
    fn equal_time_restriction_precedes_departure_precedes_arrival() {
        let vehicles = vec![
            arrival("car", 10),
            VehicleOrder::DepartureById { id: "old".into(), t: SimTime(10) },
        ];
        let windows = vec![RestrictionWindow {
            t_a: SimTime(10),
            t_b: SimTime(20),
            scope: RestrictionScope::Cell { x: 1, y: 1, z: 0 },
        }];
        let mut stream = OrderStream::merge(vehicles, windows);

        let (_, first) = stream.next().unwrap();
        assert!(matches!(first, ScheduledOrder::RestrictionApply(_)));
        let (_, second) = stream.next().unwrap();
        assert!(matches!(second, ScheduledOrder::DepartureById { .. }));
        let (_, third) = stream.next().unwrap();
        assert!(matches!(third, ScheduledOrder::Arrival(_)));
    }

    #[test]
    fn window_with_tb_less_than_ta_never_releases() {
        let windows = vec![RestrictionWindow {
            t_a: SimTime(10),
            t_b: SimTime(5),
            scope: RestrictionScope::Floor { z: 0 },
        }];
        let mut stream = OrderStream::merge(vec![], windows);
        let (_, only) = stream.next().unwrap();
        assert!(matches!(only, ScheduledOrder::RestrictionApply(_)));
        assert!(stream.next().is_none());
    }

    #[test]
    fn look_ahead_guard_detects_same_time_mutation_run() {
        let windows = vec![
            RestrictionWindow { t_a: SimTime(5), t_b: SimTime(5), scope: RestrictionScope::Cell { x: 0, y: 0, z: 0 } },
            RestrictionWindow { t_a: SimTime(20), t_b: SimTime(20), scope: RestrictionScope::Cell { x: 1, y: 0, z: 0 } },
        ];
        let vehicles = vec![VehicleOrder::DepartureByCoord { t: SimTime(20), x: 2, y: 2, z: 0 }];
        let mut stream = OrderStream::merge(vehicles, windows);

        // First window's apply+release both at t=5.
        let (t1, _) = stream.next().unwrap();
        assert!(stream.next_is_same_time_mutation(t1));
        stream.next();

        // At t=20: a restriction apply and a departure-by-coord land together.
        let (t2, order) = stream.next().unwrap();
        assert!(matches!(order, ScheduledOrder::RestrictionApply(_)));
        assert!(stream.next_is_same_time_mutation(t2));
        let (_, order2) = stream.next().unwrap();
        assert!(matches!(order2, ScheduledOrder::DepartureByCoord { .. }));
        assert!(!stream.next_is_same_time_mutation(t2));
    }

    #[test]
    fn empty_stream_has_no_same_time_mutation() {
        let stream = OrderStream::merge(vec![], vec![]);
        assert!(stream.is_empty());
        assert!(!stream.next_is_same_time_mutation(SimTime::ZERO));
    }
}

#[cfg(test)]
mod waiting_queue {
    use pk_core::SimTime;

    use crate::order::ArrivalRequest;
    use crate::WaitingQueue;

    fn req(id: &str) -> ArrivalRequest {
        ArrivalRequest { id: id.to_string(), t_request: SimTime::ZERO, entrance: (0, 0, 0), access_type: 'C' }
    }

    #[test]
    fn fifo_ordering() {
        let mut q = WaitingQueue::new();
        q.push_back(req("a"));
        q.push_back(req("b"));
        assert_eq!(q.pop_front().unwrap().id, "a");
        assert_eq!(q.pop_front().unwrap().id, "b");
        assert!(q.is_empty());
    }

    #[test]
    fn push_front_regains_head_position() {
        let mut q = WaitingQueue::new();
        q.push_back(req("a"));
        q.push_back(req("b"));
        let retried = q.pop_front().unwrap();
        q.push_front(retried);
        assert_eq!(q.pop_front().unwrap().id, "a");
        assert_eq!(q.pop_front().unwrap().id, "b");
    }

    #[test]
    fn len_tracks_contents() {
        let mut q = WaitingQueue::new();
        assert_eq!(q.len(), 0);
        q.push_back(req("a"));
        assert_eq!(q.len(), 1);
        q.pop_front();
        assert_eq!(q.len(), 0);
    }
}
