//! Unit tests for the heap and graph primitives.

#[cfg(test)]
mod heap {
    use crate::IndexedMinHeap;
    use pk_core::NodeId;

    const NOCON: i64 = i64::MAX;

    #[test]
    fn extracts_in_ascending_weight_order() {
        let wt = vec![5, 3, 8, 1, 4];
        let mut h = IndexedMinHeap::new(wt.len());
        // Identity build doesn't heapify; force the heap property by
        // updating every node once, as a client relaxing from a source would.
        for i in 0..wt.len() as u32 {
            h.decrease_or_update(NodeId(i), &wt);
        }
        let mut out = Vec::new();
        while let Some(n) = h.extract_min(&wt) {
            out.push(wt[n.index()]);
        }
        assert_eq!(out, vec![1, 3, 4, 5, 8]);
    }

    #[test]
    fn decrease_after_partial_drain_repositions_correctly() {
        let mut wt = vec![10, 10, 10, 10];
        let mut h = IndexedMinHeap::new(wt.len());
        wt[2] = 1;
        h.decrease_or_update(NodeId(2), &wt);
        assert_eq!(h.extract_min(&wt), Some(NodeId(2)));
        wt[0] = 0;
        h.decrease_or_update(NodeId(0), &wt);
        assert_eq!(h.extract_min(&wt), Some(NodeId(0)));
    }

    #[test]
    fn reinsert_brings_back_an_evicted_node() {
        let wt = vec![1, 2, 3];
        let mut h = IndexedMinHeap::new(3);
        let first = h.extract_min(&wt).unwrap();
        assert!(!h.is_empty());
        h.reinsert(first, &wt);
        let mut seen = Vec::new();
        while let Some(n) = h.extract_min(&wt) {
            seen.push(n);
        }
        assert_eq!(seen.len(), 3);
        assert!(seen.contains(&first));
    }

    #[test]
    fn reset_restores_only_touched_nodes() {
        let mut wt = vec![NOCON; 5];
        let mut st = vec![NodeId::NONE; 5];
        let mut h = IndexedMinHeap::new(5);

        wt[0] = 0;
        h.decrease_or_update(NodeId(0), &wt);
        while let Some(n) = h.extract_min(&wt) {
            if n == NodeId(3) {
                break;
            }
            for e in [1, 2] {
                if wt[e] > wt[n.index()] + 1 {
                    wt[e] = wt[n.index()] + 1;
                    st[e] = n;
                    h.decrease_or_update(NodeId(e as u32), &wt);
                }
            }
        }

        h.reset(&mut st, &mut wt, NOCON);
        assert!(wt.iter().all(|&w| w == NOCON));
        assert!(st.iter().all(|&s| s == NodeId::NONE));
        assert!(h.is_empty() == false);
        assert_eq!(h.capacity(), 5);
    }

    #[test]
    fn empty_heap_extract_returns_none() {
        let wt: Vec<i64> = vec![];
        let mut h = IndexedMinHeap::new(0);
        assert!(h.is_empty());
        assert_eq!(h.extract_min(&wt), None);
    }
}

#[cfg(test)]
mod graph {
    use crate::WeightedDiGraph;
    use pk_core::NodeId;

    #[test]
    fn insert_and_read_edges() {
        let mut g = WeightedDiGraph::new(3);
        g.insert_edge(NodeId(0), NodeId(1), 5);
        g.insert_edge(NodeId(0), NodeId(2), 9);
        let edges = g.out_edges(NodeId(0));
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].to, NodeId(1));
        assert_eq!(edges[0].weight, 5);
    }

    #[test]
    fn nodes_start_active() {
        let g = WeightedDiGraph::new(4);
        for i in 0..4 {
            assert!(g.is_active(NodeId(i)));
        }
    }

    #[test]
    fn deactivate_and_reactivate() {
        let mut g = WeightedDiGraph::new(2);
        g.deactivate(NodeId(1));
        assert!(!g.is_active(NodeId(1)));
        g.activate(NodeId(1));
        assert!(g.is_active(NodeId(1)));
    }

    #[test]
    fn edges_survive_deactivation() {
        let mut g = WeightedDiGraph::new(2);
        g.insert_edge(NodeId(0), NodeId(1), 1);
        g.deactivate(NodeId(1));
        assert_eq!(g.out_edges(NodeId(0)).len(), 1);
    }
}
