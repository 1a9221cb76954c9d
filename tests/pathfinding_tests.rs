//! Tests using the heap as the frontier of shortest-path searches and as an
//! event queue
//!
//! The search states carry floating point costs, which have no `Ord` impl, so
//! every heap here is built with an explicit comparator.

use rust_binary_heap::{BinaryHeap, Comparator};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, Copy)]
struct State {
    cost: f64,
    node: usize,
}

impl State {
    fn new(cost: f64, node: usize) -> Self {
        Self { cost, node }
    }
}

fn frontier() -> BinaryHeap<State> {
    BinaryHeap::from_fn(|a: &State, b: &State| a.cost.total_cmp(&b.cost))
}

/// Lazy Dijkstra: stale frontier entries are skipped instead of updated in place
fn dijkstra(adjacency: &[Vec<(usize, f64)>], source: usize) -> Vec<Option<f64>> {
    let mut dist: Vec<Option<f64>> = vec![None; adjacency.len()];
    let mut heap = frontier();

    dist[source] = Some(0.0);
    heap.push(State::new(0.0, source));

    while let Some(State { cost, node }) = heap.pop() {
        if dist[node].is_some_and(|best| cost > best) {
            continue;
        }
        for &(next, weight) in &adjacency[node] {
            let candidate = cost + weight;
            if dist[next].is_none_or(|best| candidate < best) {
                dist[next] = Some(candidate);
                heap.push(State::new(candidate, next));
            }
        }
    }

    dist
}

/// Bellman-Ford reference for comparing distances
fn bellman_ford(adjacency: &[Vec<(usize, f64)>], source: usize) -> Vec<Option<f64>> {
    let mut dist: Vec<Option<f64>> = vec![None; adjacency.len()];
    dist[source] = Some(0.0);

    for _ in 0..adjacency.len() {
        for (node, edges) in adjacency.iter().enumerate() {
            let Some(base) = dist[node] else { continue };
            for &(next, weight) in edges {
                let candidate = base + weight;
                if dist[next].is_none_or(|best| candidate < best) {
                    dist[next] = Some(candidate);
                }
            }
        }
    }

    dist
}

fn grid_graph(width: usize, height: usize) -> Vec<Vec<(usize, f64)>> {
    let mut adjacency = vec![Vec::new(); width * height];
    for y in 0..height {
        for x in 0..width {
            let id = y * width + x;
            // Deterministic but uneven weights
            let weight = 1.0 + ((x * 7 + y * 13) % 5) as f64 * 0.5;
            if x + 1 < width {
                adjacency[id].push((id + 1, weight));
                adjacency[id + 1].push((id, weight));
            }
            if y + 1 < height {
                adjacency[id].push((id + width, weight + 0.25));
                adjacency[id + width].push((id, weight + 0.25));
            }
        }
    }
    adjacency
}

#[test]
fn test_dijkstra_simple_graph() {
    //   0 --1.0--> 1 --2.0--> 3
    //   |          ^
    //  4.0        1.5
    //   v          |
    //   2 ---------+
    let adjacency = vec![
        vec![(1, 1.0), (2, 4.0)],
        vec![(3, 2.0)],
        vec![(1, 1.5)],
        vec![],
        vec![],
    ];

    let dist = dijkstra(&adjacency, 0);
    assert_eq!(dist, vec![Some(0.0), Some(1.0), Some(4.0), Some(3.0), None]);
}

#[test]
fn test_dijkstra_matches_bellman_ford_on_grid() {
    let adjacency = grid_graph(12, 9);
    for source in [0, 17, 107] {
        assert_eq!(dijkstra(&adjacency, source), bellman_ford(&adjacency, source));
    }
}

#[test]
fn test_frontier_peek_is_cheapest() {
    let mut heap = frontier();
    heap.push(State::new(2.5, 1));
    heap.push(State::new(0.5, 2));
    heap.push(State::new(1.5, 3));

    assert_eq!(heap.peek().map(|s| s.node), Some(2));
    assert!(heap.contains(&State::new(1.5, 99)));
    assert_eq!(heap.count_of(&State::new(7.0, 1)), 0);
}

#[test]
fn test_frontier_keyed_by_shared_table() {
    // Heap of node ids ordered by a distance table the caller keeps updating
    let table = Arc::new(RwLock::new(vec![5.0_f64, 1.0, 3.0, 4.0]));
    let lookup = Arc::clone(&table);
    let mut heap = BinaryHeap::from_fn(move |a: &usize, b: &usize| {
        let dist = lookup.read().unwrap();
        dist[*a].total_cmp(&dist[*b])
    });

    heap.extend([0, 1, 2]);
    assert_eq!(heap.peek(), Some(&1));

    // New entries see the current table contents
    table.write().unwrap()[3] = 0.5;
    heap.push(3);
    assert_eq!(heap.pop(), Some(3));
    assert_eq!(heap.pop(), Some(1));
    assert_eq!(heap.pop(), Some(2));
    assert_eq!(heap.pop(), Some(0));
}

#[derive(Debug, Clone, PartialEq)]
struct Event {
    time: u64,
    priority: u8,
    name: &'static str,
}

impl Event {
    fn new(time: u64, priority: u8, name: &'static str) -> Self {
        Self {
            time,
            priority,
            name,
        }
    }
}

/// Earliest time first, then highest priority
fn event_order() -> Comparator<Event> {
    Comparator::from_fn(|a: &Event, b: &Event| {
        a.time.cmp(&b.time).then_with(|| b.priority.cmp(&a.priority))
    })
}

#[test]
fn test_event_queue_scheduling() {
    let mut queue = BinaryHeap::with_comparator(event_order());
    queue.push(Event::new(30, 1, "flush"));
    queue.push(Event::new(10, 1, "tick"));
    queue.push(Event::new(10, 9, "interrupt"));
    queue.push(Event::new(20, 5, "timer"));

    let mut fired = Vec::new();
    let mut clock = 0;
    while let Some(event) = queue.pop() {
        assert!(event.time >= clock);
        clock = event.time;
        fired.push(event.name);

        // Periodic timer reschedules itself once
        if event.name == "timer" && clock < 40 {
            queue.push(Event::new(clock + 20, 5, "timer"));
        }
    }

    assert_eq!(fired, vec!["interrupt", "tick", "timer", "flush", "timer"]);
}

#[test]
fn test_event_queue_snapshot() {
    let mut queue = BinaryHeap::with_comparator(event_order());
    for (i, name) in ["a", "b", "c", "d"].into_iter().enumerate() {
        queue.push(Event::new(i as u64 * 5, 0, name));
    }

    // Draining a copy leaves the live queue intact
    let preview: Vec<_> = queue.clone().into_iter_sorted().map(|e| e.name).collect();
    assert_eq!(preview, vec!["a", "b", "c", "d"]);
    assert_eq!(queue.len(), 4);
    assert_eq!(queue.peek().map(|e| e.name), Some("a"));

    let mut per_time: HashMap<u64, usize> = HashMap::new();
    for event in &queue {
        *per_time.entry(event.time).or_default() += 1;
    }
    assert_eq!(per_time.len(), 4);
}
