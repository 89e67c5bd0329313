//! citywalk — end-to-end walkthrough of the facility navigation workspace.
//!
//! Guides a pedestrian in central Kyiv to the best nearby sheltering
//! facility: decode an embedded registry payload, query the spatial index,
//! settle the winner by travel time, then replay a walk along the route and
//! print every announcement as it triggers.
//!
//! The travel-time matrix and route geometry normally come from external
//! HTTP services; here both are fabricated locally (straight-line walking
//! estimates) so the demo runs offline.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::Result;

use nav_core::GeoPoint;
use nav_dataset::FacilitySet;
use nav_guide::{Instruction, Navigator, Route};
use nav_replay::replay;
use nav_select::{resolve, TravelTimeMatrix};

// ── Constants ─────────────────────────────────────────────────────────────────

const K_CANDIDATES: usize = 3;
const WALK_SPEED_MPS: f64 = 1.4;
const REPLAY_INTERVAL_MS: u64 = 200;
const PATH_POINTS: usize = 24;

/// A pedestrian near Maidan Nezalezhnosti.
const USER: GeoPoint = GeoPoint { lat: 50.4509, lng: 30.5245 };

// ── Embedded registry payload ─────────────────────────────────────────────────

const REGISTRY_PAYLOAD: &str = r#"[
  {"lat": 50.4547, "lng": 30.5238, "title": "Underground passage, Maidan Nezalezhnosti",
   "district": "Shevchenkivskyi", "kind": "underground passage", "typeBuilding": "dual-use",
   "workingTime": "24/7"},
  {"lat": 50.4461, "lng": 30.5177, "title": "Parking level -2, Basseina St",
   "district": "Pecherskyi", "kind": "parking", "typeBuilding": "basement",
   "workingTime": "06:00-23:00"},
  {"lat": 50.4442, "lng": 30.5368, "title": "School 57 basement",
   "district": "Pecherskyi", "kind": "education", "typeBuilding": "basement",
   "workingTime": "08:00-20:00"},
  {"lat": 50.4586, "lng": 30.5170, "title": "Metro Zoloti Vorota vestibule",
   "district": "Shevchenkivskyi", "kind": "metro", "typeBuilding": "underground",
   "workingTime": "05:30-00:00"},
  {"lat": 50.4264, "lng": 30.5560, "title": "Metro Druzhby Narodiv vestibule",
   "district": "Pecherskyi", "kind": "metro", "typeBuilding": "underground",
   "workingTime": "05:30-00:00"}
]"#;

// ── Local stand-ins for the external services ─────────────────────────────────

/// Straight-line walking-time matrix — stands in for the one-to-many
/// travel-time service.
fn fabricate_matrix(origin: GeoPoint, destinations: &[GeoPoint]) -> Result<TravelTimeMatrix> {
    let durations = destinations
        .iter()
        .map(|&d| origin.distance_m(d) / WALK_SPEED_MPS)
        .collect();
    Ok(TravelTimeMatrix::new(origin, destinations.to_vec(), durations)?)
}

/// Straight-line route with three maneuvers — stands in for the routing
/// service.
fn fabricate_route(from: GeoPoint, to: GeoPoint, destination_title: &str) -> Route {
    let coordinates: Vec<GeoPoint> = (0..PATH_POINTS)
        .map(|i| {
            let t = i as f64 / (PATH_POINTS - 1) as f64;
            GeoPoint::new(
                from.lat + (to.lat - from.lat) * t,
                from.lng + (to.lng - from.lng) * t,
            )
        })
        .collect();

    let instructions = vec![
        Instruction::new(0, format!("Head toward {destination_title}")),
        Instruction::new(PATH_POINTS / 2, "Continue straight".to_string()),
        Instruction::new(PATH_POINTS - 1, format!("You have arrived at {destination_title}")),
    ];

    Route::new(coordinates, instructions)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== citywalk — facility navigation demo ===");
    println!("User position: {USER}");
    println!();

    // 1. Decode the registry payload and build the per-snapshot index.
    let set = FacilitySet::from_json(REGISTRY_PAYLOAD)?;
    let index = set.build_index()?;
    println!("Dataset: {} facilities indexed", index.len());

    // 2. Proximity candidates.
    let candidate_ids = index.k_nearest(USER, K_CANDIDATES);
    let candidates: Vec<GeoPoint> = candidate_ids.iter().map(|&id| index.point(id)).collect();
    println!("Nearest {} candidates:", candidates.len());
    for &id in &candidate_ids {
        let record = set.record(id);
        println!(
            "  {:<45} {:>7.0} m",
            record.title,
            USER.distance_m(record.point()),
        );
    }

    // 3. Settle the winner by travel time.
    let matrix = fabricate_matrix(USER, &candidates)?;
    let chosen = resolve(&candidates, &matrix)?;
    let destination = set.record(candidate_ids[chosen]);
    println!();
    println!(
        "Destination: {} ({:.0} s on foot)",
        destination.title, matrix.durations_secs[chosen]
    );
    println!();

    // 4. Start a guidance session on the fabricated route.
    let route = fabricate_route(USER, destination.point(), &destination.title);
    let track = route.coordinates.clone();
    let mut navigator = Navigator::start(route, USER)?;

    // 5. Replay the walk.  The replay worker feeds a channel; this thread is
    //    the single consumer, so each position is processed to completion
    //    before the next — the same discipline a live sensor host follows.
    let (tx, rx) = mpsc::channel();
    let handle = replay(track, Duration::from_millis(REPLAY_INTERVAL_MS), move |p| {
        let _ = tx.send(p);
    });

    let t0 = Instant::now();
    let mut announced = 0usize;
    for position in rx {
        if let Some(event) = navigator.update(position) {
            // Speech sink stand-in: one event, one utterance.
            println!(
                "  [{:>5.1}s] announce: {}",
                t0.elapsed().as_secs_f64(),
                event.text
            );
            announced += 1;
        }
    }
    handle.wait();

    // 6. Summary.
    println!();
    println!(
        "Guidance complete: {announced} announcements, session {}",
        if navigator.is_completed() { "completed" } else { "still tracking" }
    );

    Ok(())
}
