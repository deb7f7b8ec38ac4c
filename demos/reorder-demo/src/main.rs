//! Replays a short drag session against a headless list and prints what a
//! host would render after each step.
//!
//! `RUST_LOG=debug cargo run -p reorder-demo [-- --grid]`

use reorder_core::prelude::{EdgeInsets, PointerEvent, Rect, Vec2};
use reorder_ui::{
    EngineEvent, Item, LayoutConfig, LayoutMode, ReorderConfig, ReorderableList, ScrollController,
};
use web_time::{Duration, Instant};

const NAMES: [&str; 12] = [
    "Inbox", "Today", "Upcoming", "Someday", "Work", "Home", "Errands", "Reading", "Music",
    "Travel", "Garden", "Archive",
];

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let grid = std::env::args().any(|a| a == "--grid");
    let items = NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| Item::new(i as u64, *name))
        .collect();

    let t0 = Instant::now();
    let mut list = ReorderableList::new(
        items,
        Rect::new(0.0, 0.0, 430.0, 480.0),
        EdgeInsets {
            top: 0.0,
            bottom: 20.0,
            left: 0.0,
            right: 0.0,
        },
        ReorderConfig::default(),
        LayoutConfig::default(),
        t0,
    )?;

    if grid {
        list.set_mode(LayoutMode::Grid { columns: 4 }, t0)?;
    }

    let haptics = list.engine().feedback();
    haptics.subscribe(|n| log::info!("haptic pulse #{n}"));

    print_order("start", &list);

    let grab = list.items()[0].frame.center();
    let target = list.items()[2].frame.center();
    let bottom = Vec2::new(grab.x, 470.0);

    // (offset from t0 in ms, event)
    let script = [
        (0, PointerEvent::down(grab)),
        (260, PointerEvent::moved(grab + Vec2::new(0.0, 4.0))),
        (400, PointerEvent::moved(target)),
        (600, PointerEvent::moved(bottom)),
        (1_400, PointerEvent::moved(bottom + Vec2::new(0.0, 2.0))),
        (1_500, PointerEvent::up(bottom)),
    ];

    let frame = Duration::from_millis(16);
    let mut now = t0;
    for (at, event) in script {
        let due = t0 + Duration::from_millis(at);
        while now + frame < due {
            now += frame;
            report(list.advance(now).as_slice(), &list);
        }
        now = due;
        report(list.handle_pointer(&event, now).as_slice(), &list);
    }

    let deadline = now + Duration::from_secs(2);
    while now < deadline && list.engine().selected().is_some() {
        now += frame;
        report(list.advance(now).as_slice(), &list);
    }

    print_order("end", &list);
    println!(
        "scrolled to {:.0} of {:.0}",
        list.scroll().metrics().offset,
        list.scroll().metrics().max_offset
    );
    Ok(())
}

fn report(events: &[EngineEvent], list: &ReorderableList<&str>) {
    for event in events {
        match event {
            EngineEvent::Lifted(id) => println!("lifted {id}"),
            EngineEvent::Swapped(s) => {
                println!("swap {} <-> {} (slots {} and {})", s.dragged, s.displaced, s.from, s.to);
                print_order("  now", list);
            }
            EngineEvent::Scrolled(offset) => log::debug!("scroll offset {offset}"),
            EngineEvent::Released(r) => println!("released: {r:?}"),
            EngineEvent::Settled(id) => println!("settled {id}"),
        }
    }
}

fn print_order(label: &str, list: &ReorderableList<&str>) {
    println!("{label}: {}", list.payloads().iter().map(|p| **p).collect::<Vec<_>>().join(", "));
}
