//! Simulates a few press gestures against the recognizer with trace
//! logging enabled.
//!
//! Run with:
//! ```sh
//! RUST_LOG=trace cargo run -p tactile_input --example press_sim
//! ```

use tactile_core::Timers;
use tactile_input::{LongPressConfig, LongPressRecognizer, PointerEvent};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let config = LongPressConfig::default().threshold_ms(400);
    let mut recognizer = LongPressRecognizer::new(config, |event, pos| {
        println!("long press recognized at {:?} (t={})", pos, event.timestamp);
    })
    .on_start(|event, pos| println!("press started at {:?} (t={})", pos, event.timestamp))
    .on_finish(|event, _, held| println!("press finished after {held}ms (t={})", event.timestamp))
    .on_cancel(|event, _| println!("press cancelled (t={})", event.timestamp));

    let mut timers = Timers::new();

    // A quick tap: released before the threshold
    println!("--- tap ---");
    let mut down = PointerEvent::mouse(50.0, 50.0, 0);
    recognizer.pointer_down(&mut timers, &mut down).unwrap();
    pump(&mut timers, &mut recognizer, 150);
    let up = PointerEvent::mouse(50.0, 50.0, 150);
    recognizer.pointer_up(&mut timers, &up);

    // A held press: crosses the threshold, then releases
    println!("--- held press ---");
    let mut down = PointerEvent::mouse(80.0, 80.0, 150);
    recognizer.pointer_down(&mut timers, &mut down).unwrap();
    pump(&mut timers, &mut recognizer, 800);
    let up = PointerEvent::mouse(80.0, 80.0, 800);
    recognizer.pointer_up(&mut timers, &up);
}

fn pump(timers: &mut Timers, recognizer: &mut LongPressRecognizer, now: u64) {
    for id in timers.advance(now) {
        recognizer.timer_fired(id);
    }
}
