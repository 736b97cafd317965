use chrono::{Duration, Utc};
use tickrange::{TickRange, TickUnit};

fn main() {
    let now = Utc::now();
    let range = TickRange::new(Some(now - Duration::hours(6)), Some(now), Some(TickUnit::Hours));

    println!("{range}");
    println!("ticks: {}", range.len());
    for tick in &range {
        println!("  {tick}");
    }
}
