use rand::{rng, Rng};
use snowflake::Snowflake;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() {
    // One generator shared by every thread, no lock needed
    let generator = Arc::new(Snowflake::new(1).unwrap());
    let mut handles = vec![];

    for thread_id in 0..4 {
        let generator = Arc::clone(&generator);
        handles.push(thread::spawn(move || {
            let mut ids = Vec::new();
            let mut rng = rng();

            for i in 0..5 {
                let id = generator.generate();
                let (ts, node, seq) = generator.extract.decompose(id);
                println!("Thread {thread_id} generated ID {i} (ts={ts}, node={node}, seq={seq})");
                ids.push(id);

                thread::sleep(Duration::from_millis(rng.random_range(0..=9)));
            }
            ids
        }));
    }

    let mut all_ids = Vec::new();
    for handle in handles {
        all_ids.extend(handle.join().unwrap());
    }

    let unique: HashSet<_> = all_ids.iter().copied().collect();
    assert_eq!(unique.len(), all_ids.len(), "Duplicate ID generated!");
    println!("\nTotal unique IDs generated: {}", unique.len());

    all_ids.sort_unstable();
    for pair in all_ids.windows(2) {
        assert!(pair[1] > pair[0], "IDs not monotonically increasing!");
    }
    println!("All IDs are unique and sortable");
}
