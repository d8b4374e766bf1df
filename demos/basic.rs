use snowflake::{Id, Snowflake};

fn main() {
    // Create a generator with node ID 1
    let generator = Snowflake::new(1).unwrap();

    let id1 = generator.generate();
    let id2 = generator.generate();
    let id3 = generator.generate();

    println!("Generated IDs (guaranteed to be monotonic):");
    for id in [id1, id2, id3] {
        print_id(id, &generator);
    }

    println!("\nEncodings of {id3}:");
    println!("  base2:  {}", id3.to_base2());
    println!("  base32: {}", id3.to_base32());
    println!("  base36: {}", id3.to_base36());
    println!("  base58: {}", id3.to_base58());
    println!("  base64: {}", id3.to_base64());
    println!("  json:   {}", String::from_utf8_lossy(&id3.to_json()));

    let parsed = Id::parse_base58(id3.to_base58()).unwrap();
    assert_eq!(parsed, id3);
}

fn print_id(id: Id, generator: &Snowflake) {
    let (_, node, sequence) = generator.extract.decompose(id);
    let timestamp = generator.extract.time(id);
    let datetime = generator.extract.datetime(id);

    println!(
        "  ID: {id}, Timestamp: {timestamp}, Human date: {datetime:?}, Node ID: {node}, Sequence: {sequence}"
    );
}
