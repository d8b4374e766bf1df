use snowflake::{Snowflake, SnowflakeConfig, SnowflakeConfigBuilder};

fn main() {
    // 12 node bits = 4096 nodes, leaving 10 bits = 1024 IDs per ms
    let config = SnowflakeConfig::builder()
        .node_bits(12)
        .sequence_bits(10)
        .epoch(1_577_836_800_000) // 2020-01-01T00:00:00Z
        .node(42)
        .verbose(true)
        .build()
        .unwrap();

    let generator = Snowflake::with_config(config).unwrap();

    println!("Generator configuration:");
    println!("  Timestamp bits: {}", generator.timestamp_bits());
    println!("  Node bits: {}", config.node_bits());
    println!("  Sequence bits: {}", config.sequence_bits());
    println!("  Max node ID: {}", generator.max_node_id());
    println!("  Max sequence per ms: {}", generator.max_sequence_id());
    println!("  Start time: {:?}", generator.start_time());
    println!("  Runs out at: {:?}", generator.lifetime());

    let id = generator.generate();
    let (elapsed, node, seq) = generator.extract.decompose(id);

    println!("\nGenerated ID: {id}");
    println!("Components:");
    println!("  Timestamp: {elapsed} ms since epoch");
    println!("  Node ID: {node} (of {})", generator.max_node_id());
    println!("  Sequence: {seq} (of {})", generator.max_sequence_id());

    // Same layout driven by SNOWFLAKE_* environment variables
    match SnowflakeConfigBuilder::from_env().build() {
        Ok(env_config) => println!("\nFrom environment: node {}", env_config.node_id()),
        Err(e) => println!("\nEnvironment config rejected: {e}"),
    }

    let too_wide = SnowflakeConfig::builder().node_bits(12).sequence_bits(12).build();
    println!("12 + 12 bits: {too_wide:?}");
}
