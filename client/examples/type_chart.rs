use std::env;

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use typedex_client::coverage::{ElementalType, defensive_row};
use typedex_client::{BuiltinTypes, PokeApiClient, load_type_graph};

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // `--offline` prints the built-in chart instead of fetching it
    let offline = env::args().any(|a| a == "--offline");
    let graph = if offline {
        load_type_graph(&BuiltinTypes).await?
    } else {
        load_type_graph(&PokeApiClient::new()?).await?
    };

    print!("{:>9}", "");
    for defender in ElementalType::ALL {
        print!(" {:>4}", &defender.as_str()[..3]);
    }
    println!();

    for attacker in ElementalType::ALL {
        print!("{:>9}", attacker.as_str());
        for defender in ElementalType::ALL {
            print!(" {:>4}", graph.multiplier(attacker, defender)?);
        }
        println!();
    }

    let types: Vec<ElementalType> = env::args()
        .skip(1)
        .filter(|a| !a.starts_with("--"))
        .filter_map(|a| a.parse().ok())
        .collect();
    if !types.is_empty() {
        let row = defensive_row(&graph, &types)?;
        println!("\nDamage taken by {:?}:", types);
        for (t, m) in row.iter().filter(|(_, m)| *m != 1.0) {
            println!("  {:<9} x{}", t.as_str(), m);
        }
    }

    Ok(())
}
