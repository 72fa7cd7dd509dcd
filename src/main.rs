use arena_exterior::location::{city_inf_name, wilderness_inf_name};
use arena_exterior::wild::WILD_CHUNKS;
use arena_exterior::{
    BlockType, CityDefinition, ClimateType, WeatherType, generate_city_plan,
    generate_wilderness_indices,
};
use arena_world::{ArenaRandom, GameTables};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "arena", about = "Inspect Arena city and wilderness generation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the block plan of a procedural city
    CityPlan {
        /// City definition (.toml)
        #[arg(long)]
        city: Option<PathBuf>,
        /// City seed, when no definition file is given
        #[arg(long, default_value_t = 0)]
        seed: u32,
        #[arg(long, default_value_t = 4)]
        blocks_per_side: usize,
        /// Block indices kept free for premade buildings
        #[arg(long, value_delimiter = ',')]
        reserved: Vec<u8>,
    },
    /// Print the wilderness chunk ids around a city
    WildIndices {
        /// Game tables (.toml) holding the wilderness block pools
        #[arg(long)]
        tables: PathBuf,
        #[arg(long)]
        seed: u32,
    },
    /// Print the level info filename for a climate and weather
    InfName {
        #[arg(long, value_parser = parse_variant::<ClimateType>, default_value = "Temperate")]
        climate: ClimateType,
        #[arg(long, value_parser = parse_variant::<WeatherType>, default_value = "Clear")]
        weather: WeatherType,
        /// Use the wilderness name instead of the city one
        #[arg(long)]
        wild: bool,
    },
}

fn parse_variant<T: DeserializeOwned>(s: &str) -> Result<T, String> {
    toml::Value::String(s.to_string())
        .try_into()
        .map_err(|e| format!("unknown value '{s}': {e}"))
}

fn block_glyph(block: BlockType) -> char {
    match block {
        BlockType::Empty => '.',
        BlockType::Reserved => '#',
        BlockType::Equipment => 'E',
        BlockType::MagesGuild => 'M',
        BlockType::NobleHouse => 'N',
        BlockType::Temple => 'T',
        BlockType::Tavern => 'V',
        BlockType::Spacer => 'S',
        BlockType::Houses => 'h',
    }
}

fn print_city_plan(city: &CityDefinition) -> Result<(), Box<dyn Error>> {
    let mut rng = ArenaRandom::new(city.city_seed);
    let plan = generate_city_plan(city.blocks_per_side, &city.reserved_blocks, &mut rng)?;
    for row in 0..plan.blocks_per_side() {
        let line: String = (0..plan.blocks_per_side())
            .filter_map(|col| plan.get(col, row))
            .map(block_glyph)
            .collect();
        println!("{line}");
    }
    Ok(())
}

fn print_wild_indices(tables: &GameTables, seed: u32) -> Result<(), Box<dyn Error>> {
    let indices = generate_wilderness_indices(seed, &tables.wild)?;
    for y in 0..WILD_CHUNKS {
        let line: Vec<String> = (0..WILD_CHUNKS)
            .filter_map(|x| indices.get(x, y))
            .map(|id| format!("{id:3}"))
            .collect();
        println!("{}", line.join(""));
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::CityPlan {
            city,
            seed,
            blocks_per_side,
            reserved,
        } => {
            let city = match city {
                Some(path) => CityDefinition::from_path(&path)?,
                None => CityDefinition {
                    city_seed: seed,
                    blocks_per_side,
                    reserved_blocks: reserved,
                    ..CityDefinition::default()
                },
            };
            print_city_plan(&city)
        }
        Command::WildIndices { tables, seed } => {
            let tables = GameTables::from_path(&tables)?;
            print_wild_indices(&tables, seed)
        }
        Command::InfName {
            climate,
            weather,
            wild,
        } => {
            let name = if wild {
                wilderness_inf_name(climate, weather)
            } else {
                city_inf_name(climate, weather)
            };
            println!("{name}");
            Ok(())
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
