//! Keeps a small fleet of vehicles in a restricted collection, logging as it goes.
//!
//! Usage: `fleet [LOG_LEVEL]`, where the level defaults to debug.

use std::str::FromStr;

use entity_collection::{
    entity_type, full_error_display, CollectionError, CollectionSpecBuilder, Entity,
    EntityCollection, TypePolicy,
};

use anyhow::{anyhow, Context, Result};
use log::{info, warn, LevelFilter};

entity_type! {
    static VEHICLE = "Vehicle";
    static CAR = "Car": [VEHICLE];
    static VAN = "Van": [VEHICLE];
    static DEPOT = "Depot";
}

#[derive(Entity, Debug, Clone)]
#[entity(entity_type = "CAR")]
struct Car {
    #[entity(id)]
    plate: String,
    seats: u8,
}

#[derive(Entity, Debug, Clone)]
#[entity(entity_type = "VAN")]
struct Van {
    #[entity(id)]
    plate: String,
    load_kg: u32,
}

#[derive(Entity, Debug, Clone)]
#[entity(entity_type = "DEPOT")]
struct Depot {
    #[entity(id)]
    number: u32,
    town: String,
}

type Fleet = EntityCollection<Box<dyn Entity>>;

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{}", full_error_display(err));
    }
}

fn try_main() -> Result<()> {
    let level = match std::env::args().nth(1) {
        Some(arg) => {
            LevelFilter::from_str(&arg).map_err(|_| anyhow!("Invalid log level '{}'", arg))?
        }
        None => LevelFilter::Debug,
    };

    // Initialise logger
    simplelog::TermLogger::init(
        level,
        simplelog::ConfigBuilder::new()
            .set_max_level(level)
            .set_thread_mode(simplelog::ThreadLogMode::Names)
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .context("Error initialising logger")?;

    let spec = CollectionSpecBuilder::default()
        .name("fleet")
        .policy(TypePolicy::allowed_types(vec![&VEHICLE]))
        .capacity(4usize)
        .build()
        .context("Error building fleet spec")?;

    let van = Van {
        plate: "VN70 AAA".to_string(),
        load_kg: 1200,
    };

    let mut fleet: Fleet = EntityCollection::from_spec_with(
        spec,
        vec![
            Box::new(Car {
                plate: "AB12 CDE".to_string(),
                seats: 5,
            }) as Box<dyn Entity>,
            Box::new(van.clone()),
            Box::new(Car {
                plate: "XY99 ZZZ".to_string(),
                seats: 2,
            }),
        ],
    )
    .map_err(CollectionError::from)
    .context("Error seeding fleet")?;

    report(&fleet);

    // Depots aren't vehicles
    let depot = Depot {
        number: 1,
        town: "Leeds".to_string(),
    };
    if let Err(err) = fleet.add(Box::new(depot.clone())) {
        warn!("{}", err);
    }
    info!(
        "Depot {} in {} is in the fleet: {}",
        depot.number,
        depot.town,
        fleet.contains(&depot)
    );

    // Re-registering a plate keeps its place
    let refitted = Car {
        plate: "AB12 CDE".to_string(),
        seats: 7,
    };
    info!("Refitting {} with {} seats", refitted.plate, refitted.seats);
    fleet.add(Box::new(refitted))?;

    if fleet.remove(&van).is_some() {
        info!("Sold {} (carried up to {}kg)", van.plate, van.load_kg);
    }

    report(&fleet);

    // Walk a snapshot, retiring cars as we go
    let mut cursor = fleet.cursor();
    let mut retired = 0;
    while let Some((id, is_car)) = cursor
        .next(&fleet)
        .map(|(id, vehicle)| (id.clone(), vehicle.entity_type().is_a(&CAR)))
    {
        if is_car && fleet.remove_by_id(&id).is_some() {
            retired += 1;
        }
    }
    info!("Retired {} cars, {} vehicles left", retired, fleet.count());

    Ok(())
}

fn report(fleet: &Fleet) {
    info!("'{}' has {} vehicles:", fleet.name(), fleet.count());
    for (id, vehicle) in fleet {
        info!("  {} ({})", id, vehicle.entity_type());
    }
}
