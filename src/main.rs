use clap::Parser;
use zoo_inventory::core::ConfigProvider;
use zoo_inventory::utils::error::ErrorSeverity;
use zoo_inventory::utils::{logger, validation::Validate};
use zoo_inventory::{Animal, CliConfig, LocalStorage, Staff, Zoo, ZooKeeperEngine};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if config.json_logs() {
        logger::init_json_logger(config.verbose());
    } else {
        logger::init_cli_logger(config.verbose());
    }

    tracing::info!("Starting zoo CLI");
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let zoo = demo_zoo();

    println!("Animal sounds:");
    for sound in zoo.all_sounds() {
        println!("  {}", sound);
    }

    println!("\nStaff at work:");
    for (staff_index, animal_index) in [(0, 0), (1, 1)] {
        if let Some(lines) = zoo.staff_work(staff_index, animal_index) {
            for line in lines {
                println!("  {}", line);
            }
        }
    }

    let storage = LocalStorage::new(config.data_dir().to_string());
    let engine = ZooKeeperEngine::new(storage, config.file_name())
        .with_unknown_type_policy(config.unknown_type_policy());

    let result = engine.persist(&zoo).and_then(|file| {
        println!("\nZoo saved to '{}'", file);
        engine.restore()
    });

    match result {
        Ok(loaded) => {
            println!("\nLoaded zoo sounds:");
            for sound in loaded.all_sounds() {
                println!("  {}", sound);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Zoo round-trip failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn demo_zoo() -> Zoo {
    let mut zoo = Zoo::new();
    zoo.add_animal(Animal::bird("Sparrow", 2, 15.5));
    zoo.add_animal(Animal::mammal("Lion", 5, "golden"));
    zoo.add_animal(Animal::reptile("Snake", 3, "smooth"));
    zoo.add_staff(Staff::ZooKeeper);
    zoo.add_staff(Staff::Veterinarian);
    zoo
}
