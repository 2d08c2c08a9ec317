//! Duel simulator - run one fight between JSON records from the command line
//!
//! ```text
//! duel_sim --attacker data/hero.json --monster data/monster.json --seed 7
//! duel_sim --attacker data/hero.json --defender data/rival.json --json
//! ```

use clap::{Parser, ValueEnum};
use combat_core::{
    create_hero_combatant, create_monster_combatant, execute_fight, load_constants, AttackType, CombatError,
    CombatLogEntry, Combatant, ConfigError, FightResult, GameConstants, HeroRecord, LogEntryKind, MonsterRecord,
    Side,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Simulate a duel between a hero and a monster or another hero
#[derive(Parser, Debug)]
#[command(name = "duel_sim")]
#[command(version, about, long_about = None)]
struct Args {
    /// Attacking hero record (JSON)
    #[arg(short, long)]
    attacker: PathBuf,

    /// Monster record to fight (JSON)
    #[arg(short, long, conflicts_with = "defender", required_unless_present = "defender")]
    monster: Option<PathBuf>,

    /// Hero record to fight (JSON); defends with its class attack type
    #[arg(short, long)]
    defender: Option<PathBuf>,

    /// Attack type of the attacker (defaults to its class attack type)
    #[arg(short = 't', long, value_enum)]
    attack_type: Option<AttackArg>,

    /// RNG seed; a random one is drawn and logged when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Fight budget in milliseconds (defaults to the configured duration)
    #[arg(long)]
    duration: Option<f64>,

    /// Game constants (TOML)
    #[arg(short, long)]
    constants: Option<PathBuf>,

    /// Print the fight result as JSON instead of a readable log
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AttackArg {
    Melee,
    Ranged,
    Cast,
    Smite,
    Blood,
}

impl From<AttackArg> for AttackType {
    fn from(arg: AttackArg) -> Self {
        match arg {
            AttackArg::Melee => AttackType::Melee,
            AttackArg::Ranged => AttackType::Ranged,
            AttackArg::Cast => AttackType::Cast,
            AttackArg::Smite => AttackType::Smite,
            AttackArg::Blood => AttackType::Blood,
        }
    }
}

#[derive(Error, Debug)]
enum DuelError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: {source}", path.display())]
    Record {
        path: PathBuf,
        #[source]
        source: CombatError,
    },
    #[error("Either a monster or a defender is required")]
    MissingOpponent,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Starting health of one side, used to settle it after the fight
struct Opponent {
    combatant: Combatant,
    health: f64,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), DuelError> {
    let constants = match &args.constants {
        Some(path) => load_constants(path)?,
        None => GameConstants::default(),
    };

    let hero = read_record(&args.attacker, HeroRecord::from_json)?;
    let attack_type = args
        .attack_type
        .map(AttackType::from)
        .unwrap_or_else(|| hero.class.default_attack_type());
    let mut attacker = Opponent {
        health: hero.combat.health,
        combatant: create_hero_combatant(&hero, attack_type, &constants.combat),
    };

    let mut victim = if let Some(path) = &args.monster {
        let monster = read_record(path, MonsterRecord::from_json)?;
        Opponent {
            health: monster.combat.health,
            combatant: create_monster_combatant(&monster, &constants.combat),
        }
    } else if let Some(path) = &args.defender {
        let rival = read_record(path, HeroRecord::from_json)?;
        Opponent {
            health: rival.combat.health,
            combatant: create_hero_combatant(&rival, rival.class.default_attack_type(), &constants.combat),
        }
    } else {
        return Err(DuelError::MissingOpponent);
    };

    let seed = args.seed.unwrap_or_else(rand::random::<u64>);
    info!(seed, "seeding duel");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let duration = args.duration.unwrap_or(constants.combat.default_duration);
    debug!(
        attacker = %attacker.combatant.name,
        victim = %victim.combatant.name,
        attacker_speed = attacker.combatant.attack_speed,
        victim_speed = victim.combatant.attack_speed,
        duration,
        "starting duel"
    );
    let result = execute_fight(&mut attacker.combatant, &mut victim.combatant, duration, &constants, &mut rng);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&result, &attacker, &victim);
    }
    Ok(())
}

fn read_record<T>(path: &Path, parse: fn(&str) -> Result<T, CombatError>) -> Result<T, DuelError> {
    let content = fs::read_to_string(path).map_err(|source| DuelError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content).map_err(|source| DuelError::Record {
        path: path.to_path_buf(),
        source,
    })
}

fn print_report(result: &FightResult, attacker: &Opponent, victim: &Opponent) {
    for entry in &result.log {
        println!("{}", describe(entry));
    }
    println!();
    println!("{}", result.summary());

    for (side, opponent) in [(Side::Attacker, attacker), (Side::Victim, victim)] {
        let combatant = &opponent.combatant;
        let health = result.settle_health(side, opponent.health, combatant.max_health.max(opponent.health));
        println!(
            "{}: {:.0}/{:.0} health, {:.0} ms banked",
            combatant.name, health, combatant.max_health, combatant.attack_speed_remainder
        );
    }
}

fn describe(entry: &CombatLogEntry) -> String {
    let damage_type = entry.damage_type.map(|t| format!(" {t}")).unwrap_or_default();
    match entry.kind {
        LogEntryKind::Attack => {
            let crit = if entry.double_critical {
                " (double critical)"
            } else if entry.critical {
                " (critical)"
            } else {
                ""
            };
            format!("{} hits {} for {:.0}{}{}", entry.from, entry.to, entry.damage, damage_type, crit)
        }
        LogEntryKind::Miss => format!("{} misses {}", entry.from, entry.to),
        LogEntryKind::Mesmerized => format!("{} is mesmerized by {}", entry.from, entry.to),
        LogEntryKind::EnchantmentDamage => {
            format!("{} burns {} for {:.0}{}", entry.from, entry.to, entry.damage, damage_type)
        }
        LogEntryKind::LifeSteal | LogEntryKind::EnchantmentHeal | LogEntryKind::VictoryHeal => {
            format!("{} heals {:.0} ({:?})", entry.to, -entry.damage, entry.kind)
        }
    }
}
